//! # ドメイン層エラー定義
//!
//! ビジネスルール違反やドメイン固有の例外状態を表現するエラー型。
//!
//! ## 設計方針
//!
//! - **型による分類**: エラーの種類を列挙型で明示し、パターンマッチで処理可能に
//! - **thiserror 活用**: `#[error(...)]` マクロでエラーメッセージを自動生成
//! - **HTTP ステータスへのマッピング**: API 層でステータスコードに変換可能
//!
//! ## エラーの種類と HTTP ステータスの対応
//!
//! | エラー種別 | HTTP ステータス | 用途 |
//! |-----------|----------------|------|
//! | `Validation` | 400 Bad Request | 入力値の検証失敗 |
//!
//! ## メッセージの言語について
//!
//! `Validation` のメッセージはフォーム API の公開契約としてそのままレスポンスに
//! 載るため、英語で保持する（例: `"Invalid email format"`）。

use thiserror::Error;

/// ドメイン層で発生するエラー
///
/// ビジネスロジックの実行中に発生する例外状態を表現する。
/// API 層でこのエラーを受け取り、適切な HTTP レスポンスに変換する。
#[derive(Debug, Error)]
pub enum DomainError {
    /// バリデーションエラー
    ///
    /// 入力値がビジネスルールに違反している場合に使用する。
    ///
    /// # 例
    ///
    /// - 必須フィールドが未入力
    /// - 不正なメールアドレス形式
    #[error("{0}")]
    Validation(String),
}
