//! # DRV Clinic ドメイン層
//!
//! 相談リクエスト（リードキャプチャ）のビジネスロジックを担うドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! このクレートは以下を提供する:
//!
//! - **値オブジェクト**: 検証・正規化済みの相談リクエスト（例: [`consultation::Consultation`]）
//! - **コンパイル時定義のカタログ**: 性別ごとの脱毛パターン表（[`pattern`]）
//! - **純粋リデューサ**: パターン選択の同期状態（[`selection`]）
//! - **ドメインエラー**: ビジネスルール違反を表現するエラー型
//!
//! ## 依存関係の方向
//!
//! ```text
//! lead-api → infra → domain → shared
//! ```
//!
//! ドメイン層はインフラ層（SMTP、チャネル）には一切依存しない。
//! これにより、検証・正規化・リデューサのロジックが純粋に保たれる。
//!
//! ## モジュール構成
//!
//! - [`consultation`] - 相談リクエストの検証と正規化
//! - [`dates`] - メールテンプレート向け日付整形
//! - [`error`] - ドメイン層で発生するエラーの定義
//! - [`notification`] - メール通知のドメインモデル
//! - [`pattern`] - 脱毛パターンカタログ
//! - [`selection`] - パターン選択イベントと同期状態

#[macro_use]
mod macros;

pub mod consultation;
pub mod dates;
pub mod error;
pub mod notification;
pub mod pattern;
pub mod selection;

pub use error::DomainError;
