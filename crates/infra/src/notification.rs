//! # 通知送信
//!
//! メール通知の送信を担当するインフラストラクチャモジュール。
//!
//! ## 設計方針
//!
//! - **trait による抽象化**: `NotificationSender` trait でメール送信を抽象化
//! - **2 つの実装**: SMTP（本番・開発用）、Noop（認証情報未設定時のログ専用モード）
//! - **実行時切替**: `EMAIL_PASS` の有無で lead-api 起動時に選択される

mod noop;
mod smtp;

use async_trait::async_trait;
use drvclinic_domain::notification::{EmailMessage, NotificationError};
pub use noop::NoopNotificationSender;
pub use smtp::SmtpNotificationSender;

/// メール送信トレイト
///
/// 通知基盤の中核。メール送信の具体的な方法を抽象化する。
/// SMTP / Noop の 2 実装を認証情報の有無で切り替える。
#[async_trait]
pub trait NotificationSender: Send + Sync {
    /// メールを送信する
    async fn send_email(&self, email: &EmailMessage) -> Result<(), NotificationError>;
}
