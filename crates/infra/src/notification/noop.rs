//! ログ専用の通知送信実装
//!
//! SMTP 認証情報が未設定の環境（ローカル開発など）で使用する。
//! 実際のメール送信は行わず、送信内容をログに出力するだけ。

use async_trait::async_trait;
use drvclinic_domain::notification::{EmailMessage, NotificationError};

use super::NotificationSender;

/// ログ専用の通知送信
///
/// メールを送信せず、宛先と件名をログに記録して常に成功を返す。
/// 認証情報未設定時の lead-api はこの実装で起動する。
#[derive(Default)]
pub struct NoopNotificationSender;

impl NoopNotificationSender {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl NotificationSender for NoopNotificationSender {
    async fn send_email(&self, email: &EmailMessage) -> Result<(), NotificationError> {
        tracing::info!(
            to = %email.to,
            subject = %email.subject,
            "メール送信スキップ（ログ専用モード）"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn 送信は常に成功する() {
        let sender = NoopNotificationSender::new();
        let email = EmailMessage {
            to:        "visitor@example.com".to_string(),
            from:      None,
            reply_to:  None,
            subject:   "テスト".to_string(),
            html_body: "<p>test</p>".to_string(),
            text_body: "test".to_string(),
        };

        assert!(sender.send_email(&email).await.is_ok());
    }
}
