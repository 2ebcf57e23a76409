//! # テスト用モック実装
//!
//! `NotificationSender` のモック実装を提供する。
//! `test-utils` feature を有効にすると他クレートのテストからも使用できる。

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use drvclinic_domain::notification::{EmailMessage, NotificationError};

use crate::notification::NotificationSender;

/// テスト用のメール送信モック
///
/// 送信されたメールをメモリに蓄積し、テストから検証できるようにする。
/// `fail_with` で失敗を注入すると以降の送信はすべてエラーを返す。
#[derive(Clone, Default)]
pub struct MockNotificationSender {
   sent:    Arc<Mutex<Vec<EmailMessage>>>,
   failure: Arc<Mutex<Option<String>>>,
}

impl MockNotificationSender {
   pub fn new() -> Self {
      Self::default()
   }

   /// 以降の送信をすべて失敗させる
   pub fn fail_with(&self, message: impl Into<String>) {
      *self.failure.lock().unwrap() = Some(message.into());
   }

   /// これまでに送信されたメールの一覧を返す
   pub fn sent_emails(&self) -> Vec<EmailMessage> {
      self.sent.lock().unwrap().clone()
   }
}

#[async_trait]
impl NotificationSender for MockNotificationSender {
   async fn send_email(&self, email: &EmailMessage) -> Result<(), NotificationError> {
      if let Some(message) = self.failure.lock().unwrap().clone() {
         return Err(NotificationError::SendFailed(message));
      }
      self.sent.lock().unwrap().push(email.clone());
      Ok(())
   }
}

#[cfg(test)]
mod tests {
   use pretty_assertions::assert_eq;

   use super::*;

   fn make_email(subject: &str) -> EmailMessage {
      EmailMessage {
         to:        "visitor@example.com".to_string(),
         from:      None,
         reply_to:  None,
         subject:   subject.to_string(),
         html_body: "<p>test</p>".to_string(),
         text_body: "test".to_string(),
      }
   }

   #[tokio::test]
   async fn 送信したメールが記録される() {
      let sender = MockNotificationSender::new();

      sender.send_email(&make_email("1 通目")).await.unwrap();
      sender.send_email(&make_email("2 通目")).await.unwrap();

      let sent = sender.sent_emails();
      assert_eq!(sent.len(), 2);
      assert_eq!(sent[0].subject, "1 通目");
      assert_eq!(sent[1].subject, "2 通目");
   }

   #[tokio::test]
   async fn 失敗注入後の送信はエラーになり記録されない() {
      let sender = MockNotificationSender::new();
      sender.fail_with("接続タイムアウト");

      let result = sender.send_email(&make_email("届かない")).await;

      assert!(matches!(
         result,
         Err(NotificationError::SendFailed(msg)) if msg == "接続タイムアウト"
      ));
      assert!(sender.sent_emails().is_empty());
   }
}
