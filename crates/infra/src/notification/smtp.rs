//! SMTP 通知送信実装
//!
//! lettre の `AsyncSmtpTransport` を使用してメールを送信する。
//! Gmail などの SMTP リレーに STARTTLS（587）または暗黙 TLS（465）で接続する。

use async_trait::async_trait;
use drvclinic_domain::notification::{EmailMessage, NotificationError};
use lettre::{
    AsyncSmtpTransport,
    AsyncTransport,
    Tokio1Executor,
    message::{Mailbox, Message, MultiPart, SinglePart, header::ContentType},
    transport::smtp::authentication::Credentials,
};

use super::NotificationSender;
use crate::InfraError;

/// SMTP 通知送信
///
/// `lettre::AsyncSmtpTransport<Tokio1Executor>` をラップする。
///
/// 管理者向け通知は申込者名義の From で届くが、エンベロープの差出人
/// （MAIL FROM）は常に認証アカウントに固定する。SMTP サーバーによっては
/// 認証アカウント以外のエンベロープ差出人を拒否するため。
pub struct SmtpNotificationSender {
    transport:    AsyncSmtpTransport<Tokio1Executor>,
    from_address: String,
}

impl SmtpNotificationSender {
    /// 新しい SMTP 送信インスタンスを作成
    ///
    /// # 引数
    ///
    /// - `host`: SMTP サーバーのホスト名（例: "smtp.gmail.com"）
    /// - `port`: SMTP サーバーのポート番号（465 / 587）
    /// - `secure`: `true` なら暗黙 TLS（465）、`false` なら STARTTLS（587）
    /// - `username` / `password`: SMTP 認証情報
    /// - `from_address`: 認証アカウントのメールアドレス（エンベロープ差出人）
    pub fn new(
        host: &str,
        port: u16,
        secure: bool,
        username: String,
        password: String,
        from_address: String,
    ) -> Result<Self, InfraError> {
        let builder = if secure {
            AsyncSmtpTransport::<Tokio1Executor>::relay(host)?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host)?
        };

        let transport = builder
            .port(port)
            .credentials(Credentials::new(username, password))
            .build();

        Ok(Self {
            transport,
            from_address,
        })
    }

    /// エンベロープ差出人（認証アカウント）の Mailbox を返す
    fn sender_mailbox(&self) -> Result<Mailbox, NotificationError> {
        self.from_address
            .parse()
            .map_err(|e| NotificationError::SendFailed(format!("送信元アドレス不正: {e}")))
    }
}

#[async_trait]
impl NotificationSender for SmtpNotificationSender {
    async fn send_email(&self, email: &EmailMessage) -> Result<(), NotificationError> {
        // 表示上の From はメッセージごとに上書きできる（管理者向けは申込者名義）。
        // Sender ヘッダーを認証アカウントに固定し、エンベロープはそちらに従う。
        let from: Mailbox = match &email.from {
            Some(from) => from
                .parse()
                .map_err(|e| NotificationError::SendFailed(format!("差出人アドレス不正: {e}")))?,
            None => self.sender_mailbox()?,
        };

        let mut builder = Message::builder()
            .sender(self.sender_mailbox()?)
            .from(from)
            .to(email
                .to
                .parse()
                .map_err(|e| NotificationError::SendFailed(format!("宛先アドレス不正: {e}")))?)
            .subject(&email.subject);

        if let Some(reply_to) = &email.reply_to {
            builder = builder.reply_to(reply_to.parse().map_err(|e| {
                NotificationError::SendFailed(format!("Reply-To アドレス不正: {e}"))
            })?);
        }

        let message = builder
            .multipart(
                MultiPart::alternative()
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_PLAIN)
                            .body(email.text_body.clone()),
                    )
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_HTML)
                            .body(email.html_body.clone()),
                    ),
            )
            .map_err(|e| NotificationError::SendFailed(format!("メッセージ構築失敗: {e}")))?;

        self.transport
            .send(message)
            .await
            .map_err(|e| NotificationError::SendFailed(format!("SMTP 送信失敗: {e}")))?;

        Ok(())
    }
}
