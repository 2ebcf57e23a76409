//! # テンプレートレンダラー
//!
//! tera テンプレートエンジンで通知メールを HTML/plaintext 両形式で生成する。
//!
//! ## 設計方針
//!
//! - **`include_str!` によるコンパイル時埋め込み**: テンプレートはバイナリに埋め込まれる
//! - **差出人の使い分け**: 管理者向けは申込者名義（Reply-To も申込者）、
//!   受付確認はクリニック名義
//! - **プレースホルダ行の抑制**: 年齢・パターン・メッセージが未入力
//!   （プレースホルダ値）の場合、該当行をテンプレートから除外する

use drvclinic_domain::{
    consultation::Consultation,
    dates,
    notification::{ConsultationNotification, EmailMessage, NotificationError},
};
use tera::{Context, Tera};

use super::mailer::LegacyEmailRequest;

/// 旧エンドポイントのデフォルト件名
const LEGACY_DEFAULT_SUBJECT: &str = "New Hair Loss Consultation Request";

/// テンプレートレンダラー
///
/// tera テンプレートエンジンをラップし、[`ConsultationNotification`] から
/// [`EmailMessage`] を生成する。
pub struct TemplateRenderer {
    engine: Tera,
}

impl TemplateRenderer {
    /// 新しいレンダラーインスタンスを作成
    ///
    /// `include_str!` で埋め込んだテンプレートを tera に登録する。
    pub fn new() -> Result<Self, NotificationError> {
        let mut engine = Tera::default();

        engine
            .add_raw_templates(vec![
                (
                    "consultation_admin.html",
                    include_str!("../../templates/mail/consultation_admin.html"),
                ),
                (
                    "consultation_admin.txt",
                    include_str!("../../templates/mail/consultation_admin.txt"),
                ),
                (
                    "consultation_confirmation.html",
                    include_str!("../../templates/mail/consultation_confirmation.html"),
                ),
                (
                    "consultation_confirmation.txt",
                    include_str!("../../templates/mail/consultation_confirmation.txt"),
                ),
                (
                    "legacy_notification.html",
                    include_str!("../../templates/mail/legacy_notification.html"),
                ),
                (
                    "legacy_notification.txt",
                    include_str!("../../templates/mail/legacy_notification.txt"),
                ),
            ])
            .map_err(|e| NotificationError::TemplateFailed(e.to_string()))?;

        Ok(Self { engine })
    }

    /// 通知イベントからメールメッセージを生成する
    ///
    /// # 引数
    ///
    /// - `notification`: 相談通知イベント
    /// - `from_address`: 認証アカウントのメールアドレス（クリニック名義の差出人）
    pub fn render(
        &self,
        notification: &ConsultationNotification,
        from_address: &str,
    ) -> Result<EmailMessage, NotificationError> {
        let consultation = notification.consultation();
        let context = Self::build_context(consultation);

        let (template_name, from, reply_to) = match notification {
            ConsultationNotification::AdminRequest { .. } => (
                "consultation_admin",
                Some(format!(
                    "\"{}\" <{}>",
                    consultation.name, consultation.email
                )),
                Some(consultation.email.clone()),
            ),
            ConsultationNotification::UserConfirmation { .. } => (
                "consultation_confirmation",
                Some(format!("\"DRV Hair Clinic\" <{from_address}>")),
                None,
            ),
        };

        let html_body = self.render_pair(template_name, "html", &context)?;
        let text_body = self.render_pair(template_name, "txt", &context)?;

        Ok(EmailMessage {
            to: notification.recipient_email().to_string(),
            from,
            reply_to,
            subject: notification.subject(),
            html_body,
            text_body,
        })
    }

    /// 旧エンドポイントのリクエストからメールメッセージを生成する
    ///
    /// 宛先・差出人の決定はリクエスト本文を無視して設定値に従う
    /// （差出人は送信器のデフォルト = 認証アカウント）。
    pub fn render_legacy(
        &self,
        request: &LegacyEmailRequest,
        admin_email: &str,
    ) -> Result<EmailMessage, NotificationError> {
        // 欠損フィールドは空文字で埋める（tera は null を描画できない）
        let mut context = Context::new();
        context.insert("patient_name", request.patient_name.as_deref().unwrap_or(""));
        context.insert(
            "patient_email",
            request.patient_email.as_deref().unwrap_or(""),
        );
        context.insert(
            "patient_phone",
            request.patient_phone.as_deref().unwrap_or(""),
        );
        context.insert("patient_age", request.patient_age.as_deref().unwrap_or(""));
        context.insert("gender", request.gender.as_deref().unwrap_or(""));
        context.insert(
            "hair_loss_pattern",
            request.hair_loss_pattern.as_deref().unwrap_or(""),
        );
        context.insert(
            "preferred_date",
            request.preferred_date.as_deref().unwrap_or(""),
        );
        context.insert(
            "additional_info",
            request.additional_info.as_deref().unwrap_or(""),
        );
        context.insert(
            "submission_date",
            request.submission_date.as_deref().unwrap_or(""),
        );

        let html_body = self.render_pair("legacy_notification", "html", &context)?;
        let text_body = match &request.message {
            Some(message) => message.clone(),
            None => self.render_pair("legacy_notification", "txt", &context)?,
        };

        Ok(EmailMessage {
            to: admin_email.to_string(),
            from: None,
            reply_to: None,
            subject: request
                .subject
                .clone()
                .unwrap_or_else(|| LEGACY_DEFAULT_SUBJECT.to_string()),
            html_body,
            text_body,
        })
    }

    fn render_pair(
        &self,
        template_name: &str,
        extension: &str,
        context: &Context,
    ) -> Result<String, NotificationError> {
        self.engine
            .render(&format!("{template_name}.{extension}"), context)
            .map_err(|e| NotificationError::TemplateFailed(e.to_string()))
    }

    /// 相談リクエストからテンプレートコンテキストを構築する
    ///
    /// 年齢・パターン・メッセージはプレースホルダ値のままなら行ごと
    /// 非表示にするため、存在フラグも併せて渡す。
    fn build_context(consultation: &Consultation) -> Context {
        let mut context = Context::new();
        context.insert("name", &consultation.name);
        context.insert("email", &consultation.email);
        context.insert("phone", &consultation.phone);
        context.insert("age", &consultation.age);
        context.insert("has_age", &(consultation.age != "Not provided"));
        context.insert("consultation_type", &consultation.consultation_type);
        context.insert("selected_pattern", &consultation.selected_pattern);
        context.insert(
            "has_pattern",
            &(consultation.selected_pattern != "Not selected"),
        );
        context.insert(
            "preferred_date",
            &dates::format_date(&consultation.preferred_date),
        );
        context.insert("message", &consultation.message);
        context.insert(
            "has_message",
            &(consultation.message != "No additional message provided"),
        );
        context.insert(
            "submitted_at",
            &dates::format_timestamp(consultation.received_at),
        );
        context
    }
}

#[cfg(test)]
mod tests {
    use drvclinic_domain::consultation::ConsultationForm;
    use pretty_assertions::assert_eq;

    use super::*;

    fn make_consultation() -> Consultation {
        Consultation::from_form(ConsultationForm {
            name: Some("Jane Doe".to_string()),
            email: Some("jane@example.com".to_string()),
            phone: Some("9195551234".to_string()),
            consultation_type: Some("Hair Transplant".to_string()),
            preferred_date: Some("2024-03-05".to_string()),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn 管理者向けメールは申込者名義になる() {
        let renderer = TemplateRenderer::new().unwrap();
        let notification = ConsultationNotification::AdminRequest {
            consultation: make_consultation(),
            admin_email:  "admin@drvhairclinic.com".to_string(),
        };

        let email = renderer.render(&notification, "clinic@example.com").unwrap();

        assert_eq!(email.to, "admin@drvhairclinic.com");
        assert_eq!(
            email.from.as_deref(),
            Some("\"Jane Doe\" <jane@example.com>")
        );
        assert_eq!(email.reply_to.as_deref(), Some("jane@example.com"));
        assert_eq!(
            email.subject,
            "In-Clinic Consultation Request - Hair Transplant"
        );
        assert!(email.html_body.contains("Jane Doe"));
        assert!(email.html_body.contains("Tue, Mar 5, 2024"));
        assert!(email.text_body.contains("Jane Doe"));
    }

    #[test]
    fn 受付確認メールはクリニック名義になる() {
        let renderer = TemplateRenderer::new().unwrap();
        let notification = ConsultationNotification::UserConfirmation {
            consultation: make_consultation(),
        };

        let email = renderer.render(&notification, "clinic@example.com").unwrap();

        assert_eq!(email.to, "jane@example.com");
        assert_eq!(
            email.from.as_deref(),
            Some("\"DRV Hair Clinic\" <clinic@example.com>")
        );
        assert_eq!(email.reply_to, None);
        assert_eq!(
            email.subject,
            "Consultation Request Received - DRV Hair Clinic"
        );
        assert!(email.html_body.contains("Hair Transplant"));
    }

    #[test]
    fn プレースホルダ値の行はメールに含まれない() {
        let renderer = TemplateRenderer::new().unwrap();
        let notification = ConsultationNotification::AdminRequest {
            consultation: make_consultation(),
            admin_email:  "admin@drvhairclinic.com".to_string(),
        };

        let email = renderer.render(&notification, "clinic@example.com").unwrap();

        // 年齢・パターン・メッセージは未入力なので行ごと非表示
        assert!(!email.html_body.contains("Not provided"));
        assert!(!email.html_body.contains("Not selected"));
        assert!(!email.html_body.contains("No additional message provided"));
    }

    #[test]
    fn 任意項目が入力されていれば行が表示される() {
        let renderer = TemplateRenderer::new().unwrap();
        let consultation = Consultation::from_form(ConsultationForm {
            name: Some("Jane Doe".to_string()),
            email: Some("jane@example.com".to_string()),
            phone: Some("9195551234".to_string()),
            age: Some("34".to_string()),
            selected_pattern: Some(
                "Male - Pattern Stage 3: Deepening recession".to_string(),
            ),
            message: Some("Weekend appointments preferred".to_string()),
            ..Default::default()
        })
        .unwrap();
        let notification = ConsultationNotification::AdminRequest {
            consultation,
            admin_email: "admin@drvhairclinic.com".to_string(),
        };

        let email = renderer.render(&notification, "clinic@example.com").unwrap();

        assert!(email.html_body.contains("34 years"));
        assert!(email.html_body.contains("Deepening recession"));
        assert!(email.html_body.contains("Weekend appointments preferred"));
    }

    #[test]
    fn 旧エンドポイントは件名とテキスト本文を上書きできる() {
        let renderer = TemplateRenderer::new().unwrap();
        let request = LegacyEmailRequest {
            subject: Some("Custom subject".to_string()),
            patient_name: Some("John Doe".to_string()),
            message: Some("plaintext body".to_string()),
            ..Default::default()
        };

        let email = renderer
            .render_legacy(&request, "admin@drvhairclinic.com")
            .unwrap();

        assert_eq!(email.to, "admin@drvhairclinic.com");
        assert_eq!(email.from, None);
        assert_eq!(email.subject, "Custom subject");
        assert_eq!(email.text_body, "plaintext body");
        assert!(email.html_body.contains("John Doe"));
    }

    #[test]
    fn 旧エンドポイントの件名デフォルト() {
        let renderer = TemplateRenderer::new().unwrap();
        let request = LegacyEmailRequest::default();

        let email = renderer
            .render_legacy(&request, "admin@drvhairclinic.com")
            .unwrap();

        assert_eq!(email.subject, "New Hair Loss Consultation Request");
    }
}
