//! # 相談通知メールの送信フロー
//!
//! テンプレートレンダリング → メール送信 → ログ記録を統合するサービス。
//!
//! ## 設計方針
//!
//! - **fire-and-forget**: [`ConsultationMailer::deliver`] は送信失敗しても
//!   エラーを返さず、成否を `bool` で返す。フォーム受付は常に成功する
//! - **2 通同時送信**: 管理者向け通知と申込者向け受付確認を並行送信し、
//!   両方成功した場合のみ `emailSent: true` とする
//! - **ログ専用モード**: 認証情報未設定時は送信せず、リクエスト内容を
//!   整形してログに残す（内容は失われない）

use std::sync::Arc;

use drvclinic_domain::{
    consultation::Consultation,
    notification::{ConsultationNotification, NotificationError},
};
use drvclinic_infra::notification::NotificationSender;
use drvclinic_shared::{event_log::event, log_business_event};
use serde::Deserialize;

use super::TemplateRenderer;
use crate::error::ApiError;

/// 旧メール送信エンドポイント（`POST /api/send-email`）のリクエスト本文
///
/// すべて任意フィールド。`to_email` / `from_name` / `from_email` は
/// 互換性のため受理するが、宛先・差出人の決定には使わない
/// （宛先は常に管理者メールボックス、差出人は認証アカウント）。
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LegacyEmailRequest {
    pub to_email:          Option<String>,
    pub from_name:         Option<String>,
    pub from_email:        Option<String>,
    pub subject:           Option<String>,
    pub gender:            Option<String>,
    pub hair_loss_pattern: Option<String>,
    pub patient_name:      Option<String>,
    pub patient_email:     Option<String>,
    pub patient_phone:     Option<String>,
    pub patient_age:       Option<String>,
    pub preferred_date:    Option<String>,
    pub additional_info:   Option<String>,
    pub submission_date:   Option<String>,
    pub message:           Option<String>,
}

/// 相談通知メールの送信フロー
///
/// 相談リクエスト 1 件につき管理者向け通知と申込者向け受付確認の
/// 2 通を並行送信する。
pub struct ConsultationMailer {
    sender:       Arc<dyn NotificationSender>,
    renderer:     TemplateRenderer,
    admin_email:  String,
    from_address: String,
    configured:   bool,
}

impl ConsultationMailer {
    /// 新しい送信フローを作成する
    ///
    /// `configured` が `false` の場合（認証情報未設定・プレースホルダ検出）、
    /// [`deliver`](Self::deliver) は送信を行わず常に `false` を返す。
    pub fn new(
        sender: Arc<dyn NotificationSender>,
        renderer: TemplateRenderer,
        admin_email: String,
        from_address: String,
        configured: bool,
    ) -> Self {
        Self {
            sender,
            renderer,
            admin_email,
            from_address,
            configured,
        }
    }

    /// 相談リクエストの通知メール 2 通を送信する（fire-and-forget）
    ///
    /// 戻り値は `emailSent` フィールドにそのまま載る。送信失敗しても
    /// エラーは返さず、リクエスト内容をログに残して `false` を返す。
    pub async fn deliver(&self, consultation: &Consultation) -> bool {
        if !self.configured {
            log_business_event!(
                event.category = event::category::NOTIFICATION,
                event.action = event::action::NOTIFICATION_SKIPPED,
                event.entity_type = event::entity_type::EMAIL,
                event.entity_id = %consultation.id,
                event.result = event::result::SKIPPED,
                "メール未設定のため送信スキップ"
            );
            self.log_consultation_payload(consultation);
            return false;
        }

        match self.send_both(consultation).await {
            Ok(()) => {
                log_business_event!(
                    event.category = event::category::NOTIFICATION,
                    event.action = event::action::NOTIFICATION_SENT,
                    event.entity_type = event::entity_type::EMAIL,
                    event.entity_id = %consultation.id,
                    event.result = event::result::SUCCESS,
                    notification.recipient = %self.admin_email,
                    "相談通知メール送信成功"
                );
                true
            }
            Err(e) => {
                log_business_event!(
                    event.category = event::category::NOTIFICATION,
                    event.action = event::action::NOTIFICATION_FAILED,
                    event.entity_type = event::entity_type::EMAIL,
                    event.entity_id = %consultation.id,
                    event.result = event::result::FAILURE,
                    error = %e,
                    "相談通知メール送信失敗"
                );
                // 送信に失敗してもリクエスト内容は失わない
                self.log_consultation_payload(consultation);
                false
            }
        }
    }

    /// 管理者向け通知と受付確認を並行送信する
    async fn send_both(&self, consultation: &Consultation) -> Result<(), NotificationError> {
        let admin_notification = ConsultationNotification::AdminRequest {
            consultation: consultation.clone(),
            admin_email:  self.admin_email.clone(),
        };
        let user_notification = ConsultationNotification::UserConfirmation {
            consultation: consultation.clone(),
        };

        let admin_email = self.renderer.render(&admin_notification, &self.from_address)?;
        let user_email = self.renderer.render(&user_notification, &self.from_address)?;

        let (admin_result, user_result) = tokio::join!(
            self.sender.send_email(&admin_email),
            self.sender.send_email(&user_email),
        );
        admin_result?;
        user_result?;
        Ok(())
    }

    /// 旧エンドポイントのメールを送信する
    ///
    /// 旧エンドポイントのみ送信失敗を呼び出し元に返す（500 になる）。
    pub async fn deliver_legacy(&self, request: &LegacyEmailRequest) -> Result<(), ApiError> {
        let email = self
            .renderer
            .render_legacy(request, &self.admin_email)
            .map_err(|e| ApiError::LegacySendFailed(e.to_string()))?;

        self.sender
            .send_email(&email)
            .await
            .map_err(|e| ApiError::LegacySendFailed(e.to_string()))
    }

    /// リクエスト内容を整形してログに残す
    ///
    /// メールが届かないケース（未設定・送信失敗）でもリードを
    /// ログから回収できるようにする。
    fn log_consultation_payload(&self, consultation: &Consultation) {
        match serde_json::to_string_pretty(consultation) {
            Ok(payload) => tracing::info!(
                consultation_id = %consultation.id,
                "相談リクエスト内容:\n{}",
                payload
            ),
            Err(e) => tracing::warn!("相談リクエストのシリアライズに失敗: {}", e),
        }
    }
}
