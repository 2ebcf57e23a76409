//! # 相談フォーム受付ハンドラ
//!
//! マーケティングサイトの相談フォーム送信を受け付ける。
//!
//! ## エンドポイント
//!
//! ```text
//! POST /api/send-consultation
//! ```
//!
//! ## レスポンス契約
//!
//! - 検証失敗（必須欠損・メール形式不正）→ 400 + `{"success": false, ...}`
//! - 検証通過 → 常に 200 + `{"success": true, "emailSent": <bool>}`
//!
//! メール送信の失敗は受付の失敗ではない。`emailSent: false` で通知され、
//! リクエスト内容はログから回収できる。

use std::sync::Arc;

use axum::{Json, extract::State};
use drvclinic_domain::consultation::{Consultation, ConsultationForm};
use drvclinic_shared::{ConsultationAck, event_log::event, log_business_event};

use crate::{AppState, error::ApiError};

/// 相談フォーム受付エンドポイント
///
/// 検証・正規化 → 受付ログ → 通知メール 2 通の送信（fire-and-forget）。
pub async fn receive_consultation(
    State(state): State<Arc<AppState>>,
    Json(form): Json<ConsultationForm>,
) -> Result<Json<ConsultationAck>, ApiError> {
    let consultation = Consultation::from_form(form)?;

    log_business_event!(
        event.category = event::category::CONSULTATION,
        event.action = event::action::CONSULTATION_RECEIVED,
        event.entity_type = event::entity_type::CONSULTATION,
        event.entity_id = %consultation.id,
        event.result = event::result::SUCCESS,
        consultation.email = %consultation.email,
        consultation.consultation_type = %consultation.consultation_type,
        "相談リクエスト受付"
    );

    let email_sent = state.mailer.deliver(&consultation).await;

    Ok(Json(ConsultationAck::received(email_sent)))
}
