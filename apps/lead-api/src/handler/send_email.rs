//! # 旧メール送信エンドポイント（互換用）
//!
//! 旧フロントエンドが使用していたメール送信エンドポイント。
//! 後方互換のため維持している。
//!
//! ## エンドポイント
//!
//! ```text
//! POST /api/send-email
//! ```
//!
//! ## 相談フォーム受付との違い
//!
//! - 検証なし（すべて任意フィールド）
//! - 送信は管理者向け 1 通のみ（受付確認なし）
//! - 送信失敗は 500 で呼び出し元に返す

use std::sync::Arc;

use axum::{Json, extract::State};
use drvclinic_shared::LegacyAck;

use crate::{AppState, error::ApiError, usecase::LegacyEmailRequest};

/// 旧メール送信エンドポイント
pub async fn send_legacy_email(
    State(state): State<Arc<AppState>>,
    Json(request): Json<LegacyEmailRequest>,
) -> Result<Json<LegacyAck>, ApiError> {
    state.mailer.deliver_legacy(&request).await?;

    Ok(Json(LegacyAck::sent()))
}
