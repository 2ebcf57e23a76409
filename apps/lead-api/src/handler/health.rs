//! # ヘルスチェックハンドラ
//!
//! Lead API の稼働状態を確認するためのエンドポイント。
//!
//! ## エンドポイント
//!
//! ```text
//! GET /health
//! ```
//!
//! ## レスポンス例
//!
//! ```json
//! {
//!   "status": "healthy",
//!   "version": "0.1.0"
//! }
//! ```

use axum::Json;
use drvclinic_shared::HealthResponse;

/// ヘルスチェックエンドポイント
///
/// サーバーが正常に稼働していることを確認するためのエンドポイント。
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status:  "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
