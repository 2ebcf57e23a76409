//! # Lead API サーバーライブラリ
//!
//! DRV Hair Clinic のマーケティングサイトを支える単一サーバー。
//!
//! ## アーキテクチャ
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Browser   │────▶│  Lead API   │────▶│  SMTP リレー │
//! │  (SPA/フォーム)│     │ (port 3001) │     │  (Gmail 等)  │
//! └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! Lead API は 2 つの役割を兼ねる:
//!
//! - **静的サイト配信**: ビルド済み SPA（`dist/`）の配信と
//!   クライアントサイドルーティング用の index.html フォールバック
//! - **メールリレー**: 相談フォームの受付と通知メールの送信
//!
//! ## モジュール構成
//!
//! - [`config`] - アプリケーション設定（環境変数からの読み込み）
//! - [`error`] - API エラー定義と HTTP レスポンスへの変換
//! - [`handler`] - HTTP リクエストハンドラ
//! - [`usecase`] - 通知メールの組み立てと送信フロー
//!
//! ## 依存関係
//!
//! - `drvclinic_domain`: 相談リクエストの検証・正規化、パターンカタログ
//! - `drvclinic_infra`: SMTP / Noop メール送信
//! - `drvclinic_shared`: レスポンスエンベロープ、observability 基盤

pub mod config;
pub mod error;
pub mod handler;
pub mod usecase;

use std::sync::Arc;

use axum::{
   Router,
   routing::{get, post},
};
use drvclinic_shared::observability::{MakeRequestUuidV7, make_request_span};
use handler::{health_check, receive_consultation, send_legacy_email};
use tower_http::{
   compression::CompressionLayer,
   cors::CorsLayer,
   request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
   services::{ServeDir, ServeFile},
   trace::TraceLayer,
};
use usecase::ConsultationMailer;

/// アプリケーション全体の共有状態
pub struct AppState {
   /// 相談通知メールの送信フロー
   pub mailer: ConsultationMailer,
}

/// ルーターを構築する
///
/// レイヤーの適用順に注意: axum ではレイヤーは下から上に実行されるため、
/// `SetRequestIdLayer` を最後に追加して最初に実行されるようにする。
/// `/api` 以下にマッチしないリクエストは静的サイト（SPA）に委譲し、
/// 存在しないパスは index.html にフォールバックする。
pub fn build_app(state: Arc<AppState>, static_dir: &str) -> Router {
   let index = format!("{static_dir}/index.html");
   let static_site = ServeDir::new(static_dir).fallback(ServeFile::new(index));

   Router::new()
      .route("/health", get(health_check))
      .route("/api/send-consultation", post(receive_consultation))
      .route("/api/send-email", post(send_legacy_email))
      .with_state(state)
      .fallback_service(static_site)
      .layer(CorsLayer::permissive())
      .layer(CompressionLayer::new())
      .layer(PropagateRequestIdLayer::x_request_id())
      .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
      .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}
