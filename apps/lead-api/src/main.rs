//! # Lead API サーバー
//!
//! DRV Hair Clinic マーケティングサイトの単一サーバー。
//! ビルド済み SPA の配信と、相談フォームのメールリレーを担当する。
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `PORT` | No | ポート番号（デフォルト: `3001`） |
//! | `STATIC_DIR` | No | SPA ビルドディレクトリ（デフォルト: `dist`） |
//! | `SMTP_HOST` | No | SMTP ホスト（デフォルト: `smtp.gmail.com`） |
//! | `SMTP_PORT` | No | SMTP ポート（デフォルト: `587`） |
//! | `SMTP_SECURE` | No | `true` で暗黙 TLS（465）、それ以外は STARTTLS |
//! | `EMAIL_USER` | No | SMTP 認証アカウント（エンベロープ差出人） |
//! | `EMAIL_PASS` | No | SMTP 認証パスワード。未設定ならログ専用モード |
//! | `ADMIN_EMAIL` | No | 管理者通知の宛先（デフォルト: `EMAIL_USER`） |
//! | `LOG_FORMAT` | No | `json` / `pretty`（デフォルト: `pretty`） |
//! | `RUST_LOG` | No | ログフィルタ（デフォルト: `info,drvclinic=debug`） |
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境（メール送信なし、フォーム内容はログに出る）
//! cargo run -p drvclinic-lead-api
//!
//! # 本番環境
//! EMAIL_USER=clinic@gmail.com EMAIL_PASS=... ADMIN_EMAIL=admin@drvhairclinic.com \
//!    cargo run -p drvclinic-lead-api --release
//! ```

use std::{net::SocketAddr, sync::Arc};

use drvclinic_infra::notification::{
   NotificationSender,
   NoopNotificationSender,
   SmtpNotificationSender,
};
use drvclinic_lead_api::{
   AppState,
   build_app,
   config::LeadConfig,
   usecase::{ConsultationMailer, TemplateRenderer},
};
use drvclinic_shared::observability::{TracingConfig, init_tracing};
use tokio::net::TcpListener;

/// Lead API サーバーのエントリーポイント
#[tokio::main]
async fn main() -> anyhow::Result<()> {
   // .env ファイルを読み込む（存在する場合）
   dotenvy::dotenv().ok();

   // トレーシング初期化
   init_tracing(TracingConfig::from_env("lead-api"));

   // 設定読み込み
   let config = LeadConfig::from_env();

   tracing::info!(
      "Lead API サーバーを起動します: {}:{}",
      config.host,
      config.port
   );

   // 送信バックエンドを選択する
   let sender: Arc<dyn NotificationSender> = if config.mail.is_configured() {
      let pass = config
         .mail
         .email_pass
         .clone()
         .ok_or_else(|| anyhow::anyhow!("EMAIL_PASS が設定されていません"))?;
      tracing::info!(
         smtp_host = %config.mail.smtp_host,
         admin_email = %config.mail.admin_email,
         "SMTP 送信モードで起動します"
      );
      Arc::new(SmtpNotificationSender::new(
         &config.mail.smtp_host,
         config.mail.smtp_port,
         config.mail.smtp_secure,
         config.mail.email_user.clone(),
         pass,
         config.mail.email_user.clone(),
      )?)
   } else {
      if config.mail.has_placeholder_password() {
         tracing::warn!("EMAIL_PASS がプレースホルダ値のままです（.env を更新してください）");
      } else {
         tracing::warn!("EMAIL_PASS が未設定です");
      }
      tracing::warn!("フォーム受付は動作しますが、メールは送信されずログに出力されます");
      Arc::new(NoopNotificationSender::new())
   };

   // 通知メールの送信フローを組み立てる
   let renderer =
      TemplateRenderer::new().map_err(|e| anyhow::anyhow!("テンプレート登録に失敗: {e}"))?;
   let mailer = ConsultationMailer::new(
      sender,
      renderer,
      config.mail.admin_email.clone(),
      config.mail.email_user.clone(),
      config.mail.is_configured(),
   );
   let state = Arc::new(AppState { mailer });

   // ルーター構築
   let app = build_app(state, &config.static_dir);

   // サーバー起動
   let addr: SocketAddr = format!("{}:{}", config.host, config.port)
      .parse()
      .map_err(|e| anyhow::anyhow!("アドレスのパースに失敗: {e}"))?;

   let listener = TcpListener::bind(addr).await?;
   tracing::info!("Lead API サーバーが起動しました: {}", addr);

   axum::serve(listener, app).await?;

   Ok(())
}
