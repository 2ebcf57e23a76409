//! # ユースケース
//!
//! 相談フォーム受付に伴う通知メールの組み立てと送信フローを定義する。
//!
//! ## 設計方針
//!
//! - ハンドラは薄く保ち、メール送信の全体フローはこの層に置く
//! - テンプレートレンダリングと送信は分離し、送信器は trait で注入する
//!
//! ## モジュール構成
//!
//! ```text
//! usecase.rs                    # 親モジュール（re-export）
//! └── usecase/
//!     ├── mailer.rs             # 相談通知メールの送信フロー
//!     └── template_renderer.rs  # tera によるメール本文生成
//! ```

mod mailer;
mod template_renderer;

pub use mailer::{ConsultationMailer, LegacyEmailRequest};
pub use template_renderer::TemplateRenderer;
