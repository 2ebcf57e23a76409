//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置
//! - 親モジュール（この `handler.rs`）で re-export し、フラットな API を提供
//! - ハンドラは薄く保ち、検証はドメイン層、送信フローはユースケース層に委譲
//!
//! ## モジュール構成
//!
//! ```text
//! handler.rs              # 親モジュール（re-export）
//! └── handler/
//!     ├── health.rs       # ヘルスチェック
//!     ├── consultation.rs # 相談フォーム受付
//!     └── send_email.rs   # 旧メール送信エンドポイント（互換用）
//! ```

pub mod consultation;
pub mod health;
pub mod send_email;

pub use consultation::receive_consultation;
pub use health::health_check;
pub use send_email::send_legacy_email;
