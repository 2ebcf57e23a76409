//! # DRV Clinic 共有ユーティリティ
//!
//! このクレートは、DRV Clinic
//! プロジェクト全体で使用される共通ユーティリティを提供する。
//!
//! ## 設計方針
//!
//! - 他のすべてのクレート（domain, infra, lead-api）から依存される
//! - ビジネスロジックを含まない純粋なユーティリティのみを配置
//! - 外部クレートへの依存は最小限に抑える（observability は feature で分離）

pub mod api_response;
pub mod event_log;
pub mod health;
pub mod observability;

pub use api_response::{ConsultationAck, FormError, LegacyAck, LegacyError};
pub use health::HealthResponse;
