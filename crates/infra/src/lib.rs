//! # DRV Clinic インフラ層
//!
//! 外部システムとの接続・通信を担当するインフラストラクチャ層。
//!
//! ## 設計方針
//!
//! このクレートはドメイン層の抽象（`NotificationSender` トレイト、
//! 選択イベント）の具体的な実装を提供する。外部システムの詳細を
//! カプセル化し、ドメイン層をインフラの変更から保護する。
//!
//! ## 責務
//!
//! - **メール送信**: lettre による SMTP 送信と、送信しない Noop 実装
//! - **イベントバス**: 選択イベントの型付きブロードキャストチャネル
//!
//! ## 依存関係
//!
//! ```text
//! lead-api → infra → domain → shared
//! ```
//!
//! インフラ層は `domain` に依存する。
//! ドメイン層はインフラ層に依存しない（依存性逆転の原則）。
//!
//! ## モジュール構成
//!
//! - [`error`] - インフラ層エラー定義
//! - [`notification`] - メール送信トレイトと SMTP / Noop 実装
//! - [`selection_bus`] - 選択イベントのブロードキャストチャネル

pub mod error;
pub mod notification;
pub mod selection_bus;

#[cfg(any(test, feature = "test-utils"))]
pub mod mock;

pub use error::InfraError;
pub use selection_bus::SelectionBus;
