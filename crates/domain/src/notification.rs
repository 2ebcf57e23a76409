//! # 通知
//!
//! 相談リクエストに伴うメール通知のドメインモデルを定義する。
//!
//! ## ドメイン用語
//!
//! | 型 | ドメイン用語 | 内容 |
//! |---|------------|------|
//! | [`ConsultationNotification`] | 相談通知イベント | 2 種類: 管理者向け通知、申込者向け受付確認 |
//! | [`NotificationEventType`] | 通知イベント種別 | ログの `event_type` フィールドに使う snake_case 文字列 |
//! | [`EmailMessage`] | メールメッセージ | テンプレートレンダリングの出力。送信器に渡される |
//!
//! ## 設計方針
//!
//! - **fire-and-forget**: 通知送信の失敗はフォームの受付結果に影響しない
//! - **テンプレート分離**: 通知イベントとメール生成は分離（TemplateRenderer は lead-api）
//! - **差出人の使い分け**: 管理者向けは申込者の名義（reply-to も申込者）、
//!   受付確認はクリニック名義で送る。エンベロープの差出人は常に認証アカウント

use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;
use thiserror::Error;

use crate::consultation::Consultation;

/// 通知送信エラー
#[derive(Debug, Error)]
pub enum NotificationError {
    /// メール送信に失敗
    #[error("メール送信に失敗: {0}")]
    SendFailed(String),

    /// テンプレートレンダリングに失敗
    #[error("テンプレートレンダリングに失敗: {0}")]
    TemplateFailed(String),
}

/// 通知イベント種別
///
/// ログの `notification.event_type` フィールドに格納される値。
/// snake_case でシリアライズされる。
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    IntoStaticStr,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "snake_case")]
pub enum NotificationEventType {
    /// 管理者向け通知: 新しい相談リクエストの受信 → 管理者メールボックスに送信
    AdminRequest,
    /// 受付確認: リクエスト受理の確認 → 申込者に送信
    UserConfirmation,
}

/// メールメッセージ
///
/// テンプレートレンダリングの出力。NotificationSender に渡される。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    /// 送信先メールアドレス
    pub to:        String,
    /// 表示上の差出人（`"Name" <addr>` 形式）。`None` なら送信器のデフォルト
    pub from:      Option<String>,
    /// Reply-To アドレス
    pub reply_to:  Option<String>,
    /// 件名
    pub subject:   String,
    /// HTML 本文
    pub html_body: String,
    /// プレーンテキスト本文
    pub text_body: String,
}

/// 相談通知イベント
///
/// 相談リクエスト 1 件につき 2 通（管理者向け + 受付確認）が生成される。
#[derive(Debug, Clone)]
pub enum ConsultationNotification {
    /// 管理者向け通知: 申込者名義で管理者メールボックスに届く
    AdminRequest {
        consultation: Consultation,
        admin_email:  String,
    },
    /// 受付確認: クリニック名義で申込者に届く
    UserConfirmation { consultation: Consultation },
}

impl ConsultationNotification {
    /// 通知イベント種別を返す
    pub fn event_type(&self) -> NotificationEventType {
        match self {
            Self::AdminRequest { .. } => NotificationEventType::AdminRequest,
            Self::UserConfirmation { .. } => NotificationEventType::UserConfirmation,
        }
    }

    /// 受信者のメールアドレスを返す
    pub fn recipient_email(&self) -> &str {
        match self {
            Self::AdminRequest { admin_email, .. } => admin_email,
            Self::UserConfirmation { consultation } => &consultation.email,
        }
    }

    /// 件名を返す
    pub fn subject(&self) -> String {
        match self {
            Self::AdminRequest { consultation, .. } => format!(
                "In-Clinic Consultation Request - {}",
                consultation.consultation_type
            ),
            Self::UserConfirmation { .. } => {
                "Consultation Request Received - DRV Hair Clinic".to_string()
            }
        }
    }

    /// 通知対象の相談リクエストを返す
    pub fn consultation(&self) -> &Consultation {
        match self {
            Self::AdminRequest { consultation, .. }
            | Self::UserConfirmation { consultation } => consultation,
        }
    }
}
