//! # API レスポンスエンベロープ
//!
//! フォーム API の統一レスポンス形式を提供する。
//!
//! ## 設計
//!
//! - 純粋なデータ構造（`Serialize` / `Deserialize` のみ）
//! - axum の `IntoResponse` 変換は lead-api の責務（shared に axum 依存を入れない）
//! - フィールド名はワイヤ契約（`emailSent` は camelCase）なので変更しないこと

use serde::{Deserialize, Serialize};

/// 相談リクエスト受付レスポンス（`POST /api/send-consultation` の 200）
///
/// `email_sent` は SMTP 送信の成否だけを示し、受付の成否ではない。
/// 検証を通過したリクエストは常に `success: true` で応答される。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsultationAck {
    pub success:    bool,
    pub message:    String,
    #[serde(rename = "emailSent")]
    pub email_sent: bool,
}

impl ConsultationAck {
    /// 受付成功レスポンスを作成する
    pub fn received(email_sent: bool) -> Self {
        Self {
            success: true,
            message: "Consultation request received successfully".to_string(),
            email_sent,
        }
    }
}

/// フォーム検証エラーレスポンス（400）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormError {
    pub success: bool,
    pub message: String,
}

impl FormError {
    /// 検証エラーレスポンスを作成する
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// 旧メール送信エンドポイントの成功レスポンス（`POST /api/send-email` の 200）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyAck {
    pub success: bool,
    pub message: String,
}

impl LegacyAck {
    /// 送信成功レスポンスを作成する
    pub fn sent() -> Self {
        Self {
            success: true,
            message: "Email sent successfully".to_string(),
        }
    }
}

/// 旧メール送信エンドポイントの失敗レスポンス（500）
///
/// 旧エンドポイントのみ従来どおり送信失敗を呼び出し元に返す。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyError {
    pub success: bool,
    pub message: String,
    pub error:   String,
}

impl LegacyError {
    /// 送信失敗レスポンスを作成する
    pub fn send_failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            message: "Failed to send email".to_string(),
            error:   error.into(),
        }
    }
}
