//! # Lead API エラー定義
//!
//! Lead API 固有のエラーと、HTTP レスポンスへの変換を定義する。
//!
//! フォーム API は検証エラー（400）以外をクライアントに返さない。
//! 相談フォームの送信失敗はレスポンスの `emailSent: false` で表現され、
//! エラーレスポンスにはならない。旧エンドポイントのみ送信失敗を 500 で返す。

use axum::{
   Json,
   http::StatusCode,
   response::{IntoResponse, Response},
};
use drvclinic_domain::DomainError;
use drvclinic_shared::{FormError, LegacyError};
use thiserror::Error;

/// Lead API で発生するエラー
#[derive(Debug, Error)]
pub enum ApiError {
   /// フォーム検証エラー
   #[error("フォーム検証エラー: {0}")]
   Validation(#[from] DomainError),

   /// 旧エンドポイントのメール送信失敗
   #[error("メール送信失敗: {0}")]
   LegacySendFailed(String),
}

impl IntoResponse for ApiError {
   fn into_response(self) -> Response {
      match self {
         ApiError::Validation(DomainError::Validation(message)) => {
            (StatusCode::BAD_REQUEST, Json(FormError::new(message))).into_response()
         }
         ApiError::LegacySendFailed(error) => {
            tracing::error!("旧エンドポイントのメール送信失敗: {}", error);
            (
               StatusCode::INTERNAL_SERVER_ERROR,
               Json(LegacyError::send_failed(error)),
            )
               .into_response()
         }
      }
   }
}

#[cfg(test)]
mod tests {
   use axum::http::StatusCode;

   use super::*;

   #[tokio::test]
   async fn 検証エラーは400になる() {
      let error = ApiError::Validation(DomainError::Validation(
         "Invalid email format".to_string(),
      ));
      let response = error.into_response();

      assert_eq!(response.status(), StatusCode::BAD_REQUEST);
   }

   #[tokio::test]
   async fn 旧エンドポイントの送信失敗は500になる() {
      let error = ApiError::LegacySendFailed("connection refused".to_string());
      let response = error.into_response();

      assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
   }
}
