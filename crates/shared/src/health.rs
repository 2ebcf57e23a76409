//! # ヘルスチェック共通型
//!
//! ヘルスチェックエンドポイントで使用される共通レスポンス型を提供する。

use serde::{Deserialize, Serialize};

/// ヘルスチェックレスポンス
///
/// `status` はサービスの稼働状態、`version` は Cargo.toml のバージョンを示す。
///
/// ## 使用例
///
/// ```
/// use drvclinic_shared::HealthResponse;
///
/// let response = HealthResponse {
///     status:  "healthy".to_string(),
///     version: "0.1.0".to_string(),
/// };
/// assert_eq!(response.status, "healthy");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// 稼働状態（`"healthy"` または `"unhealthy"`）
    pub status:  String,
    /// アプリケーションバージョン（Cargo.toml から取得）
    pub version: String,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_serializeを正しいjson形状にする() {
        let response = HealthResponse {
            status:  "healthy".to_string(),
            version: "0.1.0".to_string(),
        };
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "status": "healthy", "version": "0.1.0" })
        );
    }
}
