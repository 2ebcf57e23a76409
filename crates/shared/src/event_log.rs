//! # ビジネスイベントログの構造化ヘルパー
//!
//! ログを `jq` で効率的に調査できるよう、フィールドの命名規約と
//! ヘルパーマクロを提供する。
//!
//! ## ビジネスイベント
//!
//! [`log_business_event!`] マクロで出力する。`event.kind = "business_event"` マーカーが
//! 自動付与され、`jq 'select(.["event.kind"] == "business_event")'` でフィルタできる。
//!
//! ## フィールド命名規約
//!
//! ドット記法（`event.category`、`notification.event_type`）を使用。tracing の
//! `$($field:ident).+` パターンでサポートされ、JSON 出力でフラットなキーになる。

/// ビジネスイベントを構造化ログとして出力する。
///
/// `event.kind = "business_event"` マーカーを自動付与し、
/// `tracing::info!` レベルで出力する。
///
/// ## 必須フィールド（慣例）
///
/// - `event.category`: イベントカテゴリ（[`event::category`] の定数を使用）
/// - `event.action`: アクション名（[`event::action`] の定数を使用）
/// - `event.result`: 結果（[`event::result`] の定数を使用）
///
/// ## 推奨フィールド
///
/// - `event.entity_type`: エンティティ種別（[`event::entity_type`] の定数を使用）
/// - `event.entity_id`: エンティティ ID
#[macro_export]
macro_rules! log_business_event {
    ($($args:tt)*) => {
        ::tracing::info!(
            event.kind = "business_event",
            $($args)*
        )
    };
}

/// イベントフィールドの定数
pub mod event {
    /// イベントカテゴリ
    pub mod category {
        pub const CONSULTATION: &str = "consultation";
        pub const NOTIFICATION: &str = "notification";
    }

    /// イベントアクション
    pub mod action {
        // 相談リクエスト
        pub const CONSULTATION_RECEIVED: &str = "consultation.received";

        // 通知
        pub const NOTIFICATION_SENT: &str = "notification.sent";
        pub const NOTIFICATION_FAILED: &str = "notification.failed";
        pub const NOTIFICATION_SKIPPED: &str = "notification.skipped";
    }

    /// エンティティ種別
    pub mod entity_type {
        pub const CONSULTATION: &str = "consultation";
        pub const EMAIL: &str = "email";
    }

    /// イベント結果
    pub mod result {
        pub const SUCCESS: &str = "success";
        pub const FAILURE: &str = "failure";
        pub const SKIPPED: &str = "skipped";
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_log_business_eventマクロがコンパイルできる() {
        // マクロ展開の検証（出力内容は subscriber 依存のためここでは確認しない）
        crate::log_business_event!(
            event.category = super::event::category::CONSULTATION,
            event.action = super::event::action::CONSULTATION_RECEIVED,
            event.result = super::event::result::SUCCESS,
            "テストイベント"
        );
    }
}
