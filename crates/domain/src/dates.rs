//! # メールテンプレート向け日付整形
//!
//! フォームの希望日（`YYYY-MM-DD`）と受信時刻をメール本文用の英語表記に整形する。
//!
//! ## 設計方針
//!
//! - **素の日付は暦日として扱う**: `YYYY-MM-DD` をタイムゾーン変換にかけない。
//!   ホストのローカルタイムゾーンによって日付が前後にずれてはならない
//! - **失敗時は入力をそのまま返す**: 整形はベストエフォート。パースできない
//!   文字列はエラーにせず原文のまま表示する
//! - **プレースホルダは素通し**: `"Not specified"` や空文字列は整形しない

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// 日付文字列をメール用の英語表記に整形する
///
/// - `"2024-03-05"` → `"Tue, Mar 5, 2024"`（暦日としてパース、ずれなし）
/// - RFC 3339 / `YYYY-MM-DDTHH:MM[:SS]` → 日付部分のみ整形
/// - それ以外 → 入力をそのまま返す
pub fn format_date(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() || trimmed == "Not specified" {
        return input.to_string();
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return date.format("%a, %b %-d, %Y").to_string();
    }

    if let Ok(datetime) = DateTime::parse_from_rfc3339(trimmed) {
        return datetime.format("%a, %b %-d, %Y").to_string();
    }

    for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return datetime.format("%a, %b %-d, %Y").to_string();
        }
    }

    input.to_string()
}

/// 受信時刻をメールの Date Submitted 行用に整形する
///
/// 例: `"Tue, Mar 5, 2024, 2:30 PM"`（UTC）
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%a, %b %-d, %Y, %-I:%M %p").to_string()
}
