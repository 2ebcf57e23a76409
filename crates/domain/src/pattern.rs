//! # 脱毛パターンカタログ
//!
//! 性別ごとの脱毛ステージ（パターン）をコンパイル時に定義する。
//!
//! ## ドメイン用語
//!
//! | 型 | ドメイン用語 | 内容 |
//! |---|------------|------|
//! | [`Gender`] | 性別 | 男性 8 段階 / 女性 4 段階で別カタログを持つ |
//! | [`HairLossPattern`] | 脱毛パターン | ステージ ID・ラベル・説明・画像パスの不変データ |
//!
//! ## 設計方針
//!
//! - **コンパイル時定義**: パターン表は `&'static` スライスで、実行時に変更されない
//! - **ID は性別内で一意**: 男性は `"1"`〜`"8"`、女性は `"1d"`/`"1f"`/`"1g"`/`"1h"`
//! - **フォールバック前提の引き当て**: 未知の ID でもラベルに生 ID を使って表示文字列を
//!   組み立てられる（選択同期の stale ペイロード対策、[`full_pattern_info`] 参照）

use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;

/// 性別
///
/// ワイヤ表現（JSON・イベントペイロード）は小文字（`"male"` / `"female"`）。
/// 表示文字列には [`display_name`](Gender::display_name) を使用する。
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
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Gender {
    /// 男性（パターン 8 種）
    Male,
    /// 女性（パターン 4 種）
    Female,
}

impl Gender {
    /// 英語の表示名を返す（`"Male"` / `"Female"`）
    ///
    /// メール本文や `full_pattern_info` の組み立てに使用する。
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

/// 脱毛パターン（1 ステージ分の不変データ）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HairLossPattern {
    /// 性別内で一意なステージ ID
    pub id:          &'static str,
    /// 表示ラベル（例: `"Stage 3"`）
    pub label:       &'static str,
    /// ステージの説明（例: `"Deepening recession"`）
    pub description: &'static str,
    /// アセット画像のパス
    pub image_path:  &'static str,
}

/// 男性パターン表（8 段階）
const MALE_PATTERNS: &[HairLossPattern] = &[
    HairLossPattern {
        id:          "1",
        label:       "Stage 1",
        description: "Full head of hair",
        image_path:  "/assets/male1.webp",
    },
    HairLossPattern {
        id:          "2",
        label:       "Stage 2",
        description: "Slight recession",
        image_path:  "/assets/male2.webp",
    },
    HairLossPattern {
        id:          "3",
        label:       "Stage 3",
        description: "Deepening recession",
        image_path:  "/assets/male3.webp",
    },
    HairLossPattern {
        id:          "4",
        label:       "Stage 4",
        description: "Crown thinning",
        image_path:  "/assets/male4.webp",
    },
    HairLossPattern {
        id:          "5",
        label:       "Stage 5",
        description: "Bridge thinning",
        image_path:  "/assets/male5.webp",
    },
    HairLossPattern {
        id:          "6",
        label:       "Stage 6",
        description: "Large balding area",
        image_path:  "/assets/male6.webp",
    },
    HairLossPattern {
        id:          "7",
        label:       "Stage 7",
        description: "Extensive loss",
        image_path:  "/assets/male7.webp",
    },
    HairLossPattern {
        id:          "8",
        label:       "Stage 8",
        description: "Complete loss",
        image_path:  "/assets/male8.webp",
    },
];

/// 女性パターン表（4 段階）
const FEMALE_PATTERNS: &[HairLossPattern] = &[
    HairLossPattern {
        id:          "1d",
        label:       "Stage 1",
        description: "Significant thinning",
        image_path:  "/assets/female1.webp",
    },
    HairLossPattern {
        id:          "1f",
        label:       "Stage 2",
        description: "Large balding area",
        image_path:  "/assets/female2.webp",
    },
    HairLossPattern {
        id:          "1g",
        label:       "Stage 3",
        description: "Extensive loss",
        image_path:  "/assets/female3.png",
    },
    HairLossPattern {
        id:          "1h",
        label:       "Stage 4",
        description: "Complete loss",
        image_path:  "/assets/female4.webp",
    },
];

/// 指定した性別のパターン表を返す
pub fn patterns_for(gender: Gender) -> &'static [HairLossPattern] {
    match gender {
        Gender::Male => MALE_PATTERNS,
        Gender::Female => FEMALE_PATTERNS,
    }
}

/// 性別とステージ ID からパターンを引き当てる
///
/// ID が性別のカタログに存在しない場合は `None` を返す。
pub fn find(gender: Gender, pattern_id: &str) -> Option<&'static HairLossPattern> {
    patterns_for(gender).iter().find(|p| p.id == pattern_id)
}

/// 人間可読な選択内容の文字列を組み立てる
///
/// 形式: `"<Male|Female> - Pattern <label>: <description>"`。
///
/// ID がカタログに存在しない場合でもエラーにせず、ラベルに生 ID を、
/// 説明に空文字列を使用する（stale なイベントペイロードの救済）。
pub fn full_pattern_info(gender: Gender, pattern_id: &str) -> String {
    let (label, description) = match find(gender, pattern_id) {
        Some(pattern) => (pattern.label, pattern.description),
        None => (pattern_id, ""),
    };
    format!(
        "{} - Pattern {}: {}",
        gender.display_name(),
        label,
        description
    )
}
