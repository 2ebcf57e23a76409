//! # パターン選択の同期
//!
//! 独立してマウントされる 2 つの選択ウィジェット（アセスメントと相談フォーム）を、
//! 共有ストアなしで一貫させるためのイベントモデルを定義する。
//!
//! ## 設計方針
//!
//! - **閉じたイベント集合**: [`SelectionEvent`] は `PatternSelected` と
//!   `GenderChanged` の 2 バリアントのみ。型のない文字列イベントは使わない
//! - **純粋リデューサ**: 購読側は [`SelectionState::apply`] でイベントを畳み込む。
//!   リデューサは冪等で、重複配送・購読者間の順序非決定に構造的に耐える
//! - **stale ペイロードの救済**: 受信側のカタログに存在しないパターン ID でも
//!   クラッシュせず、ID はそのまま保持して表示だけフォールバックする
//!
//! ## 順序の契約
//!
//! 発行側は自身の状態に `apply` してからイベントを発行する。購読側の受信順序は
//! 保証されないが、リデューサが冪等であるため同一イベント列を畳み込んだ状態は
//! 必ず収束する。

use serde::{Deserialize, Serialize};

use crate::pattern::{self, Gender};

/// 選択同期イベント
///
/// ワイヤ表現は `event` タグ付きの camelCase JSON
/// （`"patternSelected"` / `"genderChanged"`）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum SelectionEvent {
    /// パターンが選択された
    ///
    /// ペイロードには受信側がカタログを引かなくても表示できるよう、
    /// 解決済みのラベル・説明・表示文字列を含める。
    PatternSelected {
        /// 選択されたステージ ID
        pattern_id:          String,
        /// 選択時点の性別
        gender:              Gender,
        /// 表示ラベル（未知 ID の場合は生 ID）
        pattern_label:       String,
        /// ステージ説明（未知 ID の場合は空文字列）
        pattern_description: String,
        /// `"<Male|Female> - Pattern <label>: <description>"` 形式の表示文字列
        full_pattern_info:   String,
    },
    /// 性別トグルが切り替えられた
    GenderChanged {
        /// 切り替え後の性別
        gender: Gender,
    },
}

impl SelectionEvent {
    /// パターン選択イベントを組み立てる
    ///
    /// ラベル・説明・表示文字列はカタログから解決する。ID がカタログに
    /// 存在しない場合はラベルに生 ID、説明に空文字列を使う。
    pub fn pattern_selected(gender: Gender, pattern_id: impl Into<String>) -> Self {
        let pattern_id = pattern_id.into();
        let (pattern_label, pattern_description) = match pattern::find(gender, &pattern_id) {
            Some(p) => (p.label.to_string(), p.description.to_string()),
            None => (pattern_id.clone(), String::new()),
        };
        let full_pattern_info = pattern::full_pattern_info(gender, &pattern_id);

        Self::PatternSelected {
            pattern_id,
            gender,
            pattern_label,
            pattern_description,
            full_pattern_info,
        }
    }

    /// 性別切り替えイベントを組み立てる
    pub fn gender_changed(gender: Gender) -> Self {
        Self::GenderChanged { gender }
    }
}

/// 選択ウィジェットの同期状態
///
/// 各ウィジェットが自身のコピーを持ち、受信したイベントを [`apply`](Self::apply)
/// で畳み込む。共有ストアは存在しない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    /// 現在表示中のパターン集合を決める性別
    pub gender:                Gender,
    /// 選択中のステージ ID（未選択は `None`）
    pub selected_pattern_id:   Option<String>,
    /// 選択内容の表示文字列（フォームの `selectedPattern` フィールドになる）
    pub selected_pattern_info: Option<String>,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            gender:                Gender::Male,
            selected_pattern_id:   None,
            selected_pattern_info: None,
        }
    }
}

impl SelectionState {
    /// イベントを状態に適用する（純粋リデューサ）
    ///
    /// 不変条件:
    /// - `GenderChanged` 後は選択パターンと派生表示が必ずクリアされる
    /// - `PatternSelected` はペイロードの性別を採用する（性別トグルの追従）
    /// - 未知のパターン ID でもパニックしない。ID はそのまま保持され、
    ///   ラベル表示は [`display_label`](Self::display_label) でフォールバックする
    pub fn apply(&mut self, event: &SelectionEvent) {
        match event {
            SelectionEvent::PatternSelected {
                pattern_id,
                gender,
                full_pattern_info,
                ..
            } => {
                self.gender = *gender;
                self.selected_pattern_id = Some(pattern_id.clone());
                self.selected_pattern_info = Some(full_pattern_info.clone());
            }
            SelectionEvent::GenderChanged { gender } => {
                self.gender = *gender;
                self.selected_pattern_id = None;
                self.selected_pattern_info = None;
            }
        }
    }

    /// 選択中パターンの表示ラベルを返す
    ///
    /// 選択 ID が現在の性別のカタログに存在すればそのラベル、存在しなければ
    /// 生 ID を返す（フォールバック表示）。未選択なら `None`。
    pub fn display_label(&self) -> Option<String> {
        let id = self.selected_pattern_id.as_deref()?;
        Some(match pattern::find(self.gender, id) {
            Some(p) => p.label.to_string(),
            None => id.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn パターン選択で状態と表示文字列が更新される() {
        let mut state = SelectionState::default();
        state.apply(&SelectionEvent::pattern_selected(Gender::Male, "3"));

        assert_eq!(state.gender, Gender::Male);
        assert_eq!(state.selected_pattern_id.as_deref(), Some("3"));
        assert_eq!(
            state.selected_pattern_info.as_deref(),
            Some("Male - Pattern Stage 3: Deepening recession")
        );
        assert_eq!(state.display_label().as_deref(), Some("Stage 3"));
    }

    #[test]
    fn 性別切り替えで選択が必ずクリアされる() {
        let mut state = SelectionState::default();
        state.apply(&SelectionEvent::pattern_selected(Gender::Female, "1g"));
        assert!(state.selected_pattern_id.is_some());

        state.apply(&SelectionEvent::gender_changed(Gender::Male));

        assert_eq!(state.gender, Gender::Male);
        assert_eq!(state.selected_pattern_id, None);
        assert_eq!(state.selected_pattern_info, None);
        assert_eq!(state.display_label(), None);
    }

    #[test]
    fn 異なる性別からのパターン選択で性別トグルが追従する() {
        let mut state = SelectionState::default();
        assert_eq!(state.gender, Gender::Male);

        state.apply(&SelectionEvent::pattern_selected(Gender::Female, "1d"));

        assert_eq!(state.gender, Gender::Female);
        assert_eq!(state.selected_pattern_id.as_deref(), Some("1d"));
    }

    #[test]
    fn staleなペイロードでもパニックせずidが往復する() {
        // genderChanged(female) の後に male の stale な patternSelected が届くケース
        let mut state = SelectionState::default();
        state.apply(&SelectionEvent::gender_changed(Gender::Female));

        // 発行側のカタログ解決を迂回した、生のミスマッチペイロード
        let stale = SelectionEvent::PatternSelected {
            pattern_id:          "9".to_string(),
            gender:              Gender::Female,
            pattern_label:       "9".to_string(),
            pattern_description: String::new(),
            full_pattern_info:   "Female - Pattern 9: ".to_string(),
        };
        state.apply(&stale);

        // ID はそのまま保持され、ラベルは生 ID にフォールバックする
        assert_eq!(state.selected_pattern_id.as_deref(), Some("9"));
        assert_eq!(state.display_label().as_deref(), Some("9"));
    }

    #[test]
    fn リデューサが冪等である() {
        let event = SelectionEvent::pattern_selected(Gender::Male, "5");

        let mut once = SelectionState::default();
        once.apply(&event);

        let mut twice = SelectionState::default();
        twice.apply(&event);
        twice.apply(&event);

        assert_eq!(once, twice);
    }

    #[test]
    fn 同一イベント列を畳み込んだ購読者同士が収束する() {
        let events = vec![
            SelectionEvent::pattern_selected(Gender::Male, "2"),
            SelectionEvent::gender_changed(Gender::Female),
            SelectionEvent::pattern_selected(Gender::Female, "1f"),
        ];

        let mut assessment = SelectionState::default();
        let mut form = SelectionState::default();
        for event in &events {
            assessment.apply(event);
            form.apply(event);
        }

        assert_eq!(assessment, form);
        assert_eq!(form.selected_pattern_id.as_deref(), Some("1f"));
    }

    #[test]
    fn ワイヤ表現がcamel_caseのタグ付きjsonである() {
        let event = SelectionEvent::pattern_selected(Gender::Male, "3");
        let json = serde_json::to_value(&event).unwrap();

        assert_eq!(json["event"], "patternSelected");
        assert_eq!(json["patternId"], "3");
        assert_eq!(json["gender"], "male");
        assert_eq!(json["patternLabel"], "Stage 3");
        assert_eq!(json["fullPatternInfo"], "Male - Pattern Stage 3: Deepening recession");

        let gender_event = SelectionEvent::gender_changed(Gender::Female);
        let json = serde_json::to_value(&gender_event).unwrap();
        assert_eq!(json["event"], "genderChanged");
        assert_eq!(json["gender"], "female");
    }
}
