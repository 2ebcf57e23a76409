//! # 相談リクエスト
//!
//! フォームから送信される相談リクエスト（リード）の検証と正規化を定義する。
//!
//! ## ドメイン用語
//!
//! | 型 | ドメイン用語 | 内容 |
//! |---|------------|------|
//! | [`ConsultationForm`] | フォーム入力 | ワイヤ上の生 DTO。必須項目も `Option` で受ける |
//! | [`Consultation`] | 相談リクエスト | 検証・正規化済みの値。メール生成とログに使用 |
//!
//! ## 設計方針
//!
//! - **必須は 3 項目のみ**: `name` / `email` / `phone`。それ以外は欠損時に
//!   固定のプレースホルダ文字列で補完する
//! - **エラーメッセージは公開契約**: 検証失敗時のメッセージはそのまま
//!   HTTP レスポンスに載るため、文言を変えないこと
//! - **永続化しない**: リクエストはメール送信とログ出力にのみ使われ、破棄される

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::DomainError;

define_uuid_id! {
    /// 相談リクエスト ID（一意識別子）
    ///
    /// 永続化はしない。ログの相関用に UUID v7 を発番する。
    pub struct ConsultationId;
}

/// メールアドレスの形状チェック（`local@domain.tld`）
///
/// RFC 完全準拠ではなく、フォームで弾くべき明らかな誤入力だけを検出する。
static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("正規表現が不正"));

/// 必須フィールド欠損時のエラーメッセージ（公開 API 契約）
pub const MISSING_REQUIRED_MESSAGE: &str =
    "Missing required fields: name, email, and phone are required";

/// メール形式不正時のエラーメッセージ（公開 API 契約）
pub const INVALID_EMAIL_MESSAGE: &str = "Invalid email format";

/// フォームから送信される生の相談リクエスト
///
/// 必須項目も `Option<String>` で受け、欠損をドメイン検証で 400 に変換する
/// （デシリアライザの 422 に任せない）。
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsultationForm {
    pub name:              Option<String>,
    pub email:             Option<String>,
    pub phone:             Option<String>,
    pub age:               Option<String>,
    pub consultation_type: Option<String>,
    pub preferred_date:    Option<String>,
    pub selected_pattern:  Option<String>,
    pub message:           Option<String>,
}

/// 検証・正規化済みの相談リクエスト
///
/// すべてのフィールドがトリム済みで、任意項目は欠損時にプレースホルダで
/// 補完されている。メールテンプレートとログ出力にそのまま渡せる。
#[derive(Debug, Clone, Serialize)]
pub struct Consultation {
    /// ログ相関用 ID（永続化しない）
    pub id:                ConsultationId,
    pub name:              String,
    pub email:             String,
    pub phone:             String,
    /// 欠損時は `"Not provided"`
    pub age:               String,
    /// 欠損時は選択パターン文字列、それも無ければ `"General Consultation"`
    pub consultation_type: String,
    /// 欠損時は `"Not selected"`
    pub selected_pattern:  String,
    /// 欠損時は `"Not specified"`
    pub preferred_date:    String,
    /// 欠損時は `"No additional message provided"`
    pub message:           String,
    /// 受信時刻（メールの Date Submitted 行に使用）
    pub received_at:       DateTime<Utc>,
}

/// トリムして空なら `None` に潰す
fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl Consultation {
    /// フォーム入力を検証し、正規化済みの相談リクエストに変換する
    ///
    /// # エラー
    ///
    /// - `name` / `email` / `phone` のいずれかが欠損・空 →
    ///   [`MISSING_REQUIRED_MESSAGE`]
    /// - `email` が `local@domain.tld` の形状でない → [`INVALID_EMAIL_MESSAGE`]
    pub fn from_form(form: ConsultationForm) -> Result<Self, DomainError> {
        let name = non_empty(form.name);
        let email = non_empty(form.email);
        let phone = non_empty(form.phone);

        let (Some(name), Some(email), Some(phone)) = (name, email, phone) else {
            return Err(DomainError::Validation(MISSING_REQUIRED_MESSAGE.to_string()));
        };

        if !EMAIL_SHAPE.is_match(&email) {
            return Err(DomainError::Validation(INVALID_EMAIL_MESSAGE.to_string()));
        }

        let selected_pattern = non_empty(form.selected_pattern);

        Ok(Self {
            id: ConsultationId::new(),
            name,
            email,
            phone,
            age: non_empty(form.age).unwrap_or_else(|| "Not provided".to_string()),
            consultation_type: non_empty(form.consultation_type)
                .or_else(|| selected_pattern.clone())
                .unwrap_or_else(|| "General Consultation".to_string()),
            selected_pattern: selected_pattern.unwrap_or_else(|| "Not selected".to_string()),
            preferred_date: non_empty(form.preferred_date)
                .unwrap_or_else(|| "Not specified".to_string()),
            message: non_empty(form.message)
                .unwrap_or_else(|| "No additional message provided".to_string()),
            received_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn valid_form() -> ConsultationForm {
        ConsultationForm {
            name: Some("Jane Doe".to_string()),
            email: Some("jane@example.com".to_string()),
            phone: Some("9195551234".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn 必須3項目だけでプレースホルダが補完される() {
        let consultation = Consultation::from_form(valid_form()).unwrap();

        assert_eq!(consultation.name, "Jane Doe");
        assert_eq!(consultation.email, "jane@example.com");
        assert_eq!(consultation.phone, "9195551234");
        assert_eq!(consultation.age, "Not provided");
        assert_eq!(consultation.consultation_type, "General Consultation");
        assert_eq!(consultation.selected_pattern, "Not selected");
        assert_eq!(consultation.preferred_date, "Not specified");
        assert_eq!(consultation.message, "No additional message provided");
    }

    #[rstest]
    #[case::name_missing(ConsultationForm { name: None, ..valid_form() })]
    #[case::email_missing(ConsultationForm { email: None, ..valid_form() })]
    #[case::phone_missing(ConsultationForm { phone: None, ..valid_form() })]
    #[case::name_blank(ConsultationForm { name: Some("   ".to_string()), ..valid_form() })]
    fn 必須項目の欠損で規定メッセージのエラーになる(#[case] form: ConsultationForm) {
        let err = Consultation::from_form(form).unwrap_err();
        let DomainError::Validation(message) = err;
        assert_eq!(message, MISSING_REQUIRED_MESSAGE);
    }

    #[rstest]
    #[case("not-an-email")]
    #[case("missing@tld")]
    #[case("spaces in@example.com")]
    #[case("@example.com")]
    fn メール形式不正で規定メッセージのエラーになる(#[case] email: &str) {
        let form = ConsultationForm {
            email: Some(email.to_string()),
            ..valid_form()
        };
        let err = Consultation::from_form(form).unwrap_err();
        let DomainError::Validation(message) = err;
        assert_eq!(message, INVALID_EMAIL_MESSAGE);
    }

    #[test]
    fn 前後の空白がトリムされる() {
        let form = ConsultationForm {
            name: Some("  Jane Doe  ".to_string()),
            email: Some(" jane@example.com ".to_string()),
            age: Some(" 34 ".to_string()),
            ..valid_form()
        };
        let consultation = Consultation::from_form(form).unwrap();

        assert_eq!(consultation.name, "Jane Doe");
        assert_eq!(consultation.email, "jane@example.com");
        assert_eq!(consultation.age, "34");
    }

    #[test]
    fn 相談種別が未指定なら選択パターンを流用する() {
        let form = ConsultationForm {
            selected_pattern: Some("Male - Pattern Stage 3: Deepening recession".to_string()),
            ..valid_form()
        };
        let consultation = Consultation::from_form(form).unwrap();

        assert_eq!(
            consultation.consultation_type,
            "Male - Pattern Stage 3: Deepening recession"
        );
        assert_eq!(
            consultation.selected_pattern,
            "Male - Pattern Stage 3: Deepening recession"
        );
    }

    #[test]
    fn camel_caseのjsonをデシリアライズできる() {
        let json = r#"{
            "name": "Jane Doe",
            "email": "jane@example.com",
            "phone": "9195551234",
            "consultationType": "Hair Transplant",
            "preferredDate": "2024-03-05"
        }"#;
        let form: ConsultationForm = serde_json::from_str(json).unwrap();
        let consultation = Consultation::from_form(form).unwrap();

        assert_eq!(consultation.consultation_type, "Hair Transplant");
        assert_eq!(consultation.preferred_date, "2024-03-05");
    }
}
