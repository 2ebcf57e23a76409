//! # Lead API 設定
//!
//! 環境変数から Lead API サーバーの設定を読み込む。
//!
//! すべての変数にデフォルトがあり、未設定でもサーバーは起動する。
//! `EMAIL_PASS` が無い場合はメールを送信しないログ専用モードになる。

use std::env;

/// SMTP 認証パスワードのプレースホルダ値
///
/// セットアップ手順書のサンプル値のまま起動された場合を検出し、
/// 認証失敗の代わりにログ専用モードへフォールバックする。
const PLACEHOLDER_PASSWORDS: &[&str] = &[
    "your_outlook_password_or_app_password_here",
    "your_gmail_app_password_here",
    "your_16_character_app_password",
];

/// Lead API サーバーの設定
#[derive(Debug, Clone)]
pub struct LeadConfig {
    /// バインドアドレス
    pub host:       String,
    /// ポート番号
    pub port:       u16,
    /// ビルド済み SPA のディレクトリ
    pub static_dir: String,
    /// メール送信設定
    pub mail:       MailConfig,
}

/// メール送信の設定
///
/// `EMAIL_PASS` の有無（およびプレースホルダ検出）で送信バックエンドを切り替える:
/// - 設定済み: SMTP リレー経由で送信
/// - 未設定: 送信しない（ログ出力のみ）
#[derive(Debug, Clone)]
pub struct MailConfig {
    /// SMTP ホスト
    pub smtp_host:   String,
    /// SMTP ポート
    pub smtp_port:   u16,
    /// 暗黙 TLS を使うか（`true` = 465、`false` = 587 STARTTLS）
    pub smtp_secure: bool,
    /// SMTP 認証アカウント（エンベロープ差出人を兼ねる）
    pub email_user:  String,
    /// SMTP 認証パスワード（未設定ならログ専用モード）
    pub email_pass:  Option<String>,
    /// 管理者通知の宛先（未設定なら `EMAIL_USER` に送る）
    pub admin_email: String,
}

impl LeadConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Self {
        Self {
            host:       env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port:       env::var("PORT")
                .unwrap_or_else(|_| "3001".to_string())
                .parse()
                .expect("PORT は有効なポート番号である必要があります"),
            static_dir: env::var("STATIC_DIR").unwrap_or_else(|_| "dist".to_string()),
            mail:       MailConfig::from_env(),
        }
    }
}

impl MailConfig {
    /// 環境変数からメール送信設定を読み込む
    fn from_env() -> Self {
        let email_user = env::var("EMAIL_USER").unwrap_or_default();
        Self {
            smtp_host:   env::var("SMTP_HOST").unwrap_or_else(|_| "smtp.gmail.com".to_string()),
            smtp_port:   env::var("SMTP_PORT")
                .unwrap_or_else(|_| "587".to_string())
                .parse()
                .expect("SMTP_PORT は有効なポート番号である必要があります"),
            smtp_secure: env::var("SMTP_SECURE").is_ok_and(|v| v == "true"),
            admin_email: env::var("ADMIN_EMAIL").unwrap_or_else(|_| email_user.clone()),
            email_pass:  env::var("EMAIL_PASS").ok(),
            email_user,
        }
    }

    /// SMTP 送信が有効かどうか
    ///
    /// パスワードが未設定、またはセットアップ手順書のプレースホルダ値の
    /// ままの場合は `false`（ログ専用モード）。
    pub fn is_configured(&self) -> bool {
        match &self.email_pass {
            Some(pass) => !PLACEHOLDER_PASSWORDS.contains(&pass.as_str()),
            None => false,
        }
    }

    /// パスワードがプレースホルダのままかどうか
    pub fn has_placeholder_password(&self) -> bool {
        self.email_pass
            .as_deref()
            .is_some_and(|pass| PLACEHOLDER_PASSWORDS.contains(&pass))
    }
}
