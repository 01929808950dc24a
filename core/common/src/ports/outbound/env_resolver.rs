//! 環境変数解決 Outbound ポート
//!
//! ホームディレクトリ・設定ファイル・ログファイル・初期言語を環境変数から解決する。
//! usecase / wiring はこの trait 経由でのみ環境変数にアクセスする。

use crate::error::Error;
use std::path::PathBuf;

/// 環境変数解決抽象（Outbound ポート）
///
/// 実装は `common::adapter::StdEnvResolver` やテスト用のモックなど。
pub trait EnvResolver: Send + Sync {
    /// ホームディレクトリを環境変数から解決する
    ///
    /// 優先順位:
    /// 1. STYLIST_HOME（設定されていれば）
    /// 2. $XDG_CONFIG_HOME/stylist（XDG_CONFIG_HOME が設定されていれば）
    /// 3. $HOME/.config/stylist
    fn resolve_home_dir(&self) -> Result<PathBuf, Error>;

    /// プロバイダプロファイル設定ファイルのパス
    /// STYLIST_HOME があれば $STYLIST_HOME/config/profiles.json、なければ resolve_home_dir() 直下の profiles.json
    fn resolve_profiles_config_path(&self) -> Result<PathBuf, Error>;

    /// JSONL ログの出力先（resolve_home_dir()/log/stylist.jsonl）
    fn resolve_log_path(&self) -> Result<PathBuf, Error>;

    /// STYLIST_LANG（未設定・空なら None）
    fn default_language(&self) -> Option<String>;
}
