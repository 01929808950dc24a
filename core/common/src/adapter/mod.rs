//! アダプター（outbound ポートの標準実装）
//!
//! usecase は ports::outbound の trait 経由でのみ環境変数・ログに触れる。
//! 実装は標準実装（Std*）やテスト用の Noop を注入する。

pub mod file_json_log;
pub mod std_env_resolver;

pub use file_json_log::{FileJsonLog, NoopLog};
pub use std_env_resolver::StdEnvResolver;
