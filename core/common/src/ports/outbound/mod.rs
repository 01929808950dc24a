//! Outbound ポート: アプリが外界（LLM・環境変数・ログ）を使うための trait

pub mod chat_completion;
pub mod env_resolver;
pub mod log;

pub use chat_completion::ChatCompletion;
pub use env_resolver::EnvResolver;
pub use log::{now_iso8601, Log, LogLevel, LogRecord};
