//! CLI: 引数解析・画面出力・対話ループ

pub mod args;
pub mod render;
pub mod repl;

pub use args::{config_to_command, parse_args, print_completion, ParseOutcome};
