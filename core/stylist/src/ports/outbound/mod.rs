//! Outbound ポート: usecase / main が外界を使うための trait
//!
//! LLM 呼び出し・ログは common のポートをそのまま使う。

pub mod completion_factory;
pub mod profile_lister;

pub use common::ports::outbound::{ChatCompletion, Log, LogRecord};
pub use completion_factory::CompletionFactory;
pub use profile_lister::ProfileLister;
