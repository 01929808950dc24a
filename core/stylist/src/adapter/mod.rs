//! stylist 固有のアダプター（ports::outbound の標準実装とテスト用 Stub）

mod completion_factory;
mod logged_completion;
mod profile_lister;
mod stub_completion;

pub use completion_factory::StdCompletionFactory;
pub use logged_completion::LoggedCompletion;
pub use profile_lister::StdProfileLister;

#[cfg(test)]
pub use stub_completion::{RecordingLog, StubCompletion, StubCompletionFactory};
