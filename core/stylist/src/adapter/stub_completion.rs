//! テスト用: 決まった応答を返し、受け取ったリクエストを記録する ChatCompletion 実装と、
//! それを配る CompletionFactory・ログを溜める Log


#[cfg(test)]
pub use stub::{RecordingLog, StubCompletion, StubCompletionFactory};
