//! Chat Completion の Outbound ポート
//!
//! 会話・コーディネート提案の両ユースケースはこの trait 経由でのみ LLM を呼ぶ。
//! 実装は LlmDriver（HTTP）やテスト用の Stub。

use crate::error::Error;
use crate::llm::request::CompletionRequest;

/// 単発の Chat Completion（メッセージ列 → assistant の応答本文）
pub trait ChatCompletion: Send + Sync {
    fn complete(&self, request: &CompletionRequest) -> Result<String, Error>;
}
