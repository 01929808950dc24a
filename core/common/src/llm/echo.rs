//! Echoプロバイダの実装
//!
//! このプロバイダは実際にLLM APIを呼び出さず、最後のメッセージをそのまま返します。
//! ネットワーク無しでの動作確認やデモに使用します。

use crate::error::Error;
use crate::llm::provider::LlmProvider;
use crate::llm::request::CompletionRequest;
use serde_json::{json, Value};

/// Echoプロバイダ
#[derive(Debug, Clone, Default)]
pub struct EchoProvider;

impl EchoProvider {
    pub fn new() -> Self {
        Self
    }
}

impl LlmProvider for EchoProvider {
    fn name(&self) -> &str {
        "echo"
    }

    fn make_request_payload(&self, request: &CompletionRequest) -> Result<Value, Error> {
        let messages: Vec<Value> = request
            .messages
            .iter()
            .map(|t| json!({ "role": t.role().as_str(), "content": t.content() }))
            .collect();
        Ok(json!({ "messages": messages }))
    }

    fn make_http_request(&self, request_json: &str) -> Result<String, Error> {
        // 実際の API 呼び出しは行わず、リクエストをそのままレスポンスとして扱う
        Ok(request_json.to_string())
    }

    fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error> {
        let v: Value = serde_json::from_str(response_json)
            .map_err(|e| Error::json(format!("Failed to parse echo payload: {}", e)))?;
        let last = v["messages"]
            .as_array()
            .and_then(|m| m.last())
            .and_then(|m| m["content"].as_str())
            .unwrap_or("");
        Ok(Some(format!("[echo] {}", last)))
    }
}
