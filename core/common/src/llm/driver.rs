//! LLMドライバーの実装
//!
//! プロバイダに依存しない共通処理（payload → HTTP → テキスト抽出）を提供します。

use crate::error::Error;
use crate::llm::provider::LlmProvider;
use crate::llm::request::CompletionRequest;
use crate::ports::outbound::ChatCompletion;

/// LLMドライバー
pub struct LlmDriver<P: LlmProvider> {
    provider: P,
}

impl<P: LlmProvider> LlmDriver<P> {
    /// 新しいドライバーを作成
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// LLMにリクエストを送信して応答テキストを取得
    ///
    /// リトライはしない。失敗はそのまま呼び出し元へ返す。
    pub fn query(&self, request: &CompletionRequest) -> Result<String, Error> {
        let payload = self.provider.make_request_payload(request)?;

        let request_json = serde_json::to_string(&payload)
            .map_err(|e| Error::json(format!("Failed to serialize request: {}", e)))?;

        let response_json = self.provider.make_http_request(&request_json)?;

        self.provider
            .parse_response_text(&response_json)?
            .ok_or_else(|| Error::http("No text in response"))
    }

    /// プロバイダを取得
    pub fn provider(&self) -> &P {
        &self.provider
    }
}

impl<P: LlmProvider> ChatCompletion for LlmDriver<P> {
    fn complete(&self, request: &CompletionRequest) -> Result<String, Error> {
        self.query(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::request::GenerationParams;
    use crate::turn::Turn;
    use serde_json::Value;
    use std::sync::Mutex;

    // モックプロバイダ: 送られた JSON を記録し、固定のレスポンスを返す
    struct MockProvider {
        response: Result<String, Error>,
        sent: Mutex<Vec<String>>,
    }

    impl MockProvider {
        fn answering(text: &str) -> Self {
            Self {
                response: Ok(serde_json::json!({
                    "choices": [{ "message": { "content": text } }]
                })
                .to_string()),
                sent: Mutex::new(Vec::new()),
            }
        }

        fn failing(err: Error) -> Self {
            Self {
                response: Err(err),
                sent: Mutex::new(Vec::new()),
            }
        }
    }

    impl LlmProvider for MockProvider {
        fn name(&self) -> &str {
            "mock"
        }

        fn make_request_payload(&self, request: &CompletionRequest) -> Result<Value, Error> {
            Ok(serde_json::json!({ "messages": request.messages.len() }))
        }

        fn make_http_request(&self, request_json: &str) -> Result<String, Error> {
            self.sent.lock().unwrap().push(request_json.to_string());
            self.response.clone()
        }

        fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error> {
            let v: Value = serde_json::from_str(response_json)
                .map_err(|e| Error::json(e.to_string()))?;
            Ok(v["choices"][0]["message"]["content"]
                .as_str()
                .map(|s| s.to_string()))
        }
    }

    fn request() -> CompletionRequest {
        CompletionRequest::new(vec![Turn::user("hi")], GenerationParams::chat())
    }

    #[test]
    fn test_llm_driver_new() {
        let driver = LlmDriver::new(MockProvider::answering("x"));
        assert_eq!(driver.provider().name(), "mock");
    }

    #[test]
    fn test_llm_driver_complete() {
        let driver = LlmDriver::new(MockProvider::answering("Hello, world!"));
        let text = driver.complete(&request()).unwrap();
        assert_eq!(text, "Hello, world!");
        let sent = driver.provider().sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0], r#"{"messages":1}"#);
    }

    #[test]
    fn test_llm_driver_propagates_http_error() {
        let driver = LlmDriver::new(MockProvider::failing(Error::http("HTTP 401")));
        let err = driver.complete(&request()).unwrap_err();
        assert_eq!(err, Error::http("HTTP 401"));
    }

    #[test]
    fn test_llm_driver_missing_text_is_error() {
        let provider = MockProvider {
            response: Ok(r#"{"choices":[{"message":{"content":null}}]}"#.to_string()),
            sent: Mutex::new(Vec::new()),
        };
        let driver = LlmDriver::new(provider);
        let err = driver.complete(&request()).unwrap_err();
        assert!(err.is_upstream());
        assert_eq!(err.to_string(), "No text in response");
    }
}
