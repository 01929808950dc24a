//! OpenAI Chat Completions 互換 (/chat/completions) プロバイダ
//!
//! base_url で任意のエンドポイント（OpenAI・Groq・ローカルの互換サーバ）を指定可能。
//! 非ストリーミングのみ。

use crate::error::Error;
use crate::llm::provider::LlmProvider;
use crate::llm::request::CompletionRequest;
use serde_json::{json, Value};
use std::env;
use std::time::Duration;

pub(crate) const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub(crate) const OPENAI_MODEL: &str = "gpt-4o-mini";
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// OpenAI Chat Completions 互換プロバイダ
pub struct OpenAiCompatProvider {
    model: String,
    base_url: String,
    api_key_env: Option<String>,
    client: reqwest::blocking::Client,
}

impl OpenAiCompatProvider {
    /// 新しいプロバイダを作成
    ///
    /// * `model` - モデル名（None のとき OPENAI_MODEL）
    /// * `base_url` - ベース URL（None のとき OPENAI_BASE_URL）
    /// * `api_key_env` - API キーを読む環境変数名（None のとき Authorization を付けない）
    /// * `timeout_secs` - リクエストのタイムアウト秒（None のとき 60）
    pub fn new(
        model: Option<String>,
        base_url: Option<String>,
        api_key_env: Option<String>,
        timeout_secs: Option<u64>,
    ) -> Result<Self, Error> {
        let model = model.unwrap_or_else(|| OPENAI_MODEL.to_string());
        let base_url = base_url
            .unwrap_or_else(|| OPENAI_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)))
            .build()
            .map_err(|e| Error::http(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            model,
            base_url,
            api_key_env,
            client,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    /// api_key_env が指定されているのに値が無い場合はエラー（資格情報は環境から渡される前提）
    fn auth_header(&self) -> Result<Option<String>, Error> {
        let Some(name) = self.api_key_env.as_ref() else {
            return Ok(None);
        };
        match env::var(name) {
            Ok(key) if !key.trim().is_empty() => Ok(Some(format!("Bearer {}", key.trim()))),
            _ => Err(Error::env(format!("{} environment variable is not set", name))),
        }
    }
}

/// 非 2xx レスポンス本文からエラーメッセージを取り出す
fn error_message(status: reqwest::StatusCode, body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(|s| s.to_string()))
        .unwrap_or_else(|| format!("HTTP {}: {}", status, body))
}

impl LlmProvider for OpenAiCompatProvider {
    fn name(&self) -> &str {
        "openai_compat"
    }

    fn make_request_payload(&self, request: &CompletionRequest) -> Result<Value, Error> {
        let messages: Vec<Value> = request
            .messages
            .iter()
            .map(|t| json!({ "role": t.role().as_str(), "content": t.content() }))
            .collect();

        let params = &request.params;
        let mut payload = json!({
            "model": self.model,
            "messages": messages,
            "temperature": params.temperature,
            "top_p": params.top_p,
            "max_completion_tokens": params.max_output_tokens,
            "stream": params.stream
        });
        if let Some(ref stop) = params.stop {
            payload["stop"] = json!(stop);
        }
        Ok(payload)
    }

    fn make_http_request(&self, request_json: &str) -> Result<String, Error> {
        let mut builder = self
            .client
            .post(self.url())
            .header("Content-Type", "application/json")
            .body(request_json.to_string());

        if let Some(auth) = self.auth_header()? {
            builder = builder.header("Authorization", auth);
        }

        let response = builder
            .send()
            .map_err(|e| Error::http(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        let response_text = response
            .text()
            .map_err(|e| Error::http(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            return Err(Error::http(format!(
                "Chat completions error: {}",
                error_message(status, &response_text)
            )));
        }

        Ok(response_text)
    }

    fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error> {
        let v: Value = serde_json::from_str(response_json)
            .map_err(|e| Error::json(format!("Failed to parse response JSON: {}", e)))?;

        if let Some(err) = v.get("error") {
            let msg = err["message"].as_str().unwrap_or("Unknown error");
            return Err(Error::http(format!("API error: {}", msg)));
        }

        Ok(v["choices"][0]["message"]["content"]
            .as_str()
            .map(|s| s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::request::GenerationParams;
    use crate::turn::Turn;

    fn provider() -> OpenAiCompatProvider {
        OpenAiCompatProvider::new(
            Some("llama3-70b-8192".to_string()),
            Some("https://api.example.com/v1/".to_string()),
            None,
            None,
        )
        .unwrap()
    }

    #[test]
    fn test_openai_compat_defaults() {
        let p = OpenAiCompatProvider::new(None, None, None, None).unwrap();
        assert_eq!(p.model(), OPENAI_MODEL);
        assert_eq!(p.url(), format!("{}/chat/completions", OPENAI_BASE_URL));
    }

    #[test]
    fn test_openai_compat_url_trims_trailing_slash() {
        assert_eq!(provider().url(), "https://api.example.com/v1/chat/completions");
    }

    #[test]
    fn test_openai_compat_make_request_payload_chat() {
        let p = provider();
        let request = CompletionRequest::new(
            vec![
                Turn::system("You are helpful."),
                Turn::user("A"),
                Turn::assistant("B"),
                Turn::user("C"),
            ],
            GenerationParams::chat(),
        );
        let payload = p.make_request_payload(&request).unwrap();
        assert_eq!(payload["model"], "llama3-70b-8192");
        assert_eq!(payload["temperature"], 0.6);
        assert_eq!(payload["top_p"], 0.95);
        assert_eq!(payload["max_completion_tokens"], 4096);
        assert_eq!(payload["stream"], false);
        assert!(payload.get("stop").is_none());

        let messages = payload["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 4);
        assert_eq!(messages[0]["role"], "system");
        assert_eq!(messages[0]["content"], "You are helpful.");
        assert_eq!(messages[1]["role"], "user");
        assert_eq!(messages[2]["role"], "assistant");
        assert_eq!(messages[2]["content"], "B");
        assert_eq!(messages[3]["content"], "C");
    }

    #[test]
    fn test_openai_compat_make_request_payload_with_stop() {
        let mut params = GenerationParams::outfit();
        params.stop = Some(vec!["###".to_string()]);
        let request = CompletionRequest::new(vec![Turn::system("s")], params);
        let payload = provider().make_request_payload(&request).unwrap();
        assert_eq!(payload["max_completion_tokens"], 1024);
        assert_eq!(payload["stop"][0], "###");
    }

    #[test]
    fn test_openai_compat_parse_response_text() {
        let json = r#"{"choices":[{"message":{"role":"assistant","content":"Hello world"}}]}"#;
        let text = provider().parse_response_text(json).unwrap();
        assert_eq!(text.as_deref(), Some("Hello world"));
    }

    #[test]
    fn test_openai_compat_parse_response_text_empty_content() {
        let json = r#"{"choices":[{"message":{"role":"assistant","content":null}}]}"#;
        assert_eq!(provider().parse_response_text(json).unwrap(), None);
    }

    #[test]
    fn test_openai_compat_parse_response_error_object() {
        let json = r#"{"error":{"message":"Invalid API Key"}}"#;
        let err = provider().parse_response_text(json).unwrap_err();
        assert_eq!(err, Error::http("API error: Invalid API Key"));
    }

    #[test]
    fn test_openai_compat_parse_response_malformed() {
        let err = provider().parse_response_text("not json").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_error_message_prefers_api_message() {
        let msg = error_message(
            reqwest::StatusCode::TOO_MANY_REQUESTS,
            r#"{"error":{"message":"Rate limit reached"}}"#,
        );
        assert_eq!(msg, "Rate limit reached");
        let msg = error_message(reqwest::StatusCode::BAD_GATEWAY, "upstream down");
        assert_eq!(msg, "HTTP 502 Bad Gateway: upstream down");
    }

    #[test]
    fn test_missing_api_key_fails_before_sending() {
        let p = OpenAiCompatProvider::new(
            None,
            Some("http://127.0.0.1:9/v1".to_string()),
            Some("STYLIST_TEST_KEY_THAT_IS_NEVER_SET".to_string()),
            Some(1),
        )
        .unwrap();
        let err = p.make_http_request("{}").unwrap_err();
        assert_eq!(
            err,
            Error::env("STYLIST_TEST_KEY_THAT_IS_NEVER_SET environment variable is not set")
        );
    }
}
