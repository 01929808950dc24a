//! プロバイダファクトリー
//!
//! プロバイダタイプに基づいて適切なプロバイダを作成します。

use crate::error::Error;
use crate::llm::driver::LlmDriver;
use crate::llm::echo::EchoProvider;
use crate::llm::openai_compat::{OpenAiCompatProvider, OPENAI_BASE_URL, OPENAI_MODEL};
use crate::llm::provider::LlmProvider;
use crate::llm::request::CompletionRequest;
use serde::Deserialize;
use serde_json::Value;

const GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";
const GROQ_MODEL: &str = "llama3-70b-8192";

/// プロバイダタイプ
///
/// profiles.json の "type" もこの enum へ直接デシリアライズする。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderType {
    /// Groq（OpenAI 互換エンドポイント、GROQ_API_KEY）
    Groq,
    /// OpenAI（OPENAI_API_KEY）
    #[serde(rename = "openai", alias = "gpt")]
    OpenAi,
    /// 任意の OpenAI Chat Completions 互換 (/chat/completions)
    #[serde(rename = "openai_compat", alias = "ollama")]
    OpenAiCompat,
    /// Echo（最後のメッセージを返すだけ）
    Echo,
}

impl ProviderType {
    /// 文字列からプロバイダタイプを解析
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "groq" => Some(Self::Groq),
            "openai" | "gpt" => Some(Self::OpenAi),
            "openai_compat" => Some(Self::OpenAiCompat),
            "echo" => Some(Self::Echo),
            _ => None,
        }
    }

    /// プロバイダタイプを文字列に変換
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Groq => "groq",
            Self::OpenAi => "openai",
            Self::OpenAiCompat => "openai_compat",
            Self::Echo => "echo",
        }
    }

    fn default_base_url(&self) -> Option<&'static str> {
        match self {
            Self::Groq => Some(GROQ_BASE_URL),
            Self::OpenAi => Some(OPENAI_BASE_URL),
            Self::OpenAiCompat | Self::Echo => None,
        }
    }

    fn default_model(&self) -> Option<&'static str> {
        match self {
            Self::Groq => Some(GROQ_MODEL),
            Self::OpenAi => Some(OPENAI_MODEL),
            Self::OpenAiCompat | Self::Echo => None,
        }
    }

    fn default_api_key_env(&self) -> Option<&'static str> {
        match self {
            Self::Groq => Some("GROQ_API_KEY"),
            Self::OpenAi => Some("OPENAI_API_KEY"),
            Self::OpenAiCompat | Self::Echo => None,
        }
    }
}

/// プロバイダのenumラッパー
///
/// 異なるプロバイダタイプを型安全に扱うために使用します。
pub enum AnyProvider {
    OpenAiCompat(OpenAiCompatProvider),
    Echo(EchoProvider),
}

impl LlmProvider for AnyProvider {
    fn name(&self) -> &str {
        match self {
            Self::OpenAiCompat(p) => p.name(),
            Self::Echo(p) => p.name(),
        }
    }

    fn make_request_payload(&self, request: &CompletionRequest) -> Result<Value, Error> {
        match self {
            Self::OpenAiCompat(p) => p.make_request_payload(request),
            Self::Echo(p) => p.make_request_payload(request),
        }
    }

    fn make_http_request(&self, request_json: &str) -> Result<String, Error> {
        match self {
            Self::OpenAiCompat(p) => p.make_http_request(request_json),
            Self::Echo(p) => p.make_http_request(request_json),
        }
    }

    fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error> {
        match self {
            Self::OpenAiCompat(p) => p.parse_response_text(response_json),
            Self::Echo(p) => p.parse_response_text(response_json),
        }
    }
}

/// プロバイダを作成する
///
/// # Arguments
/// * `provider_type` - プロバイダタイプ
/// * `model` - モデル名（None のとき各プロバイダのデフォルト）
/// * `base_url` - ベース URL（None のとき各プロバイダのデフォルト）
/// * `api_key_env` - API キーを読む環境変数名（None のとき各プロバイダのデフォルト）
/// * `timeout_secs` - HTTP タイムアウト秒
pub fn create_provider(
    provider_type: ProviderType,
    model: Option<String>,
    base_url: Option<String>,
    api_key_env: Option<String>,
    timeout_secs: Option<u64>,
) -> Result<AnyProvider, Error> {
    if provider_type == ProviderType::Echo {
        return Ok(AnyProvider::Echo(EchoProvider::new()));
    }
    let provider = OpenAiCompatProvider::new(
        model.or_else(|| provider_type.default_model().map(str::to_string)),
        base_url.or_else(|| provider_type.default_base_url().map(str::to_string)),
        api_key_env.or_else(|| provider_type.default_api_key_env().map(str::to_string)),
        timeout_secs,
    )?;
    Ok(AnyProvider::OpenAiCompat(provider))
}

/// ドライバーを作成する
pub fn create_driver(
    provider_type: ProviderType,
    model: Option<String>,
    base_url: Option<String>,
    api_key_env: Option<String>,
    timeout_secs: Option<u64>,
) -> Result<LlmDriver<AnyProvider>, Error> {
    let provider = create_provider(provider_type, model, base_url, api_key_env, timeout_secs)?;
    Ok(LlmDriver::new(provider))
}
