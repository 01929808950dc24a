//! profiles.json 用の設定型
//!
//! 例:
//! ```json
//! { "default_provider": "local",
//!   "providers": { "local": { "type": "openai_compat", "base_url": "http://localhost:11434/v1" } } }
//! ```

use crate::llm::factory::ProviderType;
use serde::Deserialize;
use std::collections::HashMap;

/// profiles.json のルート
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfilesConfig {
    /// 未指定時に使うプロファイル名
    #[serde(default, alias = "default")]
    pub default_provider: Option<String>,
    /// プロファイル名 -> プロファイル
    #[serde(default)]
    pub providers: HashMap<String, ProviderProfile>,
}

/// 1 プロファイル分の設定。省略した項目は ProviderType ごとのデフォルトになる
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderProfile {
    #[serde(rename = "type", alias = "provider")]
    pub provider_type: ProviderType,
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default, alias = "default_model")]
    pub model: Option<String>,
    #[serde(default)]
    pub api_key_env: Option<String>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl ProviderProfile {
    /// 種別だけを持つプロファイル
    pub fn of(provider_type: ProviderType) -> Self {
        Self {
            provider_type,
            base_url: None,
            model: None,
            api_key_env: None,
            timeout_secs: None,
        }
    }
}

impl ProfilesConfig {
    /// JSON 文字列からパース（ファイル読みは resolver で行う）
    pub fn parse(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_object() {
        let cfg = ProfilesConfig::parse("{}").unwrap();
        assert!(cfg.default_provider.is_none());
        assert!(cfg.providers.is_empty());
    }

    #[test]
    fn test_parse_profiles_into_provider_type() {
        let json = r#"
        {
            "default_provider": "fast",
            "providers": {
                "fast": { "type": "groq", "model": "llama-3.1-8b-instant" },
                "my_openai": { "type": "openai", "api_key_env": "OPENAI_KEY" },
                "local": { "type": "openai_compat", "base_url": "http://localhost:8080/v1", "timeout_secs": 120 },
                "echo": { "type": "echo" }
            }
        }
        "#;
        let cfg = ProfilesConfig::parse(json).unwrap();
        assert_eq!(cfg.default_provider.as_deref(), Some("fast"));
        assert_eq!(cfg.providers.len(), 4);

        let fast = &cfg.providers["fast"];
        assert_eq!(fast.provider_type, ProviderType::Groq);
        assert_eq!(fast.model.as_deref(), Some("llama-3.1-8b-instant"));

        let my_openai = &cfg.providers["my_openai"];
        assert_eq!(my_openai.provider_type, ProviderType::OpenAi);
        assert_eq!(my_openai.api_key_env.as_deref(), Some("OPENAI_KEY"));

        let local = &cfg.providers["local"];
        assert_eq!(local.provider_type, ProviderType::OpenAiCompat);
        assert_eq!(local.base_url.as_deref(), Some("http://localhost:8080/v1"));
        assert_eq!(local.timeout_secs, Some(120));
        assert!(local.model.is_none());

        assert_eq!(cfg.providers["echo"].provider_type, ProviderType::Echo);
    }

    #[test]
    fn test_parse_aliases() {
        let json = r#"
        {
            "default": "local",
            "providers": {
                "local": { "provider": "ollama", "default_model": "llama3.1" },
                "x": { "type": "gpt" }
            }
        }
        "#;
        let cfg = ProfilesConfig::parse(json).unwrap();
        assert_eq!(cfg.default_provider.as_deref(), Some("local"));
        let local = &cfg.providers["local"];
        assert_eq!(local.provider_type, ProviderType::OpenAiCompat);
        assert_eq!(local.model.as_deref(), Some("llama3.1"));
        assert_eq!(cfg.providers["x"].provider_type, ProviderType::OpenAi);
    }

    #[test]
    fn test_parse_unknown_or_missing_type_is_error() {
        assert!(ProfilesConfig::parse(r#"{ "providers": { "x": { "type": "gemini" } } }"#).is_err());
        assert!(ProfilesConfig::parse(r#"{ "providers": { "x": { "model": "m" } } }"#).is_err());
    }
}
