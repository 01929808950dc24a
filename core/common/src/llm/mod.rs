//! LLMドライバーとプロバイダの実装
//!
//! このモジュールは、OpenAI 互換エンドポイント（Groq / OpenAI / 任意）と Echo で共通する処理を提供します。

pub mod config;
pub mod driver;
pub mod echo;
pub mod factory;
pub mod openai_compat;
pub mod provider;
pub mod request;
pub mod resolver;

pub use config::{ProfilesConfig, ProviderProfile};
pub use driver::LlmDriver;
pub use factory::{create_driver, create_provider, AnyProvider, ProviderType};
pub use provider::LlmProvider;
pub use request::{CompletionRequest, GenerationParams};
pub use resolver::{list_profiles, load_profiles_config, resolve_provider, ResolvedProvider, DEFAULT_PROFILE};
