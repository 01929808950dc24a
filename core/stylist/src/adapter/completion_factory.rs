//! プロファイル解決から ChatCompletion を組み立てる標準アダプタ

use std::sync::Arc;

use common::error::Error;
use common::llm::{create_driver, load_profiles_config, resolve_provider};
use common::ports::outbound::EnvResolver;

use crate::adapter::LoggedCompletion;
use crate::ports::outbound::{ChatCompletion, CompletionFactory, Log, LogRecord};

/// profiles.json → ResolvedProvider → LlmDriver（LoggedCompletion で包む）
pub struct StdCompletionFactory {
    env_resolver: Arc<dyn EnvResolver>,
    log: Arc<dyn Log>,
}

impl StdCompletionFactory {
    pub fn new(env_resolver: Arc<dyn EnvResolver>, log: Arc<dyn Log>) -> Self {
        Self { env_resolver, log }
    }
}

impl CompletionFactory for StdCompletionFactory {
    fn create(
        &self,
        profile: Option<&str>,
        model: Option<&str>,
    ) -> Result<Arc<dyn ChatCompletion>, Error> {
        let cfg = load_profiles_config(self.env_resolver.as_ref())?;
        let resolved = resolve_provider(profile, cfg.as_ref())?;
        // -m はプロファイルの model より優先
        let model = model.map(str::to_string).or(resolved.model.clone());

        let _ = self.log.log(
            &LogRecord::info("provider resolved")
                .layer("adapter")
                .kind("config")
                .field("profile", resolved.profile_name.as_str())
                .field("provider", resolved.provider_type.as_str())
                .field("model", model.clone().unwrap_or_default()),
        );

        let driver = create_driver(
            resolved.provider_type,
            model,
            resolved.base_url,
            resolved.api_key_env,
            resolved.timeout_secs,
        )?;
        Ok(Arc::new(LoggedCompletion::new(
            Arc::new(driver),
            Arc::clone(&self.log),
            resolved.profile_name,
        )))
    }
}
