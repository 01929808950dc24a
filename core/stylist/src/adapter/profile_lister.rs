//! プロファイル一覧取得アダプタ（common::llm の load_profiles_config / list_profiles を使用）

use std::sync::Arc;

use common::error::Error;
use common::ports::outbound::EnvResolver;

use crate::ports::outbound::ProfileLister;

/// 標準プロファイル一覧取得（profiles.json + ビルトイン）
pub struct StdProfileLister {
    env_resolver: Arc<dyn EnvResolver>,
}

impl StdProfileLister {
    pub fn new(env_resolver: Arc<dyn EnvResolver>) -> Self {
        Self { env_resolver }
    }
}

impl ProfileLister for StdProfileLister {
    fn list_profiles(&self) -> Result<(Vec<String>, String), Error> {
        let cfg = common::llm::load_profiles_config(self.env_resolver.as_ref())?;
        Ok(common::llm::list_profiles(cfg.as_ref()))
    }
}
