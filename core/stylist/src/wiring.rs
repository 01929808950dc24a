//! 配線: 標準アダプタでアプリを組み立てる

use std::sync::Arc;

use common::adapter::{FileJsonLog, NoopLog, StdEnvResolver};
use common::ports::outbound::{EnvResolver, Log};

use crate::adapter::{StdCompletionFactory, StdProfileLister};
use crate::ports::outbound::{CompletionFactory, ProfileLister};
use crate::usecase::LocalizationUseCase;

/// main が使う依存一式。LLM を使うユースケースはコマンド実行時に completion_factory から組み立てる。
pub struct App {
    pub env_resolver: Arc<dyn EnvResolver>,
    pub logger: Arc<dyn Log>,
    pub completion_factory: Arc<dyn CompletionFactory>,
    pub profile_lister: Arc<dyn ProfileLister>,
    pub localization: LocalizationUseCase,
}

/// ログ出力先が解決できなければ NoopLog
fn wire_logger(env_resolver: &dyn EnvResolver) -> Arc<dyn Log> {
    match env_resolver.resolve_log_path() {
        Ok(path) => Arc::new(FileJsonLog::new(path)),
        Err(_) => Arc::new(NoopLog),
    }
}

pub fn wire_stylist() -> App {
    let env_resolver: Arc<dyn EnvResolver> = Arc::new(StdEnvResolver);
    let logger = wire_logger(env_resolver.as_ref());
    let completion_factory = Arc::new(StdCompletionFactory::new(
        Arc::clone(&env_resolver),
        Arc::clone(&logger),
    ));
    let profile_lister = Arc::new(StdProfileLister::new(Arc::clone(&env_resolver)));
    let localization = LocalizationUseCase::new(Arc::clone(&logger));
    App {
        env_resolver,
        logger,
        completion_factory,
        profile_lister,
        localization,
    }
}
