//! ChatCompletion 生成の Outbound ポート
//!
//! -p / -m で指定されたプロファイル・モデルから ChatCompletion を組み立てる。

use crate::ports::outbound::ChatCompletion;
use common::error::Error;
use std::sync::Arc;

pub trait CompletionFactory: Send + Sync {
    /// profile が None なら profiles.json の default（無ければ groq）
    fn create(
        &self,
        profile: Option<&str>,
        model: Option<&str>,
    ) -> Result<Arc<dyn ChatCompletion>, Error>;
}
