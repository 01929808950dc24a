//! ラベル表の読み出しと言語切り替え

use crate::domain::{profile_for, ActiveLanguage, Language, LanguageProfile};
use crate::ports::outbound::{Log, LogRecord};
use std::sync::Arc;

pub struct LocalizationUseCase {
    log: Arc<dyn Log>,
}

impl LocalizationUseCase {
    pub fn new(log: Arc<dyn Log>) -> Self {
        Self { log }
    }

    /// 現在の言語のラベル表（読むだけ）
    pub fn active_labels(&self, active: &ActiveLanguage) -> &'static LanguageProfile {
        profile_for(active.get())
    }

    /// 言語を切り替えて、そのラベル表を返す
    pub fn switch_to(&self, active: &ActiveLanguage, language: Language) -> &'static LanguageProfile {
        let previous = active.get();
        active.set(language);
        let _ = self.log.log(
            &LogRecord::info("language switched")
                .layer("usecase")
                .kind("localization")
                .field("from", previous.as_str())
                .field("to", language.as_str()),
        );
        profile_for(language)
    }
}
