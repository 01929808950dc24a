//! 所要時間と結果をログに残す ChatCompletion デコレータ

use std::sync::Arc;
use std::time::Instant;

use common::error::Error;
use common::llm::CompletionRequest;

use crate::ports::outbound::{ChatCompletion, Log, LogRecord};

pub struct LoggedCompletion {
    inner: Arc<dyn ChatCompletion>,
    log: Arc<dyn Log>,
    profile_name: String,
}

impl LoggedCompletion {
    pub fn new(inner: Arc<dyn ChatCompletion>, log: Arc<dyn Log>, profile_name: impl Into<String>) -> Self {
        Self {
            inner,
            log,
            profile_name: profile_name.into(),
        }
    }
}

impl ChatCompletion for LoggedCompletion {
    fn complete(&self, request: &CompletionRequest) -> Result<String, Error> {
        let started = Instant::now();
        let result = self.inner.complete(request);
        let elapsed_ms = started.elapsed().as_millis() as u64;
        let record = match &result {
            Ok(_) => LogRecord::info("completion finished"),
            Err(e) => LogRecord::warn("completion failed").field("error", e.to_string()),
        };
        let _ = self.log.log(
            &record
                .layer("adapter")
                .kind("perf")
                .field("profile", self.profile_name.as_str())
                .field("messages", request.messages.len())
                .field("max_output_tokens", request.params.max_output_tokens)
                .field("elapsed_ms", elapsed_ms),
        );
        result
    }
}
