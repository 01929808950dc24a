//! コーディネート提案: 手持ちの服と場面から 1 回だけ LLM に問い合わせる

use crate::domain::{OutfitReply, OutfitRequest};
use crate::ports::outbound::{ChatCompletion, Log, LogRecord};
use common::error::Error;
use common::llm::{CompletionRequest, GenerationParams};
use common::turn::Turn;
use std::sync::Arc;

pub struct OutfitUseCase {
    completion: Arc<dyn ChatCompletion>,
    log: Arc<dyn Log>,
}

impl OutfitUseCase {
    pub fn new(completion: Arc<dyn ChatCompletion>, log: Arc<dyn Log>) -> Self {
        Self { completion, log }
    }

    /// 入力がすべて空なら LLM を呼ばずに NeedsInput。それ以外は system メッセージ 1 つで問い合わせる。
    pub fn organize(&self, request: &OutfitRequest) -> Result<OutfitReply, Error> {
        if request.is_blank() {
            let _ = self.log.log(
                &LogRecord::info("outfit rejected")
                    .layer("usecase")
                    .kind("outfit")
                    .field("reason", "no input"),
            );
            return Ok(OutfitReply::NeedsInput);
        }

        let completion_request = CompletionRequest::new(
            vec![Turn::system(request.compose_instruction())],
            GenerationParams::outfit(),
        );
        let text = self.completion.complete(&completion_request)?;
        let _ = self.log.log(
            &LogRecord::info("outfit organized")
                .layer("usecase")
                .kind("outfit")
                .field("chars", text.chars().count()),
        );
        Ok(OutfitReply::Generated(text))
    }
}
