//! 会話の蓄積: ペルソナ指示を 1 度だけ入れ、ターンを積んで LLM に渡す

use crate::domain::{RenderedPair, Session};
use crate::ports::outbound::{ChatCompletion, Log, LogRecord};
use common::error::Error;
use common::llm::{CompletionRequest, GenerationParams};
use std::sync::Arc;

/// セッション先頭に置く system 指示
pub const PERSONA_INSTRUCTION: &str = "You are an expert fashion stylist. Provide detailed outfit recommendations based on the occasion, personal style, and trends. Suggest headwear, tops, bottoms, shoes, and accessories while considering seasonality and color coordination.";

pub struct ConversationUseCase {
    completion: Arc<dyn ChatCompletion>,
    log: Arc<dyn Log>,
}

impl ConversationUseCase {
    pub fn new(completion: Arc<dyn ChatCompletion>, log: Arc<dyn Log>) -> Self {
        Self { completion, log }
    }

    /// ユーザー入力を 1 ターン追加して応答を得る。成功時は描画用ペア列を返す。
    ///
    /// 失敗しても user ターンは残す（Transcript::is_pending() が true になる）。
    pub fn submit_turn(
        &self,
        session: &mut Session,
        user_text: &str,
    ) -> Result<Vec<RenderedPair>, Error> {
        let transcript = &mut session.transcript;
        transcript.push_user(user_text);
        let persona_inserted = transcript.ensure_persona(PERSONA_INSTRUCTION);

        let _ = self.log.log(
            &LogRecord::info("turn submitted")
                .layer("usecase")
                .kind("conversation")
                .field("session_id", session.id.as_str())
                .field("turns", transcript.len())
                .field("persona_inserted", persona_inserted),
        );

        let request = CompletionRequest::new(transcript.turns().to_vec(), GenerationParams::chat());
        match self.completion.complete(&request) {
            Ok(answer) => {
                transcript.push_assistant(answer);
                let _ = self.log.log(
                    &LogRecord::info("turn completed")
                        .layer("usecase")
                        .kind("conversation")
                        .field("session_id", session.id.as_str())
                        .field("turns", transcript.len()),
                );
                Ok(transcript.render())
            }
            Err(e) => {
                let _ = self.log.log(
                    &LogRecord::warn("turn failed")
                        .layer("usecase")
                        .kind("conversation")
                        .field("session_id", session.id.as_str())
                        .field("error", e.to_string()),
                );
                Err(e)
            }
        }
    }
}
