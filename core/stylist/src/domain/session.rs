//! 会話セッション（ID + Transcript）

use crate::domain::Transcript;
use common::session_id::generate_session_id;
use std::fmt;

/// セッション ID（8 文字 base62、辞書順＝時系列）
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    pub fn generate() -> Self {
        Self(generate_session_id())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 1 つの会話。Transcript はセッションが専有する。
#[derive(Debug, Clone)]
pub struct Session {
    pub id: SessionId,
    pub transcript: Transcript,
}

impl Session {
    pub fn new() -> Self {
        Self::with_transcript(Transcript::new())
    }

    pub fn with_transcript(transcript: Transcript) -> Self {
        Self {
            id: SessionId::generate(),
            transcript,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
