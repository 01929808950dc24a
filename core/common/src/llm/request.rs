//! 単発の Chat Completion リクエスト（メッセージ列 + 生成パラメータ）

use crate::turn::Turn;

/// 生成パラメータ
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationParams {
    pub temperature: f64,
    pub top_p: f64,
    pub max_output_tokens: u32,
    /// 常に false（ストリーミングは扱わない）
    pub stream: bool,
    pub stop: Option<Vec<String>>,
}

impl GenerationParams {
    /// 会話（チャット）用: 長めの応答を許す
    pub fn chat() -> Self {
        Self {
            temperature: 0.6,
            top_p: 0.95,
            max_output_tokens: 4096,
            stream: false,
            stop: None,
        }
    }

    /// コーディネート提案（単発）用
    pub fn outfit() -> Self {
        Self {
            max_output_tokens: 1024,
            ..Self::chat()
        }
    }
}

/// LLM に渡すリクエスト
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub messages: Vec<Turn>,
    pub params: GenerationParams,
}

impl CompletionRequest {
    pub fn new(messages: Vec<Turn>, params: GenerationParams) -> Self {
        Self { messages, params }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_params() {
        let p = GenerationParams::chat();
        assert_eq!(p.temperature, 0.6);
        assert_eq!(p.top_p, 0.95);
        assert_eq!(p.max_output_tokens, 4096);
        assert!(!p.stream);
        assert!(p.stop.is_none());
    }

    #[test]
    fn test_outfit_params_only_differ_in_max_tokens() {
        let p = GenerationParams::outfit();
        assert_eq!(p.max_output_tokens, 1024);
        assert_eq!(p.temperature, GenerationParams::chat().temperature);
        assert_eq!(p.top_p, GenerationParams::chat().top_p);
        assert!(!p.stream);
    }
}
