//! コーディネート提案のリクエストと応答

use crate::domain::Wardrobe;

/// 入力が 1 つも無いときに返す固定メッセージ
pub const MISSING_INPUT_MESSAGE: &str = "Please provide all the necessary information.";

/// 場面・天候・性別（そのまま指示文に埋め込む）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutfitContext {
    pub occasion: String,
    pub weather: String,
    pub gender: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutfitRequest {
    pub wardrobe: Wardrobe,
    pub context: OutfitContext,
}

impl OutfitRequest {
    /// 8 つの入力すべてが空白のみなら true
    pub fn is_blank(&self) -> bool {
        self.wardrobe.is_blank()
            && [
                &self.context.occasion,
                &self.context.weather,
                &self.context.gender,
            ]
            .iter()
            .all(|s| s.trim().is_empty())
    }

    /// LLM に送る system 指示文
    pub fn compose_instruction(&self) -> String {
        format!(
            "Given the following available clothing items, organize multiple stylish outfit combinations for a {} attending a {} in {} weather. \n\n{}\n\nFeel free to mix and match, suggest creative styling options, and fill in missing pieces where necessary.",
            self.context.gender,
            self.context.occasion,
            self.context.weather,
            self.wardrobe.describe()
        )
    }
}

/// organize の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutfitReply {
    /// LLM が返した本文（加工しない）
    Generated(String),
    /// 入力が空だった（LLM は呼んでいない）
    NeedsInput,
}

impl OutfitReply {
    pub fn text(&self) -> &str {
        match self {
            Self::Generated(text) => text,
            Self::NeedsInput => MISSING_INPUT_MESSAGE,
        }
    }
}
