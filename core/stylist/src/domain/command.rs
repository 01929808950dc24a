//! stylist コマンドの enum（Command Pattern）

use crate::domain::OutfitRequest;

/// stylist の実行モード
#[derive(Debug, Clone, PartialEq)]
pub enum StylistCommand {
    /// ヘルプ表示
    Help,
    /// プロファイル一覧
    ListProfiles,
    /// 対話（標準入力から 1 行ずつ）
    Chat {
        profile: Option<String>,
        model: Option<String>,
    },
    /// 手持ちの服からコーディネートを 1 回提案
    Organize {
        profile: Option<String>,
        model: Option<String>,
        request: OutfitRequest,
    },
    /// 現在の言語のラベル表示
    Labels,
}

impl StylistCommand {
    /// ログ用の短い名前
    pub fn name(&self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::ListProfiles => "profiles",
            Self::Chat { .. } => "chat",
            Self::Organize { .. } => "organize",
            Self::Labels => "labels",
        }
    }
}
