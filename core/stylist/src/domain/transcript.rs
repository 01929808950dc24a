//! 会話履歴（Transcript）と描画用ペア
//!
//! 不変条件: 空でなければ先頭は system ターン。system ターンは高々 1 つ。

#[cfg(test)]
use common::error::Error;
use common::turn::{Role, Turn};

/// 描画用の 1 行（user 側 / assistant 側。無い側は None）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPair {
    pub user: Option<String>,
    pub assistant: Option<String>,
}

/// 1 セッション分の順序付き会話履歴
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// 既存のターン列から復元する。system ターンが先頭以外にある・複数ある場合はエラー。
    #[cfg(test)]
    pub fn from_turns(turns: Vec<Turn>) -> Result<Self, Error> {
        let system_positions: Vec<usize> = turns
            .iter()
            .enumerate()
            .filter(|(_, t)| t.role() == Role::System)
            .map(|(i, _)| i)
            .collect();
        match system_positions.as_slice() {
            [] | [0] => Ok(Self { turns }),
            _ => Err(Error::invalid_argument(
                "transcript must hold at most one system turn, at index 0",
            )),
        }
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn has_system_turn(&self) -> bool {
        self.turns.iter().any(|t| t.role() == Role::System)
    }

    /// system ターンが無ければ先頭に挿入する。挿入したら true。
    pub fn ensure_persona(&mut self, instruction: &str) -> bool {
        if self.has_system_turn() {
            return false;
        }
        self.turns.insert(0, Turn::system(instruction));
        true
    }

    pub fn push_user(&mut self, content: impl Into<String>) {
        self.turns.push(Turn::user(content));
    }

    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.turns.push(Turn::assistant(content));
    }

    /// 最後のターンが user（応答待ち・応答失敗）なら true
    pub fn is_pending(&self) -> bool {
        matches!(self.turns.last(), Some(Turn::User(_)))
    }

    /// ロールだけを見てペアを組み立てる。
    ///
    /// user ターンがペアを開き、直後の assistant ターンがそのペアを埋める。
    /// 開いたペアが無い assistant ターンは (None, Some) として単独で出る。
    /// system ターンは描画しない。
    pub fn render(&self) -> Vec<RenderedPair> {
        let mut pairs: Vec<RenderedPair> = Vec::new();
        let mut open = false;
        for turn in &self.turns {
            match turn {
                Turn::System(_) => {}
                Turn::User(content) => {
                    pairs.push(RenderedPair {
                        user: Some(content.clone()),
                        assistant: None,
                    });
                    open = true;
                }
                Turn::Assistant(content) => match pairs.last_mut() {
                    Some(last) if open => {
                        last.assistant = Some(content.clone());
                        open = false;
                    }
                    _ => pairs.push(RenderedPair {
                        user: None,
                        assistant: Some(content.clone()),
                    }),
                },
            }
        }
        pairs
    }
}
