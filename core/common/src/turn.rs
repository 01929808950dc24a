//! 型付き会話ターン（Turn）
//!
//! 会話履歴は Vec<Turn> で保持し、LLM アダプタが各 API のリクエスト形式に変換する。

use serde::{Deserialize, Serialize};

/// 発話者のロール
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl Role {
    /// Chat Completions API の role 文字列
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::System => "system",
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 会話の 1 ターン（作成後は不変）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", content = "content", rename_all = "lowercase")]
pub enum Turn {
    System(String),
    User(String),
    Assistant(String),
}

impl Turn {
    pub fn system(s: impl Into<String>) -> Self {
        Turn::System(s.into())
    }
    pub fn user(s: impl Into<String>) -> Self {
        Turn::User(s.into())
    }
    pub fn assistant(s: impl Into<String>) -> Self {
        Turn::Assistant(s.into())
    }

    pub fn role(&self) -> Role {
        match self {
            Turn::System(_) => Role::System,
            Turn::User(_) => Role::User,
            Turn::Assistant(_) => Role::Assistant,
        }
    }

    pub fn content(&self) -> &str {
        match self {
            Turn::System(s) | Turn::User(s) | Turn::Assistant(s) => s,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_role_and_content() {
        let u = Turn::user("Hi");
        let a = Turn::assistant("Hello");
        assert_eq!(u.role(), Role::User);
        assert_eq!(u.content(), "Hi");
        assert_eq!(a.role(), Role::Assistant);
        assert_eq!(a.content(), "Hello");
        assert_eq!(Turn::system("sys").role().as_str(), "system");
    }

    #[test]
    fn test_turn_empty_content_allowed() {
        let u = Turn::user("");
        assert_eq!(u.content(), "");
    }

    #[test]
    fn test_turn_serialize_as_role_content() {
        let json = serde_json::to_value(Turn::user("What should I wear?")).unwrap();
        assert_eq!(json["role"], "user");
        assert_eq!(json["content"], "What should I wear?");
    }
}
