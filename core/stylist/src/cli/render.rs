//! 画面出力用の整形

use crate::domain::{LabelKey, LanguageProfile, RenderedPair};
use common::error::Error;

/// 応答生成に失敗したときに表示する文言
pub const UPSTREAM_FAILURE_MESSAGE: &str = "Could not generate a response. Please try again.";

/// ラベル中の HTML タグを外す（見出しの終わりは改行にする）
pub fn strip_markup(text: &str) -> String {
    let text = text.replace("</h1>", "\n");
    let mut out = String::with_capacity(text.len());
    let mut in_tag = false;
    for c in text.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out.trim().to_string()
}

/// 1 ペアを表示用に整形する。user 側は "> " を付ける。
pub fn format_pair(pair: &RenderedPair) -> String {
    let mut lines: Vec<String> = Vec::new();
    if let Some(user) = &pair.user {
        lines.push(format!("> {}", user));
    }
    if let Some(assistant) = &pair.assistant {
        lines.push(assistant.clone());
    }
    lines.join("\n")
}

/// 貼り替え対象のラベルを "key: text" の行にする
pub fn format_labels(profile: &LanguageProfile) -> Result<String, Error> {
    let texts = profile.relabel()?;
    Ok(LabelKey::RELABEL_ORDER
        .iter()
        .zip(texts)
        .map(|(key, text)| format!("{}: {}", key.as_str(), strip_markup(text)))
        .collect::<Vec<_>>()
        .join("\n"))
}
