//! chat サブコマンドの対話ループ
//!
//! 1 行 = 1 ターン。`/lang <language>` で言語切り替え、`/quit` か EOF で終了。

use std::io::{BufRead, Write};

use common::error::Error;

use crate::cli::render::{format_labels, format_pair, strip_markup, UPSTREAM_FAILURE_MESSAGE};
use crate::domain::{ActiveLanguage, LabelKey, Language, Session};
use crate::usecase::{ConversationUseCase, LocalizationUseCase};

/// 入力 1 行の解釈
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplInput<'a> {
    Quit,
    SwitchLanguage(&'a str),
    Message(&'a str),
}

pub fn parse_line(line: &str) -> ReplInput<'_> {
    let trimmed = line.trim();
    if trimmed == "/quit" {
        return ReplInput::Quit;
    }
    if let Some(rest) = trimmed.strip_prefix("/lang") {
        if rest.is_empty() || rest.starts_with(char::is_whitespace) {
            return ReplInput::SwitchLanguage(rest.trim());
        }
    }
    ReplInput::Message(line)
}

fn write_line<W: Write>(out: &mut W, text: &str) -> Result<(), Error> {
    writeln!(out, "{}", text).map_err(|e| Error::io_msg(e.to_string()))
}

fn write_header<W: Write>(
    out: &mut W,
    localization: &LocalizationUseCase,
    active: &ActiveLanguage,
) -> Result<(), Error> {
    let profile = localization.active_labels(active);
    write_line(out, &strip_markup(profile.label(LabelKey::Title)?))?;
    write_line(out, profile.label(LabelKey::Placeholder)?)
}

/// 標準入力相当から 1 行ずつ読み、会話を進める。
///
/// 応答生成の失敗は表示して続行する。応答待ちで残った user ターンは
/// 失敗文言の前にもう一度表示する。
pub fn run_chat<R: BufRead, W: Write>(
    conversation: &ConversationUseCase,
    localization: &LocalizationUseCase,
    active: &ActiveLanguage,
    session: &mut Session,
    input: R,
    out: &mut W,
) -> Result<i32, Error> {
    write_header(out, localization, active)?;

    for line in input.lines() {
        let line = line.map_err(|e| Error::io_msg(e.to_string()))?;
        match parse_line(&line) {
            ReplInput::Quit => break,
            ReplInput::SwitchLanguage(arg) => match Language::parse(arg) {
                Ok(language) => {
                    let profile = localization.switch_to(active, language);
                    write_line(out, &format_labels(profile)?)?;
                }
                Err(e) => write_line(out, &e.to_string())?,
            },
            ReplInput::Message(text) => match conversation.submit_turn(session, text) {
                Ok(pairs) => {
                    if let Some(last) = pairs.last() {
                        write_line(out, &format_pair(last))?;
                    }
                }
                Err(e) if e.is_upstream() => {
                    if session.transcript.is_pending() {
                        if let Some(pending) = session.transcript.render().last() {
                            write_line(out, &format_pair(pending))?;
                        }
                    }
                    write_line(out, UPSTREAM_FAILURE_MESSAGE)?;
                }
                Err(e) => return Err(e),
            },
        }
        out.flush().map_err(|e| Error::io_msg(e.to_string()))?;
    }
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line() {
        assert_eq!(parse_line("/quit"), ReplInput::Quit);
        assert_eq!(parse_line("  /quit  "), ReplInput::Quit);
        assert_eq!(parse_line("/lang fr"), ReplInput::SwitchLanguage("fr"));
        assert_eq!(parse_line("/lang"), ReplInput::SwitchLanguage(""));
        assert_eq!(parse_line("/language"), ReplInput::Message("/language"));
        assert_eq!(parse_line(""), ReplInput::Message(""));
        assert_eq!(
            parse_line("What should I wear?"),
            ReplInput::Message("What should I wear?")
        );
    }
}
