use crate::domain::{OutfitContext, OutfitRequest, StylistCommand, Wardrobe};
use clap::builder::ArgAction;
use clap::value_parser;
use clap_complete::Shell;
use common::error::Error;
use std::io;

/// organize サブコマンドの引数名（Wardrobe 5 つ + 場面 3 つ）
const OUTFIT_ARGS: [(&str, &str); 8] = [
    ("headwear", "Headwear you own, comma-separated"),
    ("top", "Tops you own, comma-separated"),
    ("bottom", "Bottoms you own, comma-separated"),
    ("shoes", "Shoes you own, comma-separated"),
    ("accessories", "Accessories you own, comma-separated"),
    ("occasion", "Occasion (e.g. Wedding, Party, Casual)"),
    ("weather", "Weather (e.g. Winter, Summer, Wet, Dry)"),
    ("gender", "Gender"),
];

/// サブコマンド
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Action {
    /// サブコマンドなし
    #[default]
    None,
    Chat,
    Organize(OutfitRequest),
    Labels,
    Profiles,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub help: bool,
    /// -L / --list-profiles: 現在有効なプロファイル一覧を表示
    pub list_profiles: bool,
    pub profile: Option<String>,
    pub model: Option<String>,
    /// --lang: 初期表示言語（未指定なら STYLIST_LANG、それも無ければ English）
    pub lang: Option<String>,
    pub action: Action,
}

/// 解析結果: 通常の Config / 補完スクリプト生成
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    Config(Config),
    GenerateCompletion(Shell),
}

fn build_clap_command() -> clap::Command {
    let organize = OUTFIT_ARGS.iter().fold(
        clap::Command::new("organize")
            .about("Organize outfits from the clothes you own")
            .disable_help_flag(true),
        |cmd, (name, help)| {
            cmd.arg(
                clap::Arg::new(*name)
                    .long(*name)
                    .value_name("text")
                    .help(*help)
                    .num_args(1),
            )
        },
    );

    clap::Command::new("stylist")
        .about("Fashion stylist assistant: chat for advice or organize an outfit")
        .disable_help_flag(true)
        .disable_help_subcommand(true)
        .arg(
            clap::Arg::new("help")
                .short('h')
                .long("help")
                .help("Show this help message")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("list-profiles")
                .short('L')
                .long("list-profiles")
                .help("List currently available provider profiles")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("profile")
                .short('p')
                .long("profile")
                .value_name("profile")
                .help("Specify LLM profile (groq, openai, echo, etc.)")
                .global(true)
                .num_args(1),
        )
        .arg(
            clap::Arg::new("model")
                .short('m')
                .long("model")
                .value_name("model")
                .help("Specify model name (e.g. llama3-70b-8192)")
                .global(true)
                .num_args(1),
        )
        .arg(
            clap::Arg::new("lang")
                .long("lang")
                .value_name("language")
                .help("Display language (English or French)")
                .global(true)
                .num_args(1),
        )
        .arg(
            clap::Arg::new("generate")
                .long("generate")
                .value_name("shell")
                .help("Generate shell completion script")
                .value_parser(value_parser!(Shell))
                .num_args(1),
        )
        .subcommand(
            clap::Command::new("chat")
                .about("Chat with the stylist (one line per turn)")
                .disable_help_flag(true),
        )
        .subcommand(organize)
        .subcommand(
            clap::Command::new("labels")
                .about("Print the labels of the active language")
                .disable_help_flag(true),
        )
        .subcommand(
            clap::Command::new("profiles")
                .about("List provider profiles")
                .disable_help_flag(true),
        )
}

fn outfit_request_from(matches: &clap::ArgMatches) -> OutfitRequest {
    let get = |name: &str| matches.get_one::<String>(name).cloned().unwrap_or_default();
    OutfitRequest {
        wardrobe: Wardrobe {
            headwear: get("headwear"),
            top: get("top"),
            bottom: get("bottom"),
            shoes: get("shoes"),
            accessories: get("accessories"),
        },
        context: OutfitContext {
            occasion: get("occasion"),
            weather: get("weather"),
            gender: get("gender"),
        },
    }
}

fn matches_to_config(matches: &clap::ArgMatches) -> Config {
    let action = match matches.subcommand() {
        Some(("chat", _)) => Action::Chat,
        Some(("organize", sub)) => Action::Organize(outfit_request_from(sub)),
        Some(("labels", _)) => Action::Labels,
        Some(("profiles", _)) => Action::Profiles,
        _ => Action::None,
    };

    Config {
        help: matches.get_flag("help"),
        list_profiles: matches.get_flag("list-profiles"),
        profile: matches.get_one::<String>("profile").cloned(),
        model: matches.get_one::<String>("model").cloned(),
        lang: matches.get_one::<String>("lang").cloned(),
        action,
    }
}

/// コマンドラインを解析する。補完生成が要求された場合は ParseOutcome::GenerateCompletion を返す。
pub fn parse_args() -> Result<ParseOutcome, Error> {
    let matches = build_clap_command()
        .try_get_matches()
        .map_err(|e| Error::invalid_argument(e.to_string()))?;

    if let Some(&shell) = matches.get_one::<Shell>("generate") {
        return Ok(ParseOutcome::GenerateCompletion(shell));
    }

    Ok(ParseOutcome::Config(matches_to_config(&matches)))
}

/// テスト用: 引数スライスから解析する
#[allow(dead_code)]
pub fn parse_args_from(args: &[&str]) -> Result<Config, Error> {
    let matches = build_clap_command()
        .try_get_matches_from(args)
        .map_err(|e| Error::invalid_argument(e.to_string()))?;
    Ok(matches_to_config(&matches))
}

/// 補完スクリプトを標準出力に出力する。
pub fn print_completion(shell: Shell) {
    let mut cmd = build_clap_command();
    clap_complete::generate(shell, &mut cmd, "stylist", &mut io::stdout());
}

/// Config を StylistCommand に変換する
pub fn config_to_command(config: Config) -> StylistCommand {
    if config.help {
        return StylistCommand::Help;
    }

    if config.list_profiles {
        return StylistCommand::ListProfiles;
    }

    match config.action {
        Action::None => StylistCommand::Help,
        Action::Chat => StylistCommand::Chat {
            profile: config.profile,
            model: config.model,
        },
        Action::Organize(request) => StylistCommand::Organize {
            profile: config.profile,
            model: config.model,
            request,
        },
        Action::Labels => StylistCommand::Labels,
        Action::Profiles => StylistCommand::ListProfiles,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(!config.help);
        assert!(!config.list_profiles);
        assert!(config.profile.is_none());
        assert!(config.lang.is_none());
        assert_eq!(config.action, Action::None);
    }

    #[test]
    fn test_parse_args_no_args_is_help() {
        let config = parse_args_from(&["stylist"]).unwrap();
        assert_eq!(config_to_command(config), StylistCommand::Help);
    }

    #[test]
    fn test_parse_args_help_short() {
        let config = parse_args_from(&["stylist", "-h"]).unwrap();
        assert!(config.help);
    }

    #[test]
    fn test_parse_args_unknown_option() {
        let err = parse_args_from(&["stylist", "--unknown"]).unwrap_err();
        assert_eq!(err.exit_code(), 64);
    }

    #[test]
    fn test_parse_args_unknown_subcommand() {
        let err = parse_args_from(&["stylist", "dance"]).unwrap_err();
        assert!(err.is_usage());
    }

    #[test]
    fn test_parse_args_list_profiles() {
        let config = parse_args_from(&["stylist", "-L"]).unwrap();
        assert_eq!(config_to_command(config), StylistCommand::ListProfiles);
        let config = parse_args_from(&["stylist", "profiles"]).unwrap();
        assert_eq!(config_to_command(config), StylistCommand::ListProfiles);
    }

    #[test]
    fn test_parse_args_chat_with_global_options() {
        let config =
            parse_args_from(&["stylist", "chat", "-p", "echo", "-m", "tiny", "--lang", "fr"]).unwrap();
        assert_eq!(config.lang.as_deref(), Some("fr"));
        assert_eq!(
            config_to_command(config),
            StylistCommand::Chat {
                profile: Some("echo".to_string()),
                model: Some("tiny".to_string()),
            }
        );
    }

    #[test]
    fn test_parse_args_organize_fields() {
        let config = parse_args_from(&[
            "stylist",
            "organize",
            "--headwear",
            " red hat, blue hat ",
            "--occasion",
            "wedding",
            "--weather",
            "summer",
            "--gender",
            "male",
        ])
        .unwrap();
        match config_to_command(config) {
            StylistCommand::Organize { profile, request, .. } => {
                assert!(profile.is_none());
                assert_eq!(request.wardrobe.headwear, " red hat, blue hat ");
                assert_eq!(request.wardrobe.top, "");
                assert_eq!(request.context.occasion, "wedding");
                assert_eq!(request.context.gender, "male");
            }
            other => panic!("expected organize, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_args_organize_without_fields_is_blank_request() {
        let config = parse_args_from(&["stylist", "organize"]).unwrap();
        match config.action {
            Action::Organize(request) => assert!(request.is_blank()),
            other => panic!("expected organize, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_args_labels() {
        let config = parse_args_from(&["stylist", "--lang", "French", "labels"]).unwrap();
        assert_eq!(config.lang.as_deref(), Some("French"));
        assert_eq!(config_to_command(config), StylistCommand::Labels);
    }
}
