mod adapter;
mod cli;
mod domain;
mod ports;
mod usecase;
mod wiring;

#[cfg(test)]
mod tests;

use std::io;
use std::process;
use std::sync::Arc;

use cli::render::{format_labels, UPSTREAM_FAILURE_MESSAGE};
use cli::repl::run_chat;
use cli::{config_to_command, parse_args, print_completion, ParseOutcome};
use common::error::Error;
use common::ports::outbound::LogRecord;
use domain::{verify_profiles, ActiveLanguage, Language, Session, StylistCommand};
use ports::inbound::UseCaseRunner;
use usecase::{ConversationUseCase, OutfitUseCase};
use wiring::{wire_stylist, App};

/// Command をディスパッチする Runner（match は main レイヤーに集約）
struct Runner {
    app: App,
    active: ActiveLanguage,
}

impl UseCaseRunner for Runner {
    fn run(&self, cmd: StylistCommand) -> Result<i32, Error> {
        let command_name = cmd.name();
        let _ = self.app.logger.log(
            &LogRecord::info("command started")
                .layer("cli")
                .kind("lifecycle")
                .field("command", command_name)
                .field("language", self.active.get().as_str()),
        );

        let result = self.dispatch(cmd);

        let code = match &result {
            Ok(code) => *code,
            Err(e) => e.exit_code(),
        };
        let _ = self.app.logger.log(
            &LogRecord::info("command finished")
                .layer("cli")
                .kind("lifecycle")
                .field("command", command_name)
                .field("exit_code", code),
        );
        if let Err(ref e) = result {
            let _ = self
                .app
                .logger
                .log(&LogRecord::error(e.to_string()).layer("cli").kind("error"));
        }
        result
    }
}

impl Runner {
    fn dispatch(&self, cmd: StylistCommand) -> Result<i32, Error> {
        match cmd {
            StylistCommand::Help => {
                print_help();
                Ok(0)
            }
            StylistCommand::ListProfiles => {
                let (names, default) = self.app.profile_lister.list_profiles()?;
                for name in &names {
                    if *name == default {
                        println!("{} (default)", name);
                    } else {
                        println!("{}", name);
                    }
                }
                Ok(0)
            }
            StylistCommand::Labels => {
                let profile = self.app.localization.active_labels(&self.active);
                println!("{}", format_labels(profile)?);
                Ok(0)
            }
            StylistCommand::Organize {
                profile,
                model,
                request,
            } => {
                let completion = self
                    .app
                    .completion_factory
                    .create(profile.as_deref(), model.as_deref())?;
                let outfit = OutfitUseCase::new(completion, Arc::clone(&self.app.logger));
                match outfit.organize(&request) {
                    Ok(reply) => {
                        println!("{}", reply.text());
                        Ok(0)
                    }
                    Err(e) if e.is_upstream() => {
                        eprintln!("stylist: {}", UPSTREAM_FAILURE_MESSAGE);
                        Err(e)
                    }
                    Err(e) => Err(e),
                }
            }
            StylistCommand::Chat { profile, model } => {
                let completion = self
                    .app
                    .completion_factory
                    .create(profile.as_deref(), model.as_deref())?;
                let conversation = ConversationUseCase::new(completion, Arc::clone(&self.app.logger));
                let mut session = Session::new();
                let stdin = io::stdin();
                let mut stdout = io::stdout();
                run_chat(
                    &conversation,
                    &self.app.localization,
                    &self.active,
                    &mut session,
                    stdin.lock(),
                    &mut stdout,
                )
            }
        }
    }
}

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            if e.is_usage() {
                print_usage();
            }
            eprintln!("stylist: {}", e);
            e.exit_code()
        }
    };
    process::exit(exit_code);
}

pub fn run() -> Result<i32, Error> {
    // ラベル表の欠落は起動時に検出して止める
    verify_profiles()?;

    let config = match parse_args()? {
        ParseOutcome::Config(c) => c,
        ParseOutcome::GenerateCompletion(shell) => {
            print_completion(shell);
            return Ok(0);
        }
    };
    let app = wire_stylist();
    let language = match config
        .lang
        .clone()
        .or_else(|| app.env_resolver.default_language())
    {
        Some(value) => Language::parse(&value)?,
        None => Language::default(),
    };
    let runner = Runner {
        app,
        active: ActiveLanguage::new(language),
    };
    runner.run(config_to_command(config))
}

fn print_usage() {
    eprintln!("Usage: stylist [options] <chat|organize|labels|profiles>");
}

fn print_help() {
    println!("Usage: stylist [options] <command>");
    println!("Commands:");
    println!("  chat                          Chat with the stylist. One line per turn; /lang <language> switches language, /quit ends.");
    println!("  organize [--headwear ..] [--top ..] [--bottom ..] [--shoes ..] [--accessories ..]");
    println!("           [--occasion ..] [--weather ..] [--gender ..]");
    println!("                                Organize outfits from the clothes you own (comma-separated lists).");
    println!("  labels                        Print the labels of the active language.");
    println!("  profiles                      List provider profiles (same as -L).");
    println!("Options:");
    println!("  -h, --help                    Show this help message");
    println!("  -L, --list-profiles           List currently available provider profiles (from profiles.json + built-ins)");
    println!("  -p, --profile <profile>       Specify LLM profile (groq, openai, echo, etc.). Default: profiles.json default, or groq if not set.");
    println!("  -m, --model <model>           Specify model name. Default: profile default (groq: llama3-70b-8192)");
    println!("  --lang <language>             Display language: English or French. Default: STYLIST_LANG, or English.");
    println!("  --generate <shell>            Generate shell completion script (bash, zsh, fish, ...).");
    println!();
    println!("Environment:");
    println!("  STYLIST_HOME    Home directory. Profiles: $STYLIST_HOME/config/profiles.json; log: $STYLIST_HOME/log/stylist.jsonl");
    println!("                  If unset, $XDG_CONFIG_HOME/stylist (e.g. ~/.config/stylist) is used.");
    println!("  STYLIST_LANG    Initial display language.");
    println!("  GROQ_API_KEY    API key for the groq profile (OPENAI_API_KEY for openai).");
    println!();
    println!("Examples:");
    println!("  stylist chat");
    println!("  stylist -p echo chat");
    println!("  stylist organize --top \"white shirt, navy polo\" --occasion wedding --weather summer --gender male");
    println!("  stylist --lang fr labels");
}
