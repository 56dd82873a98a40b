mod adapter;
mod cli;
mod domain;
mod ports;
mod usecase;
mod wiring;

#[cfg(test)]
mod tests;

use std::io::Write;
use std::process;

use cli::{parse_args, print_completion, Config, ParseOutcome};
use common::adapter::StdEnvResolver;
use common::error::Error;
use common::ports::outbound::{EnvResolver, Log, LogLevel, LogRecord};
use domain::IdeaText;
use ports::inbound::CaptureIdea;
use wiring::wire_idea;

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            if e.is_usage() {
                print_usage();
            }
            eprintln!("idea: {}", e);
            e.exit_code()
        }
    };
    process::exit(exit_code);
}

pub fn run() -> Result<i32, Error> {
    let config = match parse_args()? {
        ParseOutcome::Config(c) => c,
        ParseOutcome::GenerateCompletion(shell) => {
            print_completion(shell);
            return Ok(0);
        }
    };
    run_with(config, &StdEnvResolver, &mut std::io::stdout())
}

/// Config を実行する。設定の解決はアイデア本文の検査より後に行う
pub(crate) fn run_with(
    config: Config,
    env: &dyn EnvResolver,
    out: &mut dyn Write,
) -> Result<i32, Error> {
    if config.help {
        print_help(out)?;
        return Ok(0);
    }
    if config.version {
        writeln!(out, "idea {}", env!("CARGO_PKG_VERSION"))?;
        return Ok(0);
    }

    let idea = IdeaText::from_args(&config.idea_args)
        .ok_or_else(|| Error::invalid_argument("No idea provided."))?;

    let app = wire_idea(env, config.verbose, config.dry_run)?;
    execute(&app.capture, app.log.as_ref(), &idea, out)
}

/// パイプラインを実行し、成功時はレポートを out に JSON で書く。
/// 失敗は診断チャネル（Log）に出して終了コードを返す。
pub(crate) fn execute(
    capture: &dyn CaptureIdea,
    log: &dyn Log,
    idea: &IdeaText,
    out: &mut dyn Write,
) -> Result<i32, Error> {
    match capture.capture(idea) {
        Ok(report) => {
            let json = serde_json::to_string_pretty(&report)?;
            writeln!(out, "{}", json)?;
            Ok(0)
        }
        Err(e) => {
            let mut rec = LogRecord::new(LogLevel::Error, e.to_string())
                .layer("cli")
                .kind("error");
            if let Some(status) = e.http_status_code() {
                rec = rec.field("status", status);
            }
            log.emit(rec);
            Ok(e.exit_code())
        }
    }
}

fn print_usage() {
    eprintln!("Usage: idea [options] <idea...>");
}

fn print_help(out: &mut dyn Write) -> std::io::Result<()> {
    writeln!(out, "Usage: idea [options] <idea...>")?;
    writeln!(out, "Options:")?;
    writeln!(out, "  -h, --help              Show this help message")?;
    writeln!(out, "  -V, --version           Show version")?;
    writeln!(out, "  -v, --verbose           Also print info/debug logs to stderr")?;
    writeln!(out, "      --dry-run           Search and summarize, print the record instead of storing it")?;
    writeln!(out, "      --generate <shell>  Generate shell completion script (bash, zsh, fish)")?;
    writeln!(out)?;
    writeln!(out, "Environment:")?;
    writeln!(out, "  TAVILY_API_KEY       Tavily Search API key (required)")?;
    writeln!(out, "  GEMINI_API_KEY       Gemini API key (required unless IDEA_LLM_PROVIDER=echo)")?;
    writeln!(out, "  MONGODB_URI          MongoDB connection string (required unless --dry-run)")?;
    writeln!(out, "  MONGODB_DB           Database name (default: ai_workshop)")?;
    writeln!(out, "  MONGODB_COLLECTION   Collection name (default: ideas)")?;
    writeln!(out, "  IDEA_LLM_PROVIDER    gemini or echo (default: gemini)")?;
    writeln!(out, "  IDEA_MODEL           Model name (default: gemini-2.0-flash)")?;
    writeln!(out, "  TAVILY_SEARCH_URL    Search endpoint (default: https://api.tavily.com/search)")?;
    writeln!(out, "  IDEA_LOG_FILE        Append JSONL logs to this file")?;
    writeln!(out)?;
    writeln!(out, "Description:")?;
    writeln!(out, "  Searches the web for the idea, asks the model for a short summary and tags,")?;
    writeln!(out, "  stores the result and prints {{id, summary, tags}} as JSON.")?;
    writeln!(out)?;
    writeln!(out, "Examples:")?;
    writeln!(out, "  idea dog walking app")?;
    writeln!(out, "  idea --dry-run \"a tool for tracking houseplants\"")?;
    Ok(())
}
