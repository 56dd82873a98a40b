use clap::builder::ArgAction;
use clap::value_parser;
use clap_complete::Shell;
use common::error::Error;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub help: bool,
    pub version: bool,
    /// -v / --verbose: info / debug ログも stderr に出す
    pub verbose: bool,
    /// --dry-run: 検索と要約だけ行い、保存しない
    pub dry_run: bool,
    /// アイデア本文（結合前の引数）
    pub idea_args: Vec<String>,
}

/// 解析結果: 通常の Config / 補完スクリプト生成
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    Config(Config),
    GenerateCompletion(Shell),
}

fn build_clap_command() -> clap::Command {
    clap::Command::new("idea")
        .about("Capture an idea: search the web, summarize and tag it, store it in MongoDB")
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(
            clap::Arg::new("help")
                .short('h')
                .long("help")
                .help("Show this help message")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("version")
                .short('V')
                .long("version")
                .help("Show version")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Also print info/debug logs to stderr")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("dry-run")
                .long("dry-run")
                .help("Search and summarize, but do not store the result")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("generate")
                .long("generate")
                .value_name("shell")
                .help("Generate shell completion script")
                .value_parser(value_parser!(Shell))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("idea")
                .index(1)
                .value_name("IDEA")
                .help("Idea text (words are joined with single spaces)")
                .num_args(0..)
                .trailing_var_arg(true),
        )
}

fn matches_to_config(matches: &clap::ArgMatches) -> Config {
    Config {
        help: matches.get_flag("help"),
        version: matches.get_flag("version"),
        verbose: matches.get_flag("verbose"),
        dry_run: matches.get_flag("dry-run"),
        idea_args: matches
            .get_many::<String>("idea")
            .map(|i| i.cloned().collect())
            .unwrap_or_default(),
    }
}

/// コマンドラインを解析する。補完生成が要求された場合は ParseOutcome::GenerateCompletion を返す。
pub fn parse_args() -> Result<ParseOutcome, Error> {
    parse_args_from(std::env::args_os())
}

/// 引数列から解析する（先頭はプログラム名）
pub fn parse_args_from<I, T>(args: I) -> Result<ParseOutcome, Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let matches = build_clap_command()
        .try_get_matches_from(args)
        .map_err(|e| Error::invalid_argument(e.to_string()))?;

    if let Some(&shell) = matches.get_one::<Shell>("generate") {
        return Ok(ParseOutcome::GenerateCompletion(shell));
    }

    Ok(ParseOutcome::Config(matches_to_config(&matches)))
}

/// 補完スクリプトを標準出力に出力する。
pub fn print_completion(shell: Shell) {
    let mut cmd = build_clap_command();
    clap_complete::generate(shell, &mut cmd, "idea", &mut std::io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Config {
        match parse_args_from(args.iter().copied()).unwrap() {
            ParseOutcome::Config(c) => c,
            ParseOutcome::GenerateCompletion(_) => panic!("unexpected completion outcome"),
        }
    }

    #[test]
    fn test_parse_args_no_args() {
        let config = parse(&["idea"]);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_parse_args_words() {
        let config = parse(&["idea", "dog", "walking", "app"]);
        assert_eq!(config.idea_args, vec!["dog", "walking", "app"]);
        assert!(!config.dry_run);
    }

    #[test]
    fn test_parse_args_flags_before_idea() {
        let config = parse(&["idea", "-v", "--dry-run", "dog", "walking"]);
        assert!(config.verbose);
        assert!(config.dry_run);
        assert_eq!(config.idea_args, vec!["dog", "walking"]);
    }

    #[test]
    fn test_parse_args_hyphen_after_idea_is_text() {
        let config = parse(&["idea", "app", "-v"]);
        assert!(!config.verbose);
        assert_eq!(config.idea_args, vec!["app", "-v"]);
    }

    #[test]
    fn test_parse_args_help_and_version() {
        assert!(parse(&["idea", "-h"]).help);
        assert!(parse(&["idea", "--help"]).help);
        assert!(parse(&["idea", "-V"]).version);
    }

    #[test]
    fn test_parse_args_unknown_option() {
        let err = parse_args_from(["idea", "--unknown"]).unwrap_err();
        assert!(err.is_usage());
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_parse_args_generate() {
        let outcome = parse_args_from(["idea", "--generate", "bash"]).unwrap();
        assert!(matches!(outcome, ParseOutcome::GenerateCompletion(Shell::Bash)));
    }
}
