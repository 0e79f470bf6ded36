//! CLI entry point for twig

use std::ffi::OsString;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use twig::{ColorRuleTable, OutputConfig, StreamingFormatter, TreeWalker, WalkerConfig};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "twig")]
#[command(about = "List directory contents as a tree, colored by LS_COLORS")]
#[command(version)]
#[command(override_usage = "twig [--color <WHEN>] [-L <N> [PATH]]")]
struct Args {
    /// Descend only N levels deep (0-255); may be followed by the directory to display
    #[arg(short = 'L', long = "level", value_name = "N")]
    level: Option<u8>,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Directory after `-L N`; anything else here is ignored
    #[arg(
        value_name = "PATH",
        trailing_var_arg = true,
        allow_hyphen_values = true,
        hide = true
    )]
    rest: Vec<OsString>,
}

impl Args {
    /// Root to list. A path is only taken after `-L N`; otherwise `.`.
    fn root(&self) -> PathBuf {
        match (self.level, self.rest.first()) {
            (Some(_), Some(path)) => PathBuf::from(path),
            _ => PathBuf::from("."),
        }
    }
}

fn main() {
    let args = Args::parse();
    twig::init_logging();

    let use_color = should_use_color(args.color);
    let rules = if use_color {
        ColorRuleTable::from_env()
    } else {
        ColorRuleTable::default()
    };

    let walker = TreeWalker::new(WalkerConfig {
        max_depth: args.level,
    })
    .with_rules(rules);
    let mut formatter = StreamingFormatter::new(OutputConfig { use_color });

    if let Err(e) = walker.walk(&args.root(), &mut formatter).map_err(twig::Error::from) {
        if e.is_broken_pipe() {
            return;
        }
        eprintln!("twig: {}", e);
        process::exit(e.exit_code());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("twig").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn test_no_arguments_lists_current_dir() {
        let args = parse(&[]);
        assert_eq!(args.level, None);
        assert_eq!(args.root(), PathBuf::from("."));
    }

    #[test]
    fn test_path_after_level() {
        let args = parse(&["-L", "2", "project"]);
        assert_eq!(args.level, Some(2));
        assert_eq!(args.root(), PathBuf::from("project"));
    }

    #[test]
    fn test_level_without_path() {
        let args = parse(&["-L", "3"]);
        assert_eq!(args.root(), PathBuf::from("."));
    }

    #[test]
    fn test_other_first_argument_is_ignored() {
        assert_eq!(parse(&["project"]).root(), PathBuf::from("."));
        assert_eq!(parse(&["--bogus"]).root(), PathBuf::from("."));
        assert_eq!(parse(&["-x", "project"]).root(), PathBuf::from("."));
        assert_eq!(parse(&["--bogus"]).level, None);
    }

    #[test]
    fn test_invalid_level_is_rejected() {
        for argv in [&["-L", "abc"][..], &["-L", "256"], &["-L"]] {
            let result = Args::try_parse_from(std::iter::once("twig").chain(argv.iter().copied()));
            assert!(result.is_err(), "{:?} should fail", argv);
        }
    }
}
