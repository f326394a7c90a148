mod cli;
mod demo;
mod refresh;
mod replay;
mod task;
mod tui;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use smooth_progress::ConfigError;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};
use crate::demo::run_demo;
use crate::replay::run_replay;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();

    let cli = Cli::parse();
    let result: Result<()> = match cli.command {
        Some(Commands::Replay(replay)) => run_replay(replay),
        Some(Commands::Demo(demo)) => run_demo(demo),
        None => {
            Cli::command().print_help().ok();
            println!();
            Ok(())
        }
    };

    if let Err(err) = result {
        let code = exit_code_for_error(&err);
        eprintln!("error: {err:?}");
        std::process::exit(code);
    }
}

pub(crate) fn exit_code_for_error(err: &anyhow::Error) -> i32 {
    // 2: invalid smoothing, 3: unreadable or malformed config, 1: other
    for cause in err.chain() {
        if let Some(cfg) = cause.downcast_ref::<ConfigError>() {
            return match cfg {
                ConfigError::InvalidSmoothing(_) => 2,
                ConfigError::Read { .. } | ConfigError::Parse(_) => 3,
            };
        }
    }
    1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_code_invalid_smoothing() {
        let err = anyhow::Error::from(ConfigError::InvalidSmoothing(4.0));
        assert_eq!(exit_code_for_error(&err), 2);
    }

    #[test]
    fn exit_code_bad_config_file() {
        let err = anyhow::Error::from(ConfigError::Read {
            path: "/nope.json".into(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        });
        assert_eq!(exit_code_for_error(&err), 3);

        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = anyhow::Error::from(ConfigError::from(parse)).context("Loading columns");
        assert_eq!(exit_code_for_error(&err), 3);
    }

    #[test]
    fn exit_code_other() {
        let err = anyhow::anyhow!("other");
        assert_eq!(exit_code_for_error(&err), 1);
        let io = anyhow::Error::from(std::io::Error::from(std::io::ErrorKind::NotFound));
        assert_eq!(exit_code_for_error(&io), 1);
    }
}
