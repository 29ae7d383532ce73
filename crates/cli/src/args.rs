//! Command-line argument definitions.

use std::net::SocketAddr;
use std::path::PathBuf;

use automations::Command;
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

/// Scheduled automations for Monday boards
#[derive(Parser, Debug)]
#[command(name = "monday-automator")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Log line format written to stderr
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty, global = true)]
    pub log_format: LogFormat,

    /// Export spans to this OTLP (gRPC) collector
    #[arg(long, env = "OTEL_EXPORTER_OTLP_ENDPOINT", global = true)]
    pub otlp_endpoint: Option<String>,

    /// Rule configuration file (TOML); built-in defaults when omitted
    #[arg(short, long, env = "MONDAY_AUTOMATOR_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Monday API host
    #[arg(long, env = "MONDAY_API_URL", default_value = monday_api::DEFAULT_BASE_URL, global = true)]
    pub api_url: String,

    #[command(flatten)]
    pub credentials: CredentialArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where the API key and user id come from.
#[derive(Args, Debug, Clone)]
pub struct CredentialArgs {
    /// File whose first line is the API key
    #[arg(long, default_value = "api_key.txt")]
    pub api_key_file: PathBuf,

    /// File whose first line is the user id
    #[arg(long, default_value = "user_id.txt")]
    pub user_id_file: PathBuf,

    /// API key; overrides --api-key-file
    #[arg(long, env = "MONDAY_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// User id; overrides --user-id-file
    #[arg(long, env = "MONDAY_USER_ID")]
    pub user_id: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run an automation routine (reset_week)
    Run {
        /// Routine to run
        automation: Command,
    },

    /// List boards with their groups and columns
    Boards,

    /// List the cards of a board with their decoded column values
    Pulses {
        /// Exact board name
        board: String,
    },

    /// List account users
    Users,

    /// Serve the GET /test echo endpoint
    ServeTest {
        /// Address to bind
        #[arg(long, default_value = test_endpoint::DEFAULT_ADDR)]
        addr: SocketAddr,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn run_accepts_both_command_spellings() {
        for spelling in ["reset_week", "reset-week"] {
            let cli = Cli::try_parse_from(["monday-automator", "run", spelling]).unwrap();
            assert!(matches!(
                cli.command,
                Commands::Run {
                    automation: Command::ResetWeek
                }
            ));
        }
    }

    #[test]
    fn unknown_routine_is_rejected() {
        assert!(Cli::try_parse_from(["monday-automator", "run", "tidy_up"]).is_err());
    }

    #[test]
    fn a_command_is_required() {
        assert!(Cli::try_parse_from(["monday-automator"]).is_err());
    }

    #[test]
    fn global_flags_follow_the_subcommand() {
        let cli = Cli::try_parse_from([
            "monday-automator",
            "pulses",
            "Website Tasks",
            "-vv",
            "--log-format",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.log_format, LogFormat::Json);
        assert!(matches!(cli.command, Commands::Pulses { ref board } if board == "Website Tasks"));
    }
}
