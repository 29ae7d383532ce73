//! Maps command names to automation routines.

use std::str::FromStr;

use chrono::NaiveDate;
use monday::{MondayApi, MondayError};
use thiserror::Error;
use tracing::info;

use crate::{Automator, ResetWeekReport};

/// An automation routine selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Close out finished cards and pull in upcoming ones.
    ResetWeek,
}

impl Command {
    /// Every known command, in help order.
    pub const ALL: [Command; 1] = [Command::ResetWeek];

    /// Canonical command name.
    pub fn name(self) -> &'static str {
        match self {
            Command::ResetWeek => "reset_week",
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The argument did not name a known command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown command '{name}' (expected one of: {expected})")]
pub struct UnknownCommand {
    pub name: String,
    pub expected: String,
}

impl FromStr for Command {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Dashes are accepted so the CLI spelling matches its other subcommands.
        let normalized = s.trim().replace('-', "_");
        Command::ALL
            .into_iter()
            .find(|command| command.name() == normalized)
            .ok_or_else(|| UnknownCommand {
                name: s.to_string(),
                expected: Command::ALL
                    .iter()
                    .map(|c| c.name())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

/// What a dispatched command produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    ResetWeek(ResetWeekReport),
}

/// Runs `command` as of `today`.
pub async fn dispatch<A: MondayApi>(
    command: Command,
    automator: &Automator<A>,
    today: NaiveDate,
) -> Result<CommandOutcome, MondayError> {
    info!(%command, "Dispatching automation");
    match command {
        Command::ResetWeek => automator.reset_week(today).await.map(CommandOutcome::ResetWeek),
    }
}
