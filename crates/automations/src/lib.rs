//! Monday automation rules and the command dispatcher.
//!
//! ## Architectural Layer
//!
//! **Orchestration.** Rules sequence calls on [`monday::MondayApi`] and apply
//! the pure classification in [`reset_week`]. They know nothing about HTTP;
//! the `cli` crate injects a concrete client.
//!
//! ## Rules
//!
//! | Command | Routine |
//! |---------|---------|
//! | `reset_week` | [`Automator::reset_week`] |

pub mod automator;
pub mod command;
pub mod config;
pub mod reset_week;

#[cfg(test)]
mod fake;

pub use automator::{Automator, BoardOutcome, ResetWeekReport};
pub use command::{dispatch, Command, CommandOutcome, UnknownCommand};
pub use config::{AutomationConfig, ConfigError, ResetWeekRule};
pub use reset_week::{plan_reset_week, prepare_board, WeekGroups, WeekPlan};
