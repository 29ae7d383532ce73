//! Domain model for the Monday automator.
//!
//! This crate contains the typed view of Monday boards, groups, pulses, column
//! schemas and users, the errors shared across the workspace, and the
//! [`MondayApi`] port trait. Infrastructure crates implement the trait; they
//! never add domain rules.
//!
//! ## Architectural Layer
//!
//! **Domain model + port definitions.** This crate has no I/O dependencies.
//! It defines *what* the automations need; `monday-api` defines *how* it is
//! fetched.
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`identifiers`] | Newtype identifiers (`BoardId`, `PulseId`, `GroupId`, etc.) |
//! | [`types`] | Shared value types (`Timestamp`, `Timeline`) |
//! | [`column`] | Column schema union and typed column values |
//! | [`board`] | Boards and groups |
//! | [`pulse`] | Pulses (task cards) |
//! | [`user`] | Account users |
//! | [`api`] | The [`MondayApi`] port and [`ApiError`] |
//! | [`errors`] | [`MondayError`] and [`ColumnError`] |

pub mod api;
pub mod board;
pub mod column;
pub mod errors;
pub mod identifiers;
pub mod pulse;
pub mod types;
pub mod user;

// Re-export everything at the crate root for ergonomic usage by downstream crates.
pub use api::{ApiError, MondayApi};
pub use board::{Board, Group};
pub use column::{
    ColorValue, ColumnData, ColumnDefinition, ColumnKind, FormulaSettings, RawColumnValue, Unit,
};
pub use errors::{ColumnError, MondayError};
pub use identifiers::{AutomationRunId, BoardId, ColumnId, GroupId, PulseId, UserId};
pub use pulse::Pulse;
pub use types::{Timeline, Timestamp, MONDAY_DATE_FORMAT};
pub use user::User;
