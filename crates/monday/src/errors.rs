//! Top-level error types for the Monday domain.
//!
//! [`MondayError`] covers conditions that stop an automation rule from
//! completing. Component-level errors are defined next to the code that
//! produces them: [`crate::api::ApiError`] for remote calls and
//! [`ColumnError`] (here, because it is shared by the board and pulse models)
//! for column schema and value decoding.

use thiserror::Error;

use crate::api::ApiError;
use crate::{BoardId, ColumnId};

// ---------------------------------------------------------------------------
// Column errors
// ---------------------------------------------------------------------------

/// Failures while resolving or decoding a column value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColumnError {
    /// The board schema has no column with the requested title.
    #[error("Board has no column titled '{title}'")]
    UnknownColumn {
        /// Column title that was looked up.
        title: String,
    },

    /// The pulse carries no value for a column the board declares.
    #[error("Pulse has no value for column '{title}'")]
    MissingValue {
        /// Column title that was looked up.
        title: String,
    },

    /// The value's runtime type tag differs from the board's declared type.
    #[error("Column '{column}' is declared as '{declared}' but the value is tagged '{actual}'")]
    TypeMismatch {
        /// Column the value belongs to.
        column: ColumnId,
        /// Type declared in the board schema.
        declared: &'static str,
        /// Type tag carried by the value.
        actual: String,
    },

    /// A colour value referenced an index missing from the label table.
    #[error("Column '{column}' has no label for index {index}")]
    UnknownLabel {
        /// Column the value belongs to.
        column: ColumnId,
        /// The index carried by the value.
        index: u64,
    },

    /// The value could not be decoded into the declared type.
    #[error("Column '{column}' holds an invalid {kind} value: {message}")]
    InvalidValue {
        /// Column the value belongs to.
        column: ColumnId,
        /// Declared type of the column.
        kind: &'static str,
        /// Description of what was wrong with the value.
        message: String,
    },
}

// ---------------------------------------------------------------------------
// Automation-level errors
// ---------------------------------------------------------------------------

/// Errors that stop an automation rule.
#[derive(Debug, Error)]
pub enum MondayError {
    /// A remote API call failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A column could not be resolved or decoded.
    #[error(transparent)]
    Column(#[from] ColumnError),

    /// No board in the account carries the requested name.
    #[error("No board named '{name}'")]
    BoardNotFound {
        /// The board name that was looked up.
        name: String,
    },

    /// The board has no active group with the requested title.
    #[error("Board {board} has no group titled '{group}'")]
    GroupNotFound {
        /// Board that was searched.
        board: BoardId,
        /// Group title that was looked up.
        group: String,
    },

    /// The rule or runtime configuration is invalid.
    #[error("Configuration error: {message}")]
    ConfigurationError {
        /// Description of the configuration problem.
        message: String,
    },
}
