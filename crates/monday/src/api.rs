//! Port trait for the remote Monday API and its error type.
//!
//! The `monday-api` crate supplies the HTTP implementation; automation rules
//! only ever see [`MondayApi`], which keeps them testable against an
//! in-memory fake.

use async_trait::async_trait;
use thiserror::Error;

use crate::{Board, BoardId, ColumnDefinition, Group, GroupId, Pulse, PulseId, User, UserId};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Failures of a single remote call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// HTTP 401: the API key was rejected.
    #[error("Invalid API key")]
    InvalidApiKey,

    /// HTTP 402: the Monday account requires payment.
    #[error("Monday payment required")]
    PaymentRequired,

    /// HTTP 404: the requested resource does not exist.
    #[error("Resource not found: {resource}")]
    NotFound {
        /// Path of the resource that was requested.
        resource: String,
    },

    /// Any status other than 200, 201, 401, 402 and 404.
    #[error("Unexpected status code {status}")]
    UnexpectedStatus {
        /// The HTTP status code received.
        status: u16,
    },

    /// The request could not be sent or the response could not be read.
    #[error("Transport error: {message}")]
    Transport {
        /// Description of the transport failure.
        message: String,
    },

    /// The response body did not have the expected shape.
    #[error("Could not decode response from {resource}: {message}")]
    Decode {
        /// Path of the resource that was requested.
        resource: String,
        /// Description of the decoding failure.
        message: String,
    },

    /// A paginated listing did not terminate within the page limit.
    #[error("Listing {resource} did not end within {pages} pages")]
    PageLimitExceeded {
        /// Path of the paginated resource.
        resource: String,
        /// The page limit that was reached.
        pages: u32,
    },

    /// The client was given settings it cannot work with.
    #[error("Invalid client configuration: {message}")]
    InvalidConfig {
        /// What is wrong with the settings.
        message: String,
    },
}

// ---------------------------------------------------------------------------
// Port
// ---------------------------------------------------------------------------

/// Operations the automation layer needs from Monday.
///
/// Each method issues at most one logical operation; implementations do not
/// retry. [`MondayApi::board_pulses`] may issue several requests to walk the
/// pages of a listing.
#[async_trait]
pub trait MondayApi: Send + Sync {
    /// Lists every board visible to the credentials.
    async fn boards(&self) -> Result<Vec<Board>, ApiError>;

    /// Fetches a single board.
    async fn board(&self, board: BoardId) -> Result<Board, ApiError>;

    /// Lists the active groups of a board.
    async fn board_groups(&self, board: BoardId) -> Result<Vec<Group>, ApiError>;

    /// Lists the column schema of a board.
    async fn board_columns(&self, board: BoardId) -> Result<Vec<ColumnDefinition>, ApiError>;

    /// Lists every pulse on a board, in listing order, across all pages.
    async fn board_pulses(&self, board: BoardId) -> Result<Vec<Pulse>, ApiError>;

    /// Moves the given pulses into a group of the same board.
    ///
    /// An empty `pulses` slice is a no-op.
    async fn move_pulses(
        &self,
        board: BoardId,
        pulses: &[PulseId],
        group: &GroupId,
    ) -> Result<(), ApiError>;

    /// Lists the users of the account.
    async fn users(&self) -> Result<Vec<User>, ApiError>;

    /// Fetches a single user.
    async fn user(&self, user: UserId) -> Result<User, ApiError>;
}
