//! Monday REST client adapter.
//!
//! Implements the [`monday::MondayApi`] trait over the Monday v1 REST API
//! using `reqwest`.
//!
//! ## Architectural Layer
//!
//! **Infrastructure.** Authentication, URL construction, status-code mapping
//! and pagination all live here. Automation rules see only
//! [`monday::MondayApi`].
//!
//! ## Pagination
//!
//! Pulse listings are fetched in pages of [`PULSE_PAGE_SIZE`]. A page that
//! returns fewer (or more) entries than the page size ends the listing; the
//! loop is capped at [`MAX_PULSE_PAGES`].

mod client;
mod credentials;

pub use client::{
    check_status, ClientConfig, MondayClient, DEFAULT_BASE_URL, MAX_PULSE_PAGES, PULSE_PAGE_SIZE,
};
pub use credentials::{ApiKey, Credentials};
