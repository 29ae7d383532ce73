//! Monday account users.

use serde::{Deserialize, Serialize};

use crate::UserId;

/// A member of the Monday account.
///
/// Appears both as a top-level resource (`/v1/users.json`) and embedded in
/// `person` column values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Monday-assigned user id.
    pub id: UserId,

    /// Display name.
    pub name: String,

    /// Job title; empty when the user has not set one.
    #[serde(default)]
    pub title: String,

    /// Email address. Only present when the API key may see it.
    #[serde(default)]
    pub email: Option<String>,
}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.name, self.title)
    }
}
