//! Newtype domain identifiers.
//!
//! Every Monday entity with an identity is represented as a distinct newtype
//! wrapping a primitive. This prevents accidentally interchanging, for example,
//! a [`BoardId`] with a [`PulseId`] even though both are `u64` on the wire.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Macro for String-wrapped newtypes.
// Generates: struct, new() returning Option<Self>, as_str(), Display.
// ---------------------------------------------------------------------------
macro_rules! string_id {
    (
        $(#[$attr:meta])*
        $name:ident
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates a new identifier, returning `None` if the value is empty.
            pub fn new(value: impl Into<String>) -> Option<Self> {
                let v = value.into();
                if v.is_empty() { None } else { Some(Self(v)) }
            }

            /// Returns the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

// ---------------------------------------------------------------------------
// Macro for u64-wrapped newtypes (Monday-assigned integers).
// Generates: struct (Copy), new(), as_u64(), Display.
// ---------------------------------------------------------------------------
macro_rules! u64_id {
    (
        $(#[$attr:meta])*
        $name:ident
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Creates a new identifier from a raw integer.
            pub fn new(value: u64) -> Self {
                Self(value)
            }

            /// Returns the underlying integer value.
            pub fn as_u64(self) -> u64 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse::<u64>().map(Self)
            }
        }
    };
}

// ---------------------------------------------------------------------------
// Identifiers — Monday-integer-backed
// ---------------------------------------------------------------------------

u64_id! {
    /// Identifies a board within the Monday account.
    BoardId
}

u64_id! {
    /// Identifies a pulse (task card) within a board.
    PulseId
}

u64_id! {
    /// Identifies a Monday user.
    ///
    /// Also used as the `user_id` credential sent with every API request.
    UserId
}

// ---------------------------------------------------------------------------
// Identifiers — String-backed
// ---------------------------------------------------------------------------

string_id! {
    /// Identifies a group (lane) within a board, e.g. `"topics"`.
    ///
    /// Group ids are only unique per board.
    GroupId
}

string_id! {
    /// Identifies a column within a board's schema, e.g. `"status"`.
    ColumnId
}

// ---------------------------------------------------------------------------
// Identifiers — UUID-backed (internally generated)
// ---------------------------------------------------------------------------

/// Identifies a single automation run (one CLI invocation).
///
/// Recorded on the root tracing span so all requests and moves made during a
/// run can be correlated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AutomationRunId(Uuid);

impl AutomationRunId {
    /// Generates a new random run identifier.
    pub fn new_random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the underlying [`Uuid`].
    pub fn as_uuid(self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for AutomationRunId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_ids_reject_empty_values() {
        assert!(GroupId::new("").is_none());
        assert_eq!(GroupId::new("topics").unwrap().as_str(), "topics");
    }

    #[test]
    fn integer_ids_deserialize_transparently() {
        let id: BoardId = serde_json::from_str("3145").unwrap();
        assert_eq!(id, BoardId::new(3145));
        assert_eq!(id.to_string(), "3145");
    }

    #[test]
    fn user_id_parses_with_surrounding_whitespace() {
        let id: UserId = " 42\n".parse().unwrap();
        assert_eq!(id.as_u64(), 42);
        assert!("forty-two".parse::<UserId>().is_err());
    }

    #[test]
    fn run_ids_are_unique() {
        assert_ne!(AutomationRunId::new_random(), AutomationRunId::new_random());
    }
}
