//! Pulses (task cards).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{BoardId, GroupId, PulseId, RawColumnValue, Timestamp};

#[derive(Deserialize)]
struct PulseRecord {
    id: PulseId,
    name: String,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    board_id: Option<BoardId>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

#[derive(Deserialize)]
struct BoardMeta {
    group_id: GroupId,
}

/// Wire shape of one entry in a board's pulse listing.
#[derive(Deserialize)]
struct PulsePayload {
    pulse: PulseRecord,
    board_meta: BoardMeta,
    #[serde(default)]
    column_values: Vec<RawColumnValue>,
}

/// A single task card belonging to a board and a group.
///
/// Column values are kept raw, keyed by column title. Decode them through the
/// owning board's schema with [`crate::Board::decode_column`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "PulsePayload")]
pub struct Pulse {
    pub id: PulseId,
    pub name: String,
    pub url: Option<String>,
    pub board_id: Option<BoardId>,
    pub group_id: GroupId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub column_values: BTreeMap<String, RawColumnValue>,
}

impl From<PulsePayload> for Pulse {
    fn from(payload: PulsePayload) -> Self {
        let column_values = payload
            .column_values
            .into_iter()
            .map(|value| (value.title.clone(), value))
            .collect();

        Self {
            id: payload.pulse.id,
            name: payload.pulse.name,
            url: payload.pulse.url,
            board_id: payload.pulse.board_id,
            group_id: payload.board_meta.group_id,
            created_at: payload.pulse.created_at,
            updated_at: payload.pulse.updated_at,
            column_values,
        }
    }
}

impl Pulse {
    /// Returns the raw value of the column with the given title.
    pub fn column_value(&self, title: &str) -> Option<&RawColumnValue> {
        self.column_values.get(title)
    }

    /// Returns `true` if the pulse sits in the given group.
    pub fn is_in(&self, group: &GroupId) -> bool {
        &self.group_id == group
    }
}

impl std::fmt::Display for Pulse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}({}): created on: {}, updated on: {}",
            self.name, self.id, self.created_at, self.updated_at
        )
    }
}
