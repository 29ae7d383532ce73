//! Boards and their groups.

use serde::{Deserialize, Serialize};

use crate::{BoardId, ColumnData, ColumnDefinition, ColumnError, GroupId, Pulse, Timestamp};

// ---------------------------------------------------------------------------
// Groups
// ---------------------------------------------------------------------------

/// A named lane within a board, e.g. "This Week".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Group id, unique within the board.
    pub id: GroupId,
    /// Title shown in Monday; rules look groups up by it.
    pub title: String,
    /// Display colour, e.g. `"#037f4c"`.
    #[serde(default)]
    pub color: Option<String>,
    /// Board the group belongs to. Overwritten with the enclosing board's id
    /// whenever groups are decoded through a board or a board's group listing.
    #[serde(default)]
    pub board_id: Option<BoardId>,
    /// The group has been archived.
    #[serde(default)]
    pub archived: bool,
    /// The group has been deleted.
    #[serde(default)]
    pub deleted: bool,
}

impl Group {
    /// Returns `true` unless the group is archived or deleted.
    pub fn is_active(&self) -> bool {
        !(self.archived || self.deleted)
    }
}

impl std::fmt::Display for Group {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.title, self.id)
    }
}

// ---------------------------------------------------------------------------
// Boards
// ---------------------------------------------------------------------------

/// Wire shape of a board before inactive groups are dropped.
#[derive(Deserialize)]
struct BoardPayload {
    id: BoardId,
    name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    board_kind: Option<String>,
    #[serde(default)]
    columns: Vec<ColumnDefinition>,
    #[serde(default)]
    groups: Vec<Group>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

/// A project/workflow container.
///
/// Only active groups are kept: archived and deleted groups are dropped when
/// the board is decoded, so group lookups never land on a hidden lane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "BoardPayload")]
pub struct Board {
    /// Board id.
    pub id: BoardId,
    /// Board name; rule configuration refers to boards by it.
    pub name: String,
    /// Free-text description, if one was set.
    pub description: Option<String>,
    /// Link to the board in the Monday web app.
    pub url: Option<String>,
    /// Visibility kind, e.g. `"public"` or `"private"`.
    pub board_kind: Option<String>,
    /// Column schema, in board order.
    pub columns: Vec<ColumnDefinition>,
    /// Active groups, in board order.
    pub groups: Vec<Group>,
    /// When the board was created.
    pub created_at: Timestamp,
    /// When the board was last changed.
    pub updated_at: Timestamp,
}

impl From<BoardPayload> for Board {
    fn from(payload: BoardPayload) -> Self {
        let board_id = payload.id;
        let groups = payload
            .groups
            .into_iter()
            .filter(Group::is_active)
            .map(|mut group| {
                group.board_id = Some(board_id);
                group
            })
            .collect();

        Self {
            id: payload.id,
            name: payload.name,
            description: payload.description,
            url: payload.url,
            board_kind: payload.board_kind,
            columns: payload.columns,
            groups,
            created_at: payload.created_at,
            updated_at: payload.updated_at,
        }
    }
}

impl Board {
    /// Returns the first group whose title matches exactly.
    pub fn group_titled(&self, title: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.title == title)
    }

    /// Returns the schema of the column with the given title.
    pub fn column_titled(&self, title: &str) -> Option<&ColumnDefinition> {
        self.columns.iter().find(|c| c.title == title)
    }

    /// Decodes one of a pulse's column values using this board's schema.
    ///
    /// # Errors
    ///
    /// [`ColumnError::UnknownColumn`] if the board has no such column,
    /// [`ColumnError::MissingValue`] if the pulse carries no value for it, or
    /// any decoding error from [`ColumnDefinition::decode`].
    pub fn decode_column(&self, pulse: &Pulse, title: &str) -> Result<ColumnData, ColumnError> {
        let definition = self
            .column_titled(title)
            .ok_or_else(|| ColumnError::UnknownColumn {
                title: title.to_string(),
            })?;
        let raw = pulse
            .column_value(title)
            .ok_or_else(|| ColumnError::MissingValue {
                title: title.to_string(),
            })?;
        definition.decode(raw)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.name, self.description.as_deref().unwrap_or(""))
    }
}
