//! In-memory [`MondayApi`] used by the rule tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use monday::{
    ApiError, Board, BoardId, ColumnDefinition, Group, GroupId, MondayApi, Pulse, PulseId, User,
    UserId,
};
use serde_json::{json, Value};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveCall {
    pub board: BoardId,
    pub pulses: Vec<PulseId>,
    pub group: GroupId,
}

pub struct FakeMonday {
    boards: Vec<Board>,
    pulses: Mutex<HashMap<BoardId, Vec<Pulse>>>,
    pulse_error: Mutex<Option<ApiError>>,
    moves: Mutex<Vec<MoveCall>>,
}

impl FakeMonday {
    pub fn new(boards: Vec<Value>) -> Self {
        Self {
            boards: boards
                .into_iter()
                .map(|b| serde_json::from_value(b).expect("valid board"))
                .collect(),
            pulses: Mutex::new(HashMap::new()),
            pulse_error: Mutex::new(None),
            moves: Mutex::new(Vec::new()),
        }
    }

    pub fn set_pulses(&self, board: u64, pulses: Vec<Value>) {
        let pulses = pulses
            .into_iter()
            .map(|p| serde_json::from_value(p).expect("valid pulse"))
            .collect();
        self.pulses.lock().unwrap().insert(BoardId::new(board), pulses);
    }

    pub fn fail_pulses_with(&self, error: ApiError) {
        *self.pulse_error.lock().unwrap() = Some(error);
    }

    pub fn moves(&self) -> Vec<MoveCall> {
        self.moves.lock().unwrap().clone()
    }

    fn find(&self, board: BoardId) -> Result<&Board, ApiError> {
        self.boards
            .iter()
            .find(|b| b.id == board)
            .ok_or_else(|| ApiError::NotFound {
                resource: format!("/v1/boards/{board}.json"),
            })
    }
}

#[async_trait]
impl MondayApi for FakeMonday {
    async fn boards(&self) -> Result<Vec<Board>, ApiError> {
        Ok(self.boards.clone())
    }

    async fn board(&self, board: BoardId) -> Result<Board, ApiError> {
        self.find(board).cloned()
    }

    async fn board_groups(&self, board: BoardId) -> Result<Vec<Group>, ApiError> {
        Ok(self.find(board)?.groups.clone())
    }

    async fn board_columns(&self, board: BoardId) -> Result<Vec<ColumnDefinition>, ApiError> {
        Ok(self.find(board)?.columns.clone())
    }

    async fn board_pulses(&self, board: BoardId) -> Result<Vec<Pulse>, ApiError> {
        if let Some(err) = self.pulse_error.lock().unwrap().clone() {
            return Err(err);
        }
        Ok(self
            .pulses
            .lock()
            .unwrap()
            .get(&board)
            .cloned()
            .unwrap_or_default())
    }

    async fn move_pulses(
        &self,
        board: BoardId,
        pulses: &[PulseId],
        group: &GroupId,
    ) -> Result<(), ApiError> {
        self.moves.lock().unwrap().push(MoveCall {
            board,
            pulses: pulses.to_vec(),
            group: group.clone(),
        });
        Ok(())
    }

    async fn users(&self) -> Result<Vec<User>, ApiError> {
        Ok(Vec::new())
    }

    async fn user(&self, user: UserId) -> Result<User, ApiError> {
        Err(ApiError::NotFound {
            resource: format!("/v1/users/{user}.json"),
        })
    }
}

/// A board with the standard This Week / Completed / Future groups.
pub fn board_json(id: u64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "description": "",
        "created_at": "2018-01-01T00:00:00Z",
        "updated_at": "2018-01-01T00:00:00Z",
        "columns": [
            {"id": "status", "title": "Status", "type": "color", "labels": {"0": "Working on it", "1": "Done"}},
            {"id": "timeline", "title": "Timeline", "type": "timerange"}
        ],
        "groups": [
            {"id": "week", "title": "This Week"},
            {"id": "done", "title": "Completed"},
            {"id": "later", "title": "Future"}
        ]
    })
}

pub fn pulse_json(id: u64, group: &str, status: Value, timeline: Value) -> Value {
    json!({
        "pulse": {
            "id": id, "name": format!("Card {id}"),
            "created_at": "2018-01-01T00:00:00Z", "updated_at": "2018-01-01T00:00:00Z"
        },
        "board_meta": {"group_id": group},
        "column_values": [
            {"cid": "status", "title": "Status", "value": status},
            {"cid": "timeline", "title": "Timeline", "value": timeline}
        ]
    })
}
