//! Record types for the remote board game stream.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Canonical records emitted on a game stream.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    GameFull(GameFull),
    GameState(GameState),
    ChatLine(ChatLine),
    OpponentGone(OpponentGone),
    Unknown { msg_type: String, payload: Value },
}

impl GameEvent {
    /// Record kind as it appears in the `type` field.
    pub fn kind(&self) -> &str {
        match self {
            Self::GameFull(_) => "gameFull",
            Self::GameState(_) => "gameState",
            Self::ChatLine(_) => "chatLine",
            Self::OpponentGone(_) => "opponentGone",
            Self::Unknown { msg_type, .. } => msg_type,
        }
    }

    /// Move history carried by live-update records.
    ///
    /// `gameFull` carries it in its nested state, `gameState` directly. Every
    /// other kind returns `None`.
    pub fn live_state(&self) -> Option<&GameState> {
        match self {
            Self::GameFull(full) => Some(&full.state),
            Self::GameState(state) => Some(state),
            _ => None,
        }
    }

    /// Build the board update for `game_id`, if this is a live-update record.
    pub fn board_update(&self, game_id: &str) -> Option<BoardUpdate> {
        self.live_state().map(|state| BoardUpdate {
            game_id: game_id.to_string(),
            moves: state.move_list(),
            status: state.status.clone(),
        })
    }
}

/// First record of a game stream: static game info plus the current state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameFull {
    pub id: String,
    pub rated: bool,
    pub variant: String,
    pub initial_fen: String,
    pub white: Player,
    pub black: Player,
    pub state: GameState,
}

/// One side of a game.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub rating: Option<u32>,
    #[serde(default)]
    pub ai_level: Option<u8>,
}

/// Live game state, sent after every move and clock change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameState {
    /// Space-separated move history in UCI notation.
    pub moves: String,
    pub wtime: u64,
    pub btime: u64,
    pub winc: u64,
    pub binc: u64,
    pub status: String,
    pub winner: Option<String>,
}

impl GameState {
    /// Move history as individual tokens.
    pub fn move_list(&self) -> Vec<String> {
        self.moves.split_whitespace().map(String::from).collect()
    }
}

/// Chat message in the player or spectator room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatLine {
    pub username: String,
    pub text: String,
    pub room: String,
}

/// Opponent left or came back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpponentGone {
    pub gone: bool,
    pub claim_win_in_seconds: Option<u64>,
}

/// Structured update handed to board consumers for each live-update record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardUpdate {
    pub game_id: String,
    pub moves: Vec<String>,
    pub status: String,
}
