//! NDJSON parser for the board game stream.
//!
//! Implements tolerant reader pattern: unknown fields ignored, unknown types
//! surfaced as [`GameEvent::Unknown`].

use serde_json::Value;

use super::types::*;
use crate::error::{Error, Result};

/// Parse a single NDJSON line from the game stream.
pub fn parse_line(line: &str) -> Result<GameEvent> {
    let raw: Value = serde_json::from_str(line)?;
    parse_value(&raw)
}

/// Parse a JSON value into a canonical game event.
pub fn parse_value(raw: &Value) -> Result<GameEvent> {
    if !raw.is_object() {
        return Err(Error::NdjsonParse("record is not a JSON object".into()));
    }

    let msg_type = raw.get("type").and_then(Value::as_str).unwrap_or("");

    match msg_type {
        "gameFull" => Ok(GameEvent::GameFull(parse_game_full(raw))),
        "gameState" => Ok(GameEvent::GameState(parse_state(raw))),
        "chatLine" => Ok(GameEvent::ChatLine(parse_chat_line(raw))),
        "opponentGone" => Ok(GameEvent::OpponentGone(parse_opponent_gone(raw))),
        _ => Ok(GameEvent::Unknown {
            msg_type: msg_type.to_string(),
            payload: raw.clone(),
        }),
    }
}

fn str_field(raw: &Value, key: &str) -> String {
    raw.get(key)
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string()
}

fn u64_field(raw: &Value, key: &str) -> u64 {
    raw.get(key).and_then(Value::as_u64).unwrap_or(0)
}

fn parse_game_full(raw: &Value) -> GameFull {
    let variant = raw
        .get("variant")
        .and_then(|v| v.get("key"))
        .and_then(Value::as_str)
        .unwrap_or("standard")
        .to_string();

    GameFull {
        id: str_field(raw, "id"),
        rated: raw.get("rated").and_then(Value::as_bool).unwrap_or(false),
        variant,
        initial_fen: str_field(raw, "initialFen"),
        white: parse_player(raw.get("white")),
        black: parse_player(raw.get("black")),
        state: raw.get("state").map(parse_state).unwrap_or_default(),
    }
}

fn parse_player(val: Option<&Value>) -> Player {
    val.and_then(|v| serde_json::from_value(v.clone()).ok())
        .unwrap_or_default()
}

fn parse_state(raw: &Value) -> GameState {
    GameState {
        moves: str_field(raw, "moves"),
        wtime: u64_field(raw, "wtime"),
        btime: u64_field(raw, "btime"),
        winc: u64_field(raw, "winc"),
        binc: u64_field(raw, "binc"),
        status: str_field(raw, "status"),
        winner: raw.get("winner").and_then(Value::as_str).map(String::from),
    }
}

fn parse_chat_line(raw: &Value) -> ChatLine {
    ChatLine {
        username: str_field(raw, "username"),
        text: str_field(raw, "text"),
        room: str_field(raw, "room"),
    }
}

fn parse_opponent_gone(raw: &Value) -> OpponentGone {
    OpponentGone {
        gone: raw.get("gone").and_then(Value::as_bool).unwrap_or(false),
        claim_win_in_seconds: raw.get("claimWinInSeconds").and_then(Value::as_u64),
    }
}
