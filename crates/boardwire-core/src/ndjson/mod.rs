//! NDJSON handling for the remote board game stream.
//!
//! [`LineBuffer`] reassembles newline-terminated records from arbitrarily
//! split byte chunks; [`parse_line`] turns one record into a [`GameEvent`]
//! using a tolerant reader pattern.

mod buffer;
mod parser;
mod types;

pub use buffer::{DEFAULT_MAX_LINE_BYTES, LineBuffer};
pub use parser::{parse_line, parse_value};
pub use types::*;
