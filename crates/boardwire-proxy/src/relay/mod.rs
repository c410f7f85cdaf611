//! Stream relay engine.
//!
//! One upstream game stream per caller connection. Raw bytes are forwarded
//! unmodified; complete NDJSON lines are decoded on the side and live-update
//! records are pushed to a [`BoardObserver`].

mod engine;
mod observer;
mod pipeline;

pub use engine::{NDJSON_CONTENT_TYPE, RelayEngine};
pub use observer::{BoardObserver, LoggingObserver};
pub use pipeline::RecordPipeline;
