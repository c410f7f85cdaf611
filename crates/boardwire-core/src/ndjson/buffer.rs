//! Byte-level line reassembly for chunked NDJSON bodies.

use tracing::warn;

/// Default cap on a single pending (newline-less) line: 1 MiB.
pub const DEFAULT_MAX_LINE_BYTES: usize = 1024 * 1024;

/// Accumulates raw bytes and yields complete lines.
///
/// Holds at most one partial trailing line between calls to [`push`].
/// Lines are split on `\n` at the byte level and decoded as UTF-8 only once
/// complete, so a multi-byte character split across chunks survives intact.
///
/// [`push`]: LineBuffer::push
#[derive(Debug)]
pub struct LineBuffer {
    pending: Vec<u8>,
    max_line_bytes: usize,
    /// Set after an oversized partial line was dropped; bytes are skipped
    /// until the next newline.
    discarding: bool,
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl LineBuffer {
    /// Create a buffer with the default line cap.
    pub fn new() -> Self {
        Self::with_max_line(DEFAULT_MAX_LINE_BYTES)
    }

    /// Create a buffer that drops partial lines longer than `max_line_bytes`.
    pub fn with_max_line(max_line_bytes: usize) -> Self {
        Self {
            pending: Vec::new(),
            max_line_bytes: max_line_bytes.max(1),
            discarding: false,
        }
    }

    /// Append a chunk and return every line it completed, in order.
    ///
    /// Returned lines are trimmed; empty lines are skipped. A line whose raw
    /// length exceeds the cap is dropped however the chunks split it.
    pub fn push(&mut self, chunk: &[u8]) -> Vec<String> {
        let mut lines = Vec::new();
        let mut rest = chunk;

        while let Some(pos) = rest.iter().position(|&b| b == b'\n') {
            let head = &rest[..pos];
            rest = &rest[pos + 1..];

            if self.discarding {
                self.discarding = false;
                self.pending.clear();
                continue;
            }

            let line_len = self.pending.len() + head.len();
            if line_len > self.max_line_bytes {
                warn!(
                    bytes = line_len,
                    max = self.max_line_bytes,
                    "Dropping oversized NDJSON line"
                );
                self.pending.clear();
                continue;
            }

            self.pending.extend_from_slice(head);
            if let Some(line) = self.take_line() {
                lines.push(line);
            }
        }

        if !self.discarding {
            self.pending.extend_from_slice(rest);
            if self.pending.len() > self.max_line_bytes {
                warn!(
                    bytes = self.pending.len(),
                    max = self.max_line_bytes,
                    "Dropping oversized partial NDJSON line"
                );
                self.pending.clear();
                self.discarding = true;
            }
        }

        lines
    }

    /// Drain any trailing partial line at end of stream.
    ///
    /// The result is for diagnostics only: a line without its newline is
    /// never a complete record.
    pub fn finish(&mut self) -> Option<String> {
        self.discarding = false;
        self.take_line()
    }

    fn take_line(&mut self) -> Option<String> {
        let text = String::from_utf8_lossy(&self.pending);
        let trimmed = text.trim();
        let line = (!trimmed.is_empty()).then(|| trimmed.to_string());
        self.pending.clear();
        line
    }
}
