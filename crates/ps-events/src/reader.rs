//! Lazy event-file reader.
//!
//! The format is two-line-per-record plain text: a header line with two
//! integers (event id, declared particle count) followed by that many
//! whitespace-delimited detail lines (`px py pz pdg_code`). There is no
//! end-of-file marker; end of stream is end of file.
//!
//! Per-record problems are absorbed, never raised: malformed header lines
//! are skipped, malformed detail lines are consumed without producing a
//! particle, and a file ending mid-event yields the truncated event. Only
//! opening the file can fail at the API boundary; an I/O error mid-stream
//! logs a warning and ends the sequence, matching the batch-tool contract
//! that per-file pipelines either finish or stop quietly.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use ps_core::{Event, Particle, Result};

/// Lazy, finite, non-restartable iterator over [`Event`]s in a text stream.
pub struct EventReader<R: BufRead> {
    source: R,
    /// Scratch line buffer, reused across reads.
    line: String,
    done: bool,
}

impl EventReader<BufReader<File>> {
    /// Open an event file. Open failure (missing file, permissions) is the
    /// caller's problem; everything after a successful open is absorbed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> EventReader<R> {
    /// Wrap any buffered source (used directly by tests).
    pub fn new(source: R) -> Self {
        Self { source, line: String::new(), done: false }
    }

    /// Read one line. `Ok(None)` is end of file; an I/O error ends the
    /// sequence with a warning instead of propagating.
    fn next_line(&mut self) -> Option<String> {
        self.line.clear();
        match self.source.read_line(&mut self.line) {
            Ok(0) => None,
            Ok(_) => Some(self.line.clone()),
            Err(err) => {
                tracing::warn!(%err, "I/O error while reading events; stopping");
                self.done = true;
                None
            }
        }
    }

    /// Parse a header line: exactly two whitespace-separated integers.
    fn parse_header(line: &str) -> Option<(i64, i64)> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != 2 {
            return None;
        }
        let event_id = tokens[0].parse().ok()?;
        let declared = tokens[1].parse().ok()?;
        Some((event_id, declared))
    }
}

impl<R: BufRead> Iterator for EventReader<R> {
    type Item = Event;

    fn next(&mut self) -> Option<Event> {
        while !self.done {
            let header = self.next_line()?;
            let Some((event_id, declared)) = Self::parse_header(&header) else {
                tracing::debug!(line = header.trim(), "skipping malformed header line");
                continue;
            };

            // Capacity hint only; a hostile declared count must not allocate.
            let mut particles = Vec::with_capacity(declared.clamp(0, 4096) as usize);
            for _ in 0..declared {
                let Some(detail) = self.next_line() else {
                    // Truncated event: yield what we have.
                    break;
                };
                if let Some(p) = Particle::parse_line(&detail) {
                    particles.push(p);
                }
            }
            return Some(Event { event_id, particles });
        }
        None
    }
}
