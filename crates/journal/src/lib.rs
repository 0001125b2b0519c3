//! Session journal: an optional JSON-lines log of core events.
//!
//! Each record is one line, tagged by an `event` field:
//!
//! ```text
//! {"event":"session_start","seed":7,"width":15,"height":30}
//! {"event":"spawn","kind":"t","x":6,"y":0}
//! {"event":"lock","kind":"t","x":6,"y":28,"rows_cleared":0,"score":0,"drop_interval_ms":1000}
//! {"event":"board_reset","score_before":45}
//! {"event":"session_end","score":0}
//! ```
//!
//! The journal must never stop the game. The first write error is reported on
//! stderr and the journal goes quiet for the rest of the session.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

pub use pig_tetris_core as core;
pub use pig_tetris_types as types;

use crate::core::CoreEvent;

/// One journal line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum JournalRecord {
    SessionStart {
        seed: u32,
        width: usize,
        height: usize,
    },
    Spawn {
        kind: &'static str,
        x: i32,
        y: i32,
    },
    Lock {
        kind: &'static str,
        x: i32,
        y: i32,
        rows_cleared: u32,
        score: u32,
        drop_interval_ms: u32,
    },
    BoardReset {
        score_before: u32,
    },
    SessionEnd {
        score: u32,
    },
}

impl From<&CoreEvent> for JournalRecord {
    fn from(event: &CoreEvent) -> Self {
        match *event {
            CoreEvent::Spawned { kind, pos } => JournalRecord::Spawn {
                kind: kind.as_str(),
                x: pos.x,
                y: pos.y,
            },
            CoreEvent::Locked {
                kind,
                pos,
                rows_cleared,
                score,
                drop_interval_ms,
            } => JournalRecord::Lock {
                kind: kind.as_str(),
                x: pos.x,
                y: pos.y,
                rows_cleared,
                score,
                drop_interval_ms,
            },
            CoreEvent::BoardReset { score_before } => JournalRecord::BoardReset { score_before },
        }
    }
}

/// Appends [`JournalRecord`]s to a writer, one JSON object per line.
pub struct Journal<W: Write = BufWriter<File>> {
    out: W,
    line: Vec<u8>,
    failed: bool,
    written: u64,
}

impl Journal<BufWriter<File>> {
    /// Open `path` for appending, creating it if needed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening journal {}", path.display()))?;
        Ok(Self::from_writer(BufWriter::new(file)))
    }
}

impl<W: Write> Journal<W> {
    pub fn from_writer(out: W) -> Self {
        Self {
            out,
            line: Vec::with_capacity(256),
            failed: false,
            written: 0,
        }
    }

    /// Number of records written so far.
    pub fn written(&self) -> u64 {
        self.written
    }

    /// True once a write has failed and the journal stopped writing.
    pub fn is_failed(&self) -> bool {
        self.failed
    }

    pub fn session_start(&mut self, seed: u32, width: usize, height: usize) {
        self.record(&JournalRecord::SessionStart {
            seed,
            width,
            height,
        });
    }

    pub fn record_event(&mut self, event: &CoreEvent) {
        self.record(&JournalRecord::from(event));
    }

    /// Record the final score and flush.
    pub fn session_end(&mut self, score: u32) {
        self.record(&JournalRecord::SessionEnd { score });
        self.flush();
    }

    pub fn record(&mut self, record: &JournalRecord) {
        if self.failed {
            return;
        }
        if let Err(err) = self.try_record(record) {
            self.fail(err);
        }
    }

    pub fn flush(&mut self) {
        if self.failed {
            return;
        }
        if let Err(err) = self.out.flush() {
            self.fail(err.into());
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn try_record(&mut self, record: &JournalRecord) -> Result<()> {
        self.line.clear();
        serde_json::to_writer(&mut self.line, record)?;
        self.line.push(b'\n');
        self.out.write_all(&self.line)?;
        self.written += 1;
        Ok(())
    }

    fn fail(&mut self, err: anyhow::Error) {
        self.failed = true;
        eprintln!("[Journal] write failed, journal disabled: {err:#}");
    }
}
