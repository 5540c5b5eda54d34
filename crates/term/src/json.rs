//! JSON-lines sink: one serialized [`Snapshot`] per rendered frame.
//!
//! Headless counterpart of [`TerminalRenderer`](crate::TerminalRenderer);
//! useful for recording a run or feeding frames to another process.

use std::io::Write;

use anyhow::Result;

use crate::core::Snapshot;
use crate::engine::RenderSink;

pub struct JsonLinesSink<W: Write> {
    out: W,
    frames: u64,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(out: W) -> Self {
        Self { out, frames: 0 }
    }

    /// Frames written so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RenderSink for JsonLinesSink<W> {
    fn render(&mut self, frame: &Snapshot) -> Result<()> {
        serde_json::to_writer(&mut self.out, frame)?;
        self.out.write_all(b"\n")?;
        self.frames += 1;
        Ok(())
    }
}
