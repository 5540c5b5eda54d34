//! Seams between the game loop and the outside world.
//!
//! The loop only knows these traits. The terminal crates implement them with
//! crossterm; tests implement them with plain vectors and counters.

use std::thread;
use std::time::Duration;

use anyhow::Result;

use crate::core::Snapshot;
use crate::types::Command;

/// Output sink: receives a full frame after every state change worth showing.
pub trait RenderSink {
    fn render(&mut self, frame: &Snapshot) -> Result<()>;
}

impl<T: RenderSink + ?Sized> RenderSink for &mut T {
    fn render(&mut self, frame: &Snapshot) -> Result<()> {
        (**self).render(frame)
    }
}

/// Input source: non-blocking poll for one player command.
pub trait InputSource {
    /// Returns `Left`, `Right` or `Rotate`, or `None` when nothing was pressed.
    /// Must not block.
    fn poll_key(&mut self) -> Result<Option<Command>>;

    /// True once the player asked to leave the game.
    fn quit_requested(&self) -> bool {
        false
    }
}

impl<T: InputSource + ?Sized> InputSource for &mut T {
    fn poll_key(&mut self) -> Result<Option<Command>> {
        (**self).poll_key()
    }

    fn quit_requested(&self) -> bool {
        (**self).quit_requested()
    }
}

/// Waits out one polling sub-interval.
pub trait Pacer {
    fn wait(&mut self, interval: Duration);
}

/// Sleeps the current thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadPacer;

impl Pacer for ThreadPacer {
    fn wait(&mut self, interval: Duration) {
        thread::sleep(interval);
    }
}

/// Does not wait; counts how much time would have passed.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstantPacer {
    pub waits: u64,
    pub elapsed: Duration,
}

impl Pacer for InstantPacer {
    fn wait(&mut self, interval: Duration) {
        self.waits += 1;
        self.elapsed += interval;
    }
}

/// A render sink that keeps every frame, for headless runs and tests.
#[derive(Debug, Clone, Default)]
pub struct FrameLog {
    pub frames: Vec<Snapshot>,
}

impl FrameLog {
    pub fn last(&self) -> Option<&Snapshot> {
        self.frames.last()
    }
}

impl RenderSink for FrameLog {
    fn render(&mut self, frame: &Snapshot) -> Result<()> {
        self.frames.push(frame.clone());
        Ok(())
    }
}

/// An input source that replays a fixed script, one entry per poll.
///
/// Once the script runs out every poll returns `None`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    script: Vec<Option<Command>>,
    pos: usize,
    quit_after: Option<usize>,
}

impl ScriptedInput {
    pub fn new(script: Vec<Option<Command>>) -> Self {
        Self {
            script,
            pos: 0,
            quit_after: None,
        }
    }

    /// Request quit once `polls` polls have happened
    pub fn quit_after(mut self, polls: usize) -> Self {
        self.quit_after = Some(polls);
        self
    }

    pub fn polls(&self) -> usize {
        self.pos
    }
}

impl InputSource for ScriptedInput {
    fn poll_key(&mut self) -> Result<Option<Command>> {
        let key = self.script.get(self.pos).copied().flatten();
        self.pos += 1;
        Ok(key)
    }

    fn quit_requested(&self) -> bool {
        self.quit_after.is_some_and(|n| self.pos >= n)
    }
}
