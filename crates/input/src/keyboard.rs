//! Non-blocking keyboard source backed by crossterm events.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use crate::engine::InputSource;
use crate::map::{handle_key_event, should_quit};
use crate::types::Command;

/// Reads key presses from the terminal without waiting.
///
/// Expects the terminal to already be in raw mode.
#[derive(Debug, Default)]
pub struct KeyboardInput {
    quit: bool,
}

impl KeyboardInput {
    pub fn new() -> Self {
        Self { quit: false }
    }

    /// Block until any key is pressed. Used to acknowledge the welcome banner.
    ///
    /// Returns false if that key was a quit key.
    pub fn wait_for_ack(&mut self) -> Result<bool> {
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if should_quit(key) {
                    self.quit = true;
                    return Ok(false);
                }
                return Ok(true);
            }
        }
    }

    fn handle_press(&mut self, key: KeyEvent) -> Option<Command> {
        if should_quit(key) {
            self.quit = true;
            return None;
        }
        handle_key_event(key)
    }
}

impl InputSource for KeyboardInput {
    fn poll_key(&mut self) -> Result<Option<Command>> {
        // Drain non-command events so a resize or release can't hide a key press.
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if let Some(command) = self.handle_press(key) {
                    return Ok(Some(command));
                }
                if self.quit {
                    return Ok(None);
                }
            }
        }
        Ok(None)
    }

    fn quit_requested(&self) -> bool {
        self.quit
    }
}
