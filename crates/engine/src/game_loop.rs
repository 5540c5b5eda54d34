//! Game loop - gravity ticks interleaved with input polling
//!
//! Each iteration makes one gravity `Down` attempt, checks for game over,
//! redraws, then spends the rest of the gravity interval polling input on a
//! fixed sub-interval. Player commands are applied the moment they arrive.
//! Game over is only checked after gravity, since lateral moves and rotations
//! can never end the game.

use std::time::Duration;

use anyhow::Result;
use log::{debug, info};

use crate::core::{Board, GameOver, RandomSource};
use crate::io::{InputSource, Pacer, RenderSink};
use crate::types::{Command, POLL_INTERVAL_MS};

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The board reached a terminal state
    Finished(GameOver),
    /// The input source asked to quit
    Quit,
}

/// Number of input polls that fit in one gravity interval (at least one).
///
/// ```
/// use std::time::Duration;
/// use tui_blocks_engine::polls_per_tick;
///
/// assert_eq!(polls_per_tick(0.3, Duration::from_millis(100)), 3);
/// assert_eq!(polls_per_tick(0.225, Duration::from_millis(100)), 3);
/// assert_eq!(polls_per_tick(0.05, Duration::from_millis(100)), 1);
/// ```
pub fn polls_per_tick(refresh_secs: f64, poll_interval: Duration) -> u32 {
    let poll = poll_interval.as_secs_f64();
    if poll <= 0.0 {
        return 1;
    }
    // Absorb float noise such as 0.3 / 0.1 = 2.9999999999999996.
    let polls = (refresh_secs / poll - 1e-9).ceil();
    if polls < 1.0 {
        1
    } else {
        polls as u32
    }
}

/// Drives a [`Board`] with a render sink, an input source and a pacer
pub struct GameLoop<S, I, P> {
    sink: S,
    input: I,
    pacer: P,
    poll_interval: Duration,
}

impl<S: RenderSink, I: InputSource, P: Pacer> GameLoop<S, I, P> {
    pub fn new(sink: S, input: I, pacer: P) -> Self {
        Self {
            sink,
            input,
            pacer,
            poll_interval: Duration::from_millis(POLL_INTERVAL_MS),
        }
    }

    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    /// Play until the board ends the game or the player quits.
    ///
    /// Spawns the first piece if the board has none yet.
    pub fn run<R: RandomSource>(&mut self, board: &mut Board<R>) -> Result<RunOutcome> {
        info!("run started");

        if board.active().is_none() && !board.is_over() {
            board.spawn();
        }
        if let Some(over) = board.status().game_over() {
            info!("run ended before the first tick: {}", over);
            return Ok(RunOutcome::Finished(over));
        }
        self.sink.render(&board.snapshot())?;

        loop {
            if let Some(outcome) = self.tick(board)? {
                info!("run ended: {:?}, score {}", outcome, board.score());
                return Ok(outcome);
            }
        }
    }

    /// One gravity tick followed by its input window.
    ///
    /// Returns `Some` once the run is over.
    pub fn tick<R: RandomSource>(&mut self, board: &mut Board<R>) -> Result<Option<RunOutcome>> {
        board.try_move(Command::Down);
        if let Some(over) = board.status().game_over() {
            return Ok(Some(RunOutcome::Finished(over)));
        }
        self.sink.render(&board.snapshot())?;

        let polls = polls_per_tick(board.refresh_rate(), self.poll_interval);
        for _ in 0..polls {
            if let Some(command) = self.input.poll_key()? {
                if command.is_player_command() {
                    board.try_move(command);
                    self.sink.render(&board.snapshot())?;
                }
            }
            if self.input.quit_requested() {
                debug!("quit requested");
                return Ok(Some(RunOutcome::Quit));
            }
            self.pacer.wait(self.poll_interval);
        }

        Ok(None)
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn pacer(&self) -> &P {
        &self.pacer
    }

    pub fn into_parts(self) -> (S, I, P) {
        (self.sink, self.input, self.pacer)
    }
}
