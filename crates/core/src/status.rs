//! Game status - the board's state machine
//!
//! `Playing` is the only live state. Both game-over states are terminal and
//! carry a human-readable reason.

use std::fmt;

use serde::Serialize;

/// Why a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GameOver {
    /// A locked cell sits in row 0 after the clear pass
    TopReached,
    /// A freshly spawned piece was blocked in place
    NoSpawn,
}

impl GameOver {
    pub fn reason(&self) -> &'static str {
        match self {
            GameOver::TopReached => "Game Over! Top has been reached.",
            GameOver::NoSpawn => "Game Over! Couldn't add another piece.",
        }
    }
}

impl fmt::Display for GameOver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.reason())
    }
}

/// Board lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    #[default]
    Playing,
    GameOverTopReached,
    GameOverNoSpawn,
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::Playing)
    }

    /// The terminal condition, if any
    pub fn game_over(&self) -> Option<GameOver> {
        match self {
            GameStatus::Playing => None,
            GameStatus::GameOverTopReached => Some(GameOver::TopReached),
            GameStatus::GameOverNoSpawn => Some(GameOver::NoSpawn),
        }
    }

    pub fn reason(&self) -> Option<&'static str> {
        self.game_over().map(|over| over.reason())
    }
}

impl From<GameOver> for GameStatus {
    fn from(value: GameOver) -> Self {
        match value {
            GameOver::TopReached => GameStatus::GameOverTopReached,
            GameOver::NoSpawn => GameStatus::GameOverNoSpawn,
        }
    }
}
