//! Terminal falling-block runner (default binary).
//!
//! Shows the welcome banner, waits for a key, plays one game on a 20x10
//! board, then restores the terminal and prints the result.

use anyhow::Result;
use log::info;

use tui_blocks::core::{Board, EntropyRng};
use tui_blocks::engine::{GameLoop, RunOutcome, ThreadPacer};
use tui_blocks::input::KeyboardInput;
use tui_blocks::term::TerminalRenderer;
use tui_blocks::types::GameConfig;

fn main() -> Result<()> {
    env_logger::init();

    let config = GameConfig::default();
    let mut board = Board::with_config(config, EntropyRng::new());

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut board, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    let outcome = result?;

    match outcome {
        Some(RunOutcome::Finished(over)) => println!("{}", over),
        Some(RunOutcome::Quit) | None => println!("Game abandoned."),
    }
    println!("You got {} points!", board.score());
    info!(
        "final score {}, level {}, status {:?}",
        board.score(),
        board.level(),
        board.status()
    );
    Ok(())
}

/// Returns `None` if the player quit at the banner.
fn run(
    term: &mut TerminalRenderer,
    board: &mut Board<EntropyRng>,
    config: &GameConfig,
) -> Result<Option<RunOutcome>> {
    let mut input = KeyboardInput::new();

    term.show_banner()?;
    if !input.wait_for_ack()? {
        return Ok(None);
    }

    let mut game = GameLoop::new(term, &mut input, ThreadPacer)
        .with_poll_interval(config.poll_interval());
    let outcome = game.run(board)?;
    Ok(Some(outcome))
}
