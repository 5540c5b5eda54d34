//! Integration tests for the game loop driving a board

use std::time::Duration;

use tui_blocks::core::{Board, GameOver, ScriptedRng, SimpleRng, Tile};
use tui_blocks::engine::{FrameLog, GameLoop, InstantPacer, RunOutcome, ScriptedInput};
use tui_blocks::term::JsonLinesSink;
use tui_blocks::types::{Command, GameConfig};

fn headless(input: ScriptedInput) -> GameLoop<FrameLog, ScriptedInput, InstantPacer> {
    GameLoop::new(FrameLog::default(), input, InstantPacer::default())
}

#[test]
fn test_bars_stack_until_top_is_reached() {
    // Every spawn is the vertical bar at column 0; five of them fill the column.
    let mut board = Board::new(ScriptedRng::new(vec![0, 0]));
    let mut game = headless(ScriptedInput::default());

    let outcome = game.run(&mut board).unwrap();
    assert_eq!(outcome, RunOutcome::Finished(GameOver::TopReached));
    assert_eq!(board.score(), 5);
    assert_eq!(board.level(), 1);
    assert_eq!(board.locked_count(), 20);
    assert!((0..20).all(|row| board.is_locked(row, 0)));

    // No frame is drawn for the tick that ended the game.
    let last = game.sink().last().unwrap();
    assert_eq!(last.status, tui_blocks::core::GameStatus::Playing);
    assert_eq!(last.count(Tile::Active), 4);
}

#[test]
fn test_player_commands_apply_between_ticks() {
    let mut board = Board::new(ScriptedRng::new(vec![1, 8]));
    let input = ScriptedInput::new(vec![Some(Command::Left); 12]).quit_after(12);
    let mut game = headless(input);

    assert_eq!(game.run(&mut board).unwrap(), RunOutcome::Quit);

    // Four gravity ticks, eight successful lefts, the rest rejected at the wall.
    assert_eq!(board.active().unwrap().anchor(), (4, 0));
    // Initial frame, one per tick, one per received command.
    assert_eq!(game.sink().frames.len(), 1 + 4 + 12);
    assert_eq!(game.pacer().waits, 11);
    assert_eq!(game.pacer().elapsed, Duration::from_millis(1100));
}

#[test]
fn test_blocked_first_spawn_ends_before_any_frame() {
    let mut board = Board::new(ScriptedRng::new(vec![0, 0]));
    board.set_locked(2, 0, true);
    let mut game = headless(ScriptedInput::default());

    let outcome = game.run(&mut board).unwrap();
    assert_eq!(outcome, RunOutcome::Finished(GameOver::NoSpawn));
    assert_eq!(board.score(), 0);
    assert!(game.sink().frames.is_empty());
    assert_eq!(game.input().polls(), 0);
}

#[test]
fn test_random_game_speeds_up_and_ends() {
    let config = GameConfig {
        level_step: 2,
        ..GameConfig::default()
    };
    let mut board = Board::with_config(config, SimpleRng::new(4242));
    let mut game = headless(ScriptedInput::default());

    let outcome = game.run(&mut board).unwrap();
    assert!(matches!(outcome, RunOutcome::Finished(_)));
    assert!(board.is_over());
    assert!(board.level() > 1);

    let expected = 0.3 * 0.75f64.powi(board.level() as i32 - 1);
    assert!((board.refresh_rate() - expected).abs() < 1e-12);
    // Level tracks score: the first score strictly above 2 * level bumps it.
    assert_eq!(board.level(), (board.score() + 1) / 2);
}

#[test]
fn test_poll_interval_controls_polls_per_tick() {
    let mut board = Board::new(ScriptedRng::new(vec![1, 4]));
    assert!(board.spawn());

    let mut game = headless(ScriptedInput::default()).with_poll_interval(Duration::from_millis(50));
    assert_eq!(game.tick(&mut board).unwrap(), None);
    assert_eq!(game.input().polls(), 6);
    assert_eq!(game.pacer().elapsed, Duration::from_millis(300));
}

#[test]
fn test_json_sink_records_whole_run() {
    let mut board = Board::new(ScriptedRng::new(vec![0, 0]));
    let mut game = GameLoop::new(
        JsonLinesSink::new(Vec::new()),
        ScriptedInput::default(),
        InstantPacer::default(),
    );
    game.run(&mut board).unwrap();

    let (sink, _, _) = game.into_parts();
    let frames = sink.frames();
    let text = String::from_utf8(sink.into_inner()).unwrap();
    assert_eq!(text.lines().count() as u64, frames);

    let last: serde_json::Value = serde_json::from_str(text.lines().last().unwrap()).unwrap();
    assert_eq!(last["score"], 5);
    assert_eq!(last["status"], "playing");
}
