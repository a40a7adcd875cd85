//! End-to-end game flow through the public engine API

use blockfall::core::{GameConfig, GameEvent, GameState};
use blockfall::types::{Color, GameAction, GameStatus, PieceKind, COLS, ROWS};

fn game_with(kind: PieceKind) -> GameState {
    let mut game = GameState::new(GameConfig::with_seed(12345));
    game.spawn_kind(kind);
    game.take_events();
    game
}

#[test]
fn test_game_starts_running() {
    let game = GameState::new(GameConfig::with_seed(1));
    assert_eq!(game.status(), GameStatus::Running);
    assert_eq!(game.score(), 0);
    assert!(game.gravity_armed());
    assert!(!game.grid().collides(game.active()));
}

#[test]
fn test_gravity_drops_piece_until_it_locks() {
    let mut game = game_with(PieceKind::T);
    let interval = game.config().gravity_interval_ms;

    // T is two rows tall: 18 descents reach the floor, the 19th step locks it.
    for _ in 0..18 {
        assert_eq!(game.tick(interval), 1);
    }
    assert_eq!(game.active().y, 18);
    assert_eq!(game.grid().filled_count(), 0);

    game.tick(interval);
    let blue = Some(Some(Color::Blue));
    assert_eq!(game.grid().get(3, 18), blue);
    assert_eq!(game.grid().get(4, 18), blue);
    assert_eq!(game.grid().get(5, 18), blue);
    assert_eq!(game.grid().get(4, 19), blue);
    assert_eq!(game.grid().get(3, 19), Some(None));
    assert_eq!(game.score(), 0);
    assert_eq!(
        game.take_events(),
        vec![GameEvent::PieceLocked { lines_cleared: 0 }]
    );
}

#[test]
fn test_manual_down_shares_gravity_path() {
    let mut game = game_with(PieceKind::O);
    let mut moves = 0;
    while game.apply_action(GameAction::MoveDown) && game.active().y != 0 {
        moves += 1;
    }
    assert_eq!(moves, 18);
    assert_eq!(game.grid().get(4, 19), Some(Some(Color::Yellow)));
}

#[test]
fn test_completing_a_row_clears_it_and_scores() {
    let mut game = game_with(PieceKind::I);

    // Bottom row full except column 0.
    for x in 1..COLS as i8 {
        game.grid_mut().set(x, 19, Some(Color::Red));
    }
    game.grid_mut().set(5, 18, Some(Color::Green));

    // Stand the I upright and slide it to the left wall.
    assert!(game.apply_action(GameAction::Rotate));
    while game.apply_action(GameAction::MoveLeft) {}
    assert_eq!(game.active().x, 0);

    game.apply_action(GameAction::HardDrop);

    assert_eq!(game.score(), 10);
    // The I filled rows 16..=19 in column 0; row 19 cleared and the rest shifted down.
    for y in 17..ROWS as i8 {
        assert_eq!(game.grid().get(0, y), Some(Some(Color::Cyan)));
    }
    assert_eq!(game.grid().get(0, 16), Some(None));
    assert_eq!(game.grid().get(5, 19), Some(Some(Color::Green)));
    assert_eq!(game.grid().filled_count(), 4);
    assert_eq!(
        game.take_events(),
        vec![
            GameEvent::ScoreChanged { score: 10 },
            GameEvent::PieceLocked { lines_cleared: 1 },
        ]
    );
}

#[test]
fn test_double_clear_scores_twenty() {
    let mut game = game_with(PieceKind::O);
    for y in [18, 19] {
        for x in 0..COLS as i8 {
            if x != 4 && x != 5 {
                game.grid_mut().set(x, y, Some(Color::Red));
            }
        }
    }
    game.apply_action(GameAction::HardDrop);
    assert_eq!(game.score(), 20);
    assert_eq!(game.grid().filled_count(), 0);
}

#[test]
fn test_clear_lines_without_full_rows_is_noop() {
    let mut game = game_with(PieceKind::O);
    game.grid_mut().set(0, 19, Some(Color::Red));
    let before = game.grid().clone();
    assert_eq!(game.clear_lines(), 0);
    assert_eq!(*game.grid(), before);
    assert_eq!(game.score(), 0);
}

#[test]
fn test_game_over_when_spawn_blocked() {
    let mut game = game_with(PieceKind::O);
    // Tower in the spawn columns, one short of the top.
    for y in 1..ROWS as i8 {
        game.grid_mut().set(4, y, Some(Color::Red));
    }
    let before = game.grid().clone();

    assert!(!game.spawn_kind(PieceKind::O));
    assert_eq!(game.status(), GameStatus::Ended);
    assert_eq!(*game.grid(), before);
    assert_eq!(
        game.take_events(),
        vec![GameEvent::GameOver { final_score: 0 }]
    );
}

#[test]
fn test_stacking_eventually_ends_game() {
    let mut game = GameState::new(GameConfig::with_seed(3));
    let mut drops = 0;
    while !game.is_over() {
        game.apply_action(GameAction::HardDrop);
        drops += 1;
        assert!(drops < 200, "stack never reached the top");
    }
    let events = game.take_events();
    assert_eq!(
        events.last(),
        Some(&GameEvent::GameOver {
            final_score: game.score()
        })
    );
    assert!(!game.gravity_armed());
    assert_eq!(game.tick(60_000), 0);
}

#[test]
fn test_restart_resets_everything() {
    let mut game = game_with(PieceKind::O);
    game.grid_mut().fill_row(0, Color::Red);
    game.spawn_kind(PieceKind::T);
    assert!(game.is_over());

    assert!(!game.apply_action(GameAction::MoveLeft));
    assert!(game.apply_action(GameAction::Restart));

    assert_eq!(game.status(), GameStatus::Running);
    assert_eq!(game.score(), 0);
    assert_eq!(game.grid().filled_count(), 0);
    assert_eq!(game.next_gravity_in_ms(), Some(500));
    assert_eq!(
        game.take_events().last(),
        Some(&GameEvent::ScoreChanged { score: 0 })
    );
}

#[test]
fn test_independent_instances() {
    let mut a = game_with(PieceKind::O);
    let b = game_with(PieceKind::O);
    a.apply_action(GameAction::HardDrop);
    assert_eq!(a.grid().filled_count(), 4);
    assert_eq!(b.grid().filled_count(), 0);
}

#[test]
fn test_custom_gravity_interval() {
    let mut game = GameState::new(GameConfig {
        gravity_interval_ms: 100,
        ..GameConfig::with_seed(9)
    });
    game.spawn_kind(PieceKind::O);
    assert_eq!(game.tick(350), 3);
    assert_eq!(game.active().y, 3);
    assert_eq!(game.next_gravity_in_ms(), Some(50));
}
