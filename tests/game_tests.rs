use battleships::{Board, GameSession, GameStatus, GuessResult, Orientation, BOARD_SIZE};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_counters_track_outcomes() {
    let mut board = Board::new();
    board.place_ship(0, 0, 2, Orientation::Horizontal);
    let mut session = GameSession::new(board);

    assert_eq!(session.resolve_guess(0, 0).unwrap(), GuessResult::Hit);
    assert_eq!(session.resolve_guess(5, 5).unwrap(), GuessResult::Miss);

    let stats = session.stats();
    assert_eq!(stats.turns, 2);
    assert_eq!(stats.hits, 1);
    assert_eq!(stats.misses, 1);
}

#[test]
fn test_repeat_guess_consumes_no_turn() {
    let mut board = Board::new();
    board.place_ship(0, 0, 2, Orientation::Horizontal);
    let mut session = GameSession::new(board);

    session.resolve_guess(0, 0).unwrap();
    assert_eq!(
        session.resolve_guess(0, 0).unwrap(),
        GuessResult::AlreadyGuessed
    );

    let stats = session.stats();
    assert_eq!(stats.turns, 1);
    assert_eq!(stats.hits, 1);
    assert_eq!(stats.misses, 0);
}

#[test]
fn test_victory_holds_after_win() {
    let mut board = Board::new();
    board.place_ship(3, 4, 2, Orientation::Horizontal);
    let mut session = GameSession::new(board);

    assert_eq!(session.status(), GameStatus::InProgress);
    session.resolve_guess(3, 4).unwrap();
    session.resolve_guess(3, 5).unwrap();
    assert_eq!(session.status(), GameStatus::Won);
    assert_eq!(session.remaining_ship_cells(), 0);

    // further misses never undo victory
    session.resolve_guess(0, 0).unwrap();
    assert_eq!(session.status(), GameStatus::Won);
    assert_eq!(session.remaining_ship_cells(), 0);
}

#[test]
fn test_full_game_to_victory() {
    let mut rng = SmallRng::seed_from_u64(9);
    let mut board = Board::new();
    let report = board.place_fleet(&mut rng);
    let mut session = GameSession::new(board);
    assert_eq!(session.status(), GameStatus::InProgress);

    let size = BOARD_SIZE as usize;
    'sweep: for r in 0..size {
        for c in 0..size {
            session.resolve_guess(r, c).unwrap();
            if session.status() == GameStatus::Won {
                break 'sweep;
            }
        }
    }

    assert_eq!(session.status(), GameStatus::Won);
    let stats = session.stats();
    assert_eq!(stats.hits, report.placed_cells);
    assert_eq!(stats.turns, stats.hits + stats.misses);
    assert_eq!(session.remaining_ship_cells(), 0);
}
