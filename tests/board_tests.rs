use battleships::{Board, CellView, GuessResult, Orientation, BOARD_SIZE};

#[test]
fn test_place_marks_exact_run() {
    let mut board = Board::new();
    assert!(board.is_valid_placement(2, 3, 4, Orientation::Horizontal));
    board.place_ship(2, 3, 4, Orientation::Horizontal);

    assert_eq!(board.ship_map().count_ones(), 4);
    for c in 3..7 {
        assert!(board.ship_map().get(2, c).unwrap());
    }
    // neighbors outside the run stay empty
    assert!(!board.ship_map().get(2, 2).unwrap());
    assert!(!board.ship_map().get(2, 7).unwrap());
    assert!(!board.ship_map().get(1, 3).unwrap());
    assert!(!board.ship_map().get(3, 3).unwrap());
}

#[test]
fn test_placement_rejects_out_of_bounds() {
    let board = Board::new();
    let size = BOARD_SIZE as usize;

    assert!(!board.is_valid_placement(0, size - 2, 3, Orientation::Horizontal));
    assert!(!board.is_valid_placement(size - 2, 0, 3, Orientation::Vertical));
    assert!(!board.is_valid_placement(size, 0, 1, Orientation::Horizontal));
    assert!(!board.is_valid_placement(0, size, 1, Orientation::Vertical));

    // runs ending exactly on the edge are fine
    assert!(board.is_valid_placement(0, size - 3, 3, Orientation::Horizontal));
    assert!(board.is_valid_placement(size - 3, 0, 3, Orientation::Vertical));
}

#[test]
fn test_placement_rejects_overlap() {
    let mut board = Board::new();
    board.place_ship(4, 2, 3, Orientation::Horizontal);

    assert!(!board.is_valid_placement(4, 4, 2, Orientation::Horizontal));
    assert!(!board.is_valid_placement(2, 3, 4, Orientation::Vertical));
    // adjacent but disjoint runs are allowed
    assert!(board.is_valid_placement(5, 2, 3, Orientation::Horizontal));
    assert!(board.is_valid_placement(4, 5, 3, Orientation::Horizontal));
}

#[test]
fn test_guess_state_machine() {
    let mut board = Board::new();
    board.place_ship(0, 0, 2, Orientation::Horizontal);

    assert_eq!(board.guess(0, 0).unwrap(), GuessResult::Hit);
    assert_eq!(board.guess(9, 9).unwrap(), GuessResult::Miss);
    // both kinds of guessed cell are terminal
    assert_eq!(board.guess(0, 0).unwrap(), GuessResult::AlreadyGuessed);
    assert_eq!(board.guess(9, 9).unwrap(), GuessResult::AlreadyGuessed);
    assert_eq!(board.hits().count_ones(), 1);
    assert_eq!(board.misses().count_ones(), 1);
}

#[test]
fn test_destroyer_end_to_end() {
    let mut board = Board::new();
    board.place_ship(3, 4, 2, Orientation::Horizontal);
    assert_eq!(board.remaining_ship_cells(), 2);

    assert_eq!(board.guess(3, 4).unwrap(), GuessResult::Hit);
    assert_eq!(board.remaining_ship_cells(), 1);

    assert_eq!(board.guess(3, 5).unwrap(), GuessResult::Hit);
    assert_eq!(board.remaining_ship_cells(), 0);

    assert_eq!(board.guess(3, 4).unwrap(), GuessResult::AlreadyGuessed);
    assert_eq!(board.guess(0, 0).unwrap(), GuessResult::Miss);
    // victory condition holds once reached
    assert_eq!(board.remaining_ship_cells(), 0);
}

#[test]
fn test_view_hides_unhit_ships() {
    let mut board = Board::new();
    board.place_ship(0, 0, 5, Orientation::Horizontal);

    let view = board.render_view();
    assert_eq!(view[0][0], CellView::Water);
    assert_eq!(view[0][4], CellView::Water);
    assert_eq!(view[9][9], CellView::Water);

    board.guess(0, 0).unwrap();
    board.guess(9, 9).unwrap();
    let view = board.render_view();
    assert_eq!(view[0][0], CellView::Hit);
    assert_eq!(view[9][9], CellView::Miss);
    // the rest of the ship still looks like water
    assert_eq!(view[0][1], CellView::Water);
}
