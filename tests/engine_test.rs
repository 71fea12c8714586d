//! Integration tests for the tic-tac-toe engine.

use tictactoe_history::{
    Board, BoardSize, EngineError, GameEngine, GameInvariants, InvariantSet, LineKind, MoveError,
    Outcome, Player, Square, detect_outcome,
};

fn size(n: usize) -> BoardSize {
    BoardSize::new(n).unwrap()
}

fn play(n: usize, moves: &[usize]) -> GameEngine {
    GameEngine::replay(size(n), moves).unwrap()
}

fn board(n: usize, marks: &str) -> Board {
    let squares = marks
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c {
            'X' => Square::Occupied(Player::Player1),
            'O' => Square::Occupied(Player::Player2),
            _ => Square::Empty,
        })
        .collect();
    Board::from_squares(size(n), squares).unwrap()
}

// ─────────────────────────────────────────────────────────────
//  Outcome detection
// ─────────────────────────────────────────────────────────────

#[test]
fn test_empty_board_has_no_outcome_for_every_size() {
    for n in BoardSize::MIN..=BoardSize::MAX {
        assert_eq!(detect_outcome(&Board::new(size(n))), Outcome::None, "N = {n}");
    }
}

#[test]
fn test_partly_filled_boards_without_line_are_none() {
    assert_eq!(detect_outcome(&board(3, "XOX .O. OX.")), Outcome::None);
    assert_eq!(detect_outcome(&board(3, "XOX XOO OX.")), Outcome::None);
    assert_eq!(
        detect_outcome(&board(4, "XOXO OXOX .... XXO.")),
        Outcome::None
    );
}

#[test]
fn test_full_board_without_line_is_draw() {
    let board = board(3, "XOX OOX XXO");
    assert_eq!(detect_outcome(&board), Outcome::Draw);
}

#[test]
fn test_win_on_full_board_is_win() {
    let board = board(3, "XXX OOX XOO");
    let outcome = detect_outcome(&board);
    assert_eq!(outcome.winner(), Some(Player::Player1));
    assert_eq!(outcome.line().map(|l| l.kind()), Some(LineKind::Row(0)));
}

#[test]
fn test_single_cell_board_first_move_wins() {
    let engine = play(1, &[0]);
    assert_eq!(engine.state().outcome().winner(), Some(Player::Player1));
}

// ─────────────────────────────────────────────────────────────
//  Full games
// ─────────────────────────────────────────────────────────────

#[test]
fn test_row_win() {
    let engine = play(3, &[0, 4, 1, 5, 2]);
    let outcome = engine.state().outcome();
    assert_eq!(outcome.winner(), Some(Player::Player1));
    assert_eq!(outcome.line().unwrap().cells(), &[0, 1, 2]);
    assert!(engine.state().is_locked());
}

#[test]
fn test_column_win() {
    let engine = play(3, &[0, 1, 3, 2, 6]);
    let line = engine.state().outcome().line().unwrap().clone();
    assert_eq!(line.kind(), LineKind::Column(0));
    assert_eq!(line.cells(), &[0, 3, 6]);
}

#[test]
fn test_diagonal_win() {
    let engine = play(3, &[0, 1, 4, 2, 8]);
    let line = engine.state().outcome().line().unwrap().clone();
    assert_eq!(line.kind(), LineKind::Diagonal);
    assert_eq!(line.cells(), &[0, 4, 8]);
}

#[test]
fn test_anti_diagonal_win_on_four_by_four() {
    let engine = play(4, &[3, 0, 6, 1, 9, 2, 12]);
    let outcome = engine.state().outcome();
    assert_eq!(outcome.winner(), Some(Player::Player1));
    assert_eq!(outcome.line().unwrap().kind(), LineKind::AntiDiagonal);
    assert_eq!(outcome.line().unwrap().cells(), &[3, 6, 9, 12]);
}

#[test]
fn test_second_player_win() {
    let engine = play(3, &[0, 3, 1, 4, 8, 5]);
    assert_eq!(engine.state().outcome().winner(), Some(Player::Player2));
}

#[test]
fn test_full_game_ends_in_draw() {
    let engine = play(3, &[0, 1, 2, 3, 5, 4, 6, 8, 7]);
    let state = engine.state();
    assert_eq!(state.outcome(), &Outcome::Draw);
    assert_eq!(state.history().len(), 10);
    assert!(state.current_board().available_moves().is_empty());
    assert!(GameInvariants::check_all(state).is_ok());
}

// ─────────────────────────────────────────────────────────────
//  Rejected moves
// ─────────────────────────────────────────────────────────────

#[test]
fn test_occupied_square_is_noop() {
    let mut engine = play(3, &[4]);
    let before = engine.state().clone();
    assert_eq!(engine.apply_move(4), &before);
    assert_eq!(engine.try_apply_move(4), Err(MoveError::SquareOccupied(4)));
    assert_eq!(engine.state(), &before);
}

#[test]
fn test_out_of_bounds_is_noop() {
    let mut engine = GameEngine::default();
    let before = engine.state().clone();
    assert_eq!(engine.apply_move(9), &before);
    assert_eq!(
        engine.try_apply_move(9),
        Err(MoveError::OutOfBounds { index: 9, cells: 9 })
    );
}

#[test]
fn test_moves_after_win_are_noop() {
    let mut engine = play(3, &[0, 4, 1, 5, 2]);
    let before = engine.state().clone();

    assert_eq!(engine.apply_move(8), &before);
    assert_eq!(engine.apply_move(0), &before);
    assert_eq!(engine.try_apply_move(8), Err(MoveError::GameLocked));
    assert_eq!(engine.state(), &before);
}

// ─────────────────────────────────────────────────────────────
//  Time-travel
// ─────────────────────────────────────────────────────────────

#[test]
fn test_jump_keeps_history_and_sets_turn() {
    let mut engine = play(3, &[0, 4, 1]);
    let state = engine.jump_to(1).unwrap();
    assert_eq!(state.history().len(), 4);
    assert_eq!(state.current_step(), 1);
    assert_eq!(state.next_player(), Player::Player2);
    assert_eq!(state.current_board().occupied_count(), 1);
}

#[test]
fn test_jump_to_start_unlocks_won_game() {
    let mut engine = play(3, &[0, 4, 1, 5, 2]);
    let state = engine.jump_to(0).unwrap();
    assert_eq!(state.outcome(), &Outcome::None);
    assert_eq!(state.next_player(), Player::Player1);
    assert!(!state.is_locked());

    let state = engine.apply_move(8);
    assert_eq!(state.history().len(), 2);
    assert_eq!(state.current_step(), 1);
    assert_eq!(
        state.current_board().get(8),
        Some(Square::Occupied(Player::Player1))
    );
}

#[test]
fn test_jump_to_winning_step_accepts_a_move() {
    let mut engine = play(3, &[0, 4, 1, 5, 2]);
    engine.jump_to(5).unwrap();
    assert_eq!(engine.state().outcome(), &Outcome::None);
    assert!(engine.try_apply_move(8).is_ok());
    assert_eq!(engine.state().history().len(), 7);
}

#[test]
fn test_move_after_jump_truncates_future() {
    let mut engine = play(3, &[0, 4, 1, 5]);
    engine.jump_to(2).unwrap();
    let state = engine.apply_move(8);
    assert_eq!(state.history().len(), 4);
    assert_eq!(state.current_step(), 3);
    assert_eq!(state.current_board().get(5), Some(Square::Empty));
    assert!(GameInvariants::check_all(state).is_ok());
}

#[test]
fn test_jump_out_of_range_is_error() {
    let mut engine = play(3, &[0]);
    let before = engine.state().clone();
    assert_eq!(
        engine.jump_to(5).map(|s| s.current_step()),
        Err(EngineError::StepOutOfRange { step: 5, len: 2 })
    );
    assert_eq!(engine.state(), &before);
}

// ─────────────────────────────────────────────────────────────
//  Reset
// ─────────────────────────────────────────────────────────────

#[test]
fn test_reset_starts_fresh() {
    let mut engine = play(3, &[0, 4, 1, 5, 2]);
    let state = engine.reset();
    assert_eq!(state.history().len(), 1);
    assert_eq!(state.current_step(), 0);
    assert_eq!(state.outcome(), &Outcome::None);
    assert_eq!(state.current_board().occupied_count(), 0);
}

#[test]
fn test_reset_hands_first_move_to_the_other_player() {
    let mut engine = GameEngine::default();
    assert_eq!(engine.reset().next_player(), Player::Player2);

    let state = engine.apply_move(0);
    assert_eq!(state.current_board().get(0), Some(Square::Occupied(Player::Player2)));
    assert_eq!(state.next_player(), Player::Player1);
}

#[test]
fn test_jump_after_reset_uses_step_parity() {
    let mut engine = GameEngine::default();
    engine.reset();
    engine.apply_move(0);
    engine.apply_move(1);

    assert_eq!(engine.jump_to(0).unwrap().next_player(), Player::Player1);
    assert_eq!(engine.jump_to(1).unwrap().next_player(), Player::Player2);
    assert_eq!(engine.jump_to(2).unwrap().next_player(), Player::Player1);
}

#[test]
fn test_same_player_may_move_twice_across_a_rewind() {
    // Player 2 opens after reset, then rewinding to step 1 hands Player 2
    // the turn again.
    let mut engine = GameEngine::default();
    engine.reset();
    engine.apply_move(0);
    engine.apply_move(1);
    engine.jump_to(1).unwrap();

    let state = engine.try_apply_move(2).unwrap();
    assert_eq!(state.history().len(), 3);
    assert_eq!(state.current_board().get(2), Some(Square::Occupied(Player::Player2)));
    assert_eq!(state.next_player(), Player::Player1);
    assert!(GameInvariants::check_all(state).is_ok());
}
