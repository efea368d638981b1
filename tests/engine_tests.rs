//! Engine integration tests: whole games through the request/completion API.

use quantum_ttt::board::{Board, BoardStrip, Tile};
use quantum_ttt::core::{GameState, Player, Position, QuantumPiece};
use quantum_ttt::engine::{GameEngine, PresenterEvent, RecordingPresenter, TurnError, TurnPhase};
use quantum_ttt::rules::{WinClassification, WinResult};

fn pos(row: u8, col: u8) -> Position {
    Position::new(row, col)
}

fn classical(board: &mut Board, row: u8, col: u8, player: Player, n: u32) {
    board.set(pos(row, col), Tile::classical(QuantumPiece::new(player, n)));
}

/// Play a placement and answer the collapse that follows, for the pair of
/// rounds where both players entangle the same two cells.
fn entangle_and_collapse(
    engine: &mut GameEngine,
    presenter: &mut RecordingPresenter,
    cells: (Position, Position),
    collapse_into: Position,
) {
    engine.complete_placement(cells.0, cells.1, presenter).unwrap();
    engine.complete_placement(cells.1, cells.0, presenter).unwrap();
    assert!(matches!(engine.phase(), TurnPhase::AwaitingCollapseChoice { .. }));
    engine.complete_collapse(collapse_into, presenter).unwrap();
}

// =============================================================================
// Full Games
// =============================================================================

#[test]
fn test_simultaneous_lines_end_in_narrow_win() {
    let mut engine = GameEngine::new();
    let mut presenter = RecordingPresenter::new();
    engine.start(&mut presenter);

    // Rounds 0-2: x1 into (0,0), o0 forced into (1,0).
    entangle_and_collapse(&mut engine, &mut presenter, (pos(0, 0), pos(1, 0)), pos(0, 0));
    // Rounds 3-5: o4 into (1,1), x3 forced into (0,1).
    entangle_and_collapse(&mut engine, &mut presenter, (pos(0, 1), pos(1, 1)), pos(1, 1));

    assert_eq!(engine.state().board().classical_count(), 4);
    assert_eq!(engine.phase(), TurnPhase::AwaitingQuantumMove { player: Player::O });

    // Rounds 6-8: x7 into (0,2) completes row 0 for X and forces o6 into
    // (1,2), completing row 1 for O.
    presenter.drain();
    entangle_and_collapse(&mut engine, &mut presenter, (pos(0, 2), pos(1, 2)), pos(0, 2));

    // Row 1 finished with o6, row 0 with x7: O completed first.
    assert_eq!(engine.outcome(), Some(WinClassification::NarrowWin(Player::O)));
    assert!(matches!(engine.win_result(), Some(WinResult::MultipleWins(wins)) if wins.len() == 2));

    let events = presenter.drain();
    let tail = &events[events.len() - 5..];
    assert_eq!(
        tail,
        &[
            PresenterEvent::TileCollapsed { position: pos(0, 2), player: Player::X },
            PresenterEvent::TileCollapsed { position: pos(1, 2), player: Player::O },
            PresenterEvent::WinningStrip(BoardStrip::Row(0)),
            PresenterEvent::WinningStrip(BoardStrip::Row(1)),
            PresenterEvent::GameResult(WinClassification::NarrowWin(Player::O)),
        ]
    );
}

#[test]
fn test_full_board_ends_in_draw() {
    // X O X
    // . O O
    // O X .
    let mut board = Board::new();
    classical(&mut board, 0, 0, Player::X, 1);
    classical(&mut board, 0, 1, Player::O, 0);
    classical(&mut board, 0, 2, Player::X, 3);
    classical(&mut board, 1, 1, Player::O, 2);
    classical(&mut board, 1, 2, Player::O, 4);
    classical(&mut board, 2, 0, Player::O, 6);
    classical(&mut board, 2, 1, Player::X, 5);

    let mut engine = GameEngine::from_state(GameState::from_board(board, 7));
    let mut presenter = RecordingPresenter::new();
    engine.start(&mut presenter);
    assert_eq!(engine.phase().awaiting(), Some(Player::X));

    // X collapses o8 into (2,2), pushing x7 into (1,0) and blocking row 1.
    entangle_and_collapse(&mut engine, &mut presenter, (pos(1, 0), pos(2, 2)), pos(2, 2));

    assert_eq!(engine.state().board().classical_count(), 9);
    assert_eq!(engine.outcome(), Some(WinClassification::Draw));
    assert_eq!(
        presenter.last(),
        Some(&PresenterEvent::GameResult(WinClassification::Draw))
    );
}

#[test]
fn test_history_matches_rounds() {
    let mut engine = GameEngine::new();
    let mut presenter = RecordingPresenter::new();
    engine.start(&mut presenter);

    entangle_and_collapse(&mut engine, &mut presenter, (pos(2, 2), pos(0, 0)), pos(2, 2));

    let history: Vec<_> = engine.state().history().iter().cloned().collect();
    assert_eq!(history.len(), 3);
    assert_eq!(history[0].player, Player::O);
    assert_eq!(history[1].player, Player::X);
    assert_eq!(history[2].player, Player::O);
    assert_eq!(history[2].round, 2);
    assert!(!history[2].mv.is_quantum());
}

// =============================================================================
// Request Protocol
// =============================================================================

#[test]
fn test_exactly_one_request_per_round() {
    let mut engine = GameEngine::new();
    let mut presenter = RecordingPresenter::new();
    engine.start(&mut presenter);

    engine.complete_placement(pos(0, 0), pos(2, 2), &mut presenter).unwrap();
    engine.complete_placement(pos(0, 2), pos(2, 0), &mut presenter).unwrap();

    let requests = presenter
        .events()
        .iter()
        .filter(|e| {
            matches!(
                e,
                PresenterEvent::QuantumPlacementRequested(_)
                    | PresenterEvent::CollapseChoiceRequested { .. }
            )
        })
        .count();
    assert_eq!(requests, 3);
}

#[test]
fn test_collapse_request_names_both_cells() {
    let mut engine = GameEngine::new();
    let mut presenter = RecordingPresenter::new();
    engine.start(&mut presenter);

    engine.complete_placement(pos(0, 1), pos(2, 1), &mut presenter).unwrap();
    engine.complete_placement(pos(2, 1), pos(0, 1), &mut presenter).unwrap();

    assert_eq!(
        presenter.last(),
        Some(&PresenterEvent::CollapseChoiceRequested {
            between: [pos(0, 1), pos(2, 1)],
            player: Player::O,
        })
    );
}

#[test]
fn test_placement_onto_classical_cell_rejected() {
    let mut engine = GameEngine::new();
    let mut presenter = RecordingPresenter::new();
    engine.start(&mut presenter);
    entangle_and_collapse(&mut engine, &mut presenter, (pos(0, 0), pos(1, 1)), pos(0, 0));

    let before = engine.state().clone();
    let err = engine
        .complete_placement(pos(0, 0), pos(2, 2), &mut presenter)
        .unwrap_err();

    assert_eq!(err, TurnError::CellClassical { position: pos(0, 0) });
    assert_eq!(err.to_string(), "position (0, 0) is already classical");
    assert_eq!(engine.state(), &before);
}
