use crate::domain::board::Mark;
use crate::domain::game::{Game, GameId, Phase, Status};
use crate::domain::test_state_helpers::{board, game_with_board, play, started_game};
use crate::errors::domain::{ConflictKind, DomainError, ValidationKind};

#[test]
fn new_game_is_empty_and_waiting() {
    let game = Game::new(GameId::new("g"));
    assert!(game.board().cells().iter().all(Option::is_none));
    assert_eq!(game.turn(), 0);
    assert_eq!(game.status(), Status::InProgress);
    assert_eq!(game.phase(), Phase::WaitingForOpponent);
}

#[test]
fn opened_game_seats_creator_as_x() {
    let creator = uuid::Uuid::new_v4();
    let mut game = Game::opened_by(GameId::new("g"), creator);

    assert_eq!(game.seat_of(creator), Some(0));
    assert_eq!(game.participants()[0].mark, Mark::X);
    assert_eq!(game.phase(), Phase::WaitingForOpponent);

    // The creator may open before anyone joins
    assert_eq!(game.apply_move(4, 0).unwrap(), Status::InProgress);
    assert_eq!(game.turn(), 1);
    assert_eq!(game.add_participant(uuid::Uuid::new_v4()).unwrap(), 1);
}

#[test]
fn first_move_marks_cell_and_passes_turn() {
    let (mut game, _, _) = started_game();

    let status = game.apply_move(0, 0).unwrap();

    assert_eq!(status, Status::InProgress);
    assert_eq!(game.board().get(0), Some(Some(Mark::X)));
    assert_eq!(game.turn(), 1);
    assert_eq!(game.phase(), Phase::InProgress);
}

#[test]
fn second_seat_places_o() {
    let (mut game, _, _) = started_game();
    play(&mut game, &[4, 0]);
    assert_eq!(game.board().get(0), Some(Some(Mark::O)));
    assert_eq!(game.turn(), 0);
}

#[test]
fn detects_row_win() {
    assert!(game_with_board("XXX......").evaluate_win());
}

#[test]
fn detects_column_win() {
    assert!(game_with_board("X..X..X..").evaluate_win());
}

#[test]
fn detects_diagonal_win() {
    assert!(game_with_board("X...X...X").evaluate_win());
    assert!(game_with_board("..O.O.O..").evaluate_win());
}

#[test]
fn full_board_without_line_is_draw() {
    let game = game_with_board("XOXOXOOXO");
    assert!(!game.evaluate_win());
    assert!(game.evaluate_draw());
}

#[test]
fn full_board_with_line_is_not_draw() {
    let game = game_with_board("XXXOOXOXO");
    assert!(game.evaluate_win());
    assert!(!game.evaluate_draw());
}

#[test]
fn mixed_line_is_not_a_win() {
    assert!(!game_with_board("XXO......").evaluate_win());
    assert!(!game_with_board(".........").evaluate_win());
}

#[test]
fn winning_move_ends_game_and_freezes_turn() {
    let (mut game, _, _) = started_game();
    play(&mut game, &[0, 3, 1, 4]);

    let status = game.apply_move(2, 0).unwrap();

    assert_eq!(status, Status::Won { by: 0 });
    assert_eq!(game.phase(), Phase::Won { by: 0 });
    assert_eq!(game.turn(), 0, "turn must not flip after a win");
    assert_eq!(game.board().winning_line(), Some([0, 1, 2]));
}

#[test]
fn second_seat_can_win() {
    let (mut game, _, _) = started_game();
    play(&mut game, &[0, 2, 1, 4, 8]);

    let status = game.apply_move(6, 1).unwrap();

    assert_eq!(status, Status::Won { by: 1 });
    assert_eq!(game.snapshot().winner, Some(1));
}

#[test]
fn last_cell_without_line_is_draw() {
    let (mut game, _, _) = started_game();
    // X O X
    // X O O
    // O X X
    play(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6]);

    let status = game.apply_move(8, 0).unwrap();

    assert_eq!(status, Status::Draw);
    assert_eq!(game.phase(), Phase::Draw);
    let snap = game.snapshot();
    assert!(snap.game_over);
    assert_eq!(snap.winner, None);
}

#[test]
fn occupied_cell_is_rejected_without_mutation() {
    let (mut game, _, _) = started_game();
    play(&mut game, &[4]);
    let before = *game.board();

    let err = game.apply_move(4, 1).unwrap_err();

    assert_eq!(err.validation_kind(), Some(ValidationKind::CellOccupied));
    assert_eq!(*game.board(), before);
    assert_eq!(game.turn(), 1);
}

#[test]
fn out_of_turn_is_rejected() {
    let (mut game, _, _) = started_game();

    let err = game.apply_move(0, 1).unwrap_err();

    assert_eq!(err.validation_kind(), Some(ValidationKind::OutOfTurn));
    assert_eq!(game.board().get(0), Some(None));
}

#[test]
fn moves_after_game_over_are_rejected() {
    let (mut game, _, _) = started_game();
    play(&mut game, &[0, 3, 1, 4, 2]);

    let err = game.apply_move(8, 1).unwrap_err();

    assert_eq!(err.validation_kind(), Some(ValidationKind::GameOver));
    assert_eq!(game.board().get(8), Some(None));
}

#[test]
fn off_board_position_is_rejected() {
    let (mut game, _, _) = started_game();
    let err = game.apply_move(9, 0).unwrap_err();
    assert_eq!(
        err.validation_kind(),
        Some(ValidationKind::PositionOutOfRange)
    );
}

#[test]
fn reset_clears_board_but_keeps_participants() {
    let (mut game, first, second) = started_game();
    play(&mut game, &[0, 3, 1, 4, 2]);

    game.reset();

    assert_eq!(*game.board(), board("........."));
    assert_eq!(game.turn(), 0);
    assert_eq!(game.status(), Status::InProgress);
    assert_eq!(game.seat_of(first), Some(0));
    assert_eq!(game.seat_of(second), Some(1));
    assert_eq!(game.phase(), Phase::InProgress);
}

#[test]
fn third_participant_is_rejected() {
    let (mut game, _, _) = started_game();
    let err = game.add_participant(uuid::Uuid::new_v4()).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Conflict(ConflictKind::GameFull, _)
    ));
    assert_eq!(game.participants().len(), 2);
}

#[test]
fn participants_get_marks_in_join_order() {
    let (game, first, second) = started_game();
    assert_eq!(game.participants()[0].mark, Mark::X);
    assert_eq!(game.participants()[1].mark, Mark::O);
    assert_eq!(game.seat_of(first), Some(0));
    assert_eq!(game.seat_of(second), Some(1));
    assert_eq!(game.seat_of(uuid::Uuid::new_v4()), None);
}

#[test]
fn snapshot_serializes_to_wire_shape() {
    let (mut game, first, second) = started_game();
    play(&mut game, &[0]);

    let json = serde_json::to_value(game.snapshot()).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "board": ["X", null, null, null, null, null, null, null, null],
            "currentPlayer": 1,
            "gameOver": false,
            "winner": null,
            "players": [
                { "symbol": "X", "id": first.to_string() },
                { "symbol": "O", "id": second.to_string() },
            ],
        })
    );
}
