/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use draughts::{play_turn, Board, Color, Game, MoveError, Piece, Square};

fn board_with(pieces: &[(Piece, Square)]) -> Board {
    let mut board = Board::empty();
    for &(piece, square) in pieces {
        board.place(piece, square);
    }
    board
}

#[test]
fn test_rejected_sequence_leaves_board_untouched() {
    let mut board = board_with(&[
        (Piece::RED_MAN, Square::A2),
        (Piece::BLACK_MAN, Square::B3),
    ]);
    let before = board;

    // Fails at the first step: the target is not a candidate at all
    assert_eq!(
        play_turn(&mut board, Square::A2, &[Square::D4]),
        Err(MoveError::InvalidMove)
    );
    assert_eq!(board, before);

    // Fails at the second step: the first jump is legal, but the chain goes
    // dead at c4. The capture made while vetting must not survive.
    assert_eq!(
        play_turn(&mut board, Square::A2, &[Square::C4, Square::E6]),
        Err(MoveError::InvalidMove)
    );
    assert_eq!(board, before);
    assert_eq!(board.piece_at(Square::B3), Some(Piece::BLACK_MAN));

    // A jump over a friendly piece is no jump
    let mut board = board_with(&[
        (Piece::RED_MAN, Square::A2),
        (Piece::RED_MAN, Square::B3),
    ]);
    let before = board;
    assert_eq!(
        play_turn(&mut board, Square::A2, &[Square::C4]),
        Err(MoveError::InvalidMove)
    );
    assert_eq!(board, before);

    // An occupied landing square blocks the jump
    let mut board = board_with(&[
        (Piece::RED_MAN, Square::A2),
        (Piece::BLACK_MAN, Square::B3),
        (Piece::BLACK_MAN, Square::C4),
    ]);
    let before = board;
    assert_eq!(
        play_turn(&mut board, Square::A2, &[Square::C4]),
        Err(MoveError::InvalidMove)
    );
    assert_eq!(board, before);
}

#[test]
fn test_double_jump_captures_both_victims() {
    let mut board = board_with(&[
        (Piece::RED_MAN, Square::A2),
        (Piece::BLACK_MAN, Square::B3),
        (Piece::BLACK_MAN, Square::D5),
    ]);

    let record = play_turn(&mut board, Square::A2, &[Square::C4, Square::E6]).unwrap();

    assert_eq!(board.piece_at(Square::E6), Some(Piece::RED_MAN));
    assert!(board.is_vacant(Square::A2));
    assert!(board.is_vacant(Square::C4));
    assert!(board.is_vacant(Square::B3));
    assert!(board.is_vacant(Square::D5));
    assert_eq!(board.count(Color::Black), 0);

    assert_eq!(record.start, Square::A2);
    assert_eq!(record.end, Square::E6);
    assert_eq!(record.steps.len(), 2);
    assert_eq!(
        record.captures,
        vec![
            (Square::B3, Piece::BLACK_MAN),
            (Square::D5, Piece::BLACK_MAN)
        ]
    );
    assert!(!record.crowned);
}

#[test]
fn test_slide_ends_the_turn() {
    // The second element of [slide, slide] is never reached
    let mut board = board_with(&[(Piece::RED_MAN, Square::D3)]);
    let record = play_turn(&mut board, Square::D3, &[Square::E4, Square::F5]).unwrap();

    assert_eq!(record.steps.len(), 1);
    assert_eq!(record.end, Square::E4);
    assert_eq!(board.piece_at(Square::E4), Some(Piece::RED_MAN));
    assert!(board.is_vacant(Square::F5));

    // Never reached also means never judged: garbage after a slide is fine
    let mut board = board_with(&[(Piece::RED_MAN, Square::D3)]);
    let record = play_turn(&mut board, Square::D3, &[Square::E4, Square::A8]).unwrap();
    assert_eq!(record.end, Square::E4);
}

#[test]
fn test_no_slide_after_a_jump() {
    let mut board = board_with(&[
        (Piece::RED_MAN, Square::A2),
        (Piece::BLACK_MAN, Square::B3),
    ]);
    let before = board;

    // a2 x c4 is a fine jump, but the piece may not then drift to d5
    assert_eq!(
        play_turn(&mut board, Square::A2, &[Square::C4, Square::D5]),
        Err(MoveError::InvalidMove)
    );
    assert_eq!(board, before);
}

#[test]
fn test_crowned_exactly_on_the_king_row() {
    // Landing one rank short does not crown
    let mut board = board_with(&[(Piece::RED_MAN, Square::A6)]);
    let record = play_turn(&mut board, Square::A6, &[Square::B7]).unwrap();
    assert!(!record.crowned);
    assert_eq!(board.piece_at(Square::B7), Some(Piece::RED_MAN));

    // Landing on rank 8 does
    let record = play_turn(&mut board, Square::B7, &[Square::A8]).unwrap();
    assert!(record.crowned);
    assert_eq!(board.piece_at(Square::A8), Some(Piece::RED_KING));

    // Black is crowned on rank 1, including by a jump
    let mut board = board_with(&[
        (Piece::BLACK_MAN, Square::D3),
        (Piece::RED_MAN, Square::C2),
    ]);
    let record = play_turn(&mut board, Square::D3, &[Square::B1]).unwrap();
    assert!(record.crowned);
    assert_eq!(board.piece_at(Square::B1), Some(Piece::BLACK_KING));
    assert!(board.is_vacant(Square::C2));
}

#[test]
fn test_crowning_mid_chain_continues_as_king() {
    let mut board = board_with(&[
        (Piece::RED_MAN, Square::E6),
        (Piece::BLACK_MAN, Square::D7),
        (Piece::BLACK_MAN, Square::B7),
    ]);

    // e6 x c8 crowns the man; the new king immediately jumps backward
    let record = play_turn(&mut board, Square::E6, &[Square::C8, Square::A6]).unwrap();

    assert!(record.crowned);
    assert_eq!(record.end, Square::A6);
    assert_eq!(record.captures.len(), 2);
    assert_eq!(board.piece_at(Square::A6), Some(Piece::RED_KING));
    assert!(board.is_vacant(Square::C8));
    assert_eq!(board.count(Color::Black), 0);
}

#[test]
fn test_kings_zigzag_through_a_chain() {
    let mut board = board_with(&[
        (Piece::RED_KING, Square::A4),
        (Piece::BLACK_MAN, Square::B5),
        (Piece::BLACK_MAN, Square::D5),
    ]);

    // Forward over b5, then backward over d5
    let record = play_turn(&mut board, Square::A4, &[Square::C6, Square::E4]).unwrap();

    assert_eq!(record.end, Square::E4);
    assert_eq!(record.captures.len(), 2);
    assert_eq!(board.piece_at(Square::E4), Some(Piece::RED_KING));
    assert_eq!(board.count(Color::Black), 0);
    // A king that was already a king is not "crowned"
    assert!(!record.crowned);
}

#[test]
fn test_empty_sequence_is_a_no_op() {
    let mut board = Board::new();
    let before = board;

    let record = play_turn(&mut board, Square::B3, &[]).unwrap();
    assert!(record.is_empty());
    assert_eq!(record.start, Square::B3);
    assert_eq!(record.end, Square::B3);
    assert_eq!(board, before);

    // Even a vacant origin is fine when there is nothing to do
    let record = play_turn(&mut board, Square::C4, &[]).unwrap();
    assert!(record.is_empty());
    assert_eq!(board, before);
}

#[test]
fn test_slide_turn_then_jump_turn() {
    let mut board = board_with(&[
        (Piece::RED_MAN, Square::D3),
        (Piece::BLACK_MAN, Square::F5),
    ]);

    // d3-e4: a plain slide onto a vacant square
    play_turn(&mut board, Square::D3, &[Square::E4]).unwrap();
    assert_eq!(board.piece_at(Square::E4), Some(Piece::RED_MAN));
    assert!(board.is_vacant(Square::D3));

    // e4 x g6: the same piece jumps the man on f5 next turn
    let record = play_turn(&mut board, Square::E4, &[Square::G6]).unwrap();
    assert_eq!(record.captures, vec![(Square::F5, Piece::BLACK_MAN)]);
    assert_eq!(board.piece_at(Square::G6), Some(Piece::RED_MAN));
    assert!(board.is_vacant(Square::F5));
    assert!(board.is_vacant(Square::E4));
}

#[test]
fn test_wiping_out_the_opponent_wins() {
    let board = board_with(&[
        (Piece::RED_MAN, Square::B3),
        (Piece::BLACK_MAN, Square::C4),
    ]);
    let mut game = Game::from_position(board, Color::Red);
    assert!(!game.is_game_over());

    game.make_turn(Square::B3, &[Square::D5]).unwrap();

    assert_eq!(game.board().count(Color::Black), 0);
    assert!(game.is_game_over());
    assert_eq!(game.winner(), Some(Color::Red));
    assert_eq!(
        game.make_turn(Square::D5, &[Square::E6]),
        Err(MoveError::GameOver)
    );
}

#[test]
fn test_a_blocked_side_loses() {
    // Black's lone man has both slides blocked and both jump landings occupied
    let board = board_with(&[
        (Piece::BLACK_MAN, Square::D3),
        (Piece::RED_MAN, Square::C2),
        (Piece::RED_MAN, Square::E2),
        (Piece::RED_MAN, Square::B1),
        (Piece::RED_MAN, Square::F1),
    ]);

    let game = Game::from_position(board, Color::Black);
    assert!(game.is_game_over());
    assert_eq!(game.winner(), Some(Color::Red));

    // The same position with Red to move is a live game
    let game = Game::from_position(board, Color::Red);
    assert!(!game.is_game_over());
    assert_eq!(game.winner(), None);
}

#[test]
fn test_opening_exchange() {
    let mut game = Game::new();

    game.make_turn(Square::D3, &[Square::E4]).unwrap();
    game.make_turn(Square::G6, &[Square::F5]).unwrap();

    // Red takes the offered man, and Black recaptures
    let record = game.make_turn(Square::E4, &[Square::G6]).unwrap();
    assert_eq!(record.captures, vec![(Square::F5, Piece::BLACK_MAN)]);
    let record = game.make_turn(Square::H7, &[Square::F5]).unwrap();
    assert_eq!(record.captures, vec![(Square::G6, Piece::RED_MAN)]);

    assert_eq!(game.board().count(Color::Red), 11);
    assert_eq!(game.board().count(Color::Black), 11);
    assert_eq!(game.side_to_move(), Color::Red);
    assert_eq!(game.fullmoves(), 3);
    assert_eq!(game.board().piece_at(Square::F5), Some(Piece::BLACK_MAN));
    assert!(game.board().is_vacant(Square::H7));
}

#[test]
fn test_turns_are_resolved_against_the_live_board() {
    // The same submitted target list means different things as the board
    // changes: e4 is a slide target for d3 only while f5 stays friendly
    let mut board = board_with(&[
        (Piece::RED_MAN, Square::D3),
        (Piece::RED_MAN, Square::F5),
    ]);
    play_turn(&mut board, Square::D3, &[Square::E4]).unwrap();

    let mut hostile = board_with(&[
        (Piece::RED_MAN, Square::D3),
        (Piece::BLACK_MAN, Square::E4),
    ]);
    // Now e4 is occupied, and d3's only play on that diagonal is the jump
    assert_eq!(
        play_turn(&mut hostile, Square::D3, &[Square::E4]),
        Err(MoveError::InvalidMove)
    );
    play_turn(&mut hostile, Square::D3, &[Square::F5]).unwrap();
    assert!(hostile.is_vacant(Square::E4));
}
