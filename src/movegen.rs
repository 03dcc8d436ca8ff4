/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Move generation and turn validation.
//!
//! A *turn* is a sequence of landing squares submitted for one piece. The
//! entry point is [`play_turn`], which vets the whole sequence on a scratch
//! copy of the board and commits it only if every step is legal, so a
//! rejected turn leaves the board untouched.

use std::fmt;

use arrayvec::ArrayVec;

use crate::{Board, Color, Move, MoveError, MoveList, Piece, Square};

/// One step along each of the four diagonals, as `(file, rank)` offsets.
///
/// The first two entries head toward rank 8 (forward for Red), the last two
/// toward rank 1 (forward for Black). A man uses the half matching his
/// color; a king uses all four.
const DIAGONALS: [(i8, i8); 4] = [(-1, 1), (1, 1), (-1, -1), (1, -1)];

/// The landing squares available to a single piece.
///
/// A piece has at most one slide and one jump per diagonal, and the two are
/// mutually exclusive, so four entries always suffice.
pub type TargetList = ArrayVec<Square, 4>;

/// Fetches the diagonal directions in which the provided [`Piece`] may move.
///
/// # Example
/// ```
/// # use draughts::{directions, Piece};
/// assert_eq!(directions(Piece::RED_MAN), [(-1, 1), (1, 1)]);
/// assert_eq!(directions(Piece::BLACK_MAN), [(-1, -1), (1, -1)]);
/// assert_eq!(directions(Piece::RED_KING).len(), 4);
/// ```
#[inline(always)]
pub fn directions(piece: Piece) -> &'static [(i8, i8)] {
    if piece.is_king() {
        &DIAGONALS
    } else {
        match piece.color() {
            Color::Red => &DIAGONALS[..2],
            Color::Black => &DIAGONALS[2..],
        }
    }
}

/// Computes every square to which `piece`, standing on `from`, could legally
/// slide: one diagonal step in a permitted direction, onto a vacant square.
pub fn slide_targets(board: &Board, piece: Piece, from: Square) -> TargetList {
    let mut targets = TargetList::new();

    for &(df, dr) in directions(piece) {
        if let Some(to) = from.offset(df, dr) {
            if board.is_vacant(to) {
                targets.push(to);
            }
        }
    }

    targets
}

/// Computes every square to which `piece`, standing on `from`, could legally
/// jump: two diagonal steps in a permitted direction, over an enemy piece,
/// onto a vacant square.
pub fn jump_targets(board: &Board, piece: Piece, from: Square) -> TargetList {
    let mut targets = TargetList::new();

    for &(df, dr) in directions(piece) {
        if let Some(to) = from.offset(2 * df, 2 * dr) {
            if board.is_legal_jump(piece.color(), to, from.midpoint(to)) {
                targets.push(to);
            }
        }
    }

    targets
}

/// Returns `true` if `piece`, standing on `from`, has at least one legal
/// slide or jump available.
#[inline(always)]
pub fn can_move(board: &Board, piece: Piece, from: Square) -> bool {
    !slide_targets(board, piece, from).is_empty() || !jump_targets(board, piece, from).is_empty()
}

/// Generates every single-step [`Move`] available to `color` on this board.
///
/// Multi-jump chains are *not* enumerated here; a chain is submitted to
/// [`play_turn`] as a sequence of landing squares, each step of which
/// appears in this list for the board state it is played on.
///
/// # Example
/// ```
/// # use draughts::{unit_moves, Board, Color};
/// // Seven opening slides per side, and no jumps
/// let board = Board::new();
/// let moves = unit_moves(&board, Color::Red);
/// assert_eq!(moves.len(), 7);
/// assert!(moves.iter().all(|mv| mv.is_slide()));
/// ```
pub fn unit_moves(board: &Board, color: Color) -> MoveList {
    let mut moves = MoveList::new();

    for (from, piece) in board.pieces().filter(|(_, piece)| piece.color() == color) {
        for to in slide_targets(board, piece, from) {
            moves.push(Move::slide(from, to));
        }
        for to in jump_targets(board, piece, from) {
            moves.push(Move::jump(from, to));
        }
    }

    moves
}

/// Resolves the next landing square of a sequence into a [`Move`], against
/// the current state of `board`.
///
/// A legal jump always takes precedence. A slide is only accepted if the
/// piece has not already jumped this turn.
fn resolve_step(
    board: &Board,
    piece: Piece,
    from: Square,
    to: Square,
    has_jumped: bool,
) -> Result<Move, MoveError> {
    if jump_targets(board, piece, from).contains(&to) {
        return Ok(Move::jump(from, to));
    }

    if !has_jumped && slide_targets(board, piece, from).contains(&to) {
        return Ok(Move::slide(from, to));
    }

    Err(MoveError::InvalidMove)
}

/// Steps a piece from `from` through `targets` directly on `board`,
/// recording captures and crowning as they happen.
///
/// On error the board is left mid-sequence; callers are expected to run
/// this on a scratch copy first. See [`play_turn`].
fn replay(board: &mut Board, from: Square, targets: &[Square]) -> Result<TurnRecord, MoveError> {
    let mut piece = board.piece_at(from).ok_or(MoveError::EmptySquare(from))?;
    let was_man = piece.is_man();

    let mut record = TurnRecord::new(from);
    let mut square = from;
    let mut has_jumped = false;

    for &target in targets {
        let step = resolve_step(board, piece, square, target, has_jumped)?;

        piece = board
            .relocate(square, target)
            .ok_or(MoveError::EmptySquare(square))?;

        if let Some(victim) = step.victim() {
            let taken = board.take(victim).ok_or(MoveError::InvalidMove)?;
            record.captures.push((victim, taken));
            has_jumped = true;
        }

        square = target;
        record.steps.push(step);

        // A slide ends the turn on the spot. Remaining targets are not
        // consumed, and in particular are never checked for legality.
        if step.is_slide() {
            break;
        }
    }

    record.end = square;
    record.crowned = was_man && piece.is_king();

    Ok(record)
}

/// Plays a full turn: the piece on `from` visits each landing square in
/// `targets`, in order, jumping or sliding as each step demands.
///
/// The sequence is first vetted in full on a scratch copy of the board.
/// Only if every step is legal is it committed, so on `Err` the real board
/// is guaranteed untouched.
///
/// Per step, a legal jump is applied and the sequence continues; failing
/// that, a slide is applied *if the piece has not yet jumped this turn*,
/// and the turn ends there even if targets remain; anything else rejects
/// the whole turn with [`MoveError::InvalidMove`]. A man crowned mid-chain
/// keeps jumping with his new powers.
///
/// An empty `targets` is a no-op and trivially succeeds.
///
/// # Panics
/// If a sequence that passed validation fails to apply to the real board.
///
/// # Example
/// ```
/// # use draughts::{play_turn, Board, Piece, Square};
/// let mut board = Board::empty();
/// board.place(Piece::RED_MAN, Square::A2);
/// board.place(Piece::BLACK_MAN, Square::B3);
/// board.place(Piece::BLACK_MAN, Square::D5);
///
/// // A double jump: a2 x c4 x e6
/// let record = play_turn(&mut board, Square::A2, &[Square::C4, Square::E6]).unwrap();
/// assert_eq!(record.captures.len(), 2);
/// assert_eq!(record.end, Square::E6);
/// assert_eq!(board.piece_at(Square::E6), Some(Piece::RED_MAN));
/// ```
pub fn play_turn(
    board: &mut Board,
    from: Square,
    targets: &[Square],
) -> Result<TurnRecord, MoveError> {
    if targets.is_empty() {
        return Ok(TurnRecord::new(from));
    }

    // Vet the whole sequence before touching the real board
    let mut scratch = *board;
    replay(&mut scratch, from, targets)?;

    let record = replay(board, from, targets)
        .expect("a sequence that passed validation must replay cleanly");

    Ok(record)
}

/// Returns `true` if the piece on `from` could legally play `targets` as a
/// full turn on this board, without playing it.
///
/// # Example
/// ```
/// # use draughts::{is_legal_turn, Board, Square};
/// let board = Board::new();
/// assert!(is_legal_turn(&board, Square::D3, &[Square::E4]));
/// assert!(!is_legal_turn(&board, Square::D3, &[Square::D5]));
/// ```
#[inline(always)]
pub fn is_legal_turn(board: &Board, from: Square, targets: &[Square]) -> bool {
    let mut scratch = *board;
    play_turn(&mut scratch, from, targets).is_ok()
}

/// The outcome of a successfully played turn.
///
/// Records the path taken, every capture made along the way, and whether
/// the moving piece was crowned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnRecord {
    /// Square the moving piece started the turn on.
    pub start: Square,

    /// Every step taken, in order.
    pub steps: Vec<Move>,

    /// Every piece captured, paired with the square it stood on.
    pub captures: Vec<(Square, Piece)>,

    /// Square the moving piece ended the turn on.
    pub end: Square,

    /// Whether the moving piece was crowned during this turn.
    pub crowned: bool,
}

impl TurnRecord {
    /// Creates a record of a turn in which nothing has (yet) happened.
    #[inline(always)]
    pub fn new(start: Square) -> Self {
        Self {
            start,
            steps: Vec::new(),
            captures: Vec::new(),
            end: start,
            crowned: false,
        }
    }

    /// Returns `true` if this turn moved nothing.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl fmt::Display for TurnRecord {
    /// Formats the turn in move notation: `d2-e3` for a slide, `a2xc4xe6`
    /// for a jump chain. A turn that moved nothing formats as its square.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.start)?;
        for step in &self.steps {
            let sep = if step.is_jump() { 'x' } else { '-' };
            write!(f, "{sep}{}", step.to())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directions() {
        assert_eq!(directions(Piece::RED_MAN), [(-1, 1), (1, 1)]);
        assert_eq!(directions(Piece::BLACK_MAN), [(-1, -1), (1, -1)]);
        assert_eq!(directions(Piece::RED_KING), DIAGONALS);
        assert_eq!(directions(Piece::BLACK_KING), DIAGONALS);
    }

    #[test]
    fn test_slide_targets() {
        let board = Board::new();

        // An unobstructed man has both forward diagonals
        let targets = slide_targets(&board, Piece::RED_MAN, Square::D3);
        assert_eq!(targets.as_slice(), [Square::C4, Square::E4]);

        // The board edge removes one
        let targets = slide_targets(&board, Piece::RED_MAN, Square::H3);
        assert_eq!(targets.as_slice(), [Square::G4]);

        // A man buried in his own ranks has none
        let targets = slide_targets(&board, Piece::RED_MAN, Square::B1);
        assert!(targets.is_empty());

        // A king on an open board has all four
        let king_targets = slide_targets(&Board::empty(), Piece::BLACK_KING, Square::D5);
        assert_eq!(king_targets.len(), 4);
    }

    #[test]
    fn test_jump_targets() {
        let mut board = Board::empty();
        board.place(Piece::RED_MAN, Square::D3);
        board.place(Piece::BLACK_MAN, Square::C4);

        let targets = jump_targets(&board, Piece::RED_MAN, Square::D3);
        assert_eq!(targets.as_slice(), [Square::B5]);

        // A second victim on the other diagonal opens a second jump
        board.place(Piece::BLACK_MAN, Square::E4);
        let targets = jump_targets(&board, Piece::RED_MAN, Square::D3);
        assert_eq!(targets.as_slice(), [Square::B5, Square::F5]);

        // An occupied landing square closes the jump again
        board.place(Piece::BLACK_MAN, Square::B5);
        let targets = jump_targets(&board, Piece::RED_MAN, Square::D3);
        assert_eq!(targets.as_slice(), [Square::F5]);

        // Friendly pieces cannot be jumped
        let mut board = Board::empty();
        board.place(Piece::RED_MAN, Square::D3);
        board.place(Piece::RED_MAN, Square::C4);
        assert!(jump_targets(&board, Piece::RED_MAN, Square::D3).is_empty());
    }

    #[test]
    fn test_men_cannot_move_backward() {
        let mut board = Board::empty();
        board.place(Piece::RED_MAN, Square::D5);
        board.place(Piece::BLACK_MAN, Square::C4);

        // The slide and the jump behind a red man are both invisible to him
        let slides = slide_targets(&board, Piece::RED_MAN, Square::D5);
        assert_eq!(slides.as_slice(), [Square::C6, Square::E6]);
        assert!(jump_targets(&board, Piece::RED_MAN, Square::D5).is_empty());

        // A king on the same square sees the backward jump
        let jumps = jump_targets(&board, Piece::RED_KING, Square::D5);
        assert_eq!(jumps.as_slice(), [Square::B3]);
    }

    #[test]
    fn test_can_move() {
        let mut board = Board::empty();
        board.place(Piece::BLACK_MAN, Square::D3);
        board.place(Piece::RED_MAN, Square::C2);
        board.place(Piece::RED_MAN, Square::E2);
        board.place(Piece::RED_MAN, Square::B1);
        board.place(Piece::RED_MAN, Square::F1);

        // Slides blocked by the men, jumps blocked by the occupied landings
        assert!(!can_move(&board, Piece::BLACK_MAN, Square::D3));

        // Vacating a landing square opens a jump
        board.take(Square::B1);
        assert!(can_move(&board, Piece::BLACK_MAN, Square::D3));
    }

    #[test]
    fn test_unit_moves_opening() {
        let board = Board::new();

        let red = unit_moves(&board, Color::Red);
        assert_eq!(red.len(), 7);
        assert!(red.iter().all(|mv| mv.is_slide()));
        assert!(red.contains(&Move::slide(Square::B3, Square::A4)));
        assert!(red.contains(&Move::slide(Square::B3, Square::C4)));

        let black = unit_moves(&board, Color::Black);
        assert_eq!(black.len(), 7);
        assert!(black.contains(&Move::slide(Square::A6, Square::B5)));
    }

    #[test]
    fn test_jump_resolves_before_slide() {
        // A jump-shaped step with no victim under it must not be treated as
        // anything else
        let mut board = Board::empty();
        board.place(Piece::RED_MAN, Square::A2);

        assert_eq!(
            resolve_step(&board, Piece::RED_MAN, Square::A2, Square::C4, false),
            Err(MoveError::InvalidMove)
        );

        board.place(Piece::BLACK_MAN, Square::B3);
        assert_eq!(
            resolve_step(&board, Piece::RED_MAN, Square::A2, Square::C4, false),
            Ok(Move::jump(Square::A2, Square::C4))
        );

        // Once the piece has jumped, a slide is off the table
        assert_eq!(
            resolve_step(&board, Piece::RED_MAN, Square::C4, Square::D5, false),
            Ok(Move::slide(Square::C4, Square::D5))
        );
        assert_eq!(
            resolve_step(&board, Piece::RED_MAN, Square::C4, Square::D5, true),
            Err(MoveError::InvalidMove)
        );
    }

    #[test]
    fn test_turn_record_notation() {
        let mut board = Board::empty();
        board.place(Piece::RED_MAN, Square::A2);
        board.place(Piece::BLACK_MAN, Square::B3);
        board.place(Piece::BLACK_MAN, Square::D5);

        let record = play_turn(&mut board, Square::A2, &[Square::C4, Square::E6]).unwrap();
        assert_eq!(record.to_string(), "a2xc4xe6");

        let mut board = Board::empty();
        board.place(Piece::RED_MAN, Square::D3);
        let record = play_turn(&mut board, Square::D3, &[Square::E4]).unwrap();
        assert_eq!(record.to_string(), "d3-e4");

        assert_eq!(TurnRecord::new(Square::D3).to_string(), "d3");
    }
}
