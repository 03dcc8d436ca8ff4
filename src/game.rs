/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;

use crate::{play_turn, unit_moves, Board, Color, MoveError, MoveList, Square, TurnRecord};

/// A game of checkers: a [`Board`] plus whose turn it is.
///
/// Where [`play_turn`](crate::play_turn) validates a sequence against the
/// board alone, `Game` also enforces whose turn it is, refuses play after
/// the game has ended, and refuses "passing" (submitting no targets).
///
/// # Example
/// ```
/// # use draughts::{Color, Game, Square};
/// let mut game = Game::new();
/// assert_eq!(game.side_to_move(), Color::Red);
///
/// game.make_turn(Square::D3, &[Square::E4]).unwrap();
/// assert_eq!(game.side_to_move(), Color::Black);
///
/// game.make_turn(Square::E6, &[Square::D5]).unwrap();
/// assert_eq!(game.side_to_move(), Color::Red);
/// assert_eq!(game.fullmoves(), 2);
/// ```
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Game {
    /// The current state of the pieces.
    board: Board,

    /// The side whose turn it is. Red moves first.
    side_to_move: Color,

    /// Number of the current full move. Starts at 1, and increments after
    /// every Black turn.
    fullmoves: usize,
}

impl Game {
    /// Creates a new [`Game`] with the standard opening setup, Red to move.
    #[inline(always)]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            side_to_move: Color::Red,
            fullmoves: 1,
        }
    }

    /// Creates a [`Game`] from an arbitrary position.
    ///
    /// # Example
    /// ```
    /// # use draughts::{Board, Color, Game, Piece, Square};
    /// let mut board = Board::empty();
    /// board.place(Piece::RED_KING, Square::D5);
    /// board.place(Piece::BLACK_MAN, Square::A8);
    ///
    /// let game = Game::from_position(board, Color::Black);
    /// assert_eq!(game.side_to_move(), Color::Black);
    /// ```
    #[inline(always)]
    pub fn from_position(board: Board, side_to_move: Color) -> Self {
        Self {
            board,
            side_to_move,
            fullmoves: 1,
        }
    }

    /// Fetches the current board.
    #[inline(always)]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Fetches the [`Color`] whose turn it is.
    #[inline(always)]
    pub const fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Fetches the number of the current full move.
    #[inline(always)]
    pub const fn fullmoves(&self) -> usize {
        self.fullmoves
    }

    /// Returns `true` if the game is over: the side to move has no pieces
    /// left, or cannot move any piece it has.
    #[inline(always)]
    pub fn is_game_over(&self) -> bool {
        self.board.is_game_over(self.side_to_move)
    }

    /// Fetches the winner of this game, if there is one.
    ///
    /// The loser is the side that is due to move and cannot, so the winner
    /// is always that side's opponent. Returns `None` while the game is
    /// still in progress.
    ///
    /// # Example
    /// ```
    /// # use draughts::{Board, Color, Game, Piece, Square};
    /// let mut board = Board::empty();
    /// board.place(Piece::RED_KING, Square::D5);
    ///
    /// let game = Game::from_position(board, Color::Black);
    /// assert_eq!(game.winner(), Some(Color::Red));
    /// ```
    #[inline(always)]
    pub fn winner(&self) -> Option<Color> {
        self.is_game_over().then(|| self.side_to_move.opponent())
    }

    /// Generates every single-step move available to the side to move.
    ///
    /// See [`unit_moves`](crate::unit_moves).
    #[inline(always)]
    pub fn legal_moves(&self) -> MoveList {
        unit_moves(&self.board, self.side_to_move)
    }

    /// Returns `true` if the side to move could legally play `targets` with
    /// the piece on `from`, without playing it.
    #[inline(always)]
    pub fn is_legal(&self, from: Square, targets: &[Square]) -> bool {
        let mut copy = *self;
        copy.make_turn(from, targets).is_ok()
    }

    /// Plays a full turn for the side to move and hands the turn to the
    /// opponent.
    ///
    /// Rejections, in the order they are checked:
    /// - [`MoveError::GameOver`] if the side to move has already lost,
    /// - [`MoveError::EmptySquare`] if there is no piece on `from`,
    /// - [`MoveError::WrongSide`] if the piece on `from` belongs to the
    ///   opponent,
    /// - [`MoveError::InvalidMove`] if `targets` is empty (there is no
    ///   passing in checkers) or the sequence breaks a movement rule.
    ///
    /// On `Err`, the game state is untouched.
    ///
    /// # Example
    /// ```
    /// # use draughts::{Game, MoveError, Square};
    /// let mut game = Game::new();
    ///
    /// // Black cannot open the game
    /// let err = game.make_turn(Square::A6, &[Square::B5]).unwrap_err();
    /// assert!(matches!(err, MoveError::WrongSide(_)));
    ///
    /// // Red can
    /// let record = game.make_turn(Square::D3, &[Square::C4]).unwrap();
    /// assert_eq!(record.end, Square::C4);
    /// ```
    pub fn make_turn(
        &mut self,
        from: Square,
        targets: &[Square],
    ) -> Result<TurnRecord, MoveError> {
        if self.is_game_over() {
            return Err(MoveError::GameOver);
        }

        let piece = self
            .board
            .piece_at(from)
            .ok_or(MoveError::EmptySquare(from))?;

        if piece.color() != self.side_to_move {
            return Err(MoveError::WrongSide(piece.color()));
        }

        // A turn must move; there is no passing in checkers
        if targets.is_empty() {
            return Err(MoveError::InvalidMove);
        }

        let record = play_turn(&mut self.board, from, targets)?;

        if self.side_to_move.is_black() {
            self.fullmoves += 1;
        }
        self.side_to_move = self.side_to_move.opponent();

        Ok(record)
    }
}

impl Default for Game {
    /// A "default" game is the standard opening setup. See [`Game::new`].
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Game {
    /// Renders the board diagram followed by whose turn it is.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board)?;
        write!(f, "\n{} to move (move {})", self.side_to_move.name(), self.fullmoves)
    }
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Piece;

    #[test]
    fn test_sides_alternate() {
        let mut game = Game::new();
        assert_eq!(game.side_to_move(), Color::Red);
        assert_eq!(game.fullmoves(), 1);

        game.make_turn(Square::B3, &[Square::A4]).unwrap();
        assert_eq!(game.side_to_move(), Color::Black);
        assert_eq!(game.fullmoves(), 1);

        game.make_turn(Square::C6, &[Square::B5]).unwrap();
        assert_eq!(game.side_to_move(), Color::Red);
        assert_eq!(game.fullmoves(), 2);
    }

    #[test]
    fn test_rejections_leave_state_untouched() {
        let mut game = Game::new();
        let before = game;

        assert_eq!(
            game.make_turn(Square::A6, &[Square::B5]),
            Err(MoveError::WrongSide(Color::Black))
        );
        assert_eq!(
            game.make_turn(Square::C4, &[Square::B5]),
            Err(MoveError::EmptySquare(Square::C4))
        );
        assert_eq!(
            game.make_turn(Square::B3, &[]),
            Err(MoveError::InvalidMove)
        );

        assert_eq!(game, before);
        assert_eq!(game.side_to_move(), Color::Red);
    }

    #[test]
    fn test_no_moves_left_ends_the_game() {
        let mut board = Board::empty();
        board.place(Piece::BLACK_MAN, Square::A2);
        board.place(Piece::RED_MAN, Square::B1);

        let mut game = Game::from_position(board, Color::Black);
        assert!(game.is_game_over());
        assert_eq!(game.winner(), Some(Color::Red));
        assert_eq!(
            game.make_turn(Square::A2, &[Square::B1]),
            Err(MoveError::GameOver)
        );

        // From Red's point of view the same position is live
        let game = Game::from_position(board, Color::Red);
        assert!(!game.is_game_over());
        assert!(game.winner().is_none());
    }
}
