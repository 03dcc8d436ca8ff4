/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;

use crate::{movegen, Color, File, Piece, Rank, Square};

/// Represents all pieces and their locations on a checkers board.
///
/// The grid is the only record of occupancy. A [`Piece`] is a plain value
/// held in a cell; taking it out of its cell removes it from the game
/// entirely.
///
/// `Board` is `Copy`, and a copy is fully independent: every cell is a
/// value, so `let scratch = *board;` yields a second board whose mutations
/// are invisible to the first. The turn engine relies on this to trial
/// whole sequences on a throwaway copy before touching the real board.
///
/// A `Board` answers single-step questions and performs single-step
/// mutations only. It never validates multi-step sequences; those rules
/// live in [`play_turn`](crate::play_turn).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    /// One cell per square, `None` when vacant.
    cells: [Option<Piece>; Square::COUNT],
}

impl Board {
    /// Creates a [`Board`] with the standard opening setup.
    ///
    /// Each side starts with 12 men on the dark squares of its three home
    /// ranks: ranks 1-3 for Red, ranks 6-8 for Black.
    ///
    /// # Example
    /// ```
    /// # use draughts::{Board, Color, Piece, Square};
    /// let board = Board::new();
    /// assert_eq!(board.count(Color::Red), 12);
    /// assert_eq!(board.count(Color::Black), 12);
    /// assert_eq!(board.piece_at(Square::B1), Some(Piece::RED_MAN));
    /// assert_eq!(board.piece_at(Square::A8), Some(Piece::BLACK_MAN));
    /// ```
    pub fn new() -> Self {
        let mut board = Self::empty();

        for square in Square::iter().filter(Square::is_dark) {
            if square.rank() <= Rank::THREE {
                board.place(Piece::RED_MAN, square);
            } else if square.rank() >= Rank::SIX {
                board.place(Piece::BLACK_MAN, square);
            }
        }

        board
    }

    /// Creates a new, empty [`Board`] containing no pieces.
    ///
    /// # Example
    /// ```
    /// # use draughts::{Board, Square};
    /// let board = Board::empty();
    /// assert!(board.is_vacant(Square::B1));
    /// ```
    #[inline(always)]
    pub const fn empty() -> Self {
        Self {
            cells: [None; Square::COUNT],
        }
    }

    /// Fetches the [`Piece`] at the provided [`Square`], if there is one.
    ///
    /// # Example
    /// ```
    /// # use draughts::{Board, Piece, Square};
    /// let board = Board::new();
    /// assert_eq!(board.piece_at(Square::C2), Some(Piece::RED_MAN));
    /// assert!(board.piece_at(Square::C4).is_none());
    /// ```
    #[inline(always)]
    pub const fn piece_at(&self, square: Square) -> Option<Piece> {
        self.cells[square.index()]
    }

    /// Returns `true` if there is a piece at the given [`Square`], else `false`.
    ///
    /// # Example
    /// ```
    /// # use draughts::{Board, Square};
    /// let board = Board::new();
    /// assert_eq!(board.has(Square::B1), true);
    /// ```
    #[inline(always)]
    pub const fn has(&self, square: Square) -> bool {
        self.cells[square.index()].is_some()
    }

    /// Returns `true` if the given [`Square`] holds no piece.
    ///
    /// A vacant square is a legal destination for a slide, and a legal
    /// landing square for a jump.
    ///
    /// # Example
    /// ```
    /// # use draughts::{Board, Square};
    /// let board = Board::new();
    /// assert!(board.is_vacant(Square::C4));
    /// assert!(!board.is_vacant(Square::B1));
    /// ```
    #[inline(always)]
    pub const fn is_vacant(&self, square: Square) -> bool {
        self.cells[square.index()].is_none()
    }

    /// Fetches the [`Color`] of the piece at the provided [`Square`], if there is one.
    ///
    /// # Example
    /// ```
    /// # use draughts::{Board, Color, Square};
    /// let board = Board::new();
    /// assert_eq!(board.color_at(Square::B1), Some(Color::Red));
    /// assert_eq!(board.color_at(Square::A8), Some(Color::Black));
    /// assert!(board.color_at(Square::C4).is_none());
    /// ```
    #[inline(always)]
    pub fn color_at(&self, square: Square) -> Option<Color> {
        self.cells[square].map(|piece| piece.color())
    }

    /// Returns `true` if a piece of `color` may jump onto `landing` over the
    /// piece standing on `victim`.
    ///
    /// The landing square must be vacant and the victim square must hold a
    /// piece of the opposing color. The caller supplies the victim square;
    /// this check is agnostic of where the jumper currently stands.
    ///
    /// # Example
    /// ```
    /// # use draughts::{Board, Color, Piece, Square};
    /// let mut board = Board::empty();
    /// board.place(Piece::BLACK_MAN, Square::D5);
    /// assert!(board.is_legal_jump(Color::Red, Square::E6, Square::D5));
    ///
    /// // Jumping your own piece is not legal
    /// assert!(!board.is_legal_jump(Color::Black, Square::E6, Square::D5));
    /// // Nor is jumping over thin air
    /// assert!(!board.is_legal_jump(Color::Red, Square::E6, Square::F7));
    /// ```
    #[inline(always)]
    pub fn is_legal_jump(&self, color: Color, landing: Square, victim: Square) -> bool {
        self.is_vacant(landing) && self.color_at(victim) == Some(color.opponent())
    }

    /// Places the provided [`Piece`] at the supplied [`Square`].
    ///
    /// If another piece occupies this square, it is overwritten.
    ///
    /// # Example
    /// ```
    /// # use draughts::{Board, Piece, Square};
    /// let mut board = Board::empty();
    /// board.place(Piece::RED_KING, Square::C4);
    /// assert_eq!(board.piece_at(Square::C4), Some(Piece::RED_KING));
    /// ```
    #[inline(always)]
    pub fn place(&mut self, piece: Piece, square: Square) {
        self.cells[square] = Some(piece);
    }

    /// Takes the [`Piece`] from a given [`Square`], if there is one present.
    ///
    /// The removed piece is returned by value; it no longer exists anywhere
    /// on the board. This is how a jumped piece leaves the game.
    ///
    /// # Example
    /// ```
    /// # use draughts::{Board, Piece, Square};
    /// let mut board = Board::empty();
    /// board.place(Piece::BLACK_MAN, Square::C4);
    /// assert_eq!(board.take(Square::C4), Some(Piece::BLACK_MAN));
    /// assert!(board.is_vacant(Square::C4));
    /// assert_eq!(board.take(Square::C4), None);
    /// ```
    #[inline(always)]
    pub fn take(&mut self, square: Square) -> Option<Piece> {
        self.cells[square].take()
    }

    /// Moves the occupant of `from` to `to`, returning the piece as placed.
    ///
    /// This is an unconditional primitive: it performs no legality checks,
    /// and whatever occupied `to` is overwritten. A man arriving on its
    /// color's king row is crowned as part of the relocation; this is the
    /// only way a piece is ever crowned.
    ///
    /// Returns `None` (and does nothing) if `from` was vacant.
    ///
    /// # Example
    /// ```
    /// # use draughts::{Board, Piece, Square};
    /// let mut board = Board::empty();
    /// board.place(Piece::RED_MAN, Square::E6);
    ///
    /// assert_eq!(board.relocate(Square::E6, Square::F7), Some(Piece::RED_MAN));
    /// // Reaching rank 8 crowns the man
    /// assert_eq!(board.relocate(Square::F7, Square::G8), Some(Piece::RED_KING));
    /// assert!(board.is_vacant(Square::F7));
    /// ```
    #[inline(always)]
    pub fn relocate(&mut self, from: Square, to: Square) -> Option<Piece> {
        let piece = self.take(from)?;

        let piece = if to.rank().is(&Rank::king_row(piece.color())) {
            piece.crowned()
        } else {
            piece
        };

        self.place(piece, to);
        Some(piece)
    }

    /// Counts the pieces of the given [`Color`] remaining on the board.
    ///
    /// # Example
    /// ```
    /// # use draughts::{Board, Color};
    /// assert_eq!(Board::new().count(Color::Red), 12);
    /// assert_eq!(Board::empty().count(Color::Red), 0);
    /// ```
    #[inline(always)]
    pub fn count(&self, color: Color) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|piece| piece.color() == color)
            .count()
    }

    /// Returns an iterator over all occupied [`Square`]s on this board along
    /// with the pieces standing on them, in square order.
    ///
    /// # Example
    /// ```
    /// # use draughts::{Board, Square};
    /// let board = Board::new();
    /// assert_eq!(board.pieces().count(), 24);
    /// assert_eq!(board.pieces().next().unwrap().0, Square::B1);
    /// ```
    #[inline(always)]
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::iter().filter_map(|square| self.piece_at(square).map(|piece| (square, piece)))
    }

    /// Returns `true` if the given [`Color`] has lost: it has no pieces
    /// left, or none of its remaining pieces has a legal slide or jump.
    ///
    /// # Example
    /// ```
    /// # use draughts::{Board, Color, Piece, Square};
    /// assert!(!Board::new().is_game_over(Color::Red));
    ///
    /// // A lone man trapped in the corner: one diagonal runs off the board,
    /// // the other is blocked with no room to jump
    /// let mut board = Board::empty();
    /// board.place(Piece::BLACK_MAN, Square::A2);
    /// board.place(Piece::RED_MAN, Square::B1);
    /// assert!(board.is_game_over(Color::Black));
    /// assert!(!board.is_game_over(Color::Red));
    /// ```
    pub fn is_game_over(&self, color: Color) -> bool {
        !self
            .pieces()
            .filter(|(_, piece)| piece.color() == color)
            .any(|(square, piece)| movegen::can_move(self, piece, square))
    }
}

impl Default for Board {
    /// A "default" board is the standard opening setup. See [`Board::new`].
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    /// Renders the board as a plain-text diagram from Red's point of view.
    ///
    /// Occupied cells show the piece's character. Vacant dark squares show
    /// a `.` and vacant light squares are left blank, so the playable
    /// diagonals stand out.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in Rank::iter().rev() {
            write!(f, "{rank}")?;
            write!(f, "|")?;
            for file in File::iter() {
                let square = Square::new(file, rank);
                let cell = match self.piece_at(square) {
                    Some(piece) => piece.char(),
                    None if square.is_dark() => '.',
                    None => ' ',
                };
                write!(f, " {cell}")?;
            }
            writeln!(f)?;
        }
        write!(f, " +")?;
        for _ in File::iter() {
            write!(f, "--")?;
        }
        write!(f, "\n   ")?;
        for file in File::iter() {
            write!(f, "{file}")?;
            write!(f, " ")?;
        }

        Ok(())
    }
}

impl fmt::Debug for Board {
    /// Debug formatting renders the same diagram as [`fmt::Display`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_setup() {
        let board = Board::new();

        // 12 men per side, all on dark squares, none crowned
        assert_eq!(board.count(Color::Red), 12);
        assert_eq!(board.count(Color::Black), 12);
        for (square, piece) in board.pieces() {
            assert!(square.is_dark(), "{square} is not a dark square");
            assert!(piece.is_man());
        }

        // The two middle ranks start vacant
        for square in Square::iter() {
            let rank = square.rank();
            if rank == Rank::FOUR || rank == Rank::FIVE {
                assert!(board.is_vacant(square));
            }
        }
    }

    #[test]
    fn test_relocate_crowns_on_king_row() {
        let mut board = Board::empty();
        board.place(Piece::RED_MAN, Square::E6);

        // Moving within the middle of the board leaves a man a man
        assert_eq!(board.relocate(Square::E6, Square::F7), Some(Piece::RED_MAN));
        // Arriving on rank 8 crowns him
        assert_eq!(
            board.relocate(Square::F7, Square::G8),
            Some(Piece::RED_KING)
        );
        assert_eq!(board.piece_at(Square::G8), Some(Piece::RED_KING));

        // Black is crowned on rank 1
        board.place(Piece::BLACK_MAN, Square::C2);
        assert_eq!(
            board.relocate(Square::C2, Square::B1),
            Some(Piece::BLACK_KING)
        );

        // Relocating from a vacant square does nothing
        assert_eq!(board.relocate(Square::E6, Square::D5), None);
        assert!(board.is_vacant(Square::D5));
    }

    #[test]
    fn test_copies_are_independent() {
        let original = Board::new();
        let mut copy = original;

        copy.take(Square::B1);
        copy.relocate(Square::B3, Square::A4);

        assert_eq!(original.piece_at(Square::B1), Some(Piece::RED_MAN));
        assert_eq!(original.piece_at(Square::B3), Some(Piece::RED_MAN));
        assert!(original.is_vacant(Square::A4));
        assert_ne!(original, copy);
    }
}
