/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{fmt, str::FromStr};

use anyhow::{anyhow, bail, Result};

use crate::Square;

/// Maximum possible number of single steps available to one side.
///
/// At most 32 same-colored pieces fit on the dark squares, and no piece
/// has more than 4 directions to step in.
pub const MAX_UNIT_MOVES: usize = 128;

/// An alias for an [`arrayvec::ArrayVec`] containing at most [`MAX_UNIT_MOVES`] moves.
pub type MoveList = arrayvec::ArrayVec<Move, MAX_UNIT_MOVES>;

/// The two kinds of step a checkers piece can make.
///
/// Internally, these are represented by bit flags, which allows a compact
/// representation of the [`Move`] struct.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, PartialOrd, Ord)]
#[repr(u16)]
pub enum MoveKind {
    /// A single diagonal step onto an adjacent vacant square. A slide ends the mover's turn.
    Slide = 0 << Move::FLG_BITS,

    /// A two-square diagonal step over an adjacent opposing piece onto a vacant
    /// square, removing the piece jumped over from the board.
    Jump = 1 << Move::FLG_BITS,
}

impl fmt::Display for MoveKind {
    /// Displays a human-readable description for this [`MoveKind`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Slide => "Slide",
            Self::Jump => "Jump",
        };

        write!(f, "{s}")
    }
}

/// Represents a single resolved step of a turn: one slide, or one jump of a chain.
///
/// Internally encoded using the following bit pattern:
/// ```text
///     0000 000000 000000
///      |     |      |
///      |     |      +- Source square of the step.
///      |     +- Target square of the step.
///      +- Flag distinguishing slides from jumps.
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Move(u16);

impl Move {
    /// Mask for the source ("from") bits.
    const SRC_MASK: u16 = 0b0000_0000_0011_1111;
    /// Mask for the destination ("to") bits.
    const DST_MASK: u16 = 0b0000_1111_1100_0000;
    /// Mask for the flag bits.
    const FLG_MASK: u16 = 0b1111_0000_0000_0000;
    /// Start index of destination bits.
    const DST_BITS: u16 = 6;
    /// Start index of flag bits.
    const FLG_BITS: u16 = 12;

    const FLAG_JUMP: u16 = 1 << Self::FLG_BITS;

    /// Creates a new [`Move`] from the given [`Square`]s and a [`MoveKind`].
    ///
    /// # Example
    /// ```
    /// # use draughts::{Move, Square, MoveKind};
    /// let step = Move::new(Square::C3, Square::D4, MoveKind::Slide);
    /// assert_eq!(step.to_string(), "c3-d4");
    /// ```
    #[inline(always)]
    pub const fn new(from: Square, to: Square, kind: MoveKind) -> Self {
        Self(kind as u16 | (to.inner() as u16) << Self::DST_BITS | from.inner() as u16)
    }

    /// Creates a new sliding [`Move`] between the given [`Square`]s.
    ///
    /// # Example
    /// ```
    /// # use draughts::{Move, Square, MoveKind};
    /// let step = Move::slide(Square::C3, Square::D4);
    /// assert_eq!(step.kind(), MoveKind::Slide);
    /// ```
    #[inline(always)]
    pub const fn slide(from: Square, to: Square) -> Self {
        Self::new(from, to, MoveKind::Slide)
    }

    /// Creates a new jumping [`Move`] between the given [`Square`]s.
    ///
    /// # Example
    /// ```
    /// # use draughts::{Move, Square, MoveKind};
    /// let step = Move::jump(Square::C3, Square::E5);
    /// assert_eq!(step.kind(), MoveKind::Jump);
    /// ```
    #[inline(always)]
    pub const fn jump(from: Square, to: Square) -> Self {
        Self::new(from, to, MoveKind::Jump)
    }

    /// Fetches the source (or "from") part of this [`Move`], as a [`Square`].
    ///
    /// # Example
    /// ```
    /// # use draughts::{Move, Square};
    /// let step = Move::slide(Square::C3, Square::D4);
    /// assert_eq!(step.from(), Square::C3);
    /// ```
    #[inline(always)]
    pub const fn from(&self) -> Square {
        Square::from_bits_unchecked((self.0 & Self::SRC_MASK) as u8)
    }

    /// Fetches the destination (or "to") part of this [`Move`], as a [`Square`].
    ///
    /// # Example
    /// ```
    /// # use draughts::{Move, Square};
    /// let step = Move::slide(Square::C3, Square::D4);
    /// assert_eq!(step.to(), Square::D4);
    /// ```
    #[inline(always)]
    pub const fn to(&self) -> Square {
        Square::from_bits_unchecked(((self.0 & Self::DST_MASK) >> Self::DST_BITS) as u8)
    }

    /// Fetches the [`MoveKind`] part of this [`Move`].
    ///
    /// # Example
    /// ```
    /// # use draughts::{Move, MoveKind, Square};
    /// let step = Move::jump(Square::C3, Square::E5);
    /// assert_eq!(step.kind(), MoveKind::Jump);
    /// ```
    #[inline(always)]
    pub fn kind(&self) -> MoveKind {
        // Safety: Since a `Move` can ONLY be constructed through the public API,
        // any instance of a `Move` is guaranteed to have a valid bit pattern for its `MoveKind`.
        unsafe { std::mem::transmute(self.0 & Self::FLG_MASK) }
    }

    /// Returns `true` if this [`Move`] is a jump.
    ///
    /// # Example
    /// ```
    /// # use draughts::{Move, Square};
    /// assert!(Move::jump(Square::C3, Square::E5).is_jump());
    /// assert!(!Move::slide(Square::C3, Square::D4).is_jump());
    /// ```
    #[inline(always)]
    pub const fn is_jump(&self) -> bool {
        self.0 & Self::FLAG_JUMP != 0
    }

    /// Returns `true` if this [`Move`] is a slide.
    ///
    /// # Example
    /// ```
    /// # use draughts::{Move, Square};
    /// assert!(Move::slide(Square::C3, Square::D4).is_slide());
    /// assert!(!Move::jump(Square::C3, Square::E5).is_slide());
    /// ```
    #[inline(always)]
    pub const fn is_slide(&self) -> bool {
        self.0 & Self::FLAG_JUMP == 0
    }

    /// For a jump, the [`Square`] being jumped over; `None` for a slide.
    ///
    /// The endpoints of a jump are two files and two ranks apart, so the
    /// jumped square is their midpoint.
    ///
    /// # Example
    /// ```
    /// # use draughts::{Move, Square};
    /// let step = Move::jump(Square::E4, Square::G6);
    /// assert_eq!(step.victim(), Some(Square::F5));
    ///
    /// let step = Move::slide(Square::E4, Square::F5);
    /// assert_eq!(step.victim(), None);
    /// ```
    #[inline(always)]
    pub const fn victim(&self) -> Option<Square> {
        if self.is_jump() {
            Some(self.from().midpoint(self.to()))
        } else {
            None
        }
    }

    /// Creates a [`Move`] from a string in algebraic notation.
    ///
    /// Slides are written `c3-d4` and jumps `c3xe5`. The squares must be
    /// spaced apart correctly for the step's kind, one diagonal for a slide
    /// and two for a jump.
    ///
    /// # Example
    /// ```
    /// # use draughts::{Move, Square};
    /// let step = Move::from_alg("c3xe5").unwrap();
    /// assert_eq!(step.from(), Square::C3);
    /// assert_eq!(step.to(), Square::E5);
    /// assert!(step.is_jump());
    ///
    /// assert!(Move::from_alg("c3-e5").is_err());
    /// assert!(Move::from_alg("c3?d4").is_err());
    /// ```
    pub fn from_alg(alg: &str) -> Result<Self> {
        let from = alg
            .get(0..2)
            .ok_or(anyhow!("Move str must contain a `from` square. Got {alg:?}"))?;
        let sep = alg
            .get(2..3)
            .ok_or(anyhow!("Move str must contain a separator. Got {alg:?}"))?;
        let to = alg
            .get(3..5)
            .ok_or(anyhow!("Move str must contain a `to` square. Got {alg:?}"))?;

        if alg.len() != 5 {
            bail!("Move str must be exactly 5 characters. Got {alg:?}");
        }

        let from = Square::from_alg(from)?;
        let to = Square::from_alg(to)?;

        let kind = match sep {
            "-" => MoveKind::Slide,
            "x" => MoveKind::Jump,
            _ => bail!("Move str separator must be '-' or 'x'. Got {alg:?}"),
        };

        // A slide spans one diagonal, a jump two
        let span = match kind {
            MoveKind::Slide => 1,
            MoveKind::Jump => 2,
        };
        if from.distance_files(to) != span || from.distance_ranks(to) != span {
            bail!("Squares in {alg:?} are not spaced for a {kind}");
        }

        Ok(Self::new(from, to, kind))
    }

    /// Converts this [`Move`] to a string in algebraic notation, e.g. `c3-d4` or `c3xe5`.
    ///
    /// # Example
    /// ```
    /// # use draughts::{Move, Square};
    /// assert_eq!(Move::jump(Square::C3, Square::E5).to_alg(), "c3xe5");
    /// ```
    #[inline(always)]
    pub fn to_alg(&self) -> String {
        let sep = if self.is_jump() { 'x' } else { '-' };
        format!("{}{sep}{}", self.from(), self.to())
    }
}

impl FromStr for Move {
    type Err = anyhow::Error;
    /// Wrapper for [`Move::from_alg`].
    #[inline(always)]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_alg(s)
    }
}

impl fmt::Display for Move {
    /// A [`Move`] is displayed in its algebraic format.
    #[inline(always)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_alg())
    }
}

impl fmt::Debug for Move {
    /// Debug formatting will call the [`fmt::Display`] implementation
    /// and will also display its [`MoveKind`] in a human-readable format.
    #[inline(always)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self} ({})", self.kind())
    }
}

impl<T: AsRef<str>> PartialEq<T> for Move {
    #[inline(always)]
    fn eq(&self, other: &T) -> bool {
        self.to_alg().eq(other.as_ref())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_move_kind_flags() {
        let slide = Move::new(Square::B6, Square::A5, MoveKind::Slide);
        assert!(slide.is_slide());
        assert!(!slide.is_jump());
        assert_eq!(slide.kind(), MoveKind::Slide);

        let jump = Move::new(Square::B6, Square::D4, MoveKind::Jump);
        assert!(jump.is_jump());
        assert!(!jump.is_slide());
        assert_eq!(jump.kind(), MoveKind::Jump);
    }

    #[test]
    fn test_move_endpoints_roundtrip() {
        let step = Move::jump(Square::H2, Square::F4);
        assert_eq!(step.from(), Square::H2);
        assert_eq!(step.to(), Square::F4);
    }

    #[test]
    fn test_victim_square() {
        assert_eq!(
            Move::jump(Square::C3, Square::E5).victim(),
            Some(Square::D4)
        );
        assert_eq!(
            Move::jump(Square::E5, Square::C3).victim(),
            Some(Square::D4)
        );
        assert_eq!(Move::slide(Square::C3, Square::D4).victim(), None);
    }

    #[test]
    fn test_move_parsing() {
        let slide = Move::from_alg("b6-a5").unwrap();
        assert_eq!(slide, Move::slide(Square::B6, Square::A5));

        let jump = Move::from_alg("b6xd4").unwrap();
        assert_eq!(jump, Move::jump(Square::B6, Square::D4));

        // Wrong spacing for the separator
        assert!(Move::from_alg("b6-d4").is_err());
        assert!(Move::from_alg("b6xa5").is_err());
        // Not diagonal
        assert!(Move::from_alg("b6-b5").is_err());
        // Malformed strings
        assert!(Move::from_alg("b6").is_err());
        assert!(Move::from_alg("b6xd4x").is_err());
        assert!(Move::from_alg("z9xd4").is_err());
    }

    #[test]
    fn test_move_display() {
        assert_eq!(Move::slide(Square::C3, Square::D4).to_string(), "c3-d4");
        assert_eq!(Move::jump(Square::C3, Square::E5).to_string(), "c3xe5");

        // Moves compare directly against their notation
        assert_eq!(Move::slide(Square::C3, Square::D4), "c3-d4");
    }
}
