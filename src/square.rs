/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{
    fmt,
    ops::{Index, IndexMut, Mul},
    str::FromStr,
};

use anyhow::{bail, Context, Result};

use crate::Color;

/// Represents a single square on an `8x8` checkers board.
///
/// Internally encoded using the following bit pattern:
/// ```text
///     00 000 000
///      |  |   |
///      |  |   +- Represents the File.
///      |  +- Represents the Rank.
///      +- Unused.
/// ```
///
/// So `square = file + rank * 8`. The indices of each square on the board are given as follows:
/// ```text
/// 8| 56 57 58 59 60 61 62 63
/// 7| 48 49 50 51 52 53 54 55
/// 6| 40 41 42 43 44 45 46 47
/// 5| 32 33 34 35 36 37 38 39
/// 4| 24 25 26 27 28 29 30 31
/// 3| 16 17 18 19 20 21 22 23
/// 2|  8  9 10 11 12 13 14 15
/// 1|  0  1  2  3  4  5  6  7
///  +------------------------
///    a  b  c  d  e  f  g  h
/// ```
///
/// Play takes place entirely on the dark squares, which are those whose file and
/// rank indices sum to an odd number (`b1`, `d1`, `a2`, and so on).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[repr(transparent)]
pub struct Square(pub(crate) u8);

impl Square {
    pub const A1: Self = Self::new(File::A, Rank::ONE);
    pub const A2: Self = Self::new(File::A, Rank::TWO);
    pub const A3: Self = Self::new(File::A, Rank::THREE);
    pub const A4: Self = Self::new(File::A, Rank::FOUR);
    pub const A5: Self = Self::new(File::A, Rank::FIVE);
    pub const A6: Self = Self::new(File::A, Rank::SIX);
    pub const A7: Self = Self::new(File::A, Rank::SEVEN);
    pub const A8: Self = Self::new(File::A, Rank::EIGHT);

    pub const B1: Self = Self::new(File::B, Rank::ONE);
    pub const B2: Self = Self::new(File::B, Rank::TWO);
    pub const B3: Self = Self::new(File::B, Rank::THREE);
    pub const B4: Self = Self::new(File::B, Rank::FOUR);
    pub const B5: Self = Self::new(File::B, Rank::FIVE);
    pub const B6: Self = Self::new(File::B, Rank::SIX);
    pub const B7: Self = Self::new(File::B, Rank::SEVEN);
    pub const B8: Self = Self::new(File::B, Rank::EIGHT);

    pub const C1: Self = Self::new(File::C, Rank::ONE);
    pub const C2: Self = Self::new(File::C, Rank::TWO);
    pub const C3: Self = Self::new(File::C, Rank::THREE);
    pub const C4: Self = Self::new(File::C, Rank::FOUR);
    pub const C5: Self = Self::new(File::C, Rank::FIVE);
    pub const C6: Self = Self::new(File::C, Rank::SIX);
    pub const C7: Self = Self::new(File::C, Rank::SEVEN);
    pub const C8: Self = Self::new(File::C, Rank::EIGHT);

    pub const D1: Self = Self::new(File::D, Rank::ONE);
    pub const D2: Self = Self::new(File::D, Rank::TWO);
    pub const D3: Self = Self::new(File::D, Rank::THREE);
    pub const D4: Self = Self::new(File::D, Rank::FOUR);
    pub const D5: Self = Self::new(File::D, Rank::FIVE);
    pub const D6: Self = Self::new(File::D, Rank::SIX);
    pub const D7: Self = Self::new(File::D, Rank::SEVEN);
    pub const D8: Self = Self::new(File::D, Rank::EIGHT);

    pub const E1: Self = Self::new(File::E, Rank::ONE);
    pub const E2: Self = Self::new(File::E, Rank::TWO);
    pub const E3: Self = Self::new(File::E, Rank::THREE);
    pub const E4: Self = Self::new(File::E, Rank::FOUR);
    pub const E5: Self = Self::new(File::E, Rank::FIVE);
    pub const E6: Self = Self::new(File::E, Rank::SIX);
    pub const E7: Self = Self::new(File::E, Rank::SEVEN);
    pub const E8: Self = Self::new(File::E, Rank::EIGHT);

    pub const F1: Self = Self::new(File::F, Rank::ONE);
    pub const F2: Self = Self::new(File::F, Rank::TWO);
    pub const F3: Self = Self::new(File::F, Rank::THREE);
    pub const F4: Self = Self::new(File::F, Rank::FOUR);
    pub const F5: Self = Self::new(File::F, Rank::FIVE);
    pub const F6: Self = Self::new(File::F, Rank::SIX);
    pub const F7: Self = Self::new(File::F, Rank::SEVEN);
    pub const F8: Self = Self::new(File::F, Rank::EIGHT);

    pub const G1: Self = Self::new(File::G, Rank::ONE);
    pub const G2: Self = Self::new(File::G, Rank::TWO);
    pub const G3: Self = Self::new(File::G, Rank::THREE);
    pub const G4: Self = Self::new(File::G, Rank::FOUR);
    pub const G5: Self = Self::new(File::G, Rank::FIVE);
    pub const G6: Self = Self::new(File::G, Rank::SIX);
    pub const G7: Self = Self::new(File::G, Rank::SEVEN);
    pub const G8: Self = Self::new(File::G, Rank::EIGHT);

    pub const H1: Self = Self::new(File::H, Rank::ONE);
    pub const H2: Self = Self::new(File::H, Rank::TWO);
    pub const H3: Self = Self::new(File::H, Rank::THREE);
    pub const H4: Self = Self::new(File::H, Rank::FOUR);
    pub const H5: Self = Self::new(File::H, Rank::FIVE);
    pub const H6: Self = Self::new(File::H, Rank::SIX);
    pub const H7: Self = Self::new(File::H, Rank::SEVEN);
    pub const H8: Self = Self::new(File::H, Rank::EIGHT);

    pub const MIN: u8 = 0;
    pub const MAX: u8 = 63;
    pub const COUNT: usize = 64;

    const FILE_MASK: u8 = 0b0000_0111;

    /// Returns an iterator over all available squares.
    ///
    /// # Example
    /// ```
    /// # use draughts::Square;
    /// let mut iter = Square::iter();
    /// assert_eq!(iter.len(), 64);
    /// assert_eq!(iter.next().unwrap(), Square::A1);
    /// assert_eq!(iter.last().unwrap(), Square::H8);
    /// ```
    #[inline(always)]
    pub fn iter() -> impl ExactSizeIterator<Item = Self> + DoubleEndedIterator<Item = Self> {
        (Self::MIN..=Self::MAX).map(Self)
    }

    /// Creates a new [`Square`] from the provided [`File`] and [`Rank`].
    ///
    /// # Example
    /// ```
    /// # use draughts::{Square, File, Rank};
    /// let c4 = Square::new(File::C, Rank::FOUR);
    /// assert_eq!(c4, Square::C4);
    /// ```
    #[inline(always)]
    pub const fn new(file: File, rank: Rank) -> Self {
        // least-significant file mapping
        Self(file.0 ^ rank.0 << 3)
    }

    /// Creates a new [`Square`] from the provided index value.
    ///
    /// The provided `index` must be `[0, 63]` or else an error is returned.
    ///
    /// # Example
    /// ```
    /// # use draughts::Square;
    /// let c4 = Square::from_index(26);
    /// assert!(c4.is_ok());
    /// assert_eq!(c4.unwrap(), Square::C4);
    /// ```
    #[inline(always)]
    pub fn from_index(index: usize) -> Result<Self> {
        Self::from_bits(index as u8)
    }

    /// Creates a new [`Square`] from the provided index value, without error checking.
    ///
    /// # Panics
    ///
    /// If `index` is greater than `63` and debug assertions are enabled.
    ///
    /// # Example
    /// ```
    /// # use draughts::Square;
    /// let c4 = Square::from_index_unchecked(26);
    /// assert_eq!(c4, Square::C4);
    /// ```
    #[inline(always)]
    pub const fn from_index_unchecked(index: usize) -> Self {
        debug_assert!(index < 64, "Index must be between [0,64)");
        Self(index as u8)
    }

    /// Creates a new [`Square`] from the provided `u8` value.
    ///
    /// The provided `bits` must be `[0, 63]` or else an error is returned.
    ///
    /// # Example
    /// ```
    /// # use draughts::Square;
    /// let c4 = Square::from_bits(26);
    /// assert!(c4.is_ok());
    /// assert_eq!(c4.unwrap(), Square::C4);
    ///
    /// assert!(Square::from_bits(64).is_err());
    /// ```
    #[inline(always)]
    pub fn from_bits(bits: u8) -> Result<Self> {
        if bits > Self::MAX {
            bail!(
                "Invalid bits for Square: Must be between [{}, {}]. Got {bits}",
                Self::MIN,
                Self::MAX
            );
        }
        Ok(Self(bits))
    }

    /// Creates a new [`Square`] from the provided `u8` value, without error checking.
    ///
    /// # Example
    /// ```
    /// # use draughts::Square;
    /// let c4 = Square::from_bits_unchecked(26);
    /// assert_eq!(c4, Square::C4);
    /// ```
    #[inline(always)]
    pub const fn from_bits_unchecked(bits: u8) -> Self {
        Self(bits)
    }

    /// Fetches the inner index value of the [`Square`], which is represented as a [`u8`].
    ///
    /// # Example
    /// ```
    /// # use draughts::Square;
    /// assert_eq!(Square::C4.inner(), 26);
    /// ```
    #[inline(always)]
    pub const fn inner(&self) -> u8 {
        self.0
    }

    /// Fetches the [`File`] of this [`Square`].
    ///
    /// # Example
    /// ```
    /// # use draughts::{Square, File};
    /// assert_eq!(Square::C4.file(), File::C);
    /// ```
    #[inline(always)]
    pub const fn file(&self) -> File {
        File(self.0 & Self::FILE_MASK) // Same as % 8
    }

    /// Fetches the [`Rank`] of this [`Square`].
    ///
    /// # Example
    /// ```
    /// # use draughts::{Square, Rank};
    /// assert_eq!(Square::C4.rank(), Rank::FOUR);
    /// ```
    #[inline(always)]
    pub const fn rank(&self) -> Rank {
        Rank(self.0 >> 3) // Same as / 8
    }

    /// Fetches the [`File`] and [`Rank`] of this [`Square`].
    ///
    /// # Example
    /// ```
    /// # use draughts::{Square, File, Rank};
    /// assert_eq!(Square::C4.parts(), (File::C, Rank::FOUR));
    /// ```
    #[inline(always)]
    pub const fn parts(&self) -> (File, Rank) {
        (self.file(), self.rank())
    }

    /// Fetches the inner index value of the [`Square`], casted to a [`usize`].
    ///
    /// Useful when using a [`Square`] to index into things.
    ///
    /// # Example
    /// ```
    /// # use draughts::Square;
    /// assert_eq!(Square::C4.index(), 26);
    /// ```
    #[inline(always)]
    pub const fn index(&self) -> usize {
        self.inner() as usize
    }

    /// Returns `true` if this [`Square`] is a dark square.
    ///
    /// The dark squares are the 32 squares checkers is played on.
    /// A square is dark if its file and rank indices sum to an odd number.
    ///
    /// # Example
    /// ```
    /// # use draughts::Square;
    /// assert!(Square::B1.is_dark());
    /// assert!(Square::A2.is_dark());
    /// assert!(!Square::A1.is_dark());
    /// ```
    #[inline(always)]
    pub const fn is_dark(&self) -> bool {
        (self.file().0 + self.rank().0) % 2 == 1
    }

    /// Returns `true` if this [`Square`] is a light square.
    ///
    /// Pieces never occupy light squares.
    ///
    /// # Example
    /// ```
    /// # use draughts::Square;
    /// assert!(Square::A1.is_light());
    /// assert!(Square::H8.is_light());
    /// ```
    #[inline(always)]
    pub const fn is_light(&self) -> bool {
        !self.is_dark()
    }

    /// Returns the number of files away `self` is from `other`.
    ///
    /// # Example
    /// ```
    /// # use draughts::Square;
    /// assert_eq!(Square::C5.distance_files(Square::C2), 0);
    /// assert_eq!(Square::C5.distance_files(Square::B2), 1);
    /// assert_eq!(Square::A1.distance_files(Square::H1), 7);
    /// ```
    #[inline(always)]
    pub const fn distance_files(&self, other: Self) -> u8 {
        self.file().0.abs_diff(other.file().0)
    }

    /// Returns the number of ranks away `self` is from `other`.
    ///
    /// # Example
    /// ```
    /// # use draughts::Square;
    /// assert_eq!(Square::C5.distance_ranks(Square::B5), 0);
    /// assert_eq!(Square::C5.distance_ranks(Square::C4), 1);
    /// assert_eq!(Square::A1.distance_ranks(Square::A8), 7);
    /// ```
    #[inline(always)]
    pub const fn distance_ranks(&self, other: Self) -> u8 {
        self.rank().0.abs_diff(other.rank().0)
    }

    /// Returns the [`Square`] halfway between `self` and `other`, computed
    /// component-wise on files and ranks.
    ///
    /// For the two endpoints of a jump, this is the square being jumped over.
    /// Both distances must be even for the midpoint to land on a square;
    /// jump endpoints are always exactly two files and two ranks apart.
    ///
    /// # Example
    /// ```
    /// # use draughts::Square;
    /// assert_eq!(Square::E4.midpoint(Square::G6), Square::F5);
    /// assert_eq!(Square::C3.midpoint(Square::A5), Square::B4);
    /// ```
    #[inline(always)]
    pub const fn midpoint(&self, other: Self) -> Self {
        let file = (self.file().0 + other.file().0) / 2;
        let rank = (self.rank().0 + other.rank().0) / 2;
        Self::new(File(file), Rank(rank))
    }

    /// Attempt to offset this [`Square`] by the file and rank offsets.
    ///
    /// If `self + offset` would exceed the bounds of the board, then `None` is returned.
    ///
    /// # Example
    /// ```
    /// # use draughts::Square;
    /// assert_eq!(Square::C4.offset(1, 1), Some(Square::D5));
    /// assert_eq!(Square::C4.offset(-1, -1), Some(Square::B3));
    /// assert_eq!(Square::A1.offset(-1, -1), None);
    /// ```
    #[inline(always)]
    pub const fn offset(&self, file_delta: i8, rank_delta: i8) -> Option<Self> {
        let Some(file) = self.file().offset(file_delta) else {
            return None;
        };

        let Some(rank) = self.rank().offset(rank_delta) else {
            return None;
        };

        Some(Self::new(file, rank))
    }

    /// Increments (if `color` is [`Color::Red`]) or decrements (if `color` is [`Color::Black`]) the [`Rank`] of this [`Square`] by `n`, if possible.
    ///
    /// Returns [`None`] if it is already at the edge of the board.
    ///
    /// # Example
    /// ```
    /// # use draughts::{Square, Color};
    /// assert_eq!(Square::C4.forward_by(Color::Red, 1), Some(Square::C5));
    /// assert_eq!(Square::C4.forward_by(Color::Black, 1), Some(Square::C3));
    /// ```
    #[inline(always)]
    pub const fn forward_by(&self, color: Color, n: u8) -> Option<Self> {
        self.offset(0, n as i8 * color.forward_delta())
    }

    /// Creates a [`Square`] from a string in algebraic notation, e.g. `"b6"`.
    ///
    /// # Example
    /// ```
    /// # use draughts::Square;
    /// let c4 = Square::from_alg("c4");
    /// assert!(c4.is_ok());
    /// assert_eq!(c4.unwrap(), Square::C4);
    ///
    /// let err = Square::from_alg("z0");
    /// assert!(err.is_err());
    /// ```
    #[inline(always)]
    pub fn from_alg(square: &str) -> Result<Self> {
        let bytes = square.as_bytes();
        if square.len() != 2 {
            bail!("Invalid Square string: String must contain exactly 2 characters. Got {square}")
        }
        let file = File::from_char(bytes[0] as char)?;
        let rank = Rank::from_char(bytes[1] as char)?;

        Ok(Self::new(file, rank))
    }

    /// Converts this [`Square`] to a string in algebraic notation, e.g. `"b6"`.
    ///
    /// # Example
    /// ```
    /// # use draughts::Square;
    /// assert_eq!("c4", Square::C4.to_alg());
    /// ```
    #[inline(always)]
    pub fn to_alg(self) -> String {
        format!("{}{}", self.file(), self.rank())
    }
}

impl FromStr for Square {
    type Err = anyhow::Error;
    /// Wrapper for [`Square::from_alg`].
    #[inline(always)]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_alg(s)
    }
}

impl TryFrom<&str> for Square {
    type Error = anyhow::Error;
    /// Wrapper for [`Square::from_alg`].
    #[inline(always)]
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::from_alg(value)
    }
}

impl TryFrom<String> for Square {
    type Error = anyhow::Error;
    /// Wrapper for [`Square::from_alg`].
    #[inline(always)]
    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_alg(&value)
    }
}

impl TryFrom<usize> for Square {
    type Error = anyhow::Error;
    /// Wrapper for [`Square::from_index`].
    #[inline(always)]
    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::from_index(value)
    }
}

impl TryFrom<u8> for Square {
    type Error = anyhow::Error;
    /// Wrapper for [`Square::from_bits`].
    #[inline(always)]
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_bits(value)
    }
}

impl<T> Index<Square> for [T; Square::COUNT] {
    type Output = T;
    /// A [`Square`] can be used to index into an array of 64 elements.
    #[inline(always)]
    fn index(&self, index: Square) -> &Self::Output {
        &self[index.index()]
    }
}

impl<T> IndexMut<Square> for [T; Square::COUNT] {
    /// A [`Square`] can be used to mutably index into an array of 64 elements.
    #[inline(always)]
    fn index_mut(&mut self, index: Square) -> &mut Self::Output {
        &mut self[index.index()]
    }
}

impl fmt::Display for Square {
    /// Calls [`Square::to_alg`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.to_alg().fmt(f)
    }
}

impl fmt::Debug for Square {
    /// Calls [`Square::to_alg`] and also displays the internal decimal value.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.to_alg(), self.0)
    }
}

/// Represents one of eight ranks on a checkers board.
///
/// Rank 1 is Red's home side. Rank 8 is Black's.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct Rank(pub(crate) u8);

impl Rank {
    pub const ONE: Self = Self(0);
    pub const TWO: Self = Self(1);
    pub const THREE: Self = Self(2);
    pub const FOUR: Self = Self(3);
    pub const FIVE: Self = Self(4);
    pub const SIX: Self = Self(5);
    pub const SEVEN: Self = Self(6);
    pub const EIGHT: Self = Self(7);

    pub const MIN: u8 = 0;
    pub const MAX: u8 = 7;
    pub const COUNT: usize = 8;

    /// An array of all [`Rank`]s, in ascending order.
    pub fn all() -> [Self; Self::COUNT] {
        [
            Self::ONE,
            Self::TWO,
            Self::THREE,
            Self::FOUR,
            Self::FIVE,
            Self::SIX,
            Self::SEVEN,
            Self::EIGHT,
        ]
    }

    /// Returns an iterator over all available ranks.
    ///
    /// # Example
    /// ```
    /// # use draughts::Rank;
    /// let mut iter = Rank::iter();
    /// assert_eq!(iter.len(), 8);
    /// assert_eq!(iter.next().unwrap(), Rank::ONE);
    /// assert_eq!(iter.last().unwrap(), Rank::EIGHT);
    /// ```
    #[inline(always)]
    pub fn iter() -> impl ExactSizeIterator<Item = Self> + DoubleEndedIterator<Item = Self> {
        Self::all().into_iter()
    }

    /// Construct a new [`Rank`] from the provided value.
    #[inline(always)]
    pub fn new(rank: u8) -> Result<Self> {
        if rank > Self::MAX {
            bail!(
                "Invalid int for Rank: Must be between [{}, {}]. Got {rank}",
                Self::MIN,
                Self::MAX
            );
        }

        Ok(Self::new_unchecked(rank))
    }

    /// Construct a new [`Rank`] from the provided value, ignoring safety checks.
    ///
    /// Do not use this unless you have previously guaranteed that the input value is within bounds.
    #[inline(always)]
    pub const fn new_unchecked(rank: u8) -> Self {
        Self(rank)
    }

    /// The rank on which a man of `color` is crowned a king.
    ///
    /// This is the rank farthest from that color's home side.
    ///
    /// # Example
    /// ```
    /// # use draughts::{Color, Rank};
    /// assert_eq!(Rank::king_row(Color::Red), Rank::EIGHT);
    /// assert_eq!(Rank::king_row(Color::Black), Rank::ONE);
    /// ```
    #[inline(always)]
    pub const fn king_row(color: Color) -> Self {
        [Self::EIGHT, Self::ONE][color.index()]
    }

    #[inline(always)]
    pub fn from_char(rank: char) -> Result<Self> {
        debug_assert!(rank.is_ascii(), "Rank chars must be ASCII!");

        let rank_int = rank.to_digit(10).context(format!(
            "Invalid char for Rank: Must be between [1, 8]. Got {rank}"
        ))?;

        let rank = rank_int.checked_sub(1).context(format!(
            "Invalid char for Rank: Must be between [1, 8]. Got {rank}"
        ))?;

        Self::new(rank as u8)
    }

    #[inline(always)]
    pub const fn inner(&self) -> u8 {
        self.0
    }

    /// Obtain the inner value as a `usize`.
    ///
    /// Useful for indexing.
    #[inline(always)]
    pub const fn index(&self) -> usize {
        self.inner() as usize
    }

    #[inline(always)]
    pub const fn char(&self) -> char {
        (self.0 + b'1') as char
    }

    #[inline(always)]
    pub const fn as_str(&self) -> &'static str {
        match self.0 {
            0 => "1",
            1 => "2",
            2 => "3",
            3 => "4",
            4 => "5",
            5 => "6",
            6 => "7",
            7 => "8",
            _ => unreachable!(),
        }
    }

    /// `const` analog of `==`.
    #[inline(always)]
    pub const fn is(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    /// Attempt to offset this [`Rank`] by the provided `delta`.
    ///
    /// If `self + delta` would exceed the bounds of this [`Rank`], then `None` is returned.
    ///
    /// # Example
    /// ```
    /// # use draughts::Rank;
    /// assert_eq!(Rank::FOUR.offset(1), Some(Rank::FIVE));
    /// assert_eq!(Rank::FOUR.offset(-1), Some(Rank::THREE));
    /// assert_eq!(Rank::ONE.offset(-1), None);
    /// ```
    #[inline(always)]
    pub const fn offset(self, delta: i8) -> Option<Self> {
        if let Some(bits) = self.0.checked_add_signed(delta) {
            return if bits <= Self::MAX {
                Some(Self::new_unchecked(bits))
            } else {
                None
            };
        }

        None
    }

    /// Computes the absolute difference between `self` and `other`.
    ///
    /// # Example
    /// ```
    /// # use draughts::Rank;
    /// assert_eq!(Rank::SEVEN.abs_diff(Rank::FIVE), 2);
    /// ```
    #[inline(always)]
    pub const fn abs_diff(&self, other: Self) -> u8 {
        self.0.abs_diff(other.0)
    }
}

impl TryFrom<char> for Rank {
    type Error = anyhow::Error;
    #[inline(always)]
    fn try_from(value: char) -> Result<Self, Self::Error> {
        Self::from_char(value)
    }
}

impl TryFrom<u8> for Rank {
    type Error = anyhow::Error;
    #[inline(always)]
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Square> for Rank {
    #[inline(always)]
    fn from(value: Square) -> Self {
        value.rank()
    }
}

impl Mul<File> for Rank {
    type Output = Square;
    #[inline(always)]
    fn mul(self, file: File) -> Self::Output {
        Square::new(file, self)
    }
}

impl AsRef<str> for Rank {
    #[inline(always)]
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.char().fmt(f)
    }
}

impl fmt::Debug for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.char(), self.0)
    }
}

/// Represents one of eight files on a checkers board.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct File(pub(crate) u8);

impl File {
    pub const A: Self = Self(0);
    pub const B: Self = Self(1);
    pub const C: Self = Self(2);
    pub const D: Self = Self(3);
    pub const E: Self = Self(4);
    pub const F: Self = Self(5);
    pub const G: Self = Self(6);
    pub const H: Self = Self(7);

    pub const MIN: u8 = 0;
    pub const MAX: u8 = 7;
    pub const COUNT: usize = 8;

    /// An array of all [`File`]s, in ascending order.
    #[inline(always)]
    pub fn all() -> [Self; Self::COUNT] {
        [
            Self::A,
            Self::B,
            Self::C,
            Self::D,
            Self::E,
            Self::F,
            Self::G,
            Self::H,
        ]
    }

    /// Returns an iterator over all available files.
    ///
    /// # Example
    /// ```
    /// # use draughts::File;
    /// let mut iter = File::iter();
    /// assert_eq!(iter.len(), 8);
    /// assert_eq!(iter.next().unwrap(), File::A);
    /// assert_eq!(iter.last().unwrap(), File::H);
    /// ```
    #[inline(always)]
    pub fn iter() -> impl ExactSizeIterator<Item = Self> + DoubleEndedIterator<Item = Self> {
        Self::all().into_iter()
    }

    #[inline(always)]
    pub fn new(file: u8) -> Result<Self> {
        if file > Self::MAX {
            bail!(
                "Invalid int for File: Must be between [{}, {}]. Got {file}",
                Self::MIN,
                Self::MAX
            );
        }
        Ok(Self::new_unchecked(file))
    }

    #[inline(always)]
    pub const fn new_unchecked(file: u8) -> Self {
        Self(file)
    }

    #[inline(always)]
    pub fn from_char(file: char) -> Result<Self> {
        if !file.is_ascii_alphabetic() {
            bail!(
                "Invalid char for File: Must be between [{}, {}]. Got {file}",
                'a',
                'h'
            );
        }

        // Subtract the ASCII value for `a` (or `A`) to zero the number
        let file_int = file as u8 - if file.is_ascii_lowercase() { 'a' } else { 'A' } as u8;

        if file_int > Self::MAX {
            bail!(
                "Invalid char for File: Must be between [{}, {}]. Got {file}",
                'a',
                'h'
            );
        }

        Self::new(file_int)
    }

    /// `const` analog of `==`.
    #[inline(always)]
    pub const fn is(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    #[inline(always)]
    pub const fn inner(&self) -> u8 {
        self.0
    }

    /// Obtain the inner value as a `usize`.
    ///
    /// Useful for indexing.
    #[inline(always)]
    pub const fn index(&self) -> usize {
        self.inner() as usize
    }

    #[inline(always)]
    pub const fn char(&self) -> char {
        (self.0 + b'a') as char
    }

    #[inline(always)]
    pub const fn as_str(&self) -> &'static str {
        match self.0 {
            0 => "a",
            1 => "b",
            2 => "c",
            3 => "d",
            4 => "e",
            5 => "f",
            6 => "g",
            7 => "h",
            _ => unreachable!(),
        }
    }

    /// Attempt to offset this [`File`] by the provided `delta`.
    ///
    /// If `self + delta` would exceed the bounds of this [`File`], then `None` is returned.
    ///
    /// # Example
    /// ```
    /// # use draughts::File;
    /// assert_eq!(File::C.offset(1), Some(File::D));
    /// assert_eq!(File::C.offset(-1), Some(File::B));
    /// assert_eq!(File::A.offset(-1), None);
    /// ```
    #[inline(always)]
    pub const fn offset(self, delta: i8) -> Option<Self> {
        if let Some(bits) = self.0.checked_add_signed(delta) {
            return if bits <= Self::MAX {
                Some(Self::new_unchecked(bits))
            } else {
                None
            };
        }

        None
    }

    /// Computes the absolute difference between `self` and `other`.
    ///
    /// # Example
    /// ```
    /// # use draughts::File;
    /// assert_eq!(File::B.abs_diff(File::H), 6);
    /// ```
    #[inline(always)]
    pub const fn abs_diff(&self, other: Self) -> u8 {
        self.0.abs_diff(other.0)
    }
}

impl TryFrom<char> for File {
    type Error = anyhow::Error;
    #[inline(always)]
    fn try_from(value: char) -> Result<Self, Self::Error> {
        Self::from_char(value)
    }
}

impl TryFrom<u8> for File {
    type Error = anyhow::Error;
    #[inline(always)]
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Square> for File {
    #[inline(always)]
    fn from(value: Square) -> Self {
        value.file()
    }
}

impl Mul<Rank> for File {
    type Output = Square;
    #[inline(always)]
    fn mul(self, rank: Rank) -> Self::Output {
        Square::new(self, rank)
    }
}

impl AsRef<str> for File {
    #[inline(always)]
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.char().fmt(f)
    }
}

impl fmt::Debug for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.char(), self.0)
    }
}
