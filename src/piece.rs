/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{
    fmt,
    ops::{Index, IndexMut, Neg},
    str::FromStr,
};

use anyhow::{bail, Result};

/// Represents the color of a player or piece on a checkers board.
///
/// Red sits on ranks 1-3 and moves up the board. Red traditionally moves first,
/// and therefore [`Color`] defaults to [`Color::Red`].
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Color {
    #[default]
    Red,
    Black,
}

impl Color {
    /// Number of color variants.
    pub const COUNT: usize = 2;

    /// An array of both colors, starting with Red.
    #[inline(always)]
    pub const fn all() -> [Self; Self::COUNT] {
        [Self::Red, Self::Black]
    }

    /// Creates a new [`Color`] from a set of bits.
    ///
    /// `bits` must be `[0,1]`.
    ///
    /// # Example
    /// ```
    /// # use draughts::Color;
    /// let red = Color::from_bits(0);
    /// assert!(red.is_ok());
    /// assert_eq!(red.unwrap(), Color::Red);
    ///
    /// let err = Color::from_bits(42);
    /// assert!(err.is_err());
    /// ```
    #[inline(always)]
    pub fn from_bits(bits: u8) -> Result<Self> {
        match bits {
            0 => Ok(Self::Red),
            1 => Ok(Self::Black),
            _ => bail!("Invalid bits for Color: Bits must be between [0,1]. Got {bits}."),
        }
    }

    /// Creates a new [`Color`] from a set of bits, ignoring safety checks.
    ///
    /// `bits` must be `[0,1]`.
    ///
    /// # Panics
    /// If `bits` is greater than `1` and debug assertions are enabled.
    ///
    /// # Example
    /// ```
    /// # use draughts::Color;
    /// let black = Color::from_bits_unchecked(1);
    /// assert_eq!(black, Color::Black);
    /// ```
    #[inline(always)]
    pub const fn from_bits_unchecked(bits: u8) -> Self {
        debug_assert!(
            bits <= 1,
            "Invalid bits for Color: Bits must be between [0,1]"
        );

        // Safety: Since `Color` is a `repr(u8)` enum, we can cast safely here.
        unsafe { std::mem::transmute(bits) }
    }

    /// Returns `true` if this [`Color`] is Red.
    #[inline(always)]
    pub const fn is_red(&self) -> bool {
        *self as u8 & 1 == 0
    }

    /// Returns `true` if this [`Color`] is Black.
    #[inline(always)]
    pub const fn is_black(&self) -> bool {
        *self as u8 & 1 != 0
    }

    /// Returns the rank delta of a single forward step for this color.
    ///
    /// Red men march up the board, Black men march down it.
    ///
    /// # Example
    /// ```
    /// # use draughts::Color;
    /// assert_eq!(Color::Red.forward_delta(), 1);
    /// assert_eq!(Color::Black.forward_delta(), -1);
    /// ```
    #[inline(always)]
    pub const fn forward_delta(&self) -> i8 {
        match self {
            Self::Red => 1,
            Self::Black => -1,
        }
    }

    /// Returns this [`Color`]'s opposite / inverse / enemy.
    ///
    /// # Example
    /// ```
    /// # use draughts::Color;
    /// assert_eq!(Color::Red.opponent(), Color::Black);
    /// assert_eq!(Color::Black.opponent(), Color::Red);
    /// ```
    #[inline(always)]
    pub const fn opponent(&self) -> Self {
        Self::from_bits_unchecked(self.bits() ^ 1)
    }

    /// Returns this [`Color`] as a `usize`.
    ///
    /// Will be `0` for Red, `1` for Black.
    ///
    /// Useful for indexing into lists.
    ///
    /// # Example
    /// ```
    /// # use draughts::Color;
    /// assert_eq!(Color::Red.index(), 0);
    /// assert_eq!(Color::Black.index(), 1);
    /// ```
    #[inline(always)]
    pub const fn index(&self) -> usize {
        *self as usize
    }

    /// Returns this [`Color`] as a `u8`.
    ///
    /// Will be `0` for Red, `1` for Black.
    ///
    /// Useful for bit twiddling.
    ///
    /// # Example
    /// ```
    /// # use draughts::Color;
    /// assert_eq!(Color::Red.bits(), 0);
    /// assert_eq!(Color::Black.bits(), 1);
    /// ```
    #[inline(always)]
    pub const fn bits(&self) -> u8 {
        *self as u8
    }

    /// Creates a [`Color`] from a `char`.
    ///
    /// # Example
    /// ```
    /// # use draughts::Color;
    /// let red = Color::from_char('r');
    /// assert!(red.is_ok());
    /// assert_eq!(red.unwrap(), Color::Red);
    ///
    /// let err = Color::from_char('x');
    /// assert!(err.is_err());
    /// ```
    #[inline(always)]
    pub fn from_char(color: char) -> Result<Self> {
        match color {
            'r' | 'R' => Ok(Self::Red),
            'b' | 'B' => Ok(Self::Black),
            _ => bail!("Color must be either 'r' or 'b' (case-insensitive). Found {color}"),
        }
    }

    /// Converts this [`Color`] to a char.
    ///
    /// # Example
    /// ```
    /// # use draughts::Color;
    /// assert_eq!(Color::Red.char(), 'r');
    /// ```
    #[inline(always)]
    pub const fn char(&self) -> char {
        match self {
            Self::Red => 'r',
            Self::Black => 'b',
        }
    }

    /// Converts this [`Color`] to a `str`.
    ///
    /// # Example
    /// ```
    /// # use draughts::Color;
    /// assert_eq!(Color::Red.as_str(), "r");
    /// ```
    #[inline(always)]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Red => "r",
            Self::Black => "b",
        }
    }

    /// Fetches a human-readable name for this [`Color`].
    ///
    /// # Example
    /// ```
    /// # use draughts::Color;
    /// let red = Color::Red;
    /// assert_eq!(red.name(), "red");
    /// ```
    #[inline(always)]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Black => "black",
        }
    }
}

impl Neg for Color {
    type Output = Self;
    /// Negating [`Color::Red`] yields [`Color::Black`] and vice versa.
    #[inline(always)]
    fn neg(self) -> Self::Output {
        self.opponent()
    }
}

/// Represents the kind (or "rank on the battlefield") of a checkers piece.
///
/// These have no [`Color`] associated with them. See [`Piece`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum PieceKind {
    /// An uncrowned piece. Men slide and jump diagonally forward only.
    Man,

    /// A crowned piece. Kings slide and jump diagonally in all four directions.
    King,
}

impl PieceKind {
    /// Number of piece kind variants.
    pub const COUNT: usize = 2;

    /// An array of both [`PieceKind`]s, starting with Man.
    #[inline(always)]
    pub const fn all() -> [Self; Self::COUNT] {
        [Self::Man, Self::King]
    }

    /// Creates a new [`PieceKind`] from a set of bits.
    ///
    /// `bits` must be `[0,1]`.
    ///
    /// # Example
    /// ```
    /// # use draughts::PieceKind;
    /// let king = PieceKind::from_bits(1);
    /// assert!(king.is_ok());
    /// assert_eq!(king.unwrap(), PieceKind::King);
    ///
    /// let err = PieceKind::from_bits(42);
    /// assert!(err.is_err());
    /// ```
    #[inline(always)]
    pub fn from_bits(bits: u8) -> Result<Self> {
        match bits {
            0 => Ok(Self::Man),
            1 => Ok(Self::King),
            _ => bail!("Invalid bits for PieceKind: Bits must be between [0,1]. Got {bits}."),
        }
    }

    /// Creates a new [`PieceKind`] from a set of bits, ignoring safety checks.
    ///
    /// `bits` must be `[0,1]`.
    ///
    /// # Panics
    /// If `bits` is greater than `1` when debug assertions are enabled.
    ///
    /// # Example
    /// ```
    /// # use draughts::PieceKind;
    /// let king = PieceKind::from_bits_unchecked(1);
    /// assert_eq!(king, PieceKind::King);
    /// ```
    #[inline(always)]
    pub const fn from_bits_unchecked(bits: u8) -> Self {
        debug_assert!(
            bits <= 1,
            "Invalid bits for PieceKind: Bits must be between [0,1]"
        );

        // Safety: Since `PieceKind` is a `repr(u8)` enum, we can cast safely here.
        unsafe { std::mem::transmute(bits) }
    }

    /// Fetches the internal bit value of this [`PieceKind`].
    ///
    /// Will always be `[0,1]`.
    ///
    /// # Example
    /// ```
    /// # use draughts::PieceKind;
    /// assert_eq!(PieceKind::Man.bits(), 0);
    /// assert_eq!(PieceKind::King.bits(), 1);
    /// ```
    #[inline(always)]
    pub const fn bits(&self) -> u8 {
        *self as u8
    }

    /// Returns this [`PieceKind`] as a `usize`.
    ///
    /// Useful for indexing into lists.
    ///
    /// # Example
    /// ```
    /// # use draughts::PieceKind;
    /// assert_eq!(PieceKind::King.index(), 1);
    /// ```
    #[inline(always)]
    pub const fn index(&self) -> usize {
        *self as usize
    }

    /// Creates a new [`PieceKind`] from a character.
    ///
    /// Will return a [`anyhow::Error`] if `kind` is not a valid character.
    ///
    /// # Example
    /// ```
    /// # use draughts::PieceKind;
    /// let king = PieceKind::from_char('k');
    /// assert!(king.is_ok());
    /// assert_eq!(king.unwrap(), PieceKind::King);
    /// ```
    #[inline(always)]
    pub fn from_char(kind: char) -> Result<Self> {
        match kind {
            'M' | 'm' => Ok(Self::Man),
            'K' | 'k' => Ok(Self::King),
            _ => bail!("Invalid char for PieceKind: Got {kind}."),
        }
    }

    /// Fetches a human-readable name for this [`PieceKind`].
    ///
    /// # Example
    /// ```
    /// # use draughts::PieceKind;
    /// let king = PieceKind::King;
    /// assert_eq!(king.name(), "king");
    /// ```
    #[inline(always)]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Man => "man",
            Self::King => "king",
        }
    }

    /// Converts this [`PieceKind`] to a character.
    ///
    /// Will always be a lowercase letter.
    ///
    /// # Example
    /// ```
    /// # use draughts::PieceKind;
    /// let king = PieceKind::King;
    /// assert_eq!(king.char(), 'k');
    /// ```
    #[inline(always)]
    pub const fn char(&self) -> char {
        match self {
            Self::Man => 'm',
            Self::King => 'k',
        }
    }

    /// Converts this [`PieceKind`] to a `str`.
    ///
    /// Will always be a lowercase letter.
    ///
    /// # Example
    /// ```
    /// # use draughts::PieceKind;
    /// let man = PieceKind::Man;
    /// assert_eq!(man.as_str(), "m");
    /// ```
    #[inline(always)]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Man => "m",
            Self::King => "k",
        }
    }
}

/// Represents a piece on a checkers board.
///
/// Internally, this is represented as a `u8` with the following bit pattern:
///
/// ```text
///     000000 0 0
///        |   | |
///        |   | +- Represents the PieceKind. `0` for Man, `1` for King.
///        |   +- Represents the Color. `0` for Red, `1` for Black.
///        +- Unused.
/// ```
///
/// A [`Piece`] is a plain value. It records no position of its own;
/// where a piece stands is known only to the board holding it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Piece(u8);

impl Piece {
    pub const RED_MAN: Self = Self::new(Color::Red, PieceKind::Man);
    pub const RED_KING: Self = Self::new(Color::Red, PieceKind::King);
    pub const BLACK_MAN: Self = Self::new(Color::Black, PieceKind::Man);
    pub const BLACK_KING: Self = Self::new(Color::Black, PieceKind::King);

    /// Number of unique piece variants.
    pub const COUNT: usize = Color::COUNT * PieceKind::COUNT;

    /// Mask for the color bit.
    const COLOR_MASK: u8 = 0b0000_0010;
    /// Start index of the color bit.
    const COLOR_BITS: u8 = 1;

    /// An array of all 4 [`Piece`]s, starting with Red Man.
    #[inline(always)]
    pub const fn all() -> [Self; Self::COUNT] {
        [
            Self::RED_MAN,
            Self::RED_KING,
            Self::BLACK_MAN,
            Self::BLACK_KING,
        ]
    }

    /// Creates a new [`Piece`] from the given [`Color`] and [`PieceKind`].
    ///
    /// # Example
    /// ```
    /// # use draughts::{Piece, Color, PieceKind};
    /// let red_man = Piece::new(Color::Red, PieceKind::Man);
    /// assert_eq!(red_man.to_string(), "r");
    /// ```
    #[inline(always)]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        // 0000 000x => red
        // 0000 001x => black
        Self(color.bits() << Self::COLOR_BITS | kind.bits())
    }

    /// Fetches the [`Color`] of this [`Piece`].
    ///
    /// # Example
    /// ```
    /// # use draughts::{Piece, Color};
    /// assert_eq!(Piece::RED_MAN.color(), Color::Red);
    /// assert_eq!(Piece::BLACK_KING.color(), Color::Black);
    /// ```
    #[inline(always)]
    pub const fn color(&self) -> Color {
        Color::from_bits_unchecked(self.0 >> Self::COLOR_BITS)
    }

    /// Returns `true` if this [`Piece`]'s [`Color`] is Red.
    ///
    /// # Example
    /// ```
    /// # use draughts::Piece;
    /// assert!(Piece::RED_KING.is_red());
    /// assert!(!Piece::BLACK_KING.is_red());
    /// ```
    #[inline(always)]
    pub const fn is_red(&self) -> bool {
        self.0 >> Self::COLOR_BITS == 0
    }

    /// Returns `true` if this [`Piece`]'s [`Color`] is Black.
    ///
    /// # Example
    /// ```
    /// # use draughts::Piece;
    /// assert!(Piece::BLACK_MAN.is_black());
    /// assert!(!Piece::RED_MAN.is_black());
    /// ```
    #[inline(always)]
    pub const fn is_black(&self) -> bool {
        self.0 >> Self::COLOR_BITS != 0
    }

    /// Fetches the [`PieceKind`] of this [`Piece`].
    ///
    /// # Example
    /// ```
    /// # use draughts::{Piece, PieceKind};
    /// assert_eq!(Piece::RED_MAN.kind(), PieceKind::Man);
    /// assert_eq!(Piece::RED_KING.kind(), PieceKind::King);
    /// ```
    #[inline(always)]
    pub const fn kind(&self) -> PieceKind {
        // Clear the color bit
        PieceKind::from_bits_unchecked(self.0 & !Self::COLOR_MASK)
    }

    /// Returns `true` if this [`Piece`] is a Man.
    #[inline(always)]
    pub const fn is_man(&self) -> bool {
        matches!(self.kind(), PieceKind::Man)
    }

    /// Returns `true` if this [`Piece`] is a King.
    #[inline(always)]
    pub const fn is_king(&self) -> bool {
        matches!(self.kind(), PieceKind::King)
    }

    /// Fetches the [`Color`] and [`PieceKind`] of this [`Piece`].
    #[inline(always)]
    pub const fn parts(&self) -> (Color, PieceKind) {
        (self.color(), self.kind())
    }

    /// Returns the index value of this [`Piece`], as a `usize`.
    ///
    /// Useful for indexing into lists of size 4.
    ///
    /// # Example
    /// ```
    /// # use draughts::Piece;
    /// assert_eq!(Piece::RED_MAN.index(), 0);
    /// assert_eq!(Piece::BLACK_KING.index(), 3);
    /// ```
    #[inline(always)]
    pub const fn index(&self) -> usize {
        let offset = if self.is_red() {
            0
        } else {
            PieceKind::COUNT
        };

        self.kind().bits() as usize + offset
    }

    /// Creates a new [`Piece`] from a character.
    ///
    /// Lowercase letters are men, uppercase letters are kings;
    /// `r` is Red and `b` is Black.
    ///
    /// # Example
    /// ```
    /// # use draughts::{Piece, Color, PieceKind};
    /// let black_king = Piece::from_char('B').unwrap();
    /// assert_eq!(black_king.color(), Color::Black);
    /// assert_eq!(black_king.kind(), PieceKind::King);
    /// ```
    #[inline(always)]
    pub fn from_char(piece: char) -> Result<Self> {
        match piece {
            'r' => Ok(Self::RED_MAN),
            'R' => Ok(Self::RED_KING),
            'b' => Ok(Self::BLACK_MAN),
            'B' => Ok(Self::BLACK_KING),
            _ => bail!("Invalid char for Piece: Must be one of [r, R, b, B]. Got {piece}."),
        }
    }

    /// Converts this [`Piece`] into a character.
    ///
    /// Men are lowercase, kings are uppercase.
    ///
    /// # Example
    /// ```
    /// # use draughts::Piece;
    /// assert_eq!(Piece::RED_MAN.char(), 'r');
    /// assert_eq!(Piece::BLACK_KING.char(), 'B');
    /// ```
    #[inline(always)]
    pub const fn char(&self) -> char {
        if self.is_king() {
            self.color().char().to_ascii_uppercase()
        } else {
            self.color().char()
        }
    }

    /// Converts this [`Piece`] to a `str`.
    ///
    /// # Example
    /// ```
    /// # use draughts::Piece;
    /// assert_eq!(Piece::RED_KING.as_str(), "R");
    /// assert_eq!(Piece::BLACK_MAN.as_str(), "b");
    /// ```
    #[inline(always)]
    pub const fn as_str(&self) -> &'static str {
        match self.color() {
            Color::Red => match self.kind() {
                PieceKind::Man => "r",
                PieceKind::King => "R",
            },
            Color::Black => match self.kind() {
                PieceKind::Man => "b",
                PieceKind::King => "B",
            },
        }
    }

    /// Crowns this [`Piece`], consuming `self` in the process and returning the crowned [`Piece`].
    ///
    /// Crowning a king changes nothing.
    ///
    /// # Example
    /// ```
    /// # use draughts::{Piece, Color, PieceKind};
    /// let king = Piece::RED_MAN.crowned();
    /// assert_eq!(king.kind(), PieceKind::King);
    /// assert_eq!(king.color(), Color::Red);
    /// assert_eq!(king.crowned(), king);
    /// ```
    #[inline(always)]
    pub const fn crowned(self) -> Self {
        Self::new(self.color(), PieceKind::King)
    }

    /// Fetches a human-readable name for this [`Piece`].
    ///
    /// # Example
    /// ```
    /// # use draughts::Piece;
    /// let black_king = Piece::BLACK_KING;
    /// assert_eq!(black_king.name(), "black king");
    /// ```
    #[inline(always)]
    pub fn name(&self) -> String {
        format!("{} {}", self.color().name(), self.kind().name())
    }
}

macro_rules! impl_common_traits {
    ($type:ty) => {
        impl<T> Index<$type> for [T; <$type>::COUNT] {
            type Output = T;
            /// [`$type`] can be used to index into a list of [`<$type>::COUNT`] elements.
            #[inline(always)]
            fn index(&self, index: $type) -> &Self::Output {
                &self[index.index()]
            }
        }

        impl<T> IndexMut<$type> for [T; <$type>::COUNT] {
            /// [`$type`] can be used to mutably index into a list of [`<$type>::COUNT`] elements.
            #[inline(always)]
            fn index_mut(&mut self, index: $type) -> &mut Self::Output {
                &mut self[index.index()]
            }
        }

        impl FromStr for $type {
            type Err = anyhow::Error;
            /// Does the same as [`Self::from_char`], but only if `s` is one character in length.
            #[inline(always)]
            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                if s.len() != 1 {
                    bail!("Invalid str for <$type>: Must be a str of len 1. Got {s:?}");
                }

                Self::from_char(s.as_bytes()[0] as char)
            }
        }

        impl AsRef<str> for $type {
            /// Alias for [`Self::as_str`].
            #[inline(always)]
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl fmt::Display for $type {
            /// Displays as a single character of notation.
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.char())
            }
        }

        impl fmt::Debug for $type {
            /// Debug formatting displays a $type as its human-readable name and index value.
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "\"{}\" ({})", self.name(), self.index())
            }
        }
    };
}

impl_common_traits!(Piece);
impl_common_traits!(PieceKind);
impl_common_traits!(Color);
