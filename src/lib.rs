/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! A move-legality engine for checkers (English draughts).
//!
//! Play happens on the dark squares of an 8x8 board. Red's men start on
//! ranks 1 through 3 and move up the board; Black's start on ranks 6
//! through 8 and move down. A turn is a sequence of landing squares for a
//! single piece: one diagonal slide, or a chain of jumps that captures
//! every piece jumped over. A man reaching the far rank is crowned a king
//! and gains the backward diagonals.
//!
//! Turns are validated and played atomically. A submitted sequence is
//! vetted step by step on a scratch copy of the board, and an illegal one
//! is rejected without touching the real board. See [`play_turn`] for the
//! board-level engine and [`Game::make_turn`] for the full turn-taking
//! rules.

/// All pieces and their locations.
mod board;

/// Everything that can go wrong when playing a turn.
mod error;

/// A full game: board, side to move, and turn-taking rules.
mod game;

/// Move generation and turn validation.
mod movegen;

/// Representations of a single step of a piece.
mod moves;

/// Colors, piece kinds, and the pieces themselves.
mod piece;

/// Squares, ranks, and files of the board.
mod square;

pub use board::*;
pub use error::*;
pub use game::*;
pub use movegen::*;
pub use moves::*;
pub use piece::*;
pub use square::*;
