/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use thiserror::Error;

use crate::{Color, Square};

/// Every way a submitted turn can be rejected.
///
/// A rejected turn never modifies the board. [`MoveError::InvalidMove`]
/// deliberately carries no detail about how far into a sequence validation
/// got; a partially-legal chain is reported no differently than a wholly
/// illegal one.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// Some step of the submitted sequence is not a legal slide or jump.
    #[error("invalid move sequence")]
    InvalidMove,

    /// The square a turn was submitted from holds no piece.
    #[error("no piece on {0}")]
    EmptySquare(Square),

    /// The piece being moved belongs to the player not on turn.
    #[error("it is not {}'s turn to move", .0.name())]
    WrongSide(Color),

    /// No more turns are accepted once a side has lost.
    #[error("the game is already over")]
    GameOver,
}
