// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use thiserror::Error;

use crate::board::Board;
use crate::check::{is_checkmate, is_in_check};
use crate::layout::Layout;
use crate::moves::Move;
use crate::rules::is_legal_move;
use crate::types::{Color, CoordinateError, Square};

/// Reasons a submitted move is turned down. None of them change the game: the board, the side to
/// move and the king squares are exactly as they were before the submission.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("malformed coordinate: {0}")]
    MalformedCoordinate(#[from] CoordinateError),
    #[error("{0} is not a legal move")]
    IllegalMove(Move),
    #[error("{0} would leave the king in check")]
    SelfCheck(Move),
    #[error("the game is already over")]
    GameAlreadyOver,
}

/// What happened to an accepted move.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move was played and the game goes on.
    Accepted,
    /// The move was played and checkmated the opponent.
    Checkmate { winner: Color },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameState {
    AwaitingMove,
    GameOver { winner: Color },
}

/// A game session: one board, mutated only through `submit_move`, and the record of who won
/// once somebody has.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    layout: Option<Layout>,
    winner: Option<Color>,
}

impl Game {
    pub fn new(layout: Layout) -> Game {
        info!("starting a game with the {} layout", layout);
        Game {
            board: Board::from_layout(layout),
            layout: Some(layout),
            winner: None,
        }
    }

    /// Starts a session from an arbitrary board. If the side to move is already checkmated the
    /// session starts out over.
    pub fn from_board(board: Board) -> Game {
        let side = board.side_to_move();
        let winner = if is_checkmate(&board, side) {
            Some(side.toggle())
        } else {
            None
        };

        Game {
            board,
            layout: None,
            winner,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The layout this session was set up with, or `None` for sessions built from a board.
    pub fn layout(&self) -> Option<Layout> {
        self.layout
    }

    pub fn winner(&self) -> Option<Color> {
        self.winner
    }

    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    pub fn state(&self) -> GameState {
        match self.winner {
            Some(winner) => GameState::GameOver { winner },
            None => GameState::AwaitingMove,
        }
    }

    /// Plays a move for the side to move.
    ///
    /// The move is first checked against the piece rules. It is then made on the board; if that
    /// leaves the mover's king attacked it is taken back and rejected. Otherwise the turn passes
    /// and the opponent is tested for checkmate, which ends the game.
    pub fn submit_move(&mut self, from: Square, to: Square) -> Result<MoveOutcome, MoveError> {
        let mov = Move::new(from, to);
        if self.is_over() {
            debug!("rejecting {}: the game is over", mov);
            return Err(MoveError::GameAlreadyOver);
        }

        if !is_legal_move(&self.board, from, to) {
            debug!("rejecting {}: not a legal move", mov);
            return Err(MoveError::IllegalMove(mov));
        }

        let mover = self.board.side_to_move();
        let undo = self.board.make_move(mov);
        if is_in_check(&self.board, mover) {
            self.board.unmake_move(undo);
            debug!("rejecting {}: leaves {} in check", mov, mover.name());
            return Err(MoveError::SelfCheck(mov));
        }

        self.board.toggle_side_to_move();
        if is_checkmate(&self.board, mover.toggle()) {
            info!("{} checkmates {} with {}", mover.name(), mover.toggle().name(), mov);
            self.winner = Some(mover);
            return Ok(MoveOutcome::Checkmate { winner: mover });
        }

        Ok(MoveOutcome::Accepted)
    }

    /// Parses two coordinate tokens, such as `"e2"` and `"e4"`, and submits the move they name.
    /// Malformed tokens are rejected before any rule is consulted.
    pub fn submit_tokens(&mut self, from: &str, to: &str) -> Result<MoveOutcome, MoveError> {
        let mov = Move::from_tokens(from, to)?;
        self.submit_move(mov.source(), mov.destination())
    }
}
