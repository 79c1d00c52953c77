// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#[macro_use]
extern crate num_derive;
#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;

mod board;
mod check;
pub mod config;
pub mod console;
mod game;
mod geometry;
mod layout;
mod moves;
mod perft;
mod rules;
mod types;

pub use board::{board_to_text, Board, FenParseError, PlacementError, Undo};
pub use check::{is_checkmate, is_in_check, is_legal, legal_moves};
pub use config::{Config, ConfigError, OutputFormat};
pub use console::ConsoleServer;
pub use game::{Game, GameState, MoveError, MoveOutcome};
pub use geometry::{diagonal_path_clear, straight_path_clear};
pub use layout::Layout;
pub use moves::{Move, MoveVec};
pub use perft::perft;
pub use rules::{is_legal_move, is_pseudo_legal};
pub use types::{
    on_board, Color, CoordinateError, Direction, File, Piece, PieceKind, Rank, Square, TableIndex,
};
