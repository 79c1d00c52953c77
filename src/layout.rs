// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::types::{Color, Piece, PieceKind, Rank, Square};
use crate::types::{COLORS, FILES};

/// The starting piece sets a game can be set up with. The reduced sets are the "difficulty"
/// levels of the console game; they change what is on the board, never the rules.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Kings and both knights per side.
    Knights,
    /// Kings and a full rank of pawns per side.
    Pawns,
    /// The orthodox starting position.
    Standard,
}

static BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl Layout {
    /// Maps the numeric menu choice onto a layout: 1 is knights, 2 is pawns and 3 is standard.
    /// Anything else falls back to the standard layout.
    pub fn from_selector(selector: i64) -> Layout {
        match selector {
            1 => Layout::Knights,
            2 => Layout::Pawns,
            _ => Layout::Standard,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Layout::Knights => "knights",
            Layout::Pawns => "pawns",
            Layout::Standard => "standard",
        }
    }

    /// Places this layout's pieces on the given board. The board is expected to be empty.
    pub fn place(self, board: &mut Board) {
        for &color in &COLORS {
            let (back, front) = home_ranks(color);
            for (&file, &kind) in FILES.iter().zip(BACK_RANK.iter()) {
                let wanted = match self {
                    Layout::Standard => true,
                    Layout::Knights => kind == PieceKind::King || kind == PieceKind::Knight,
                    Layout::Pawns => kind == PieceKind::King,
                };

                if wanted {
                    place(board, Square::of(back, file), Piece::new(kind, color));
                }

                if self != Layout::Knights {
                    place(
                        board,
                        Square::of(front, file),
                        Piece::new(PieceKind::Pawn, color),
                    );
                }
            }
        }
    }
}

impl Default for Layout {
    fn default() -> Layout {
        Layout::Standard
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Layout {
    type Err = String;

    /// Accepts either a layout name or the numeric menu selector.
    fn from_str(s: &str) -> Result<Layout, String> {
        match s.trim().to_ascii_lowercase().as_str() {
            "knights" => Ok(Layout::Knights),
            "pawns" => Ok(Layout::Pawns),
            "standard" => Ok(Layout::Standard),
            other => other
                .parse::<i64>()
                .map(Layout::from_selector)
                .map_err(|_| other.to_owned()),
        }
    }
}

fn home_ranks(color: Color) -> (Rank, Rank) {
    match color {
        Color::White => (Rank::One, Rank::Two),
        Color::Black => (Rank::Eight, Rank::Seven),
    }
}

fn place(board: &mut Board, square: Square, piece: Piece) {
    // Layouts only ever put one piece on a square and one king per side.
    if let Err(err) = board.add_piece(square, piece) {
        unreachable!("layout placed an invalid piece: {:?}", err);
    }
}
