// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Corridor tests for sliding pieces. Both functions look only at the cells strictly between the
//! two endpoints; what stands on the endpoints themselves is for the caller to judge.

use crate::board::Board;
use crate::types::{Direction, Square};

/// Returns true if `from` and `to` share a rank or a file and every cell between them is empty.
pub fn straight_path_clear(board: &Board, from: Square, to: Square) -> bool {
    match Direction::between(from, to) {
        Some(dir) if !dir.is_diagonal() => corridor_clear(board, from, to, dir),
        _ => false,
    }
}

/// Returns true if `from` and `to` share a diagonal and every cell between them is empty.
pub fn diagonal_path_clear(board: &Board, from: Square, to: Square) -> bool {
    match Direction::between(from, to) {
        Some(dir) if dir.is_diagonal() => corridor_clear(board, from, to, dir),
        _ => false,
    }
}

fn corridor_clear(board: &Board, from: Square, to: Square, dir: Direction) -> bool {
    let mut cursor = from.towards(dir);
    while let Some(sq) = cursor {
        if sq == to {
            return true;
        }

        if board.piece_at(sq).is_some() {
            return false;
        }

        cursor = sq.towards(dir);
    }

    false
}
