// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use rayon::prelude::*;

use crate::board::Board;
use crate::check::legal_moves;
use crate::moves::MoveVec;

/// Counts the leaf nodes of the legal move tree of the given depth. A standard correctness check
/// for move legality: the counts for well-known positions are published.
pub fn perft(board: &Board, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let mut moves = MoveVec::default();
    legal_moves(board, &mut moves);
    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .par_iter()
        .map(|&mov| {
            let mut child = board.clone();
            child.apply_move(mov);
            perft(&child, depth - 1)
        })
        .sum()
}
