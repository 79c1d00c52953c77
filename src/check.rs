// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use crate::board::Board;
use crate::moves::{Move, MoveVec};
use crate::rules::is_pseudo_legal;
use crate::types::{Color, Square};

/// Returns whether or not the given side's king is attacked. A side with no king on the board is
/// never in check.
pub fn is_in_check(board: &Board, color: Color) -> bool {
    let king = match board.king(color) {
        Some(king) => king,
        None => return false,
    };

    // "Can this piece move onto the king" and "does this piece attack the king" are the same
    // question for every piece kind in this rule set.
    let attacker = color.toggle();
    board
        .pieces(attacker)
        .any(|(sq, _)| is_pseudo_legal(board, attacker, sq, king))
}

/// Returns whether or not the given side is checkmated: in check, and without a single move that
/// gets it out of check.
pub fn is_checkmate(board: &Board, color: Color) -> bool {
    if !is_in_check(board, color) {
        return false;
    }

    for mov in pseudo_legal_moves(board, color) {
        if !leaves_in_check(board, color, mov) {
            trace!("{} escapes check with {}", color.name(), mov);
            return false;
        }
    }

    true
}

/// Fills `moves` with every legal move for the side to move: moves that obey the piece rules and
/// don't leave the mover's own king attacked.
pub fn legal_moves(board: &Board, moves: &mut MoveVec) {
    let side = board.side_to_move();
    for mov in pseudo_legal_moves(board, side) {
        if !leaves_in_check(board, side, mov) {
            moves.push(mov);
        }
    }
}

/// Full legality test for a single move by the side to move.
pub fn is_legal(board: &Board, mov: Move) -> bool {
    let side = board.side_to_move();
    is_pseudo_legal(board, side, mov.source(), mov.destination())
        && !leaves_in_check(board, side, mov)
}

fn pseudo_legal_moves<'a>(board: &'a Board, color: Color) -> impl Iterator<Item = Move> + 'a {
    board.pieces(color).flat_map(move |(from, _)| {
        Square::all()
            .filter(move |&to| is_pseudo_legal(board, color, from, to))
            .map(move |to| Move::new(from, to))
    })
}

// Trial move: played on a scratch copy of the board, which is dropped afterwards, so there is
// nothing to roll back.
fn leaves_in_check(board: &Board, color: Color, mov: Move) -> bool {
    let mut trial = board.clone();
    trial.make_move(mov);
    is_in_check(&trial, color)
}
