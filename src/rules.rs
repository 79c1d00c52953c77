// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use crate::board::Board;
use crate::geometry::{diagonal_path_clear, straight_path_clear};
use crate::types::{Color, Piece, PieceKind, Rank, Square};

/// Movement legality for the side to move, ignoring whether the move would leave the mover's own
/// king attacked. That last test is layered on top by the move executor and the check oracle.
pub fn is_legal_move(board: &Board, from: Square, to: Square) -> bool {
    is_pseudo_legal(board, board.side_to_move(), from, to)
}

/// Movement legality for an explicit mover. Because every piece in this rule set captures the
/// way it moves (pawns aside, whose captures are handled here too), this doubles as the attack
/// test: `mover` attacks `to` iff some piece of theirs could move there.
pub fn is_pseudo_legal(board: &Board, mover: Color, from: Square, to: Square) -> bool {
    if from == to {
        return false;
    }

    let piece = match board.piece_at(from) {
        Some(piece) if piece.color == mover => piece,
        _ => return false,
    };

    let target = board.piece_at(to);
    if target.map_or(false, |target| target.color == mover) {
        return false;
    }

    let (file_delta, rank_delta) = deltas(from, to);
    match piece.kind {
        PieceKind::King => file_delta.abs() <= 1 && rank_delta.abs() <= 1,
        PieceKind::Queen => {
            straight_path_clear(board, from, to) || diagonal_path_clear(board, from, to)
        }
        PieceKind::Rook => straight_path_clear(board, from, to),
        PieceKind::Bishop => diagonal_path_clear(board, from, to),
        PieceKind::Knight => match (file_delta.abs(), rank_delta.abs()) {
            (1, 2) | (2, 1) => true,
            _ => false,
        },
        PieceKind::Pawn => pawn_move_legal(board, piece, from, to, target),
    }
}

fn pawn_move_legal(
    board: &Board,
    pawn: Piece,
    from: Square,
    to: Square,
    target: Option<Piece>,
) -> bool {
    let forward = pawn_direction(pawn.color);
    let (file_delta, rank_delta) = deltas(from, to);

    // Pushes stay on the file and need an empty destination.
    if file_delta == 0 && target.is_none() {
        if rank_delta == forward {
            return true;
        }

        if from.rank() == pawn_start_rank(pawn.color) && rank_delta == 2 * forward {
            let skipped = from.offset(0, forward);
            if skipped.map_or(false, |sq| board.piece_at(sq).is_none()) {
                return true;
            }
        }
    }

    // Captures go one file sideways and need an enemy on the destination. No en-passant.
    file_delta.abs() == 1
        && rank_delta == forward
        && target.map_or(false, |target| target.color != pawn.color)
}

fn deltas(from: Square, to: Square) -> (i32, i32) {
    let (from_file, from_rank) = from.coords();
    let (to_file, to_rank) = to.coords();
    (to_file - from_file, to_rank - from_rank)
}

fn pawn_direction(color: Color) -> i32 {
    match color {
        Color::White => 1,
        Color::Black => -1,
    }
}

fn pawn_start_rank(color: Color) -> Rank {
    match color {
        Color::White => Rank::Two,
        Color::Black => Rank::Seven,
    }
}
