// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use chequer::{Color, Game, GameState, Layout, MoveError, MoveOutcome, PieceKind, Square};

fn play(game: &mut Game, line: &[&str]) -> Vec<MoveOutcome> {
    line.iter()
        .map(|mov| {
            let (from, to) = mov.split_at(2);
            game.submit_tokens(from, to)
                .unwrap_or_else(|err| panic!("{} was rejected: {}", mov, err))
        })
        .collect()
}

#[test]
fn opening_double_step() {
    let mut game = Game::new(Layout::Standard);
    assert_eq!(Ok(MoveOutcome::Accepted), game.submit_tokens("e2", "e4"));

    // e2 is empty, e4 holds the pawn, which is now marked as moved.
    assert!(game.board().piece_at(Square::E2).is_none());
    let pawn = game.board().piece_at(Square::E4).unwrap();
    assert_eq!(PieceKind::Pawn, pawn.kind);
    assert_eq!(Color::White, pawn.color);
    assert!(pawn.moved);
    assert_eq!(Color::Black, game.board().side_to_move());
}

#[test]
fn king_cannot_move_two_squares() {
    let mut game = Game::new(Layout::Standard);
    let before = game.board().clone();
    match game.submit_tokens("e1", "e3") {
        Err(MoveError::IllegalMove(_)) => {}
        other => panic!("expected an illegal move, got {:?}", other),
    }

    assert_eq!(&before, game.board());
}

#[test]
fn knights_deliver_mate() {
    let mut game = Game::new(Layout::Knights);
    let outcomes = play(
        &mut game,
        &[
            "e1f2", "b8c6", "f2g3", "c6e5", "g3g2", "g8f6", "g2h1", "f6h5", "b1d2", "h5f4",
            "d2f1", "e5g4", "f1h2", "g4f2",
        ],
    );

    let (last, rest) = outcomes.split_last().unwrap();
    assert!(rest.iter().all(|&outcome| outcome == MoveOutcome::Accepted));
    assert_eq!(
        MoveOutcome::Checkmate {
            winner: Color::Black
        },
        *last
    );
    assert_eq!(
        GameState::GameOver {
            winner: Color::Black
        },
        game.state()
    );
    assert_eq!(Some(Square::H1), game.board().king(Color::White));
}

#[test]
fn double_step_through_a_piece() {
    let mut game = Game::new(Layout::Standard);
    play(&mut game, &["g1f3", "g8f6"]);

    // the knight on f3 blocks f2-f4, but f2-f3 would land on it.
    let before = game.board().clone();
    assert_eq!(
        Err(MoveError::IllegalMove(chequer::Move::new(Square::F2, Square::F4))),
        game.submit_tokens("f2", "f4")
    );
    assert_eq!(&before, game.board());
}

#[test]
fn fools_mate() {
    let mut game = Game::new(Layout::Standard);
    let outcomes = play(&mut game, &["f2f3", "e7e5", "g2g4", "d8h4"]);
    assert_eq!(
        Some(&MoveOutcome::Checkmate {
            winner: Color::Black
        }),
        outcomes.last()
    );
    assert_eq!(Some(Color::Black), game.winner());
}

#[test]
fn scholars_mate() {
    let mut game = Game::new(Layout::Standard);
    let outcomes = play(
        &mut game,
        &["e2e4", "e7e5", "f1c4", "b8c6", "d1h5", "g8f6", "h5f7"],
    );
    assert_eq!(
        Some(&MoveOutcome::Checkmate {
            winner: Color::White
        }),
        outcomes.last()
    );

    // nothing moves once the game is decided.
    assert_eq!(
        Err(MoveError::GameAlreadyOver),
        game.submit_tokens("e8", "e7")
    );
    assert_eq!(Some(Color::White), game.winner());
}

#[test]
fn check_must_be_answered() {
    let mut game = Game::new(Layout::Standard);
    play(&mut game, &["e2e4", "f7f6", "d1h5"]);

    // black is in check from h5; a move that ignores it is rejected.
    assert_eq!(
        Err(MoveError::SelfCheck(chequer::Move::new(Square::A7, Square::A6))),
        game.submit_tokens("a7", "a6")
    );
    assert_eq!(Ok(MoveOutcome::Accepted), game.submit_tokens("g7", "g6"));
}
