// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::io::Cursor;

use chequer::{Color, Config, ConsoleServer, Layout, OutputFormat};

const KNIGHT_MATE: &str = "e1 f2\nb8 c6\nf2 g3\nc6 e5\ng3 g2\ng8 f6\ng2 h1\nf6 h5\n\
                           b1 d2\nh5 f4\nd2 f1\ne5 g4\nf1 h2\ng4 f2\n";

#[test]
fn knights_game_to_checkmate() {
    let config = Config {
        layout: Layout::Knights,
        output: OutputFormat::Text,
    };
    let mut output = Vec::new();
    let winner = ConsoleServer::new(&config)
        .run(Cursor::new(KNIGHT_MATE), &mut output)
        .unwrap();
    assert_eq!(Some(Color::Black), winner);

    let output = String::from_utf8(output).unwrap();
    assert_eq!(7, output.matches("White to move.").count());
    assert_eq!(7, output.matches("Black to move.").count());
    assert!(!output.contains("Try again"));
    assert!(output.ends_with("Black wins by checkmate!\n"));
}

#[test]
fn moves_after_mate_are_not_read() {
    let config = Config {
        layout: Layout::Knights,
        output: OutputFormat::Json,
    };
    let input = format!("{}a8 a7\n", KNIGHT_MATE);
    let mut output = Vec::new();
    let winner = ConsoleServer::new(&config)
        .run(Cursor::new(input), &mut output)
        .unwrap();
    assert_eq!(Some(Color::Black), winner);

    let output = String::from_utf8(output).unwrap();
    let last: serde_json::Value = serde_json::from_str(output.lines().last().unwrap()).unwrap();
    assert_eq!(15, output.lines().count());
    assert_eq!("Black", last["winner"]);
    assert_eq!("H1", last["kings"][0]);
    assert_eq!("F2", last["last_move"]["destination"]);
}
