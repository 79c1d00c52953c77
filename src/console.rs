// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use crate::config::{Config, OutputFormat};
use crate::game::{Game, MoveError};
use crate::moves::Move;
use crate::types::{Color, Square};

/// The text front-end: reads two coordinate tokens per turn, hands them to the game, and shows
/// the board after every turn. All the rules live in `Game`; this only shuttles text.
pub struct ConsoleServer {
    game: Game,
    output: OutputFormat,
    last_move: Option<Move>,
}

/// What the JSON output mode writes after every turn, one object per line.
#[derive(Serialize)]
struct Snapshot {
    fen: String,
    side_to_move: Color,
    kings: [Option<Square>; 2],
    last_move: Option<Move>,
    error: Option<String>,
    winner: Option<Color>,
}

impl ConsoleServer {
    pub fn new(config: &Config) -> ConsoleServer {
        ConsoleServer::from_game(Game::new(config.layout), config.output)
    }

    pub fn from_game(game: Game, output: OutputFormat) -> ConsoleServer {
        ConsoleServer {
            game,
            output,
            last_move: None,
        }
    }

    /// Plays until somebody is checkmated or the input runs out. Returns the winner, if any.
    pub fn run<R, W>(mut self, reader: R, mut writer: W) -> io::Result<Option<Color>>
    where
        R: BufRead,
        W: Write,
    {
        let mut tokens = Tokens::new(reader);
        let mut last_error = None;
        loop {
            self.render(&mut writer, last_error.take())?;
            if self.game.is_over() {
                break;
            }

            if self.output == OutputFormat::Text {
                let side = self.game.board().side_to_move();
                write!(&mut writer, "{} to move. Enter a move (e.g. e2 e4): ", side.name())?;
                writer.flush()?;
            }

            let (from, to) = match (tokens.next()?, tokens.next()?) {
                (Some(from), Some(to)) => (from, to),
                _ => break,
            };

            let submitted = Move::from_tokens(&from, &to)
                .map_err(MoveError::from)
                .and_then(|mov| {
                    self.game
                        .submit_move(mov.source(), mov.destination())
                        .map(|_| mov)
                });
            match submitted {
                Ok(mov) => self.last_move = Some(mov),
                Err(err) => last_error = Some(err),
            }
        }

        writer.flush()?;
        Ok(self.game.winner())
    }

    fn render<W: Write>(&self, w: &mut W, error: Option<MoveError>) -> io::Result<()> {
        match self.output {
            OutputFormat::Text => {
                writeln!(w)?;
                if let Some(err) = error {
                    writeln!(w, "{}", rejection_message(&err))?;
                }

                write!(w, "{}", self.game.board())?;
                if let Some(winner) = self.game.winner() {
                    writeln!(w, "{} wins by checkmate!", winner.name())?;
                }

                Ok(())
            }
            OutputFormat::Json => {
                let board = self.game.board();
                let snapshot = Snapshot {
                    fen: board.as_fen(),
                    side_to_move: board.side_to_move(),
                    kings: [board.king(Color::White), board.king(Color::Black)],
                    last_move: self.last_move,
                    error: error.map(|err| err.to_string()),
                    winner: self.game.winner(),
                };
                serde_json::to_writer(&mut *w, &snapshot)?;
                writeln!(w)
            }
        }
    }
}

fn rejection_message(err: &MoveError) -> &'static str {
    match err {
        MoveError::MalformedCoordinate(_) => "Invalid position. Try again.",
        MoveError::IllegalMove(_) | MoveError::SelfCheck(_) => "Invalid move. Try again.",
        MoveError::GameAlreadyOver => "The game is over.",
    }
}

/// Whitespace-separated tokens, read lazily. Tokens of a turn may be split across lines.
struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(reader: R) -> Tokens<R> {
        Tokens {
            reader,
            pending: VecDeque::new(),
        }
    }

    fn next(&mut self) -> io::Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }

            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }

        Ok(self.pending.pop_front())
    }
}
