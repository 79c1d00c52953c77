// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt;

use arrayvec::ArrayVec;

use crate::types::{CoordinateError, Square};

/// A move from one square to another. There are no castles, promotions or en-passant captures in
/// this rule set, so a source and a destination are all a move needs to carry.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    source: Square,
    destination: Square,
}

/// A list of moves large enough to hold every legal move of any reachable position.
pub type MoveVec = ArrayVec<[Move; 256]>;

impl Move {
    pub fn new(source: Square, destination: Square) -> Move {
        Move {
            source,
            destination,
        }
    }

    /// Builds a move out of the two coordinate tokens a player types, e.g. `"e2"` and `"e4"`.
    pub fn from_tokens(source: &str, destination: &str) -> Result<Move, CoordinateError> {
        Ok(Move::new(source.parse()?, destination.parse()?))
    }

    pub fn source(self) -> Square {
        self.source
    }

    pub fn destination(self) -> Square {
        self.destination
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.source, self.destination)
    }
}

#[cfg(test)]
mod tests {
    use super::Move;
    use crate::types::{CoordinateError, Square};

    #[test]
    fn from_tokens_smoke() {
        let mov = Move::from_tokens("e2", "E4").unwrap();
        assert_eq!(Square::E2, mov.source());
        assert_eq!(Square::E4, mov.destination());
        assert_eq!("e2e4", mov.to_string());
    }

    #[test]
    fn from_tokens_reports_first_bad_token() {
        assert_eq!(
            Err(CoordinateError::OffBoard("z9".to_owned())),
            Move::from_tokens("z9", "e4")
        );
        assert_eq!(
            Err(CoordinateError::WrongLength("e10".to_owned())),
            Move::from_tokens("e2", "e10")
        );
    }
}
