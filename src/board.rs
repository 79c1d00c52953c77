// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::convert::TryFrom;
use std::fmt;

use crate::layout::Layout;
use crate::moves::Move;
use crate::types::TableIndex;
use crate::types::{Color, File, Piece, PieceKind, Rank, Square};
use crate::types::{FILES, RANKS};

/// Possible errors that can arise when parsing a FEN string into a `Board`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FenParseError {
    UnexpectedChar(char),
    UnexpectedEnd,
    InvalidDigit,
    FileDoesNotSumToEight,
    UnknownPiece,
    InvalidSideToMove,
    DuplicateKing,
}

/// Possible errors that can arise when placing a piece on a `Board`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlacementError {
    Occupied(Square),
    DuplicateKing(Color),
}

/// The 8x8 grid, the side to move, and where each side's king stands.
///
/// The king squares are a cache of what is on the grid. Every mutation in this module keeps the
/// two in agreement, so readers can trust `king` without scanning the board.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Option<Piece>; 8]; 8],
    side_to_move: Color,
    kings: [Option<Square>; 2],
}

/// Everything needed to take back a move made with `Board::make_move`.
#[derive(Copy, Clone, Debug)]
pub struct Undo {
    mov: Move,
    moving: Piece,
    captured: Option<Piece>,
    kings: [Option<Square>; 2],
}

impl Undo {
    pub fn captured(&self) -> Option<Piece> {
        self.captured
    }
}

//
// Board state getters
//

impl Board {
    pub fn new() -> Board {
        Board {
            cells: [[None; 8]; 8],
            side_to_move: Color::White,
            kings: [None; 2],
        }
    }

    pub fn from_layout(layout: Layout) -> Board {
        let mut board = Board::new();
        layout.place(&mut board);
        board
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// The square holding the given side's king, if that side has one.
    pub fn king(&self, color: Color) -> Option<Square> {
        self.kings[color.as_index()]
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.cells[square.rank().as_index()][square.file().as_index()]
    }

    /// Iterates over every piece belonging to `color`, along with the square it stands on.
    pub fn pieces<'a>(&'a self, color: Color) -> impl Iterator<Item = (Square, Piece)> + 'a {
        Square::all().filter_map(move |sq| {
            self.piece_at(sq)
                .filter(|piece| piece.color == color)
                .map(|piece| (sq, piece))
        })
    }

    fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.cells[square.rank().as_index()][square.file().as_index()] = piece;
    }
}

//
// Board setup
//

impl Board {
    pub fn add_piece(&mut self, square: Square, piece: Piece) -> Result<(), PlacementError> {
        if self.piece_at(square).is_some() {
            return Err(PlacementError::Occupied(square));
        }

        if piece.kind == PieceKind::King {
            if self.king(piece.color).is_some() {
                return Err(PlacementError::DuplicateKing(piece.color));
            }
            self.kings[piece.color.as_index()] = Some(square);
        }

        self.set(square, Some(piece));
        Ok(())
    }

    pub fn remove_piece(&mut self, square: Square) -> Option<Piece> {
        let existing = self.piece_at(square)?;
        if existing.kind == PieceKind::King {
            self.kings[existing.color.as_index()] = None;
        }

        self.set(square, None);
        Some(existing)
    }
}

//
// Move application
//

impl Board {
    /// Relocates the piece on the move's source square to its destination, capturing whatever
    /// stood there. The side to move is left alone; the returned `Undo` restores the board
    /// exactly, including the king cache and the mover's `moved` flag.
    ///
    /// The caller is responsible for the move being sensible: there must be a piece on the
    /// source square.
    pub fn make_move(&mut self, mov: Move) -> Undo {
        let moving = self
            .piece_at(mov.source())
            .expect("invalid move: no piece at source square");
        let captured = self.piece_at(mov.destination());
        let undo = Undo {
            mov,
            moving,
            captured,
            kings: self.kings,
        };

        if let Some(victim) = captured {
            if victim.kind == PieceKind::King {
                self.kings[victim.color.as_index()] = None;
            }
        }

        self.set(mov.source(), None);
        self.set(mov.destination(), Some(moving.into_moved()));
        if moving.kind == PieceKind::King {
            self.kings[moving.color.as_index()] = Some(mov.destination());
        }

        undo
    }

    pub fn unmake_move(&mut self, undo: Undo) {
        self.set(undo.mov.source(), Some(undo.moving));
        self.set(undo.mov.destination(), undo.captured);
        self.kings = undo.kings;
    }

    /// Makes the move and passes the turn to the other side.
    pub fn apply_move(&mut self, mov: Move) {
        self.make_move(mov);
        self.toggle_side_to_move();
    }

    pub(crate) fn toggle_side_to_move(&mut self) {
        self.side_to_move = self.side_to_move.toggle();
    }
}

//
// FEN parsing and generation.
//
// Only the first two FEN fields mean anything here: piece placement and the side to move. There
// is no castling, en-passant or move clock in this rule set, so anything after the side to move
// is accepted and ignored.
//

impl Board {
    pub fn from_fen<S: AsRef<str>>(fen: S) -> Result<Board, FenParseError> {
        use std::iter::Peekable;
        use std::str::Chars;

        type Stream<'a> = Peekable<Chars<'a>>;

        fn eat<'a>(iter: &mut Stream<'a>, expected: char) -> Result<(), FenParseError> {
            match iter.next() {
                Some(c) if c == expected => Ok(()),
                Some(c) => Err(FenParseError::UnexpectedChar(c)),
                None => Err(FenParseError::UnexpectedEnd),
            }
        }

        fn advance<'a>(iter: &mut Stream<'a>) -> Result<(), FenParseError> {
            iter.next().map(|_| ()).ok_or(FenParseError::UnexpectedEnd)
        }

        fn peek<'a>(iter: &mut Stream<'a>) -> Result<char, FenParseError> {
            iter.peek().cloned().ok_or(FenParseError::UnexpectedEnd)
        }

        fn eat_side_to_move<'a>(iter: &mut Stream<'a>) -> Result<Color, FenParseError> {
            let side = match peek(iter)? {
                'w' => Color::White,
                'b' => Color::Black,
                _ => return Err(FenParseError::InvalidSideToMove),
            };

            advance(iter)?;
            Ok(side)
        }

        let mut board = Board::new();
        let iter = &mut fen.as_ref().chars().peekable();
        for &rank in RANKS.iter().rev() {
            let mut file = 0;
            while file < 8 {
                let c = peek(iter)?;
                match c {
                    '1'..='8' => {
                        file += c as usize - '0' as usize;
                        if file > 8 {
                            return Err(FenParseError::FileDoesNotSumToEight);
                        }
                    }
                    '0' | '9' => return Err(FenParseError::InvalidDigit),
                    '/' | ' ' => return Err(FenParseError::FileDoesNotSumToEight),
                    _ => {
                        let piece = Piece::try_from(c).map_err(|_| FenParseError::UnknownPiece)?;
                        let square = Square::of(rank, File::from_index(file));
                        // Every square is visited once, so a duplicated king is the only way
                        // placement can fail here.
                        board
                            .add_piece(square, piece)
                            .map_err(|_| FenParseError::DuplicateKing)?;
                        file += 1;
                    }
                }

                advance(iter)?;
            }

            if rank != Rank::One {
                eat(iter, '/')?;
            }
        }

        if iter.peek().is_some() {
            eat(iter, ' ')?;
            board.side_to_move = eat_side_to_move(iter)?;
        }

        Ok(board)
    }

    pub fn as_fen(&self) -> String {
        let mut buf = String::new();
        for &rank in RANKS.iter().rev() {
            let mut empty_squares = 0;
            for &file in &FILES {
                if let Some(piece) = self.piece_at(Square::of(rank, file)) {
                    if empty_squares != 0 {
                        buf.push_str(&empty_squares.to_string());
                    }
                    buf.push_str(&piece.to_string());
                    empty_squares = 0;
                } else {
                    empty_squares += 1;
                }
            }

            if empty_squares != 0 {
                buf.push_str(&empty_squares.to_string());
            }

            if rank != Rank::One {
                buf.push('/');
            }
        }

        buf.push(' ');
        buf.push_str(&self.side_to_move.to_string());
        buf
    }
}

//
// Trait implementations
//

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let files: String = FILES.iter().map(|file| format!(" {}", file)).collect();
        let border = "-".repeat(FILES.len() * 2 + 1);
        writeln!(f, "   {}", files)?;
        writeln!(f, "   {}", border)?;
        for &rank in RANKS.iter().rev() {
            write!(f, "{} | ", rank)?;
            for &file in &FILES {
                if let Some(piece) = self.piece_at(Square::of(rank, file)) {
                    write!(f, "{} ", piece)?;
                } else {
                    write!(f, ". ")?;
                }
            }

            writeln!(f, "| {}", rank)?;
        }

        writeln!(f, "   {}", border)?;
        writeln!(f, "   {}", files)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

/// Renders the board as text: files labeled a through h, ranks 8 down to 1, White uppercase,
/// Black lowercase, `.` for an empty cell.
pub fn board_to_text(board: &Board) -> String {
    board.to_string()
}

#[cfg(test)]
mod tests {
    use crate::board::{board_to_text, Board, PlacementError};
    use crate::layout::Layout;
    use crate::moves::Move;
    use crate::types::{Color, Piece, PieceKind, Square};

    #[test]
    fn empty_board() {
        let board = Board::new();
        assert_eq!(Color::White, board.side_to_move());
        assert_eq!(None, board.king(Color::White));
        assert_eq!(None, board.king(Color::Black));
        assert_eq!(0, board.pieces(Color::White).count());
    }

    #[test]
    fn add_piece_tracks_king() {
        let mut board = Board::new();
        let king = Piece::new(PieceKind::King, Color::Black);
        board.add_piece(Square::D5, king).unwrap();
        assert_eq!(Some(Square::D5), board.king(Color::Black));
        assert_eq!(
            Err(PlacementError::DuplicateKing(Color::Black)),
            board.add_piece(Square::D6, king)
        );
        assert_eq!(
            Err(PlacementError::Occupied(Square::D5)),
            board.add_piece(Square::D5, Piece::new(PieceKind::Rook, Color::White))
        );

        assert_eq!(Some(king), board.remove_piece(Square::D5));
        assert_eq!(None, board.king(Color::Black));
        assert_eq!(None, board.remove_piece(Square::D5));
    }

    #[test]
    fn make_move_marks_piece_moved() {
        let mut board = Board::from_layout(Layout::Standard);
        board.make_move(Move::new(Square::G1, Square::F3));
        assert!(board.piece_at(Square::G1).is_none());
        let knight = board.piece_at(Square::F3).unwrap();
        assert_eq!(PieceKind::Knight, knight.kind);
        assert!(knight.moved);

        // make_move leaves the turn alone, apply_move passes it.
        assert_eq!(Color::White, board.side_to_move());
        board.apply_move(Move::new(Square::E7, Square::E5));
        assert_eq!(Color::Black, board.side_to_move());
    }

    #[test]
    fn unmake_restores_capture_and_king() {
        let mut board = Board::from_fen("4k3/8/8/8/8/8/3q4/4K3 w").unwrap();
        let before = board.clone();
        let undo = board.make_move(Move::new(Square::E1, Square::D2));
        assert_eq!(Some(Square::D2), board.king(Color::White));
        assert_eq!(
            Some(PieceKind::Queen),
            undo.captured().map(|piece| piece.kind)
        );

        board.unmake_move(undo);
        assert_eq!(before, board);
    }

    #[test]
    fn king_capture_clears_cache() {
        let mut board = Board::from_fen("8/8/8/8/8/8/3k4/4K3 w").unwrap();
        let undo = board.make_move(Move::new(Square::E1, Square::D2));
        assert_eq!(None, board.king(Color::Black));
        board.unmake_move(undo);
        assert_eq!(Some(Square::D2), board.king(Color::Black));
    }

    #[test]
    fn standard_layout_renders() {
        let board = Board::from_layout(Layout::Standard);
        let expected = "    a b c d e f g h\n\
                        \x20  -----------------\n\
                        8 | r n b q k b n r | 8\n\
                        7 | p p p p p p p p | 7\n\
                        6 | . . . . . . . . | 6\n\
                        5 | . . . . . . . . | 5\n\
                        4 | . . . . . . . . | 4\n\
                        3 | . . . . . . . . | 3\n\
                        2 | P P P P P P P P | 2\n\
                        1 | R N B Q K B N R | 1\n\
                        \x20  -----------------\n\
                        \x20   a b c d e f g h\n";
        assert_eq!(expected, board_to_text(&board));
    }

    mod fen {
        use crate::board::{Board, FenParseError};
        use crate::layout::Layout;
        use crate::types::{Color, PieceKind, Square};

        #[test]
        fn fen_smoke() {
            let board = Board::from_fen("8/8/8/8/8/8/8/8 w").unwrap();
            assert_eq!(Color::White, board.side_to_move());
            assert_eq!(Board::new(), board);
        }

        #[test]
        fn starting_position() {
            let board =
                Board::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1")
                    .unwrap();
            assert_eq!(Board::from_layout(Layout::Standard), board);
            assert_eq!(Some(Square::E1), board.king(Color::White));
            assert_eq!(Some(Square::E8), board.king(Color::Black));
            assert_eq!(
                PieceKind::Queen,
                board.piece_at(Square::D8).unwrap().kind
            );
        }

        #[test]
        fn side_to_move_is_optional() {
            let board = Board::from_fen("4k3/8/8/8/8/8/8/4K3").unwrap();
            assert_eq!(Color::White, board.side_to_move());
            let board = Board::from_fen("4k3/8/8/8/8/8/8/4K3 b").unwrap();
            assert_eq!(Color::Black, board.side_to_move());
        }

        #[test]
        fn as_fen_smoke() {
            let fen = "r3k3/1p6/8/3Pp3/8/2N5/8/4K2R b";
            assert_eq!(fen, Board::from_fen(fen).unwrap().as_fen());
        }

        #[test]
        fn empty() {
            let err = Board::from_fen("").unwrap_err();
            assert_eq!(FenParseError::UnexpectedEnd, err);
        }

        #[test]
        fn unknown_piece() {
            let err = Board::from_fen("z7/8/8/8/8/8/8/8 w").unwrap_err();
            assert_eq!(FenParseError::UnknownPiece, err);
        }

        #[test]
        fn invalid_digit() {
            let err = Board::from_fen("9/8/8/8/8/8/8/8 w").unwrap_err();
            assert_eq!(FenParseError::InvalidDigit, err);
        }

        #[test]
        fn not_sum_to_8() {
            let err = Board::from_fen("pppp5/8/8/8/8/8/8/8 w").unwrap_err();
            assert_eq!(FenParseError::FileDoesNotSumToEight, err);
            let err = Board::from_fen("ppp/8/8/8/8/8/8/8 w").unwrap_err();
            assert_eq!(FenParseError::FileDoesNotSumToEight, err);
        }

        #[test]
        fn bad_side_to_move() {
            let err = Board::from_fen("8/8/8/8/8/8/8/8 c").unwrap_err();
            assert_eq!(FenParseError::InvalidSideToMove, err);
        }

        #[test]
        fn duplicate_king() {
            let err = Board::from_fen("kk6/8/8/8/8/8/8/8 w").unwrap_err();
            assert_eq!(FenParseError::DuplicateKing, err);
        }
    }
}
