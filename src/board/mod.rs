//! Position storage and the read-only interface the evaluator consumes.
//!
//! The evaluator is generic over [`Position`]; [`Board`] is the concrete
//! bitboard implementation used by the engine and the tests.

mod attacks;
mod fen;

pub use attacks::attackers_to;
pub use fen::{FenError, START_FEN};

use crate::types::{
    Bitboard, Color, PieceType, Square, COLOR_NB, EMPTY, FILE_NB, PIECE_TYPE_NB, RANK_NB,
};
use std::fmt;

/// Read-only queries the evaluator needs from a position.
///
/// Implementations must be consistent: `king_square(c)` is a member of
/// `pieces(c, King)`, and `checkers()` is non-empty iff the side to move is
/// in check.
pub trait Position {
    /// Squares holding `color`'s pieces of type `pt`. Empty for the sentinel.
    fn pieces(&self, color: Color, pt: PieceType) -> Bitboard;

    fn king_square(&self, color: Color) -> Square;

    fn side_to_move(&self) -> Color;

    /// Enemy pieces currently giving check to the side to move
    fn checkers(&self) -> Bitboard;
}

/// Bitboard position: one set per (color, piece type) plus the side to move.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    by_piece: [[Bitboard; PIECE_TYPE_NB]; COLOR_NB],
    side_to_move: Color,
}

impl Board {
    /// A board with no pieces on it
    pub const fn empty(side_to_move: Color) -> Self {
        Self {
            by_piece: [[EMPTY; PIECE_TYPE_NB]; COLOR_NB],
            side_to_move,
        }
    }

    /// The standard initial position
    pub fn startpos() -> Self {
        // START_FEN is a compile-time constant known to parse
        match Self::from_fen(START_FEN) {
            Ok(board) => board,
            Err(e) => unreachable!("start position failed to parse: {e}"),
        }
    }

    /// Place a piece, replacing whatever stood on `sq`.
    pub fn put(&mut self, color: Color, pt: PieceType, sq: Square) {
        self.remove(sq);
        if pt != PieceType::NoPieceType {
            self.by_piece[color.index()][pt.index()] |= Bitboard::from_square(sq);
        }
    }

    /// Clear `sq`, returning the piece that stood there.
    pub fn remove(&mut self, sq: Square) -> Option<(Color, PieceType)> {
        let found = self.piece_on(sq)?;
        let (color, pt) = found;
        self.by_piece[color.index()][pt.index()] &= !Bitboard::from_square(sq);
        Some(found)
    }

    pub fn piece_on(&self, sq: Square) -> Option<(Color, PieceType)> {
        for color in Color::ALL {
            for pt in PieceType::ALL {
                if self.by_piece[color.index()][pt.index()].contains(sq) {
                    return Some((color, pt));
                }
            }
        }
        None
    }

    /// All squares holding a piece of `color`
    pub fn color_combined(&self, color: Color) -> Bitboard {
        self.by_piece[color.index()]
            .iter()
            .fold(EMPTY, |acc, &bb| acc | bb)
    }

    pub fn occupied(&self) -> Bitboard {
        self.color_combined(Color::Red) | self.color_combined(Color::Black)
    }

    pub fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    /// The same position seen from the other side: colors swapped, every rank
    /// reflected, and the other side to move.
    pub fn mirrored(&self) -> Self {
        let mut out = Board::empty(!self.side_to_move);
        for color in Color::ALL {
            for pt in PieceType::ALL {
                for sq in self.pieces(color, pt) {
                    out.put(!color, pt, sq.flip_rank());
                }
            }
        }
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::startpos()
    }
}

impl Position for Board {
    #[inline]
    fn pieces(&self, color: Color, pt: PieceType) -> Bitboard {
        self.by_piece[color.index()][pt.index()]
    }

    #[inline]
    fn king_square(&self, color: Color) -> Square {
        // Boards built from FEN always hold exactly one king per side
        self.pieces(color, PieceType::King)
            .lsb()
            .unwrap_or_default()
    }

    #[inline]
    fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    fn checkers(&self) -> Bitboard {
        let us = self.side_to_move;
        if self.pieces(us, PieceType::King).is_empty() {
            return EMPTY;
        }
        attackers_to(self, self.king_square(us), !us, self.occupied())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in 0..RANK_NB as u8 {
            write!(f, "{} ", RANK_NB as u8 - 1 - rank)?;
            for file in 0..FILE_NB as u8 {
                let c = match self.piece_on(Square::new(file, rank)) {
                    Some((color, pt)) => piece_char(color, pt),
                    None => '.',
                };
                write!(f, " {}", c)?;
            }
            writeln!(f)?;
        }
        writeln!(f, "   a b c d e f g h i")?;
        write!(f, "{} to move", match self.side_to_move {
            Color::Red => "red",
            Color::Black => "black",
        })
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self.to_fen())
    }
}

/// FEN letter for a piece: uppercase for Red
pub(crate) fn piece_char(color: Color, pt: PieceType) -> char {
    let c = pt.to_char().unwrap_or('?');
    match color {
        Color::Red => c.to_ascii_uppercase(),
        Color::Black => c,
    }
}
