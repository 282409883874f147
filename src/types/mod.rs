//! Core types for the Xiangqi evaluator.
//!
//! # Design Principles
//! - Closed enums for sides and piece types, usable directly as array indices
//! - Square and occupancy types sized for the 9x10 board
//! - Engine-specific `Score` with the mate sentinels the search relies on

mod bitboard;
mod score;
mod square;

pub use bitboard::{Bitboard, SquareIter, EMPTY};
pub use score::{
    Score, MAX_PLY, SCORE_DRAW, SCORE_INFINITY, SCORE_MATE, SCORE_MATED_IN_MAX_PLY,
    SCORE_MATE_IN_MAX_PLY,
};
pub use square::{
    File, Rank, Square, FILE_A, FILE_E, FILE_I, FILE_NB, RANK_NB, RIVER_RANK_BLACK, SQUARE_NB,
};

use std::ops::Not;

/// Centipawn value type (for piece values, table entries, components)
pub type Value = i32;

/// One of the two sides. Red moves first and sits on ranks 7-9.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[repr(u8)]
pub enum Color {
    Red = 0,
    Black = 1,
}

pub const COLOR_NB: usize = 2;

impl Color {
    pub const ALL: [Color; COLOR_NB] = [Color::Red, Color::Black];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl Not for Color {
    type Output = Color;
    #[inline]
    fn not(self) -> Color {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }
}

/// Piece types in ordinal order. `NoPieceType` only guards array slot 0.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[repr(u8)]
pub enum PieceType {
    NoPieceType = 0,
    Rook = 1,
    Advisor = 2,
    Cannon = 3,
    Pawn = 4,
    Knight = 5,
    Bishop = 6,
    King = 7,
}

pub const PIECE_TYPE_NB: usize = 8;

impl PieceType {
    /// Every real piece type, sentinel excluded
    pub const ALL: [PieceType; 7] = [
        PieceType::Rook,
        PieceType::Advisor,
        PieceType::Cannon,
        PieceType::Pawn,
        PieceType::Knight,
        PieceType::Bishop,
        PieceType::King,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lowercase FEN letter. The sentinel has none.
    pub const fn to_char(self) -> Option<char> {
        match self {
            PieceType::NoPieceType => None,
            PieceType::Rook => Some('r'),
            PieceType::Advisor => Some('a'),
            PieceType::Cannon => Some('c'),
            PieceType::Pawn => Some('p'),
            PieceType::Knight => Some('n'),
            PieceType::Bishop => Some('b'),
            PieceType::King => Some('k'),
        }
    }

    /// Parse a FEN letter (either case). `h`/`e` are accepted for knight/bishop.
    pub const fn from_char(c: char) -> Option<PieceType> {
        match c.to_ascii_lowercase() {
            'r' => Some(PieceType::Rook),
            'a' => Some(PieceType::Advisor),
            'c' => Some(PieceType::Cannon),
            'p' => Some(PieceType::Pawn),
            'n' | 'h' => Some(PieceType::Knight),
            'b' | 'e' => Some(PieceType::Bishop),
            'k' => Some(PieceType::King),
            _ => None,
        }
    }
}

// Piece base values
pub const ROOK_VALUE: Value = 1300;
pub const ADVISOR_VALUE: Value = 220;
pub const CANNON_VALUE: Value = 770;
pub const PAWN_VALUE: Value = 144;
pub const KNIGHT_VALUE: Value = 720;
pub const BISHOP_VALUE: Value = 190;
// Kings are never traded, so they carry no material
pub const KING_VALUE: Value = 0;

/// Get the material value of a piece type
#[inline]
pub const fn piece_value(pt: PieceType) -> Value {
    match pt {
        PieceType::NoPieceType => 0,
        PieceType::Rook => ROOK_VALUE,
        PieceType::Advisor => ADVISOR_VALUE,
        PieceType::Cannon => CANNON_VALUE,
        PieceType::Pawn => PAWN_VALUE,
        PieceType::Knight => KNIGHT_VALUE,
        PieceType::Bishop => BISHOP_VALUE,
        PieceType::King => KING_VALUE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_ordinals() {
        assert_eq!(PieceType::NoPieceType.index(), 0);
        assert_eq!(PieceType::King.index(), PIECE_TYPE_NB - 1);
        for (i, pt) in PieceType::ALL.iter().enumerate() {
            assert_eq!(pt.index(), i + 1);
        }
    }

    #[test]
    fn test_fen_letters() {
        for pt in PieceType::ALL {
            let c = pt.to_char().unwrap();
            assert_eq!(PieceType::from_char(c), Some(pt));
            assert_eq!(PieceType::from_char(c.to_ascii_uppercase()), Some(pt));
        }
        assert_eq!(PieceType::from_char('H'), Some(PieceType::Knight));
        assert_eq!(PieceType::from_char('e'), Some(PieceType::Bishop));
        assert_eq!(PieceType::from_char('q'), None);
    }

    #[test]
    fn test_color_not() {
        assert_eq!(!Color::Red, Color::Black);
        assert_eq!(!!Color::Black, Color::Black);
    }
}
