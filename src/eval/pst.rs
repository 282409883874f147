//! Piece-square tables.
//!
//! Authored from Red's point of view with rank 0 at the top (Black's back
//! rank). Black pieces read the same tables through [`mirror_square`].

use crate::types::{PieceType, Square, Value, PIECE_TYPE_NB, SQUARE_NB};

pub type Table = [Value; SQUARE_NB];

// Pawn: rewards crossing the river and pushing toward the centre
#[rustfmt::skip]
const PAWN_PST: Table = [
     0,  0,  0,  0,  0,  0,  0,  0,  0,
     0,  0,  0,  0,  0,  0,  0,  0,  0,
     0,  0,  0, 10, 10, 10,  0,  0,  0,
     5,  5, 10, 20, 30, 20, 10,  5,  5,
    10, 10, 20, 30, 40, 30, 20, 10, 10,
    10, 10, 20, 30, 40, 30, 20, 10, 10,
     5,  5, 10, 20, 30, 20, 10,  5,  5,
     0,  0,  0, 10, 10, 10,  0,  0,  0,
     0,  0,  0,  0,  0,  0,  0,  0,  0,
     0,  0,  0,  0,  0,  0,  0,  0,  0,
];

// Rook: open central lines
#[rustfmt::skip]
const ROOK_PST: Table = [
    10, 15, 15, 20, 20, 20, 15, 15, 10,
    10, 15, 15, 20, 20, 20, 15, 15, 10,
    10, 15, 15, 20, 20, 20, 15, 15, 10,
    15, 20, 20, 25, 25, 25, 20, 20, 15,
    15, 20, 20, 25, 30, 25, 20, 20, 15,
    15, 20, 20, 25, 30, 25, 20, 20, 15,
    15, 20, 20, 25, 25, 25, 20, 20, 15,
    10, 15, 15, 20, 20, 20, 15, 15, 10,
    10, 15, 15, 20, 20, 20, 15, 15, 10,
    10, 15, 15, 20, 20, 20, 15, 15, 10,
];

// Knight: centralization, away from the edges
#[rustfmt::skip]
const KNIGHT_PST: Table = [
     0,  5,  5, 10, 10, 10,  5,  5,  0,
     5, 10, 15, 20, 20, 20, 15, 10,  5,
     5, 15, 20, 25, 25, 25, 20, 15,  5,
    10, 20, 25, 30, 35, 30, 25, 20, 10,
    10, 20, 25, 35, 40, 35, 25, 20, 10,
    10, 20, 25, 35, 40, 35, 25, 20, 10,
    10, 20, 25, 30, 35, 30, 25, 20, 10,
     5, 15, 20, 25, 25, 25, 20, 15,  5,
     5, 10, 15, 20, 20, 20, 15, 10,  5,
     0,  5,  5, 10, 10, 10,  5,  5,  0,
];

#[rustfmt::skip]
const CANNON_PST: Table = [
    10, 10, 10, 15, 15, 15, 10, 10, 10,
    10, 15, 15, 20, 20, 20, 15, 15, 10,
    10, 15, 15, 20, 20, 20, 15, 15, 10,
    15, 20, 20, 25, 30, 25, 20, 20, 15,
    15, 20, 25, 30, 35, 30, 25, 20, 15,
    15, 20, 25, 30, 35, 30, 25, 20, 15,
    15, 20, 20, 25, 30, 25, 20, 20, 15,
    10, 15, 15, 20, 20, 20, 15, 15, 10,
    10, 15, 15, 20, 20, 20, 15, 15, 10,
    10, 10, 10, 15, 15, 15, 10, 10, 10,
];

// Advisor: palace points only, centre preferred
#[rustfmt::skip]
const ADVISOR_PST: Table = [
     0,  0,  0,  0,  0,  0,  0,  0,  0,
     0,  0,  0,  0,  0,  0,  0,  0,  0,
     0,  0,  0,  0,  0,  0,  0,  0,  0,
     0,  0,  0,  0,  0,  0,  0,  0,  0,
     0,  0,  0,  0,  0,  0,  0,  0,  0,
     0,  0,  0,  0,  0,  0,  0,  0,  0,
     0,  0,  0,  0,  0,  0,  0,  0,  0,
     0,  0,  0, 10,  0, 10,  0,  0,  0,
     0,  0,  0,  0, 20,  0,  0,  0,  0,
     0,  0,  0, 10,  0, 10,  0,  0,  0,
];

// Bishop: never crosses the river
#[rustfmt::skip]
const BISHOP_PST: Table = [
     0,  0,  0,  0,  0,  0,  0,  0,  0,
     0,  0,  0,  0,  0,  0,  0,  0,  0,
     0,  0,  0,  0,  0,  0,  0,  0,  0,
     0,  0,  0,  0,  0,  0,  0,  0,  0,
     0,  0,  0,  0,  0,  0,  0,  0,  0,
     0,  0,  0,  0,  0,  0,  0,  0,  0,
     0,  0,  0,  0,  0,  0,  0,  0,  0,
     0,  0, 10,  0,  0,  0, 10,  0,  0,
     0,  0,  0,  0,  0,  0,  0,  0,  0,
     0,  0, 10,  0,  0,  0, 10,  0,  0,
];

#[rustfmt::skip]
const KING_PST: Table = [
     0,  0,  0, 10, 20, 10,  0,  0,  0,
     0,  0,  0, 20, 30, 20,  0,  0,  0,
     0,  0,  0, 10, 20, 10,  0,  0,  0,
     0,  0,  0,  0,  0,  0,  0,  0,  0,
     0,  0,  0,  0,  0,  0,  0,  0,  0,
     0,  0,  0,  0,  0,  0,  0,  0,  0,
     0,  0,  0,  0,  0,  0,  0,  0,  0,
     0,  0,  0, 10, 20, 10,  0,  0,  0,
     0,  0,  0, 20, 30, 20,  0,  0,  0,
     0,  0,  0, 10, 20, 10,  0,  0,  0,
];

/// Tables indexed by piece type ordinal. Slot 0 is the sentinel and has none.
static PIECE_SQUARE_TABLES: [Option<&Table>; PIECE_TYPE_NB] = [
    None,
    Some(&ROOK_PST),
    Some(&ADVISOR_PST),
    Some(&CANNON_PST),
    Some(&PAWN_PST),
    Some(&KNIGHT_PST),
    Some(&BISHOP_PST),
    Some(&KING_PST),
];

/// The table for `pt`, or `None` for the sentinel.
#[inline]
pub fn table(pt: PieceType) -> Option<&'static Table> {
    PIECE_SQUARE_TABLES[pt.index()]
}

/// Square whose Red-view table entry applies to a Black piece on `sq`.
#[inline]
pub const fn mirror_square(sq: Square) -> Square {
    sq.flip_rank()
}
