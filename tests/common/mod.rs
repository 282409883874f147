//! Shared helpers for integration tests.

#![allow(dead_code)]

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use xiangqi_eval::types::{FILE_E, SQUARE_NB};
use xiangqi_eval::{Bitboard, Board, Color, PieceType, Position, Square};

pub const SEED: u64 = 0x5eed_c0de;

pub fn rng() -> SmallRng {
    SmallRng::seed_from_u64(SEED)
}

/// Random palace square for `color`
fn palace_square(rng: &mut SmallRng, color: Color) -> Square {
    let file = FILE_E - 1 + rng.gen_range(0..3u8);
    let rank = match color {
        Color::Red => rng.gen_range(7..10u8),
        Color::Black => rng.gen_range(0..3u8),
    };
    Square::new(file, rank)
}

/// A syntactically valid board: one king per side inside its palace plus up
/// to `max_extra` other pieces dropped on random empty squares. No legality
/// beyond that is enforced.
pub fn random_board(rng: &mut SmallRng, max_extra: usize) -> Board {
    let side = if rng.gen_bool(0.5) { Color::Red } else { Color::Black };
    let mut board = Board::empty(side);
    board.put(Color::Red, PieceType::King, palace_square(rng, Color::Red));
    board.put(Color::Black, PieceType::King, palace_square(rng, Color::Black));

    let extra = rng.gen_range(0..=max_extra);
    let non_king = &PieceType::ALL[..PieceType::ALL.len() - 1];
    for _ in 0..extra {
        let sq = Square::from_index(rng.gen_range(0..SQUARE_NB)).unwrap();
        if board.piece_on(sq).is_some() {
            continue;
        }
        let color = if rng.gen_bool(0.5) { Color::Red } else { Color::Black };
        let pt = non_king[rng.gen_range(0..non_king.len())];
        board.put(color, pt, sq);
    }
    board
}

/// Wraps a board and overrides whether the side to move is in check, so a
/// check and a no-check position can share identical placement.
pub struct ForcedCheck<'a> {
    pub board: &'a Board,
    pub in_check: bool,
}

impl Position for ForcedCheck<'_> {
    fn pieces(&self, color: Color, pt: PieceType) -> Bitboard {
        self.board.pieces(color, pt)
    }

    fn king_square(&self, color: Color) -> Square {
        self.board.king_square(color)
    }

    fn side_to_move(&self) -> Color {
        self.board.side_to_move()
    }

    fn checkers(&self) -> Bitboard {
        if self.in_check {
            // Any square will do; only emptiness is observed
            Bitboard::from_square(self.board.king_square(!self.board.side_to_move()))
        } else {
            xiangqi_eval::types::EMPTY
        }
    }
}
