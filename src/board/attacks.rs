//! Attack detection under Xiangqi movement rules.
//!
//! Used only to answer "which enemy pieces give check", so it walks rays and
//! jump offsets from the target square instead of keeping attack tables.

use super::{Board, Position};
use crate::types::{Bitboard, Color, PieceType, Square, EMPTY, RIVER_RANK_BLACK};

const ORTHOGONAL: [(i8, i8); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

/// Knight offsets relative to the target, paired with the leg square relative
/// to the knight that must be empty for the jump.
const KNIGHT_JUMPS: [((i8, i8), (i8, i8)); 8] = [
    ((1, 2), (0, -1)),
    ((-1, 2), (0, -1)),
    ((1, -2), (0, 1)),
    ((-1, -2), (0, 1)),
    ((2, 1), (-1, 0)),
    ((2, -1), (-1, 0)),
    ((-2, 1), (1, 0)),
    ((-2, -1), (1, 0)),
];

/// Pieces of color `by` that attack `sq` given `occupied`.
///
/// Kings count as attackers along an open file (the facing-kings rule), so
/// the answer is exact when `sq` holds the opposing king.
pub fn attackers_to(board: &Board, sq: Square, by: Color, occupied: Bitboard) -> Bitboard {
    let mut attackers = EMPTY;
    let rooks = board.pieces(by, PieceType::Rook);
    let cannons = board.pieces(by, PieceType::Cannon);
    let king = board.pieces(by, PieceType::King);

    for (df, dr) in ORTHOGONAL {
        let mut screened = false;
        let mut cur = sq.offset(df, dr);
        while let Some(s) = cur {
            if occupied.contains(s) {
                let hit = Bitboard::from_square(s);
                if screened {
                    attackers |= hit & cannons;
                    break;
                }
                attackers |= hit & rooks;
                if df == 0 {
                    attackers |= hit & king;
                }
                screened = true;
            }
            cur = s.offset(df, dr);
        }
    }

    let knights = board.pieces(by, PieceType::Knight);
    for ((df, dr), (lf, lr)) in KNIGHT_JUMPS {
        let Some(from) = sq.offset(df, dr) else {
            continue;
        };
        if !knights.contains(from) {
            continue;
        }
        let blocked = from
            .offset(lf, lr)
            .map_or(true, |leg| occupied.contains(leg));
        if !blocked {
            attackers |= Bitboard::from_square(from);
        }
    }

    attackers | pawn_attackers(board, sq, by)
}

fn pawn_attackers(board: &Board, sq: Square, by: Color) -> Bitboard {
    let pawns = board.pieces(by, PieceType::Pawn);
    if pawns.is_empty() {
        return EMPTY;
    }

    // Red pawns advance toward rank 0, Black pawns toward rank 9
    let (behind, crossed) = match by {
        Color::Red => (1, sq.rank() <= RIVER_RANK_BLACK),
        Color::Black => (-1, sq.rank() > RIVER_RANK_BLACK),
    };

    let mut attackers = EMPTY;
    if let Some(from) = sq.offset(0, behind) {
        attackers |= Bitboard::from_square(from) & pawns;
    }
    if crossed {
        for df in [-1, 1] {
            if let Some(from) = sq.offset(df, 0) {
                attackers |= Bitboard::from_square(from) & pawns;
            }
        }
    }
    attackers
}
