//! Hand-Crafted Evaluation (HCE) components.
//!
//! Each component reads the position and returns a score from Red's
//! perspective. They share no state and can be evaluated in any order.
//!
//! Features:
//! - Material
//! - Piece-Square Tables
//! - Mobility (approximated from piece composition)
//! - King safety (palace placement and advisor cover)
//! - Check penalty

use super::pst::{mirror_square, table};
use crate::board::Position;
use crate::types::{piece_value, Color, PieceType, Rank, Square, Value, FILE_E};

// ============================================================================
// MOBILITY
// ============================================================================

/// Typical number of destinations per piece type, used as a weight
#[inline]
const fn mobility_weight(pt: PieceType) -> Value {
    match pt {
        PieceType::Rook => 14,
        PieceType::Knight => 8,
        PieceType::Cannon => 10,
        PieceType::Pawn => 2,
        PieceType::Advisor => 4,
        PieceType::Bishop => 4,
        PieceType::King => 4,
        PieceType::NoPieceType => 0,
    }
}

pub const MOBILITY_FACTOR: Value = 3;

// ============================================================================
// KING SAFETY
// ============================================================================

/// Palace centre rank for each side (indexed by color)
const IDEAL_KING_RANK: [Rank; 2] = [8, 1];
pub const KING_SAFETY_SCALE: Value = 10;
pub const ADVISOR_GUARD_BONUS: Value = 15;

// ============================================================================
// TACTICS
// ============================================================================

pub const CHECK_PENALTY: Value = 50;

#[inline]
fn count<P: Position + ?Sized>(pos: &P, color: Color, pt: PieceType) -> Value {
    pos.pieces(color, pt).count() as Value
}

/// Piece counts weighted by base value, Red minus Black.
pub fn material<P: Position + ?Sized>(pos: &P) -> Value {
    let mut material = 0;
    for pt in PieceType::ALL {
        material += count(pos, Color::Red, pt) * piece_value(pt);
        material -= count(pos, Color::Black, pt) * piece_value(pt);
    }
    material
}

/// Sum of table bonuses. Black pieces read the table at the mirrored square.
pub fn positional<P: Position + ?Sized>(pos: &P) -> Value {
    let mut score = 0;
    for pt in PieceType::ALL {
        let Some(pst) = table(pt) else {
            continue;
        };
        for sq in pos.pieces(Color::Red, pt) {
            score += pst[sq.index()];
        }
        for sq in pos.pieces(Color::Black, pt) {
            score -= pst[mirror_square(sq).index()];
        }
    }
    score
}

/// Mobility estimate.
///
/// This does not enumerate moves: it multiplies each piece type's typical
/// mobility by how many of them a side owns. It therefore rewards a piece
/// composition that tends to be mobile, not actual freedom of movement on
/// this board. True mobility needs legal move generation and belongs in a
/// separate, heavier term.
pub fn mobility<P: Position + ?Sized>(pos: &P) -> Value {
    let mut mobility = 0;
    for pt in PieceType::ALL {
        let w = mobility_weight(pt);
        mobility += count(pos, Color::Red, pt) * w;
        mobility -= count(pos, Color::Black, pt) * w;
    }
    mobility * MOBILITY_FACTOR
}

/// Safety of one side's king, from that side's own point of view
fn king_safety_for<P: Position + ?Sized>(pos: &P, color: Color) -> Value {
    let ksq: Square = pos.king_square(color);
    let file_bonus = 2 - (ksq.file() as Value - FILE_E as Value).abs();
    let rank_bonus = 1 - (ksq.rank() as Value - IDEAL_KING_RANK[color.index()] as Value).abs();
    let mut safety = (file_bonus + rank_bonus) * KING_SAFETY_SCALE;

    // Presence test: one advisor earns the whole bonus
    if !pos.pieces(color, PieceType::Advisor).is_empty() {
        safety += ADVISOR_GUARD_BONUS;
    }
    safety
}

/// King placement relative to the palace centre plus advisor cover,
/// Red minus Black.
pub fn king_safety<P: Position + ?Sized>(pos: &P) -> Value {
    king_safety_for(pos, Color::Red) - king_safety_for(pos, Color::Black)
}

/// Flat penalty for the side currently in check.
///
/// Only the side to move can be in check, so the checked side is the mover;
/// the sign follows that side's color, not the perspective of the caller.
/// Threats against other pieces are not scored here.
pub fn tactics<P: Position + ?Sized>(pos: &P) -> Value {
    if pos.checkers().is_empty() {
        return 0;
    }
    match pos.side_to_move() {
        Color::Red => -CHECK_PENALTY,
        Color::Black => CHECK_PENALTY,
    }
}
