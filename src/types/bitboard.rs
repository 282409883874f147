//! Occupancy set over the 90 board squares.

use super::square::{Square, SQUARE_NB};
use std::fmt;
use std::iter::FusedIterator;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, Not};

/// Mask of the squares that exist on the board
const BOARD_MASK: u128 = (1u128 << SQUARE_NB) - 1;

/// A set of squares, one bit per square index.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Bitboard(pub u128);

pub const EMPTY: Bitboard = Bitboard(0);

impl Bitboard {
    #[inline]
    pub const fn from_square(sq: Square) -> Self {
        Bitboard(1u128 << sq.index())
    }

    #[inline]
    pub const fn contains(self, sq: Square) -> bool {
        self.0 & (1u128 << sq.index()) != 0
    }

    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Lowest-index square in the set
    #[inline]
    pub const fn lsb(self) -> Option<Square> {
        if self.0 == 0 {
            None
        } else {
            Square::from_index(self.0.trailing_zeros() as usize)
        }
    }
}

/// Square iterator that pops the lowest set bit each step.
pub struct SquareIter(u128);

impl Iterator for SquareIter {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        if self.0 == 0 {
            return None;
        }
        let idx = self.0.trailing_zeros() as usize;
        self.0 &= self.0 - 1;
        Square::from_index(idx)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for SquareIter {}
impl FusedIterator for SquareIter {}

impl IntoIterator for Bitboard {
    type Item = Square;
    type IntoIter = SquareIter;

    #[inline]
    fn into_iter(self) -> SquareIter {
        SquareIter(self.0)
    }
}

impl BitOr for Bitboard {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Bitboard(self.0 | rhs.0)
    }
}

impl BitAnd for Bitboard {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Bitboard(self.0 & rhs.0)
    }
}

impl BitXor for Bitboard {
    type Output = Self;
    #[inline]
    fn bitxor(self, rhs: Self) -> Self {
        Bitboard(self.0 ^ rhs.0)
    }
}

impl Not for Bitboard {
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        Bitboard(!self.0 & BOARD_MASK)
    }
}

impl BitOrAssign for Bitboard {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAndAssign for Bitboard {
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl fmt::Debug for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(*self).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iteration_order_and_count() {
        let a = Square::new(0, 0);
        let b = Square::new(4, 5);
        let c = Square::new(8, 9);
        let bb = Bitboard::from_square(c) | Bitboard::from_square(a) | Bitboard::from_square(b);
        assert_eq!(bb.count(), 3);
        let squares: Vec<Square> = bb.into_iter().collect();
        assert_eq!(squares, vec![a, b, c]);
        assert_eq!(bb.lsb(), Some(a));
    }

    #[test]
    fn test_not_stays_on_board() {
        let full = !EMPTY;
        assert_eq!(full.count(), SQUARE_NB as u32);
        assert!((!full).is_empty());
    }

    #[test]
    fn test_contains() {
        let sq = Square::new(3, 7);
        let bb = Bitboard::from_square(sq);
        assert!(bb.contains(sq));
        assert!(!bb.contains(Square::new(3, 6)));
        assert_eq!(EMPTY.lsb(), None);
    }
}
