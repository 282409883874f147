//! Board geometry: files, ranks and squares on the 9x10 grid.
//!
//! Square 0 is the top-left corner (Black's back rank, file A); square 89 is
//! the bottom-right corner (Red's back rank, file I).

use std::fmt;

pub type File = u8;
pub type Rank = u8;

pub const FILE_NB: usize = 9;
pub const RANK_NB: usize = 10;
pub const SQUARE_NB: usize = FILE_NB * RANK_NB;

pub const FILE_A: File = 0;
pub const FILE_E: File = 4;
pub const FILE_I: File = 8;

/// Last rank on Black's half of the board. Ranks above it belong to Red.
pub const RIVER_RANK_BLACK: Rank = 4;

/// A square index in `0..90`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct Square(u8);

impl Square {
    /// Build a square from file and rank. Both must be on the board.
    #[inline]
    pub const fn new(file: File, rank: Rank) -> Self {
        debug_assert!((file as usize) < FILE_NB && (rank as usize) < RANK_NB);
        Square(rank * FILE_NB as u8 + file)
    }

    #[inline]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < SQUARE_NB {
            Some(Square(index as u8))
        } else {
            None
        }
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn file(self) -> File {
        self.0 % FILE_NB as u8
    }

    #[inline]
    pub const fn rank(self) -> Rank {
        self.0 / FILE_NB as u8
    }

    /// Step by a file/rank delta, or `None` when that leaves the board.
    #[inline]
    pub const fn offset(self, df: i8, dr: i8) -> Option<Self> {
        let f = self.file() as i8 + df;
        let r = self.rank() as i8 + dr;
        if f < 0 || f >= FILE_NB as i8 || r < 0 || r >= RANK_NB as i8 {
            None
        } else {
            Some(Square::new(f as File, r as Rank))
        }
    }

    /// Reflect across the river, keeping the file. Applying it twice is the
    /// identity.
    #[inline]
    pub const fn flip_rank(self) -> Self {
        Square::new(self.file(), (RANK_NB as u8 - 1) - self.rank())
    }

    /// Iterate over all 90 squares in index order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..SQUARE_NB as u8).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Ranks are numbered from Red's back rank in algebraic notation
        let file = (b'a' + self.file()) as char;
        write!(f, "{}{}", file, RANK_NB as u8 - 1 - self.rank())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_rank_roundtrip() {
        let sq = Square::new(FILE_E, 8);
        assert_eq!(sq.index(), 76);
        assert_eq!(sq.file(), FILE_E);
        assert_eq!(sq.rank(), 8);
    }

    #[test]
    fn test_flip_rank_is_involution() {
        for sq in Square::all() {
            assert_eq!(sq.flip_rank().flip_rank(), sq);
            assert_eq!(sq.flip_rank().file(), sq.file());
        }
    }

    #[test]
    fn test_flip_rank_corners() {
        assert_eq!(Square::new(FILE_A, 0).flip_rank(), Square::new(FILE_A, 9));
        assert_eq!(Square::new(FILE_I, 4).flip_rank(), Square::new(FILE_I, 5));
    }

    #[test]
    fn test_offset_edges() {
        let corner = Square::new(FILE_A, 0);
        assert_eq!(corner.offset(-1, 0), None);
        assert_eq!(corner.offset(0, -1), None);
        assert_eq!(corner.offset(1, 2), Some(Square::new(1, 2)));
        assert_eq!(Square::new(FILE_I, 9).offset(0, 1), None);
    }

    #[test]
    fn test_from_index_bounds() {
        assert!(Square::from_index(89).is_some());
        assert!(Square::from_index(90).is_none());
    }

    #[test]
    fn test_display() {
        assert_eq!(Square::new(FILE_E, 9).to_string(), "e0");
        assert_eq!(Square::new(FILE_A, 0).to_string(), "a9");
    }
}
