//! Score type returned by the evaluator.
//!
//! Handles regular centipawn scores and the mate sentinels reserved by the
//! search. Static evaluations are always clamped strictly inside the mate band.

use std::fmt;
use std::ops::{Add, Neg, Sub};

/// Maximum search ply the surrounding search can reach
pub const MAX_PLY: i32 = 246;

/// Special score values
pub const SCORE_DRAW: i32 = 0;
pub const SCORE_MATE: i32 = 32000;
pub const SCORE_INFINITY: i32 = 32001;

/// Mate score bounds. Anything at or beyond these is a forced mate.
pub const SCORE_MATE_IN_MAX_PLY: i32 = SCORE_MATE - MAX_PLY;
pub const SCORE_MATED_IN_MAX_PLY: i32 = -SCORE_MATE_IN_MAX_PLY;

/// A search/evaluation score.
///
/// Mate in N is encoded as `SCORE_MATE - N`, mated in N as `-SCORE_MATE + N`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct Score(pub i32);

impl Score {
    /// Create a new score from centipawns
    #[inline]
    pub const fn cp(centipawns: i32) -> Self {
        Score(centipawns)
    }

    /// Create a mate score (mate in N plies from root)
    #[inline]
    pub const fn mate_in(ply: i32) -> Self {
        Score(SCORE_MATE - ply)
    }

    /// Create a mated score (mated in N plies from root)
    #[inline]
    pub const fn mated_in(ply: i32) -> Self {
        Score(-SCORE_MATE + ply)
    }

    #[inline]
    pub const fn draw() -> Self {
        Score(SCORE_DRAW)
    }

    /// Saturate a heuristic value into the open interval between the mate
    /// bounds, so it can never be read as a forced mate.
    #[inline]
    pub const fn clamp_eval(v: i32) -> Self {
        const LO: i32 = SCORE_MATED_IN_MAX_PLY + 1;
        const HI: i32 = SCORE_MATE_IN_MAX_PLY - 1;
        if v < LO {
            Score(LO)
        } else if v > HI {
            Score(HI)
        } else {
            Score(v)
        }
    }

    #[inline]
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// Check if this is a mate score (winning)
    #[inline]
    pub const fn is_mate(self) -> bool {
        self.0 >= SCORE_MATE_IN_MAX_PLY
    }

    /// Check if this is a mated score (losing)
    #[inline]
    pub const fn is_mated(self) -> bool {
        self.0 <= SCORE_MATED_IN_MAX_PLY
    }

    #[inline]
    pub const fn is_mate_score(self) -> bool {
        self.is_mate() || self.is_mated()
    }

    /// Get mate distance in plies (if this is a mate score)
    #[inline]
    pub const fn mate_distance(self) -> Option<i32> {
        if self.is_mate() {
            Some(SCORE_MATE - self.0)
        } else if self.is_mated() {
            Some(self.0 + SCORE_MATE)
        } else {
            None
        }
    }
}

impl Add for Score {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Score(self.0 + rhs.0)
    }
}

impl Sub for Score {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Score(self.0 - rhs.0)
    }
}

impl Neg for Score {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Score(-self.0)
    }
}

impl From<i32> for Score {
    #[inline]
    fn from(v: i32) -> Self {
        Score(v)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_mate() {
            let moves = (SCORE_MATE - self.0 + 1) / 2;
            write!(f, "mate {}", moves)
        } else if self.is_mated() {
            let moves = (self.0 + SCORE_MATE + 1) / 2;
            write!(f, "mate -{}", moves)
        } else {
            write!(f, "cp {}", self.0)
        }
    }
}

impl fmt::Debug for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Score({})", self)
    }
}
