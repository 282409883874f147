//! Board evaluation module.
//!
//! Static, search-free evaluation built from five independent components.
//! Every component is computed from Red's perspective; the sign is flipped
//! once, at the end, for the side to move.

pub mod hce;
pub mod pst;

pub use pst::mirror_square;

use crate::board::Position;
use crate::types::{Color, Score, Value};
use std::fmt;

/// Sum of all components from Red's perspective, before the side-to-move
/// flip and clamp.
#[inline]
pub fn red_score<P: Position + ?Sized>(pos: &P) -> Value {
    hce::material(pos)
        + hce::positional(pos)
        + hce::mobility(pos)
        + hce::king_safety(pos)
        + hce::tactics(pos)
}

/// Evaluate the position from the side to move's perspective.
///
/// The result always lies strictly between the mate bounds.
#[inline]
pub fn evaluate<P: Position + ?Sized>(pos: &P) -> Score {
    to_mover(red_score(pos), pos.side_to_move())
}

#[inline]
fn to_mover(red: Value, side_to_move: Color) -> Score {
    let score = match side_to_move {
        Color::Red => red,
        Color::Black => -red,
    };
    Score::clamp_eval(score)
}

/// Per-component breakdown of one evaluation, for debugging and tuning output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalTrace {
    pub material: Value,
    pub positional: Value,
    pub mobility: Value,
    pub king_safety: Value,
    pub tactics: Value,
    pub side_to_move: Color,
}

impl EvalTrace {
    /// Sum of the components from Red's perspective
    pub fn total(&self) -> Value {
        self.material + self.positional + self.mobility + self.king_safety + self.tactics
    }

    /// Final score, identical to what [`evaluate`] returns
    pub fn score(&self) -> Score {
        to_mover(self.total(), self.side_to_move)
    }
}

/// Evaluate and keep every component.
pub fn trace<P: Position + ?Sized>(pos: &P) -> EvalTrace {
    let t = EvalTrace {
        material: hce::material(pos),
        positional: hce::positional(pos),
        mobility: hce::mobility(pos),
        king_safety: hce::king_safety(pos),
        tactics: hce::tactics(pos),
        side_to_move: pos.side_to_move(),
    };
    log::debug!(
        "eval trace: material={} positional={} mobility={} king_safety={} tactics={} -> {}",
        t.material,
        t.positional,
        t.mobility,
        t.king_safety,
        t.tactics,
        t.score()
    );
    t
}

impl fmt::Display for EvalTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "     Term    |  Red view")?;
        writeln!(f, "-------------+----------")?;
        writeln!(f, " Material    | {:>8}", self.material)?;
        writeln!(f, " Positional  | {:>8}", self.positional)?;
        writeln!(f, " Mobility    | {:>8}", self.mobility)?;
        writeln!(f, " King safety | {:>8}", self.king_safety)?;
        writeln!(f, " Tactics     | {:>8}", self.tactics)?;
        writeln!(f, "-------------+----------")?;
        writeln!(f, " Total       | {:>8}", self.total())?;
        write!(f, "Final evaluation ({:?} to move): {}", self.side_to_move, self.score())
    }
}
