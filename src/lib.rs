//! Static evaluation for Xiangqi (Chinese chess) positions.
//!
//! # Architecture
//! - `types`: squares, occupancy sets, sides, piece types, scores
//! - `board`: the [`Position`] interface the evaluator reads and a bitboard
//!   [`Board`] implementing it (FEN, check detection)
//! - `eval`: piece-square tables, the five hand-crafted components and the
//!   [`evaluate`] entry point
//!
//! # Usage
//!
//! ```
//! use xiangqi_eval::{evaluate, Board};
//!
//! let board = Board::startpos();
//! let score = evaluate(&board);
//! assert_eq!(score.raw(), 0);
//! ```

pub mod board;
pub mod eval;
pub mod types;

pub use board::{Board, FenError, Position, START_FEN};
pub use eval::{evaluate, trace, EvalTrace};
pub use types::{Bitboard, Color, PieceType, Score, Square, Value};
