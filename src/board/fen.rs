//! Xiangqi FEN reading and writing.
//!
//! Ranks are listed from Black's back rank down to Red's, matching the square
//! layout. Only the placement and side fields are used; move counters are
//! accepted and ignored.

use super::{piece_char, Board, Position};
use crate::types::{Color, PieceType, Square, FILE_NB, RANK_NB};
use std::str::FromStr;
use thiserror::Error;

pub const START_FEN: &str =
    "rnbakabnr/9/1c5c1/p1p1p1p1p/9/9/P1P1P1P1P/1C5C1/9/RNBAKABNR w - - 0 1";

/// Errors produced while parsing a FEN string
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    #[error("empty FEN string")]
    Empty,

    #[error("expected {expected} ranks, found {found}")]
    RankCount { expected: usize, found: usize },

    #[error("rank {rank} describes {files} files (must be 9)")]
    RankWidth { rank: usize, files: usize },

    #[error("unknown piece letter '{letter}' in rank {rank}")]
    UnknownPiece { letter: char, rank: usize },

    #[error("unknown side to move '{0}'")]
    UnknownSide(String),

    #[error("{color:?} has {count} kings (must be exactly 1)")]
    KingCount { color: Color, count: u32 },
}

impl Board {
    /// Parse a position from FEN.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let mut fields = fen.split_whitespace();
        let placement = fields.next().ok_or(FenError::Empty)?;

        let side = match fields.next() {
            None | Some("w") | Some("r") => Color::Red,
            Some("b") => Color::Black,
            Some(other) => return Err(FenError::UnknownSide(other.to_string())),
        };

        let rows: Vec<&str> = placement.split('/').collect();
        if rows.len() != RANK_NB {
            return Err(FenError::RankCount {
                expected: RANK_NB,
                found: rows.len(),
            });
        }

        let mut board = Board::empty(side);
        for (rank, row) in rows.iter().enumerate() {
            let mut file = 0usize;
            for c in row.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as usize;
                    continue;
                }
                let pt = PieceType::from_char(c)
                    .ok_or(FenError::UnknownPiece { letter: c, rank })?;
                if file >= FILE_NB {
                    return Err(FenError::RankWidth { rank, files: file + 1 });
                }
                let color = if c.is_ascii_uppercase() {
                    Color::Red
                } else {
                    Color::Black
                };
                board.put(color, pt, Square::new(file as u8, rank as u8));
                file += 1;
            }
            if file != FILE_NB {
                return Err(FenError::RankWidth { rank, files: file });
            }
        }

        for color in Color::ALL {
            let count = board.pieces(color, PieceType::King).count();
            if count != 1 {
                return Err(FenError::KingCount { color, count });
            }
        }

        log::trace!("parsed FEN {:?}", fen);
        Ok(board)
    }

    /// Serialize to FEN with an empty move-counter trailer.
    pub fn to_fen(&self) -> String {
        let mut out = String::with_capacity(64);
        for rank in 0..RANK_NB as u8 {
            if rank > 0 {
                out.push('/');
            }
            let mut empty = 0u8;
            for file in 0..FILE_NB as u8 {
                match self.piece_on(Square::new(file, rank)) {
                    Some((color, pt)) => {
                        if empty > 0 {
                            out.push((b'0' + empty) as char);
                            empty = 0;
                        }
                        out.push(piece_char(color, pt));
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push((b'0' + empty) as char);
            }
        }
        out.push_str(match self.side_to_move() {
            Color::Red => " w",
            Color::Black => " b",
        });
        out.push_str(" - - 0 1");
        out
    }
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_fen(s)
    }
}
