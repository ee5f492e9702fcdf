use std::fmt::{Display, Formatter};

use log::trace;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::entities::{Board, Piece};

/// A heuristic assigning pieces to boards.
///
/// Implementors receive every piece in input order, already checked to fit on an empty board,
/// and must return non-empty boards that together hold each piece exactly once.
pub trait CutStrategy: Send + Sync {
    fn name(&self) -> &str;

    fn pack(&self, pieces: Vec<Piece>, stock_length: f32, kerf: f32) -> Vec<Board>;
}

/// The built-in heuristics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Strategy {
    /// First-fit decreasing: longest pieces first, each into the first board it fits on
    #[default]
    LengthFirst,
    /// Best-fit decreasing: longest pieces first, each into the board it leaves the least offcut on
    MinWaste,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::LengthFirst, Strategy::MinWaste];
}

impl CutStrategy for Strategy {
    fn name(&self) -> &str {
        match self {
            Strategy::LengthFirst => "LENGTH_FIRST",
            Strategy::MinWaste => "MIN_WASTE",
        }
    }

    fn pack(&self, pieces: Vec<Piece>, stock_length: f32, kerf: f32) -> Vec<Board> {
        match self {
            Strategy::LengthFirst => first_fit_decreasing(pieces, stock_length, kerf),
            Strategy::MinWaste => best_fit_decreasing(pieces, stock_length, kerf),
        }
    }
}

impl Display for Strategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Adapts a plain function or closure into a [`CutStrategy`].
pub struct FnStrategy<F> {
    name: String,
    f: F,
}

impl<F> FnStrategy<F>
where
    F: Fn(Vec<Piece>, f32, f32) -> Vec<Board> + Send + Sync,
{
    pub fn new(name: impl Into<String>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
        }
    }
}

impl<F> CutStrategy for FnStrategy<F>
where
    F: Fn(Vec<Piece>, f32, f32) -> Vec<Board> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn pack(&self, pieces: Vec<Piece>, stock_length: f32, kerf: f32) -> Vec<Board> {
        (self.f)(pieces, stock_length, kerf)
    }
}

/// Sorts pieces by length, longest first. Equal lengths keep their input order.
pub fn sort_descending(mut pieces: Vec<Piece>) -> Vec<Piece> {
    pieces.sort_by(|a, b| b.length.total_cmp(&a.length));
    pieces
}

pub fn first_fit_decreasing(pieces: Vec<Piece>, stock_length: f32, kerf: f32) -> Vec<Board> {
    let mut boards: Vec<Board> = vec![];
    for piece in sort_descending(pieces) {
        match boards.iter().position(|b| b.fits(piece.length)) {
            Some(i) => {
                trace!("[FFD] {} ({}) -> board {}", piece.id, piece.length, i);
                boards[i].push(piece);
            }
            None => {
                trace!("[FFD] {} ({}) -> new board {}", piece.id, piece.length, boards.len());
                let mut board = Board::new(stock_length, kerf);
                board.push(piece);
                boards.push(board);
            }
        }
    }
    boards
}

pub fn best_fit_decreasing(pieces: Vec<Piece>, stock_length: f32, kerf: f32) -> Vec<Board> {
    let mut boards: Vec<Board> = vec![];
    for piece in sort_descending(pieces) {
        //tightest fit, lowest board index on ties
        let best = boards
            .iter()
            .enumerate()
            .filter_map(|(i, b)| b.leftover_after(piece.length).map(|l| (i, l)))
            .min_by_key(|(_, leftover)| OrderedFloat(*leftover));

        match best {
            Some((i, leftover)) => {
                trace!(
                    "[BFD] {} ({}) -> board {}, {} left",
                    piece.id, piece.length, i, leftover
                );
                boards[i].push(piece);
            }
            None => {
                trace!("[BFD] {} ({}) -> new board {}", piece.id, piece.length, boards.len());
                let mut board = Board::new(stock_length, kerf);
                board.push(piece);
                boards.push(board);
            }
        }
    }
    boards
}
