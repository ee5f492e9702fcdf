//! Errors reported by the planner.
//!
//! All categories describe input the planner cannot satisfy, not internal faults.
//! Callers are expected to present them as configuration errors.

use std::fmt::{Display, Formatter};

use thiserror::Error;

use crate::entities::{Panel, SheetLayout};

/// Size of a piece or of the stock it should be cut from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Extent {
    Length(f32),
    Rect { width: f32, height: f32 },
}

impl Display for Extent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Extent::Length(l) => write!(f, "{l}"),
            Extent::Rect { width, height } => write!(f, "{width}x{height}"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlanError {
    /// A single requirement exceeds the capacity of the stock.
    #[error("piece '{id}' ({required}) does not fit in stock of {available}")]
    InfeasiblePiece {
        id: String,
        required: Extent,
        available: Extent,
    },

    /// The multi-sheet retry budget ran out with panels still outstanding.
    #[error("{} panel(s) could not be placed after {attempts} sheet attempt(s)", residual.len())]
    PackingExhausted {
        /// Sheet rounds actually run. A round that places nothing ends the loop early,
        /// so this can be lower than the budget.
        attempts: usize,
        /// Panels that were never placed
        residual: Vec<Panel>,
        /// Sheets filled before the budget ran out
        layout: SheetLayout,
    },

    /// Two contributions to the same stock entry disagree on the size of that stock.
    #[error("stock '{stock}' is {existing}, cannot add stock of {other} under the same name")]
    ConflictingStock {
        stock: String,
        existing: Extent,
        other: Extent,
    },
}

pub type Result<T> = std::result::Result<T, PlanError>;
