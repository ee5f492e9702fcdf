//! Purchase and cut planning for dimensional lumber and sheet goods.
//!
//! Linear pieces are assigned to standard-length boards by a 1D cutting-stock solver
//! ([`linear`]), rectangular panels are packed onto standard-size sheets ([`sheet_goods`]).
//! Both return plain result values that a caller annotates and formats.

/// Entities shared by all components: requirements, boards, sheets and jobs.
pub mod entities;

/// Error taxonomy of the planner.
pub mod error;

/// Cutting-stock solver and strategy selection for linear stock.
pub mod linear;

/// Rectangle packer and multi-sheet allocation for sheet goods.
pub mod sheet_goods;

/// Aggregation of results into a bill of materials and whole-job planning.
pub mod plan;

/// Configuration of the [`Planner`](plan::Planner).
pub mod config;

/// Importing and exporting jobs and plans from and to an external representation.
pub mod io;

/// Helper functions which do not belong to any specific module.
pub mod util;

#[doc(inline)]
pub use error::{PlanError, Result};
