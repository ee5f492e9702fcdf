use std::time::Instant;

use log::{debug, info};

use crate::entities::{CutRequirement, Cutlist, Piece, RequirementSet};
use crate::error::{Extent, PlanError, Result};
use crate::linear::CutStrategy;
use crate::util::FPA;
use crate::util::assertions::{boards_within_capacity, cutlist_covers_pieces};

/// Assigns linear pieces to boards of a fixed stock length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CuttingStockSolver {
    pub stock_length: f32,
    /// Material removed by every saw cut that separates a piece from the remaining stock
    pub kerf: f32,
}

impl CuttingStockSolver {
    pub fn new(stock_length: f32) -> Self {
        assert!(stock_length > 0.0, "stock length must be positive");
        Self {
            stock_length,
            kerf: 0.0,
        }
    }

    pub fn with_kerf(mut self, kerf: f32) -> Self {
        assert!(kerf >= 0.0, "kerf cannot be negative");
        self.kerf = kerf;
        self
    }

    /// Expands the requirements and packs every piece using `strategy`.
    ///
    /// Fails with [`PlanError::InfeasiblePiece`] if any piece is longer than the stock,
    /// in which case nothing is packed.
    pub fn solve(
        &self,
        requirements: &RequirementSet<CutRequirement>,
        strategy: &dyn CutStrategy,
    ) -> Result<Cutlist> {
        let start = Instant::now();
        let pieces = self.validated_pieces(requirements)?;
        let n_pieces = pieces.len();

        let boards = match pieces.is_empty() {
            true => vec![],
            false => strategy.pack(pieces.clone(), self.stock_length, self.kerf),
        };
        let cutlist = Cutlist::new(self.stock_length, self.kerf, strategy.name(), boards);

        debug_assert!(boards_within_capacity(&cutlist));
        debug_assert!(cutlist_covers_pieces(&cutlist, &pieces));

        info!(
            "[CSS] {}: {} pieces on {} board(s) of {}, usage {:.1}% ({:.3}ms)",
            strategy.name(),
            n_pieces,
            cutlist.n_boards(),
            self.stock_length,
            cutlist.usage() * 100.0,
            start.elapsed().as_secs_f64() * 1000.0
        );

        Ok(cutlist)
    }

    fn validated_pieces(
        &self,
        requirements: &RequirementSet<CutRequirement>,
    ) -> Result<Vec<Piece>> {
        if let Some(req) = requirements
            .iter()
            .find(|r| r.quantity > 0 && !FPA(r.length).fits_in(self.stock_length))
        {
            debug!(
                "[CSS] piece {} of length {} exceeds stock length {}",
                req.id, req.length, self.stock_length
            );
            return Err(PlanError::InfeasiblePiece {
                id: req.id.clone(),
                required: Extent::Length(req.length),
                available: Extent::Length(self.stock_length),
            });
        }
        Ok(requirements.expand())
    }
}

/// Packs `requirements` onto boards of `stock_length` with the given `kerf` and `strategy`.
pub fn solve(
    requirements: &RequirementSet<CutRequirement>,
    stock_length: f32,
    kerf: f32,
    strategy: &dyn CutStrategy,
) -> Result<Cutlist> {
    CuttingStockSolver::new(stock_length)
        .with_kerf(kerf)
        .solve(requirements, strategy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linear::Strategy;

    #[test]
    fn empty_requirements_need_no_boards() {
        let cutlist =
            solve(&RequirementSet::default(), 96.0, 0.125, &Strategy::LengthFirst).unwrap();
        assert!(cutlist.is_empty());
        assert_eq!(cutlist.strategy(), "LENGTH_FIRST");
    }

    #[test]
    fn oversized_piece_yields_no_partial_result() {
        let reqs = RequirementSet::from(vec![
            CutRequirement::new(40.0, 3, "ok"),
            CutRequirement::single(96.5, "too_long"),
        ]);
        let err = solve(&reqs, 96.0, 0.0, &Strategy::MinWaste).unwrap_err();
        assert_eq!(
            err,
            PlanError::InfeasiblePiece {
                id: "too_long".into(),
                required: Extent::Length(96.5),
                available: Extent::Length(96.0),
            }
        );
    }

    #[test]
    fn zero_quantity_oversized_piece_is_ignored() {
        let reqs = RequirementSet::from(vec![
            CutRequirement::new(120.0, 0, "unused"),
            CutRequirement::single(30.0, "a"),
        ]);
        let cutlist = solve(&reqs, 96.0, 0.0, &Strategy::LengthFirst).unwrap();
        assert_eq!(cutlist.n_boards(), 1);
    }
}
