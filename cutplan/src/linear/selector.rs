use log::{debug, info, warn};

use crate::entities::{CutRequirement, Cutlist, RequirementSet};
use crate::error::Result;
use crate::linear::{CutStrategy, CuttingStockSolver, Strategy};

/// Runs several strategies on the same requirements and keeps the cutlist with the fewest boards.
///
/// Board count (purchase cost) is the only criterion. On a tie the earliest registered strategy wins,
/// which makes the outcome deterministic.
pub struct StrategySelector {
    strategies: Vec<Box<dyn CutStrategy>>,
}

impl StrategySelector {
    /// A selector without any strategies, see [`StrategySelector::register`].
    /// Selecting from it falls back to the default strategies.
    pub fn empty() -> Self {
        Self { strategies: vec![] }
    }

    pub fn from_strategies(strategies: impl IntoIterator<Item = Strategy>) -> Self {
        let mut selector = Self::empty();
        for s in strategies {
            selector = selector.register(s);
        }
        selector
    }

    pub fn register(mut self, strategy: impl CutStrategy + 'static) -> Self {
        self.strategies.push(Box::new(strategy));
        self
    }

    pub fn strategy_names(&self) -> impl Iterator<Item = &str> {
        self.strategies.iter().map(|s| s.name())
    }

    pub fn select_best(
        &self,
        requirements: &RequirementSet<CutRequirement>,
        stock_length: f32,
        kerf: f32,
    ) -> Result<Cutlist> {
        let Some((first, rest)) = self.strategies.split_first() else {
            warn!("[SEL] no strategies registered, falling back to the defaults");
            return Self::default().select_best(requirements, stock_length, kerf);
        };
        let solver = CuttingStockSolver::new(stock_length).with_kerf(kerf);

        let mut best = solver.solve(requirements, first.as_ref())?;
        for strategy in rest {
            let candidate = solver.solve(requirements, strategy.as_ref())?;
            debug!(
                "[SEL] {} needs {} board(s) vs {} for {}",
                candidate.strategy(),
                candidate.n_boards(),
                best.n_boards(),
                best.strategy()
            );
            if candidate.n_boards() < best.n_boards() {
                best = candidate;
            }
        }

        info!(
            "[SEL] selected {} with {} board(s)",
            best.strategy(),
            best.n_boards()
        );
        Ok(best)
    }
}

impl Default for StrategySelector {
    /// [`Strategy::LengthFirst`] followed by [`Strategy::MinWaste`]
    fn default() -> Self {
        Self::from_strategies(Strategy::ALL)
    }
}

/// Solves with LENGTH_FIRST and MIN_WASTE and returns the cutlist with strictly fewer boards,
/// LENGTH_FIRST on a tie.
pub fn select_best(
    requirements: &RequirementSet<CutRequirement>,
    stock_length: f32,
    kerf: f32,
) -> Result<Cutlist> {
    StrategySelector::default().select_best(requirements, stock_length, kerf)
}
