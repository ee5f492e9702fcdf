use std::time::Instant;

use log::{info, warn};
use rayon::prelude::*;

use crate::config::PlanConfig;
use crate::entities::{Cutlist, Job, LinearStock, SheetLayout, SheetStock};
use crate::error::{Extent, PlanError, Result};
use crate::linear::StrategySelector;
use crate::plan::BillOfMaterials;
use crate::sheet_goods::MultiSheetAllocator;
use crate::util::FPA;

/// Plans every stock group of a [`Job`] and collects the results in a [`BillOfMaterials`].
pub struct Planner {
    pub config: PlanConfig,
    selector: StrategySelector,
}

impl Planner {
    pub fn new(mut config: PlanConfig) -> Self {
        if config.strategies.is_empty() {
            warn!("[PLAN] no strategies configured, falling back to the defaults");
            config.strategies = PlanConfig::default().strategies;
        }
        let selector = StrategySelector::from_strategies(config.strategies.iter().copied());
        Self { config, selector }
    }

    /// Plans all groups. Stock groups are independent, so they may be planned in parallel;
    /// the outcome (including which error is reported first) does not depend on it.
    pub fn plan(&self, job: &Job) -> Result<BillOfMaterials> {
        let start = Instant::now();

        let cutlists: Vec<Result<Cutlist>> = match self.config.parallel {
            true => job.linear.par_iter().map(|ls| self.plan_linear(ls)).collect(),
            false => job.linear.iter().map(|ls| self.plan_linear(ls)).collect(),
        };
        let layouts: Vec<Result<SheetLayout>> = match self.config.parallel {
            true => job.sheets.par_iter().map(|ss| self.plan_sheets(ss)).collect(),
            false => job.sheets.iter().map(|ss| self.plan_sheets(ss)).collect(),
        };

        let mut bom = BillOfMaterials::new();
        for (ls, cutlist) in job.linear.iter().zip(cutlists) {
            bom.add_cutlist(&ls.name, cutlist?)?;
        }
        for (ss, layout) in job.sheets.iter().zip(layouts) {
            bom.add_sheets(&ss.name, layout?)?;
        }
        for (item, count) in &job.hardware {
            bom.add_hardware(item, *count);
        }

        info!(
            "[PLAN] {} linear and {} sheet group(s) planned in {:.3}ms",
            job.linear.len(),
            job.sheets.len(),
            start.elapsed().as_secs_f64() * 1000.0
        );
        Ok(bom)
    }

    pub fn plan_linear(&self, stock: &LinearStock) -> Result<Cutlist> {
        info!("[PLAN] planning linear stock '{}'", stock.name);
        self.selector
            .select_best(&stock.requirements, stock.stock_length, self.config.kerf)
    }

    pub fn plan_sheets(&self, stock: &SheetStock) -> Result<SheetLayout> {
        info!("[PLAN] planning sheet stock '{}'", stock.name);
        if self.config.reject_oversized_panels {
            let oversized = stock.requirements.iter().find(|r| {
                r.quantity > 0
                    && !(FPA(r.width).fits_in(stock.width) && FPA(r.height).fits_in(stock.height))
            });
            if let Some(req) = oversized {
                return Err(PlanError::InfeasiblePiece {
                    id: req.id.clone(),
                    required: Extent::Rect {
                        width: req.width,
                        height: req.height,
                    },
                    available: Extent::Rect {
                        width: stock.width,
                        height: stock.height,
                    },
                });
            }
        }
        MultiSheetAllocator::new(stock.width, stock.height)
            .with_kerf(self.config.panel_kerf)
            .allocate(&stock.requirements.expand())
    }
}

impl Default for Planner {
    fn default() -> Self {
        Self::new(PlanConfig::default())
    }
}
