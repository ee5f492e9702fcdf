mod selector;
mod solver;
mod strategy;

#[doc(inline)]
pub use selector::{StrategySelector, select_best};
#[doc(inline)]
pub use solver::{CuttingStockSolver, solve};
#[doc(inline)]
pub use strategy::{
    CutStrategy, FnStrategy, Strategy, best_fit_decreasing, first_fit_decreasing, sort_descending,
};
