use std::collections::BTreeMap;

use crate::entities::{CutRequirement, PanelRequirement, RequirementSet};

/// Linear pieces to be cut from boards of one stock type (e.g. "2x4", 96 long).
#[derive(Debug, Clone, PartialEq)]
pub struct LinearStock {
    pub name: String,
    pub stock_length: f32,
    pub requirements: RequirementSet<CutRequirement>,
}

/// Panels to be cut from sheets of one stock type (e.g. "plywood", 96 x 48).
#[derive(Debug, Clone, PartialEq)]
pub struct SheetStock {
    pub name: String,
    pub width: f32,
    pub height: f32,
    pub requirements: RequirementSet<PanelRequirement>,
}

/// Everything a design needs: stock groups to plan and hardware to count.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Job {
    pub linear: Vec<LinearStock>,
    pub sheets: Vec<SheetStock>,
    /// Consumables that need no planning (screws, dowel pins, ...)
    pub hardware: BTreeMap<String, u32>,
}
