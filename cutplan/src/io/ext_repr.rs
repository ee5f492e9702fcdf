use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

fn one() -> usize {
    1
}

/// External representation of a [`CutRequirement`](crate::entities::CutRequirement).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtCutRequirement {
    pub length: f32,
    /// Number of identical pieces, one if not specified
    #[serde(default = "one")]
    pub quantity: usize,
    pub id: String,
}

/// External representation of a [`PanelRequirement`](crate::entities::PanelRequirement).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtPanelRequirement {
    pub width: f32,
    pub height: f32,
    /// Number of identical panels, one if not specified
    #[serde(default = "one")]
    pub quantity: usize,
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub label: Option<String>,
}

/// Pieces to cut from one type of linear stock
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtLinearStock {
    /// Name of the stock, e.g. "2x4"
    pub name: String,
    pub stock_length: f32,
    pub cuts: Vec<ExtCutRequirement>,
}

/// Panels to cut from one type of sheet stock
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtSheetStock {
    /// Name of the stock, e.g. "plywood"
    pub name: String,
    pub width: f32,
    pub height: f32,
    pub panels: Vec<ExtPanelRequirement>,
}

/// External representation of a [`Job`](crate::entities::Job).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct ExtJob {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub name: Option<String>,
    #[serde(default)]
    pub linear: Vec<ExtLinearStock>,
    #[serde(default)]
    pub sheets: Vec<ExtSheetStock>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty", default)]
    pub hardware: BTreeMap<String, u32>,
    /// Display labels attached to pieces and panels by matching their id
    #[serde(skip_serializing_if = "BTreeMap::is_empty", default)]
    pub labels: BTreeMap<String, String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtCut {
    pub id: String,
    pub length: f32,
    /// Position along the board where the piece starts
    pub offset: f32,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub label: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtBoard {
    pub cuts: Vec<ExtCut>,
    pub used_length: f32,
    pub waste: f32,
}

/// External representation of a [`Cutlist`](crate::entities::Cutlist).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtCutlist {
    pub stock: String,
    pub stock_length: f32,
    pub kerf: f32,
    pub strategy: String,
    pub n_boards: usize,
    pub usage: f32,
    pub boards: Vec<ExtBoard>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtPlacedPanel {
    pub id: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub label: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtSheet {
    pub panels: Vec<ExtPlacedPanel>,
    pub usage: f32,
}

/// External representation of a [`SheetLayout`](crate::entities::SheetLayout).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtSheetLayout {
    pub stock: String,
    pub width: f32,
    pub height: f32,
    pub n_sheets: usize,
    pub sheets: Vec<ExtSheet>,
}

/// External representation of a [`BillOfMaterials`](crate::plan::BillOfMaterials).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct ExtPlan {
    pub lumber: Vec<ExtCutlist>,
    pub sheet_goods: Vec<ExtSheetLayout>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty", default)]
    pub hardware: BTreeMap<String, u32>,
}
