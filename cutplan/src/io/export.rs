use std::collections::BTreeMap;

use crate::entities::{Cutlist, SheetLayout};
use crate::io::ext_repr::{
    ExtBoard, ExtCut, ExtCutlist, ExtPlacedPanel, ExtPlan, ExtSheet, ExtSheetLayout,
};
use crate::plan::BillOfMaterials;

/// Exports a bill of materials out of the library.
/// `labels` maps piece and panel ids to display labels; panels keep a label they already carry.
pub fn export_plan(bom: &BillOfMaterials, labels: &BTreeMap<String, String>) -> ExtPlan {
    ExtPlan {
        lumber: bom
            .lumber()
            .map(|(stock, cutlist)| export_cutlist(stock, cutlist, labels))
            .collect(),
        sheet_goods: bom
            .sheet_goods()
            .map(|(stock, layout)| export_sheet_layout(stock, layout, labels))
            .collect(),
        hardware: bom.hardware().map(|(k, v)| (k.to_string(), v)).collect(),
    }
}

pub fn export_cutlist(
    stock: &str,
    cutlist: &Cutlist,
    labels: &BTreeMap<String, String>,
) -> ExtCutlist {
    let boards = cutlist
        .boards()
        .iter()
        .map(|board| ExtBoard {
            cuts: board
                .cuts()
                .iter()
                .map(|cut| ExtCut {
                    id: cut.id.clone(),
                    length: cut.length,
                    offset: cut.offset,
                    label: labels.get(&cut.id).cloned(),
                })
                .collect(),
            used_length: board.used_length(),
            waste: board.waste(),
        })
        .collect();

    ExtCutlist {
        stock: stock.to_string(),
        stock_length: cutlist.stock_length(),
        kerf: cutlist.kerf(),
        strategy: cutlist.strategy().to_string(),
        n_boards: cutlist.n_boards(),
        usage: cutlist.usage(),
        boards,
    }
}

pub fn export_sheet_layout(
    stock: &str,
    layout: &SheetLayout,
    labels: &BTreeMap<String, String>,
) -> ExtSheetLayout {
    let sheets = layout
        .sheets
        .iter()
        .map(|sheet| ExtSheet {
            panels: sheet
                .placed
                .iter()
                .map(|p| ExtPlacedPanel {
                    id: p.id.clone(),
                    x: p.x,
                    y: p.y,
                    width: p.width,
                    height: p.height,
                    label: p.label.clone().or_else(|| labels.get(&p.id).cloned()),
                })
                .collect(),
            usage: sheet.usage(),
        })
        .collect();

    ExtSheetLayout {
        stock: stock.to_string(),
        width: layout.sheet_width,
        height: layout.sheet_height,
        n_sheets: layout.n_sheets(),
        sheets,
    }
}
