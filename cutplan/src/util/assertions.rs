use itertools::Itertools;
use log::error;

use crate::entities::{Cutlist, Panel, Piece, PlacedPanel, Sheet, SheetLayout};
use crate::util::FPA;

//Various checks to verify correctness of the produced plans
//Used in debug_assertion!() blocks and tests

/// Every board is non-empty, its consumption stays within the stock length
/// and its cuts are laid out back to back, separated by one kerf.
pub fn boards_within_capacity(cutlist: &Cutlist) -> bool {
    for (i, board) in cutlist.boards().iter().enumerate() {
        if board.is_empty() {
            error!("board {i} is empty");
            return false;
        }
        let consumption = board.cuts().iter().map(|c| c.length).sum::<f32>()
            + board.kerf() * (board.len() - 1) as f32;
        if !FPA(consumption).fits_in(board.stock_length()) {
            error!(
                "board {i} consumes {consumption}, exceeding stock length {}",
                board.stock_length()
            );
            return false;
        }
        if FPA(consumption) != FPA(board.used_length()) {
            error!(
                "board {i} reports {} used, actual consumption is {consumption}",
                board.used_length()
            );
            return false;
        }
        let back_to_back = board
            .cuts()
            .iter()
            .tuple_windows()
            .all(|(a, b)| FPA(a.end() + board.kerf()) == FPA(b.offset));
        if board.cuts()[0].offset != 0.0 || !back_to_back {
            error!("cut offsets on board {i} are inconsistent: {:?}", board.cuts());
            return false;
        }
    }
    true
}

/// The cutlist holds exactly the multiset of `pieces`.
pub fn cutlist_covers_pieces(cutlist: &Cutlist, pieces: &[Piece]) -> bool {
    let placed = cutlist
        .pieces()
        .map(|c| (c.id.as_str(), c.length.to_bits()))
        .sorted()
        .collect_vec();
    let required = pieces
        .iter()
        .map(|p| (p.id.as_str(), p.length.to_bits()))
        .sorted()
        .collect_vec();
    if placed != required {
        error!("cutlist pieces {placed:?} do not match required pieces {required:?}");
        return false;
    }
    true
}

/// No two panels on the sheet overlap.
pub fn sheet_is_overlap_free(sheet: &Sheet) -> bool {
    panels_are_overlap_free(&sheet.placed)
}

pub fn panels_are_overlap_free(placed: &[PlacedPanel]) -> bool {
    for (a, b) in placed.iter().tuple_combinations() {
        if a.overlaps(b) {
            error!("panels {a:?} and {b:?} overlap");
            return false;
        }
    }
    true
}

/// Every panel lies within the sheet.
pub fn sheet_within_bounds(sheet: &Sheet) -> bool {
    match sheet
        .placed
        .iter()
        .find(|p| !p.within(sheet.width, sheet.height))
    {
        Some(p) => {
            error!(
                "panel {p:?} exceeds sheet bounds {}x{}",
                sheet.width, sheet.height
            );
            false
        }
        None => true,
    }
}

/// The layout places exactly the multiset of `panels`, with their original dimensions.
pub fn layout_covers_panels(layout: &SheetLayout, panels: &[Panel]) -> bool {
    let placed = layout.placed_panels().map(PlacedPanel::to_panel).collect_vec();
    panel_multisets_match(&placed, panels)
}

pub fn panel_multisets_match(a: &[Panel], b: &[Panel]) -> bool {
    let key = |p: &Panel| (p.id.clone(), p.width.to_bits(), p.height.to_bits());
    let a_keys = a.iter().map(key).sorted().collect_vec();
    let b_keys = b.iter().map(key).sorted().collect_vec();
    if a_keys != b_keys {
        error!("panel multisets differ: {a_keys:?} vs {b_keys:?}");
        return false;
    }
    true
}

/// Full set of checks on a finished layout.
pub fn layout_is_valid(layout: &SheetLayout) -> bool {
    layout
        .sheets
        .iter()
        .all(|s| sheet_is_overlap_free(s) && sheet_within_bounds(s))
}
