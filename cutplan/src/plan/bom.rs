use std::collections::BTreeMap;

use crate::entities::{Cutlist, Sheet, SheetLayout};
use crate::error::{Extent, PlanError, Result};
use crate::util::FPA;

/// Everything to purchase for a job, keyed by stock name.
///
/// Values are accumulated explicitly by whoever builds the bill, so conditional parts of a design
/// can each contribute boards, sheets or hardware to the same stock entry.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BillOfMaterials {
    lumber: BTreeMap<String, Cutlist>,
    sheet_goods: BTreeMap<String, SheetLayout>,
    hardware: BTreeMap<String, u32>,
}

impl BillOfMaterials {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the boards of `cutlist` to the lumber entry `stock`.
    ///
    /// Fails with [`PlanError::ConflictingStock`] if the entry holds boards of another length.
    pub fn add_cutlist(&mut self, stock: impl Into<String>, cutlist: Cutlist) -> Result<()> {
        let stock = stock.into();
        match self.lumber.get(&stock) {
            None => {
                self.lumber.insert(stock, cutlist);
            }
            Some(existing) if FPA(existing.stock_length()) != FPA(cutlist.stock_length()) => {
                return Err(PlanError::ConflictingStock {
                    existing: Extent::Length(existing.stock_length()),
                    other: Extent::Length(cutlist.stock_length()),
                    stock,
                });
            }
            Some(existing) => {
                let boards = existing
                    .boards()
                    .iter()
                    .chain(cutlist.boards())
                    .cloned()
                    .collect();
                let merged = Cutlist::new(
                    existing.stock_length(),
                    existing.kerf(),
                    existing.strategy(),
                    boards,
                );
                self.lumber.insert(stock, merged);
            }
        }
        Ok(())
    }

    /// Appends the sheets of `layout` to the sheet goods entry `stock`.
    ///
    /// Fails with [`PlanError::ConflictingStock`] if the entry holds sheets of another size.
    pub fn add_sheets(&mut self, stock: impl Into<String>, layout: SheetLayout) -> Result<()> {
        let entry = self.sheet_entry(stock.into(), layout.sheet_width, layout.sheet_height)?;
        entry.sheets.extend(layout.sheets);
        Ok(())
    }

    /// Appends a single, already laid out sheet to the sheet goods entry `stock`.
    pub fn add_sheet(&mut self, stock: impl Into<String>, sheet: Sheet) -> Result<()> {
        let entry = self.sheet_entry(stock.into(), sheet.width, sheet.height)?;
        entry.sheets.push(sheet);
        Ok(())
    }

    fn sheet_entry(&mut self, stock: String, width: f32, height: f32) -> Result<&mut SheetLayout> {
        if let Some(existing) = self.sheet_goods.get(&stock) {
            let same_size = FPA(existing.sheet_width) == FPA(width)
                && FPA(existing.sheet_height) == FPA(height);
            if !same_size {
                return Err(PlanError::ConflictingStock {
                    existing: Extent::Rect {
                        width: existing.sheet_width,
                        height: existing.sheet_height,
                    },
                    other: Extent::Rect { width, height },
                    stock,
                });
            }
        }
        Ok(self
            .sheet_goods
            .entry(stock)
            .or_insert_with(|| SheetLayout::new(width, height)))
    }

    /// Adds `count` to the hardware entry `item`.
    pub fn add_hardware(&mut self, item: impl Into<String>, count: u32) {
        *self.hardware.entry(item.into()).or_insert(0) += count;
    }

    /// Absorbs all entries of `other`.
    pub fn merge(&mut self, other: BillOfMaterials) -> Result<()> {
        for (stock, cutlist) in other.lumber {
            self.add_cutlist(stock, cutlist)?;
        }
        for (stock, layout) in other.sheet_goods {
            self.add_sheets(stock, layout)?;
        }
        for (item, count) in other.hardware {
            self.add_hardware(item, count);
        }
        Ok(())
    }

    pub fn cutlist(&self, stock: &str) -> Option<&Cutlist> {
        self.lumber.get(stock)
    }

    pub fn sheet_layout(&self, stock: &str) -> Option<&SheetLayout> {
        self.sheet_goods.get(stock)
    }

    pub fn lumber(&self) -> impl Iterator<Item = (&str, &Cutlist)> {
        self.lumber.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn sheet_goods(&self) -> impl Iterator<Item = (&str, &SheetLayout)> {
        self.sheet_goods.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn hardware(&self) -> impl Iterator<Item = (&str, u32)> {
        self.hardware.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Boards to purchase for `stock`, zero if it is not part of the bill
    pub fn board_count(&self, stock: &str) -> usize {
        self.lumber.get(stock).map_or(0, |c| c.n_boards())
    }

    /// Sheets to purchase for `stock`, zero if it is not part of the bill
    pub fn sheet_count(&self, stock: &str) -> usize {
        self.sheet_goods.get(stock).map_or(0, |l| l.n_sheets())
    }

    pub fn hardware_count(&self, item: &str) -> u32 {
        self.hardware.get(item).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{CutRequirement, Panel, PlacedPanel, RequirementSet};
    use crate::linear::{Strategy, solve};

    #[test]
    fn conditional_contributions_accumulate() {
        let mut bom = BillOfMaterials::new();
        bom.add_hardware("screws3", 12);

        let frame = RequirementSet::from(vec![CutRequirement::new(40.0, 2, "legs")]);
        let cutlist = solve(&frame, 96.0, 0.125, &Strategy::LengthFirst).unwrap();
        bom.add_cutlist("2x4", cutlist).unwrap();

        let backboard = true;
        if backboard {
            let extra = RequirementSet::from(vec![CutRequirement::new(90.0, 1, "backboard")]);
            let cutlist = solve(&extra, 96.0, 0.125, &Strategy::LengthFirst).unwrap();
            bom.add_cutlist("2x4", cutlist).unwrap();
            bom.add_hardware("screws3", 4);
            let pegboard = Panel::new(96.0, 20.0, "pegboard").with_label("K");
            bom.add_sheet(
                "peg_board",
                Sheet::new(96.0, 48.0, vec![PlacedPanel::new(&pegboard, 0.0, 0.0)]),
            )
            .unwrap();
        }

        assert_eq!(bom.board_count("2x4"), 2);
        assert_eq!(bom.cutlist("2x4").unwrap().pieces().count(), 3);
        assert_eq!(bom.hardware_count("screws3"), 16);
        assert_eq!(bom.sheet_count("peg_board"), 1);
        assert_eq!(bom.sheet_count("plywood"), 0);
    }

    #[test]
    fn boards_of_another_length_are_rejected() {
        let reqs = RequirementSet::from(vec![CutRequirement::new(40.0, 1, "leg")]);
        let mut bom = BillOfMaterials::new();
        let cutlist = solve(&reqs, 96.0, 0.0, &Strategy::LengthFirst).unwrap();
        bom.add_cutlist("2x4", cutlist).unwrap();

        let longer = solve(&reqs, 120.0, 0.0, &Strategy::LengthFirst).unwrap();
        assert_eq!(
            bom.add_cutlist("2x4", longer),
            Err(PlanError::ConflictingStock {
                stock: "2x4".to_string(),
                existing: Extent::Length(96.0),
                other: Extent::Length(120.0),
            })
        );
        assert_eq!(bom.board_count("2x4"), 1);
    }

    #[test]
    fn sheets_of_another_size_are_rejected() {
        let mut bom = BillOfMaterials::new();
        bom.add_sheet("ply", Sheet::new(96.0, 48.0, vec![])).unwrap();
        bom.add_sheets("ply", SheetLayout::new(96.0, 48.0)).unwrap();

        let result = bom.add_sheet("ply", Sheet::new(60.0, 30.0, vec![]));
        assert!(matches!(result, Err(PlanError::ConflictingStock { .. })));
        let layout = bom.sheet_layout("ply").unwrap();
        assert_eq!((layout.sheet_width, layout.sheet_height), (96.0, 48.0));
        assert_eq!(layout.n_sheets(), 1);
    }
}
