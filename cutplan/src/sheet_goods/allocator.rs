use std::time::Instant;

use log::{debug, info, warn};

use crate::entities::{Panel, PlacedPanel, Sheet, SheetLayout};
use crate::error::{PlanError, Result};
use crate::sheet_goods::RectanglePacker;
use crate::util::assertions::{layout_covers_panels, layout_is_valid};

/// Spreads panels over as many fresh sheets as needed, one [`RectanglePacker`] per sheet.
///
/// Every round packs all outstanding panels onto a new sheet and carries the unplaced ones forward.
/// The number of rounds is capped at the initial number of panels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MultiSheetAllocator {
    pub sheet_width: f32,
    pub sheet_height: f32,
    /// Saw kerf kept between neighbouring panels, zero by default
    pub kerf: f32,
}

impl MultiSheetAllocator {
    pub fn new(sheet_width: f32, sheet_height: f32) -> Self {
        assert!(
            sheet_width > 0.0 && sheet_height > 0.0,
            "sheet must have a positive size"
        );
        Self {
            sheet_width,
            sheet_height,
            kerf: 0.0,
        }
    }

    /// With a kerf `k`, panels are packed as `(w + k) x (h + k)` on a `(W + k) x (H + k)` sheet,
    /// so that every pair of neighbouring panels is at least one kerf apart.
    pub fn with_kerf(mut self, kerf: f32) -> Self {
        assert!(kerf >= 0.0, "kerf cannot be negative");
        self.kerf = kerf;
        self
    }

    pub fn allocate(&self, panels: &[Panel]) -> Result<SheetLayout> {
        let start = Instant::now();
        let budget = panels.len();
        let mut layout = SheetLayout::new(self.sheet_width, self.sheet_height);
        let mut outstanding = panels.to_vec();
        let mut attempts = 0;

        while !outstanding.is_empty() && attempts < budget {
            attempts += 1;
            let mut packer =
                RectanglePacker::new(self.sheet_width + self.kerf, self.sheet_height + self.kerf);
            let inflated = outstanding.iter().map(|p| self.inflate(p)).collect::<Vec<_>>();

            let mut placed = vec![];
            let mut unplaced = vec![];
            for (panel, placement) in outstanding.into_iter().zip(packer.place(&inflated)) {
                match placement {
                    //report the panel with its true size at the packed origin
                    Some(p) => placed.push(PlacedPanel::new(&panel, p.x, p.y)),
                    None => unplaced.push(panel),
                }
            }
            debug!(
                "[ALLOC] sheet attempt {}/{}: placed {}, {} outstanding",
                attempts,
                budget,
                placed.len(),
                unplaced.len()
            );
            outstanding = unplaced;

            if placed.is_empty() {
                //a fresh sheet of the same size will not do any better
                break;
            }
            layout
                .sheets
                .push(Sheet::new(self.sheet_width, self.sheet_height, placed));
        }

        if !outstanding.is_empty() {
            warn!(
                "[ALLOC] {} panel(s) left unplaced after {} attempt(s): {:?}",
                outstanding.len(),
                attempts,
                outstanding.iter().map(|p| p.id.as_str()).collect::<Vec<_>>()
            );
            return Err(PlanError::PackingExhausted {
                attempts,
                residual: outstanding,
                layout,
            });
        }

        debug_assert!(layout_is_valid(&layout));
        debug_assert!(layout_covers_panels(&layout, panels));

        info!(
            "[ALLOC] {} panel(s) on {} sheet(s) of {}x{}, usage {:.1}% ({:.3}ms)",
            panels.len(),
            layout.n_sheets(),
            self.sheet_width,
            self.sheet_height,
            layout.usage() * 100.0,
            start.elapsed().as_secs_f64() * 1000.0
        );
        Ok(layout)
    }

    fn inflate(&self, panel: &Panel) -> Panel {
        Panel {
            width: panel.width + self.kerf,
            height: panel.height + self.kerf,
            ..panel.clone()
        }
    }
}

/// Allocates `panels` over as many `sheet_width` x `sheet_height` sheets as needed.
pub fn allocate(panels: &[Panel], sheet_width: f32, sheet_height: f32) -> Result<SheetLayout> {
    MultiSheetAllocator::new(sheet_width, sheet_height).allocate(panels)
}
