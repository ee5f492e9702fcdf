use itertools::{Either, Itertools};
use log::{debug, trace};
use slotmap::{SlotMap, new_key_type};

use crate::entities::{Panel, PlacedPanel};
use crate::util::FPA;
use crate::util::assertions::panels_are_overlap_free;

new_key_type! {
    /// Unique key for each [`Region`] in a [`RectanglePacker`]
    pub struct RegionKey;
}

/// Node of the free-space tree. Once used, it holds a panel at its origin
/// and the leftover space below and beside that panel becomes its children.
#[derive(Debug, Clone)]
struct Region {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    used: bool,
    down: Option<RegionKey>,
    right: Option<RegionKey>,
}

impl Region {
    fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            used: false,
            down: None,
            right: None,
        }
    }

    fn accommodates(&self, width: f32, height: f32) -> bool {
        FPA(width).fits_in(self.width) && FPA(height).fits_in(self.height)
    }
}

/// Outcome of [`RectanglePacker::fit`]. Both lists keep the relative input order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PackResult {
    pub placed: Vec<PlacedPanel>,
    pub unplaced: Vec<Panel>,
}

/// Binary space-partition packer for a single sheet of fixed size.
///
/// Free space is a tree of regions rooted at the whole sheet. A panel goes into the first free region
/// (depth-first, `down` before `right`) that accommodates it, splitting that region in two.
/// The sheet never grows.
#[derive(Debug, Clone)]
pub struct RectanglePacker {
    width: f32,
    height: f32,
    regions: SlotMap<RegionKey, Region>,
    root: RegionKey,
}

impl RectanglePacker {
    pub fn new(width: f32, height: f32) -> Self {
        assert!(width > 0.0 && height > 0.0, "sheet must have a positive size");
        let mut regions = SlotMap::with_key();
        let root = regions.insert(Region::new(0.0, 0.0, width, height));
        Self {
            width,
            height,
            regions,
            root,
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Places as many `panels` as possible, tallest first (then widest).
    pub fn fit(&mut self, panels: &[Panel]) -> PackResult {
        let (placed, unplaced): (Vec<_>, Vec<_>) = self
            .place(panels)
            .into_iter()
            .zip(panels)
            .partition_map(|(placement, panel)| match placement {
                Some(p) => Either::Left(p),
                None => Either::Right(panel.clone()),
            });

        debug!(
            "[PACK] {}x{} sheet: {} placed, {} unplaced",
            self.width,
            self.height,
            placed.len(),
            unplaced.len()
        );

        PackResult { placed, unplaced }
    }

    /// Same as [`RectanglePacker::fit`], but reports the placement of every panel at its input index.
    pub fn place(&mut self, panels: &[Panel]) -> Vec<Option<PlacedPanel>> {
        let order = (0..panels.len()).sorted_by(|&a, &b| {
            let (pa, pb) = (&panels[a], &panels[b]);
            pb.height
                .total_cmp(&pa.height)
                .then(pb.width.total_cmp(&pa.width))
        });

        let mut placements: Vec<Option<PlacedPanel>> = vec![None; panels.len()];
        for i in order {
            let panel = &panels[i];
            match self.find_region(panel.width, panel.height) {
                Some(key) => {
                    let placed = self.split_region(key, panel);
                    trace!(
                        "[PACK] {} ({}x{}) at ({}, {})",
                        panel.id, panel.width, panel.height, placed.x, placed.y
                    );
                    placements[i] = Some(placed);
                }
                None => trace!(
                    "[PACK] {} ({}x{}) does not fit",
                    panel.id, panel.width, panel.height
                ),
            }
        }

        debug_assert!(panels_are_overlap_free(
            &placements.iter().flatten().cloned().collect_vec()
        ));
        debug_assert!(
            placements
                .iter()
                .flatten()
                .all(|p| p.within(self.width, self.height))
        );

        placements
    }

    /// First free region that accommodates a `width` x `height` panel,
    /// in depth-first order visiting `down` before `right`.
    fn find_region(&self, width: f32, height: f32) -> Option<RegionKey> {
        let mut stack = vec![self.root];
        while let Some(key) = stack.pop() {
            let region = &self.regions[key];
            if region.used {
                //pushed in reverse, so `down` is explored first
                stack.extend(region.right);
                stack.extend(region.down);
            } else if region.accommodates(width, height) {
                return Some(key);
            }
        }
        None
    }

    /// Places `panel` at the origin of the region and registers the leftover space as children.
    fn split_region(&mut self, key: RegionKey, panel: &Panel) -> PlacedPanel {
        let Region {
            x,
            y,
            width,
            height,
            ..
        } = self.regions[key];

        let down_height = height - panel.height;
        let right_width = width - panel.width;

        let down = (!FPA(down_height).is_depleted())
            .then(|| Region::new(x, y + panel.height, width, down_height))
            .map(|r| self.regions.insert(r));
        let right = (!FPA(right_width).is_depleted())
            .then(|| Region::new(x + panel.width, y, right_width, panel.height))
            .map(|r| self.regions.insert(r));

        let region = &mut self.regions[key];
        region.used = true;
        region.down = down;
        region.right = right;

        PlacedPanel::new(panel, x, y)
    }

    /// Number of regions in the free-space tree, used or not
    pub fn n_regions(&self) -> usize {
        self.regions.len()
    }
}
