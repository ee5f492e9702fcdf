use crate::entities::Panel;
use crate::util::FPA;

/// A panel placed on a sheet, with its top-left corner at (`x`, `y`).
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedPanel {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub id: String,
    pub label: Option<String>,
}

impl PlacedPanel {
    pub fn new(panel: &Panel, x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            width: panel.width,
            height: panel.height,
            id: panel.id.clone(),
            label: panel.label.clone(),
        }
    }

    pub fn x_max(&self) -> f32 {
        self.x + self.width
    }

    pub fn y_max(&self) -> f32 {
        self.y + self.height
    }

    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// Whether the interiors of both panels intersect. Touching edges do not count.
    pub fn overlaps(&self, other: &PlacedPanel) -> bool {
        FPA(self.x) < FPA(other.x_max())
            && FPA(other.x) < FPA(self.x_max())
            && FPA(self.y) < FPA(other.y_max())
            && FPA(other.y) < FPA(self.y_max())
    }

    /// Whether the panel lies within a `width` x `height` sheet.
    pub fn within(&self, width: f32, height: f32) -> bool {
        FPA(0.0) <= FPA(self.x)
            && FPA(0.0) <= FPA(self.y)
            && FPA(self.x_max()).fits_in(width)
            && FPA(self.y_max()).fits_in(height)
    }

    /// The unit demand this placement fulfils
    pub fn to_panel(&self) -> Panel {
        Panel {
            width: self.width,
            height: self.height,
            id: self.id.clone(),
            label: self.label.clone(),
        }
    }
}

/// A standard-size sheet with the panels placed on it.
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    pub width: f32,
    pub height: f32,
    pub placed: Vec<PlacedPanel>,
}

impl Sheet {
    pub fn new(width: f32, height: f32, placed: Vec<PlacedPanel>) -> Self {
        Self {
            width,
            height,
            placed,
        }
    }

    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    pub fn placed_area(&self) -> f32 {
        self.placed.iter().map(|p| p.area()).sum()
    }

    /// Fraction of the sheet covered by panels
    pub fn usage(&self) -> f32 {
        self.placed_area() / self.area()
    }

    pub fn is_empty(&self) -> bool {
        self.placed.is_empty()
    }
}

/// Ordered sequence of sheets produced by the multi-sheet allocator.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetLayout {
    pub sheet_width: f32,
    pub sheet_height: f32,
    pub sheets: Vec<Sheet>,
}

impl SheetLayout {
    pub fn new(sheet_width: f32, sheet_height: f32) -> Self {
        Self {
            sheet_width,
            sheet_height,
            sheets: vec![],
        }
    }

    /// Number of sheets to purchase
    pub fn n_sheets(&self) -> usize {
        self.sheets.len()
    }

    pub fn placed_panels(&self) -> impl Iterator<Item = &PlacedPanel> {
        self.sheets.iter().flat_map(|s| s.placed.iter())
    }

    pub fn usage(&self) -> f32 {
        let total_area = self.sheets.iter().map(|s| s.area()).sum::<f32>();
        match total_area > 0.0 {
            true => self.sheets.iter().map(|s| s.placed_area()).sum::<f32>() / total_area,
            false => 0.0,
        }
    }
}
