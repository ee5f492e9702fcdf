use std::slice;

/// A requirement that stands for `quantity` identical unit demands.
pub trait Demand {
    /// The individual piece the requirement expands to
    type Unit: Clone;

    fn quantity(&self) -> usize;

    fn unit(&self) -> Self::Unit;
}

/// A single linear piece to be cut from a board.
#[derive(Debug, Clone, PartialEq)]
pub struct Piece {
    pub length: f32,
    /// Symbolic tag supplied by the caller, shared by all pieces of the same requirement
    pub id: String,
}

/// `quantity` linear pieces of the same length.
#[derive(Debug, Clone, PartialEq)]
pub struct CutRequirement {
    pub length: f32,
    pub quantity: usize,
    pub id: String,
}

impl CutRequirement {
    pub fn new(length: f32, quantity: usize, id: impl Into<String>) -> Self {
        Self {
            length,
            quantity,
            id: id.into(),
        }
    }

    /// A requirement for exactly one piece
    pub fn single(length: f32, id: impl Into<String>) -> Self {
        Self::new(length, 1, id)
    }
}

impl Demand for CutRequirement {
    type Unit = Piece;

    fn quantity(&self) -> usize {
        self.quantity
    }

    fn unit(&self) -> Piece {
        Piece {
            length: self.length,
            id: self.id.clone(),
        }
    }
}

/// A single rectangular panel to be cut from a sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub width: f32,
    pub height: f32,
    pub id: String,
    /// Optional display label, carried through to the placed panel untouched
    pub label: Option<String>,
}

impl Panel {
    pub fn new(width: f32, height: f32, id: impl Into<String>) -> Self {
        Self {
            width,
            height,
            id: id.into(),
            label: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn area(&self) -> f32 {
        self.width * self.height
    }
}

/// `quantity` identical rectangular panels.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelRequirement {
    pub width: f32,
    pub height: f32,
    pub quantity: usize,
    pub id: String,
    pub label: Option<String>,
}

impl PanelRequirement {
    pub fn new(width: f32, height: f32, quantity: usize, id: impl Into<String>) -> Self {
        Self {
            width,
            height,
            quantity,
            id: id.into(),
            label: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

impl Demand for PanelRequirement {
    type Unit = Panel;

    fn quantity(&self) -> usize {
        self.quantity
    }

    fn unit(&self) -> Panel {
        Panel {
            width: self.width,
            height: self.height,
            id: self.id.clone(),
            label: self.label.clone(),
        }
    }
}

/// Ordered list of requirements, expanded to individual unit demands before solving.
#[derive(Debug, Clone, PartialEq)]
pub struct RequirementSet<D> {
    requirements: Vec<D>,
}

impl<D: Demand> RequirementSet<D> {
    pub fn new(requirements: Vec<D>) -> Self {
        Self { requirements }
    }

    pub fn push(&mut self, requirement: D) {
        self.requirements.push(requirement);
    }

    pub fn iter(&self) -> slice::Iter<'_, D> {
        self.requirements.iter()
    }

    pub fn len(&self) -> usize {
        self.requirements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requirements.is_empty()
    }

    /// Total number of unit demands over all requirements
    pub fn total_quantity(&self) -> usize {
        self.requirements.iter().map(|r| r.quantity()).sum()
    }

    /// Every requirement repeated `quantity` times, in input order.
    pub fn expand(&self) -> Vec<D::Unit> {
        self.requirements
            .iter()
            .flat_map(|r| std::iter::repeat_n(r.unit(), r.quantity()))
            .collect()
    }
}

impl<D> Default for RequirementSet<D> {
    fn default() -> Self {
        Self {
            requirements: vec![],
        }
    }
}

impl<D: Demand> FromIterator<D> for RequirementSet<D> {
    fn from_iter<I: IntoIterator<Item = D>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<D> From<Vec<D>> for RequirementSet<D> {
    fn from(requirements: Vec<D>) -> Self {
        Self { requirements }
    }
}

impl<'a, D> IntoIterator for &'a RequirementSet<D> {
    type Item = &'a D;
    type IntoIter = slice::Iter<'a, D>;

    fn into_iter(self) -> Self::IntoIter {
        self.requirements.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expansion_keeps_input_order() {
        let set = RequirementSet::from(vec![
            CutRequirement::new(30.0, 2, "a"),
            CutRequirement::new(50.0, 0, "skipped"),
            CutRequirement::new(10.0, 1, "b"),
        ]);

        let ids = set.expand().into_iter().map(|p| p.id).collect::<Vec<_>>();
        assert_eq!(ids, ["a", "a", "b"]);
        assert_eq!(set.total_quantity(), 3);
    }

    #[test]
    fn panel_labels_survive_expansion() {
        let set: RequirementSet<_> =
            [PanelRequirement::new(20.0, 10.0, 2, "shelf").with_label("J")]
                .into_iter()
                .collect();

        let panels = set.expand();
        assert_eq!(panels.len(), 2);
        assert!(panels.iter().all(|p| p.label.as_deref() == Some("J")));
    }
}
