mod cutlist;
mod job;
mod requirement;
mod sheet;

#[doc(inline)]
pub use cutlist::{Board, Cut, Cutlist};
#[doc(inline)]
pub use job::{Job, LinearStock, SheetStock};
#[doc(inline)]
pub use requirement::{CutRequirement, Demand, Panel, PanelRequirement, Piece, RequirementSet};
#[doc(inline)]
pub use sheet::{PlacedPanel, Sheet, SheetLayout};
