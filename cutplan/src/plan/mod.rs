mod bom;
mod planner;

#[doc(inline)]
pub use bom::BillOfMaterials;
#[doc(inline)]
pub use planner::Planner;
