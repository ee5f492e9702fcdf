mod allocator;
mod packer;

#[doc(inline)]
pub use allocator::{MultiSheetAllocator, allocate};
#[doc(inline)]
pub use packer::{PackResult, RectanglePacker, RegionKey};
