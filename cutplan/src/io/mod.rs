//! Conversion between the library's entities and their serializable representations.

pub mod export;
pub mod ext_repr;
pub mod import;
pub mod svg;
