//! Access module for hwcatalog
//!
//! Catalog sources and the load-once accessor that fronts the derived
//! collections.

mod accessor;
mod source;

pub use accessor::HardwareCatalog;
pub use source::{CatalogSource, FileSource, StaticSource};
