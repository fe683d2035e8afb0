//! # hwcatalog - Local LLM Hardware Catalog
//!
//! hwcatalog ingests a structured catalog of hardware specifications
//! (discrete accelerator cards and unified-memory systems) and derives
//! comparable, user-facing estimates from raw attributes: tokens/sec at
//! several model sizes, the largest quantized model that fits, and short
//! suitability text.
//!
//! Every derived figure is a coarse, threshold-based heuristic. None of
//! them are measured benchmarks.
//!
//! ## Features
//!
//! - **Threshold Estimator**: bandwidth and memory tiers to throughput and max model size
//! - **Suitability Classifier**: qualitative text and per-tier notes
//! - **Record Projector**: device, system and compare record shapes
//! - **Catalog Walker**: ordered traversal that tolerates missing sections
//! - **Catalog Accessor**: load-once handle with shared in-flight loads
//!
//! ## Quick Start
//!
//! ```no_run
//! use hwcatalog::HardwareCatalog;
//!
//! # async fn run() -> hwcatalog::Result<()> {
//! let catalog = HardwareCatalog::from_path("data/hardware.json");
//! catalog.load().await?;
//!
//! for device in catalog.devices() {
//!     println!("{}: ~{} tok/s on 7B", device.name, device.tg7b);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Estimates Without a Catalog
//!
//! ```
//! use hwcatalog::estimate::{estimate_tg7b, estimate_max_model_size, VendorClass};
//!
//! assert_eq!(estimate_tg7b(1200, VendorClass::Nvidia), 140);
//! assert_eq!(estimate_max_model_size(256), 120);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod access;
pub mod catalog;
pub mod config;
pub mod error;
pub mod estimate;
pub mod project;
pub mod walk;

// Re-export commonly used types
pub use access::{CatalogSource, FileSource, HardwareCatalog};
pub use catalog::Catalog;
pub use error::{CatalogError, FieldError, Result};
pub use project::{CompareMap, CompareRecord, DeviceRecord, SystemRecord};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    //! Convenient re-exports for common usage
    //!
    //! ```no_run
    //! use hwcatalog::prelude::*;
    //! ```

    pub use crate::access::{CatalogSource, FileSource, HardwareCatalog, StaticSource};
    pub use crate::catalog::{Catalog, Metadata, ProductLine, Quantity};
    pub use crate::error::{CatalogError, FieldError, Result};
    pub use crate::estimate::{
        classify_suitability, estimate_max_model_size, estimate_max_model_size_from_vram,
        estimate_tg7b, VendorClass,
    };
    pub use crate::project::{CompareMap, CompareRecord, DeviceRecord, SystemRecord};
    pub use crate::walk::{walk_compare, walk_devices, walk_systems, Walk};
}
