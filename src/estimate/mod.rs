//! Estimation module for hwcatalog
//!
//! Threshold tables that turn raw attributes into throughput and model-size
//! estimates, fixed profiles for unified-memory families, and the
//! suitability classifier.

mod suitability;
mod thresholds;
mod unified;

pub use suitability::*;
pub use thresholds::*;
pub use unified::{UnifiedProfile, MAC_BOOK_PRO, MAC_STUDIO};
