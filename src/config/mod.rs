//! Configuration module for hwcatalog
//!
//! Provides CLI arguments and runtime settings.

mod settings;

pub use settings::*;
