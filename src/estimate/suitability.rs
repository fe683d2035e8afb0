//! Qualitative suitability text
//!
//! Short recommendation strings shown next to each device, and the longer
//! notes attached to unified-memory configurations in comparisons.

use super::{estimate_max_model_size, estimate_max_model_size_from_vram};
use crate::catalog::ProductLine;

/// Suitability text for a dedicated-memory device.
///
/// First matching rule wins; the result is never empty.
pub fn classify_suitability(capacity_gb: u32, bandwidth_gbs: u32) -> &'static str {
    if capacity_gb >= 32 && bandwidth_gbs >= 1500 {
        "fastest tier, small models"
    } else if capacity_gb >= 24 && bandwidth_gbs >= 900 {
        "best value, mid-size models"
    } else if capacity_gb >= 16 {
        "good for small-to-mid models"
    } else if capacity_gb >= 12 {
        "entry-level"
    } else {
        "basic capability"
    }
}

/// Suitability text for a unified-memory desktop
pub fn unified_best_for(memory_gb: u32) -> String {
    format!(
        "Up to {}B models; silent & efficient",
        estimate_max_model_size(memory_gb)
    )
}

/// Notes for a unified-memory configuration, keyed by product line then memory.
///
/// Lines without a notes table yield an empty string.
pub fn unified_notes(line: ProductLine, memory_gb: u32) -> &'static str {
    match line {
        ProductLine::Ultra => {
            if memory_gb >= 512 {
                "512 GB unified. Enables 405B and MoE 671B (quantised)."
            } else if memory_gb >= 256 {
                "256 GB enables 120B Q4 comfortably."
            } else {
                "Entry Ultra config. 70B Q4 runs with limited context."
            }
        }
        ProductLine::Max => {
            if memory_gb >= 128 {
                "128 GB enables 70B Q4 with headroom."
            } else {
                "64 GB allows 30B Q4 comfortably."
            }
        }
        ProductLine::Pro | ProductLine::Base => "",
    }
}

/// Notes for a dedicated-memory card
pub fn vram_notes(name: &str, vram_gb: u32) -> String {
    format!(
        "{}. {}GB VRAM supports up to ~{}B Q4 models.",
        name,
        vram_gb,
        estimate_max_model_size_from_vram(vram_gb)
    )
}
