//! Tiered threshold estimates
//!
//! Coarse lookups from a single attribute (bandwidth or memory) to a
//! discrete estimate. These are heuristics, not measurements.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Ordered `(minimum, value)` rules without a fallback.
///
/// Rules are evaluated top-down and the first whose minimum is `<=` the
/// input wins, so they must be listed in descending order of minimum.
/// Inputs below the last minimum have no estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breakpoints {
    rules: &'static [(u32, u32)],
}

impl Breakpoints {
    /// Build from descending `(minimum, value)` rules
    pub const fn new(rules: &'static [(u32, u32)]) -> Self {
        Self { rules }
    }

    /// Value of the first rule whose minimum is `<= input`
    pub fn lookup(&self, input: u32) -> Option<u32> {
        self.rules
            .iter()
            .find(|(min, _)| *min <= input)
            .map(|(_, value)| *value)
    }
}

/// [`Breakpoints`] with a lowest-tier fallback, so every input has a value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierTable {
    breakpoints: Breakpoints,
    fallback: u32,
}

impl TierTable {
    /// Build a table from descending rules and a lowest-tier fallback
    pub const fn new(rules: &'static [(u32, u32)], fallback: u32) -> Self {
        Self {
            breakpoints: Breakpoints::new(rules),
            fallback,
        }
    }

    /// Look up the tier value for `input`
    pub fn lookup(&self, input: u32) -> u32 {
        self.breakpoints.lookup(input).unwrap_or(self.fallback)
    }
}

/// Manufacturer class for discrete-card throughput estimates
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VendorClass {
    /// NVIDIA (CUDA)
    Nvidia,
    /// AMD (ROCm)
    Amd,
}

impl VendorClass {
    /// 7B tokens/sec table for this class
    pub fn tg7b_table(&self) -> &'static TierTable {
        match self {
            VendorClass::Nvidia => &NVIDIA_TG7B,
            VendorClass::Amd => &AMD_TG7B,
        }
    }

    /// Ratio from 7B to 13B throughput on this class
    pub fn tg13b_scale(&self) -> f64 {
        match self {
            VendorClass::Nvidia | VendorClass::Amd => DISCRETE_TG13B_SCALE,
        }
    }
}

/// NVIDIA 7B tokens/sec by bandwidth (GB/s)
pub const NVIDIA_TG7B: TierTable =
    TierTable::new(&[(1500, 250), (1000, 140), (800, 130), (600, 100)], 80);

/// AMD 7B tokens/sec by bandwidth (GB/s)
pub const AMD_TG7B: TierTable = TierTable::new(&[(900, 135), (700, 115)], 90);

/// Max Q4 model size (B params) by total memory (GB)
pub const MAX_MODEL_SIZE: TierTable = TierTable::new(
    &[(512, 200), (256, 120), (128, 70), (64, 30), (32, 20), (24, 13)],
    7,
);

/// Max Q4 model size (B params) by dedicated VRAM (GB)
pub const MAX_MODEL_SIZE_FROM_VRAM: TierTable =
    TierTable::new(&[(80, 70), (48, 30), (32, 26), (24, 20), (16, 13)], 7);

/// 13B throughput on discrete cards is 7B throughput scaled by this
pub const DISCRETE_TG13B_SCALE: f64 = 0.68;

/// Estimated 7B tokens/sec for a discrete card
pub fn estimate_tg7b(bandwidth_gbs: u32, vendor: VendorClass) -> u32 {
    vendor.tg7b_table().lookup(bandwidth_gbs)
}

/// Estimated 13B tokens/sec, derived from the 7B estimate
pub fn scale_tg13b(tg7b: u32, vendor: VendorClass) -> u32 {
    (f64::from(tg7b) * vendor.tg13b_scale()).round() as u32
}

/// Largest quantized model (B params) that fits in `memory_gb` of total memory
pub fn estimate_max_model_size(memory_gb: u32) -> u32 {
    MAX_MODEL_SIZE.lookup(memory_gb)
}

/// Largest quantized model (B params) that fits in `vram_gb` of dedicated VRAM
pub fn estimate_max_model_size_from_vram(vram_gb: u32) -> u32 {
    MAX_MODEL_SIZE_FROM_VRAM.lookup(vram_gb)
}
