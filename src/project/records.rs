//! Derived record shapes
//!
//! Flat, uniform records consumed by renderers, comparison tables and the
//! best-match finder. Serialized field names follow the keys those
//! consumers already read.

use crate::catalog::OrderedMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Hardware vendor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Manufacturer {
    /// NVIDIA
    Nvidia,
    /// AMD
    Amd,
    /// Apple
    Apple,
}

impl fmt::Display for Manufacturer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Manufacturer::Nvidia => "NVIDIA",
            Manufacturer::Amd => "AMD",
            Manufacturer::Apple => "Apple",
        })
    }
}

/// Market segment shown in the device list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceTier {
    /// Consumer add-in card
    Consumer,
    /// Desktop system
    Desktop,
}

/// Physical form factor of a system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormFactor {
    /// Desktop
    Desktop,
    /// Laptop
    Laptop,
}

/// Operating system a system ships with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperatingSystem {
    /// macOS
    #[serde(rename = "macos")]
    MacOs,
}

/// What a system configuration favors when matching buyers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Raw memory capacity
    Capacity,
    /// Cost efficiency
    Value,
    /// Portability
    Portable,
}

/// One entry of the device list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceRecord {
    /// Display name
    pub name: String,
    /// Vendor
    #[serde(rename = "mfr")]
    pub manufacturer: Manufacturer,
    /// Memory available to the accelerator (GB)
    #[serde(rename = "vram")]
    pub vram_gb: u32,
    /// Memory bandwidth (GB/s)
    #[serde(rename = "bw")]
    pub bandwidth_gbs: u32,
    /// Estimated 7B tokens/sec
    pub tg7b: u32,
    /// Estimated 70B tokens/sec; null when 70B does not fit
    pub tg70b: Option<u32>,
    /// List price (USD)
    pub price: Option<u32>,
    /// Market segment
    pub tier: DeviceTier,
    /// Suitability text
    #[serde(rename = "bestFor")]
    pub best_for: String,
}

/// One entry of the system list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemRecord {
    /// Display name
    pub name: String,
    /// Vendor
    #[serde(rename = "mfr")]
    pub manufacturer: Manufacturer,
    /// Supported operating systems
    #[serde(rename = "os")]
    pub operating_systems: Vec<OperatingSystem>,
    /// Form factor
    #[serde(rename = "ff")]
    pub form_factor: FormFactor,
    /// CPU and GPU share one memory pool
    pub unified: bool,
    /// Total memory (GB)
    #[serde(rename = "memGB")]
    pub memory_gb: u32,
    /// Memory usable by the GPU (GB); equals `memory_gb` when unified
    #[serde(rename = "vramGB")]
    pub vram_gb: u32,
    /// Memory bandwidth (GB/s)
    #[serde(rename = "bwGBs")]
    pub bandwidth_gbs: u32,
    /// Low end of the price range (USD)
    #[serde(rename = "minPrice")]
    pub min_price: Option<u32>,
    /// High end of the price range (USD)
    #[serde(rename = "maxPrice")]
    pub max_price: Option<u32>,
    /// Largest quantized model that fits (B params)
    #[serde(rename = "maxModel")]
    pub max_model_b: u32,
    /// Estimated 7B tokens/sec
    pub tg7b: u32,
    /// Estimated 13B tokens/sec
    pub tg13b: u32,
    /// Estimated 70B tokens/sec; null when 70B does not fit
    pub tg70b: Option<u32>,
    /// What this configuration favors
    pub priority: Vec<Priority>,
}

/// One entry of the compare mapping
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompareRecord {
    /// Display name
    pub name: String,
    /// One-line hardware summary
    #[serde(rename = "sub")]
    pub subtitle: String,
    /// Vendor
    #[serde(rename = "mfr")]
    pub manufacturer: Manufacturer,
    /// Total memory (GB)
    #[serde(rename = "memGB")]
    pub memory_gb: u32,
    /// Memory bandwidth (GB/s)
    #[serde(rename = "bwGBs")]
    pub bandwidth_gbs: u32,
    /// CPU cores; null for discrete cards
    #[serde(rename = "cpuCores")]
    pub cpu_cores: Option<u32>,
    /// GPU cores; null for discrete cards
    #[serde(rename = "gpuCores")]
    pub gpu_cores: Option<u32>,
    /// CPU and GPU share one memory pool
    pub unified: bool,
    /// Estimated 7B tokens/sec
    pub tg7b: Option<u32>,
    /// Estimated 13B tokens/sec
    pub tg13b: Option<u32>,
    /// Estimated 70B tokens/sec
    pub tg70b: Option<u32>,
    /// Estimated 120B tokens/sec
    pub tg120b: Option<u32>,
    /// List price (USD)
    pub price: Option<u32>,
    /// Inference frameworks that target this hardware
    pub framework: String,
    /// Memory usable by the GPU (GB)
    #[serde(rename = "vramGB")]
    pub vram_gb: u32,
    /// Free-text notes
    pub notes: String,
}

/// Compare records keyed by catalog model key, in catalog order
pub type CompareMap = OrderedMap<CompareRecord>;
