//! Compare-mapping projection

use super::{
    bandwidth_or, optional, price, required, required_text, text, CompareRecord, Manufacturer,
};
use crate::catalog::{AppleConfig, CardSpec, Quantity};
use crate::error::FieldError;
use crate::estimate::{
    estimate_tg7b, scale_tg13b, unified_notes, vram_notes, UnifiedProfile, VendorClass,
};

/// Separates card memory from bandwidth in a compare subtitle (em dash)
pub const SUBTITLE_SEPARATOR: &str = "\u{2014}";

/// Frameworks listed for unified-memory Apple systems
pub const APPLE_FRAMEWORK: &str = "MLX / llama.cpp Metal";

/// Frameworks listed for a discrete-card vendor
pub fn framework(vendor: VendorClass) -> &'static str {
    match vendor {
        VendorClass::Nvidia => "CUDA / llama.cpp / ExLlamaV2",
        VendorClass::Amd => "ROCm / llama.cpp / Vulkan",
    }
}

fn raw_or_unknown(q: &Option<Quantity>) -> &str {
    q.as_ref().map(Quantity::raw).unwrap_or("?")
}

/// Project a unified-memory configuration into a compare record
pub fn compare_unified(
    key: &str,
    config: &AppleConfig,
    profile: &UnifiedProfile,
) -> Result<CompareRecord, FieldError> {
    let memory_gb = required(&config.memory, "memory")?;

    Ok(CompareRecord {
        name: format!("Mac Studio {}", config.chip_label()?),
        subtitle: format!(
            "{} CPU / {} GPU / {}",
            raw_or_unknown(&config.cpu),
            raw_or_unknown(&config.gpu),
            raw_or_unknown(&config.memory)
        ),
        manufacturer: Manufacturer::Apple,
        memory_gb,
        bandwidth_gbs: bandwidth_or(config, profile)?,
        cpu_cores: optional(&config.cpu, "cpu")?,
        gpu_cores: optional(&config.gpu, "gpu")?,
        unified: true,
        tg7b: Some(profile.tg7b),
        tg13b: Some(profile.tg13b),
        tg70b: profile.tg70b(memory_gb),
        tg120b: profile.tg120b(memory_gb),
        price: price(&config.price)?,
        framework: APPLE_FRAMEWORK.to_string(),
        vram_gb: memory_gb,
        notes: unified_notes(config.product_line(key), memory_gb).to_string(),
    })
}

/// Project a discrete card into a compare record
pub fn compare_card(card: &CardSpec, vendor: VendorClass) -> Result<CompareRecord, FieldError> {
    let name = required_text(&card.name, "name")?;
    let vram_gb = required(&card.vram, "vram")?;
    let bandwidth_gbs = required(&card.memory_bandwidth, "memoryBandwidth")?;
    let tg7b = estimate_tg7b(bandwidth_gbs, vendor);

    Ok(CompareRecord {
        name: name.to_string(),
        subtitle: format!(
            "{} {} {} {}",
            raw_or_unknown(&card.vram),
            text(&card.vram_type, "vramType")?.unwrap_or_default(),
            SUBTITLE_SEPARATOR,
            raw_or_unknown(&card.memory_bandwidth)
        ),
        manufacturer: vendor.into(),
        memory_gb: vram_gb,
        bandwidth_gbs,
        cpu_cores: None,
        gpu_cores: None,
        unified: false,
        tg7b: Some(tg7b),
        tg13b: Some(scale_tg13b(tg7b, vendor)),
        tg70b: None,
        tg120b: None,
        price: price(&card.price)?,
        framework: framework(vendor).to_string(),
        vram_gb,
        notes: vram_notes(name, vram_gb),
    })
}
