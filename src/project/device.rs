//! Device-list projection

use super::{
    bandwidth_or, price, required, required_text, DeviceRecord, DeviceTier, Manufacturer,
};
use crate::catalog::{AppleConfig, CardSpec, Quantity};
use crate::error::FieldError;
use crate::estimate::{
    classify_suitability, estimate_tg7b, unified_best_for, UnifiedProfile, VendorClass,
};

impl From<VendorClass> for Manufacturer {
    fn from(vendor: VendorClass) -> Self {
        match vendor {
            VendorClass::Nvidia => Manufacturer::Nvidia,
            VendorClass::Amd => Manufacturer::Amd,
        }
    }
}

/// Project a discrete card into a device record
pub fn project_card(card: &CardSpec, vendor: VendorClass) -> Result<DeviceRecord, FieldError> {
    let name = required_text(&card.name, "name")?;
    let vram_gb = required(&card.vram, "vram")?;
    let bandwidth_gbs = required(&card.memory_bandwidth, "memoryBandwidth")?;

    Ok(DeviceRecord {
        name: name.to_string(),
        manufacturer: vendor.into(),
        vram_gb,
        bandwidth_gbs,
        tg7b: estimate_tg7b(bandwidth_gbs, vendor),
        tg70b: None,
        price: price(&card.price)?,
        tier: DeviceTier::Consumer,
        best_for: classify_suitability(vram_gb, bandwidth_gbs).to_string(),
    })
}

/// Project a top-tier unified-memory desktop into a device record
pub fn project_unified_device(
    config: &AppleConfig,
    profile: &UnifiedProfile,
) -> Result<DeviceRecord, FieldError> {
    let memory_gb = required(&config.memory, "memory")?;
    let memory = config.memory.as_ref().map(Quantity::raw).unwrap_or_default();

    Ok(DeviceRecord {
        name: format!("{} ({})", config.chip_label()?, memory),
        manufacturer: Manufacturer::Apple,
        vram_gb: memory_gb,
        bandwidth_gbs: bandwidth_or(config, profile)?,
        tg7b: profile.tg7b,
        tg70b: profile.tg70b(memory_gb),
        price: price(&config.price)?,
        tier: DeviceTier::Desktop,
        best_for: unified_best_for(memory_gb),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FieldValue;
    use crate::estimate::MAC_STUDIO;

    fn card(vram: &str, bandwidth: &str) -> CardSpec {
        CardSpec {
            name: Some(FieldValue::from("Test Card")),
            vram: Some(Quantity::new(vram)),
            vram_type: Some(FieldValue::from("GDDR7")),
            memory_bandwidth: Some(Quantity::new(bandwidth)),
            price: Some(FieldValue::from(999)),
        }
    }

    fn ultra(memory: &str) -> AppleConfig {
        AppleConfig {
            chip: Some(FieldValue::from("M3 Ultra")),
            memory: Some(Quantity::new(memory)),
            cpu: Some(Quantity::new("28-core")),
            gpu: Some(Quantity::new("60-core")),
            price: Some(FieldValue::from(3999)),
            ..Default::default()
        }
    }

    #[test]
    fn test_project_card() {
        let record = project_card(&card("32 GB", "1792 GB/s"), VendorClass::Nvidia).unwrap();
        assert_eq!(record.vram_gb, 32);
        assert_eq!(record.bandwidth_gbs, 1792);
        assert_eq!(record.tg7b, 250);
        assert_eq!(record.tg70b, None);
        assert_eq!(record.tier, DeviceTier::Consumer);
        assert_eq!(record.best_for, "fastest tier, small models");
        assert_eq!(record.manufacturer, Manufacturer::Nvidia);
    }

    #[test]
    fn test_project_card_suitability_by_bandwidth() {
        let fast = project_card(&card("24 GB", "950 GB/s"), VendorClass::Amd).unwrap();
        assert_eq!(fast.best_for, "best value, mid-size models");
        assert_eq!(fast.tg7b, 135);

        let slow = project_card(&card("24 GB", "500 GB/s"), VendorClass::Amd).unwrap();
        assert_eq!(slow.best_for, "good for small-to-mid models");
        assert_eq!(slow.tg7b, 90);
    }

    #[test]
    fn test_project_card_malformed() {
        let err = project_card(&card("lots", "1008 GB/s"), VendorClass::Nvidia).unwrap_err();
        assert_eq!(err, FieldError::malformed("vram", "lots"));

        let mut missing = card("24 GB", "1008 GB/s");
        missing.memory_bandwidth = None;
        let err = project_card(&missing, VendorClass::Nvidia).unwrap_err();
        assert_eq!(err.field(), "memoryBandwidth");
    }

    #[test]
    fn test_project_card_wrongly_typed_leaves() {
        let mut fractional = card("24 GB", "1008 GB/s");
        fractional.price = Some(serde_json::from_str("449.99").unwrap());
        let err = project_card(&fractional, VendorClass::Nvidia).unwrap_err();
        assert_eq!(err, FieldError::malformed("price", "449.99"));

        let mut unnamed = card("24 GB", "1008 GB/s");
        unnamed.name = None;
        let err = project_card(&unnamed, VendorClass::Nvidia).unwrap_err();
        assert_eq!(err, FieldError::Missing { field: "name" });

        let mut numeric_chip = ultra("512GB");
        numeric_chip.chip = Some(FieldValue::from(3));
        let err = project_unified_device(&numeric_chip, &MAC_STUDIO).unwrap_err();
        assert_eq!(err.field(), "chip");
    }

    #[test]
    fn test_project_unified_device() {
        let record = project_unified_device(&ultra("512GB"), &MAC_STUDIO).unwrap();
        assert_eq!(record.name, "M3 Ultra (512GB)");
        assert_eq!(record.tg7b, 120);
        assert_eq!(record.tg70b, Some(20));
        assert_eq!(record.bandwidth_gbs, 800);
        assert_eq!(record.tier, DeviceTier::Desktop);
        assert_eq!(record.best_for, "Up to 200B models; silent & efficient");

        let record = project_unified_device(&ultra("200GB"), &MAC_STUDIO).unwrap();
        assert_eq!(record.tg70b, Some(16));

        let record = project_unified_device(&ultra("96GB"), &MAC_STUDIO).unwrap();
        assert_eq!(record.tg70b, None);
    }

    #[test]
    fn test_projection_is_deterministic() {
        let rtx = card("16 GB", "448 GB/s");
        let a = project_card(&rtx, VendorClass::Nvidia).unwrap();
        let b = project_card(&rtx, VendorClass::Nvidia).unwrap();
        assert_eq!(
            serde_json::to_vec(&a).unwrap(),
            serde_json::to_vec(&b).unwrap()
        );
    }
}
