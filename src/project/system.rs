//! System-list projection

use super::{
    bandwidth_or, price, required, text, FormFactor, Manufacturer, OperatingSystem, Priority,
    SystemRecord,
};
use crate::catalog::{AppleConfig, Quantity};
use crate::error::FieldError;
use crate::estimate::{estimate_max_model_size, UnifiedProfile, MAC_BOOK_PRO, MAC_STUDIO};

/// Unified-memory system family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SystemFamily {
    /// Mac Studio
    MacStudio,
    /// MacBook Pro
    MacBookPro,
}

impl SystemFamily {
    /// Fixed estimates for this family
    pub fn profile(&self) -> &'static UnifiedProfile {
        match self {
            SystemFamily::MacStudio => &MAC_STUDIO,
            SystemFamily::MacBookPro => &MAC_BOOK_PRO,
        }
    }

    /// Form factor of every configuration in this family
    pub fn form_factor(&self) -> FormFactor {
        match self {
            SystemFamily::MacStudio => FormFactor::Desktop,
            SystemFamily::MacBookPro => FormFactor::Laptop,
        }
    }

    /// Priority tags, fixed per family
    pub fn priority(&self) -> Vec<Priority> {
        match self {
            SystemFamily::MacStudio => vec![Priority::Capacity, Priority::Value],
            SystemFamily::MacBookPro => vec![Priority::Capacity, Priority::Portable],
        }
    }

    fn display_name(&self, config: &AppleConfig) -> Result<String, FieldError> {
        let chip = config.chip_label()?;
        Ok(match self {
            SystemFamily::MacStudio => format!(
                "Apple Mac Studio ({} {})",
                chip,
                config.memory.as_ref().map(Quantity::raw).unwrap_or_default()
            ),
            SystemFamily::MacBookPro => {
                format!("Apple {}", text(&config.name, "name")?.unwrap_or(chip))
            }
        })
    }
}

/// Project a unified-memory configuration into a system record
pub fn project_system(
    config: &AppleConfig,
    family: SystemFamily,
) -> Result<SystemRecord, FieldError> {
    let profile = family.profile();
    let memory_gb = required(&config.memory, "memory")?;
    let list_price = price(&config.price)?;

    Ok(SystemRecord {
        name: family.display_name(config)?,
        manufacturer: Manufacturer::Apple,
        operating_systems: vec![OperatingSystem::MacOs],
        form_factor: family.form_factor(),
        unified: true,
        memory_gb,
        vram_gb: memory_gb,
        bandwidth_gbs: bandwidth_or(config, profile)?,
        min_price: list_price,
        max_price: list_price.map(|p| p.saturating_add(profile.price_headroom)),
        max_model_b: estimate_max_model_size(memory_gb),
        tg7b: profile.tg7b,
        tg13b: profile.tg13b,
        tg70b: profile.tg70b(memory_gb),
        priority: family.priority(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FieldValue;

    fn config(name: Option<&str>, chip: &str, memory: &str, price: u32) -> AppleConfig {
        AppleConfig {
            name: name.map(FieldValue::from),
            chip: Some(FieldValue::from(chip)),
            memory: Some(Quantity::new(memory)),
            price: Some(FieldValue::from(price)),
            ..Default::default()
        }
    }

    #[test]
    fn test_project_mac_studio() {
        let record =
            project_system(&config(None, "M3 Ultra", "256GB", 5599), SystemFamily::MacStudio)
                .unwrap();
        assert_eq!(record.name, "Apple Mac Studio (M3 Ultra 256GB)");
        assert_eq!(record.form_factor, FormFactor::Desktop);
        assert_eq!(record.memory_gb, 256);
        assert_eq!(record.vram_gb, 256);
        assert_eq!(record.bandwidth_gbs, 800);
        assert_eq!((record.min_price, record.max_price), (Some(5599), Some(6599)));
        assert_eq!(record.max_model_b, 120);
        assert_eq!((record.tg7b, record.tg13b, record.tg70b), (120, 72, Some(20)));
        assert_eq!(record.priority, vec![Priority::Capacity, Priority::Value]);
    }

    #[test]
    fn test_project_mac_book_pro() {
        let record = project_system(
            &config(Some("MacBook Pro 16\" M4 Max"), "M4 Max", "128GB", 4999),
            SystemFamily::MacBookPro,
        )
        .unwrap();
        assert_eq!(record.name, "Apple MacBook Pro 16\" M4 Max");
        assert_eq!(record.form_factor, FormFactor::Laptop);
        assert_eq!(record.bandwidth_gbs, 410);
        assert_eq!(record.max_price, Some(5499));
        assert_eq!((record.tg7b, record.tg13b, record.tg70b), (75, 45, Some(6)));
        assert_eq!(record.priority, vec![Priority::Capacity, Priority::Portable]);

        let record = project_system(
            &config(Some("MacBook Pro 14\" M4 Pro"), "M4 Pro", "48GB", 2399),
            SystemFamily::MacBookPro,
        )
        .unwrap();
        assert_eq!(record.tg70b, None);
        assert_eq!(record.max_model_b, 20);
    }

    #[test]
    fn test_stated_bandwidth_wins() {
        let mut cfg = config(None, "M4 Max", "64GB", 2999);
        cfg.memory_bandwidth = Some(Quantity::new("546 GB/s"));
        let record = project_system(&cfg, SystemFamily::MacStudio).unwrap();
        assert_eq!(record.bandwidth_gbs, 546);
    }

    #[test]
    fn test_missing_price_is_null_range() {
        let mut cfg = config(None, "M3 Ultra", "96GB", 0);
        cfg.price = None;
        let record = project_system(&cfg, SystemFamily::MacStudio).unwrap();
        assert_eq!((record.min_price, record.max_price), (None, None));
    }

    #[test]
    fn test_string_price_accepted_fractional_rejected() {
        let mut cfg = config(None, "M3 Ultra", "96GB", 0);
        cfg.price = Some(FieldValue::from("3999"));
        let record = project_system(&cfg, SystemFamily::MacStudio).unwrap();
        assert_eq!(record.max_price, Some(4999));

        cfg.price = Some(serde_json::from_str("3999.5").unwrap());
        let err = project_system(&cfg, SystemFamily::MacStudio).unwrap_err();
        assert_eq!(err.field(), "price");
    }
}
