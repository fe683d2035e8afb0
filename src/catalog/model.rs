//! Typed catalog document
//!
//! Manufacturers, families and generations are closed sets of named
//! fields. Every subtree is optional; an absent subtree contributes no
//! entries. Auxiliary sections are kept as raw JSON and passed through.

use super::{FieldValue, OrderedMap, Quantity};
use crate::error::FieldError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The full hardware catalog
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    /// Catalog-level metadata
    #[serde(default)]
    pub metadata: Option<Metadata>,
    /// Apple unified-memory systems
    #[serde(default)]
    pub apple: Option<AppleCatalog>,
    /// NVIDIA discrete cards
    #[serde(default)]
    pub nvidia: Option<NvidiaCatalog>,
    /// AMD discrete cards
    #[serde(default)]
    pub amd: Option<AmdCatalog>,
    /// GPU ranking lists (pass-through)
    #[serde(default)]
    pub gpu_rankings: Option<Value>,
    /// Use-case requirement tables (pass-through)
    #[serde(default)]
    pub use_cases: Option<Value>,
    /// DIY build recommendations (pass-through)
    #[serde(default)]
    pub diy_recommendations: Option<Value>,
    /// Prebuilt system recommendations (pass-through)
    #[serde(default)]
    pub prebuilt_systems: Option<Value>,
}

/// Catalog-level metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    /// Last-updated stamp as authored
    #[serde(default)]
    pub last_updated: Option<String>,
    /// Data version label
    #[serde(default)]
    pub version: Option<String>,
    /// Where the figures came from
    #[serde(default)]
    pub sources: Vec<String>,
}

impl Metadata {
    /// Last-updated stamp as a calendar date.
    ///
    /// Accepts `YYYY-MM-DD` or a full RFC 3339 timestamp.
    pub fn last_updated_date(&self) -> Option<NaiveDate> {
        let raw = self.last_updated.as_deref()?.trim();
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok().or_else(|| {
            chrono::DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.date_naive())
        })
    }
}

/// Apple product families
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppleCatalog {
    /// Mac Studio desktops
    #[serde(default)]
    pub mac_studio: Option<AppleFamily>,
    /// MacBook Pro laptops
    #[serde(default)]
    pub mac_book_pro: Option<AppleFamily>,
}

/// One Apple family: a table of configurations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppleFamily {
    /// Configurations keyed by model key
    #[serde(default)]
    pub configurations: Option<OrderedMap<AppleConfig>>,
}

/// One unified-memory system configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppleConfig {
    /// Marketing name (MacBook Pro entries)
    #[serde(default)]
    pub name: Option<FieldValue>,
    /// Chip label, e.g. "M3 Ultra"
    #[serde(default)]
    pub chip: Option<FieldValue>,
    /// Unified memory, e.g. "512GB"
    #[serde(default)]
    pub memory: Option<Quantity>,
    /// CPU core count, e.g. "32-core"
    #[serde(default)]
    pub cpu: Option<Quantity>,
    /// GPU core count, e.g. "80-core"
    #[serde(default)]
    pub gpu: Option<Quantity>,
    /// Memory bandwidth, when the catalog states it
    #[serde(default)]
    pub memory_bandwidth: Option<Quantity>,
    /// List price in USD
    #[serde(default)]
    pub price: Option<FieldValue>,
}

/// Chip variant within an Apple generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductLine {
    /// Base chip
    Base,
    /// Pro chip
    Pro,
    /// Max chip (mid tier for inference)
    Max,
    /// Ultra chip (top tier)
    Ultra,
}

impl ProductLine {
    /// Classify a chip label or model key, case-insensitively
    pub fn classify(label: &str) -> Self {
        let label = label.to_lowercase();
        if label.contains("ultra") {
            ProductLine::Ultra
        } else if label.contains("max") {
            ProductLine::Max
        } else if label.contains("pro") {
            ProductLine::Pro
        } else {
            ProductLine::Base
        }
    }

    /// Whether this is the top tier of its family
    pub fn is_top_tier(&self) -> bool {
        matches!(self, ProductLine::Ultra)
    }
}

impl AppleConfig {
    /// Product line from the chip label, falling back to the model key
    pub fn product_line(&self, key: &str) -> ProductLine {
        ProductLine::classify(self.chip.as_ref().and_then(FieldValue::as_str).unwrap_or(key))
    }

    /// Chip label, or an empty string when absent
    pub fn chip_label(&self) -> Result<&str, FieldError> {
        match &self.chip {
            Some(chip) => chip.text("chip"),
            None => Ok(""),
        }
    }
}

/// NVIDIA product families
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NvidiaCatalog {
    /// GeForce consumer cards
    #[serde(default)]
    pub consumer: Option<NvidiaConsumer>,
}

/// NVIDIA consumer generations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NvidiaConsumer {
    /// RTX 50 series
    #[serde(default, rename = "50series")]
    pub series_50: Option<CardSeries>,
    /// RTX 40 series
    #[serde(default, rename = "40series")]
    pub series_40: Option<CardSeries>,
    /// RTX 30 series
    #[serde(default, rename = "30series")]
    pub series_30: Option<CardSeries>,
}

/// AMD product families
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AmdCatalog {
    /// Radeon consumer cards
    #[serde(default)]
    pub radeon: Option<AmdRadeon>,
}

/// AMD Radeon generations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AmdRadeon {
    /// RX 7000 series
    #[serde(default, rename = "7000series")]
    pub series_7000: Option<CardSeries>,
}

/// One card generation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardSeries {
    /// Cards keyed by model key
    #[serde(default)]
    pub cards: Option<OrderedMap<CardSpec>>,
}

/// One discrete accelerator card
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardSpec {
    /// Marketing name
    #[serde(default)]
    pub name: Option<FieldValue>,
    /// Dedicated memory, e.g. "24 GB"
    #[serde(default)]
    pub vram: Option<Quantity>,
    /// Memory technology, e.g. "GDDR6X"
    #[serde(default)]
    pub vram_type: Option<FieldValue>,
    /// Memory bandwidth, e.g. "1008 GB/s"
    #[serde(default)]
    pub memory_bandwidth: Option<Quantity>,
    /// List price in USD
    #[serde(default)]
    pub price: Option<FieldValue>,
}

impl NvidiaCatalog {
    /// Consumer generations, newest first, skipping absent ones
    pub fn consumer_series(&self) -> impl Iterator<Item = &CardSeries> {
        let consumer = self.consumer.as_ref();
        [
            consumer.and_then(|c| c.series_50.as_ref()),
            consumer.and_then(|c| c.series_40.as_ref()),
            consumer.and_then(|c| c.series_30.as_ref()),
        ]
        .into_iter()
        .flatten()
    }
}

impl AmdCatalog {
    /// Radeon generations, newest first, skipping absent ones
    pub fn radeon_series(&self) -> impl Iterator<Item = &CardSeries> {
        self.radeon
            .as_ref()
            .and_then(|r| r.series_7000.as_ref())
            .into_iter()
    }
}

impl CardSeries {
    /// Cards in document order; empty when the table is absent
    pub fn cards(&self) -> impl Iterator<Item = (&str, &CardSpec)> {
        self.cards.iter().flat_map(|m| m.iter())
    }
}

impl AppleFamily {
    /// Configurations in document order; empty when the table is absent
    pub fn configurations(&self) -> impl Iterator<Item = (&str, &AppleConfig)> {
        self.configurations.iter().flat_map(|m| m.iter())
    }
}

impl Catalog {
    /// Parse a catalog document from JSON text
    pub fn from_json(text: &str) -> crate::error::Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Mac Studio configurations in document order
    pub fn mac_studio(&self) -> impl Iterator<Item = (&str, &AppleConfig)> {
        self.apple
            .as_ref()
            .and_then(|a| a.mac_studio.as_ref())
            .into_iter()
            .flat_map(|f| f.configurations())
    }

    /// MacBook Pro configurations in document order
    pub fn mac_book_pro(&self) -> impl Iterator<Item = (&str, &AppleConfig)> {
        self.apple
            .as_ref()
            .and_then(|a| a.mac_book_pro.as_ref())
            .into_iter()
            .flat_map(|f| f.configurations())
    }

    /// NVIDIA consumer cards, 50 series first, in document order
    pub fn nvidia_cards(&self) -> impl Iterator<Item = (&str, &CardSpec)> {
        self.nvidia
            .iter()
            .flat_map(|n| n.consumer_series())
            .flat_map(|s| s.cards())
    }

    /// AMD Radeon cards in document order
    pub fn amd_cards(&self) -> impl Iterator<Item = (&str, &CardSpec)> {
        self.amd
            .iter()
            .flat_map(|a| a.radeon_series())
            .flat_map(|s| s.cards())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_empty_catalog() {
        let catalog = Catalog::from_json("{}").unwrap();
        assert_eq!(catalog, Catalog::default());
        assert_eq!(catalog.nvidia_cards().count(), 0);
        assert_eq!(catalog.mac_studio().count(), 0);
    }

    #[test]
    fn test_partial_tree_tolerated() {
        let catalog = Catalog::from_json(
            r#"{
                "nvidia": { "consumer": { "40series": {} } },
                "amd": {},
                "apple": { "macStudio": {} }
            }"#,
        )
        .unwrap();
        assert_eq!(catalog.nvidia_cards().count(), 0);
        assert_eq!(catalog.amd_cards().count(), 0);
        assert_eq!(catalog.mac_studio().count(), 0);
    }

    #[test]
    fn test_series_order_newest_first() {
        let catalog = Catalog::from_json(
            r#"{
                "nvidia": { "consumer": {
                    "30series": { "cards": { "rtx3090": { "name": "RTX 3090" } } },
                    "50series": { "cards": { "rtx5090": { "name": "RTX 5090" } } }
                } }
            }"#,
        )
        .unwrap();
        let keys: Vec<_> = catalog.nvidia_cards().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["rtx5090", "rtx3090"]);
    }

    #[test]
    fn test_product_line_classify() {
        assert_eq!(ProductLine::classify("M3 Ultra"), ProductLine::Ultra);
        assert_eq!(ProductLine::classify("M4 Max"), ProductLine::Max);
        assert_eq!(ProductLine::classify("M4 Pro"), ProductLine::Pro);
        assert_eq!(ProductLine::classify("M4"), ProductLine::Base);
        assert_eq!(ProductLine::classify("m3-ultra-256"), ProductLine::Ultra);

        let config = AppleConfig::default();
        assert_eq!(config.product_line("m3-ultra-96"), ProductLine::Ultra);
        assert!(config.product_line("m3-ultra-96").is_top_tier());
    }

    #[test]
    fn test_metadata_date() {
        let meta = Metadata {
            last_updated: Some("2025-03-14".to_string()),
            ..Default::default()
        };
        assert_eq!(meta.last_updated_date(), NaiveDate::from_ymd_opt(2025, 3, 14));

        let meta = Metadata {
            last_updated: Some("2025-03-14T09:00:00Z".to_string()),
            ..Default::default()
        };
        assert_eq!(meta.last_updated_date(), NaiveDate::from_ymd_opt(2025, 3, 14));

        assert_eq!(Metadata::default().last_updated_date(), None);
    }
}
