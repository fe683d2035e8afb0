//! Catalog walker
//!
//! Enumerates the known manufacturer, family and generation sections in a
//! fixed order and projects each leaf into the requested collection.
//! Absent sections contribute nothing. A leaf whose numeric fields do not
//! parse is skipped and reported; it never aborts the walk.

use crate::catalog::{Catalog, ProductLine};
use crate::error::FieldError;
use crate::estimate::{VendorClass, MAC_STUDIO};
use crate::project::{
    compare_card, compare_unified, project_card, project_system, project_unified_device,
    CompareMap, DeviceRecord, SystemFamily, SystemRecord,
};
use serde::Serialize;
use std::fmt;

/// Derived collection a record belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    /// Device list
    Devices,
    /// System list
    Systems,
    /// Compare mapping
    Compare,
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Collection::Devices => "devices",
            Collection::Systems => "systems",
            Collection::Compare => "compare",
        })
    }
}

/// A catalog entry left out of a collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedRecord {
    /// Collection being built
    pub collection: Collection,
    /// Catalog model key of the entry
    pub key: String,
    /// Why the entry was skipped
    #[serde(serialize_with = "serialize_display")]
    pub error: FieldError,
}

fn serialize_display<S: serde::Serializer>(
    error: &FieldError,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(error)
}

/// Records of one collection plus the entries that could not be projected
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Walk<T> {
    /// Projected records, in catalog order
    pub records: T,
    /// Entries skipped because of malformed fields
    pub skipped: Vec<SkippedRecord>,
}

impl<T> Walk<T> {
    /// Whether every entry was projected
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }

    /// Drop the skip report
    pub fn into_records(self) -> T {
        self.records
    }

    fn skip(&mut self, collection: Collection, key: &str, error: FieldError) {
        tracing::warn!("Skipped {} entry '{}': {}", collection, key, error);
        self.skipped.push(SkippedRecord {
            collection,
            key: key.to_string(),
            error,
        });
    }
}

impl<R> Walk<Vec<R>> {
    fn push(&mut self, collection: Collection, key: &str, result: Result<R, FieldError>) {
        match result {
            Ok(record) => self.records.push(record),
            Err(e) => self.skip(collection, key, e),
        }
    }
}

/// Device list: NVIDIA and AMD cards, then top-tier Mac Studio configurations
pub fn walk_devices(catalog: &Catalog) -> Walk<Vec<DeviceRecord>> {
    let mut walk = Walk::default();

    for (key, card) in catalog.nvidia_cards() {
        walk.push(Collection::Devices, key, project_card(card, VendorClass::Nvidia));
    }
    for (key, card) in catalog.amd_cards() {
        walk.push(Collection::Devices, key, project_card(card, VendorClass::Amd));
    }
    for (key, config) in catalog.mac_studio() {
        // Device rows follow the model key, not the chip label
        if ProductLine::classify(key).is_top_tier() {
            walk.push(
                Collection::Devices,
                key,
                project_unified_device(config, &MAC_STUDIO),
            );
        }
    }

    walk
}

/// System list: Mac Studio, then MacBook Pro configurations
pub fn walk_systems(catalog: &Catalog) -> Walk<Vec<SystemRecord>> {
    let mut walk = Walk::default();

    for (key, config) in catalog.mac_studio() {
        walk.push(
            Collection::Systems,
            key,
            project_system(config, SystemFamily::MacStudio),
        );
    }
    for (key, config) in catalog.mac_book_pro() {
        walk.push(
            Collection::Systems,
            key,
            project_system(config, SystemFamily::MacBookPro),
        );
    }

    walk
}

/// Compare mapping keyed by catalog model key: Mac Studio, NVIDIA, then AMD
pub fn walk_compare(catalog: &Catalog) -> Walk<CompareMap> {
    let mut walk: Walk<CompareMap> = Walk::default();

    let unified = catalog
        .mac_studio()
        .map(|(key, config)| (key, compare_unified(key, config, &MAC_STUDIO)));
    let nvidia = catalog
        .nvidia_cards()
        .map(|(key, card)| (key, compare_card(card, VendorClass::Nvidia)));
    let amd = catalog
        .amd_cards()
        .map(|(key, card)| (key, compare_card(card, VendorClass::Amd)));

    for (key, result) in unified.chain(nvidia).chain(amd) {
        match result {
            Ok(record) => {
                walk.records.insert(key, record);
            }
            Err(e) => walk.skip(Collection::Compare, key, e),
        }
    }

    walk
}
