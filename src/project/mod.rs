//! Record projection module for hwcatalog
//!
//! Pure transforms from one catalog entry to one derived record. None of
//! them mutate their input, and projecting the same entry twice yields
//! identical records.

mod compare;
mod device;
mod records;
mod system;

pub use compare::{compare_card, compare_unified, framework, APPLE_FRAMEWORK, SUBTITLE_SEPARATOR};
pub use device::{project_card, project_unified_device};
pub use records::*;
pub use system::{project_system, SystemFamily};

use crate::catalog::{AppleConfig, FieldValue, Quantity};
use crate::error::FieldError;
use crate::estimate::UnifiedProfile;

/// Leading integer of a field the record cannot do without
fn required(q: &Option<Quantity>, field: &'static str) -> Result<u32, FieldError> {
    q.as_ref()
        .ok_or(FieldError::Missing { field })?
        .value(field)
}

/// Leading integer of a field that may be absent
fn optional(q: &Option<Quantity>, field: &'static str) -> Result<Option<u32>, FieldError> {
    q.as_ref().map(|q| q.value(field)).transpose()
}

/// Stated bandwidth of a configuration, or the family default
fn bandwidth_or(config: &AppleConfig, profile: &UnifiedProfile) -> Result<u32, FieldError> {
    Ok(optional(&config.memory_bandwidth, "memoryBandwidth")?
        .unwrap_or(profile.default_bandwidth_gbs))
}

/// Price that may be absent; present but not a whole amount is malformed
fn price(v: &Option<FieldValue>) -> Result<Option<u32>, FieldError> {
    v.as_ref().map(|v| v.amount("price")).transpose()
}

/// Text that may be absent; present but not a string is malformed
fn text<'a>(v: &'a Option<FieldValue>, field: &'static str) -> Result<Option<&'a str>, FieldError> {
    v.as_ref().map(|v| v.text(field)).transpose()
}

/// Text the record cannot do without
fn required_text<'a>(
    v: &'a Option<FieldValue>,
    field: &'static str,
) -> Result<&'a str, FieldError> {
    text(v, field)?.ok_or(FieldError::Missing { field })
}
