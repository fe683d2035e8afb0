//! Catalog module for hwcatalog
//!
//! Typed model of the hardware catalog document, the numeric-with-unit
//! value type, and the ordered map used for model tables.

mod model;
mod ordered;
mod quantity;

pub use model::*;
pub use ordered::OrderedMap;
pub use quantity::{parse_leading_u32, FieldValue, Quantity};
