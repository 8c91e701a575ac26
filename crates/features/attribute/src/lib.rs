//! Catalog attribute slice.
//!
//! Attributes describe selectable product characteristics (color, size, ...). When a
//! customer orders a product, the chosen attributes are copied into the order via the
//! [`Attribute`] capability.
mod item;

pub use item::{AttributeItem, keys};

use mshop_kernel::item::Item;
use std::borrow::Cow;

/// Read access to the attribute fields other slices copy from.
pub trait Attribute: Item {
    /// Attribute type, e.g. `color`.
    fn kind(&self) -> Cow<'_, str>;

    /// Attribute code, e.g. `red`.
    fn code(&self) -> Cow<'_, str>;

    /// Display name of the attribute.
    fn name(&self) -> Cow<'_, str>;
}
