//! # Order slice
//!
//! Items that belong to a placed order. An order keeps its own copies of everything the
//! customer chose, so later catalog changes never alter what was ordered.
//!
//! ## Product attributes
//!
//! [`OrderProductAttribute`] holds one characteristic (color, size, custom text, ...) of an
//! ordered product line. It is usually created from the catalog attribute the customer
//! picked:
//!
//! ```rust
//! use mshop_attribute::AttributeItem;
//! use mshop_order::OrderProductAttribute;
//!
//! # fn main() -> Result<(), mshop_kernel::ItemError> {
//! let mut color = AttributeItem::default();
//! color.set_kind("color")?.set_code("red")?.set_label("Red");
//!
//! let mut ordered = OrderProductAttribute::default();
//! ordered.copy_from(&color)?.set_parent_id("42").set_quantity(2);
//!
//! assert_eq!(ordered.code(), "color");
//! assert_eq!(ordered.value(), "red");
//! assert_eq!(ordered.quantity(), 2);
//! # Ok(())
//! # }
//! ```

pub mod product;

pub use product::attribute::OrderProductAttribute;
