//! Resource types and key prefixes of the shop items.
//!
//! Item keys are dotted strings: the prefix followed by the field name,
//! e.g. `order.product.attribute.` + `code`.

/// Resource type of catalog attribute items.
pub const ATTRIBUTE: &str = "attribute";

/// Resource type of attributes attached to ordered products.
pub const ORDER_PRODUCT_ATTRIBUTE: &str = "order/product/attribute";

/// Key prefix of catalog attribute items.
pub const ATTRIBUTE_PREFIX: &str = "attribute.";

/// Key prefix of order product attribute items.
pub const ORDER_PRODUCT_ATTRIBUTE_PREFIX: &str = "order.product.attribute.";

/// Layout of stored creation and modification timestamps.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
