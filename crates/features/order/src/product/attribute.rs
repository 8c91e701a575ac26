//! Attribute of an ordered product.
//!
//! Stored under the `order.product.attribute.` prefix. The import/export key of the
//! referenced catalog attribute is `order.product.attribute.attrid`, while the value is kept
//! under `order.product.attribute.attributeid` internally.

use mshop_attribute::Attribute;
use mshop_kernel::{ItemError, ItemErrorExt};
use mshop_kernel::coerce::{as_int, as_text};
use mshop_kernel::domain::constants::{ORDER_PRODUCT_ATTRIBUTE, ORDER_PRODUCT_ATTRIBUTE_PREFIX};
use mshop_kernel::item::{Item, ItemBase, ItemMap};
use mshop_kernel::validate::{DEFAULT_CODE_LENGTH, check_code};
use serde_json::Value;
use std::borrow::Cow;
use tracing::debug;

/// Dotted keys of the order product attribute fields.
pub mod keys {
    pub const ID: &str = "order.product.attribute.id";
    pub const SITE_ID: &str = "order.product.attribute.siteid";
    /// Storage key of the catalog attribute id.
    pub const ATTRIBUTE_ID: &str = "order.product.attribute.attributeid";
    /// Import/export key of the catalog attribute id.
    pub const ATTR_ID: &str = "order.product.attribute.attrid";
    pub const PARENT_ID: &str = "order.product.attribute.parentid";
    pub const TYPE: &str = "order.product.attribute.type";
    pub const CODE: &str = "order.product.attribute.code";
    pub const NAME: &str = "order.product.attribute.name";
    pub const VALUE: &str = "order.product.attribute.value";
    pub const QUANTITY: &str = "order.product.attribute.quantity";
    pub const CTIME: &str = "order.product.attribute.ctime";
    pub const MTIME: &str = "order.product.attribute.mtime";
    pub const EDITOR: &str = "order.product.attribute.editor";
}

const TYPE_LENGTH: usize = DEFAULT_CODE_LENGTH;
const CODE_LENGTH: usize = 255;
const DEFAULT_QUANTITY: i64 = 1;

static EMPTY_VALUE: Value = Value::String(String::new());

/// Attribute attached to a product line of an order.
///
/// Unlike the catalog attribute it was copied from, the `code` holds the attribute
/// *type* (e.g. `color`) and the `value` holds the chosen attribute *code* (e.g. `red`),
/// or any structured value for custom attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderProductAttribute {
    base: ItemBase,
}

impl Default for OrderProductAttribute {
    fn default() -> Self {
        Self::new(ItemMap::new())
    }
}

impl From<ItemMap> for OrderProductAttribute {
    fn from(values: ItemMap) -> Self {
        Self::new(values)
    }
}

impl OrderProductAttribute {
    /// Creates the item from initial values keyed by their full dotted names.
    #[must_use]
    pub fn new(values: ItemMap) -> Self {
        Self { base: ItemBase::new(ORDER_PRODUCT_ATTRIBUTE_PREFIX, values) }
    }

    pub fn set_site_id(&mut self, site_id: impl Into<String>) -> &mut Self {
        self.base.set(keys::SITE_ID, site_id.into());
        self
    }

    /// Id of the catalog attribute this item was copied from, empty if none.
    #[must_use]
    pub fn attribute_id(&self) -> Cow<'_, str> {
        self.base.text(keys::ATTRIBUTE_ID)
    }

    pub fn set_attribute_id(&mut self, id: impl Into<String>) -> &mut Self {
        self.base.set(keys::ATTRIBUTE_ID, id.into());
        self
    }

    /// Id of the ordered product line owning this attribute.
    #[must_use]
    pub fn parent_id(&self) -> Option<Cow<'_, str>> {
        self.base.opt_text(keys::PARENT_ID)
    }

    pub fn set_parent_id(&mut self, id: impl Into<String>) -> &mut Self {
        self.base.set(keys::PARENT_ID, id.into());
        self
    }

    /// Attribute type (`order.product.attribute.type`), e.g. `variant` or `config`.
    #[must_use]
    pub fn kind(&self) -> Cow<'_, str> {
        self.base.text(keys::TYPE)
    }

    /// # Errors
    /// Returns [`ItemError::Validation`] for empty types or types longer than 64 characters.
    pub fn set_kind(&mut self, kind: impl Into<String>) -> Result<&mut Self, ItemError> {
        let kind = check_code(kind, TYPE_LENGTH)?;
        self.base.set(keys::TYPE, kind);
        Ok(self)
    }

    #[must_use]
    pub fn code(&self) -> Cow<'_, str> {
        self.base.text(keys::CODE)
    }

    /// # Errors
    /// Returns [`ItemError::Validation`] for empty codes or codes longer than 255 characters.
    pub fn set_code(&mut self, code: impl Into<String>) -> Result<&mut Self, ItemError> {
        let code = check_code(code, CODE_LENGTH)?;
        self.base.set(keys::CODE, code);
        Ok(self)
    }

    /// Localized name of the attribute.
    #[must_use]
    pub fn name(&self) -> Cow<'_, str> {
        self.base.text(keys::NAME)
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.base.set(keys::NAME, name.into());
        self
    }

    /// Scalar or structured value, an empty string if unset.
    #[must_use]
    pub fn value(&self) -> &Value {
        self.base.get(keys::VALUE).unwrap_or(&EMPTY_VALUE)
    }

    pub fn set_value(&mut self, value: impl Into<Value>) -> &mut Self {
        self.base.set(keys::VALUE, value);
        self
    }

    #[must_use]
    pub fn quantity(&self) -> i64 {
        self.base.int_or(keys::QUANTITY, DEFAULT_QUANTITY)
    }

    pub fn set_quantity(&mut self, quantity: i64) -> &mut Self {
        self.base.set(keys::QUANTITY, quantity);
        self
    }

    /// Copies the catalog attribute into this item and marks it as modified.
    ///
    /// The attribute type becomes the `code`, the attribute code becomes the `value`.
    ///
    /// # Errors
    /// Returns [`ItemError::Validation`] if the attribute type is not a valid code. The item
    /// is left untouched in that case.
    pub fn copy_from(&mut self, item: &impl Attribute) -> Result<&mut Self, ItemError> {
        let code = check_code(item.kind(), CODE_LENGTH)?;

        self.set_site_id(item.site_id().unwrap_or_default());
        self.set_attribute_id(item.id().unwrap_or_default());
        self.set_name(item.name());
        self.base.set(keys::CODE, code);
        self.set_value(item.code().into_owned());
        self.set_modified();

        debug!(
            attribute_id = %self.attribute_id(),
            code = %self.code(),
            "Order product attribute copied from catalog attribute"
        );

        Ok(self)
    }
}

impl Item for OrderProductAttribute {
    fn base(&self) -> &ItemBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ItemBase {
        &mut self.base
    }

    fn resource_type(&self) -> &'static str {
        ORDER_PRODUCT_ATTRIBUTE
    }

    /// Type and code are validated before anything is applied, so a rejected import
    /// leaves both the item and `list` unchanged.
    fn from_array(&mut self, list: &mut ItemMap, private: bool) -> Result<&mut Self, ItemError> {
        for (key, max_len) in [(keys::TYPE, TYPE_LENGTH), (keys::CODE, CODE_LENGTH)] {
            if let Some(value) = list.get(key) {
                check_code(as_text(value), max_len).context(key)?;
            }
        }

        self.base.from_array(list, private)?;

        let candidates: Vec<String> = list
            .keys()
            .filter(|k| k.starts_with(ORDER_PRODUCT_ATTRIBUTE_PREFIX))
            .cloned()
            .collect();

        for key in candidates {
            let Some(value) = list.get(&key) else { continue };

            match key.as_str() {
                keys::SITE_ID => {
                    if private {
                        self.set_site_id(as_text(value));
                    }
                },
                keys::ATTR_ID => {
                    if private {
                        self.set_attribute_id(as_text(value));
                    }
                },
                keys::PARENT_ID => {
                    if private {
                        self.set_parent_id(as_text(value));
                    }
                },
                keys::TYPE => {
                    self.set_kind(as_text(value)).context(keys::TYPE)?;
                },
                keys::CODE => {
                    self.set_code(as_text(value)).context(keys::CODE)?;
                },
                keys::VALUE => {
                    self.set_value(value.clone());
                },
                keys::NAME => {
                    self.set_name(as_text(value));
                },
                keys::QUANTITY => {
                    self.set_quantity(as_int(value));
                },
                _ => {
                    debug!(key = %key, "Unknown order product attribute key left for caller");
                    continue;
                },
            }

            list.remove(&key);
        }

        Ok(self)
    }

    fn to_array(&self, private: bool) -> ItemMap {
        let mut list = self.base.to_array(private);

        list.insert(keys::TYPE.to_owned(), Value::from(self.kind().into_owned()));
        list.insert(keys::CODE.to_owned(), Value::from(self.code().into_owned()));
        list.insert(keys::NAME.to_owned(), Value::from(self.name().into_owned()));
        list.insert(keys::VALUE.to_owned(), self.value().clone());
        list.insert(keys::QUANTITY.to_owned(), Value::from(self.quantity()));

        if private {
            list.insert(keys::ATTR_ID.to_owned(), Value::from(self.attribute_id().into_owned()));
            list.insert(
                keys::PARENT_ID.to_owned(),
                Value::from(self.parent_id().map(Cow::into_owned)),
            );
        }

        list
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item(values: Value) -> OrderProductAttribute {
        let Value::Object(map) = values else { unreachable!("test values must be an object") };
        OrderProductAttribute::new(map)
    }

    #[test]
    fn test_defaults() {
        let item = OrderProductAttribute::default();

        assert_eq!(item.kind(), "");
        assert_eq!(item.code(), "");
        assert_eq!(item.name(), "");
        assert_eq!(item.value(), "");
        assert_eq!(item.quantity(), 1);
        assert_eq!(item.attribute_id(), "");
        assert!(item.parent_id().is_none());
        assert!(item.site_id().is_none());
        assert!(item.id().is_none());
        assert!(!item.is_modified());
        assert_eq!(item.resource_type(), "order/product/attribute");
    }

    #[test]
    fn test_constructor_values_are_coerced_on_read() {
        let item = item(json!({
            "order.product.attribute.quantity": "5",
            "order.product.attribute.name": 12,
            "order.product.attribute.attributeid": 33,
            "order.product.attribute.value": { "width": 10 }
        }));

        assert_eq!(item.quantity(), 5);
        assert_eq!(item.name(), "12");
        assert_eq!(item.attribute_id(), "33");
        assert_eq!(item.value(), &json!({ "width": 10 }));
        assert!(!item.is_modified());
    }

    #[test]
    fn test_setters_chain() {
        let mut item = OrderProductAttribute::default();
        item.set_kind("variant")
            .unwrap()
            .set_code("color")
            .unwrap()
            .set_name("Color")
            .set_value("red")
            .set_quantity(3)
            .set_parent_id("7")
            .set_site_id("1.")
            .set_attribute_id("21");

        assert_eq!(item.kind(), "variant");
        assert_eq!(item.code(), "color");
        assert_eq!(item.name(), "Color");
        assert_eq!(item.value(), "red");
        assert_eq!(item.quantity(), 3);
        assert_eq!(item.parent_id().as_deref(), Some("7"));
        assert_eq!(item.site_id().as_deref(), Some("1."));
        assert_eq!(item.attribute_id(), "21");
        assert!(item.is_modified());
    }

    #[test]
    fn test_code_and_type_bounds() {
        let mut item = OrderProductAttribute::default();

        assert!(item.set_code("c".repeat(255)).is_ok());
        assert!(item.set_code("c".repeat(256)).is_err());
        assert_eq!(item.code().len(), 255, "failed set keeps the previous code");

        assert!(item.set_kind("t".repeat(64)).is_ok());
        assert!(item.set_kind("t".repeat(65)).is_err());
        assert!(item.set_kind("").is_err());
        assert_eq!(item.kind().len(), 64);
    }

    #[test]
    fn test_structured_value() {
        let mut item = OrderProductAttribute::default();
        item.set_value(json!(["engraving", "gift"]));

        assert_eq!(item.value(), &json!(["engraving", "gift"]));
        assert_eq!(item.to_array(false)[keys::VALUE], json!(["engraving", "gift"]));
    }
}
