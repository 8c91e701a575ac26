use crate::Attribute;
use mshop_kernel::coerce::{as_int, as_text};
use mshop_kernel::domain::constants::{ATTRIBUTE, ATTRIBUTE_PREFIX};
use mshop_kernel::item::{Item, ItemBase, ItemMap};
use mshop_kernel::validate::{DEFAULT_CODE_LENGTH, check_code};
use mshop_kernel::{ItemError, ItemErrorExt};
use serde_json::Value;
use std::borrow::Cow;

/// Dotted keys of the attribute fields.
pub mod keys {
    pub const ID: &str = "attribute.id";
    pub const SITE_ID: &str = "attribute.siteid";
    pub const DOMAIN: &str = "attribute.domain";
    pub const TYPE: &str = "attribute.type";
    pub const CODE: &str = "attribute.code";
    pub const LABEL: &str = "attribute.label";
    pub const POSITION: &str = "attribute.position";
    pub const STATUS: &str = "attribute.status";
}

const DOMAIN_LENGTH: usize = 32;
const CODE_LENGTH: usize = 255;

/// Catalog attribute item.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeItem {
    base: ItemBase,
}

impl Default for AttributeItem {
    fn default() -> Self {
        Self::new(ItemMap::new())
    }
}

impl From<ItemMap> for AttributeItem {
    fn from(values: ItemMap) -> Self {
        Self::new(values)
    }
}

impl AttributeItem {
    #[must_use]
    pub fn new(values: ItemMap) -> Self {
        Self { base: ItemBase::new(ATTRIBUTE_PREFIX, values) }
    }

    pub fn set_site_id(&mut self, site_id: impl Into<String>) -> &mut Self {
        self.base.set(keys::SITE_ID, site_id.into());
        self
    }

    /// Domain the attribute belongs to, e.g. `product`.
    #[must_use]
    pub fn domain(&self) -> Cow<'_, str> {
        self.base.text(keys::DOMAIN)
    }

    /// # Errors
    /// Returns [`ItemError::Validation`] for empty domains or domains longer than 32 characters.
    pub fn set_domain(&mut self, domain: impl Into<String>) -> Result<&mut Self, ItemError> {
        let domain = check_code(domain, DOMAIN_LENGTH)?;
        self.base.set(keys::DOMAIN, domain);
        Ok(self)
    }

    #[must_use]
    pub fn kind(&self) -> Cow<'_, str> {
        self.base.text(keys::TYPE)
    }

    /// # Errors
    /// Returns [`ItemError::Validation`] for empty types or types longer than 64 characters.
    pub fn set_kind(&mut self, kind: impl Into<String>) -> Result<&mut Self, ItemError> {
        let kind = check_code(kind, DEFAULT_CODE_LENGTH)?;
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

    #[must_use]
    pub fn label(&self) -> Cow<'_, str> {
        self.base.text(keys::LABEL)
    }

    pub fn set_label(&mut self, label: impl Into<String>) -> &mut Self {
        self.base.set(keys::LABEL, label.into());
        self
    }

    /// Display name. Localized texts are not attached here, so this is the label.
    #[must_use]
    pub fn name(&self) -> Cow<'_, str> {
        self.label()
    }

    #[must_use]
    pub fn position(&self) -> i64 {
        self.base.int_or(keys::POSITION, 0)
    }

    pub fn set_position(&mut self, position: i64) -> &mut Self {
        self.base.set(keys::POSITION, position);
        self
    }

    /// Status of the item: `1` enabled, `0` disabled, negative values archived.
    #[must_use]
    pub fn status(&self) -> i64 {
        self.base.int_or(keys::STATUS, 1)
    }

    pub fn set_status(&mut self, status: i64) -> &mut Self {
        self.base.set(keys::STATUS, status);
        self
    }

    /// Unique key within a site: `domain|type|code`.
    #[must_use]
    pub fn key(&self) -> String {
        format!("{}|{}|{}", self.domain(), self.kind(), self.code())
    }
}

impl Item for AttributeItem {
    fn base(&self) -> &ItemBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ItemBase {
        &mut self.base
    }

    fn resource_type(&self) -> &'static str {
        ATTRIBUTE
    }

    fn from_array(&mut self, list: &mut ItemMap, private: bool) -> Result<&mut Self, ItemError> {
        for (key, max_len) in
            [(keys::DOMAIN, DOMAIN_LENGTH), (keys::TYPE, DEFAULT_CODE_LENGTH), (keys::CODE, CODE_LENGTH)]
        {
            if let Some(value) = list.get(key) {
                check_code(as_text(value), max_len).context(key)?;
            }
        }

        self.base.from_array(list, private)?;

        let known: Vec<String> =
            list.keys().filter(|k| k.starts_with(ATTRIBUTE_PREFIX)).cloned().collect();

        for key in known {
            let Some(value) = list.get(&key) else { continue };

            match key.as_str() {
                keys::SITE_ID => {
                    if private {
                        self.set_site_id(as_text(value));
                    }
                },
                keys::DOMAIN => {
                    self.set_domain(as_text(value)).context(keys::DOMAIN)?;
                },
                keys::TYPE => {
                    self.set_kind(as_text(value)).context(keys::TYPE)?;
                },
                keys::CODE => {
                    self.set_code(as_text(value)).context(keys::CODE)?;
                },
                keys::LABEL => {
                    self.set_label(as_text(value));
                },
                keys::POSITION => {
                    self.set_position(as_int(value));
                },
                keys::STATUS => {
                    self.set_status(as_int(value));
                },
                _ => continue,
            }

            list.remove(&key);
        }

        Ok(self)
    }

    fn to_array(&self, private: bool) -> ItemMap {
        let mut list = self.base.to_array(private);

        list.insert(keys::DOMAIN.to_owned(), Value::from(self.domain().into_owned()));
        list.insert(keys::TYPE.to_owned(), Value::from(self.kind().into_owned()));
        list.insert(keys::CODE.to_owned(), Value::from(self.code().into_owned()));
        list.insert(keys::LABEL.to_owned(), Value::from(self.label().into_owned()));
        list.insert(keys::POSITION.to_owned(), Value::from(self.position()));
        list.insert(keys::STATUS.to_owned(), Value::from(self.status()));

        list
    }
}

impl Attribute for AttributeItem {
    fn kind(&self) -> Cow<'_, str> {
        Self::kind(self)
    }

    fn code(&self) -> Cow<'_, str> {
        Self::code(self)
    }

    fn name(&self) -> Cow<'_, str> {
        Self::name(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let item = AttributeItem::default();

        assert_eq!(item.domain(), "");
        assert_eq!(item.kind(), "");
        assert_eq!(item.code(), "");
        assert_eq!(item.name(), "");
        assert_eq!(item.position(), 0);
        assert_eq!(item.status(), 1);
        assert_eq!(item.resource_type(), "attribute");
        assert!(!item.is_modified());
    }

    #[test]
    fn test_key_joins_domain_type_code() {
        let mut item = AttributeItem::default();
        item.set_domain("product").unwrap().set_kind("color").unwrap().set_code("red").unwrap();

        assert_eq!(item.key(), "product|color|red");
    }

    #[test]
    fn test_invalid_domain_keeps_old_value() {
        let mut item = AttributeItem::default();
        item.set_domain("product").unwrap();

        assert!(item.set_domain("d".repeat(33)).is_err());
        assert_eq!(item.domain(), "product");
    }
}
