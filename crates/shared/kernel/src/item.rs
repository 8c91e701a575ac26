//! Generic item base.
//!
//! Every entity is a typed view over an [`ItemBase`]: a bag of raw JSON values keyed by
//! dotted names (`<prefix><field>`), plus a dirty flag. The concrete item decides which
//! fields exist and how they are coerced; the base owns the common fields
//! (`id`, `siteid`, `ctime`, `mtime`, `editor`).

use crate::coerce::{as_int, as_text};
use crate::error::ItemError;
use chrono::Utc;
use fxhash::FxHashMap;
use mshop_domain::constants::DATETIME_FORMAT;
use serde_json::Value;
use std::borrow::Cow;
use tracing::trace;

/// Associative map used to construct, import and export items.
pub type ItemMap = serde_json::Map<String, Value>;

const ID: &str = "id";
const SITE_ID: &str = "siteid";
const CTIME: &str = "ctime";
const MTIME: &str = "mtime";
const EDITOR: &str = "editor";

/// Property bag shared by all items.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemBase {
    prefix: &'static str,
    data: FxHashMap<String, Value>,
    modified: bool,
}

impl ItemBase {
    /// Creates the base from initial values keyed by their full dotted names.
    ///
    /// Values are kept as given; coercion happens on read.
    #[must_use]
    pub fn new(prefix: &'static str, values: ItemMap) -> Self {
        Self { prefix, data: values.into_iter().collect(), modified: false }
    }

    /// Key prefix including the trailing dot, e.g. `order.product.attribute.`.
    #[must_use]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Full dotted key of a field.
    #[must_use]
    pub fn key(&self, field: &str) -> String {
        format!("{}{field}", self.prefix)
    }

    /// Raw stored value. `null` counts as unset.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key).filter(|v| !v.is_null())
    }

    /// Stores a raw value and flags the item as modified if the value changed.
    pub fn set(&mut self, key: &str, value: impl Into<Value>) -> &mut Self {
        let value = value.into();
        if self.data.get(key) != Some(&value) {
            self.data.insert(key.to_owned(), value);
            self.modified = true;
        }
        self
    }

    /// Text value of `key`, empty when unset.
    #[must_use]
    pub fn text(&self, key: &str) -> Cow<'_, str> {
        self.text_or(key, "")
    }

    /// Text value of `key`, `default` when unset.
    #[must_use]
    pub fn text_or<'a>(&'a self, key: &str, default: &'a str) -> Cow<'a, str> {
        self.get(key).map_or(Cow::Borrowed(default), as_text)
    }

    /// Text value of `key`, `None` when unset.
    #[must_use]
    pub fn opt_text(&self, key: &str) -> Option<Cow<'_, str>> {
        self.get(key).map(as_text)
    }

    /// Integer value of `key`, `default` when unset.
    #[must_use]
    pub fn int_or(&self, key: &str, default: i64) -> i64 {
        self.get(key).map_or(default, as_int)
    }

    /// Unique id of the item, `None` for items that were never stored.
    #[must_use]
    pub fn id(&self) -> Option<Cow<'_, str>> {
        self.opt_text(&self.key(ID)).filter(|id| !id.is_empty())
    }

    /// Sets or resets the id.
    ///
    /// A stored id marks the item as persisted (not modified). Resetting the id to `None`
    /// flags the item as modified so it is written as a new record.
    ///
    /// # Errors
    /// Returns [`ItemError::Validation`] when a different id is already assigned.
    pub fn set_id(&mut self, id: Option<&str>) -> Result<&mut Self, ItemError> {
        let id = id.filter(|id| !id.is_empty());
        self.check_id(id)?;

        let key = self.key(ID);
        if let Some(id) = id {
            self.data.insert(key, Value::from(id));
            self.modified = false;
        } else {
            trace!(prefix = self.prefix, "Item id reset");
            self.data.remove(&key);
            self.modified = true;
        }
        Ok(self)
    }

    fn check_id(&self, id: Option<&str>) -> Result<(), ItemError> {
        if let (Some(old), Some(new)) = (self.id(), id)
            && old != new
        {
            return Err(ItemError::Validation {
                message: format!("New ID \"{new}\" doesn't match existing ID \"{old}\"").into(),
                context: Some(self.key(ID).into()),
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn site_id(&self) -> Option<Cow<'_, str>> {
        self.opt_text(&self.key(SITE_ID))
    }

    #[must_use]
    pub fn time_created(&self) -> Option<Cow<'_, str>> {
        self.opt_text(&self.key(CTIME))
    }

    #[must_use]
    pub fn time_modified(&self) -> Option<Cow<'_, str>> {
        self.opt_text(&self.key(MTIME))
    }

    /// Name of the user who last changed the item.
    #[must_use]
    pub fn editor(&self) -> Option<Cow<'_, str>> {
        self.opt_text(&self.key(EDITOR))
    }

    #[must_use]
    pub const fn is_modified(&self) -> bool {
        self.modified
    }

    /// Flags the item as modified and stamps the modification time (UTC).
    pub fn set_modified(&mut self) -> &mut Self {
        let now = Utc::now().format(DATETIME_FORMAT).to_string();
        self.data.insert(self.key(MTIME), Value::from(now));
        self.modified = true;
        self
    }

    /// Imports the common fields and removes them from `list`.
    ///
    /// `id`, `ctime`, `mtime` and `editor` are always consumed but only applied when
    /// `private` is set. The site id is left to the concrete item.
    ///
    /// # Errors
    /// Returns [`ItemError::Validation`] if the imported id conflicts with the current one.
    /// Neither the item nor `list` is changed in that case.
    pub fn from_array(&mut self, list: &mut ItemMap, private: bool) -> Result<&mut Self, ItemError> {
        if private && let Some(id) = list.get(&self.key(ID)) {
            self.check_id(Some(as_text(id).as_ref()).filter(|id| !id.is_empty()))?;
        }

        if let Some(id) = list.remove(&self.key(ID))
            && private
        {
            let id = as_text(&id);
            self.set_id(Some(id.as_ref()))?;
        }

        for field in [CTIME, MTIME, EDITOR] {
            let key = self.key(field);
            if let Some(value) = list.remove(&key)
                && private
            {
                self.set(&key, value);
            }
        }

        Ok(self)
    }

    /// Exports the common fields. The id is always included, the rest only if `private`.
    #[must_use]
    pub fn to_array(&self, private: bool) -> ItemMap {
        let mut list = ItemMap::new();
        list.insert(self.key(ID), owned(self.id()));

        if private {
            list.insert(self.key(SITE_ID), owned(self.site_id()));
            list.insert(self.key(CTIME), owned(self.time_created()));
            list.insert(self.key(MTIME), owned(self.time_modified()));
            list.insert(self.key(EDITOR), owned(self.editor()));
        }

        list
    }
}

fn owned(text: Option<Cow<'_, str>>) -> Value {
    Value::from(text.map(Cow::into_owned))
}

/// Capability shared by all items: typed access to the common fields and the
/// map import/export contract.
pub trait Item {
    fn base(&self) -> &ItemBase;

    fn base_mut(&mut self) -> &mut ItemBase;

    /// Item type, subtypes separated by slashes (e.g. `order/product/attribute`).
    fn resource_type(&self) -> &'static str;

    /// Sets the item values from `list` and removes the consumed entries.
    ///
    /// Keys the item does not know stay in `list` for the caller.
    ///
    /// # Errors
    /// Returns [`ItemError::Validation`] if a value fails validation.
    fn from_array(&mut self, list: &mut ItemMap, private: bool) -> Result<&mut Self, ItemError>;

    /// Returns the item values; private fields only if `private` is set.
    fn to_array(&self, private: bool) -> ItemMap;

    fn id(&self) -> Option<Cow<'_, str>> {
        self.base().id()
    }

    /// # Errors
    /// Returns [`ItemError::Validation`] when a different id is already assigned.
    fn set_id(&mut self, id: Option<&str>) -> Result<&mut Self, ItemError> {
        self.base_mut().set_id(id)?;
        Ok(self)
    }

    fn site_id(&self) -> Option<Cow<'_, str>> {
        self.base().site_id()
    }

    fn time_created(&self) -> Option<Cow<'_, str>> {
        self.base().time_created()
    }

    fn time_modified(&self) -> Option<Cow<'_, str>> {
        self.base().time_modified()
    }

    fn editor(&self) -> Option<Cow<'_, str>> {
        self.base().editor()
    }

    fn is_modified(&self) -> bool {
        self.base().is_modified()
    }

    fn set_modified(&mut self) -> &mut Self {
        self.base_mut().set_modified();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item_base(values: Value) -> ItemBase {
        let Value::Object(map) = values else { unreachable!("test values must be an object") };
        ItemBase::new("demo.", map)
    }

    #[test]
    fn test_defaulted_reads() {
        let base = item_base(json!({ "demo.name": "Red", "demo.quantity": "4", "demo.null": null }));

        assert_eq!(base.text("demo.name"), "Red");
        assert_eq!(base.text("demo.missing"), "");
        assert_eq!(base.text_or("demo.null", "fallback"), "fallback");
        assert_eq!(base.int_or("demo.quantity", 1), 4);
        assert_eq!(base.int_or("demo.missing", 1), 1);
        assert!(base.opt_text("demo.null").is_none());
        assert!(!base.is_modified());
    }

    #[test]
    fn test_set_only_flags_changes() {
        let mut base = item_base(json!({ "demo.code": "size" }));

        base.set("demo.code", "size");
        assert!(!base.is_modified());

        base.set("demo.code", "color");
        assert!(base.is_modified());
        assert_eq!(base.text("demo.code"), "color");
    }

    #[test]
    fn test_id_lifecycle() {
        let mut base = item_base(json!({}));
        assert!(base.id().is_none());

        base.set("demo.code", "x");
        base.set_id(Some("15")).unwrap();
        assert_eq!(base.id().as_deref(), Some("15"));
        assert!(!base.is_modified(), "stored items are not modified");

        assert!(base.set_id(Some("16")).is_err());
        assert_eq!(base.id().as_deref(), Some("15"));

        base.set_id(None).unwrap();
        assert!(base.id().is_none());
        assert!(base.is_modified());

        base.set_id(Some("")).unwrap();
        assert!(base.id().is_none());
    }

    #[test]
    fn test_set_modified_stamps_mtime() {
        let mut base = item_base(json!({}));
        base.set_modified();

        let mtime = base.time_modified().expect("mtime stamped");
        assert!(base.is_modified());
        assert!(chrono::NaiveDateTime::parse_from_str(&mtime, DATETIME_FORMAT).is_ok());
    }

    #[test]
    fn test_private_gate_on_import() {
        let Value::Object(list) = json!({ "demo.id": 7, "demo.editor": "core", "demo.other": 1 })
        else {
            unreachable!()
        };

        let mut public = item_base(json!({}));
        let mut rest = list.clone();
        public.from_array(&mut rest, false).unwrap();
        assert!(public.id().is_none());
        assert!(public.editor().is_none());
        assert_eq!(rest.len(), 1, "common keys are consumed even when not applied");

        let mut private = item_base(json!({}));
        let mut rest = list;
        private.from_array(&mut rest, true).unwrap();
        assert_eq!(private.id().as_deref(), Some("7"));
        assert_eq!(private.editor().as_deref(), Some("core"));
        assert!(rest.contains_key("demo.other"));
    }

    #[test]
    fn test_conflicting_id_import_changes_nothing() {
        let mut base = item_base(json!({ "demo.id": "3" }));
        let Value::Object(mut list) = json!({ "demo.id": "4", "demo.editor": "core" }) else {
            unreachable!()
        };

        let err = base.from_array(&mut list, true).map(|_| ()).unwrap_err();

        assert!(err.to_string().contains("(demo.id)"));
        assert_eq!(list.len(), 2, "nothing is consumed");
        assert!(base.editor().is_none());
        assert!(!base.is_modified());
    }

    #[test]
    fn test_export_visibility() {
        let base = item_base(json!({ "demo.id": "3", "demo.siteid": "1.", "demo.editor": "core" }));

        let public = base.to_array(false);
        assert_eq!(public.len(), 1);
        assert_eq!(public["demo.id"], json!("3"));

        let private = base.to_array(true);
        assert_eq!(private["demo.siteid"], json!("1."));
        assert_eq!(private["demo.editor"], json!("core"));
        assert_eq!(private["demo.ctime"], Value::Null);
    }
}
