use anyhow::{Context, Result};
use mshop::features::attribute::AttributeItem;
use mshop::features::order::OrderProductAttribute;
use mshop::kernel::item::{Item, ItemMap};
use tracing::warn;

/// Fields set on every order product attribute built by [`copy`].
#[derive(Debug, Clone, Default)]
pub struct CopyOptions {
    pub parent: Option<String>,
    pub quantity: Option<i64>,
}

/// Imports one order product attribute record and exports it again.
///
/// # Errors
/// Fails if the record holds an invalid type or code.
pub fn normalize(mut record: ItemMap, index: usize, private: bool) -> Result<ItemMap> {
    let mut item = OrderProductAttribute::default();
    item.from_array(&mut record, private)
        .with_context(|| format!("Record {index} is not a valid order product attribute"))?;
    warn_leftovers(index, &record);

    Ok(item.to_array(private))
}

/// Builds an order product attribute from one catalog attribute record.
///
/// The catalog record is always imported with its private fields, so the
/// attribute id and site travel into the built item.
///
/// # Errors
/// Fails if the catalog record is invalid or has no usable type.
pub fn copy(
    mut record: ItemMap,
    index: usize,
    options: &CopyOptions,
    private: bool,
) -> Result<ItemMap> {
    let mut attribute = AttributeItem::default();
    attribute
        .from_array(&mut record, true)
        .with_context(|| format!("Record {index} is not a valid catalog attribute"))?;
    warn_leftovers(index, &record);

    let mut item = OrderProductAttribute::default();
    item.copy_from(&attribute)
        .with_context(|| format!("Record {index} cannot be copied into an order"))?;

    if let Some(parent) = &options.parent {
        item.set_parent_id(parent.as_str());
    }
    if let Some(quantity) = options.quantity {
        item.set_quantity(quantity);
    }

    Ok(item.to_array(private))
}

fn warn_leftovers(index: usize, record: &ItemMap) {
    if !record.is_empty() {
        let keys: Vec<&str> = record.keys().map(String::as_str).collect();
        warn!(record = index, ?keys, "Unrecognized keys ignored");
    }
}
