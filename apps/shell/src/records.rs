use anyhow::{Result, bail};
use mshop::kernel::item::ItemMap;
use serde_json::Value;

/// Records read from an input document, keeping its shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Records {
    One(ItemMap),
    Many(Vec<ItemMap>),
}

impl Records {
    /// Parses a JSON object or an array of objects.
    ///
    /// # Errors
    /// Fails on malformed JSON or if the document is neither an object nor an array of
    /// objects.
    pub fn parse(input: &str) -> Result<Self> {
        match serde_json::from_str::<Value>(input)? {
            Value::Object(record) => Ok(Self::One(record)),
            Value::Array(values) => values
                .into_iter()
                .enumerate()
                .map(|(index, value)| match value {
                    Value::Object(record) => Ok(record),
                    other => bail!("Record {index} is not an object: {other}"),
                })
                .collect::<Result<_>>()
                .map(Self::Many),
            other => bail!("Expected a JSON object or an array of objects, got {other}"),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::One(_) => 1,
            Self::Many(records) => records.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Transforms every record, stopping at the first failure.
    ///
    /// # Errors
    /// Returns the first error of `f`.
    pub fn try_map<F>(self, mut f: F) -> Result<Self>
    where
        F: FnMut(usize, ItemMap) -> Result<ItemMap>,
    {
        match self {
            Self::One(record) => f(0, record).map(Self::One),
            Self::Many(records) => records
                .into_iter()
                .enumerate()
                .map(|(index, record)| f(index, record))
                .collect::<Result<_>>()
                .map(Self::Many),
        }
    }

    #[must_use]
    pub fn into_value(self) -> Value {
        match self {
            Self::One(record) => Value::Object(record),
            Self::Many(records) => Value::Array(records.into_iter().map(Value::Object).collect()),
        }
    }
}
