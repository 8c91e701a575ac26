pub use crate::coerce::{as_int, as_text};
pub use crate::error::{ItemError, ItemErrorExt};
pub use crate::item::{Item, ItemBase, ItemMap};
pub use crate::validate::{DEFAULT_CODE_LENGTH, check_code};
pub use serde_json::Value;
