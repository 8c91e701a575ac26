//! Kernel utilities shared across item slices.
//! Keep this crate lightweight: it hosts the generic item base every entity wraps,
//! the loose value coercions, the shared code validator and config loading.
//!
//! ## Items
//! ```rust
//! use mshop_kernel::item::{ItemBase, ItemMap};
//! use serde_json::json;
//!
//! let mut values = ItemMap::new();
//! values.insert("demo.quantity".to_owned(), json!("3"));
//!
//! let base = ItemBase::new("demo.", values);
//! assert_eq!(base.int_or("demo.quantity", 1), 3);
//! assert_eq!(base.text("demo.code"), "");
//! ```
//!
//! ## Config loading (non-wasm)
//! ```rust,ignore
//! use mshop_kernel::config::load_config;
//! let cfg: mshop_domain::config::ShellConfig = load_config(Some("mshop.toml")).unwrap();
//! ```
pub mod coerce;
#[cfg(not(target_arch = "wasm32"))]
pub mod config;
mod error;
pub mod item;
pub mod prelude;
pub mod validate;

pub use error::{ItemError, ItemErrorExt};
pub use mshop_domain as domain;
