//! Facade crate for the shop slices and shared modules.
//! Re-exports domain/kernel primitives and the enabled item slices.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `mshop` with the desired feature flags (`attribute`/`order`).
//! - Import items through [`features`] and the shared item API through [`kernel`].

pub use mshop_domain as domain;
pub use mshop_kernel as kernel;

/// Slice registry for runtime introspection.
pub mod features {
    #[cfg(feature = "attribute")]
    pub use mshop_attribute as attribute;
    #[cfg(feature = "order")]
    pub use mshop_order as order;

    /// Build-time enabled slices (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "attribute")]
        "attribute",
        #[cfg(feature = "order")]
        "order",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

pub mod prelude {
    #[cfg(feature = "attribute")]
    pub use mshop_attribute::{Attribute, AttributeItem};
    pub use mshop_kernel::prelude::*;
    #[cfg(feature = "order")]
    pub use mshop_order::OrderProductAttribute;
}
