//! Items attached to ordered product lines.
pub mod attribute;
