#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the shop crates.
//!
//! Currently a single attribute, [`macro@mshop_error`], which turns a plain enum into
//! a `thiserror` error type wired with context support and source conversions.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for crate-level error enums.
///
/// # Generated items
///
/// * `#[derive(Debug, thiserror::Error)]` unless already derived.
/// * A `<Name>Ext<T>` trait with `.context(..)` for `Result<T, Name>` and for
///   `Result<T, Source>` of every variant holding a source error.
/// * `From<Source>` for every variant holding a source error.
/// * `From<&'static str>` and `From<String>` when an `Internal { message, context }`
///   variant exists.
/// * A private `format_context` helper to be used in `#[error(..)]` strings.
///
/// # Requirements
///
/// * Only enums with named-field variants are accepted.
/// * A variant with a `source` field (or a field marked `#[source]`/`#[from]`) must also
///   carry `context: Option<Cow<'static, str>>`.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[mshop_derive::mshop_error]
/// pub enum ItemError {
///     #[error("Validation failed{}: {message}", format_context(.context))]
///     Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
///
///     #[error("Malformed JSON{}: {source}", format_context(.context))]
///     Json { source: serde_json::Error, context: Option<Cow<'static, str>> },
/// }
///
/// fn parse(raw: &str) -> Result<serde_json::Value, ItemError> {
///     serde_json::from_str(raw).context("Parsing item payload")
/// }
/// ```
#[proc_macro_attribute]
pub fn mshop_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand(input).into()
}
