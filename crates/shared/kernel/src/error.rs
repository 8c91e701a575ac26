use std::borrow::Cow;

/// Errors raised while mutating or importing items.
#[mshop_derive::mshop_error]
pub enum ItemError {
    /// A code, type or id did not pass validation.
    #[error("Item validation error{}: {message}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
