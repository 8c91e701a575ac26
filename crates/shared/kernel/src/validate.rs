use crate::error::ItemError;

/// Maximum length of codes when an item does not ask for a different bound.
pub const DEFAULT_CODE_LENGTH: usize = 64;

/// Validates a code-like value (codes, types, domains) shared by all items.
///
/// The code must not be empty and must not exceed `max_len` characters.
///
/// # Errors
/// Returns [`ItemError::Validation`] if the code is empty or too long.
pub fn check_code(code: impl Into<String>, max_len: usize) -> Result<String, ItemError> {
    let code = code.into();

    if code.is_empty() {
        return Err(ItemError::Validation {
            message: "Code must not be empty".into(),
            context: None,
        });
    }

    let len = code.chars().count();
    if len > max_len {
        return Err(ItemError::Validation {
            message: format!(
                "Code \"{code}\" must not be longer than {max_len} characters, got {len}"
            )
            .into(),
            context: None,
        });
    }

    Ok(code)
}
