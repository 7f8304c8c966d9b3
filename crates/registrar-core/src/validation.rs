//! Helpers shared by `validator`-derived DTOs.

use std::borrow::Cow;
use validator::{ValidationError, ValidationErrors};

/// Rejects empty and whitespace-only strings.
///
/// `length(min = 1)` lets `"   "` through, so identity fields use this instead.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message(Cow::Borrowed("cannot be blank")));
    }
    Ok(())
}

/// Flattens field errors into one message, sorted by field name.
pub fn format_errors(errors: &ValidationErrors) -> String {
    let mut messages = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| match error.message.as_ref() {
                Some(msg) => format!("{} {}", field, msg),
                None => format!("{} is invalid", field),
            })
        })
        .collect::<Vec<_>>();
    messages.sort();
    messages.join(", ")
}
