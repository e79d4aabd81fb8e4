//! Field validators shared by the create/update payloads.
//!
//! Used through `#[validate(custom(function = ...))]`; the derive only calls
//! them for `Some` values when the field is optional.

use std::borrow::Cow;

use validator::{ValidateEmail, ValidationError};

use crate::status::Status;

/// Accepts an empty string, otherwise requires a well-formed email address.
pub fn email_if_present(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || value.validate_email() {
        Ok(())
    } else {
        Err(ValidationError::new("email"))
    }
}

/// Requires a non-empty, well-formed email address.
pub fn required_email(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(with_message("required", "Email is required"));
    }
    if !value.validate_email() {
        return Err(with_message("email", "Email must be a valid email address"));
    }
    Ok(())
}

/// Accepts an empty string, otherwise requires a known status value.
pub fn status_if_present(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || value.parse::<Status>().is_ok() {
        Ok(())
    } else {
        Err(ValidationError::new("status"))
    }
}

fn with_message(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}
