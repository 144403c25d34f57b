use thiserror::Error;

use crate::MIN_PASSWORD_LENGTH;

/// Rule failures for the new-password field, in evaluation order.
/// The `Display` text is what lands in the error slot.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PasswordRuleError {
    #[error("New Password is required.")]
    Empty,
    #[error("Password must be at least 8 characters long.")]
    TooShort,
    #[error("Password must contain at least one uppercase letter.")]
    NoUppercase,
    #[error("Password must contain at least one lowercase letter.")]
    NoLowercase,
    #[error("Password must contain at least one number.")]
    NoNumber,
    #[error("Password must contain at least one special character.")]
    NoSpecialChar,
}

/// Rule failures for the confirm-password field.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmationError {
    #[error("Confirm Password is required.")]
    Empty,
    #[error("Passwords do not match.")]
    Mismatch,
}

/// Whitespace as browsers trim it from form values: Unicode whitespace
/// except NEL (U+0085), plus the byte-order mark (U+FEFF).
fn is_form_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}'
}

/// Strips leading and trailing form whitespace
pub fn trim_form_value(value: &str) -> &str {
    value.trim_matches(is_form_whitespace)
}

/// Checks a new password against the ordered rule list.
///
/// The value is trimmed first. Length is measured in UTF-16 code units,
/// so an emoji outside the BMP counts as two. Only the first failing rule is reported.
/// Character classes are ASCII only: `É` is not an uppercase letter here,
/// but it does count as a special character.
pub fn validate_password(password: &str) -> Result<(), PasswordRuleError> {
    let password = trim_form_value(password);

    if password.is_empty() {
        return Err(PasswordRuleError::Empty);
    }
    if password.encode_utf16().count() < MIN_PASSWORD_LENGTH {
        return Err(PasswordRuleError::TooShort);
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(PasswordRuleError::NoUppercase);
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Err(PasswordRuleError::NoLowercase);
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(PasswordRuleError::NoNumber);
    }
    if !password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        return Err(PasswordRuleError::NoSpecialChar);
    }
    Ok(())
}

/// Checks presence of the confirmation and equality with the new password.
/// Both sides are trimmed; complexity of `password` is not considered.
pub fn validate_confirmation(password: &str, confirmation: &str) -> Result<(), ConfirmationError> {
    let confirmation = trim_form_value(confirmation);

    if confirmation.is_empty() {
        return Err(ConfirmationError::Empty);
    }
    if trim_form_value(password) != confirmation {
        return Err(ConfirmationError::Mismatch);
    }
    Ok(())
}
