//! Auth form validation and message helpers.
//!
//! Kept free of Leptos types so the rules are testable on the host.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use crate::auth::client::{CredentialResponse, FormFieldError};
use crate::auth::error::AuthError;

pub const PASSWORD_RULE_MESSAGE: &str =
    "Password must be at least 8 characters and include both letters and numbers.";
pub const EMAIL_TAKEN_MESSAGE: &str = "This email is already registered. Please sign in instead.";
pub const EMAIL_CHECK_FAILED_MESSAGE: &str = "Unable to verify email availability. Please try again.";
pub const REGISTRATION_FAILED_MESSAGE: &str = "An error occurred during registration. Please try again.";
pub const WRONG_CREDENTIALS_MESSAGE: &str = "Incorrect email or password.";
pub const SIGN_IN_FAILED_MESSAGE: &str = "Unable to sign in. Please try again.";
pub const MISSING_CREDENTIALS_MESSAGE: &str = "Enter both email and password.";
pub const MISSING_EMAIL_MESSAGE: &str = "Enter your email address.";
pub const RESET_SENT_MESSAGE: &str = "If an account exists for that email, a reset link is on its way.";
pub const RESET_FAILED_MESSAGE: &str = "Unable to request a password reset. Please try again.";

/// Delay between the last email keystroke and the uniqueness check.
pub const EMAIL_CHECK_DEBOUNCE_MS: u32 = 500;

/// At least 8 characters, ASCII letters and digits only, with at least one
/// of each.
pub fn validate_password(password: &str) -> bool {
    password.len() >= 8
        && password.chars().all(|c| c.is_ascii_alphanumeric())
        && password.chars().any(|c| c.is_ascii_alphabetic())
        && password.chars().any(|c| c.is_ascii_digit())
}

/// Whether an email is complete enough to check for uniqueness.
pub fn should_check_email(email: &str) -> bool {
    email.chars().count() >= 5 && email.contains('@')
}

/// "Please correct the following: id: error, ..." for a field-error response.
pub fn field_errors_message(fields: &[FormFieldError]) -> String {
    let list = fields
        .iter()
        .map(|f| format!("{}: {}", f.id, f.error))
        .collect::<Vec<_>>()
        .join(", ");
    format!("Please correct the following: {list}")
}

/// Trim both fields and require them to be non-empty.
///
/// # Errors
///
/// Returns the message to show when either field is blank.
pub fn validate_credentials_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(MISSING_CREDENTIALS_MESSAGE);
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// How the sign-up form reacts to a provider response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SignUpResult {
    Success,
    /// Provider refused sign-up; the reason is user-facing.
    NotAllowed(String),
    Error(String),
}

pub fn sign_up_result(response: &CredentialResponse) -> SignUpResult {
    match response {
        CredentialResponse::Ok { .. } => SignUpResult::Success,
        CredentialResponse::SignUpNotAllowed { reason } => SignUpResult::NotAllowed(reason.clone()),
        CredentialResponse::FieldError { form_fields } => SignUpResult::Error(field_errors_message(form_fields)),
        _ => SignUpResult::Error(REGISTRATION_FAILED_MESSAGE.to_owned()),
    }
}

/// `Ok` on success, otherwise the message for the sign-in form.
///
/// # Errors
///
/// Returns the user-facing message for any non-OK response.
pub fn sign_in_result(response: &CredentialResponse) -> Result<(), String> {
    match response {
        CredentialResponse::Ok { .. } => Ok(()),
        CredentialResponse::WrongCredentialsError => Err(WRONG_CREDENTIALS_MESSAGE.to_owned()),
        CredentialResponse::FieldError { form_fields } => Err(field_errors_message(form_fields)),
        CredentialResponse::SignInNotAllowed { reason } => Err(reason.clone()),
        CredentialResponse::GeneralError { message } => Err(message.clone()),
        CredentialResponse::SignUpNotAllowed { .. } => Err(SIGN_IN_FAILED_MESSAGE.to_owned()),
    }
}

/// Inline email error after a uniqueness check, `None` when the address is free.
///
/// Provider general errors carry a user-facing message and are shown as-is.
pub fn email_check_message(result: &Result<bool, AuthError>) -> Option<String> {
    match result {
        Ok(false) => None,
        Ok(true) => Some(EMAIL_TAKEN_MESSAGE.to_owned()),
        Err(AuthError::General(message)) => Some(message.clone()),
        Err(_) => Some(EMAIL_CHECK_FAILED_MESSAGE.to_owned()),
    }
}
