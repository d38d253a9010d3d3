//! The auth capability seam.
//!
//! DESIGN
//! ======
//! `AuthClient` is the black-box surface of the hosted auth provider: setup,
//! session verification, sign-out, and the email/password recipe calls used
//! by the auth pages. Futures are `?Send` because browser fetches are not.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use async_trait::async_trait;
use serde::Deserialize;

use super::config::{AuthConfig, SIGN_IN_PATH};
use super::error::AuthError;

/// Result of a session check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    Valid,
    Absent,
}

/// User record returned by a successful sign-in or sign-up.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AuthUser {
    pub id: String,
    #[serde(default)]
    pub emails: Vec<String>,
}

/// Per-field validation error reported by the provider.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct FormFieldError {
    pub id: String,
    pub error: String,
}

/// Status-tagged response to sign-in and sign-up requests.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(tag = "status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CredentialResponse {
    Ok {
        #[serde(default)]
        user: Option<AuthUser>,
    },
    FieldError {
        #[serde(rename = "formFields")]
        form_fields: Vec<FormFieldError>,
    },
    WrongCredentialsError,
    SignInNotAllowed {
        reason: String,
    },
    SignUpNotAllowed {
        reason: String,
    },
    GeneralError {
        message: String,
    },
}

/// Email + password pair submitted by the auth forms.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    /// Request body in the provider's `formFields` shape.
    pub fn form_fields(&self) -> serde_json::Value {
        serde_json::json!({
            "formFields": [
                { "id": "email", "value": self.email },
                { "id": "password", "value": self.password },
            ]
        })
    }
}

/// Capability exposed by an auth backend.
#[async_trait(?Send)]
pub trait AuthClient: Send + Sync {
    /// Whether this client can run in the current context. Non-interactive
    /// clients are never set up.
    fn interactive(&self) -> bool;

    /// Register app identity, origins, and recipes with the provider.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is rejected.
    fn setup(&self, config: &AuthConfig) -> Result<(), AuthError>;

    /// Path the session boundary redirects to when no session exists.
    fn sign_in_path(&self) -> &str {
        SIGN_IN_PATH
    }

    async fn verify_session(&self) -> Result<SessionStatus, AuthError>;

    async fn sign_out(&self) -> Result<(), AuthError>;

    async fn sign_in(&self, credentials: &Credentials) -> Result<CredentialResponse, AuthError>;

    async fn sign_up(&self, credentials: &Credentials) -> Result<CredentialResponse, AuthError>;

    async fn email_exists(&self, email: &str) -> Result<bool, AuthError>;

    async fn request_password_reset(&self, email: &str) -> Result<(), AuthError>;
}

/// Inert client for server rendering.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopAuthClient;

#[async_trait(?Send)]
impl AuthClient for NoopAuthClient {
    fn interactive(&self) -> bool {
        false
    }

    fn setup(&self, _config: &AuthConfig) -> Result<(), AuthError> {
        Ok(())
    }

    async fn verify_session(&self) -> Result<SessionStatus, AuthError> {
        Err(AuthError::Unavailable)
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        Err(AuthError::Unavailable)
    }

    async fn sign_in(&self, _credentials: &Credentials) -> Result<CredentialResponse, AuthError> {
        Err(AuthError::Unavailable)
    }

    async fn sign_up(&self, _credentials: &Credentials) -> Result<CredentialResponse, AuthError> {
        Err(AuthError::Unavailable)
    }

    async fn email_exists(&self, _email: &str) -> Result<bool, AuthError> {
        Err(AuthError::Unavailable)
    }

    async fn request_password_reset(&self, _email: &str) -> Result<(), AuthError> {
        Err(AuthError::Unavailable)
    }
}
