//! Auth capability errors.

use super::config::Recipe;

/// Failures raised by `AuthClient` implementations.
///
/// `Clone` so results can live inside Leptos resources.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("invalid {field} origin: {value}")]
    InvalidOrigin { field: &'static str, value: String },
    #[error("invalid base path: {0}")]
    InvalidBasePath(String),
    #[error("recipe not enabled: {0:?}")]
    MissingRecipe(Recipe),
    #[error("auth client not initialized")]
    NotInitialized,
    #[error("auth capability unavailable in this context")]
    Unavailable,
    #[error("network error: {0}")]
    Network(String),
    #[error("auth request failed: {0}")]
    Status(u16),
    #[error("malformed auth response: {0}")]
    Decode(String),
    #[error("{0}")]
    General(String),
}
