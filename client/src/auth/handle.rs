//! One-time setup of the auth capability.
//!
//! DESIGN
//! ======
//! The entry point builds one `AuthClientHandle` and passes it to `App`,
//! which provides it through context. The `initialized` flag lives behind a
//! mutex held across check-and-setup, so overlapping calls never invoke
//! setup twice. A failed setup leaves the flag false and the next call
//! retries.

#[cfg(test)]
#[path = "handle_test.rs"]
mod handle_test;

use std::sync::{Arc, Mutex, PoisonError};

use leptos::prelude::*;

use super::client::{AuthClient, NoopAuthClient};
use super::config::AuthConfig;
use super::error::AuthError;
use super::http::HttpAuthClient;

/// What a call to `ensure_initialized` did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InitOutcome {
    /// The client is non-interactive; nothing to set up.
    Skipped,
    AlreadyInitialized,
    Initialized,
    Failed(AuthError),
}

impl InitOutcome {
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::AlreadyInitialized | Self::Initialized)
    }
}

struct HandleInner {
    client: Arc<dyn AuthClient>,
    config: AuthConfig,
    initialized: Mutex<bool>,
}

/// Shared handle to the auth capability and its initialization state.
#[derive(Clone)]
pub struct AuthClientHandle {
    inner: Arc<HandleInner>,
}

impl std::fmt::Debug for AuthClientHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthClientHandle")
            .field("interactive", &self.inner.client.interactive())
            .field("initialized", &self.is_initialized())
            .finish_non_exhaustive()
    }
}

impl AuthClientHandle {
    pub fn new(client: Arc<dyn AuthClient>, config: AuthConfig) -> Self {
        Self { inner: Arc::new(HandleInner { client, config, initialized: Mutex::new(false) }) }
    }

    /// Browser handle: HTTP client with config from the environment.
    pub fn interactive() -> Self {
        Self::new(Arc::new(HttpAuthClient::new()), AuthConfig::load())
    }

    /// Server-render handle: setup is always skipped.
    pub fn inert() -> Self {
        Self::new(Arc::new(NoopAuthClient), AuthConfig::default())
    }

    /// Run setup once. Safe to call on every render.
    ///
    /// Failures are logged and reported in the outcome, never propagated.
    pub fn ensure_initialized(&self) -> InitOutcome {
        if !self.inner.client.interactive() {
            return InitOutcome::Skipped;
        }

        let mut initialized = self.inner.initialized.lock().unwrap_or_else(PoisonError::into_inner);
        if *initialized {
            return InitOutcome::AlreadyInitialized;
        }

        match self.inner.client.setup(&self.inner.config) {
            Ok(()) => {
                *initialized = true;
                leptos::logging::log!("auth client initialized for {}", self.inner.config.app_info.api_domain);
                InitOutcome::Initialized
            }
            Err(e) => {
                leptos::logging::error!("auth client initialization failed: {e}");
                InitOutcome::Failed(e)
            }
        }
    }

    pub fn is_initialized(&self) -> bool {
        *self.inner.initialized.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn client(&self) -> Arc<dyn AuthClient> {
        Arc::clone(&self.inner.client)
    }

    pub fn config(&self) -> &AuthConfig {
        &self.inner.config
    }
}

/// The handle provided by `App`.
///
/// # Panics
///
/// Panics if called outside `App`.
pub fn use_auth_client() -> AuthClientHandle {
    expect_context::<AuthClientHandle>()
}
