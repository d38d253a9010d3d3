//! Test doubles shared by the auth tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use super::client::{AuthClient, CredentialResponse, Credentials, SessionStatus};
use super::config::AuthConfig;
use super::error::AuthError;
use super::handle::AuthClientHandle;

/// Client that counts setup calls and fails the first `failures` of them.
#[derive(Default)]
pub struct RecordingClient {
    pub setups: AtomicUsize,
    pub failures: usize,
    pub delay: Option<Duration>,
}

impl RecordingClient {
    pub fn failing(failures: usize) -> Self {
        Self { failures, ..Self::default() }
    }

    pub fn setups(&self) -> usize {
        self.setups.load(Ordering::SeqCst)
    }
}

#[async_trait(?Send)]
impl AuthClient for RecordingClient {
    fn interactive(&self) -> bool {
        true
    }

    fn setup(&self, _config: &AuthConfig) -> Result<(), AuthError> {
        if let Some(delay) = self.delay {
            std::thread::sleep(delay);
        }
        let call = self.setups.fetch_add(1, Ordering::SeqCst);
        if call < self.failures { Err(AuthError::General("boom".to_owned())) } else { Ok(()) }
    }

    async fn verify_session(&self) -> Result<SessionStatus, AuthError> {
        Ok(SessionStatus::Valid)
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        Ok(())
    }

    async fn sign_in(&self, _credentials: &Credentials) -> Result<CredentialResponse, AuthError> {
        Ok(CredentialResponse::Ok { user: None })
    }

    async fn sign_up(&self, _credentials: &Credentials) -> Result<CredentialResponse, AuthError> {
        Ok(CredentialResponse::Ok { user: None })
    }

    async fn email_exists(&self, _email: &str) -> Result<bool, AuthError> {
        Ok(false)
    }

    async fn request_password_reset(&self, _email: &str) -> Result<(), AuthError> {
        Ok(())
    }
}

pub fn handle_for(client: &Arc<RecordingClient>) -> AuthClientHandle {
    AuthClientHandle::new(Arc::clone(client) as Arc<dyn AuthClient>, AuthConfig::default())
}
