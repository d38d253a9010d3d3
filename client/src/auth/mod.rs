//! Route-level authentication gate.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthClientHandle` owns one-time setup of the auth capability. `RouteGate`
//! wraps the route table, waits for that setup, then decides per navigation
//! whether content renders directly or behind `SessionAuth`, which verifies
//! the session and redirects to sign-in when there is none.
//!
//! The hosted auth provider is opaque. `AuthClient` is the seam: the browser
//! build talks to it over HTTP (`HttpAuthClient`), server rendering uses
//! `NoopAuthClient`. Which one runs is chosen by the entry point, never
//! detected at call time.

pub mod boundary;
pub mod client;
pub mod config;
pub mod error;
pub mod gate;
pub mod handle;
pub mod http;
pub mod policy;

#[cfg(test)]
mod test_support;

pub use boundary::SessionAuth;
pub use client::{AuthClient, CredentialResponse, Credentials, NoopAuthClient, SessionStatus};
pub use config::{AppInfo, AuthConfig, Recipe, RuntimeConfig};
pub use error::AuthError;
pub use gate::RouteGate;
pub use handle::{AuthClientHandle, InitOutcome};
pub use http::HttpAuthClient;
pub use policy::{AccessDecision, PathPolicy};
