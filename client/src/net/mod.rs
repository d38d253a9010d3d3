//! Networking modules for the finance backend API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls against the API origin and `types` defines the
//! wire schema. Auth provider traffic lives in `crate::auth::http`.

pub mod api;
pub mod types;
