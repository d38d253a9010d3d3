//! REST helpers for the finance backend API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with cookies so the
//! auth session travels to the API origin.
//! Server-side (SSR): stubs returning `ApiError::Unavailable` since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so fetch failures degrade
//! UI behavior without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Account, AccountInput, CreditCard, Transaction};
use crate::auth::handle::use_auth_client;

/// Backend request failures. `Clone` so results can live in resources.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed: {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

/// API origin from the auth config in context.
pub fn use_api_base() -> String {
    use_auth_client().config().app_info.api_domain.clone()
}

fn accounts_endpoint(base: &str) -> String {
    format!("{base}/accounts")
}

fn account_endpoint(base: &str, id: &str) -> String {
    format!("{base}/accounts/{id}")
}

fn credit_cards_endpoint(base: &str) -> String {
    format!("{base}/credit-cards")
}

fn transactions_endpoint(base: &str) -> String {
    format!("{base}/transactions")
}

/// `GET /accounts`.
///
/// # Errors
///
/// Returns an error if the request fails or the body is malformed.
pub async fn fetch_accounts(base: &str) -> Result<Vec<Account>, ApiError> {
    get_json(&accounts_endpoint(base)).await
}

/// `GET /credit-cards`.
///
/// # Errors
///
/// Returns an error if the request fails or the body is malformed.
pub async fn fetch_credit_cards(base: &str) -> Result<Vec<CreditCard>, ApiError> {
    get_json(&credit_cards_endpoint(base)).await
}

/// `GET /transactions`.
///
/// # Errors
///
/// Returns an error if the request fails or the body is malformed.
pub async fn fetch_transactions(base: &str) -> Result<Vec<Transaction>, ApiError> {
    get_json(&transactions_endpoint(base)).await
}

/// `POST /accounts`.
///
/// # Errors
///
/// Returns an error if the request fails or the body is malformed.
pub async fn create_account(base: &str, input: &AccountInput) -> Result<Account, ApiError> {
    send_json("POST", &accounts_endpoint(base), input).await
}

/// `PUT /accounts/{id}`.
///
/// # Errors
///
/// Returns an error if the request fails or the body is malformed.
pub async fn update_account(base: &str, id: &str, input: &AccountInput) -> Result<Account, ApiError> {
    send_json("PUT", &account_endpoint(base, id), input).await
}

/// `DELETE /accounts/{id}`.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn delete_account(base: &str, id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete(&account_endpoint(base, id))
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (base, id);
        Err(ApiError::Unavailable)
    }
}

async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(url)
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
        Err(ApiError::Unavailable)
    }
}

async fn send_json<B, T>(method: &str, url: &str, body: &B) -> Result<T, ApiError>
where
    B: serde::Serialize,
    T: serde::de::DeserializeOwned,
{
    #[cfg(feature = "hydrate")]
    {
        let builder = match method {
            "PUT" => gloo_net::http::Request::put(url),
            _ => gloo_net::http::Request::post(url),
        };
        let resp = builder
            .credentials(web_sys::RequestCredentials::Include)
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (method, url, body);
        Err(ApiError::Unavailable)
    }
}
