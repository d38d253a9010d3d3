//! HTTP auth client for the hosted provider.
//!
//! Client-side (hydrate): real requests via `gloo-net`, cookies included.
//! Server-side (SSR): network calls return `AuthError::Unavailable`.
//!
//! `setup` validates the config and resolves endpoint URLs. Every network
//! call before a successful setup fails with `AuthError::NotInitialized`.
//!
//! The provider announces session changes in a `front-token` response
//! header. Sign-in, sign-up and refresh mirror it into the `sFrontToken`
//! cookie; sign-out and a rejected refresh clear it. A live cookie lets
//! `verify_session` skip the refresh round trip.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
#[cfg(feature = "hydrate")]
use serde::Deserialize;
use url::Url;

use super::client::{AuthClient, CredentialResponse, Credentials, SessionStatus};
use super::config::{AuthConfig, Recipe};
use super::error::AuthError;

#[cfg(any(test, feature = "hydrate"))]
const FRONT_TOKEN_COOKIE: &str = "sFrontToken";
#[cfg(feature = "hydrate")]
const FRONT_TOKEN_HEADER: &str = "front-token";

/// Provider endpoints derived from a validated config.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoints {
    base: String,
}

impl Endpoints {
    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn sign_in(&self) -> String {
        format!("{}/signin", self.base)
    }

    pub fn sign_up(&self) -> String {
        format!("{}/signup", self.base)
    }

    pub fn sign_out(&self) -> String {
        format!("{}/signout", self.base)
    }

    pub fn refresh(&self) -> String {
        format!("{}/session/refresh", self.base)
    }

    pub fn reset_token(&self) -> String {
        format!("{}/user/password/reset/token", self.base)
    }

    pub fn email_exists(&self, email: &str) -> String {
        let encoded: String = url::form_urlencoded::byte_serialize(email.as_bytes()).collect();
        format!("{}/emailpassword/email/exists?email={encoded}", self.base)
    }
}

/// Validate a config and derive endpoints.
///
/// # Errors
///
/// Returns an error if either origin is not a bare http(s) origin, a base
/// path does not start with `/`, or a required recipe is missing.
pub fn resolve_endpoints(config: &AuthConfig) -> Result<Endpoints, AuthError> {
    let info = &config.app_info;
    let api_origin = parse_origin("api", &info.api_domain)?;
    parse_origin("website", &info.website_domain)?;

    for path in [&info.api_base_path, &info.website_base_path] {
        if !path.starts_with('/') {
            return Err(AuthError::InvalidBasePath(path.clone()));
        }
    }

    for recipe in [Recipe::Session, Recipe::EmailPassword] {
        if !config.has_recipe(recipe) {
            return Err(AuthError::MissingRecipe(recipe));
        }
    }

    Ok(Endpoints { base: format!("{api_origin}{}", info.api_base_path.trim_end_matches('/')) })
}

fn parse_origin(field: &'static str, value: &str) -> Result<String, AuthError> {
    let invalid = || AuthError::InvalidOrigin { field, value: value.to_owned() };
    let url = Url::parse(value).map_err(|_| invalid())?;
    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return Err(invalid());
    }
    if url.path() != "/" || url.query().is_some() || url.fragment().is_some() {
        return Err(invalid());
    }
    Ok(url.origin().ascii_serialization())
}

/// Whether a `document.cookie` string carries a live front token.
#[cfg(any(test, feature = "hydrate"))]
fn has_front_token(cookies: &str) -> bool {
    cookies.split(';').any(|pair| {
        let Some((name, value)) = pair.trim().split_once('=') else {
            return false;
        };
        name == FRONT_TOKEN_COOKIE && !value.is_empty() && value != "remove"
    })
}

/// `document.cookie` assignment mirroring a `front-token` header value.
///
/// `remove` (or an empty value) expires the cookie.
#[cfg(any(test, feature = "hydrate"))]
fn front_token_cookie(header: &str) -> String {
    match header.trim() {
        "" | "remove" => format!("{FRONT_TOKEN_COOKIE}=; path=/; expires=Thu, 01 Jan 1970 00:00:00 GMT"),
        token => format!("{FRONT_TOKEN_COOKIE}={token}; path=/; samesite=lax"),
    }
}

/// Browser client for the hosted auth provider.
#[derive(Debug, Default)]
pub struct HttpAuthClient {
    endpoints: RwLock<Option<Endpoints>>,
}

impl HttpAuthClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Endpoints resolved by the last successful setup.
    pub fn endpoints(&self) -> Option<Endpoints> {
        self.endpoints.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn require_endpoints(&self) -> Result<Endpoints, AuthError> {
        self.endpoints().ok_or(AuthError::NotInitialized)
    }
}

#[async_trait(?Send)]
impl AuthClient for HttpAuthClient {
    fn interactive(&self) -> bool {
        true
    }

    fn setup(&self, config: &AuthConfig) -> Result<(), AuthError> {
        let endpoints = resolve_endpoints(config)?;
        *self.endpoints.write().unwrap_or_else(PoisonError::into_inner) = Some(endpoints);
        Ok(())
    }

    async fn verify_session(&self) -> Result<SessionStatus, AuthError> {
        let endpoints = self.require_endpoints()?;
        #[cfg(feature = "hydrate")]
        {
            if document_cookies().is_some_and(|c| has_front_token(&c)) {
                return Ok(SessionStatus::Valid);
            }
            let resp = post_json(&endpoints.refresh(), "session", &serde_json::json!({})).await?;
            match resp.status() {
                200..=299 => {
                    store_front_token(&resp);
                    Ok(SessionStatus::Valid)
                }
                401 => {
                    set_document_cookie(&front_token_cookie("remove"));
                    Ok(SessionStatus::Absent)
                }
                status => Err(AuthError::Status(status)),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = endpoints;
            Err(AuthError::Unavailable)
        }
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        let endpoints = self.require_endpoints()?;
        #[cfg(feature = "hydrate")]
        {
            let resp = post_json(&endpoints.sign_out(), "session", &serde_json::json!({})).await?;
            set_document_cookie(&front_token_cookie("remove"));
            if !resp.ok() {
                return Err(AuthError::Status(resp.status()));
            }
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = endpoints;
            Err(AuthError::Unavailable)
        }
    }

    async fn sign_in(&self, credentials: &Credentials) -> Result<CredentialResponse, AuthError> {
        let endpoints = self.require_endpoints()?;
        #[cfg(feature = "hydrate")]
        {
            let resp = post_json(&endpoints.sign_in(), "emailpassword", &credentials.form_fields()).await?;
            store_front_token(&resp);
            decode(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (endpoints, credentials);
            Err(AuthError::Unavailable)
        }
    }

    async fn sign_up(&self, credentials: &Credentials) -> Result<CredentialResponse, AuthError> {
        let endpoints = self.require_endpoints()?;
        #[cfg(feature = "hydrate")]
        {
            let resp = post_json(&endpoints.sign_up(), "emailpassword", &credentials.form_fields()).await?;
            store_front_token(&resp);
            decode(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (endpoints, credentials);
            Err(AuthError::Unavailable)
        }
    }

    async fn email_exists(&self, email: &str) -> Result<bool, AuthError> {
        let endpoints = self.require_endpoints()?;
        #[cfg(feature = "hydrate")]
        {
            #[derive(Deserialize)]
            struct EmailExistsResponse {
                status: String,
                #[serde(default)]
                exists: bool,
                #[serde(default)]
                message: Option<String>,
            }

            let resp = gloo_net::http::Request::get(&endpoints.email_exists(email))
                .credentials(web_sys::RequestCredentials::Include)
                .header("rid", "emailpassword")
                .send()
                .await
                .map_err(|e| AuthError::Network(e.to_string()))?;
            let body: EmailExistsResponse = decode(resp).await?;
            match body.status.as_str() {
                "OK" => Ok(body.exists),
                _ => Err(AuthError::General(body.message.unwrap_or(body.status))),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (endpoints, email);
            Err(AuthError::Unavailable)
        }
    }

    async fn request_password_reset(&self, email: &str) -> Result<(), AuthError> {
        let endpoints = self.require_endpoints()?;
        #[cfg(feature = "hydrate")]
        {
            #[derive(Deserialize)]
            struct StatusResponse {
                status: String,
                #[serde(default)]
                message: Option<String>,
            }

            let body = serde_json::json!({ "formFields": [{ "id": "email", "value": email }] });
            let resp = post_json(&endpoints.reset_token(), "emailpassword", &body).await?;
            let body: StatusResponse = decode(resp).await?;
            match body.status.as_str() {
                "OK" => Ok(()),
                _ => Err(AuthError::General(body.message.unwrap_or(body.status))),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (endpoints, email);
            Err(AuthError::Unavailable)
        }
    }
}

#[cfg(feature = "hydrate")]
async fn post_json(
    url: &str,
    rid: &str,
    body: &serde_json::Value,
) -> Result<gloo_net::http::Response, AuthError> {
    gloo_net::http::Request::post(url)
        .credentials(web_sys::RequestCredentials::Include)
        .header("rid", rid)
        .header("st-auth-mode", "cookie")
        .json(body)
        .map_err(|e| AuthError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| AuthError::Network(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn decode<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, AuthError> {
    if !resp.ok() {
        return Err(AuthError::Status(resp.status()));
    }
    resp.json::<T>().await.map_err(|e| AuthError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
fn document_cookies() -> Option<String> {
    use wasm_bindgen::JsCast;

    let document = web_sys::window()?.document()?;
    document.dyn_into::<web_sys::HtmlDocument>().ok()?.cookie().ok()
}

#[cfg(feature = "hydrate")]
fn store_front_token(resp: &gloo_net::http::Response) {
    if let Some(header) = resp.headers().get(FRONT_TOKEN_HEADER) {
        set_document_cookie(&front_token_cookie(&header));
    }
}

#[cfg(feature = "hydrate")]
fn set_document_cookie(cookie: &str) {
    use wasm_bindgen::JsCast;

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Ok(document) = document.dyn_into::<web_sys::HtmlDocument>()
        && document.set_cookie(cookie).is_err()
    {
        leptos::logging::warn!("could not store {FRONT_TOKEN_COOKIE}");
    }
}
