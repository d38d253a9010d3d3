//! Auth client configuration.
//!
//! Origins come from build-time environment variables (`FINTRACK_API_URL`,
//! `FINTRACK_WEBSITE_URL`), then from runtime overrides the server publishes
//! as `window.FINTRACK_CONFIG`, then from the defaults below. Values are
//! public; do not put secrets here.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

pub const APP_NAME: &str = "Personal Finance Tracker";
pub const DEFAULT_API_DOMAIN: &str = "http://localhost:8000";
pub const DEFAULT_WEBSITE_DOMAIN: &str = "http://localhost:3000";
pub const AUTH_BASE_PATH: &str = "/auth";
pub const SIGN_IN_PATH: &str = "/auth/signin";
pub const RUNTIME_CONFIG_GLOBAL: &str = "FINTRACK_CONFIG";

/// Auth features enabled on the provider.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Recipe {
    Session,
    EmailPassword,
}

/// Application identity and origins registered with the auth provider.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppInfo {
    pub app_name: String,
    pub api_domain: String,
    pub website_domain: String,
    pub api_base_path: String,
    pub website_base_path: String,
}

impl Default for AppInfo {
    fn default() -> Self {
        Self::from_origins(None, None)
    }
}

impl AppInfo {
    /// Build app info from optional origins, falling back to the defaults.
    pub fn from_origins(api_domain: Option<&str>, website_domain: Option<&str>) -> Self {
        let api_domain = api_domain.and_then(normalize_origin).unwrap_or_else(|| DEFAULT_API_DOMAIN.to_owned());
        let website_domain = website_domain
            .and_then(normalize_origin)
            .unwrap_or_else(|| DEFAULT_WEBSITE_DOMAIN.to_owned());

        Self {
            app_name: APP_NAME.to_owned(),
            api_domain,
            website_domain,
            api_base_path: AUTH_BASE_PATH.to_owned(),
            website_base_path: AUTH_BASE_PATH.to_owned(),
        }
    }

    /// Load from build-time variables, then apply runtime overrides.
    pub fn load() -> Self {
        let mut info = Self::from_origins(option_env!("FINTRACK_API_URL"), option_env!("FINTRACK_WEBSITE_URL"));
        if let Some(runtime) = runtime_config() {
            info.apply_overrides(&runtime);
        }
        info
    }

    /// Replace origins with any non-blank runtime values.
    pub fn apply_overrides(&mut self, runtime: &RuntimeConfig) {
        if let Some(api) = runtime.api_url.as_deref().and_then(normalize_origin) {
            self.api_domain = api;
        }
        if let Some(website) = runtime.website_url.as_deref().and_then(normalize_origin) {
            self.website_domain = website;
        }
    }
}

/// Full configuration passed to `AuthClient::setup`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthConfig {
    pub app_info: AppInfo,
    pub recipes: Vec<Recipe>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self::new(AppInfo::default())
    }
}

impl AuthConfig {
    /// Config with the session and email/password recipes enabled.
    pub fn new(app_info: AppInfo) -> Self {
        Self { app_info, recipes: vec![Recipe::Session, Recipe::EmailPassword] }
    }

    pub fn load() -> Self {
        Self::new(AppInfo::load())
    }

    pub fn has_recipe(&self, recipe: Recipe) -> bool {
        self.recipes.contains(&recipe)
    }
}

/// Origins the server publishes to the browser at render time.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
}

impl RuntimeConfig {
    /// Inline script assigning this config to `window.FINTRACK_CONFIG`.
    ///
    /// `<` is escaped so a value can never close the surrounding tag.
    pub fn to_script(&self) -> String {
        let json = serde_json::to_string(self).unwrap_or_else(|_| "{}".to_owned());
        format!("window.{RUNTIME_CONFIG_GLOBAL} = {};", json.replace('<', "\\u003c"))
    }
}

/// Trim an origin, drop trailing slashes, and reject blanks.
pub(crate) fn normalize_origin(value: &str) -> Option<String> {
    let trimmed = value.trim().trim_end_matches('/');
    if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
}

#[cfg(feature = "hydrate")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::Reflect;
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let value = Reflect::get(&window, &JsValue::from_str(RUNTIME_CONFIG_GLOBAL)).ok()?;
    if value.is_null() || value.is_undefined() {
        return None;
    }

    let read = |key: &str| {
        Reflect::get(&value, &JsValue::from_str(key))
            .ok()
            .and_then(|v| v.as_string())
    };
    Some(RuntimeConfig { api_url: read("api_url"), website_url: read("website_url") })
}

#[cfg(not(feature = "hydrate"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}
