use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

// =============================================================================
// from_lookup
// =============================================================================

#[test]
fn defaults_when_unset() {
    let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config, ServerConfig { port: DEFAULT_PORT, api_url: None, website_url: None });
}

#[test]
fn reads_port_and_origins() {
    let config = ServerConfig::from_lookup(lookup(&[
        ("PORT", "8080"),
        ("FINTRACK_API_URL", " https://api.example.com "),
        ("FINTRACK_WEBSITE_URL", "https://app.example.com"),
    ]))
    .unwrap();
    assert_eq!(config.port, 8080);
    assert_eq!(config.api_url.as_deref(), Some("https://api.example.com"));
    assert_eq!(config.website_url.as_deref(), Some("https://app.example.com"));
}

#[test]
fn blank_values_are_ignored() {
    let config = ServerConfig::from_lookup(lookup(&[("PORT", "  "), ("FINTRACK_API_URL", "")])).unwrap();
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.api_url, None);
}

#[test]
fn invalid_port_is_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort { value: "eighty".to_owned() });
    assert_eq!(err.to_string(), "invalid PORT: eighty");
}

#[test]
fn out_of_range_port_is_rejected() {
    assert!(ServerConfig::from_lookup(lookup(&[("PORT", "70000")])).is_err());
}

// =============================================================================
// runtime
// =============================================================================

#[test]
fn runtime_carries_origins() {
    let config = ServerConfig {
        port: DEFAULT_PORT,
        api_url: Some("https://api.example.com".to_owned()),
        website_url: None,
    };
    let runtime = config.runtime();
    assert_eq!(runtime.api_url.as_deref(), Some("https://api.example.com"));
    assert_eq!(runtime.website_url, None);
    assert_eq!(runtime.to_script(), r#"window.FINTRACK_CONFIG = {"api_url":"https://api.example.com"};"#);
}
