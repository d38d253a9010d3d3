use super::*;

// =============================================================
// AppInfo defaults
// =============================================================

#[test]
fn app_info_defaults_when_origins_missing() {
    let info = AppInfo::from_origins(None, None);
    assert_eq!(info.app_name, "Personal Finance Tracker");
    assert_eq!(info.api_domain, "http://localhost:8000");
    assert_eq!(info.website_domain, "http://localhost:3000");
    assert_eq!(info.api_base_path, "/auth");
    assert_eq!(info.website_base_path, "/auth");
}

#[test]
fn app_info_blank_origins_fall_back_to_defaults() {
    let info = AppInfo::from_origins(Some("   "), Some(""));
    assert_eq!(info.api_domain, DEFAULT_API_DOMAIN);
    assert_eq!(info.website_domain, DEFAULT_WEBSITE_DOMAIN);
}

#[test]
fn app_info_trims_trailing_slashes() {
    let info = AppInfo::from_origins(Some(" https://api.example.com/ "), Some("https://app.example.com//"));
    assert_eq!(info.api_domain, "https://api.example.com");
    assert_eq!(info.website_domain, "https://app.example.com");
}

// =============================================================
// Runtime overrides
// =============================================================

#[test]
fn apply_overrides_replaces_present_values() {
    let mut info = AppInfo::default();
    info.apply_overrides(&RuntimeConfig {
        api_url: Some("https://api.override".to_owned()),
        website_url: Some("https://web.override".to_owned()),
    });
    assert_eq!(info.api_domain, "https://api.override");
    assert_eq!(info.website_domain, "https://web.override");
}

#[test]
fn apply_overrides_ignores_blank_values() {
    let mut info = AppInfo::from_origins(Some("https://api.build"), None);
    info.apply_overrides(&RuntimeConfig { api_url: Some("  ".to_owned()), website_url: None });
    assert_eq!(info.api_domain, "https://api.build");
    assert_eq!(info.website_domain, DEFAULT_WEBSITE_DOMAIN);
}

// =============================================================
// AuthConfig
// =============================================================

#[test]
fn auth_config_enables_session_and_email_password() {
    let config = AuthConfig::default();
    assert!(config.has_recipe(Recipe::Session));
    assert!(config.has_recipe(Recipe::EmailPassword));
}

// =============================================================
// RuntimeConfig script
// =============================================================

#[test]
fn runtime_script_assigns_window_global() {
    let runtime = RuntimeConfig { api_url: Some("https://api.example.com".to_owned()), website_url: None };
    assert_eq!(
        runtime.to_script(),
        r#"window.FINTRACK_CONFIG = {"api_url":"https://api.example.com"};"#
    );
}

#[test]
fn runtime_script_escapes_closing_tags() {
    let runtime = RuntimeConfig { api_url: Some("</script><b>".to_owned()), website_url: None };
    let script = runtime.to_script();
    assert!(!script.contains("</script>"));
    assert!(script.contains("\\u003c/script>"));
}

#[test]
fn runtime_script_empty_config_is_empty_object() {
    assert_eq!(RuntimeConfig::default().to_script(), "window.FINTRACK_CONFIG = {};");
}
