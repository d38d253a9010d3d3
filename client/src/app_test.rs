use super::*;
use leptos_meta::ServerMetaContext;
use leptos_router::location::RequestUrl;

/// Server-render `App` at `path` with the handle the SSR shell uses.
fn render_at(path: &str) -> String {
    let owner = Owner::new();
    owner.with(|| {
        let (meta_context, _meta_output) = ServerMetaContext::new();
        provide_context(meta_context);
        provide_context(RequestUrl::new(path));
        view! { <App auth=AuthClientHandle::inert()/> }.to_html()
    })
}

// =============================================================
// Server rendering
// =============================================================

#[test]
fn protected_route_renders_only_placeholder() {
    let html = render_at("/dashboard");
    assert!(html.contains("loading-placeholder"));
    assert!(!html.contains("Total Balance"));
    assert!(!html.contains("Sign Out"));
}

#[test]
fn public_route_renders_only_placeholder() {
    let html = render_at("/auth/signin");
    assert!(html.contains("loading-placeholder"));
    assert!(!html.contains("Sign In"));
}

#[test]
fn unknown_route_does_not_render_fallback() {
    let html = render_at("/nowhere");
    assert!(html.contains("loading-placeholder"));
    assert!(!html.contains("Page not found"));
}
