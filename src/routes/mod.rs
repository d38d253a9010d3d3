//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module stitches the health endpoint with Leptos SSR rendering under a
//! single Axum router. Finance data and auth live on separate origins; this
//! server only renders the shell and serves the compiled bundle.

pub mod health;

use std::path::PathBuf;

use axum::Router;
use axum::routing::get;
use client::app::{App, shell};
use client::auth::AuthClientHandle;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Routes served alongside the Leptos app.
pub fn api_routes() -> Router {
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);

    Router::new().route("/healthz", get(health::healthz)).layer(cors)
}

/// Health endpoint + Leptos SSR + static bundle.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn app(config: &ServerConfig) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(|| view! { <App auth=AuthClientHandle::inert()/> });

    let runtime = config.runtime();
    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || shell(opts.clone(), runtime.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .fallback_service(ServeDir::new(site_root_path))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}
