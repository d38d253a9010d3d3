//! `/auth` landing route. Forwards straight to the sign-in form.

#[cfg(test)]
#[path = "auth_index_test.rs"]
mod auth_index_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::auth::config::{APP_NAME, AUTH_BASE_PATH, SIGN_IN_PATH};

/// Where a bare auth path should go. Only `/auth` itself redirects.
pub fn auth_index_redirect(pathname: &str) -> Option<&'static str> {
    (pathname.trim_end_matches('/') == AUTH_BASE_PATH).then_some(SIGN_IN_PATH)
}

#[component]
pub fn AuthIndexPage() -> impl IntoView {
    let pathname = use_location().pathname;
    let navigate = use_navigate();

    Effect::new(move || {
        if let Some(target) = auth_index_redirect(&pathname.get()) {
            navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>{APP_NAME}</h1>
                <p class="auth-card__subtitle">"Sign in to access your financial dashboard"</p>
            </div>
        </div>
    }
}
