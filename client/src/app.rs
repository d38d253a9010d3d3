//! Root application component with routing and context providers.

#[cfg(all(test, feature = "ssr"))]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::auth::config::{APP_NAME, RuntimeConfig};
use crate::auth::{AuthClientHandle, PathPolicy, RouteGate};
use crate::pages::{
    accounts::AccountsPage, auth_index::AuthIndexPage, dashboard::DashboardPage, not_found::NotFoundPage,
    reset_password::ResetPasswordPage, sign_in::SignInPage, sign_up::SignUpPage, transactions::TransactionsPage,
};

/// HTML shell rendered on the server for SSR + hydration.
///
/// `runtime` is published as a window global before the bundle loads so the
/// browser build picks up deployment origins without a rebuild.
pub fn shell(options: LeptosOptions, runtime: RuntimeConfig) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <script inner_html=runtime.to_script()></script>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App auth=AuthClientHandle::inert()/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// `auth` is chosen by the entry point: interactive in the browser, inert on
/// the server.
#[component]
pub fn App(auth: AuthClientHandle) -> impl IntoView {
    provide_meta_context();
    provide_context(auth);
    provide_context(PathPolicy::default());

    view! {
        <Stylesheet id="leptos" href="/pkg/fintrack.css"/>
        <Title text=APP_NAME/>

        <Router>
            <RouteGate>
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=|| view! { <Redirect path="/dashboard"/> }/>
                    <Route path=StaticSegment("auth") view=AuthIndexPage/>
                    <Route path=(StaticSegment("auth"), StaticSegment("signin")) view=SignInPage/>
                    <Route path=(StaticSegment("auth"), StaticSegment("signup")) view=SignUpPage/>
                    <Route path=(StaticSegment("auth"), StaticSegment("reset-password")) view=ResetPasswordPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=StaticSegment("accounts") view=AccountsPage/>
                    <Route path=StaticSegment("transactions") view=TransactionsPage/>
                </Routes>
            </RouteGate>
        </Router>
    }
}
