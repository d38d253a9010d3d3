//! Sidebar layout shared by the signed-in pages.
//!
//! Sign-out leaves the SPA with a full navigation so no cached finance data
//! survives in memory.

#[cfg(test)]
#[path = "app_layout_test.rs"]
mod app_layout_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::auth::config::SIGN_IN_PATH;
use crate::auth::handle::use_auth_client;
use crate::util::browser::hard_navigate;

pub const BRAND_TITLE: &str = "Finance Tracker";

/// One sidebar link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_ITEMS: [NavItem; 3] = [
    NavItem { label: "Dashboard", href: "/dashboard" },
    NavItem { label: "Accounts", href: "/accounts" },
    NavItem { label: "Transactions", href: "/transactions" },
];

/// A link is active for its own path and everything below it.
pub fn is_nav_active(pathname: &str, href: &str) -> bool {
    pathname.starts_with(href)
}

fn nav_class(active: bool) -> &'static str {
    if active { "sidebar__link sidebar__link--active" } else { "sidebar__link" }
}

#[component]
pub fn AppLayout(children: Children) -> impl IntoView {
    let handle = use_auth_client();
    let pathname = use_location().pathname;
    let sidebar_open = RwSignal::new(false);
    let signing_out = RwSignal::new(false);

    let on_sign_out = move |_| {
        if signing_out.get_untracked() {
            return;
        }
        signing_out.set(true);
        let client = handle.client();
        leptos::task::spawn_local(async move {
            if let Err(e) = client.sign_out().await {
                leptos::logging::warn!("sign out failed: {e}");
            }
            hard_navigate(SIGN_IN_PATH);
        });
    };

    let links = move || {
        NAV_ITEMS
            .iter()
            .map(|item| {
                let href = item.href;
                view! {
                    <a
                        href=href
                        class=move || nav_class(is_nav_active(&pathname.get(), href))
                        on:click=move |_| sidebar_open.set(false)
                    >
                        {item.label}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <div class="app-layout">
            <Show when=move || sidebar_open.get()>
                <div class="app-layout__overlay" on:click=move |_| sidebar_open.set(false)></div>
            </Show>
            <aside class=move || if sidebar_open.get() { "sidebar sidebar--open" } else { "sidebar" }>
                <div class="sidebar__header">
                    <h1 class="sidebar__title">{BRAND_TITLE}</h1>
                    <button
                        class="sidebar__close"
                        aria-label="Close navigation"
                        on:click=move |_| sidebar_open.set(false)
                    >
                        "×"
                    </button>
                </div>
                <nav class="sidebar__nav">{links}</nav>
                <div class="sidebar__footer">
                    <button class="sidebar__sign-out" disabled=move || signing_out.get() on:click=on_sign_out>
                        "Sign Out"
                    </button>
                </div>
            </aside>
            <div class="app-layout__main">
                <header class="app-layout__mobile-header">
                    <button
                        class="app-layout__menu"
                        aria-label="Open navigation"
                        on:click=move |_| sidebar_open.set(true)
                    >
                        "☰"
                    </button>
                    <span class="app-layout__mobile-title">{BRAND_TITLE}</span>
                </header>
                <main class="app-layout__content">{children()}</main>
            </div>
        </div>
    }
}
