//! Email + password sign-in page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::auth::client::Credentials;
use crate::auth::config::APP_NAME;
use crate::auth::handle::use_auth_client;
use crate::util::validation::{SIGN_IN_FAILED_MESSAGE, sign_in_result, validate_credentials_input};

#[component]
pub fn SignInPage() -> impl IntoView {
    let handle = use_auth_client();
    let navigate = use_navigate();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let (email_value, password_value) =
            match validate_credentials_input(&email.get_untracked(), &password.get_untracked()) {
                Ok(pair) => pair,
                Err(msg) => {
                    error.set(Some(msg.to_owned()));
                    return;
                }
            };
        busy.set(true);
        error.set(None);

        let client = handle.client();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let credentials = Credentials { email: email_value, password: password_value };
            let outcome = match client.sign_in(&credentials).await {
                Ok(response) => sign_in_result(&response),
                Err(e) => {
                    leptos::logging::warn!("sign in failed: {e}");
                    Err(SIGN_IN_FAILED_MESSAGE.to_owned())
                }
            };
            busy.set(false);
            match outcome {
                Ok(()) => navigate("/dashboard", NavigateOptions::default()),
                Err(msg) => error.set(Some(msg)),
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>{APP_NAME}</h1>
                <p class="auth-card__subtitle">"Sign in to access your financial dashboard"</p>
                <Show when=move || error.get().is_some()>
                    <p class="auth-message auth-message--error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <form class="auth-form" on:submit=on_submit>
                    <label class="form-field">
                        <span class="form-field__label">"Email address"</span>
                        <input
                            class="form-field__input"
                            type="email"
                            autocomplete="email"
                            required
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form-field">
                        <span class="form-field__label">"Password"</span>
                        <input
                            class="form-field__input"
                            type="password"
                            autocomplete="current-password"
                            required
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing In..." } else { "Sign In" }}
                    </button>
                </form>
                <p class="auth-card__links">
                    <a href="/auth/reset-password">"Forgot your password?"</a>
                </p>
                <p class="auth-card__links">
                    "Don't have an account? "
                    <a href="/auth/signup">"Sign up"</a>
                </p>
            </div>
        </div>
    }
}
