//! Sign-up page with password rules and a debounced email uniqueness check.
//!
//! Each keystroke bumps a generation counter; a pending check only reports
//! back when its generation is still current, so stale lookups never
//! overwrite a newer result.

#[cfg(test)]
#[path = "sign_up_test.rs"]
mod sign_up_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::auth::client::Credentials;
use crate::auth::handle::use_auth_client;
use crate::util::validation::{
    PASSWORD_RULE_MESSAGE, REGISTRATION_FAILED_MESSAGE, SignUpResult, should_check_email, sign_up_result,
    validate_credentials_input, validate_password,
};

/// Why a submit was refused before reaching the provider.
pub fn sign_up_precheck(email_error: bool, email: &str, password: &str) -> Result<(String, String), Option<String>> {
    if email_error {
        return Err(None);
    }
    let (email, password) = validate_credentials_input(email, password).map_err(|m| Some(m.to_owned()))?;
    if !validate_password(&password) {
        return Err(Some(PASSWORD_RULE_MESSAGE.to_owned()));
    }
    Ok((email, password))
}

pub fn sign_up_label(busy: bool) -> &'static str {
    if busy { "Creating Account..." } else { "Sign Up" }
}

#[component]
pub fn SignUpPage() -> impl IntoView {
    let handle = use_auth_client();
    let navigate = use_navigate();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let email_error = RwSignal::new(None::<String>);
    let checking = RwSignal::new(false);
    let busy = RwSignal::new(false);
    let generation = StoredValue::new(0_u64);

    let check_client = handle.client();
    let on_email_input = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        email.set(value.clone());
        email_error.set(None);
        let ticket = generation.get_value() + 1;
        generation.set_value(ticket);
        if !should_check_email(&value) {
            checking.set(false);
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let client = check_client.clone();
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(crate::util::validation::EMAIL_CHECK_DEBOUNCE_MS).await;
                if generation.get_value() != ticket {
                    return;
                }
                checking.set(true);
                let result = client.email_exists(&value).await;
                if generation.get_value() != ticket {
                    return;
                }
                checking.set(false);
                if let Err(e) = &result {
                    leptos::logging::warn!("email check failed: {e}");
                }
                email_error.set(crate::util::validation::email_check_message(&result));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = &check_client;
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let (email_value, password_value) = match sign_up_precheck(
            email_error.get_untracked().is_some(),
            &email.get_untracked(),
            &password.get_untracked(),
        ) {
            Ok(pair) => pair,
            Err(msg) => {
                if msg.is_some() {
                    error.set(msg);
                }
                return;
            }
        };
        busy.set(true);
        error.set(None);

        let client = handle.client();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let credentials = Credentials { email: email_value, password: password_value };
            let outcome = match client.sign_up(&credentials).await {
                Ok(response) => sign_up_result(&response),
                Err(e) => {
                    leptos::logging::warn!("sign up failed: {e}");
                    SignUpResult::Error(REGISTRATION_FAILED_MESSAGE.to_owned())
                }
            };
            busy.set(false);
            match outcome {
                SignUpResult::Success => navigate("/dashboard", NavigateOptions::default()),
                SignUpResult::NotAllowed(msg) | SignUpResult::Error(msg) => error.set(Some(msg)),
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create an Account"</h1>
                <p class="auth-card__subtitle">"Sign up to start tracking your finances"</p>
                <Show when=move || error.get().is_some()>
                    <p class="auth-message auth-message--error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <form class="auth-form" on:submit=on_submit>
                    <label class="form-field">
                        <span class="form-field__label">"Email address"</span>
                        <input
                            class=move || {
                                if email_error.get().is_some() {
                                    "form-field__input form-field__input--invalid"
                                } else {
                                    "form-field__input"
                                }
                            }
                            type="email"
                            autocomplete="email"
                            required
                            prop:value=move || email.get()
                            on:input=on_email_input
                        />
                        <Show when=move || checking.get()>
                            <span class="form-field__spinner" role="status" aria-label="Checking email"></span>
                        </Show>
                    </label>
                    <Show when=move || email_error.get().is_some()>
                        <p class="form-field__error">{move || email_error.get().unwrap_or_default()}</p>
                    </Show>
                    <label class="form-field">
                        <span class="form-field__label">"Password"</span>
                        <input
                            class="form-field__input"
                            type="password"
                            autocomplete="new-password"
                            required
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button
                        class="btn btn--primary"
                        type="submit"
                        disabled=move || busy.get() || checking.get() || email_error.get().is_some()
                    >
                        {move || sign_up_label(busy.get())}
                    </button>
                </form>
                <p class="auth-card__links">
                    "Already have an account? "
                    <a href="/auth/signin">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
