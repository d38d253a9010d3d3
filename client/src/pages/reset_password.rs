//! Password reset request page.

use leptos::prelude::*;

use crate::auth::handle::use_auth_client;
use crate::util::validation::{MISSING_EMAIL_MESSAGE, RESET_FAILED_MESSAGE, RESET_SENT_MESSAGE};

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let handle = use_auth_client();
    let email = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let email_value = email.get_untracked().trim().to_owned();
        if email_value.is_empty() {
            info.set(MISSING_EMAIL_MESSAGE.to_owned());
            return;
        }
        busy.set(true);
        info.set(String::new());

        let client = handle.client();
        leptos::task::spawn_local(async move {
            match client.request_password_reset(&email_value).await {
                Ok(()) => info.set(RESET_SENT_MESSAGE.to_owned()),
                Err(e) => {
                    leptos::logging::warn!("password reset request failed: {e}");
                    info.set(RESET_FAILED_MESSAGE.to_owned());
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Reset your password"</h1>
                <p class="auth-card__subtitle">"We will email you a link to choose a new password."</p>
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
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Email me"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <p class="auth-card__links">
                    <a href="/auth/signin">"Back to sign in"</a>
                </p>
            </div>
        </div>
    }
}
