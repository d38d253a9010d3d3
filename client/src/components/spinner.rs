use leptos::prelude::*;

/// Full-height spinner shown while auth or data is not ready.
#[component]
pub fn LoadingPlaceholder() -> impl IntoView {
    view! {
        <div class="loading-placeholder">
            <div class="loading-placeholder__spinner" role="status" aria-live="polite" aria-label="Loading"></div>
        </div>
    }
}
