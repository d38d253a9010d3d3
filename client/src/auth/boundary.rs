//! Session-verification boundary.
//!
//! `SessionAuth` holds its children back until the auth client confirms a
//! session. No session, or a failed check, navigates to the client's
//! sign-in path.

#[cfg(test)]
#[path = "boundary_test.rs"]
mod boundary_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use super::client::SessionStatus;
use super::error::AuthError;
use super::handle::use_auth_client;
use crate::components::spinner::LoadingPlaceholder;

/// What the boundary should do for the current check result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoundaryAction {
    /// Check still in flight.
    Wait,
    Render,
    Redirect(String),
}

pub fn boundary_action(check: Option<&Result<SessionStatus, AuthError>>, sign_in_path: &str) -> BoundaryAction {
    match check {
        None => BoundaryAction::Wait,
        Some(Ok(SessionStatus::Valid)) => BoundaryAction::Render,
        Some(Ok(SessionStatus::Absent) | Err(_)) => BoundaryAction::Redirect(sign_in_path.to_owned()),
    }
}

/// Render `children` only for a verified session.
#[component]
pub fn SessionAuth(children: ChildrenFn) -> impl IntoView {
    let handle = use_auth_client();
    let client = handle.client();
    let sign_in_path = client.sign_in_path().to_owned();

    let check = LocalResource::new(move || {
        let client = client.clone();
        async move { client.verify_session().await }
    });

    let navigate = use_navigate();
    let redirect_path = sign_in_path.clone();
    Effect::new(move || {
        let result = check.get();
        if let Some(Err(e)) = &result {
            leptos::logging::warn!("session check failed: {e}");
        }
        if let BoundaryAction::Redirect(path) = boundary_action(result.as_ref(), &redirect_path) {
            navigate(&path, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    view! {
        {move || match boundary_action(check.get().as_ref(), &sign_in_path) {
            BoundaryAction::Render => children().into_any(),
            BoundaryAction::Wait | BoundaryAction::Redirect(_) => view! { <LoadingPlaceholder/> }.into_any(),
        }}
    }
}
