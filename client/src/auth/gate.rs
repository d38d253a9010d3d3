//! Route gate wrapping the route table.
//!
//! Per mount the gate moves `Uninitialized -> Ready` once, when its effect
//! has first run auth setup, and stays `Ready`. The effect reruns on every
//! navigation; setup is idempotent, so a setup that failed is retried on the
//! next route change. Effects never run during server rendering, so the
//! server and the first hydrated render both show the placeholder; no gated
//! or ungated content flashes before the client is ready.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use super::boundary::SessionAuth;
use super::handle::{AuthClientHandle, use_auth_client};
use super::policy::{AccessDecision, PathPolicy};
use crate::components::spinner::LoadingPlaceholder;

/// Per-mount lifecycle of the gate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GatePhase {
    #[default]
    Uninitialized,
    Ready,
}

/// What the gate renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateView {
    Placeholder,
    Public,
    Protected,
}

pub fn gate_view(phase: GatePhase, decision: AccessDecision) -> GateView {
    match (phase, decision) {
        (GatePhase::Uninitialized, _) => GateView::Placeholder,
        (GatePhase::Ready, AccessDecision::Public) => GateView::Public,
        (GatePhase::Ready, AccessDecision::Protected) => GateView::Protected,
    }
}

/// Run setup (a no-op once it has succeeded) and report the phase to latch.
pub fn evaluate_gate(handle: &AuthClientHandle) -> GatePhase {
    handle.ensure_initialized();
    GatePhase::Ready
}

/// Gate `children` behind session verification depending on the path.
///
/// Reads the `PathPolicy` from context, falling back to the default table.
#[component]
pub fn RouteGate(children: ChildrenFn) -> impl IntoView {
    let handle = use_auth_client();
    let policy = use_context::<PathPolicy>().unwrap_or_default();
    let pathname = use_location().pathname;
    let phase = RwSignal::new(GatePhase::Uninitialized);

    Effect::new(move || {
        pathname.track();
        let next = evaluate_gate(&handle);
        // Only the first transition notifies; re-setting would rebuild the tree.
        if phase.get_untracked() != next {
            phase.set(next);
        }
    });

    // Memoized so navigation inside one zone does not rebuild the tree.
    let decision = Memo::new(move |_| policy.decide(Some(pathname.get().as_str())));

    view! {
        {move || match gate_view(phase.get(), decision.get()) {
            GateView::Placeholder => view! { <LoadingPlaceholder/> }.into_any(),
            GateView::Public => children().into_any(),
            GateView::Protected => {
                let children = children.clone();
                view! { <SessionAuth>{children()}</SessionAuth> }.into_any()
            }
        }}
    }
}
