use super::*;
use crate::auth::test_support::{RecordingClient, handle_for};
use std::time::Duration;

// =============================================================
// Idempotence
// =============================================================

#[test]
fn handle_starts_uninitialized() {
    let client = Arc::new(RecordingClient::default());
    let handle = handle_for(&client);
    assert!(!handle.is_initialized());
    assert_eq!(client.setups(), 0);
}

#[test]
fn repeated_calls_run_setup_once() {
    let client = Arc::new(RecordingClient::default());
    let handle = handle_for(&client);

    assert_eq!(handle.ensure_initialized(), InitOutcome::Initialized);
    for _ in 0..5 {
        assert_eq!(handle.ensure_initialized(), InitOutcome::AlreadyInitialized);
    }
    assert_eq!(client.setups(), 1);
    assert!(handle.is_initialized());
}

#[test]
fn cloned_handles_share_initialization() {
    let client = Arc::new(RecordingClient::default());
    let handle = handle_for(&client);
    let other = handle.clone();

    handle.ensure_initialized();
    assert_eq!(other.ensure_initialized(), InitOutcome::AlreadyInitialized);
    assert_eq!(client.setups(), 1);
}

// =============================================================
// Retry on failure
// =============================================================

#[test]
fn failed_setup_leaves_flag_false_and_retries() {
    let client = Arc::new(RecordingClient::failing(1));
    let handle = handle_for(&client);

    let first = handle.ensure_initialized();
    assert_eq!(first, InitOutcome::Failed(AuthError::General("boom".to_owned())));
    assert!(!first.is_ready());
    assert!(!handle.is_initialized());

    assert_eq!(handle.ensure_initialized(), InitOutcome::Initialized);
    assert!(handle.is_initialized());
    assert_eq!(client.setups(), 2);
}

#[test]
fn every_failure_is_retried_until_success() {
    let client = Arc::new(RecordingClient::failing(3));
    let handle = handle_for(&client);

    for _ in 0..3 {
        assert!(matches!(handle.ensure_initialized(), InitOutcome::Failed(_)));
    }
    assert_eq!(handle.ensure_initialized(), InitOutcome::Initialized);
    assert_eq!(handle.ensure_initialized(), InitOutcome::AlreadyInitialized);
    assert_eq!(client.setups(), 4);
}

// =============================================================
// Non-interactive clients
// =============================================================

#[test]
fn inert_handle_skips_setup() {
    let handle = AuthClientHandle::inert();
    assert_eq!(handle.ensure_initialized(), InitOutcome::Skipped);
    assert_eq!(handle.ensure_initialized(), InitOutcome::Skipped);
    assert!(!handle.is_initialized());
}

#[test]
fn interactive_handle_initializes_with_default_config() {
    let handle = AuthClientHandle::interactive();
    assert!(handle.client().interactive());
    assert_eq!(handle.ensure_initialized(), InitOutcome::Initialized);
    assert_eq!(handle.config().app_info.api_base_path, "/auth");
}

// =============================================================
// Overlapping calls
// =============================================================

#[test]
fn concurrent_first_calls_run_setup_once() {
    let client = Arc::new(RecordingClient { delay: Some(Duration::from_millis(20)), ..RecordingClient::default() });
    let handle = handle_for(&client);

    let outcomes: Vec<InitOutcome> = std::thread::scope(|scope| {
        let workers: Vec<_> = (0..8)
            .map(|_| {
                let handle = handle.clone();
                scope.spawn(move || handle.ensure_initialized())
            })
            .collect();
        workers.into_iter().map(|w| w.join().unwrap()).collect()
    });

    assert_eq!(client.setups(), 1);
    assert_eq!(outcomes.iter().filter(|o| **o == InitOutcome::Initialized).count(), 1);
    assert!(outcomes.iter().all(InitOutcome::is_ready));
}
