//! Full-page browser navigation.
//!
//! Sign-out leaves the SPA entirely so every in-memory signal is dropped.
//! Requires a browser environment; a no-op elsewhere.

/// Replace the current document with `path`.
pub fn hard_navigate(path: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
    }
}
