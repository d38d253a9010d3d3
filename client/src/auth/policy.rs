//! Path-based access policy.
//!
//! A path is public when any unprotected prefix is a plain string prefix of
//! it. Missing or empty paths are public. Everything else needs a session.

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;

/// Prefixes reachable without a session.
pub const UNPROTECTED_PREFIXES: [&str; 4] = ["/auth", "/auth/signin", "/auth/signup", "/auth/reset-password"];

/// Per-navigation access decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessDecision {
    Public,
    Protected,
}

impl AccessDecision {
    pub fn requires_auth(self) -> bool {
        self == Self::Protected
    }
}

/// Ordered, read-only table of unprotected path prefixes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathPolicy {
    unprotected: Vec<String>,
}

impl Default for PathPolicy {
    fn default() -> Self {
        Self::new(UNPROTECTED_PREFIXES)
    }
}

impl PathPolicy {
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { unprotected: prefixes.into_iter().map(Into::into).collect() }
    }

    pub fn unprotected_prefixes(&self) -> &[String] {
        &self.unprotected
    }

    pub fn decide(&self, path: Option<&str>) -> AccessDecision {
        match path {
            Some(path) if !path.is_empty() => {
                if self.unprotected.iter().any(|prefix| path.starts_with(prefix.as_str())) {
                    AccessDecision::Public
                } else {
                    AccessDecision::Protected
                }
            }
            _ => AccessDecision::Public,
        }
    }

    pub fn requires_auth(&self, path: Option<&str>) -> bool {
        self.decide(path).requires_auth()
    }
}
