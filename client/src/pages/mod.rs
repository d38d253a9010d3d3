//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Auth pages sit under `/auth` and render without a
//! session; the rest render inside `AppLayout` behind the route gate.

pub mod accounts;
pub mod auth_index;
pub mod dashboard;
pub mod not_found;
pub mod reset_password;
pub mod sign_in;
pub mod sign_up;
pub mod transactions;
