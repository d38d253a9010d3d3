//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain so pages can depend on small focused models.

pub mod finance;
