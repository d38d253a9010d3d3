//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and pure form rules
//! from page and component logic to improve reuse and testability.

pub mod browser;
pub mod money;
pub mod validation;
