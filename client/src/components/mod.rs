//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and forms while reading shared handles from
//! Leptos context providers.

pub mod account_form;
pub mod app_layout;
pub mod spinner;
pub mod transaction_row;
