//! Wire types for the finance backend API.
//!
//! Field names are camelCase on the wire. Ids are opaque strings and dates
//! are ISO-8601 strings, compared lexically for ordering.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A bank account owned by the current user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub account_number: String,
    pub bank_name: String,
    pub balance: f64,
}

/// Create/update payload for an account (no id or owner).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountInput {
    pub name: String,
    pub account_number: String,
    pub bank_name: String,
    pub balance: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditCard {
    pub id: String,
    pub user_id: String,
    pub name: String,
    #[serde(default)]
    pub issuer: Option<String>,
    #[serde(default)]
    pub last_four: Option<String>,
    #[serde(default)]
    pub credit_limit: Option<f64>,
    pub balance: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub user_id: String,
    pub amount: f64,
    pub description: String,
    pub date: String,
    pub is_expense: bool,
    #[serde(default)]
    pub account_id: Option<String>,
    #[serde(default)]
    pub credit_card_id: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

impl Transaction {
    /// Calendar date part of `date` (`YYYY-MM-DD`).
    pub fn day(&self) -> &str {
        self.date.get(..10).unwrap_or(&self.date)
    }
}
