//! Dashboard aggregates over already-fetched records.
//!
//! DESIGN
//! ======
//! Balances arrive computed from the backend; this module only sums and
//! orders them, so pages stay free of arithmetic.

#[cfg(test)]
#[path = "finance_test.rs"]
mod finance_test;

use std::collections::HashMap;

use crate::net::types::{Account, CreditCard, Transaction};

pub const UNCATEGORIZED: &str = "Uncategorized";
pub const RECENT_TRANSACTION_LIMIT: usize = 5;

/// Headline totals shown on the dashboard.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DashboardSummary {
    pub total_balance: f64,
    pub credit_card_debt: f64,
    pub net_worth: f64,
}

impl DashboardSummary {
    pub fn compute(accounts: &[Account], cards: &[CreditCard]) -> Self {
        let total_balance: f64 = accounts.iter().map(|a| a.balance).sum();
        let credit_card_debt: f64 = cards.iter().map(|c| c.balance).sum();
        Self { total_balance, credit_card_debt, net_worth: total_balance - credit_card_debt }
    }

    pub fn net_worth_positive(&self) -> bool {
        self.net_worth >= 0.0
    }
}

/// Expense total for one category.
#[derive(Clone, Debug, PartialEq)]
pub struct CategorySpend {
    pub name: String,
    pub amount: f64,
}

/// Expense totals per category, largest first. Ties sort by name.
pub fn spending_by_category(transactions: &[Transaction]) -> Vec<CategorySpend> {
    let mut totals: HashMap<&str, f64> = HashMap::new();
    for tx in transactions.iter().filter(|t| t.is_expense) {
        let name = tx
            .category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(UNCATEGORIZED);
        *totals.entry(name).or_default() += tx.amount;
    }

    let mut spend: Vec<CategorySpend> = totals
        .into_iter()
        .map(|(name, amount)| CategorySpend { name: name.to_owned(), amount })
        .collect();
    spend.sort_by(|a, b| b.amount.total_cmp(&a.amount).then_with(|| a.name.cmp(&b.name)));
    spend
}

/// Transactions ordered newest first.
pub fn newest_first(transactions: &[Transaction]) -> Vec<Transaction> {
    let mut sorted = transactions.to_vec();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted
}

/// The newest `limit` transactions.
pub fn recent_transactions(transactions: &[Transaction], limit: usize) -> Vec<Transaction> {
    let mut sorted = newest_first(transactions);
    sorted.truncate(limit);
    sorted
}
