//! Single transaction line used by the dashboard and the transactions list.

use leptos::prelude::*;

use crate::net::types::Transaction;
use crate::state::finance::UNCATEGORIZED;
use crate::util::money::format_signed;

#[component]
pub fn TransactionRow(tx: Transaction) -> impl IntoView {
    let amount_class = if tx.is_expense { "amount amount--negative" } else { "amount amount--positive" };
    let amount = format_signed(tx.amount, tx.is_expense);
    let day = tx.day().to_owned();
    let category = tx.category.clone().unwrap_or_else(|| UNCATEGORIZED.to_owned());

    view! {
        <li class="transaction-list__row">
            <div class="transaction-list__main">
                <span class="transaction-list__description">{tx.description}</span>
                <span class="transaction-list__meta">{day} " " {category}</span>
            </div>
            <span class=amount_class>{amount}</span>
        </li>
    }
}
