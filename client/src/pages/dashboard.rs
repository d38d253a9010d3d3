//! Dashboard page with balance totals, category spending, and recent activity.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the signed-in landing route. Accounts, credit cards, and
//! transactions load concurrently; the first two are required, while a failed
//! transaction fetch only empties the activity panels.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::app_layout::AppLayout;
use crate::components::spinner::LoadingPlaceholder;
use crate::components::transaction_row::TransactionRow;
use crate::net::api::{ApiError, fetch_accounts, fetch_credit_cards, fetch_transactions, use_api_base};
use crate::net::types::{Account, CreditCard, Transaction};
use crate::state::finance::{
    CategorySpend, DashboardSummary, RECENT_TRANSACTION_LIMIT, recent_transactions, spending_by_category,
};
use crate::util::money::{bar_percent, format_currency};

pub const LOAD_FAILED_MESSAGE: &str = "Failed to load dashboard data. Please try again.";

/// Everything the dashboard renders, derived once per load.
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardData {
    pub summary: DashboardSummary,
    pub spending: Vec<CategorySpend>,
    pub recent: Vec<Transaction>,
}

/// Combine fetched records. Missing transactions degrade to empty panels.
pub fn dashboard_data(
    accounts: &[Account],
    cards: &[CreditCard],
    transactions: Result<Vec<Transaction>, ApiError>,
) -> DashboardData {
    let transactions = transactions.unwrap_or_else(|e| {
        leptos::logging::warn!("transactions unavailable: {e}");
        Vec::new()
    });
    DashboardData {
        summary: DashboardSummary::compute(accounts, cards),
        spending: spending_by_category(&transactions),
        recent: recent_transactions(&transactions, RECENT_TRANSACTION_LIMIT),
    }
}

async fn load_dashboard(base: String) -> Result<DashboardData, ApiError> {
    #[cfg(feature = "hydrate")]
    let (accounts, cards, transactions) =
        futures::join!(fetch_accounts(&base), fetch_credit_cards(&base), fetch_transactions(&base));
    #[cfg(not(feature = "hydrate"))]
    let (accounts, cards, transactions) =
        (fetch_accounts(&base).await, fetch_credit_cards(&base).await, fetch_transactions(&base).await);

    Ok(dashboard_data(&accounts?, &cards?, transactions))
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let base = use_api_base();
    let data = LocalResource::new(move || load_dashboard(base.clone()));

    view! {
        <AppLayout>
            <div class="dashboard">
                <h1 class="page-title">"Dashboard"</h1>
                <Suspense fallback=|| view! { <LoadingPlaceholder/> }>
                    {move || {
                        data.get()
                            .map(|result| match result {
                                Ok(loaded) => view! { <DashboardContent data=loaded/> }.into_any(),
                                Err(e) => {
                                    leptos::logging::error!("dashboard load failed: {e}");
                                    view! {
                                        <div class="dashboard__error" role="alert">
                                            <p>{LOAD_FAILED_MESSAGE}</p>
                                            <button class="btn btn--secondary" on:click=move |_| data.refetch()>
                                                "Retry"
                                            </button>
                                        </div>
                                    }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>
            </div>
        </AppLayout>
    }
}

#[component]
fn DashboardContent(data: DashboardData) -> impl IntoView {
    let DashboardData { summary, spending, recent } = data;
    let net_class = if summary.net_worth_positive() { "amount amount--positive" } else { "amount amount--negative" };
    let net_marker = if summary.net_worth_positive() { "▲" } else { "▼" };
    let max_spend = spending.first().map_or(0.0, |c| c.amount);

    view! {
        <div class="dashboard__cards">
            <div class="stat-card">
                <span class="stat-card__label">"Total Balance"</span>
                <span class="stat-card__value">{format_currency(summary.total_balance)}</span>
            </div>
            <div class="stat-card">
                <span class="stat-card__label">"Credit Card Debt"</span>
                <span class="stat-card__value amount--negative">{format_currency(summary.credit_card_debt)}</span>
            </div>
            <div class="stat-card">
                <span class="stat-card__label">"Net Worth"</span>
                <span class=format!("stat-card__value {net_class}")>
                    <span class="amount__marker" aria-hidden="true">{net_marker}</span>
                    {format_currency(summary.net_worth.abs())}
                </span>
            </div>
        </div>
        <div class="dashboard__panels">
            <section class="panel">
                <h2 class="panel__title">"Spending by Category"</h2>
                {if spending.is_empty() {
                    view! { <p class="panel__empty">"No expenses recorded yet."</p> }.into_any()
                } else {
                    view! {
                        <ul class="category-bars">
                            {spending
                                .into_iter()
                                .map(|c| {
                                    let width = format!("width: {:.1}%", bar_percent(c.amount, max_spend));
                                    view! {
                                        <li class="category-bars__row">
                                            <span class="category-bars__name">{c.name}</span>
                                            <span class="category-bars__amount">{format_currency(c.amount)}</span>
                                            <div class="category-bars__track">
                                                <div class="category-bars__fill" style=width></div>
                                            </div>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    }
                        .into_any()
                }}
            </section>
            <section class="panel">
                <div class="panel__header">
                    <h2 class="panel__title">"Recent Transactions"</h2>
                    <a class="panel__link" href="/transactions">"View all"</a>
                </div>
                {if recent.is_empty() {
                    view! { <p class="panel__empty">"No transactions yet."</p> }.into_any()
                } else {
                    view! {
                        <ul class="transaction-list">
                            {recent.into_iter().map(|tx| view! { <TransactionRow tx=tx/> }).collect_view()}
                        </ul>
                    }
                        .into_any()
                }}
            </section>
        </div>
    }
}
