//! Transactions page listing every transaction, newest first.

use leptos::prelude::*;

use crate::components::app_layout::AppLayout;
use crate::components::spinner::LoadingPlaceholder;
use crate::components::transaction_row::TransactionRow;
use crate::net::api::{fetch_transactions, use_api_base};
use crate::state::finance::newest_first;

#[component]
pub fn TransactionsPage() -> impl IntoView {
    let base = use_api_base();
    let transactions = LocalResource::new(move || {
        let base = base.clone();
        async move { fetch_transactions(&base).await.map(|txs| newest_first(&txs)) }
    });

    view! {
        <AppLayout>
            <div class="transactions">
                <h1 class="page-title">"Transactions"</h1>
                <Suspense fallback=|| view! { <LoadingPlaceholder/> }>
                    {move || {
                        transactions
                            .get()
                            .map(|result| match result {
                                Err(e) => {
                                    leptos::logging::error!("transactions load failed: {e}");
                                    view! {
                                        <div class="panel__error" role="alert">
                                            <p>"Failed to load transactions. Please try again."</p>
                                            <button class="btn btn--secondary" on:click=move |_| transactions.refetch()>
                                                "Retry"
                                            </button>
                                        </div>
                                    }
                                        .into_any()
                                }
                                Ok(txs) if txs.is_empty() => {
                                    view! { <p class="panel__empty">"No transactions yet."</p> }.into_any()
                                }
                                Ok(txs) => view! {
                                    <ul class="transaction-list">
                                        {txs.into_iter().map(|tx| view! { <TransactionRow tx=tx/> }).collect_view()}
                                    </ul>
                                }
                                    .into_any(),
                            })
                    }}
                </Suspense>
            </div>
        </AppLayout>
    }
}
