//! Accounts page: list, create, edit, and delete bank accounts.

#[cfg(test)]
#[path = "accounts_test.rs"]
mod accounts_test;

use leptos::prelude::*;

use crate::components::account_form::AccountForm;
use crate::components::app_layout::AppLayout;
use crate::components::spinner::LoadingPlaceholder;
use crate::net::api::{ApiError, create_account, delete_account, fetch_accounts, update_account, use_api_base};
use crate::net::types::{Account, AccountInput};
use crate::util::money::format_currency;

pub const LOAD_FAILED_MESSAGE: &str = "Failed to load accounts. Please try again.";
pub const SAVE_FAILED_MESSAGE: &str = "Unable to save the account. Please try again.";
pub const DELETE_FAILED_MESSAGE: &str = "Unable to delete the account. Please try again.";

/// Which form, if any, is open.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum FormMode {
    #[default]
    Closed,
    Create,
    Edit(Account),
}

impl FormMode {
    pub fn title(&self) -> Option<&'static str> {
        match self {
            Self::Closed => None,
            Self::Create => Some("Add Account"),
            Self::Edit(_) => Some("Edit Account"),
        }
    }
}

/// Last four characters of an account number, prefixed with a mask.
pub fn masked_account_number(number: &str) -> String {
    let chars: Vec<char> = number.chars().collect();
    let tail: String = chars[chars.len().saturating_sub(4)..].iter().collect();
    format!("•••• {tail}")
}

async fn save_account(base: String, mode: FormMode, input: AccountInput) -> Result<Account, ApiError> {
    match mode {
        FormMode::Edit(account) => update_account(&base, &account.id, &input).await,
        FormMode::Create | FormMode::Closed => create_account(&base, &input).await,
    }
}

#[component]
pub fn AccountsPage() -> impl IntoView {
    let base = use_api_base();
    let reload = RwSignal::new(0_u32);
    let mode = RwSignal::new(FormMode::Closed);
    let submitting = RwSignal::new(false);
    let action_error = RwSignal::new(None::<&'static str>);
    let delete_id = RwSignal::new(None::<String>);

    let list_base = base.clone();
    let accounts = LocalResource::new(move || {
        reload.track();
        let base = list_base.clone();
        async move { fetch_accounts(&base).await }
    });

    let save_base = base.clone();
    let on_submit = Callback::new(move |input: AccountInput| {
        submitting.set(true);
        action_error.set(None);
        let base = save_base.clone();
        let current = mode.get_untracked();
        leptos::task::spawn_local(async move {
            match save_account(base, current, input).await {
                Ok(_) => {
                    mode.set(FormMode::Closed);
                    reload.update(|n| *n += 1);
                }
                Err(e) => {
                    leptos::logging::warn!("account save failed: {e}");
                    action_error.set(Some(SAVE_FAILED_MESSAGE));
                }
            }
            submitting.set(false);
        });
    });
    let on_cancel = Callback::new(move |()| mode.set(FormMode::Closed));

    let delete_base = base;
    let on_delete_confirm = move |_| {
        let Some(id) = delete_id.get_untracked() else {
            return;
        };
        delete_id.set(None);
        action_error.set(None);
        let base = delete_base.clone();
        leptos::task::spawn_local(async move {
            match delete_account(&base, &id).await {
                Ok(()) => reload.update(|n| *n += 1),
                Err(e) => {
                    leptos::logging::warn!("account delete failed: {e}");
                    action_error.set(Some(DELETE_FAILED_MESSAGE));
                }
            }
        });
    };

    let form = move || {
        let current = mode.get();
        let title = current.title()?;
        let initial = match current {
            FormMode::Edit(account) => Some(account),
            FormMode::Create | FormMode::Closed => None,
        };
        Some(view! {
            <section class="panel">
                <h2 class="panel__title">{title}</h2>
                <AccountForm initial=initial on_submit=on_submit on_cancel=on_cancel submitting=submitting/>
            </section>
        })
    };

    let list = move || {
        accounts.get().map(|result| match result {
            Err(e) => {
                leptos::logging::error!("accounts load failed: {e}");
                view! {
                    <div class="panel__error" role="alert">
                        <p>{LOAD_FAILED_MESSAGE}</p>
                        <button class="btn btn--secondary" on:click=move |_| reload.update(|n| *n += 1)>
                            "Retry"
                        </button>
                    </div>
                }
                    .into_any()
            }
            Ok(items) if items.is_empty() => {
                view! { <p class="panel__empty">"No accounts yet. Add one to get started."</p> }.into_any()
            }
            Ok(items) => view! {
                <ul class="account-list">
                    {items
                        .into_iter()
                        .map(|account| {
                            let edit_target = account.clone();
                            let delete_target = account.id.clone();
                            view! {
                                <li class="account-list__row">
                                    <div class="account-list__main">
                                        <span class="account-list__name">{account.name}</span>
                                        <span class="account-list__meta">
                                            {account.bank_name} " " {masked_account_number(&account.account_number)}
                                        </span>
                                    </div>
                                    <span class="account-list__balance">{format_currency(account.balance)}</span>
                                    <div class="account-list__actions">
                                        <button
                                            class="btn btn--secondary"
                                            on:click=move |_| mode.set(FormMode::Edit(edit_target.clone()))
                                        >
                                            "Edit"
                                        </button>
                                        <button
                                            class="btn btn--danger"
                                            on:click=move |_| delete_id.set(Some(delete_target.clone()))
                                        >
                                            "Delete"
                                        </button>
                                    </div>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            }
                .into_any(),
        })
    };

    view! {
        <AppLayout>
            <div class="accounts">
                <div class="page-header">
                    <h1 class="page-title">"Accounts"</h1>
                    <button class="btn btn--primary" on:click=move |_| mode.set(FormMode::Create)>
                        "Add Account"
                    </button>
                </div>
                <Show when=move || action_error.get().is_some()>
                    <p class="auth-message auth-message--error" role="alert">
                        {move || action_error.get().unwrap_or_default()}
                    </p>
                </Show>
                {form}
                <Show when=move || delete_id.get().is_some()>
                    <div class="confirm">
                        <p>"Delete this account? This cannot be undone."</p>
                        <button class="btn btn--secondary" on:click=move |_| delete_id.set(None)>
                            "Cancel"
                        </button>
                        <button class="btn btn--danger" on:click=on_delete_confirm.clone()>
                            "Delete"
                        </button>
                    </div>
                </Show>
                <Suspense fallback=|| view! { <LoadingPlaceholder/> }>{list}</Suspense>
            </div>
        </AppLayout>
    }
}
