//! Create/edit form for a bank account.

#[cfg(test)]
#[path = "account_form_test.rs"]
mod account_form_test;

use std::collections::BTreeMap;

use leptos::prelude::*;

use crate::net::types::{Account, AccountInput};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum AccountField {
    Name,
    AccountNumber,
    BankName,
    Balance,
}

pub type FormErrors = BTreeMap<AccountField, &'static str>;

/// Raw form text before validation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AccountDraft {
    pub name: String,
    pub account_number: String,
    pub bank_name: String,
    pub balance: String,
}

impl AccountDraft {
    pub fn from_account(account: &Account) -> Self {
        Self {
            name: account.name.clone(),
            account_number: account.account_number.clone(),
            bank_name: account.bank_name.clone(),
            balance: account.balance.to_string(),
        }
    }

    /// Check required fields and parse the balance. A blank balance means zero.
    ///
    /// # Errors
    ///
    /// Returns one message per invalid field.
    pub fn validate(&self) -> Result<AccountInput, FormErrors> {
        let mut errors = FormErrors::new();
        if self.name.trim().is_empty() {
            errors.insert(AccountField::Name, "Account name is required");
        }
        if self.account_number.trim().is_empty() {
            errors.insert(AccountField::AccountNumber, "Account number is required");
        }
        if self.bank_name.trim().is_empty() {
            errors.insert(AccountField::BankName, "Bank name is required");
        }
        let balance = match self.balance.trim() {
            "" => Some(0.0),
            raw => raw.parse::<f64>().ok().filter(|v| v.is_finite()),
        };
        if balance.is_none() {
            errors.insert(AccountField::Balance, "Valid balance is required");
        }

        match balance {
            Some(balance) if errors.is_empty() => Ok(AccountInput {
                name: self.name.trim().to_owned(),
                account_number: self.account_number.trim().to_owned(),
                bank_name: self.bank_name.trim().to_owned(),
                balance,
            }),
            _ => Err(errors),
        }
    }
}

pub fn submit_label(submitting: bool, editing: bool) -> &'static str {
    match (submitting, editing) {
        (true, _) => "Saving...",
        (false, true) => "Update Account",
        (false, false) => "Create Account",
    }
}

#[component]
pub fn AccountForm(
    initial: Option<Account>,
    on_submit: Callback<AccountInput>,
    on_cancel: Callback<()>,
    #[prop(into)] submitting: Signal<bool>,
) -> impl IntoView {
    let editing = initial.is_some();
    let draft = RwSignal::new(initial.as_ref().map(AccountDraft::from_account).unwrap_or_default());
    let errors = RwSignal::new(FormErrors::new());

    let edit = move |field: AccountField, value: String| {
        draft.update(|d| match field {
            AccountField::Name => d.name = value,
            AccountField::AccountNumber => d.account_number = value,
            AccountField::BankName => d.bank_name = value,
            AccountField::Balance => d.balance = value,
        });
        errors.update(|e| {
            e.remove(&field);
        });
    };

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        match draft.get_untracked().validate() {
            Ok(input) => on_submit.run(input),
            Err(found) => errors.set(found),
        }
    };

    let field_error = move |field: AccountField| {
        move || errors.get().get(&field).map(|msg| view! { <p class="form-field__error">{*msg}</p> })
    };

    view! {
        <form class="account-form" on:submit=on_form_submit>
            <label class="form-field">
                <span class="form-field__label">"Account Name"</span>
                <input
                    class="form-field__input"
                    type="text"
                    placeholder="e.g., Checking Account"
                    prop:value=move || draft.get().name
                    on:input=move |ev| edit(AccountField::Name, event_target_value(&ev))
                />
                {field_error(AccountField::Name)}
            </label>
            <label class="form-field">
                <span class="form-field__label">"Account Number"</span>
                <input
                    class="form-field__input"
                    type="text"
                    placeholder="Last 4 digits only"
                    prop:value=move || draft.get().account_number
                    on:input=move |ev| edit(AccountField::AccountNumber, event_target_value(&ev))
                />
                {field_error(AccountField::AccountNumber)}
            </label>
            <label class="form-field">
                <span class="form-field__label">"Bank Name"</span>
                <input
                    class="form-field__input"
                    type="text"
                    placeholder="e.g., Chase Bank"
                    prop:value=move || draft.get().bank_name
                    on:input=move |ev| edit(AccountField::BankName, event_target_value(&ev))
                />
                {field_error(AccountField::BankName)}
            </label>
            <label class="form-field">
                <span class="form-field__label">"Current Balance"</span>
                <input
                    class="form-field__input"
                    type="number"
                    step="0.01"
                    placeholder="0.00"
                    prop:value=move || draft.get().balance
                    on:input=move |ev| edit(AccountField::Balance, event_target_value(&ev))
                />
                {field_error(AccountField::Balance)}
            </label>
            <div class="account-form__actions">
                <button
                    class="btn btn--secondary"
                    type="button"
                    disabled=move || submitting.get()
                    on:click=move |_| on_cancel.run(())
                >
                    "Cancel"
                </button>
                <button class="btn btn--primary" type="submit" disabled=move || submitting.get()>
                    {move || submit_label(submitting.get(), editing)}
                </button>
            </div>
        </form>
    }
}
