use super::*;

fn account(balance: f64) -> Account {
    Account {
        id: "a1".to_owned(),
        user_id: "u1".to_owned(),
        name: "Checking".to_owned(),
        account_number: "1234".to_owned(),
        bank_name: "Bank".to_owned(),
        balance,
    }
}

fn card(balance: f64) -> CreditCard {
    CreditCard {
        id: "c1".to_owned(),
        user_id: "u1".to_owned(),
        name: "Visa".to_owned(),
        issuer: Some("Chase".to_owned()),
        last_four: Some("4242".to_owned()),
        credit_limit: Some(5000.0),
        balance,
    }
}

fn expense(id: &str, amount: f64, date: &str, category: &str) -> Transaction {
    Transaction {
        id: id.to_owned(),
        user_id: "u1".to_owned(),
        amount,
        description: format!("tx {id}"),
        date: date.to_owned(),
        is_expense: true,
        account_id: Some("a1".to_owned()),
        credit_card_id: None,
        category: Some(category.to_owned()),
    }
}

#[test]
fn dashboard_data_combines_all_sources() {
    let txs: Vec<Transaction> = (1..=7).map(|i| expense(&i.to_string(), 10.0, &format!("2024-03-0{i}"), "Food")).collect();
    let data = dashboard_data(&[account(1000.0)], &[card(250.0)], Ok(txs));

    assert!((data.summary.net_worth - 750.0).abs() < 1e-9);
    assert_eq!(data.spending, vec![CategorySpend { name: "Food".to_owned(), amount: 70.0 }]);
    assert_eq!(data.recent.len(), RECENT_TRANSACTION_LIMIT);
    assert_eq!(data.recent[0].id, "7");
}

#[test]
fn transaction_failure_keeps_summary() {
    let data = dashboard_data(&[account(100.0)], &[], Err(ApiError::Status(500)));
    assert!((data.summary.total_balance - 100.0).abs() < 1e-9);
    assert!(data.spending.is_empty());
    assert!(data.recent.is_empty());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn load_fails_when_required_fetches_fail() {
    let result = futures::executor::block_on(load_dashboard("http://localhost:8000".to_owned()));
    assert_eq!(result, Err(ApiError::Unavailable));
}
