use super::*;

#[test]
fn account_decodes_camel_case_fields() {
    let json = r#"{"id":"1","userId":"u1","name":"Checking","accountNumber":"4321","bankName":"Chase","balance":2500.75}"#;
    let account: Account = serde_json::from_str(json).unwrap();
    assert_eq!(account.user_id, "u1");
    assert_eq!(account.account_number, "4321");
    assert_eq!(account.bank_name, "Chase");
    assert!((account.balance - 2500.75).abs() < f64::EPSILON);
}

#[test]
fn account_input_encodes_camel_case_fields() {
    let input = AccountInput {
        name: "Savings".to_owned(),
        account_number: "9999".to_owned(),
        bank_name: "Ally".to_owned(),
        balance: 10.0,
    };
    let value = serde_json::to_value(&input).unwrap();
    assert_eq!(value["accountNumber"], "9999");
    assert_eq!(value["bankName"], "Ally");
    assert!(value.get("id").is_none());
}

#[test]
fn credit_card_optional_fields_default_to_none() {
    let json = r#"{"id":"c1","userId":"u1","name":"Visa","balance":300}"#;
    let card: CreditCard = serde_json::from_str(json).unwrap();
    assert_eq!(card.issuer, None);
    assert_eq!(card.last_four, None);
    assert_eq!(card.credit_limit, None);
}

#[test]
fn transaction_decodes_links_and_category() {
    let json = r#"{"id":"t1","userId":"u1","amount":45.99,"description":"Restaurant Bill","date":"2024-03-13T18:30:00Z","isExpense":true,"creditCardId":"c1","category":"Dining"}"#;
    let tx: Transaction = serde_json::from_str(json).unwrap();
    assert!(tx.is_expense);
    assert_eq!(tx.account_id, None);
    assert_eq!(tx.credit_card_id.as_deref(), Some("c1"));
    assert_eq!(tx.category.as_deref(), Some("Dining"));
    assert_eq!(tx.day(), "2024-03-13");
}

#[test]
fn transaction_day_handles_short_dates() {
    let json = r#"{"id":"t1","userId":"u1","amount":1,"description":"x","date":"2024","isExpense":false}"#;
    let tx: Transaction = serde_json::from_str(json).unwrap();
    assert_eq!(tx.day(), "2024");
}
