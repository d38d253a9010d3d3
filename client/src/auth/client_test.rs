use super::*;
use futures::executor::block_on;

// =============================================================
// CredentialResponse decoding
// =============================================================

#[test]
fn credential_response_ok_with_user() {
    let json = r#"{"status":"OK","user":{"id":"u1","emails":["a@b.com"],"timeJoined":1}}"#;
    let resp: CredentialResponse = serde_json::from_str(json).unwrap();
    assert_eq!(
        resp,
        CredentialResponse::Ok {
            user: Some(AuthUser { id: "u1".to_owned(), emails: vec!["a@b.com".to_owned()] })
        }
    );
}

#[test]
fn credential_response_ok_without_user() {
    let resp: CredentialResponse = serde_json::from_str(r#"{"status":"OK"}"#).unwrap();
    assert_eq!(resp, CredentialResponse::Ok { user: None });
}

#[test]
fn credential_response_field_error_lists_fields() {
    let json = r#"{"status":"FIELD_ERROR","formFields":[{"id":"email","error":"Email already exists"}]}"#;
    let resp: CredentialResponse = serde_json::from_str(json).unwrap();
    let CredentialResponse::FieldError { form_fields } = resp else {
        panic!("expected FIELD_ERROR");
    };
    assert_eq!(form_fields.len(), 1);
    assert_eq!(form_fields[0].id, "email");
    assert_eq!(form_fields[0].error, "Email already exists");
}

#[test]
fn credential_response_wrong_credentials() {
    let resp: CredentialResponse = serde_json::from_str(r#"{"status":"WRONG_CREDENTIALS_ERROR"}"#).unwrap();
    assert_eq!(resp, CredentialResponse::WrongCredentialsError);
}

#[test]
fn credential_response_sign_up_not_allowed_carries_reason() {
    let json = r#"{"status":"SIGN_UP_NOT_ALLOWED","reason":"Invite only (ERR_CODE_007)"}"#;
    let resp: CredentialResponse = serde_json::from_str(json).unwrap();
    assert_eq!(resp, CredentialResponse::SignUpNotAllowed { reason: "Invite only (ERR_CODE_007)".to_owned() });
}

#[test]
fn credential_response_general_error_carries_message() {
    let json = r#"{"status":"GENERAL_ERROR","message":"Try later"}"#;
    let resp: CredentialResponse = serde_json::from_str(json).unwrap();
    assert_eq!(resp, CredentialResponse::GeneralError { message: "Try later".to_owned() });
}

#[test]
fn credential_response_unknown_status_is_rejected() {
    assert!(serde_json::from_str::<CredentialResponse>(r#"{"status":"NOPE"}"#).is_err());
}

// =============================================================
// Credentials
// =============================================================

#[test]
fn credentials_form_fields_shape() {
    let creds = Credentials { email: "a@b.com".to_owned(), password: "abc12345".to_owned() };
    let body = creds.form_fields();
    assert_eq!(body["formFields"][0]["id"], "email");
    assert_eq!(body["formFields"][0]["value"], "a@b.com");
    assert_eq!(body["formFields"][1]["id"], "password");
    assert_eq!(body["formFields"][1]["value"], "abc12345");
}

// =============================================================
// NoopAuthClient
// =============================================================

#[test]
fn noop_client_is_not_interactive() {
    assert!(!NoopAuthClient.interactive());
}

#[test]
fn noop_client_uses_default_sign_in_path() {
    assert_eq!(NoopAuthClient.sign_in_path(), "/auth/signin");
}

#[test]
fn noop_client_network_operations_are_unavailable() {
    let client = NoopAuthClient;
    assert_eq!(block_on(client.verify_session()), Err(AuthError::Unavailable));
    assert_eq!(block_on(client.sign_out()), Err(AuthError::Unavailable));
    assert_eq!(block_on(client.email_exists("a@b.com")), Err(AuthError::Unavailable));
}
