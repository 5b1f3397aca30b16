use roster_core::{AccountId, AuditAction, TokenIssuer};
use serde_json::{Value, json};

use crate::helpers::{TOKEN_TTL_SECONDS, TestApp};

#[tokio::test]
async fn should_return_access_token_for_valid_credentials() {
    let app = TestApp::new().await;
    let id = app.signup("a@x.com", "p").await;

    let token = app.login("a@x.com", "p").await;
    assert!(!token.is_empty());

    let identity = app.token_issuer.verify(&token).unwrap();
    assert_eq!(identity.id, AccountId::new(id));
    assert_eq!(identity.email, "a@x.com");
    assert_eq!(identity.expires_at - identity.issued_at, TOKEN_TTL_SECONDS);
}

#[tokio::test]
async fn should_return_401_for_wrong_password() {
    let app = TestApp::new().await;
    app.signup("a@x.com", "p").await;

    let response = app
        .post_login(&json!({ "email": "a@x.com", "password": "wrong" }))
        .await;
    assert_eq!(response.status().as_u16(), 401);

    let body: Value = response.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("Incorrect password"));
}

#[tokio::test]
async fn should_return_404_for_unknown_email() {
    let app = TestApp::new().await;

    let response = app
        .post_login(&json!({ "email": "nobody@x.com", "password": "p" }))
        .await;
    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn should_record_login_audit_entry_only_on_success() {
    let app = TestApp::new().await;
    let id = app.signup("a@x.com", "p").await;

    app.post_login(&json!({ "email": "a@x.com", "password": "wrong" }))
        .await;
    app.login("a@x.com", "p").await;

    let actions: Vec<_> = app
        .audit_log
        .entries_for(AccountId::new(id))
        .await
        .into_iter()
        .map(|e| e.action)
        .collect();
    assert_eq!(actions, vec![AuditAction::Signup, AuditAction::Login]);
}
