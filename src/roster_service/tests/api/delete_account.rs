use roster_core::AccountId;
use serde_json::{Value, json};

use crate::helpers::TestApp;

#[tokio::test]
async fn should_return_removed_account_then_404() {
    let app = TestApp::new().await;
    let id = app.signup("a@x.com", "p").await;

    let response = app.delete_account(id).await;
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "id": id, "email": "a@x.com" }));

    let update = app.put_account(id, &json!({ "firstName": "Jo" })).await;
    assert_eq!(update.status().as_u16(), 404);

    let again = app.delete_account(id).await;
    assert_eq!(again.status().as_u16(), 404);
}

#[tokio::test]
async fn should_reject_login_after_delete() {
    let app = TestApp::new().await;
    let id = app.signup("a@x.com", "p").await;
    app.delete_account(id).await;

    let response = app
        .post_login(&json!({ "email": "a@x.com", "password": "p" }))
        .await;
    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn should_remove_audit_entries_with_account() {
    let app = TestApp::new().await;
    let id = app.signup("a@x.com", "p").await;
    let other = app.signup("b@x.com", "p").await;
    app.login("a@x.com", "p").await;
    assert!(!app.audit_log.entries_for(AccountId::new(id)).await.is_empty());

    let response = app.delete_account(id).await;
    assert_eq!(response.status().as_u16(), 200);

    assert!(app.audit_log.entries_for(AccountId::new(id)).await.is_empty());
    assert_eq!(app.audit_log.entries_for(AccountId::new(other)).await.len(), 1);
}

#[tokio::test]
async fn should_free_email_after_delete() {
    let app = TestApp::new().await;
    let id = app.signup("a@x.com", "p").await;
    app.delete_account(id).await;

    let new_id = app.signup("a@x.com", "p").await;
    assert_ne!(new_id, id);
}

#[tokio::test]
async fn should_return_400_for_non_integer_id() {
    let app = TestApp::new().await;

    let response = app
        .http_client
        .delete(format!("{}/users/abc", &app.address))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);

    let body: Value = response.json().await.unwrap();
    assert!(body["error"].is_string());
}
