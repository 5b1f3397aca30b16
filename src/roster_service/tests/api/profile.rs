use chrono::{Duration, Utc};
use roster_adapters::auth_validation::{JwtAuthConfig, JwtIssuer};
use roster_core::{AccountId, TokenIssuer};
use secrecy::Secret;
use serde_json::Value;

use crate::helpers::{TOKEN_TTL_SECONDS, TestApp};

#[tokio::test]
async fn should_return_identity_for_valid_token() {
    let app = TestApp::new().await;
    let id = app.signup("a@x.com", "p").await;
    let token = app.login("a@x.com", "p").await;

    let response = app.get_profile(Some(&format!("Bearer {token}"))).await;
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["id"], id);
    assert_eq!(body["email"], "a@x.com");
    assert_eq!(
        body["expiresAt"].as_i64().unwrap() - body["issuedAt"].as_i64().unwrap(),
        TOKEN_TTL_SECONDS
    );
}

#[tokio::test]
async fn should_return_401_without_token() {
    let app = TestApp::new().await;

    let response = app.get_profile(None).await;
    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn should_return_401_for_invalid_authorization_headers() {
    let app = TestApp::new().await;
    let token = app.token_for(1, "a@x.com");

    let cases = [
        format!("Basic {token}"),
        "Bearer".to_string(),
        "Bearer not.a.jwt".to_string(),
        format!("Bearer {token}x"),
    ];

    for case in cases {
        let response = app.get_profile(Some(&case)).await;
        assert_eq!(response.status().as_u16(), 401, "Failed for header: {case}");
    }
}

#[tokio::test]
async fn should_return_401_for_expired_token() {
    let app = TestApp::new().await;
    let token = app
        .token_issuer
        .issue_at(
            AccountId::new(1),
            "a@x.com",
            Utc::now() - Duration::seconds(TOKEN_TTL_SECONDS + 1),
        )
        .unwrap();

    let response = app
        .get_profile(Some(&format!("Bearer {}", token.as_str())))
        .await;
    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn should_return_401_for_token_signed_with_other_secret() {
    let app = TestApp::new().await;
    let foreign = JwtIssuer::new(JwtAuthConfig {
        jwt_secret: Secret::new("another-secret".to_owned()),
        token_ttl_in_seconds: TOKEN_TTL_SECONDS,
    });
    let token = foreign.issue(AccountId::new(1), "a@x.com").unwrap();

    let response = app
        .get_profile(Some(&format!("Bearer {}", token.as_str())))
        .await;
    assert_eq!(response.status().as_u16(), 401);
}
