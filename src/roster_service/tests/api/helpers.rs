use roster_adapters::{
    auth_validation::{JwtAuthConfig, JwtIssuer, LocalJwtValidator},
    authentication::Argon2Hasher,
    config::test,
    persistence::{HashMapAccountStore, VecAuditLog},
};
use roster_axum::AccountState;
use roster_core::{AccountId, CostFactor, TokenIssuer};
use roster_service::UsersService;
use secrecy::Secret;
use serde::Serialize;
use serde_json::{Value, json};
use tokio::net::TcpListener;

pub const JWT_SECRET: &str = "api-test-secret";
pub const TOKEN_TTL_SECONDS: i64 = 600;

pub struct TestApp {
    pub address: String,
    pub http_client: reqwest::Client,
    pub audit_log: VecAuditLog,
    pub token_issuer: JwtIssuer,
}

impl TestApp {
    pub async fn new() -> Self {
        let account_store = HashMapAccountStore::new();
        let audit_log = account_store.audit_log();
        let token_issuer = JwtIssuer::new(JwtAuthConfig {
            jwt_secret: Secret::new(JWT_SECRET.to_owned()),
            token_ttl_in_seconds: TOKEN_TTL_SECONDS,
        });

        let state = AccountState::new(
            account_store,
            audit_log.clone(),
            Argon2Hasher::new(1024),
            token_issuer.clone(),
            CostFactor::new(1),
        );
        let users_service = UsersService::new(state, LocalJwtValidator::new(token_issuer.clone()));

        let listener = TcpListener::bind(test::APP_ADDRESS)
            .await
            .expect("Failed to bind test listener");
        let address = format!("http://{}", listener.local_addr().unwrap());

        tokio::spawn(users_service.run_standalone(listener, None));

        Self {
            address,
            http_client: reqwest::Client::new(),
            audit_log,
            token_issuer,
        }
    }

    pub async fn post_signup<Body: Serialize>(&self, body: &Body) -> reqwest::Response {
        self.http_client
            .post(format!("{}/users/signup", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_login<Body: Serialize>(&self, body: &Body) -> reqwest::Response {
        self.http_client
            .post(format!("{}/users/login", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn put_account<Body: Serialize>(&self, id: i64, body: &Body) -> reqwest::Response {
        self.http_client
            .put(format!("{}/users/{id}", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn delete_account(&self, id: i64) -> reqwest::Response {
        self.http_client
            .delete(format!("{}/users/{id}", &self.address))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_profile(&self, authorization: Option<&str>) -> reqwest::Response {
        let mut request = self
            .http_client
            .get(format!("{}/users/profile", &self.address));
        if let Some(value) = authorization {
            request = request.header("Authorization", value);
        }
        request.send().await.expect("Failed to execute request.")
    }

    /// Sign up and return the new account id.
    pub async fn signup(&self, email: &str, password: &str) -> i64 {
        let response = self
            .post_signup(&json!({ "email": email, "password": password }))
            .await;
        assert_eq!(response.status().as_u16(), 201);

        let body: Value = response.json().await.unwrap();
        body["id"].as_i64().unwrap()
    }

    /// Log in and return the access token.
    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self
            .post_login(&json!({ "email": email, "password": password }))
            .await;
        assert_eq!(response.status().as_u16(), 200);

        let body: Value = response.json().await.unwrap();
        body["accessToken"].as_str().unwrap().to_owned()
    }

    pub fn token_for(&self, id: i64, email: &str) -> String {
        self.token_issuer
            .issue(AccountId::new(id), email)
            .unwrap()
            .into_string()
    }
}

pub fn get_random_email() -> String {
    use fake::{Fake, faker::internet::en::SafeEmail};
    SafeEmail().fake()
}
