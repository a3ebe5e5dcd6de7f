//! Common test utilities and helpers
//!
//! Builds an in-memory server and drives the sign-up and login forms the way
//! a browser would. The test client does not keep cookies, so the session
//! cookie is read from `Set-Cookie` and sent back explicitly.

#![allow(dead_code)]

use axum::http::{header, HeaderValue, StatusCode};
use axum_test::{TestRequest, TestResponse, TestServer};
use members_only::backend::auth::cookies::SESSION_COOKIE;
use members_only::backend::{create_router, AppState};
use members_only::shared::AppConfig;

/// Test user credentials
pub struct TestUser {
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub username: &'static str,
    pub password: &'static str,
}

pub const ALICE: TestUser = TestUser {
    first_name: "Alice",
    last_name: "Liddell",
    username: "alice",
    password: "secret123",
};

pub const BOB: TestUser = TestUser {
    first_name: "Bob",
    last_name: "Builder",
    username: "bob",
    password: "hunter22",
};

/// Configuration with the cheapest bcrypt cost
pub fn test_config() -> AppConfig {
    AppConfig::builder()
        .password_cost(4)
        .build()
        .expect("valid test config")
}

/// Server and state over the in-memory store
pub fn create_test_server_with(config: AppConfig) -> (TestServer, AppState) {
    let state = AppState::in_memory(config).expect("state");
    let server = TestServer::new(create_router(state.clone())).expect("test server");
    (server, state)
}

pub fn create_test_server() -> (TestServer, AppState) {
    create_test_server_with(test_config())
}

pub async fn sign_up(server: &TestServer, user: &TestUser) -> TestResponse {
    server
        .post("/sign-up")
        .form(&[
            ("first_name", user.first_name),
            ("last_name", user.last_name),
            ("username", user.username),
            ("password", user.password),
        ])
        .await
}

pub async fn login(server: &TestServer, username: &str, password: &str) -> TestResponse {
    server
        .post("/login")
        .form(&[("username", username), ("password", password)])
        .await
}

/// Sign up and log in, returning the session token
pub async fn signed_in(server: &TestServer, user: &TestUser) -> String {
    let response = sign_up(server, user).await;
    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);

    let response = login(server, user.username, user.password).await;
    assert_eq!(location(&response), "/");
    session_cookie(&response).expect("session cookie set on login")
}

/// Value of the session cookie set by `response`, if any
pub fn session_cookie(response: &TestResponse) -> Option<String> {
    let prefix = format!("{}=", SESSION_COOKIE);
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .filter_map(|value| value.strip_prefix(prefix.as_str()))
        .map(|rest| rest.split(';').next().unwrap_or_default().to_string())
        .next()
}

/// Raw `Set-Cookie` header for the session cookie
pub fn session_set_cookie_header(response: &TestResponse) -> Option<String> {
    let prefix = format!("{}=", SESSION_COOKIE);
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find(|value| value.starts_with(prefix.as_str()))
        .map(str::to_string)
}

pub fn location(response: &TestResponse) -> String {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

/// Attach the session cookie to a request
pub fn with_session(request: TestRequest, token: &str) -> TestRequest {
    let value = HeaderValue::from_str(&format!("{}={}", SESSION_COOKIE, token))
        .expect("cookie header");
    request.add_header(header::COOKIE, value)
}
