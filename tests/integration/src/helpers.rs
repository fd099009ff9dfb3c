//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers on an ephemeral port,
//! minting identity tokens and making HTTP requests.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use blog_api::{create_app, create_app_state, serve};
use blog_common::{AppConfig, JwtService};
use blog_core::value_objects::UserId;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::fixtures::{unique_suffix, TestUser};

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    jwt: JwtService,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server
    pub async fn start() -> Result<Self> {
        let config = test_config()?;
        Self::start_with_config(config).await
    }

    /// Start a test server with custom config
    pub async fn start_with_config(config: AppConfig) -> Result<Self> {
        let jwt = JwtService::new(&config.jwt.secret, 3600);

        let state = create_app_state(config).await?;
        let app = create_app(state)?;

        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            serve(listener, app).await.ok();
        });

        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            addr,
            client,
            jwt,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Mint a token for a fresh identity; the account is provisioned on first use
    pub fn new_user(&self) -> Result<TestUser> {
        let suffix = unique_suffix();
        let id = UserId::new();
        let email = format!("writer{suffix}.{}@example.com", id.into_inner().simple());
        let token =
            self.jwt
                .issue_access_token(id, Some(email.clone()), Some(format!("Writer {suffix}")))?;
        Ok(TestUser { id, email, token })
    }

    /// Mint a token for a fresh subject that claims an existing email
    pub fn new_user_with_email(&self, email: &str) -> Result<TestUser> {
        let id = UserId::new();
        let token = self.jwt.issue_access_token(id, Some(email.to_string()), None)?;
        Ok(TestUser {
            id,
            email: email.to_string(),
            token,
        })
    }

    /// Provision the user's account through `GET /api/v1/me`
    pub async fn register(&self) -> Result<TestUser> {
        let user = self.new_user()?;
        let response = self.get_auth("/api/v1/me", &user.token).await?;
        assert_status(response, StatusCode::OK).await?;
        Ok(user)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    async fn send(request: RequestBuilder, token: Option<&str>) -> Result<Response> {
        let request = match token {
            Some(token) => request.bearer_auth(token),
            None => request,
        };
        Ok(request.send().await?)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        Self::send(self.client.get(self.url(path)), None).await
    }

    /// Make a GET request with auth token
    pub async fn get_auth(&self, path: &str, token: &str) -> Result<Response> {
        Self::send(self.client.get(self.url(path)), Some(token)).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        Self::send(self.client.post(self.url(path)).json(body), None).await
    }

    /// Make a POST request with auth token and JSON body
    pub async fn post_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        Self::send(self.client.post(self.url(path)).json(body), Some(token)).await
    }

    /// Make a body-less POST request with auth token
    pub async fn post_empty_auth(&self, path: &str, token: &str) -> Result<Response> {
        Self::send(self.client.post(self.url(path)), Some(token)).await
    }

    /// Make a PUT request with auth token
    pub async fn put_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        Self::send(self.client.put(self.url(path)).json(body), Some(token)).await
    }

    /// Make a PATCH request with auth token
    pub async fn patch_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        Self::send(self.client.patch(self.url(path)).json(body), Some(token)).await
    }

    /// Make a DELETE request with auth token
    pub async fn delete_auth(&self, path: &str, token: &str) -> Result<Response> {
        Self::send(self.client.delete(self.url(path)), Some(token)).await
    }

    /// Run a GraphQL query, optionally as a viewer
    pub async fn graphql(
        &self,
        query: &str,
        token: Option<&str>,
    ) -> Result<serde_json::Value> {
        let body = serde_json::json!({ "query": query });
        let response = Self::send(self.client.post(self.url("/graphql")).json(&body), token).await?;
        assert_json(response, StatusCode::OK).await
    }
}

/// Create a test configuration
///
/// Reads the environment, with a generous rate limit so parallel tests do
/// not trip it.
pub fn test_config() -> Result<AppConfig> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_lookup(|key| match key {
        "RATE_LIMIT_BURST" => Some("10000".to_string()),
        "JWT_SECRET" => {
            Some(std::env::var(key).unwrap_or_else(|_| "integration-test-secret".to_string()))
        }
        _ => std::env::var(key).ok(),
    })
    .map_err(|e| anyhow::anyhow!("Config error: {}", e))?;

    Ok(config)
}

/// Helper to check if test environment is available
pub async fn check_test_env() -> bool {
    dotenvy::dotenv().ok();

    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("Skipping test: DATABASE_URL not set");
        return false;
    }

    true
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected_status: StatusCode,
) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(())
}
