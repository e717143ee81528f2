//! HTTP client for the storefront admin API
//!
//! Thin reqwest wrapper: bearer-token auth, status-code mapping to
//! [`ClientError`], and one typed method per endpoint the dashboard
//! calls. Responses are plain JSON payloads (no envelope).

use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use shared::client::{AdminProfile, LoginRequest, LoginResponse};
use shared::models::{
    CatalogItem, CatalogItemPayload, Category, CategoryCreate, CategoryUpdate, Order, OrderStatus,
    OrderStatusUpdate, StoreStats, StoreUser,
};

use crate::{ClientConfig, ClientError, ClientResult};

/// HTTP client for making network requests to the storefront API
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.clone(),
            token: config.token.clone(),
        }
    }

    /// Set the authentication token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Get the current token
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Whether a login token is held
    pub fn is_logged_in(&self) -> bool {
        self.token.is_some()
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Build authorization header value
    fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.auth_header() {
            Some(auth) => request.header(reqwest::header::AUTHORIZATION, auth),
            None => request,
        }
    }

    // ========== Generic verbs ==========

    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = self.url(path);
        debug!(%url, "GET");
        let response = self.authorize(self.client.get(&url)).send().await?;
        Self::handle_response(response).await
    }

    async fn post<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> ClientResult<T> {
        let url = self.url(path);
        debug!(%url, "POST");
        let response = self.authorize(self.client.post(&url).json(body)).send().await?;
        Self::handle_response(response).await
    }

    async fn put<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> ClientResult<T> {
        let url = self.url(path);
        debug!(%url, "PUT");
        let response = self.authorize(self.client.put(&url).json(body)).send().await?;
        Self::handle_response(response).await
    }

    /// PUT with a body, response body discarded
    async fn put_unit<B: Serialize>(&self, path: &str, body: &B) -> ClientResult<()> {
        let url = self.url(path);
        debug!(%url, "PUT");
        let response = self.authorize(self.client.put(&url).json(body)).send().await?;
        Self::check_status(response).await
    }

    /// PUT without a body, response body discarded
    async fn put_empty(&self, path: &str) -> ClientResult<()> {
        let url = self.url(path);
        debug!(%url, "PUT");
        let response = self.authorize(self.client.put(&url)).send().await?;
        Self::check_status(response).await
    }

    /// DELETE, response body discarded
    async fn delete(&self, path: &str) -> ClientResult<()> {
        let url = self.url(path);
        debug!(%url, "DELETE");
        let response = self.authorize(self.client.delete(&url)).send().await?;
        Self::check_status(response).await
    }

    fn status_error(status: StatusCode, text: String) -> ClientError {
        match status {
            StatusCode::UNAUTHORIZED => ClientError::Unauthorized,
            StatusCode::FORBIDDEN => ClientError::Forbidden(text),
            StatusCode::NOT_FOUND => ClientError::NotFound(text),
            StatusCode::BAD_REQUEST => ClientError::BadRequest(text),
            _ => ClientError::Internal(text),
        }
    }

    /// Handle the HTTP response, deserializing the body
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await?;
            return Err(Self::status_error(status, text));
        }
        response.json().await.map_err(Into::into)
    }

    /// Handle the HTTP response, ignoring the body
    async fn check_status(response: reqwest::Response) -> ClientResult<()> {
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await?;
            return Err(Self::status_error(status, text));
        }
        Ok(())
    }

    // ========== Auth API ==========

    /// Login with email and password.
    ///
    /// Only administrator accounts are accepted; the token is retained
    /// for all subsequent requests.
    pub async fn login(&mut self, email: &str, password: &str) -> ClientResult<LoginResponse> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let response: LoginResponse = self.post("/auth/login", &request).await?;
        if response.role != "admin" {
            return Err(ClientError::NotAdmin(response.email));
        }

        self.token = Some(response.token.clone());
        Ok(response)
    }

    /// Get the current admin profile
    pub async fn me(&self) -> ClientResult<AdminProfile> {
        self.get("/auth/me").await
    }

    /// Drop the held token
    pub fn logout(&mut self) {
        self.token = None;
    }

    // ========== Catalog API ==========

    /// List all catalog items (admin view, including hidden items)
    pub async fn list_items(&self) -> ClientResult<Vec<CatalogItem>> {
        self.get("/admin/products").await
    }

    /// Create a catalog item
    pub async fn create_item(&self, payload: &CatalogItemPayload) -> ClientResult<CatalogItem> {
        self.post("/products", payload).await
    }

    /// Update a catalog item
    pub async fn update_item(
        &self,
        id: &str,
        payload: &CatalogItemPayload,
    ) -> ClientResult<CatalogItem> {
        self.put(&format!("/products/{}", id), payload).await
    }

    /// Delete a catalog item
    pub async fn delete_item(&self, id: &str) -> ClientResult<()> {
        self.delete(&format!("/products/{}", id)).await
    }

    // ========== Category API ==========

    /// List all categories, enabled or not
    pub async fn list_categories(&self) -> ClientResult<Vec<Category>> {
        self.get("/categories/all").await
    }

    /// Create a category
    pub async fn create_category(&self, name: &str) -> ClientResult<Category> {
        let payload = CategoryCreate {
            name: name.to_string(),
        };
        self.post("/categories", &payload).await
    }

    /// Enable or disable a category on the storefront
    pub async fn set_category_enabled(&self, id: &str, enabled: bool) -> ClientResult<()> {
        self.put_unit(&format!("/categories/{}", id), &CategoryUpdate { enabled })
            .await
    }

    // ========== Order API ==========

    /// List orders (summaries, newest first)
    pub async fn list_orders(&self) -> ClientResult<Vec<Order>> {
        self.get("/orders").await
    }

    /// Fetch one order with line items and shipping address
    pub async fn get_order(&self, id: &str) -> ClientResult<Order> {
        self.get(&format!("/orders/{}", id)).await
    }

    /// Move an order to a new fulfillment status
    pub async fn update_order_status(&self, id: &str, status: OrderStatus) -> ClientResult<()> {
        self.put_unit(&format!("/orders/{}/status", id), &OrderStatusUpdate { status })
            .await
    }

    // ========== User API ==========

    /// List registered storefront users
    pub async fn list_users(&self) -> ClientResult<Vec<StoreUser>> {
        self.get("/admin/users").await
    }

    /// Toggle a user's blocked flag
    pub async fn toggle_user_block(&self, id: &str) -> ClientResult<()> {
        self.put_empty(&format!("/admin/users/{}/toggle-block", id))
            .await
    }

    // ========== Dashboard API ==========

    /// Aggregate storefront statistics
    pub async fn stats(&self) -> ClientResult<StoreStats> {
        self.get("/admin/stats").await
    }
}
