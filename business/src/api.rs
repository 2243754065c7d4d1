//! REST client for the back office API.
//!
//! Every call is async and `Send`, so pages can hand it to `tokio::spawn`.
//! List endpoints answer `{ "items": [...], "total": n }`.

use log::{debug, warn};
use reqwest::{Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::BusinessConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::{Client, ListResponse, NewTicketMessage, Ticket, TicketMessage, User};

/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    api_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(config: &BusinessConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_url: config.api_url(),
            token: config.api_token().map(str::to_string),
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.api_url)
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        let request = self.http.request(method, url);
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder, url: &str) -> ApiResult<reqwest::Response> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!("API returned status {status} for {url}");
            return Err(ApiError::Status {
                status,
                url: url.to_string(),
            });
        }
        Ok(response)
    }

    async fn fetch_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        url: &str,
    ) -> ApiResult<T> {
        let response = self.send(request, url).await?;
        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|source| ApiError::Decode {
            url: url.to_string(),
            source,
        })
    }

    async fn get_list<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> ApiResult<Vec<T>> {
        let url = self.url(path);
        debug!("GET {url}");
        let request = self.request(Method::GET, &url).query(query);
        let list: ListResponse<T> = self.fetch_json(request, &url).await?;
        Ok(list.items)
    }

    async fn delete(&self, path: &str) -> ApiResult<()> {
        let url = self.url(path);
        debug!("DELETE {url}");
        let request = self.request(Method::DELETE, &url);
        self.send(request, &url).await?;
        Ok(())
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let url = self.url(path);
        debug!("POST {url}");
        let request = self.request(Method::POST, &url).json(body);
        self.fetch_json(request, &url).await
    }

    /// GET `/api/clients`, with `?search=` when a non-empty term is given.
    pub async fn list_clients(&self, search: Option<&str>) -> ApiResult<Vec<Client>> {
        match search.filter(|term| !term.is_empty()) {
            Some(term) => self.get_list("clients", &[("search", term)]).await,
            None => self.get_list("clients", &[]).await,
        }
    }

    /// DELETE `/api/clients/{id}`
    pub async fn delete_client(&self, id: u64) -> ApiResult<()> {
        self.delete(&format!("clients/{id}")).await
    }

    /// GET `/api/users`
    pub async fn list_users(&self) -> ApiResult<Vec<User>> {
        self.get_list("users", &[]).await
    }

    /// DELETE `/api/users/{id}`
    pub async fn delete_user(&self, id: u64) -> ApiResult<()> {
        self.delete(&format!("users/{id}")).await
    }

    /// GET `/api/tickets`
    pub async fn list_tickets(&self) -> ApiResult<Vec<Ticket>> {
        self.get_list("tickets", &[]).await
    }

    /// GET `/api/tickets/{id}/messages`
    pub async fn list_ticket_messages(&self, ticket_id: u64) -> ApiResult<Vec<TicketMessage>> {
        self.get_list(&format!("tickets/{ticket_id}/messages"), &[]).await
    }

    /// POST `/api/tickets/{id}/messages`
    /// Body: `{ "body": "..." }`
    pub async fn post_ticket_message(
        &self,
        ticket_id: u64,
        body: &str,
    ) -> ApiResult<TicketMessage> {
        let payload = NewTicketMessage {
            body: body.to_string(),
        };
        self.post_json(&format!("tickets/{ticket_id}/messages"), &payload).await
    }
}
