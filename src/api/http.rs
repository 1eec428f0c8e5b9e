//! HTTP Collaborator
//!
//! Executes `TodoClient` requests with `reqwest` (the browser `fetch`
//! backend on wasm32).

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;

use super::client::{self, ApiRequest, Method, TodoClient};
use super::TodoApi;
use crate::error::{ApiError, ApiResult};
use crate::models::{NewTodo, Todo};

#[derive(Debug, Clone)]
pub struct HttpTodoApi {
    client: TodoClient,
    http: reqwest::Client,
}

impl HttpTodoApi {
    pub fn new(base_url: &str, user_id: u32) -> Self {
        Self {
            client: TodoClient::new(base_url, user_id),
            http: reqwest::Client::new(),
        }
    }

    /// Run a request and return the status with the raw body
    async fn send(&self, request: ApiRequest) -> ApiResult<(u16, String)> {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self.http.request(method, &request.url);
        if let Some(body) = request.body {
            builder = builder
                .header(CONTENT_TYPE, "application/json; charset=UTF-8")
                .body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        tracing::debug!(status, url = %request.url, "API response");
        Ok((status, body))
    }
}

#[async_trait(?Send)]
impl TodoApi for HttpTodoApi {
    async fn list(&self) -> ApiResult<Vec<Todo>> {
        let (status, body) = self.send(self.client.list_request()).await?;
        client::parse_todos(status, &body)
    }

    async fn create(&self, todo: &NewTodo) -> ApiResult<Todo> {
        let (status, body) = self.send(self.client.create_request(todo)?).await?;
        client::parse_todo(status, &body)
    }

    async fn update(&self, todo: &Todo) -> ApiResult<Todo> {
        let (status, body) = self.send(self.client.update_request(todo)?).await?;
        client::parse_todo(status, &body)
    }

    async fn delete(&self, id: u32) -> ApiResult<()> {
        let (status, body) = self.send(self.client.delete_request(id)).await?;
        client::parse_empty(status, &body)
    }
}
