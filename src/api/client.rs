//! Request Building and Response Parsing
//!
//! `TodoClient` turns operations into plain `ApiRequest` values and the
//! `parse_*` functions turn a status and body back into models. Neither
//! touches the network, so both are tested without a server.

use crate::error::{ApiError, ApiResult};
use crate::models::{NewTodo, Todo};

// ========================
// Request Types
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

/// An HTTP request as plain data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    /// JSON body, if any
    pub body: Option<String>,
}

// ========================
// Client
// ========================

/// Builds requests against `{base_url}/todos` for one user
#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
    user_id: u32,
}

impl TodoClient {
    pub fn new(base_url: &str, user_id: u32) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            user_id,
        }
    }

    pub fn user_id(&self) -> u32 {
        self.user_id
    }

    pub fn list_request(&self) -> ApiRequest {
        ApiRequest {
            method: Method::Get,
            url: format!("{}/todos?userId={}", self.base_url, self.user_id),
            body: None,
        }
    }

    pub fn create_request(&self, todo: &NewTodo) -> ApiResult<ApiRequest> {
        Ok(ApiRequest {
            method: Method::Post,
            url: format!("{}/todos", self.base_url),
            body: Some(to_json(todo)?),
        })
    }

    pub fn update_request(&self, todo: &Todo) -> ApiResult<ApiRequest> {
        Ok(ApiRequest {
            method: Method::Patch,
            url: format!("{}/todos/{}", self.base_url, todo.id),
            body: Some(to_json(todo)?),
        })
    }

    pub fn delete_request(&self, id: u32) -> ApiRequest {
        ApiRequest {
            method: Method::Delete,
            url: format!("{}/todos/{}", self.base_url, id),
            body: None,
        }
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> ApiResult<String> {
    serde_json::to_string(value).map_err(|e| ApiError::Encode(e.to_string()))
}

// ========================
// Response Parsing
// ========================

fn check_status(status: u16, body: &str) -> ApiResult<()> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ApiError::Status {
            status,
            body: body.to_string(),
        })
    }
}

pub fn parse_todos(status: u16, body: &str) -> ApiResult<Vec<Todo>> {
    check_status(status, body)?;
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

pub fn parse_todo(status: u16, body: &str) -> ApiResult<Todo> {
    check_status(status, body)?;
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Delete answers carry no meaningful body
pub fn parse_empty(status: u16, body: &str) -> ApiResult<()> {
    check_status(status, body)
}
