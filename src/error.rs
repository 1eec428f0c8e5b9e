//! Error Types
//!
//! `ApiError` covers collaborator failures, `TodoError` is what the
//! error banner shows.

use thiserror::Error;

/// Failure of a call to the todo REST resource
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response
    #[error("transport error: {0}")]
    Transport(String),

    /// The server answered with a non-success status
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body was not the expected JSON
    #[error("invalid response body: {0}")]
    Decode(String),

    /// The request payload could not be serialized
    #[error("invalid request body: {0}")]
    Encode(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// User-visible failures; `Display` is the banner text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TodoError {
    #[error("Unable to load todos")]
    LoadTodos,
    #[error("Title should not be empty")]
    EmptyTitle,
    #[error("Unable to add a todo")]
    AddTodo,
    #[error("Unable to delete a todo")]
    DeleteTodo,
    #[error("Unable to update a todo")]
    UpdateTodo,
}
