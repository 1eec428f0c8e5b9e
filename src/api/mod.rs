//! Todo API
//!
//! The external REST resource the app reads and writes, scoped to one user.

mod client;
mod http;

use async_trait::async_trait;

use crate::error::ApiResult;
use crate::models::{NewTodo, Todo};

pub use client::*;
pub use http::HttpTodoApi;

/// CRUD operations on the user's todos.
///
/// Futures are not `Send`: in the browser they wrap `fetch` promises.
#[async_trait(?Send)]
pub trait TodoApi: Send + Sync {
    /// All todos of the configured user
    async fn list(&self) -> ApiResult<Vec<Todo>>;

    /// Create a todo; the server assigns its id
    async fn create(&self, todo: &NewTodo) -> ApiResult<Todo>;

    /// Replace the stored record with the same id
    async fn update(&self, todo: &Todo) -> ApiResult<Todo>;

    async fn delete(&self, id: u32) -> ApiResult<()>;
}
