//! Application Configuration
//!
//! The todo API is scoped to one user. Values come from the build
//! environment (`TODOS_USER_ID`, `TODOS_API_URL`); a `userId` query
//! parameter in the page URL overrides the build-time user.

/// Public todo API used when `TODOS_API_URL` is not set at build time
pub const DEFAULT_API_URL: &str = "https://mate.academy/students-api";

/// Runtime configuration for the todo app
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Owner of the todo list. `None` means the app is not set up yet
    /// and must not issue any API calls.
    pub user_id: Option<u32>,
    /// Base URL of the todo REST resource, without trailing slash
    pub api_base_url: String,
}

impl AppConfig {
    pub fn new(user_id: Option<u32>, api_base_url: &str) -> Self {
        Self {
            user_id,
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Read build-time values and the page URL
    pub fn load() -> Self {
        let user_id = page_query_param("userId")
            .as_deref()
            .and_then(parse_user_id)
            .or_else(|| option_env!("TODOS_USER_ID").and_then(parse_user_id));
        let api_base_url = option_env!("TODOS_API_URL").unwrap_or(DEFAULT_API_URL);

        Self::new(user_id, api_base_url)
    }

    pub fn with_user_id(mut self, user_id: Option<u32>) -> Self {
        self.user_id = user_id;
        self
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(None, DEFAULT_API_URL)
    }
}

/// Parse a user id; zero and non-numeric values count as unset
pub fn parse_user_id(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|id| *id != 0)
}

#[cfg(target_arch = "wasm32")]
fn page_query_param(name: &str) -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    web_sys::UrlSearchParams::new_with_str(&search).ok()?.get(name)
}

#[cfg(not(target_arch = "wasm32"))]
fn page_query_param(_name: &str) -> Option<String> {
    None
}
