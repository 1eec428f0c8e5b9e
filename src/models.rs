//! Frontend Models
//!
//! Data structures matching the todo REST resource.

use serde::{Deserialize, Serialize};

/// Todo record as stored by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: u32,
    pub title: String,
    pub user_id: u32,
    pub completed: bool,
}

impl Todo {
    /// Same record with the completion flag flipped
    pub fn toggled(&self) -> Self {
        Self {
            completed: !self.completed,
            ..self.clone()
        }
    }

    /// Same record with a new title
    pub fn renamed(&self, title: &str) -> Self {
        Self {
            title: title.to_string(),
            ..self.clone()
        }
    }
}

/// Payload for creating a todo (the server assigns the id)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTodo {
    pub title: String,
    pub user_id: u32,
    pub completed: bool,
}

impl NewTodo {
    pub fn new(title: &str, user_id: u32) -> Self {
        Self {
            title: title.to_string(),
            user_id,
            completed: false,
        }
    }
}

/// A todo whose create call is still outstanding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTodo {
    pub title: String,
}

/// Which todos the list shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    #[default]
    All,
    Active,
    Completed,
}

impl FilterMode {
    pub const ALL_MODES: [FilterMode; 3] = [FilterMode::All, FilterMode::Active, FilterMode::Completed];

    pub fn label(&self) -> &'static str {
        match self {
            FilterMode::All => "All",
            FilterMode::Active => "Active",
            FilterMode::Completed => "Completed",
        }
    }

    /// Location hash used by the footer links
    pub fn href(&self) -> &'static str {
        match self {
            FilterMode::All => "#/",
            FilterMode::Active => "#/active",
            FilterMode::Completed => "#/completed",
        }
    }

    /// Parse a location hash; anything unknown shows all todos
    pub fn from_hash(hash: &str) -> Self {
        match hash.trim_start_matches('#').trim_start_matches('/') {
            "active" => FilterMode::Active,
            "completed" => FilterMode::Completed,
            _ => FilterMode::All,
        }
    }

    /// Stable selector for the footer link
    pub fn data_cy(&self) -> &'static str {
        match self {
            FilterMode::All => "FilterLinkAll",
            FilterMode::Active => "FilterLinkActive",
            FilterMode::Completed => "FilterLinkCompleted",
        }
    }
}
