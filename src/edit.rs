//! Title Edit Decisions
//!
//! What committing an inline title edit should do, and the row's edit
//! mode around it.

use crate::error::ApiResult;

/// Outcome of committing the edit field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditCommit {
    /// Blank input deletes the todo
    Delete,
    /// Nothing changed; leave edit mode without a call
    Unchanged,
    /// Save the trimmed title
    Rename(String),
}

/// Decide the commit for `input` against the stored title
pub fn commit_edit(stored_title: &str, input: &str) -> EditCommit {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        EditCommit::Delete
    } else if trimmed == stored_title {
        EditCommit::Unchanged
    } else {
        EditCommit::Rename(trimmed.to_string())
    }
}

/// Edit mode of one row
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditPhase {
    #[default]
    Viewing,
    Editing,
    /// Commit sent, waiting for its outcome; the field stays visible
    Committing,
}

impl EditPhase {
    /// Whether the row shows the edit field
    pub fn shows_field(self) -> bool {
        self != EditPhase::Viewing
    }

    /// Enter edit mode from viewing
    pub fn start(&mut self) {
        if *self == EditPhase::Viewing {
            *self = EditPhase::Editing;
        }
    }

    /// Claim the commit. Submit is followed by blur, so only the first
    /// caller gets `true`.
    pub fn try_commit(&mut self) -> bool {
        if *self == EditPhase::Editing {
            *self = EditPhase::Committing;
            true
        } else {
            false
        }
    }

    /// Escape: leave edit mode unless a commit is already out
    pub fn cancel(&mut self) {
        if *self == EditPhase::Editing {
            *self = EditPhase::Viewing;
        }
    }

    /// Apply a commit outcome; a failure keeps the field open
    pub fn settle(&mut self, outcome: &ApiResult<EditCommit>) {
        *self = match outcome {
            Ok(_) => EditPhase::Viewing,
            Err(_) => EditPhase::Editing,
        };
    }
}
