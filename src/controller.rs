//! Todo Controller
//!
//! Every user intent goes through here: the controller calls the API and
//! folds results and failures back into the store. Mutations are
//! replace-by-id / remove-by-id writes, so concurrent calls may settle in
//! any order.

use std::sync::Arc;

use futures::future::join_all;
use leptos::prelude::*;
use tracing::{debug, info, warn};

use crate::api::TodoApi;
use crate::edit::{commit_edit, EditCommit};
use crate::error::{ApiResult, TodoError};
use crate::models::{FilterMode, NewTodo, PendingTodo, Todo};
use crate::store::{
    completed_ids, store_begin_op, store_push_todo, store_remove_todo, store_replace_todo,
    store_settle_op, toggle_all_targets, TodoStateStoreFields, TodoStore,
};
use crate::timer::{DismissTimer, ERROR_DELAY_MS};

/// Store plus the collaborators it needs, shared through context
#[derive(Clone, Copy)]
pub struct TodoController {
    store: TodoStore,
    api: StoredValue<Arc<dyn TodoApi>>,
    timer: StoredValue<Arc<dyn DismissTimer>>,
    user_id: u32,
}

/// Get the controller from context
pub fn use_controller() -> TodoController {
    expect_context::<TodoController>()
}

impl TodoController {
    pub fn new(
        store: TodoStore,
        api: Arc<dyn TodoApi>,
        timer: Arc<dyn DismissTimer>,
        user_id: u32,
    ) -> Self {
        Self {
            store,
            api: StoredValue::new(api),
            timer: StoredValue::new(timer),
            user_id,
        }
    }

    pub fn store(&self) -> TodoStore {
        self.store
    }

    fn api(&self) -> Arc<dyn TodoApi> {
        self.api.get_value()
    }

    // ========================
    // Local UI State
    // ========================

    pub fn set_draft(&self, text: String) {
        self.store.draft().set(text);
    }

    pub fn set_filter(&self, mode: FilterMode) {
        self.store.filter().set(mode);
    }

    /// Show `error` and schedule its dismissal.
    ///
    /// A later error or an explicit dismissal invalidates the pending one.
    pub fn show_error(&self, error: TodoError) {
        let generation = self.bump_error_generation();
        self.store.error().set(Some(error));

        let store = self.store;
        self.timer.get_value().schedule(
            ERROR_DELAY_MS,
            Box::new(move || {
                if store.error_generation().try_get_untracked() == Some(generation) {
                    store.error().set(None);
                }
            }),
        );
    }

    pub fn dismiss_error(&self) {
        self.bump_error_generation();
        self.store.error().set(None);
    }

    fn bump_error_generation(&self) -> u64 {
        let field = self.store.error_generation();
        let mut generation = field.write();
        *generation += 1;
        *generation
    }

    // ========================
    // API Operations
    // ========================

    /// Initial load of the user's todos
    pub async fn load_todos(&self) {
        match self.api().list().await {
            Ok(todos) => {
                info!(count = todos.len(), "Loaded todos");
                self.store.todos().set(todos);
            }
            Err(err) => {
                warn!(error = %err, "Loading todos failed");
                self.show_error(TodoError::LoadTodos);
            }
        }
    }

    /// Create a todo from the draft text.
    ///
    /// The draft is cleared only on success so a failed create can be
    /// retried without retyping.
    pub async fn add_todo(&self) {
        // One create at a time; a second submit can land before the field disables
        if self.store.pending().with_untracked(|pending| pending.is_some()) {
            debug!("Create already pending, ignoring submit");
            return;
        }

        let title = self.store.draft().get_untracked().trim().to_string();
        if title.is_empty() {
            self.show_error(TodoError::EmptyTitle);
            return;
        }

        self.store.input_disabled().set(true);
        self.store.pending().set(Some(PendingTodo { title: title.clone() }));
        debug!(title = %title, "Creating todo");

        match self.api().create(&NewTodo::new(&title, self.user_id)).await {
            Ok(todo) => {
                debug!(id = todo.id, "Created todo");
                store_push_todo(&self.store, todo);
                self.store.draft().set(String::new());
            }
            Err(err) => {
                warn!(error = %err, "Creating todo failed");
                self.show_error(TodoError::AddTodo);
            }
        }

        self.store.pending().set(None);
        self.store.input_disabled().set(false);
    }

    pub async fn delete_todo(&self, id: u32) -> ApiResult<()> {
        store_begin_op(&self.store, id);
        debug!(id, "Deleting todo");

        let result = self.api().delete(id).await;
        match &result {
            Ok(()) => store_remove_todo(&self.store, id),
            Err(err) => {
                warn!(id, error = %err, "Deleting todo failed");
                self.show_error(TodoError::DeleteTodo);
            }
        }

        store_settle_op(&self.store, id);
        result
    }

    /// Delete every id concurrently; each one succeeds or fails on its own
    pub async fn delete_many(&self, ids: Vec<u32>) {
        let total = ids.len();
        let results = join_all(ids.into_iter().map(|id| self.delete_todo(id))).await;

        let failed = results.iter().filter(|result| result.is_err()).count();
        if failed > 0 {
            warn!(failed, total, "Some deletions failed");
        }
    }

    pub async fn clear_completed(&self) {
        let ids = self.store.todos().with_untracked(|todos| completed_ids(todos));
        self.delete_many(ids).await;
    }

    /// Flip completion of the given snapshot
    pub async fn toggle_todo(&self, todo: Todo) -> ApiResult<()> {
        let id = todo.id;
        store_begin_op(&self.store, id);
        debug!(id, completed = !todo.completed, "Toggling todo");

        let result = self.api().update(&todo.toggled()).await;
        match &result {
            Ok(updated) => store_replace_todo(&self.store, updated.clone()),
            Err(err) => {
                warn!(id, error = %err, "Toggling todo failed");
                self.show_error(TodoError::UpdateTodo);
            }
        }

        store_settle_op(&self.store, id);
        result.map(|_| ())
    }

    /// Complete every active todo, or reopen all when none is active
    pub async fn toggle_all(&self) {
        let targets = self.store.todos().with_untracked(|todos| toggle_all_targets(todos));
        let total = targets.len();
        let results = join_all(targets.into_iter().map(|todo| self.toggle_todo(todo))).await;

        let failed = results.iter().filter(|result| result.is_err()).count();
        if failed > 0 {
            warn!(failed, total, "Some toggles failed");
        }
    }

    /// Carry out an inline edit of `todo`: blank input deletes it, an
    /// unchanged title makes no call, anything else renames it.
    ///
    /// Returns the decision that was applied.
    pub async fn commit_title(&self, todo: Todo, input: &str) -> ApiResult<EditCommit> {
        let decision = commit_edit(&todo.title, input);
        match &decision {
            EditCommit::Unchanged => {}
            EditCommit::Delete => self.delete_todo(todo.id).await?,
            EditCommit::Rename(title) => self.rename_todo(todo, title).await?,
        }
        Ok(decision)
    }

    /// Save a new title. The error is returned so the edit field can stay
    /// open.
    pub async fn rename_todo(&self, todo: Todo, title: &str) -> ApiResult<()> {
        let id = todo.id;
        store_begin_op(&self.store, id);
        debug!(id, "Renaming todo");

        let result = self.api().update(&todo.renamed(title.trim())).await;
        match &result {
            Ok(updated) => store_replace_todo(&self.store, updated.clone()),
            Err(err) => {
                warn!(id, error = %err, "Renaming todo failed");
                self.show_error(TodoError::UpdateTodo);
            }
        }

        store_settle_op(&self.store, id);
        result.map(|_| ())
    }
}
