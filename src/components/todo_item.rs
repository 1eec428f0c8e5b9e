//! Todo Item Component
//!
//! One row of the list: checkbox, title with inline editing, delete button
//! and the busy overlay.

use leptos::html::Input;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::controller::use_controller;
use crate::edit::EditPhase;
use crate::models::Todo;
use crate::store::{find_todo, TodoStateStoreFields};

/// A persisted todo row.
///
/// Double-click the title to edit. Submit or blur commits, Escape cancels.
/// The row follows the store's record for its id, so server updates do not
/// reset an open edit.
#[component]
pub fn TodoItem(todo: Todo) -> impl IntoView {
    let controller = use_controller();
    let store = controller.store();

    let id = todo.id;
    let (edit_text, set_edit_text) = signal(todo.title.clone());
    let record = Memo::new(move |prev: Option<&Todo>| {
        store
            .todos()
            .with(|todos| find_todo(todos, id))
            .or_else(|| prev.cloned())
            .unwrap_or_else(|| todo.clone())
    });
    let (phase, set_phase) = signal(EditPhase::Viewing);
    let input_ref = NodeRef::<Input>::new();

    let busy = move || store.in_flight().with(|set| set.contains(id));
    let completed = move || record.with(|todo| todo.completed);

    let focus_field = move || {
        request_animation_frame(move || {
            if let Some(input) = input_ref.get_untracked() {
                let _ = input.focus();
            }
        });
    };

    Effect::new(move |_| {
        if phase.get() == EditPhase::Editing {
            focus_field();
        }
    });

    // Blur can fire while the row is being removed, so every access tolerates
    // disposed signals
    let commit = move || {
        if set_phase.try_update(|phase| phase.try_commit()) != Some(true) {
            return;
        }
        let (Some(todo), Some(input)) = (record.try_get_untracked(), edit_text.try_get_untracked())
        else {
            return;
        };

        spawn_local(async move {
            let outcome = controller.commit_title(todo, &input).await;
            // Back to Editing on failure, which refocuses the field
            set_phase.try_update(|phase| phase.settle(&outcome));
        });
    };

    let cancel = move || {
        set_phase.update(|phase| phase.cancel());
    };

    let on_toggle = move |ev: web_sys::MouseEvent| {
        // Checked state follows the server response, not the click
        ev.prevent_default();
        let Some(todo) = record.try_get_untracked() else {
            return;
        };
        spawn_local(async move {
            let _ = controller.toggle_todo(todo).await;
        });
    };

    let title_view = move || {
        if phase.with(|phase| phase.shows_field()) {
            view! {
                <form on:submit=move |ev: web_sys::SubmitEvent| {
                    ev.prevent_default();
                    commit();
                }>
                    <input
                        node_ref=input_ref
                        data-cy="TodoTitleField"
                        type="text"
                        class="todo__title-field"
                        placeholder="Empty todo will be deleted"
                        prop:value=move || edit_text.get()
                        on:input=move |ev| set_edit_text.set(event_target_value(&ev))
                        on:blur=move |_| commit()
                        on:keyup=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Escape" {
                                cancel();
                            }
                        }
                    />
                </form>
            }
            .into_any()
        } else {
            view! {
                <span
                    data-cy="TodoTitle"
                    class="todo__title"
                    on:dblclick=move |_| {
                        set_edit_text.set(record.with_untracked(|todo| todo.title.clone()));
                        set_phase.update(|phase| phase.start());
                    }
                >
                    {move || record.with(|todo| todo.title.clone())}
                </span>
                <button
                    type="button"
                    class="todo__remove"
                    data-cy="TodoDelete"
                    on:click=move |_| {
                        spawn_local(async move {
                            let _ = controller.delete_todo(id).await;
                        });
                    }
                >
                    "×"
                </button>
            }
            .into_any()
        }
    };

    view! {
        <div data-cy="Todo" class=move || if completed() { "todo completed" } else { "todo" }>
            <label class="todo__status-label">
                <input
                    data-cy="TodoStatus"
                    type="checkbox"
                    class="todo__status"
                    prop:checked=completed
                    on:click=on_toggle
                />
            </label>

            {title_view}

            <BusyOverlay active=Signal::derive(busy) />
        </div>
    }
}

/// Row for a todo whose create call is still outstanding
#[component]
pub fn PendingTodoItem(title: String) -> impl IntoView {
    view! {
        <div data-cy="Todo" class="todo">
            <label class="todo__status-label">
                <input data-cy="TodoStatus" type="checkbox" class="todo__status" disabled=true />
            </label>
            <span data-cy="TodoTitle" class="todo__title">{title}</span>
            <BusyOverlay active=Signal::stored(true) />
        </div>
    }
}

/// Loader covering a row while it is being saved or deleted
#[component]
fn BusyOverlay(active: Signal<bool>) -> impl IntoView {
    view! {
        <div
            data-cy="TodoLoader"
            class=move || if active.get() { "modal overlay is-active" } else { "modal overlay" }
        >
            <div class="modal-background has-background-white-ter"></div>
            <div class="loader"></div>
        </div>
    }
}
