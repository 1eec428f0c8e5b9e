//! Header Component
//!
//! New-todo entry field and the toggle-all control.

use leptos::html::Input;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::controller::use_controller;
use crate::store::{all_completed, TodoStateStoreFields};

#[component]
pub fn Header() -> impl IntoView {
    let controller = use_controller();
    let store = controller.store();
    let input_ref = NodeRef::<Input>::new();

    // Focus the entry field whenever it becomes enabled (mount, after a create)
    Effect::new(move |_| {
        if !store.input_disabled().get() {
            request_animation_frame(move || {
                if let Some(input) = input_ref.get_untracked() {
                    let _ = input.focus();
                }
            });
        }
    });

    let has_todos = move || store.todos().with(|todos| !todos.is_empty());
    let toggle_all_class = move || {
        if store.todos().with(|todos| all_completed(todos)) {
            "todoapp__toggle-all active"
        } else {
            "todoapp__toggle-all"
        }
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        spawn_local(async move {
            controller.add_todo().await;
        });
    };

    view! {
        <header class="todoapp__header">
            <Show when=has_todos>
                <button
                    type="button"
                    class=toggle_all_class
                    data-cy="ToggleAllButton"
                    on:click=move |_| {
                        spawn_local(async move {
                            controller.toggle_all().await;
                        });
                    }
                />
            </Show>

            <form on:submit=on_submit>
                <input
                    node_ref=input_ref
                    data-cy="NewTodoField"
                    type="text"
                    class="todoapp__new-todo"
                    placeholder="What needs to be done?"
                    prop:disabled=move || store.input_disabled().get()
                    prop:value=move || store.draft().get()
                    on:input=move |ev| controller.set_draft(event_target_value(&ev))
                />
            </form>
        </header>
    }
}
