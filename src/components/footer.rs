//! Footer Component
//!
//! Remaining count, filter links and "clear completed".

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::controller::use_controller;
use crate::models::FilterMode;
use crate::store::{has_completed, items_left_label, TodoStateStoreFields};

#[component]
pub fn Footer() -> impl IntoView {
    let controller = use_controller();
    let store = controller.store();

    let items_left = move || store.todos().with(|todos| items_left_label(todos));
    let nothing_completed = move || store.todos().with(|todos| !has_completed(todos));

    view! {
        <footer class="todoapp__footer" data-cy="Footer">
            <span class="todo-count" data-cy="TodosCounter">{items_left}</span>

            <nav class="filter" data-cy="Filter">
                {FilterMode::ALL_MODES
                    .into_iter()
                    .map(|mode| {
                        let is_selected = move || store.filter().get() == mode;
                        view! {
                            <a
                                href=mode.href()
                                class=move || if is_selected() { "filter__link selected" } else { "filter__link" }
                                data-cy=mode.data_cy()
                                on:click=move |_| controller.set_filter(mode)
                            >
                                {mode.label()}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>

            <button
                type="button"
                class="todoapp__clear-completed"
                data-cy="ClearCompletedButton"
                prop:disabled=nothing_completed
                on:click=move |_| {
                    spawn_local(async move {
                        controller.clear_completed().await;
                    });
                }
            >
                "Clear completed"
            </button>
        </footer>
    }
}
