//! Todo List Component
//!
//! Filtered todos plus the row of a todo being created.

use leptos::prelude::*;

use crate::components::{PendingTodoItem, TodoItem};
use crate::controller::use_controller;
use crate::filter::filter_todos;
use crate::store::TodoStateStoreFields;

#[component]
pub fn TodoList() -> impl IntoView {
    let store = use_controller().store();

    let visible = Memo::new(move |_| {
        let mode = store.filter().get();
        store.todos().with(|todos| filter_todos(todos, mode))
    });

    view! {
        <section class="todoapp__main" data-cy="TodoList">
            <For
                each=move || visible.get()
                key=|todo| todo.id
                children=move |todo| view! { <TodoItem todo=todo /> }
            />

            {move || {
                store
                    .pending()
                    .get()
                    .map(|pending| view! { <PendingTodoItem title=pending.title /> })
            }}
        </section>
    }
}
