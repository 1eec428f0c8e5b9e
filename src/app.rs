//! Todos Frontend App
//!
//! Resolves configuration, wires the store and controller, and lays out
//! header, list, footer and the error banner.

use std::sync::Arc;

use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use tracing::info;

use crate::api::HttpTodoApi;
use crate::components::{ErrorNotification, Footer, Header, TodoList, UserWarning};
use crate::config::AppConfig;
use crate::controller::TodoController;
use crate::models::FilterMode;
use crate::store::{TodoState, TodoStateStoreFields};
use crate::timer::BrowserTimer;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::load();

    match config.user_id {
        Some(user_id) => view! { <TodoApp user_id=user_id api_base_url=config.api_base_url /> }.into_any(),
        None => view! { <UserWarning /> }.into_any(),
    }
}

fn current_hash() -> String {
    window().location().hash().unwrap_or_default()
}

#[component]
fn TodoApp(user_id: u32, api_base_url: String) -> impl IntoView {
    info!(user_id, api = %api_base_url, "Starting todo app");

    let store = Store::new(TodoState {
        filter: FilterMode::from_hash(&current_hash()),
        ..Default::default()
    });
    let api = Arc::new(HttpTodoApi::new(&api_base_url, user_id));
    let controller = TodoController::new(store, api, Arc::new(BrowserTimer), user_id);

    // Provide context to all children
    provide_context(controller);

    // Back/forward navigation between filter links
    let _ = window_event_listener(ev::hashchange, move |_| {
        controller.set_filter(FilterMode::from_hash(&current_hash()));
    });

    // Load todos on mount
    Effect::new(move |_| {
        spawn_local(async move {
            controller.load_todos().await;
        });
    });

    let show_footer = move || {
        store.todos().with(|todos| !todos.is_empty()) || store.pending().with(|pending| pending.is_some())
    };

    view! {
        <div class="todoapp">
            <h1 class="todoapp__title">"todos"</h1>

            <div class="todoapp__content">
                <Header />
                <TodoList />

                <Show when=show_footer>
                    <Footer />
                </Show>
            </div>

            <ErrorNotification />
        </div>
    }
}
