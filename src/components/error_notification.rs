//! Error Notification Component
//!
//! Banner for the current error; hides itself when there is none.

use leptos::prelude::*;

use crate::controller::use_controller;
use crate::store::TodoStateStoreFields;

#[component]
pub fn ErrorNotification() -> impl IntoView {
    let controller = use_controller();
    let store = controller.store();

    let class = move || {
        if store.error().with(|error| error.is_some()) {
            "notification is-danger is-light has-text-weight-normal"
        } else {
            "notification is-danger is-light has-text-weight-normal hidden"
        }
    };
    let message = move || store.error().get().map(|error| error.to_string()).unwrap_or_default();

    view! {
        <div data-cy="ErrorNotification" class=class>
            <button
                data-cy="HideErrorButton"
                type="button"
                class="delete"
                on:click=move |_| controller.dismiss_error()
            />
            {message}
        </div>
    }
}
