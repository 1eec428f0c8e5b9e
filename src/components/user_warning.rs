//! User Warning Component
//!
//! Shown instead of the app until a user id is configured.

use leptos::prelude::*;

#[component]
pub fn UserWarning() -> impl IntoView {
    view! {
        <section class="section">
            <p class="box is-size-3">
                "Please set your "
                <b>"userId"</b>
                " to use the todo list."
            </p>
            <p class="box is-size-5">
                "Build with "
                <code>"TODOS_USER_ID=<your id> trunk serve"</code>
                " or open the app with "
                <code>"?userId=<your id>"</code>
                " in the URL."
            </p>
        </section>
    }
}
