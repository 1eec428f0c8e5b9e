#![allow(warnings)]
//! Todos Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod controller;
mod edit;
mod error;
mod filter;
mod models;
mod store;
mod timer;

use app::App;
use leptos::prelude::*;
use tracing::Level;

fn main() {
    let level = if cfg!(debug_assertions) { Level::DEBUG } else { Level::INFO };
    let logs = rolling_logger::init(level);

    // Replay recent log lines ahead of the panic message
    std::panic::set_hook(Box::new(move |info| {
        logs.print_recent();
        console_error_panic_hook::hook(info);
    }));

    mount_to_body(App);
}
