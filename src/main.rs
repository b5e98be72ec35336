//! Renovation Tracker Frontend Entry Point

mod app;
mod clock;
mod components;
mod config;
mod logger;
mod mobile;
mod page_state;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logger::init();
    mount_to_body(App);
}
