//! DevBoard Frontend Entry Point

mod app;
mod board;
mod commands;
mod components;
mod config;
mod context;
mod error;
mod forms;
mod loader;
mod logging;
mod models;
mod moves;
mod preferences;
mod sidebar;
mod store;

use app::App;
use leptos::prelude::*;

use preferences::{BrowserStore, Theme};

fn main() {
    logging::init();
    // Stored theme goes on before the first render
    Theme::load(&BrowserStore).apply();
    mount_to_body(App);
}
