//! Portfolio Frontend Entry Point

mod app;
mod assets;
mod carousel;
mod components;
mod contact;
mod content;
mod context;
mod error;
mod markdown;
mod models;
mod section;
mod store;
mod theme;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
