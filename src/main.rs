//! Item Shelf Frontend Entry Point

mod app;
mod components;
mod context;
mod image;
mod logging;
mod storage;

use app::App;
use leptos::prelude::*;
use log::warn;
use shelf_core::{ShelfConfig, CONFIG_STORAGE_KEY};

use crate::storage::BrowserStorage;

fn main() {
    console_error_panic_hook::set_once();
    let loaded = ShelfConfig::load(&BrowserStorage);
    let config = loaded.as_ref().cloned().unwrap_or_default();
    let logger = logging::init(&config);
    if let Err(e) = loaded {
        warn!("Ignoring '{}', using defaults: {}", CONFIG_STORAGE_KEY, e);
    }
    mount_to_body(move || view! { <App config=config logger=logger /> });
}
