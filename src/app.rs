//! Item Shelf App
//!
//! Form on top, reorderable table below, delete prompt as a modal.

use leptos::prelude::*;
use rolling_logger::RollingLogger;
use shelf_core::{Shelf, ShelfConfig};

use crate::components::{ActivityLog, DeleteConfirmModal, ItemForm, ItemTable};
use crate::context::AppContext;
use crate::storage::BrowserStorage;

#[component]
pub fn App(config: ShelfConfig, logger: Option<&'static RollingLogger>) -> impl IntoView {
    let ctx = AppContext::new(Shelf::open(BrowserStorage, &config), logger);
    provide_context(ctx);

    let item_count = move || ctx.shelf.with(|shelf| shelf.store().len());

    view! {
        <div class="container">
            <header class="header">
                <h1>"📦 Item Manager"</h1>
                <p>"Add, edit and drag to reorder your items"</p>
            </header>

            <ItemForm />

            <ItemTable />

            <p class="item-count">{move || format!("{} items", item_count())}</p>

            <ActivityLog />

            <DeleteConfirmModal />
        </div>
    }
}
