//! Item Table Component
//!
//! Rebuilds every row from the shelf's table projection. Rows are recreated
//! on each change, so their drag handlers are bound fresh to current indices.

use leptos::prelude::*;
use log::debug;
use shelf_core::{Outcome, ShelfEvent, TableView, NO_ITEMS_MESSAGE};

use leptos_dragdrop::create_dnd_signals;

use crate::components::ItemRow;
use crate::context::use_app_context;

#[component]
pub fn ItemTable() -> impl IntoView {
    let ctx = use_app_context();
    let dnd = create_dnd_signals();

    // Typing in the form must not rebuild rows, so the projection only
    // re-runs when the list or the edited row changes
    let table_key = Memo::new(move |_| {
        ctx.shelf.with(|s| (s.store().revision(), s.form().editing_index()))
    });
    let table = Memo::new(move |_| {
        table_key.track();
        ctx.shelf.with_untracked(|s| s.table_view())
    });

    let on_move = Callback::new(move |(from, to): (usize, usize)| {
        if let Some(Outcome::ListChanged) = ctx.dispatch(ShelfEvent::Drop { from, to }) {
            debug!("[DND] Row {} dropped on {}", from, to);
        }
    });

    view! {
        <div class="table-container">
            <table class="items-table">
                <thead>
                    <tr>
                        <th></th>
                        <th>"Image"</th>
                        <th>"Name"</th>
                        <th>"Description"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody id="tableBody">
                    {move || match table.get() {
                        TableView::Empty => view! {
                            <tr class="no-data">
                                <td colspan="5">{NO_ITEMS_MESSAGE}</td>
                            </tr>
                        }.into_any(),
                        TableView::Rows(rows) => rows
                            .into_iter()
                            .map(|row| view! { <ItemRow row=row dnd=dnd on_move=on_move /> })
                            .collect_view()
                            .into_any(),
                    }}
                </tbody>
            </table>
        </div>
    }
}
