//! Item Row Component
//!
//! One draggable table row with Edit/Delete controls bound to its index.

use leptos::prelude::*;
use shelf_core::{RowView, ShelfEvent, Thumbnail, PLACEHOLDER_ICON};

use leptos_dragdrop::*;

use crate::context::use_app_context;

#[component]
pub fn ItemRow(
    row: RowView,
    dnd: DndSignals,
    on_move: Callback<(usize, usize)>,
) -> impl IntoView {
    let ctx = use_app_context();
    let index = row.index;
    let editing = row.editing;

    let row_class = move || {
        let dragging = dnd.dragging_read.get();
        let mut c = String::from("table-row");
        if editing { c.push_str(" editing"); }
        if dragging == Some(index) { c.push_str(" dragging"); }
        if dragging.is_some() && dragging != Some(index) && dnd.over_read.get() == Some(index) {
            c.push_str(" drag-over");
        }
        c
    };

    let thumbnail = match row.thumbnail {
        Thumbnail::Image(src) => view! {
            <img src=src alt=row.name.clone() class="table-img" />
        }.into_any(),
        Thumbnail::Placeholder => view! {
            <div class="thumb-placeholder">{PLACEHOLDER_ICON}</div>
        }.into_any(),
    };

    view! {
        <tr
            class=row_class
            draggable="true"
            data-index=index.to_string()
            on:dragstart=make_on_dragstart(dnd, index)
            on:dragend=make_on_dragend(dnd)
            on:dragover=make_on_dragover(dnd, index)
            on:dragleave=make_on_dragleave(dnd, index)
            on:drop=make_on_drop(dnd, index, on_move)
        >
            <td class="drag-handle">"⋮⋮"</td>
            <td>{thumbnail}</td>
            <td><strong>{row.name}</strong></td>
            <td>{row.description}</td>
            <td>
                <div class="action-buttons">
                    <button class="btn btn-success btn-small" on:click=move |_| ctx.start_edit(index)>
                        "✏️ Edit"
                    </button>
                    <button
                        class="btn btn-danger btn-small"
                        on:click=move |_| {
                            ctx.dispatch(ShelfEvent::RequestDelete(index));
                        }
                    >
                        "🗑️ Delete"
                    </button>
                </div>
            </td>
        </tr>
    }
}
