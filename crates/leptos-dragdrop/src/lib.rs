//! Leptos DragDrop Utilities
//!
//! Native HTML5 drag-and-drop for reorderable rows.
//! `dragstart` tags the drag with the source row index, `drop` on another row
//! reports `(from, to)`. Handlers are plain closures bound per rendered row.

use leptos::prelude::*;
use log::debug;

/// Drag payload type carrying the source index
pub const DRAG_MIME: &str = "text/plain";

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    /// Index of the row being dragged
    pub dragging_read: ReadSignal<Option<usize>>,
    pub dragging_write: WriteSignal<Option<usize>>,
    /// Row currently under the pointer
    pub over_read: ReadSignal<Option<usize>>,
    pub over_write: WriteSignal<Option<usize>>,
}

pub fn create_dnd_signals() -> DndSignals {
    let (dragging_read, dragging_write) = signal(None::<usize>);
    let (over_read, over_write) = signal(None::<usize>);
    DndSignals {
        dragging_read,
        dragging_write,
        over_read,
        over_write,
    }
}

pub fn encode_index_payload(index: usize) -> String {
    index.to_string()
}

/// Parse a drag payload back into a row index
pub fn parse_index_payload(payload: &str) -> Option<usize> {
    payload.trim().parse().ok()
}

/// Source row of a drop: the payload, else the row this page started dragging
pub fn resolve_source(payload: Option<&str>, dragging: Option<usize>) -> Option<usize> {
    payload.and_then(parse_index_payload).or(dragging)
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging_write.set(None);
    dnd.over_write.set(None);
}

/// Tag the drag with the row's current index
pub fn make_on_dragstart(dnd: DndSignals, index: usize) -> impl Fn(web_sys::DragEvent) + Copy + 'static {
    move |ev: web_sys::DragEvent| {
        if let Some(dt) = ev.data_transfer() {
            // `drop` falls back to `dragging_read` when the payload is missing
            if let Err(e) = dt.set_data(DRAG_MIME, &encode_index_payload(index)) {
                debug!("[DND] Could not tag drag of row {}: {:?}", index, e);
            }
            dt.set_effect_allowed("move");
        }
        dnd.dragging_write.set(Some(index));
    }
}

pub fn make_on_dragend(dnd: DndSignals) -> impl Fn(web_sys::DragEvent) + Copy + 'static {
    move |_ev: web_sys::DragEvent| end_drag(&dnd)
}

/// Allow dropping on this row
pub fn make_on_dragover(dnd: DndSignals, index: usize) -> impl Fn(web_sys::DragEvent) + Copy + 'static {
    move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        if let Some(dt) = ev.data_transfer() {
            dt.set_drop_effect("move");
        }
        if dnd.over_read.get_untracked() != Some(index) {
            dnd.over_write.set(Some(index));
        }
    }
}

pub fn make_on_dragleave(dnd: DndSignals, index: usize) -> impl Fn(web_sys::DragEvent) + Copy + 'static {
    move |_ev: web_sys::DragEvent| {
        if dnd.over_read.get_untracked() == Some(index) {
            dnd.over_write.set(None);
        }
    }
}

/// Report `(from, to)` when a row is dropped here. Drops on the source row
/// and drags without a readable index are ignored.
pub fn make_on_drop(
    dnd: DndSignals,
    index: usize,
    on_move: Callback<(usize, usize)>,
) -> impl Fn(web_sys::DragEvent) + Copy + 'static {
    move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        let payload = ev.data_transfer().and_then(|dt| dt.get_data(DRAG_MIME).ok());
        let from = resolve_source(payload.as_deref(), dnd.dragging_read.get_untracked());
        end_drag(&dnd);
        if let Some(from) = from.filter(|from| *from != index) {
            on_move.run((from, index));
        }
    }
}
