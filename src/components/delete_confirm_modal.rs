//! Delete Confirm Modal Component
//!
//! Confirmation prompt for the pending delete. Clicking the backdrop cancels.

use leptos::prelude::*;
use shelf_core::ShelfEvent;

use crate::context::use_app_context;

#[component]
pub fn DeleteConfirmModal() -> impl IntoView {
    let ctx = use_app_context();
    let is_open = Memo::new(move |_| ctx.shelf.with(|s| s.deletion().is_open()));
    let pending_name = Memo::new(move |_| {
        ctx.shelf.with(|s| {
            s.deletion()
                .pending()
                .and_then(|index| s.store().get(index))
                .map(|item| item.name.clone())
                .unwrap_or_default()
        })
    });

    view! {
        <Show when=move || is_open.get()>
            <div
                id="deleteModal"
                class="modal"
                on:click=move |_| {
                    ctx.dispatch(ShelfEvent::CancelDelete);
                }
            >
                <div class="modal-content" on:click=move |ev| ev.stop_propagation()>
                    <h3>"🗑️ Delete Item"</h3>
                    <p>
                        "Are you sure you want to delete "
                        <strong>{move || pending_name.get()}</strong>
                        "? This cannot be undone."
                    </p>
                    <div class="modal-buttons">
                        <button id="confirmDelete" class="btn btn-danger" on:click=move |_| ctx.confirm_delete()>
                            "Confirm"
                        </button>
                        <button
                            class="btn btn-secondary"
                            on:click=move |_| {
                                ctx.dispatch(ShelfEvent::CancelDelete);
                            }
                        >
                            "Cancel"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
