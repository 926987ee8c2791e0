//! Item Form Component
//!
//! Add/edit form with image picker and live preview.

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{info, warn};
use shelf_core::{now_millis, FormDraft, ShelfEvent, SubmitStep};

use crate::context::use_app_context;
use crate::image::{read_as_data_url, selected_file};

#[component]
pub fn ItemForm() -> impl IntoView {
    let ctx = use_app_context();
    let shelf = ctx.shelf;

    let name = Memo::new(move |_| shelf.with(|s| s.form().name().to_string()));
    let description = Memo::new(move |_| shelf.with(|s| s.form().description().to_string()));
    let preview_rev = Memo::new(move |_| shelf.with(|s| s.form().preview_revision()));
    let preview = Memo::new(move |_| {
        preview_rev.track();
        shelf.with_untracked(|s| s.form().preview().map(str::to_string))
    });
    let file_label = Memo::new(move |_| shelf.with(|s| s.form().file_label().to_string()));
    let submit_label = Memo::new(move |_| shelf.with(|s| s.form().submit_label()));
    let submitting = Memo::new(move |_| shelf.with(|s| s.form().is_submitting()));

    // Preview runs on every selection, independent of submit
    let on_file_change = move |_ev: web_sys::Event| {
        let file = ctx.file_input.get_untracked().and_then(|input| selected_file(&input));
        let file_name = file.as_ref().map(|f| f.name());
        let ticket = shelf.try_update(|s| s.select_file(file_name.as_deref())).flatten();
        if let (Some(ticket), Some(file)) = (ticket, file) {
            spawn_local(async move {
                match read_as_data_url(&file).await {
                    Ok(data_url) => shelf.update(|s| {
                        s.finish_preview(ticket, data_url);
                    }),
                    Err(e) => warn!("[FORM] Preview of {} failed: {}", file.name(), e),
                }
            });
        }
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let file = ctx
            .file_input
            .get_untracked()
            .and_then(|input| selected_file(&input))
            .filter(|f| f.size() > 0.0);
        let draft = shelf.with_untracked(|s| FormDraft {
            name: s.form().name().to_string(),
            description: s.form().description().to_string(),
            new_image: file.is_some(),
        });

        match shelf.try_update(|s| s.begin_submit(draft, now_millis())) {
            Some(Ok(SubmitStep::Saved(index))) => {
                info!("[FORM] Saved item at index {}", index);
                ctx.clear_file_input();
            }
            Some(Ok(SubmitStep::Decode(ticket))) => {
                let Some(file) = file else { return };
                spawn_local(async move {
                    match read_as_data_url(&file).await {
                        Ok(data_url) => match shelf.try_update(|s| {
                            let shown = s.form().shows_pending();
                            s.finish_submit(ticket, data_url).map(|index| (index, shown))
                        }) {
                            Some(Ok((index, shown))) => {
                                info!("[FORM] Saved item with image at index {}", index);
                                // Another row may have been loaded meanwhile
                                if shown {
                                    ctx.clear_file_input();
                                }
                            }
                            Some(Err(e)) => warn!("[FORM] Submit failed: {}", e),
                            None => {}
                        },
                        Err(e) => {
                            warn!("[FORM] Could not read {}: {}", file.name(), e);
                            shelf.update(|s| s.abort_submit(ticket));
                        }
                    }
                });
            }
            Some(Err(e)) => warn!("[FORM] Submit rejected: {}", e),
            None => {}
        }
    };

    view! {
        <section class="form-container" node_ref=ctx.form_section>
            <form id="itemForm" on:submit=on_submit>
                <div class="form-group">
                    <label for="name">"Name"</label>
                    <input
                        type="text"
                        id="name"
                        name="name"
                        placeholder="Item name"
                        required
                        prop:value=move || name.get()
                        on:input=move |ev| {
                            ctx.dispatch(ShelfEvent::NameChanged(event_target_value(&ev)));
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="description">"Description"</label>
                    <textarea
                        id="description"
                        name="description"
                        placeholder="Describe the item"
                        required
                        prop:value=move || description.get()
                        on:input=move |ev| {
                            ctx.dispatch(ShelfEvent::DescriptionChanged(event_target_value(&ev)));
                        }
                    ></textarea>
                </div>

                <div class="form-group">
                    <label for="image" class="file-label">"📁 Choose Image"</label>
                    <input
                        type="file"
                        id="image"
                        name="image"
                        accept="image/*"
                        node_ref=ctx.file_input
                        on:change=on_file_change
                    />
                    <span class="file-name">{move || file_label.get()}</span>
                    <div class="image-preview">
                        {move || preview.get().map(|src| view! { <img src=src alt="Preview" /> })}
                    </div>
                </div>

                <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
                    {move || submit_label.get()}
                </button>
            </form>
        </section>
    }
}
