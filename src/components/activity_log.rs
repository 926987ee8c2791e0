//! Activity Log Component
//!
//! Collapsible list of the most recent log records, newest first.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn ActivityLog() -> impl IntoView {
    let ctx = use_app_context();
    let (lines, set_lines) = signal(Vec::<String>::new());

    // The ring buffer is not reactive, so it is read on demand
    let refresh = move |_: web_sys::MouseEvent| {
        if let Some(logger) = ctx.logger {
            set_lines.set(logger.recent());
        }
    };

    view! {
        <Show when=move || ctx.logger.is_some()>
            <details class="activity-log">
                <summary on:click=refresh>"Recent activity"</summary>
                <button type="button" class="btn btn-secondary btn-small" on:click=refresh>
                    "Refresh"
                </button>
                <ul class="activity-lines">
                    {move || {
                        lines
                            .get()
                            .into_iter()
                            .rev()
                            .map(|line| view! { <li>{line}</li> })
                            .collect_view()
                    }}
                </ul>
            </details>
        </Show>
    }
}
