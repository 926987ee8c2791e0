//! Application Context
//!
//! The shelf and the DOM handles its handlers need, provided via Leptos Context API.

use leptos::html;
use leptos::prelude::*;
use log::warn;
use rolling_logger::RollingLogger;
use shelf_core::{Outcome, Shelf, ShelfEvent};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::storage::BrowserStorage;

#[derive(Clone, Copy)]
pub struct AppContext {
    /// Store, form and delete prompt state
    pub shelf: RwSignal<Shelf<BrowserStorage>>,
    /// Form section, scrolled into view when editing starts
    pub form_section: NodeRef<html::Section>,
    /// Image picker, cleared whenever the form resets
    pub file_input: NodeRef<html::Input>,
    /// Installed logger, `None` if another one was already set
    pub logger: Option<&'static RollingLogger>,
}

impl AppContext {
    pub fn new(shelf: Shelf<BrowserStorage>, logger: Option<&'static RollingLogger>) -> Self {
        Self {
            shelf: RwSignal::new(shelf),
            form_section: NodeRef::new(),
            file_input: NodeRef::new(),
            logger,
        }
    }

    /// Dispatch an event, logging failures
    pub fn dispatch(&self, event: ShelfEvent) -> Option<Outcome> {
        match self.shelf.try_update(|shelf| shelf.dispatch(event))? {
            Ok(outcome) => Some(outcome),
            Err(e) => {
                warn!("[SHELF] {}", e);
                None
            }
        }
    }

    /// Load a row into the form and bring the form into view
    pub fn start_edit(&self, index: usize) {
        if let Some(Outcome::EditStarted(_)) = self.dispatch(ShelfEvent::Edit(index)) {
            self.clear_file_input();
            if let Some(section) = self.form_section.get_untracked() {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                section.scroll_into_view_with_scroll_into_view_options(&options);
            }
        }
    }

    /// Confirm the pending delete; clears the picker if the edited item went away
    pub fn confirm_delete(&self) {
        let was_editing = self.shelf.with_untracked(|shelf| shelf.form().editing_index().is_some());
        if let Some(Outcome::ListChanged) = self.dispatch(ShelfEvent::ConfirmDelete) {
            let still_editing = self.shelf.with_untracked(|shelf| shelf.form().editing_index().is_some());
            if was_editing && !still_editing {
                self.clear_file_input();
            }
        }
    }

    pub fn clear_file_input(&self) {
        if let Some(input) = self.file_input.get_untracked() {
            input.set_value("");
        }
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
