//! Shelf
//!
//! The single owned aggregate behind the page: store, form and delete prompt.
//! UI handlers translate DOM events into [`ShelfEvent`]s and dispatch them here;
//! the two image-decode paths use the begin/finish pairs instead.

use log::{debug, warn};

use crate::config::ShelfConfig;
use crate::deletion::DeletionConfirmer;
use crate::error::ShelfResult;
use crate::form::{FormController, FormDraft, PreviewTicket, SubmitStep, SubmitTicket};
use crate::render::{table_view, TableView};
use crate::reorder::{drop_row, ReorderOutcome};
use crate::storage::KeyValueStorage;
use crate::store::ItemStore;

/// Synchronous user actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShelfEvent {
    NameChanged(String),
    DescriptionChanged(String),
    /// Edit button of a row
    Edit(usize),
    /// Delete button of a row
    RequestDelete(usize),
    ConfirmDelete,
    /// Cancel button or click outside the prompt
    CancelDelete,
    /// Row `from` dropped on row `to`
    Drop { from: usize, to: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing changed
    Noop,
    /// Form or prompt state changed, list untouched
    StateChanged,
    /// List mutated and persisted
    ListChanged,
    /// The item at this index was loaded into the form
    EditStarted(usize),
}

#[derive(Debug)]
pub struct Shelf<S> {
    store: ItemStore<S>,
    form: FormController,
    deletion: DeletionConfirmer,
}

impl<S: KeyValueStorage> Shelf<S> {
    pub fn open(storage: S, config: &ShelfConfig) -> Self {
        Self {
            store: ItemStore::open(storage, config.storage_key.clone()),
            form: FormController::new(),
            deletion: DeletionConfirmer::new(),
        }
    }

    pub fn store(&self) -> &ItemStore<S> {
        &self.store
    }

    pub fn form(&self) -> &FormController {
        &self.form
    }

    pub fn deletion(&self) -> &DeletionConfirmer {
        &self.deletion
    }

    pub fn dispatch(&mut self, event: ShelfEvent) -> ShelfResult<Outcome> {
        debug!("Dispatch {:?}", event);
        match event {
            ShelfEvent::NameChanged(name) => {
                self.form.set_name(name);
                Ok(Outcome::StateChanged)
            }
            ShelfEvent::DescriptionChanged(description) => {
                self.form.set_description(description);
                Ok(Outcome::StateChanged)
            }
            ShelfEvent::Edit(index) => {
                self.form.begin_edit(&self.store, index)?;
                Ok(Outcome::EditStarted(index))
            }
            ShelfEvent::RequestDelete(index) => {
                self.deletion.request(index);
                Ok(Outcome::StateChanged)
            }
            ShelfEvent::ConfirmDelete => {
                match self.deletion.confirm(&mut self.store, &mut self.form)? {
                    Some(_) => Ok(Outcome::ListChanged),
                    None => Ok(Outcome::Noop),
                }
            }
            ShelfEvent::CancelDelete => {
                if !self.deletion.is_open() {
                    return Ok(Outcome::Noop);
                }
                self.deletion.cancel();
                Ok(Outcome::StateChanged)
            }
            ShelfEvent::Drop { from, to } => {
                if self.deletion.is_open() {
                    warn!("Ignoring drop {} -> {} while the delete prompt is open", from, to);
                    return Ok(Outcome::Noop);
                }
                match drop_row(&mut self.store, &mut self.form, from, to)? {
                    ReorderOutcome::Moved { .. } => Ok(Outcome::ListChanged),
                    ReorderOutcome::Ignored => Ok(Outcome::Noop),
                }
            }
        }
    }

    pub fn begin_submit(&mut self, draft: FormDraft, now_ms: u64) -> ShelfResult<SubmitStep> {
        self.form.begin_submit(&mut self.store, draft, now_ms)
    }

    pub fn finish_submit(&mut self, ticket: SubmitTicket, data_url: String) -> ShelfResult<usize> {
        self.form.finish_submit(&mut self.store, ticket, data_url)
    }

    pub fn abort_submit(&mut self, ticket: SubmitTicket) {
        self.form.abort_submit(ticket);
    }

    pub fn select_file(&mut self, file_name: Option<&str>) -> Option<PreviewTicket> {
        self.form.select_file(file_name)
    }

    pub fn finish_preview(&mut self, ticket: PreviewTicket, data_url: String) -> bool {
        self.form.finish_preview(ticket, data_url)
    }

    pub fn table_view(&self) -> TableView {
        table_view(self.store.items(), self.form.editing_index())
    }
}
