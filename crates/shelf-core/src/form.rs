//! Form Controller
//!
//! Holds the add/edit form state and turns submits into store writes.
//!
//! Submitting with a new image file is split in two: `begin_submit` captures
//! the fields and hands out a [`SubmitTicket`], the caller decodes the file,
//! then `finish_submit` builds the item. Only one submit may be in flight.
//! Its target row is captured at submit time and follows the item through
//! moves and deletions, so editing another row meanwhile is safe.
//! Preview decodes are tagged with a [`PreviewTicket`] and only the latest
//! one is shown.

use log::debug;

use crate::error::{ShelfError, ShelfResult};
use crate::item::Item;
use crate::storage::KeyValueStorage;
use crate::store::ItemStore;

pub const ADD_LABEL: &str = "✨ Add Item";
pub const UPDATE_LABEL: &str = "🔄 Update Item";
/// File label shown while an item's stored image is previewed
pub const CURRENT_IMAGE_LABEL: &str = "Current image";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Idle,
    /// Index of the item loaded into the form
    Editing(usize),
}

/// Field values read from the form on submit
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormDraft {
    pub name: String,
    pub description: String,
    /// Whether a non-empty image file is selected
    pub new_image: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewTicket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitTicket(u64);

/// Result of starting a submit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitStep {
    /// Item stored at this index, form reset
    Saved(usize),
    /// Decode the selected file, then call `finish_submit`
    Decode(SubmitTicket),
}

#[derive(Debug, Clone)]
struct PendingSubmit {
    ticket: SubmitTicket,
    /// Row to replace, `None` to append
    target: Option<usize>,
    /// `load_seq` when the submit started
    load_seq: u64,
    id: u64,
    name: String,
    description: String,
}

#[derive(Debug, Clone, Default)]
pub struct FormController {
    mode: FormMode,
    name: String,
    description: String,
    preview: Option<String>,
    /// Bumped whenever `preview` changes
    preview_rev: u64,
    file_label: String,
    preview_seq: u64,
    /// Bumped whenever the form is loaded or cleared
    load_seq: u64,
    submit_seq: u64,
    pending: Option<PendingSubmit>,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn editing_index(&self) -> Option<usize> {
        match self.mode {
            FormMode::Editing(index) => Some(index),
            FormMode::Idle => None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Data URL currently shown under the file picker
    pub fn preview(&self) -> Option<&str> {
        self.preview.as_deref()
    }

    pub fn preview_revision(&self) -> u64 {
        self.preview_rev
    }

    pub fn file_label(&self) -> &str {
        &self.file_label
    }

    pub fn submit_label(&self) -> &'static str {
        match self.mode {
            FormMode::Idle => ADD_LABEL,
            FormMode::Editing(_) => UPDATE_LABEL,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.pending.is_some()
    }

    /// Whether the form still shows the in-flight submit, i.e. nothing was
    /// loaded or cleared since it started
    pub fn shows_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|p| p.load_seq == self.load_seq)
    }

    /// Load `items[index]` into the form
    pub fn begin_edit<S: KeyValueStorage>(
        &mut self,
        store: &ItemStore<S>,
        index: usize,
    ) -> ShelfResult<()> {
        let item = store
            .get(index)
            .ok_or(ShelfError::IndexOutOfRange { index, len: store.len() })?;
        self.mode = FormMode::Editing(index);
        self.name = item.name.clone();
        self.description = item.description.clone();
        self.preview_seq += 1;
        self.load_seq += 1;
        match &item.image {
            Some(image) => {
                self.set_preview(Some(image.clone()));
                self.file_label = CURRENT_IMAGE_LABEL.to_string();
            }
            None => {
                self.set_preview(None);
                self.file_label.clear();
            }
        }
        debug!("Editing item {} at index {}", item.id, index);
        Ok(())
    }

    /// Clear every field and return to idle. An in-flight submit is kept.
    pub fn reset(&mut self) {
        self.mode = FormMode::Idle;
        self.name.clear();
        self.description.clear();
        self.set_preview(None);
        self.file_label.clear();
        self.preview_seq += 1;
        self.load_seq += 1;
    }

    /// A file was picked (`Some(file name)`) or the selection was emptied.
    /// Returns the ticket the decoded preview must be delivered with.
    pub fn select_file(&mut self, file_name: Option<&str>) -> Option<PreviewTicket> {
        self.preview_seq += 1;
        match file_name {
            Some(name) => {
                self.file_label = name.to_string();
                Some(PreviewTicket(self.preview_seq))
            }
            None => {
                self.file_label.clear();
                self.set_preview(None);
                None
            }
        }
    }

    /// Show a decoded preview unless a newer selection superseded it
    pub fn finish_preview(&mut self, ticket: PreviewTicket, data_url: String) -> bool {
        if ticket.0 != self.preview_seq {
            debug!("Dropping stale preview {:?}", ticket);
            return false;
        }
        self.set_preview(Some(data_url));
        true
    }

    pub fn begin_submit<S: KeyValueStorage>(
        &mut self,
        store: &mut ItemStore<S>,
        draft: FormDraft,
        now_ms: u64,
    ) -> ShelfResult<SubmitStep> {
        if self.pending.is_some() {
            return Err(ShelfError::SubmitInFlight);
        }
        if draft.name.is_empty() {
            return Err(ShelfError::MissingField("name"));
        }
        if draft.description.is_empty() {
            return Err(ShelfError::MissingField("description"));
        }

        let target = self.editing_index();
        let edited = match target {
            Some(index) => Some(
                store
                    .get(index)
                    .ok_or(ShelfError::IndexOutOfRange { index, len: store.len() })?,
            ),
            None => None,
        };
        let id = match edited {
            Some(item) => item.id,
            None => store.next_id(now_ms),
        };

        if draft.new_image {
            self.submit_seq += 1;
            let ticket = SubmitTicket(self.submit_seq);
            self.pending = Some(PendingSubmit {
                ticket,
                target,
                load_seq: self.load_seq,
                id,
                name: draft.name,
                description: draft.description,
            });
            return Ok(SubmitStep::Decode(ticket));
        }

        let image = edited.and_then(|item| item.image.clone());
        let item = Item::new(id, draft.name, draft.description).with_image(image);
        let index = Self::write(store, target, item)?;
        self.reset();
        Ok(SubmitStep::Saved(index))
    }

    /// Complete a submit once its image is decoded
    pub fn finish_submit<S: KeyValueStorage>(
        &mut self,
        store: &mut ItemStore<S>,
        ticket: SubmitTicket,
        data_url: String,
    ) -> ShelfResult<usize> {
        let pending = match self.pending.take() {
            Some(pending) if pending.ticket == ticket => pending,
            other => {
                self.pending = other;
                return Err(ShelfError::StaleTicket);
            }
        };
        let item = Item::new(pending.id, pending.name, pending.description).with_image(Some(data_url));
        let index = Self::write(store, pending.target, item)?;
        // Leave a row the user loaded while decoding alone
        if pending.load_seq == self.load_seq {
            self.reset();
        }
        Ok(index)
    }

    /// Drop a submit whose decode failed; the form keeps its fields
    pub fn abort_submit(&mut self, ticket: SubmitTicket) {
        if self.pending.as_ref().is_some_and(|p| p.ticket == ticket) {
            self.pending = None;
        }
    }

    /// Keep the editing index and the pending target on the same item
    /// after `store.remove_at(index)`
    pub fn on_removed(&mut self, index: usize) {
        if let Some(pending) = self.pending.as_mut() {
            pending.target = match pending.target {
                // Deleted while decoding, the result is appended
                Some(target) if target == index => None,
                Some(target) if index < target => Some(target - 1),
                other => other,
            };
        }
        if let FormMode::Editing(editing) = self.mode {
            if editing == index {
                self.reset();
            } else if index < editing {
                self.mode = FormMode::Editing(editing - 1);
            }
        }
    }

    /// Keep the editing index and the pending target on the same item
    /// after `store.move_to(from, to)`
    pub fn on_moved(&mut self, from: usize, to: usize) {
        if let Some(pending) = self.pending.as_mut() {
            pending.target = pending.target.map(|target| moved_index(target, from, to));
        }
        if let FormMode::Editing(editing) = self.mode {
            self.mode = FormMode::Editing(moved_index(editing, from, to));
        }
    }

    fn set_preview(&mut self, preview: Option<String>) {
        self.preview = preview;
        self.preview_rev += 1;
    }

    fn write<S: KeyValueStorage>(
        store: &mut ItemStore<S>,
        target: Option<usize>,
        item: Item,
    ) -> ShelfResult<usize> {
        let id = item.id;
        let index = match target {
            Some(index) => {
                store.replace_at(index, item)?;
                index
            }
            None => store.insert(item)?,
        };
        debug!("Stored item {} at index {}", id, index);
        Ok(index)
    }
}

/// Where the item at `index` ends up after moving `from` to `to`
fn moved_index(index: usize, from: usize, to: usize) -> usize {
    if index == from {
        to
    } else if from < index && index <= to {
        index - 1
    } else if to <= index && index < from {
        index + 1
    } else {
        index
    }
}
