//! Deletion Confirmer
//!
//! Two-step delete: `request` opens the prompt, `confirm` removes the item,
//! `cancel` closes the prompt and leaves the list alone.

use log::debug;

use crate::error::ShelfResult;
use crate::form::FormController;
use crate::item::Item;
use crate::storage::KeyValueStorage;
use crate::store::ItemStore;

#[derive(Debug, Clone, Default)]
pub struct DeletionConfirmer {
    pending: Option<usize>,
}

impl DeletionConfirmer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&mut self, index: usize) {
        self.pending = Some(index);
    }

    pub fn pending(&self) -> Option<usize> {
        self.pending
    }

    /// Whether the confirmation prompt is showing
    pub fn is_open(&self) -> bool {
        self.pending.is_some()
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Remove the pending item. The prompt closes even if removal fails.
    pub fn confirm<S: KeyValueStorage>(
        &mut self,
        store: &mut ItemStore<S>,
        form: &mut FormController,
    ) -> ShelfResult<Option<Item>> {
        let Some(index) = self.pending.take() else {
            return Ok(None);
        };
        let removed = store.remove_at(index)?;
        form.on_removed(index);
        debug!("Deleted item {} at index {}", removed.id, index);
        Ok(Some(removed))
    }
}
