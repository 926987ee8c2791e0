//! Reorder Controller
//!
//! Applies a row drop: the dragged item is taken out of its slot and
//! reinserted at the drop row, and the form's editing index follows it.

use log::debug;

use crate::error::ShelfResult;
use crate::form::FormController;
use crate::storage::KeyValueStorage;
use crate::store::ItemStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReorderOutcome {
    Moved { from: usize, to: usize },
    /// Dropped on itself or on a row that no longer exists
    Ignored,
}

pub fn drop_row<S: KeyValueStorage>(
    store: &mut ItemStore<S>,
    form: &mut FormController,
    from: usize,
    to: usize,
) -> ShelfResult<ReorderOutcome> {
    if from == to || from >= store.len() || to >= store.len() {
        return Ok(ReorderOutcome::Ignored);
    }
    store.move_to(from, to)?;
    form.on_moved(from, to);
    debug!("Moved row {} -> {}", from, to);
    Ok(ReorderOutcome::Moved { from, to })
}
