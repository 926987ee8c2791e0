//! Item Shelf Core
//!
//! Layered the same way as the frontend expects it:
//! - item / storage / store: persisted ordered item list
//! - form / reorder / deletion: controllers mutating the store
//! - render: pure projection of the list into table rows
//! - shelf: single owned aggregate dispatching UI events

mod config;
mod error;
mod item;
mod storage;
mod store;
mod form;
mod reorder;
mod deletion;
mod render;
mod shelf;

pub use config::{ShelfConfig, CONFIG_STORAGE_KEY, DEFAULT_STORAGE_KEY};
pub use error::{ShelfError, ShelfResult};
pub use item::{now_millis, Item};
pub use storage::{KeyValueStorage, MemoryStorage};
pub use store::ItemStore;
pub use form::{
    FormController, FormDraft, FormMode, PreviewTicket, SubmitStep, SubmitTicket, ADD_LABEL,
    CURRENT_IMAGE_LABEL, UPDATE_LABEL,
};
pub use reorder::{drop_row, ReorderOutcome};
pub use deletion::DeletionConfirmer;
pub use render::{table_view, RowView, TableView, Thumbnail, NO_ITEMS_MESSAGE, PLACEHOLDER_ICON};
pub use shelf::{Outcome, Shelf, ShelfEvent};
