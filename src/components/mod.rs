//! UI Components
//!
//! Leptos components for the form, the item table, the delete prompt and the
//! activity log.

mod item_form;
mod item_table;
mod item_row;
mod delete_confirm_modal;
mod activity_log;

pub use item_form::ItemForm;
pub use item_table::ItemTable;
pub use item_row::ItemRow;
pub use delete_confirm_modal::DeleteConfirmModal;
pub use activity_log::ActivityLog;
