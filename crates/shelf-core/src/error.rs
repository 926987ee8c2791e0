//! Error types shared by every shelf operation.

use thiserror::Error;

/// Common result type for shelf operations
pub type ShelfResult<T> = Result<T, ShelfError>;

#[derive(Debug, Error)]
pub enum ShelfError {
    /// The key-value backend refused a read or write
    #[error("storage error: {0}")]
    Storage(String),

    #[error("failed to serialize items: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("index {index} out of range for {len} items")]
    IndexOutOfRange { index: usize, len: usize },

    /// A required form field was empty
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("an image is still being decoded for the previous submit")]
    SubmitInFlight,

    /// A decode finished for a submit that is no longer pending
    #[error("stale decode result")]
    StaleTicket,

    #[error("image decode failed: {0}")]
    Decode(String),

    #[error("invalid config: {0}")]
    Config(String),
}
