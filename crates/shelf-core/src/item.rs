//! Item Entity

use serde::{Deserialize, Serialize};

/// One row of the shelf.
///
/// The id is the creation timestamp in milliseconds and survives edits.
/// `image` holds a data URL, serialized as `null` when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: u64,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
}

impl Item {
    pub fn new(id: u64, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            image: None,
        }
    }

    pub fn with_image(mut self, image: Option<String>) -> Self {
        self.image = image;
        self
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }
}

/// Current wall-clock time in milliseconds since the epoch
pub fn now_millis() -> u64 {
    u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or(0)
}
