//! Domain models for images.

use serde::{Deserialize, Serialize};

/// File name given to generated "no image" placeholders.
pub const NO_IMAGE_NAME: &str = "no-image.png";

/// Reference to a stored image.
///
/// The catalogue never reads image bytes; it only passes references
/// between the persistence layer and the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRef {
    /// `None` for images that are not persisted (e.g. generated placeholders)
    pub id: Option<i64>,
    pub name: String,
    pub title: String,
    pub url: String,
    pub width: u32,
    pub height: u32,
}

impl ImageRef {
    pub fn new(id: i64, name: impl Into<String>, url: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: Some(id),
            title: name.clone(),
            name,
            url: url.into(),
            width: 0,
            height: 0,
        }
    }

    /// Whether this reference points at a persisted image.
    pub fn exists(&self) -> bool {
        self.id.is_some() && !self.url.is_empty()
    }

    /// Whether this reference is a generated placeholder.
    pub fn is_placeholder(&self) -> bool {
        self.id.is_none()
    }
}
