//! Placeholder image collaborator.

use super::images_model::{ImageRef, NO_IMAGE_NAME};

/// Supplies a generated fallback image when neither the product nor the
/// site configuration has one.
pub trait PlaceholderImageTrait: Send + Sync {
    fn generate_no_image(&self) -> ImageRef;
}

/// Built-in placeholder: a square "no image" graphic served from the
/// catalogue's static assets.
#[derive(Debug, Clone)]
pub struct GeneratedPlaceholder {
    pub url: String,
    pub size: u32,
}

impl Default for GeneratedPlaceholder {
    fn default() -> Self {
        Self {
            url: format!("/catalogue/images/{}", NO_IMAGE_NAME),
            size: 400,
        }
    }
}

impl PlaceholderImageTrait for GeneratedPlaceholder {
    fn generate_no_image(&self) -> ImageRef {
        ImageRef {
            id: None,
            name: NO_IMAGE_NAME.to_string(),
            title: "No Image".to_string(),
            url: self.url.clone(),
            width: self.size,
            height: self.size,
        }
    }
}
