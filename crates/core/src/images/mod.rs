//! Images module - image references, placeholder generation and
//! primary image selection for products.

mod images_model;
mod images_service;
mod images_traits;

#[cfg(test)]
mod images_service_tests;

pub use images_model::{ImageRef, NO_IMAGE_NAME};
pub use images_service::{primary_display_image, sorted_images_or_default};
pub use images_traits::{GeneratedPlaceholder, PlaceholderImageTrait};
