//! Primary image selection.

use log::debug;

use super::images_model::ImageRef;
use super::images_traits::{GeneratedPlaceholder, PlaceholderImageTrait};
use crate::products::Product;
use crate::settings::SiteConfigTrait;

/// Returns the product's images ordered by sort position, or a single
/// fallback image when the product has none.
///
/// The fallback is the site default product image if one exists, otherwise
/// a generated placeholder. The site configuration is only consulted when
/// the product has no images. When `placeholder` is `None` the built-in
/// [`GeneratedPlaceholder`] is used.
pub fn sorted_images_or_default(
    product: &Product,
    site_config: &dyn SiteConfigTrait,
    placeholder: Option<&dyn PlaceholderImageTrait>,
) -> Vec<ImageRef> {
    if !product.images.is_empty() {
        return product
            .sorted_images()
            .into_iter()
            .map(|i| i.image.clone())
            .collect();
    }

    let image = match site_config.default_product_image() {
        Some(default_image) if default_image.exists() => default_image,
        _ => {
            debug!(
                "No default product image configured, generating placeholder for product {}",
                product.id
            );
            match placeholder {
                Some(helper) => helper.generate_no_image(),
                None => GeneratedPlaceholder::default().generate_no_image(),
            }
        }
    };

    vec![image]
}

/// Returns the image a product should be displayed with.
///
/// This is the image with the lowest sort position, falling back as described
/// in [`sorted_images_or_default`]. Always returns exactly one image.
pub fn primary_display_image(
    product: &Product,
    site_config: &dyn SiteConfigTrait,
    placeholder: Option<&dyn PlaceholderImageTrait>,
) -> ImageRef {
    if let Some(first) = product.sorted_images().first() {
        return first.image.clone();
    }

    sorted_images_or_default(product, site_config, placeholder)
        .into_iter()
        .next()
        .unwrap_or_else(|| GeneratedPlaceholder::default().generate_no_image())
}
