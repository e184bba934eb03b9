//! Site configuration collaborator.

use log::warn;

use super::settings_model::CatalogueSettings;
use crate::errors::Result;
use crate::images::ImageRef;
use crate::permissions::Caller;

/// Supplies the site-wide catalogue configuration.
///
/// Implementations are injected into services; nothing in this crate looks
/// configuration up from global state.
pub trait SiteConfigTrait: Send + Sync {
    /// Get the current catalogue settings.
    fn get_settings(&self) -> Result<CatalogueSettings>;

    /// The site-wide default product image, if one is configured.
    fn default_product_image(&self) -> Option<ImageRef> {
        match self.get_settings() {
            Ok(settings) => settings.default_product_image,
            Err(e) => {
                warn!("Failed to load catalogue settings for default image: {}", e);
                None
            }
        }
    }

    /// Whether the given caller may view catalogue pages.
    fn can_view_pages(&self, caller: &Caller) -> bool {
        match self.get_settings() {
            Ok(settings) => !settings.restrict_viewing || caller.is_logged_in(),
            Err(e) => {
                warn!("Failed to load catalogue settings, denying view: {}", e);
                false
            }
        }
    }
}

/// Static settings act as their own configuration source.
impl SiteConfigTrait for CatalogueSettings {
    fn get_settings(&self) -> Result<CatalogueSettings> {
        Ok(self.clone())
    }

    fn default_product_image(&self) -> Option<ImageRef> {
        self.default_product_image.clone()
    }
}
