//! Settings module - catalogue configuration and the site configuration
//! collaborator.

mod settings_model;
mod settings_traits;


pub use settings_model::CatalogueSettings;
pub use settings_traits::SiteConfigTrait;
