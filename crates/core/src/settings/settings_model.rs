//! Catalogue configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_BREADCRUMB_MAX_DEPTH, DEFAULT_HIERARCHY_SEPARATOR,
};
use crate::errors::{Error, Result};
use crate::images::ImageRef;

/// Site-wide catalogue settings.
///
/// Every field has a default so a partial JSON document is a valid
/// configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CatalogueSettings {
    /// Generate a stock ID for products saved without one
    pub auto_stock_id: bool,
    /// Prefix applied to relative links
    pub base_url: String,
    /// Maximum number of breadcrumb entries rendered
    pub breadcrumb_max_depth: usize,
    /// Separator between titles in a category's full hierarchy name
    pub hierarchy_separator: String,
    /// Image shown for products that have none
    pub default_product_image: Option<ImageRef>,
    /// Only logged-in members may view the catalogue
    pub restrict_viewing: bool,
}

impl Default for CatalogueSettings {
    fn default() -> Self {
        Self {
            auto_stock_id: true,
            base_url: DEFAULT_BASE_URL.to_string(),
            breadcrumb_max_depth: DEFAULT_BREADCRUMB_MAX_DEPTH,
            hierarchy_separator: DEFAULT_HIERARCHY_SEPARATOR.to_string(),
            default_product_image: None,
            restrict_viewing: false,
        }
    }
}

impl CatalogueSettings {
    /// Parses settings from a JSON document, filling in defaults for
    /// missing keys.
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: CatalogueSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.hierarchy_separator.is_empty() {
            return Err(Error::InvalidConfigValue(
                "hierarchySeparator must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
