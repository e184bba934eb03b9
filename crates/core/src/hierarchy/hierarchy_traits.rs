//! Extension points for hierarchy resolution.

use super::hierarchy_model::CatalogueEntity;
use crate::categories::Category;

/// Observer invoked at fixed points of hierarchy resolution.
///
/// Both methods default to doing nothing, so implementors override only
/// the step they care about.
pub trait HierarchyObserver: Send + Sync {
    /// Called with the finished ancestor chain (nearest first) before it is
    /// returned.
    fn update_ancestors<'a>(
        &self,
        _entity: CatalogueEntity<'a>,
        _ancestors: &mut Vec<&'a Category>,
        _include_self: bool,
    ) {
    }

    /// Called with the relative link of an entity before the base URL is
    /// applied.
    fn update_relative_link(
        &self,
        _entity: CatalogueEntity<'_>,
        _link: &mut String,
        _action: Option<&str>,
    ) {
    }
}
