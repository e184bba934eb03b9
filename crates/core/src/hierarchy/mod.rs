//! Hierarchy module - ancestor chains, breadcrumbs, levels, links and
//! summary strings derived from the category graph.
//!
//! Everything here is a pure read over a [`CategoryTree`] snapshot and never
//! fails; missing relations resolve to empty results.
//!
//! [`CategoryTree`]: crate::categories::CategoryTree

mod hierarchy_model;
mod hierarchy_resolver;
mod hierarchy_traits;
mod links;


pub use hierarchy_model::{
    BreadcrumbEntry, CatalogueEntity, EntityKind, SummaryField, SummaryRelation,
};
pub use hierarchy_resolver::HierarchyResolver;
pub use hierarchy_traits::HierarchyObserver;
pub use links::join_links;
