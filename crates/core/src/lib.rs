//! Catalogue Core - Domain entities, services, and traits for an
//! e-commerce product catalogue.
//!
//! This crate holds the catalogue's hierarchy logic (ancestor chains,
//! breadcrumbs, levels, summary strings, stock ID generation) and the
//! services around it. It is database-agnostic and defines repository
//! traits that a storage crate implements.

pub mod categories;
pub mod constants;
pub mod errors;
pub mod hierarchy;
pub mod images;
pub mod permissions;
pub mod products;
pub mod settings;

// Re-export the types most callers need
pub use categories::{Category, CategoryTree};
pub use hierarchy::{BreadcrumbEntry, CatalogueEntity, HierarchyResolver};
pub use products::Product;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
