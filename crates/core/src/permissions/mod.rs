//! Permissions module - caller identity and the catalogue's delegated
//! permission checks.

mod permissions_model;
mod permissions_service;
mod permissions_traits;


pub use permissions_model::{BulkActionResult, Caller, PermissionDefinition};
pub use permissions_service::{provide_permissions, CataloguePermissions};
pub use permissions_traits::PermissionCheckerTrait;
