//! Categories module - domain models, services, and traits.
//!
//! Categories form a tree through `parent_id`. Nothing structurally
//! prevents a cycle, so every walk over parents goes through a visited set.

mod categories_model;
mod categories_service;
mod categories_traits;
mod category_tree;

#[cfg(test)]
mod categories_service_tests;

pub use categories_model::{Category, CategoryId, CategoryUpdate, NewCategory};
pub use categories_service::CategoryService;
pub use categories_traits::{CategoryRepositoryTrait, CategoryServiceTrait};
pub use category_tree::CategoryTree;
