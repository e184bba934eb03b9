//! Category repository and service traits.
//!
//! These traits define the contract for category operations without any
//! database-specific types.

use async_trait::async_trait;

use super::categories_model::{Category, CategoryId, CategoryUpdate, NewCategory};
use super::category_tree::CategoryTree;
use crate::errors::Result;
use crate::permissions::{BulkActionResult, Caller};

/// Trait defining the contract for Category repository operations.
#[async_trait]
pub trait CategoryRepositoryTrait: Send + Sync {
    /// Retrieves a category by its ID.
    fn get_by_id(&self, category_id: CategoryId) -> Result<Category>;

    /// Lists every category.
    fn list(&self) -> Result<Vec<Category>>;

    /// Creates a new category and returns it with its assigned ID.
    async fn create(&self, new_category: NewCategory) -> Result<Category>;

    /// Writes a full category record.
    async fn update(&self, category: Category) -> Result<Category>;

    /// Deletes a category by its ID.
    ///
    /// Returns the number of deleted records.
    async fn delete(&self, category_id: CategoryId) -> Result<usize>;

    /// Sets the disabled flag on every listed category in one write.
    ///
    /// Returns the number of records whose flag changed.
    async fn set_disabled(&self, category_ids: &[CategoryId], disabled: bool) -> Result<usize>;
}

/// Trait defining the contract for Category service operations.
///
/// Single-record writes do not check permissions; callers gate them with
/// `CataloguePermissions::can_create_category`, `can_edit_category` and
/// `can_delete_category`. Bulk enable/disable takes a `Caller` and checks
/// `can_edit_category` itself.
#[async_trait]
pub trait CategoryServiceTrait: Send + Sync {
    /// Loads a snapshot of every category for hierarchy resolution.
    fn load_tree(&self) -> Result<CategoryTree>;

    fn get_category(&self, category_id: CategoryId) -> Result<Category>;

    async fn create_category(&self, new_category: NewCategory) -> Result<Category>;

    /// Applies a partial update. Rejects a parent change that would make
    /// the category its own ancestor.
    async fn update_category(&self, category_update: CategoryUpdate) -> Result<Category>;

    async fn move_category(
        &self,
        category_id: CategoryId,
        new_parent_id: Option<CategoryId>,
        position: i32,
    ) -> Result<Category>;

    /// Deletes a category that has no children.
    async fn delete_category(&self, category_id: CategoryId) -> Result<usize>;

    /// Enables or disables categories the caller may edit.
    async fn set_categories_disabled(
        &self,
        caller: &Caller,
        category_ids: &[CategoryId],
        disabled: bool,
    ) -> Result<BulkActionResult>;
}
