//! Category service implementation.

use async_trait::async_trait;
use log::{debug, info};
use std::sync::Arc;

use super::categories_model::{Category, CategoryId, CategoryUpdate, NewCategory};
use super::categories_traits::{CategoryRepositoryTrait, CategoryServiceTrait};
use super::category_tree::CategoryTree;
use crate::errors::{Result, ValidationError};
use crate::permissions::{BulkActionResult, Caller, CataloguePermissions};

pub struct CategoryService {
    repository: Arc<dyn CategoryRepositoryTrait>,
    permissions: Arc<CataloguePermissions>,
}

impl CategoryService {
    pub fn new(
        repository: Arc<dyn CategoryRepositoryTrait>,
        permissions: Arc<CataloguePermissions>,
    ) -> Self {
        Self {
            repository,
            permissions,
        }
    }

    fn validate_title(title: &str) -> Result<()> {
        if title.trim().is_empty() {
            return Err(ValidationError::MissingField("title".to_string()).into());
        }
        Ok(())
    }

    /// Checks that `parent_id` exists and that adopting it keeps the graph
    /// acyclic.
    fn validate_parent(
        &self,
        tree: &CategoryTree,
        category_id: Option<CategoryId>,
        parent_id: Option<CategoryId>,
    ) -> Result<()> {
        let Some(parent_id) = parent_id else {
            return Ok(());
        };

        if !tree.contains(parent_id) {
            return Err(ValidationError::InvalidInput(format!(
                "Parent category {} does not exist",
                parent_id
            ))
            .into());
        }

        if let Some(category_id) = category_id {
            if tree.would_create_cycle(category_id, parent_id) {
                return Err(ValidationError::InvalidInput(format!(
                    "Category {} cannot be placed under its own descendant {}",
                    category_id, parent_id
                ))
                .into());
            }
        }

        Ok(())
    }
}

#[async_trait]
impl CategoryServiceTrait for CategoryService {
    fn load_tree(&self) -> Result<CategoryTree> {
        let categories = self.repository.list()?;
        debug!("Loaded category tree with {} categories", categories.len());
        Ok(CategoryTree::from_categories(categories))
    }

    fn get_category(&self, category_id: CategoryId) -> Result<Category> {
        self.repository.get_by_id(category_id)
    }

    async fn create_category(&self, new_category: NewCategory) -> Result<Category> {
        Self::validate_title(&new_category.title)?;
        let tree = self.load_tree()?;
        self.validate_parent(&tree, None, new_category.parent_id)?;
        self.repository.create(new_category).await
    }

    async fn update_category(&self, category_update: CategoryUpdate) -> Result<Category> {
        let existing = self.repository.get_by_id(category_update.id)?;
        let updated = category_update.apply_to(existing.clone());
        Self::validate_title(&updated.title)?;

        if updated.parent_id != existing.parent_id {
            let tree = self.load_tree()?;
            self.validate_parent(&tree, Some(updated.id), updated.parent_id)?;
        }

        self.repository.update(updated).await
    }

    async fn move_category(
        &self,
        category_id: CategoryId,
        new_parent_id: Option<CategoryId>,
        position: i32,
    ) -> Result<Category> {
        self.update_category(CategoryUpdate {
            id: category_id,
            parent_id: Some(new_parent_id),
            sort_order: Some(position),
            ..CategoryUpdate::default()
        })
        .await
    }

    async fn delete_category(&self, category_id: CategoryId) -> Result<usize> {
        let tree = self.load_tree()?;
        let children = tree.children_of(category_id);
        if !children.is_empty() {
            return Err(ValidationError::InvalidInput(format!(
                "Cannot delete category with {} child categories",
                children.len()
            ))
            .into());
        }

        self.repository.delete(category_id).await
    }

    async fn set_categories_disabled(
        &self,
        caller: &Caller,
        category_ids: &[CategoryId],
        disabled: bool,
    ) -> Result<BulkActionResult> {
        let mut result = BulkActionResult::default();

        if !self.permissions.can_edit_category(caller) {
            result.skipped.extend_from_slice(category_ids);
            return Ok(result);
        }

        let changed = self
            .repository
            .set_disabled(category_ids, disabled)
            .await?;
        result.updated.extend_from_slice(category_ids);

        info!(
            "{} {} categories ({} changed)",
            if disabled { "Disabled" } else { "Enabled" },
            result.updated.len(),
            changed
        );
        Ok(result)
    }
}
