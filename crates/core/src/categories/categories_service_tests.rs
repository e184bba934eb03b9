#[cfg(test)]
mod tests {
    use crate::categories::{
        Category, CategoryId, CategoryRepositoryTrait, CategoryService, CategoryServiceTrait,
        CategoryUpdate, NewCategory,
    };
    use crate::errors::{DatabaseError, Error, Result, ValidationError};
    use crate::permissions::{Caller, CataloguePermissions, PermissionCheckerTrait};
    use crate::settings::CatalogueSettings;
    use async_trait::async_trait;
    use chrono::{NaiveDate, NaiveDateTime};
    use std::sync::{Arc, Mutex};

    fn timestamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn category(id: CategoryId, title: &str, parent_id: Option<CategoryId>) -> Category {
        Category {
            id,
            title: title.to_string(),
            parent_id,
            sort_order: 0,
            disabled: false,
            created_at: timestamp(),
            updated_at: timestamp(),
        }
    }

    // --- Mock CategoryRepository ---
    #[derive(Clone, Default)]
    struct MockCategoryRepository {
        categories: Arc<Mutex<Vec<Category>>>,
        writes: Arc<Mutex<usize>>,
    }

    impl MockCategoryRepository {
        fn with(categories: Vec<Category>) -> Self {
            Self {
                categories: Arc::new(Mutex::new(categories)),
                writes: Arc::new(Mutex::new(0)),
            }
        }

        fn write_count(&self) -> usize {
            *self.writes.lock().unwrap()
        }
    }

    #[async_trait]
    impl CategoryRepositoryTrait for MockCategoryRepository {
        fn get_by_id(&self, category_id: CategoryId) -> Result<Category> {
            self.categories
                .lock()
                .unwrap()
                .iter()
                .find(|c| c.id == category_id)
                .cloned()
                .ok_or_else(|| DatabaseError::NotFound(format!("category {}", category_id)).into())
        }

        fn list(&self) -> Result<Vec<Category>> {
            Ok(self.categories.lock().unwrap().clone())
        }

        async fn create(&self, new_category: NewCategory) -> Result<Category> {
            let mut categories = self.categories.lock().unwrap();
            let id = categories.iter().map(|c| c.id).max().unwrap_or(0) + 1;
            let created = Category {
                id,
                title: new_category.title,
                parent_id: new_category.parent_id,
                sort_order: new_category.sort_order,
                disabled: new_category.disabled,
                created_at: timestamp(),
                updated_at: timestamp(),
            };
            categories.push(created.clone());
            *self.writes.lock().unwrap() += 1;
            Ok(created)
        }

        async fn update(&self, category: Category) -> Result<Category> {
            let mut categories = self.categories.lock().unwrap();
            let slot = categories
                .iter_mut()
                .find(|c| c.id == category.id)
                .ok_or_else(|| DatabaseError::NotFound(format!("category {}", category.id)))?;
            *slot = category.clone();
            *self.writes.lock().unwrap() += 1;
            Ok(category)
        }

        async fn delete(&self, category_id: CategoryId) -> Result<usize> {
            let mut categories = self.categories.lock().unwrap();
            let before = categories.len();
            categories.retain(|c| c.id != category_id);
            Ok(before - categories.len())
        }

        async fn set_disabled(&self, category_ids: &[CategoryId], disabled: bool) -> Result<usize> {
            let mut categories = self.categories.lock().unwrap();
            let mut changed = 0;
            for category in categories
                .iter_mut()
                .filter(|c| category_ids.contains(&c.id) && c.disabled != disabled)
            {
                category.disabled = disabled;
                changed += 1;
            }
            *self.writes.lock().unwrap() += changed;
            Ok(changed)
        }
    }

    // --- Mock PermissionChecker ---
    struct MockPermissionChecker {
        granted: Vec<(i64, &'static str)>,
    }

    impl PermissionCheckerTrait for MockPermissionChecker {
        fn check_member(&self, caller: &Caller, codes: &[&str]) -> bool {
            let Some(member_id) = caller.member_id else {
                return false;
            };
            self.granted
                .iter()
                .any(|(id, code)| *id == member_id && codes.contains(code))
        }
    }

    fn service(repository: MockCategoryRepository) -> CategoryService {
        let checker = MockPermissionChecker {
            granted: vec![(1, "ADMIN"), (2, "CATALOGUE_EDIT_CATEGORIES")],
        };
        let permissions = CataloguePermissions::new(
            Arc::new(checker),
            Arc::new(CatalogueSettings::default()),
        );
        CategoryService::new(Arc::new(repository), Arc::new(permissions))
    }

    fn sample_tree() -> Vec<Category> {
        vec![
            category(1, "Clothing", None),
            category(2, "Footwear", Some(1)),
            category(3, "Shoes", Some(2)),
        ]
    }

    #[tokio::test]
    async fn test_create_category_requires_title() {
        let service = service(MockCategoryRepository::default());
        let result = service
            .create_category(NewCategory {
                title: "   ".to_string(),
                ..NewCategory::default()
            })
            .await;

        assert!(matches!(
            result,
            Err(Error::Validation(ValidationError::MissingField(_)))
        ));
    }

    #[tokio::test]
    async fn test_create_category_rejects_unknown_parent() {
        let service = service(MockCategoryRepository::with(sample_tree()));
        let result = service
            .create_category(NewCategory {
                title: "Hats".to_string(),
                parent_id: Some(42),
                ..NewCategory::default()
            })
            .await;

        assert!(matches!(
            result,
            Err(Error::Validation(ValidationError::InvalidInput(_)))
        ));
    }

    #[tokio::test]
    async fn test_create_category_under_existing_parent() {
        let repository = MockCategoryRepository::with(sample_tree());
        let service = service(repository.clone());
        let created = service
            .create_category(NewCategory {
                title: "Hats".to_string(),
                parent_id: Some(1),
                ..NewCategory::default()
            })
            .await
            .unwrap();

        assert_eq!(created.id, 4);
        assert_eq!(created.parent_id, Some(1));
        assert_eq!(service.load_tree().unwrap().children_of(1).len(), 2);
    }

    #[tokio::test]
    async fn test_move_category_under_descendant_is_rejected() {
        let repository = MockCategoryRepository::with(sample_tree());
        let service = service(repository.clone());

        let result = service.move_category(1, Some(3), 0).await;
        assert!(matches!(
            result,
            Err(Error::Validation(ValidationError::InvalidInput(_)))
        ));
        assert_eq!(repository.write_count(), 0);
    }

    #[tokio::test]
    async fn test_move_category_to_root() {
        let service = service(MockCategoryRepository::with(sample_tree()));

        let moved = service.move_category(3, None, 5).await.unwrap();
        assert_eq!(moved.parent_id, None);
        assert_eq!(moved.sort_order, 5);
    }

    #[tokio::test]
    async fn test_update_category_keeps_untouched_fields() {
        let service = service(MockCategoryRepository::with(sample_tree()));

        let updated = service
            .update_category(CategoryUpdate {
                id: 3,
                title: Some("Sneakers".to_string()),
                ..CategoryUpdate::default()
            })
            .await
            .unwrap();

        assert_eq!(updated.title, "Sneakers");
        assert_eq!(updated.parent_id, Some(2));
    }

    #[tokio::test]
    async fn test_delete_category_with_children_is_rejected() {
        let service = service(MockCategoryRepository::with(sample_tree()));

        assert!(service.delete_category(2).await.is_err());
        assert_eq!(service.delete_category(3).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_bulk_disable_requires_edit_permission() {
        let repository = MockCategoryRepository::with(sample_tree());
        let service = service(repository.clone());

        let denied = service
            .set_categories_disabled(&Caller::member(3), &[1, 2], true)
            .await
            .unwrap();
        assert_eq!(denied.skipped, vec![1, 2]);
        assert!(denied.updated.is_empty());
        assert_eq!(repository.write_count(), 0);

        let allowed = service
            .set_categories_disabled(&Caller::member(2), &[1, 2], true)
            .await
            .unwrap();
        assert_eq!(allowed.updated, vec![1, 2]);
        assert!(service.get_category(1).unwrap().disabled);
        assert!(!service.get_category(3).unwrap().disabled);
        assert_eq!(repository.write_count(), 2);

        let repeat = service
            .set_categories_disabled(&Caller::member(1), &[2, 3], true)
            .await
            .unwrap();
        assert_eq!(repeat.updated, vec![2, 3]);
        assert!(service.get_category(3).unwrap().disabled);
        assert_eq!(repository.write_count(), 3);
    }
}
