//! Domain models for categories.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

pub type CategoryId = i64;

/// A catalogue category (hierarchical via parent_id)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub title: String,
    pub parent_id: Option<CategoryId>,
    pub sort_order: i32,
    pub disabled: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Category {
    pub fn is_enabled(&self) -> bool {
        !self.disabled
    }

    pub fn menu_title(&self) -> &str {
        &self.title
    }
}

/// Data for creating a new category
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    pub title: String,
    pub parent_id: Option<CategoryId>,
    pub sort_order: i32,
    pub disabled: bool,
}

/// Partial update of a category. `None` leaves a field untouched;
/// `parent_id: Some(None)` moves the category to the root.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryUpdate {
    pub id: CategoryId,
    pub title: Option<String>,
    pub parent_id: Option<Option<CategoryId>>,
    pub sort_order: Option<i32>,
    pub disabled: Option<bool>,
}

impl CategoryUpdate {
    pub fn apply_to(&self, category: Category) -> Category {
        Category {
            title: self.title.clone().unwrap_or(category.title),
            parent_id: self.parent_id.unwrap_or(category.parent_id),
            sort_order: self.sort_order.unwrap_or(category.sort_order),
            disabled: self.disabled.unwrap_or(category.disabled),
            ..category
        }
    }
}
