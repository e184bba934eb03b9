//! In-memory snapshot of the category graph.

use std::collections::{HashMap, HashSet};

use log::warn;

use super::categories_model::{Category, CategoryId};

/// Snapshot of all categories keyed by id.
///
/// Hierarchy resolution works off this snapshot rather than live records, so
/// concurrent edits made through the repository never affect a traversal
/// already in progress.
#[derive(Debug, Clone, Default)]
pub struct CategoryTree {
    categories: HashMap<CategoryId, Category>,
}

impl CategoryTree {
    pub fn from_categories(categories: impl IntoIterator<Item = Category>) -> Self {
        Self {
            categories: categories.into_iter().map(|c| (c.id, c)).collect(),
        }
    }

    pub fn get(&self, id: CategoryId) -> Option<&Category> {
        self.categories.get(&id)
    }

    pub fn contains(&self, id: CategoryId) -> bool {
        self.categories.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.values()
    }

    /// The parent of `category`, or `None` for roots and orphans whose
    /// parent is not in the snapshot.
    pub fn parent_of(&self, category: &Category) -> Option<&Category> {
        category.parent_id.and_then(|id| self.categories.get(&id))
    }

    /// Direct children of a category ordered by sort position, then title.
    pub fn children_of(&self, id: CategoryId) -> Vec<&Category> {
        let mut children: Vec<&Category> = self
            .categories
            .values()
            .filter(|c| c.parent_id == Some(id) && c.id != id)
            .collect();
        sort_siblings(&mut children);
        children
    }

    /// Categories without a parent, ordered like siblings.
    pub fn roots(&self) -> Vec<&Category> {
        let mut roots: Vec<&Category> = self
            .categories
            .values()
            .filter(|c| c.parent_id.is_none())
            .collect();
        sort_siblings(&mut roots);
        roots
    }

    /// Walks parent links starting at `start`, yielding each category once.
    ///
    /// The walk stops at a root, at a parent missing from the snapshot, or
    /// when it reaches a category it has already visited.
    pub fn walk_up<'a>(&'a self, start: &'a Category) -> Vec<&'a Category> {
        let mut visited: HashSet<CategoryId> = HashSet::new();
        let mut chain = Vec::new();
        let mut current = start;

        visited.insert(current.id);
        chain.push(current);

        while let Some(parent) = self.parent_of(current) {
            if !visited.insert(parent.id) {
                warn!(
                    "Category {} has cyclic ancestry through category {}",
                    start.id, parent.id
                );
                break;
            }
            chain.push(parent);
            current = parent;
        }

        chain
    }

    /// Whether making `new_parent_id` the parent of `category_id` would put
    /// the category in its own ancestor chain.
    pub fn would_create_cycle(&self, category_id: CategoryId, new_parent_id: CategoryId) -> bool {
        if category_id == new_parent_id {
            return true;
        }
        match self.categories.get(&new_parent_id) {
            Some(parent) => self.walk_up(parent).iter().any(|c| c.id == category_id),
            None => false,
        }
    }
}

fn sort_siblings(categories: &mut [&Category]) {
    categories.sort_by(|a, b| {
        a.sort_order
            .cmp(&b.sort_order)
            .then_with(|| a.title.cmp(&b.title))
            .then_with(|| a.id.cmp(&b.id))
    });
}
