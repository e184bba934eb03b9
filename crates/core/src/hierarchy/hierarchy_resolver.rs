//! Hierarchy resolution over a category snapshot.

use std::sync::Arc;

use super::hierarchy_model::{BreadcrumbEntry, CatalogueEntity, SummaryField, SummaryRelation};
use super::hierarchy_traits::HierarchyObserver;
use super::links::join_links;
use crate::categories::{Category, CategoryTree};
use crate::constants::SUMMARY_LIST_SEPARATOR;
use crate::products::Product;
use crate::settings::CatalogueSettings;

/// Resolves ancestor chains, breadcrumbs, levels, links and summary strings
/// for products and categories.
///
/// The resolver owns a snapshot of the category graph and the settings it
/// was built with. Repeated calls re-walk the snapshot; nothing is cached.
pub struct HierarchyResolver {
    tree: CategoryTree,
    settings: CatalogueSettings,
    observers: Vec<Arc<dyn HierarchyObserver>>,
}

impl HierarchyResolver {
    pub fn new(tree: CategoryTree, settings: CatalogueSettings) -> Self {
        Self {
            tree,
            settings,
            observers: Vec::new(),
        }
    }

    pub fn with_observer(mut self, observer: Arc<dyn HierarchyObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    pub fn tree(&self) -> &CategoryTree {
        &self.tree
    }

    pub fn settings(&self) -> &CatalogueSettings {
        &self.settings
    }

    /// The category a product hangs under: its first assigned category that
    /// exists in the snapshot.
    pub fn parent_category<'a>(&'a self, product: &Product) -> Option<&'a Category> {
        product
            .category_ids
            .iter()
            .find_map(|&id| self.tree.get(id))
    }

    /// Ancestor chain of an entity, nearest first.
    ///
    /// For a product the walk starts at its parent category, which is
    /// included only when `include_self` is set. For a category the walk
    /// starts at the category itself, again included only when
    /// `include_self` is set. The walk stops at a root, at a parent missing
    /// from the snapshot, or at a category already visited.
    pub fn resolve_ancestors<'a>(
        &'a self,
        entity: CatalogueEntity<'a>,
        include_self: bool,
    ) -> Vec<&'a Category> {
        let start = match entity {
            CatalogueEntity::Product(product) => self.parent_category(product),
            CatalogueEntity::Category(category) => Some(category),
        };

        let mut ancestors = match start {
            Some(start) => {
                let chain = self.tree.walk_up(start);
                if include_self {
                    chain
                } else {
                    chain.into_iter().skip(1).collect()
                }
            }
            None => Vec::new(),
        };

        for observer in &self.observers {
            observer.update_ancestors(entity, &mut ancestors, include_self);
        }

        ancestors
    }

    /// Breadcrumb trail for an entity, root first, at most `max_depth`
    /// entries long.
    ///
    /// A product's trail is the product followed by its ancestor chain; a
    /// product without a category has no trail. A category's trail is its
    /// own ancestor-inclusive chain. When the trail is too long the entries
    /// nearest the root are dropped so the leaf end stays visible.
    pub fn build_breadcrumbs(
        &self,
        entity: CatalogueEntity<'_>,
        max_depth: usize,
    ) -> Vec<BreadcrumbEntry> {
        let ancestors = self.resolve_ancestors(entity, true);
        if ancestors.is_empty() {
            return Vec::new();
        }

        let mut trail: Vec<CatalogueEntity<'_>> = Vec::with_capacity(ancestors.len() + 1);
        let leads_with_self = match entity {
            CatalogueEntity::Category(category) => ancestors[0].id == category.id,
            CatalogueEntity::Product(_) => false,
        };
        if !leads_with_self {
            trail.push(entity);
        }
        trail.extend(ancestors.into_iter().map(CatalogueEntity::Category));
        trail.reverse();

        if trail.len() > max_depth {
            trail = trail.split_off(trail.len() - max_depth);
        }

        trail
            .into_iter()
            .map(|e| BreadcrumbEntry {
                kind: e.kind(),
                id: e.id(),
                title: e.title().to_string(),
                link: self.link(e, None),
            })
            .collect()
    }

    /// Breadcrumb trail capped at the configured maximum depth.
    pub fn breadcrumbs(&self, entity: CatalogueEntity<'_>) -> Vec<BreadcrumbEntry> {
        self.build_breadcrumbs(entity, self.settings.breadcrumb_max_depth)
    }

    /// The entity at a 1-based level of its ancestor-and-self stack, where
    /// level 1 is the root. Level 0 and levels past the entity itself give
    /// `None`.
    pub fn level<'a>(
        &'a self,
        entity: CatalogueEntity<'a>,
        level: usize,
    ) -> Option<CatalogueEntity<'a>> {
        let mut stack: Vec<CatalogueEntity<'a>> = match entity {
            CatalogueEntity::Product(product) => {
                let mut stack = vec![entity];
                if let Some(parent) = self.parent_category(product) {
                    stack.extend(
                        self.tree
                            .walk_up(parent)
                            .into_iter()
                            .map(CatalogueEntity::Category),
                    );
                }
                stack
            }
            CatalogueEntity::Category(category) => self
                .tree
                .walk_up(category)
                .into_iter()
                .map(CatalogueEntity::Category)
                .collect(),
        };
        stack.reverse();

        level.checked_sub(1).and_then(|index| stack.get(index).copied())
    }

    /// Titles from the root down to `category`, joined by the configured
    /// separator.
    pub fn full_hierarchy(&self, category: &Category) -> String {
        let mut titles: Vec<&str> = self
            .tree
            .walk_up(category)
            .into_iter()
            .map(|c| c.title.as_str())
            .collect();
        titles.reverse();
        titles.join(&self.settings.hierarchy_separator)
    }

    /// Link relative to the site root, e.g. `product/42` or
    /// `category/7/edit`. Observers may rewrite it.
    pub fn relative_link(&self, entity: CatalogueEntity<'_>, action: Option<&str>) -> String {
        let id = entity.id().to_string();
        let mut link = join_links(&[
            entity.kind().url_segment(),
            id.as_str(),
            action.unwrap_or(""),
        ]);

        for observer in &self.observers {
            observer.update_relative_link(entity, &mut link, action);
        }

        link
    }

    /// Relative link prefixed with the configured base URL.
    pub fn link(&self, entity: CatalogueEntity<'_>, action: Option<&str>) -> String {
        let relative = self.relative_link(entity, action);
        join_links(&[self.settings.base_url.as_str(), relative.as_str()])
    }

    /// Link prefixed with `origin` (scheme and host).
    pub fn absolute_link(
        &self,
        entity: CatalogueEntity<'_>,
        origin: &str,
        action: Option<&str>,
    ) -> String {
        let link = self.link(entity, action);
        join_links(&[origin, link.as_str()])
    }

    /// Joins one field of every member of a product relation, in stored
    /// order, with ", ". An empty relation gives an empty string. Values are
    /// not escaped.
    pub fn render_summary_list(
        &self,
        product: &Product,
        relation: SummaryRelation,
        field: SummaryField,
    ) -> String {
        let values: Vec<String> = match relation {
            SummaryRelation::Categories => product
                .category_ids
                .iter()
                .filter_map(|&id| self.tree.get(id))
                .map(|category| match field {
                    SummaryField::FullHierarchy => self.full_hierarchy(category),
                    _ => category.title.clone(),
                })
                .collect(),
            SummaryRelation::Tags => product.tags.iter().map(|t| t.title.clone()).collect(),
            SummaryRelation::Images => product
                .images
                .iter()
                .map(|i| match field {
                    SummaryField::Title => i.image.title.clone(),
                    _ => i.image.name.clone(),
                })
                .collect(),
            SummaryRelation::RelatedProducts => product
                .related_products
                .iter()
                .map(|r| match field {
                    SummaryField::StockId => r.stock_id.clone().unwrap_or_default(),
                    _ => r.title.clone(),
                })
                .collect(),
        };

        values.join(SUMMARY_LIST_SEPARATOR)
    }

    pub fn categories_list(&self, product: &Product) -> String {
        self.render_summary_list(
            product,
            SummaryRelation::Categories,
            SummaryRelation::Categories.default_field(),
        )
    }

    pub fn tags_list(&self, product: &Product) -> String {
        self.render_summary_list(
            product,
            SummaryRelation::Tags,
            SummaryRelation::Tags.default_field(),
        )
    }

    pub fn images_list(&self, product: &Product) -> String {
        self.render_summary_list(
            product,
            SummaryRelation::Images,
            SummaryRelation::Images.default_field(),
        )
    }

    pub fn related_products_list(&self, product: &Product) -> String {
        self.render_summary_list(
            product,
            SummaryRelation::RelatedProducts,
            SummaryRelation::RelatedProducts.default_field(),
        )
    }
}
