//! Domain models for hierarchy resolution.

use serde::{Deserialize, Serialize};

use crate::categories::Category;
use crate::products::Product;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityKind {
    Product,
    Category,
}

impl EntityKind {
    /// Path segment used in links to entities of this kind.
    pub fn url_segment(&self) -> &'static str {
        match self {
            EntityKind::Product => "product",
            EntityKind::Category => "category",
        }
    }
}

/// A borrowed product or category, the two things that sit in the hierarchy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CatalogueEntity<'a> {
    Product(&'a Product),
    Category(&'a Category),
}

impl<'a> CatalogueEntity<'a> {
    pub fn id(&self) -> i64 {
        match self {
            CatalogueEntity::Product(p) => p.id,
            CatalogueEntity::Category(c) => c.id,
        }
    }

    pub fn title(&self) -> &'a str {
        match *self {
            CatalogueEntity::Product(p) => &p.title,
            CatalogueEntity::Category(c) => &c.title,
        }
    }

    pub fn kind(&self) -> EntityKind {
        match self {
            CatalogueEntity::Product(_) => EntityKind::Product,
            CatalogueEntity::Category(_) => EntityKind::Category,
        }
    }

    pub fn as_category(&self) -> Option<&'a Category> {
        match *self {
            CatalogueEntity::Category(c) => Some(c),
            CatalogueEntity::Product(_) => None,
        }
    }
}

/// One rendered step of a breadcrumb trail.
///
/// Titles are not escaped; the presentation layer owns escaping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreadcrumbEntry {
    pub kind: EntityKind,
    pub id: i64,
    pub title: String,
    pub link: String,
}

/// Related collection of a product rendered as a summary string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SummaryRelation {
    Categories,
    Tags,
    Images,
    RelatedProducts,
}

impl SummaryRelation {
    /// The field the admin grid shows for this relation.
    pub fn default_field(&self) -> SummaryField {
        match self {
            SummaryRelation::Categories => SummaryField::FullHierarchy,
            SummaryRelation::Tags => SummaryField::Title,
            SummaryRelation::Images => SummaryField::Name,
            SummaryRelation::RelatedProducts => SummaryField::StockId,
        }
    }
}

/// Field extracted from each member of a summary relation.
///
/// A field a member does not carry falls back to its title; `StockId` on a
/// related product without one yields an empty string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SummaryField {
    Title,
    FullHierarchy,
    Name,
    StockId,
}
