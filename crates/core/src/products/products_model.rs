//! Domain models for products.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::categories::CategoryId;
use crate::constants::STOCK_ID_SEPARATOR;
use crate::images::ImageRef;

pub type ProductId = i64;

/// An image attached to a product, with its position in the gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductImage {
    pub image: ImageRef,
    pub sort_order: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductTag {
    pub id: i64,
    pub title: String,
}

/// A product linked from another product's "related" list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedProduct {
    pub product_id: ProductId,
    pub title: String,
    pub stock_id: Option<String>,
    pub sort_order: i32,
}

/// A catalogue product.
///
/// Relation collections hold rows in the order the persistence layer
/// returned them; `sort_order` carries the caller-visible ordering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub stock_id: Option<String>,
    pub content: Option<String>,
    pub content_summary: Option<String>,
    pub price: Decimal,
    pub weight: Decimal,
    pub disabled: bool,
    pub category_ids: Vec<CategoryId>,
    pub images: Vec<ProductImage>,
    pub tags: Vec<ProductTag>,
    pub related_products: Vec<RelatedProduct>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Product {
    pub fn is_enabled(&self) -> bool {
        !self.disabled
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn menu_title(&self) -> &str {
        &self.title
    }

    /// A blank stock ID counts as missing.
    pub fn has_stock_id(&self) -> bool {
        self.stock_id
            .as_deref()
            .is_some_and(|s| !s.trim().is_empty())
    }

    /// Images ordered by sort position. Ties keep their stored order.
    pub fn sorted_images(&self) -> Vec<&ProductImage> {
        let mut images: Vec<&ProductImage> = self.images.iter().collect();
        images.sort_by_key(|i| i.sort_order);
        images
    }

    /// Related products ordered by sort position, then title.
    pub fn sorted_related_products(&self) -> Vec<&RelatedProduct> {
        let mut related: Vec<&RelatedProduct> = self.related_products.iter().collect();
        related.sort_by(|a, b| {
            a.sort_order
                .cmp(&b.sort_order)
                .then_with(|| a.title.cmp(&b.title))
        });
        related
    }

    pub fn generate_stock_id(&self) -> String {
        generate_stock_id(&self.title, self.id)
    }
}

/// Builds a stock ID from the first character of each word in the title
/// followed by the separator and the product ID.
///
/// "Blue Suede Shoes" with ID 42 gives "BSS-42". A blank title gives "-42".
pub fn generate_stock_id(title: &str, id: ProductId) -> String {
    let initials: String = title
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect();

    format!("{}{}{}", initials, STOCK_ID_SEPARATOR, id)
}

/// Data for creating a new product
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub title: String,
    pub stock_id: Option<String>,
    pub content: Option<String>,
    pub content_summary: Option<String>,
    pub price: Decimal,
    pub weight: Decimal,
    pub disabled: bool,
    pub category_ids: Vec<CategoryId>,
    pub images: Vec<ProductImage>,
    pub tags: Vec<ProductTag>,
    pub related_products: Vec<RelatedProduct>,
}
