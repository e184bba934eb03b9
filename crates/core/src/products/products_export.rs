//! CSV export of products.

use csv::Writer;

use super::products_model::Product;
use crate::errors::{Error, Result};
use crate::hierarchy::{HierarchyResolver, SummaryField, SummaryRelation};

/// Column headers of the product export, in order.
pub const EXPORT_COLUMNS: [&str; 10] = [
    "ID",
    "StockID",
    "Title",
    "Content",
    "BasePrice",
    "CategoriesList",
    "TagsList",
    "ImagesList",
    "RelatedProductsList",
    "Disabled",
];

/// Renders products as CSV, one row per product in the given order.
///
/// Relation columns use the same summary strings shown in the admin grid.
pub fn export_products_csv(products: &[Product], resolver: &HierarchyResolver) -> Result<String> {
    let mut writer = Writer::from_writer(Vec::new());
    writer.write_record(EXPORT_COLUMNS)?;

    for product in products {
        writer.write_record([
            product.id.to_string(),
            product.stock_id.clone().unwrap_or_default(),
            product.title.clone(),
            product.content.clone().unwrap_or_default(),
            product.price.to_string(),
            resolver.render_summary_list(
                product,
                SummaryRelation::Categories,
                SummaryField::FullHierarchy,
            ),
            resolver.render_summary_list(product, SummaryRelation::Tags, SummaryField::Title),
            resolver.render_summary_list(product, SummaryRelation::Images, SummaryField::Name),
            resolver.render_summary_list(
                product,
                SummaryRelation::RelatedProducts,
                SummaryField::StockId,
            ),
            if product.disabled { "1" } else { "0" }.to_string(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| Error::Export(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| Error::Export(e.to_string()))
}
