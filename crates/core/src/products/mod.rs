//! Products module - domain models, services, and traits.

mod products_export;
mod products_model;
mod products_service;
mod products_traits;

#[cfg(test)]
mod products_export_tests;

pub use products_export::{export_products_csv, EXPORT_COLUMNS};
pub use products_model::{
    generate_stock_id, NewProduct, Product, ProductId, ProductImage, ProductTag, RelatedProduct,
};
pub use products_service::ProductService;
pub use products_traits::{ProductRepositoryTrait, ProductServiceTrait};
