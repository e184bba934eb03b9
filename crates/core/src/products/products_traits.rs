//! Product repository and service traits.

use async_trait::async_trait;

use super::products_model::{NewProduct, Product, ProductId};
use crate::errors::Result;
use crate::hierarchy::{BreadcrumbEntry, HierarchyResolver};
use crate::permissions::{BulkActionResult, Caller};

/// Trait defining the contract for Product repository operations.
///
/// Relation collections on returned products must come back in a stable
/// order.
#[async_trait]
pub trait ProductRepositoryTrait: Send + Sync {
    /// Retrieves a product by its ID.
    fn get_by_id(&self, product_id: ProductId) -> Result<Product>;

    /// Lists every product.
    fn list(&self) -> Result<Vec<Product>>;

    /// Creates a new product and returns it with its assigned ID.
    async fn create(&self, new_product: NewProduct) -> Result<Product>;

    /// Writes a full product record.
    async fn update(&self, product: Product) -> Result<Product>;

    /// Deletes a product by its ID.
    ///
    /// Returns the number of deleted records.
    async fn delete(&self, product_id: ProductId) -> Result<usize>;

    /// Sets the disabled flag on every listed product in one write.
    ///
    /// Returns the number of records whose flag changed.
    async fn set_disabled(&self, product_ids: &[ProductId], disabled: bool) -> Result<usize>;
}

/// Trait defining the contract for Product service operations.
///
/// Single-record writes do not check permissions; callers gate them with
/// `CataloguePermissions::can_create_product`, `can_edit_product` and
/// `can_delete_product`. Bulk enable/disable takes a `Caller` and checks
/// `can_edit_product` itself.
#[async_trait]
pub trait ProductServiceTrait: Send + Sync {
    fn get_product(&self, product_id: ProductId) -> Result<Product>;

    /// All products, ordered by title.
    fn list_products(&self) -> Result<Vec<Product>>;

    /// Products whose title, content or stock ID contains `query`
    /// (case-insensitive), ordered by title.
    fn search_products(&self, query: &str) -> Result<Vec<Product>>;

    /// Builds a resolver over the current category snapshot.
    fn hierarchy_resolver(&self) -> Result<HierarchyResolver>;

    /// Breadcrumb trail for a product, capped at the configured depth.
    fn product_breadcrumbs(&self, product_id: ProductId) -> Result<Vec<BreadcrumbEntry>>;

    /// Renders every product as CSV.
    fn export_products(&self) -> Result<String>;

    /// Validates and writes a new product, generating its stock ID when
    /// enabled and missing.
    async fn create_product(&self, new_product: NewProduct) -> Result<Product>;

    /// Validates and writes an existing product. Runs the same stock ID
    /// hook as creation.
    async fn update_product(&self, product: Product) -> Result<Product>;

    async fn delete_product(&self, product_id: ProductId) -> Result<usize>;

    /// Enables or disables products the caller may edit.
    async fn set_products_disabled(
        &self,
        caller: &Caller,
        product_ids: &[ProductId],
        disabled: bool,
    ) -> Result<BulkActionResult>;
}
