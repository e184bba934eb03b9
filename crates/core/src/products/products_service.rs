//! Product service implementation.

use async_trait::async_trait;
use log::{debug, info};
use rust_decimal::Decimal;
use std::sync::Arc;

use super::products_export::export_products_csv;
use super::products_model::{NewProduct, Product, ProductId};
use super::products_traits::{ProductRepositoryTrait, ProductServiceTrait};
use crate::categories::{CategoryRepositoryTrait, CategoryTree};
use crate::constants::WEIGHT_DECIMAL_PRECISION;
use crate::errors::{Result, ValidationError};
use crate::hierarchy::{BreadcrumbEntry, CatalogueEntity, HierarchyObserver, HierarchyResolver};
use crate::permissions::{BulkActionResult, Caller, CataloguePermissions};
use crate::settings::{CatalogueSettings, SiteConfigTrait};

pub struct ProductService {
    repository: Arc<dyn ProductRepositoryTrait>,
    category_repository: Arc<dyn CategoryRepositoryTrait>,
    site_config: Arc<dyn SiteConfigTrait>,
    permissions: Arc<CataloguePermissions>,
    observers: Vec<Arc<dyn HierarchyObserver>>,
}

impl ProductService {
    pub fn new(
        repository: Arc<dyn ProductRepositoryTrait>,
        category_repository: Arc<dyn CategoryRepositoryTrait>,
        site_config: Arc<dyn SiteConfigTrait>,
        permissions: Arc<CataloguePermissions>,
    ) -> Self {
        Self {
            repository,
            category_repository,
            site_config,
            permissions,
            observers: Vec::new(),
        }
    }

    /// Registers an observer on every resolver this service builds.
    pub fn with_observer(mut self, observer: Arc<dyn HierarchyObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Write-path checks. A blank title is accepted here: it yields a stock
    /// ID of just the separator and the ID, so creation always completes.
    fn validate(
        stock_id: Option<&str>,
        price: Decimal,
        settings: &CatalogueSettings,
    ) -> Result<()> {
        let has_stock_id = stock_id.is_some_and(|s| !s.trim().is_empty());
        if !settings.auto_stock_id && !has_stock_id {
            return Err(ValidationError::MissingField("stockId".to_string()).into());
        }

        if price.is_sign_negative() {
            return Err(
                ValidationError::InvalidInput("Price cannot be negative".to_string()).into(),
            );
        }

        Ok(())
    }

    /// Post-write hook: fills in a missing stock ID with exactly one more
    /// write. The record returned from that write is not hooked again.
    async fn after_write(&self, product: Product, settings: &CatalogueSettings) -> Result<Product> {
        if product.has_stock_id() || !settings.auto_stock_id {
            return Ok(product);
        }

        let stock_id = product.generate_stock_id();
        debug!(
            "Generated stock ID {} for product {}",
            stock_id, product.id
        );

        self.repository
            .update(Product {
                stock_id: Some(stock_id),
                ..product
            })
            .await
    }

    fn sort_by_title(products: &mut [Product]) {
        products.sort_by(|a, b| a.title.cmp(&b.title).then_with(|| a.id.cmp(&b.id)));
    }
}

#[async_trait]
impl ProductServiceTrait for ProductService {
    fn get_product(&self, product_id: ProductId) -> Result<Product> {
        self.repository.get_by_id(product_id)
    }

    fn list_products(&self) -> Result<Vec<Product>> {
        let mut products = self.repository.list()?;
        Self::sort_by_title(&mut products);
        Ok(products)
    }

    fn search_products(&self, query: &str) -> Result<Vec<Product>> {
        let needle = query.trim().to_lowercase();
        let matches = |value: Option<&str>| {
            value.is_some_and(|v| v.to_lowercase().contains(&needle))
        };

        let mut products: Vec<Product> = self
            .repository
            .list()?
            .into_iter()
            .filter(|p| {
                needle.is_empty()
                    || matches(Some(p.title.as_str()))
                    || matches(p.content.as_deref())
                    || matches(p.stock_id.as_deref())
            })
            .collect();
        Self::sort_by_title(&mut products);
        Ok(products)
    }

    fn hierarchy_resolver(&self) -> Result<HierarchyResolver> {
        let tree = CategoryTree::from_categories(self.category_repository.list()?);
        let settings = self.site_config.get_settings()?;
        let resolver = self
            .observers
            .iter()
            .cloned()
            .fold(HierarchyResolver::new(tree, settings), |resolver, observer| {
                resolver.with_observer(observer)
            });
        Ok(resolver)
    }

    fn product_breadcrumbs(&self, product_id: ProductId) -> Result<Vec<BreadcrumbEntry>> {
        let product = self.repository.get_by_id(product_id)?;
        let resolver = self.hierarchy_resolver()?;
        Ok(resolver.breadcrumbs(CatalogueEntity::Product(&product)))
    }

    fn export_products(&self) -> Result<String> {
        let products = self.list_products()?;
        let resolver = self.hierarchy_resolver()?;
        export_products_csv(&products, &resolver)
    }

    async fn create_product(&self, new_product: NewProduct) -> Result<Product> {
        let settings = self.site_config.get_settings()?;
        Self::validate(new_product.stock_id.as_deref(), new_product.price, &settings)?;

        let new_product = NewProduct {
            weight: new_product.weight.round_dp(WEIGHT_DECIMAL_PRECISION),
            ..new_product
        };

        let created = self.repository.create(new_product).await?;
        debug!("Created product {} ({})", created.id, created.title);
        self.after_write(created, &settings).await
    }

    async fn update_product(&self, product: Product) -> Result<Product> {
        let settings = self.site_config.get_settings()?;
        Self::validate(product.stock_id.as_deref(), product.price, &settings)?;

        let product = Product {
            weight: product.weight.round_dp(WEIGHT_DECIMAL_PRECISION),
            ..product
        };

        let updated = self.repository.update(product).await?;
        self.after_write(updated, &settings).await
    }

    async fn delete_product(&self, product_id: ProductId) -> Result<usize> {
        self.repository.delete(product_id).await
    }

    async fn set_products_disabled(
        &self,
        caller: &Caller,
        product_ids: &[ProductId],
        disabled: bool,
    ) -> Result<BulkActionResult> {
        let mut result = BulkActionResult::default();

        if !self.permissions.can_edit_product(caller) {
            result.skipped.extend_from_slice(product_ids);
            return Ok(result);
        }

        let changed = self.repository.set_disabled(product_ids, disabled).await?;
        result.updated.extend_from_slice(product_ids);

        info!(
            "{} {} products ({} changed)",
            if disabled { "Disabled" } else { "Enabled" },
            result.updated.len(),
            changed
        );
        Ok(result)
    }
}
