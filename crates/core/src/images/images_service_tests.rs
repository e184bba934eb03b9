#[cfg(test)]
mod tests {
    use crate::errors::Result;
    use crate::images::{
        primary_display_image, sorted_images_or_default, GeneratedPlaceholder, ImageRef,
        PlaceholderImageTrait, NO_IMAGE_NAME,
    };
    use crate::products::{Product, ProductImage};
    use crate::settings::{CatalogueSettings, SiteConfigTrait};
    use chrono::{NaiveDate, NaiveDateTime};
    use rust_decimal::Decimal;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn timestamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn product(images: Vec<ProductImage>) -> Product {
        Product {
            id: 7,
            title: "Canvas Tote".to_string(),
            stock_id: None,
            content: None,
            content_summary: None,
            price: Decimal::ZERO,
            weight: Decimal::ZERO,
            disabled: false,
            category_ids: Vec::new(),
            images,
            tags: Vec::new(),
            related_products: Vec::new(),
            created_at: timestamp(),
            updated_at: timestamp(),
        }
    }

    fn image(id: i64, name: &str, sort_order: i32) -> ProductImage {
        ProductImage {
            image: ImageRef::new(id, name, format!("/assets/{}", name)),
            sort_order,
        }
    }

    // --- Mock site configuration that counts default image lookups ---
    struct CountingSiteConfig {
        default_image: Option<ImageRef>,
        lookups: AtomicUsize,
    }

    impl CountingSiteConfig {
        fn new(default_image: Option<ImageRef>) -> Self {
            Self {
                default_image,
                lookups: AtomicUsize::new(0),
            }
        }
    }

    impl SiteConfigTrait for CountingSiteConfig {
        fn get_settings(&self) -> Result<CatalogueSettings> {
            Ok(CatalogueSettings::default())
        }

        fn default_product_image(&self) -> Option<ImageRef> {
            self.lookups.fetch_add(1, Ordering::SeqCst);
            self.default_image.clone()
        }
    }

    struct FixedPlaceholder;

    impl PlaceholderImageTrait for FixedPlaceholder {
        fn generate_no_image(&self) -> ImageRef {
            ImageRef {
                id: None,
                name: "custom-placeholder.png".to_string(),
                title: "Placeholder".to_string(),
                url: "/custom-placeholder.png".to_string(),
                width: 50,
                height: 50,
            }
        }
    }

    #[test]
    fn test_primary_image_is_lowest_sort_position() {
        let product = product(vec![
            image(1, "back.jpg", 3),
            image(2, "front.jpg", 1),
            image(3, "side.jpg", 2),
        ]);
        let site_config = CountingSiteConfig::new(None);

        let primary = primary_display_image(&product, &site_config, None);
        assert_eq!(primary.name, "front.jpg");
        assert_eq!(site_config.lookups.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_sorted_images_keep_stored_order_on_ties() {
        let product = product(vec![image(1, "a.jpg", 1), image(2, "b.jpg", 1)]);
        let site_config = CountingSiteConfig::new(None);

        let names: Vec<String> = sorted_images_or_default(&product, &site_config, None)
            .into_iter()
            .map(|i| i.name)
            .collect();
        assert_eq!(names, vec!["a.jpg", "b.jpg"]);
    }

    #[test]
    fn test_site_default_used_when_product_has_no_images() {
        let default_image = ImageRef::new(99, "default.png", "/assets/default.png");
        let site_config = CountingSiteConfig::new(Some(default_image.clone()));

        let primary = primary_display_image(&product(Vec::new()), &site_config, None);
        assert_eq!(primary, default_image);
        assert_eq!(site_config.lookups.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_supplied_placeholder_used_without_site_default() {
        let site_config = CountingSiteConfig::new(None);

        let primary =
            primary_display_image(&product(Vec::new()), &site_config, Some(&FixedPlaceholder));
        assert_eq!(primary.name, "custom-placeholder.png");
    }

    #[test]
    fn test_generated_placeholder_when_nothing_is_configured() {
        let site_config = CountingSiteConfig::new(None);

        let images = sorted_images_or_default(&product(Vec::new()), &site_config, None);
        assert_eq!(images.len(), 1);
        assert!(images[0].is_placeholder());
        assert_eq!(images[0].name, NO_IMAGE_NAME);
        assert_eq!(images[0], GeneratedPlaceholder::default().generate_no_image());
    }

    #[test]
    fn test_default_image_without_url_is_ignored() {
        let mut broken = ImageRef::new(5, "missing.png", "");
        broken.url.clear();
        let site_config = CountingSiteConfig::new(Some(broken));

        let primary = primary_display_image(&product(Vec::new()), &site_config, None);
        assert!(primary.is_placeholder());
    }
}
