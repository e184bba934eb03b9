#[cfg(test)]
mod tests {
    use crate::categories::{Category, CategoryTree};
    use crate::hierarchy::HierarchyResolver;
    use crate::images::ImageRef;
    use crate::products::{
        export_products_csv, Product, ProductImage, ProductTag, RelatedProduct, EXPORT_COLUMNS,
    };
    use crate::settings::CatalogueSettings;
    use chrono::{NaiveDate, NaiveDateTime};
    use rust_decimal_macros::dec;

    fn timestamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn resolver() -> HierarchyResolver {
        let category = |id: i64, title: &str, parent_id: Option<i64>| Category {
            id,
            title: title.to_string(),
            parent_id,
            sort_order: 0,
            disabled: false,
            created_at: timestamp(),
            updated_at: timestamp(),
        };
        let tree = CategoryTree::from_categories(vec![
            category(1, "Clothing", None),
            category(2, "Hats", Some(1)),
        ]);
        HierarchyResolver::new(tree, CatalogueSettings::default())
    }

    fn product() -> Product {
        Product {
            id: 7,
            title: "Wool Hat".to_string(),
            stock_id: Some("WH-7".to_string()),
            content: Some("Warm, soft \"merino\" wool".to_string()),
            content_summary: None,
            price: dec!(24.50),
            weight: dec!(0.2),
            disabled: true,
            category_ids: vec![2],
            images: vec![ProductImage {
                image: ImageRef::new(3, "hat.jpg", "/hat.jpg"),
                sort_order: 0,
            }],
            tags: vec![
                ProductTag {
                    id: 1,
                    title: "Winter".to_string(),
                },
                ProductTag {
                    id: 2,
                    title: "Wool".to_string(),
                },
            ],
            related_products: vec![RelatedProduct {
                product_id: 8,
                title: "Wool Scarf".to_string(),
                stock_id: Some("WS-8".to_string()),
                sort_order: 0,
            }],
            created_at: timestamp(),
            updated_at: timestamp(),
        }
    }

    #[test]
    fn test_export_header_only_for_no_products() {
        let csv = export_products_csv(&[], &resolver()).unwrap();
        assert_eq!(csv.trim_end(), EXPORT_COLUMNS.join(","));
    }

    #[test]
    fn test_export_row_quotes_fields_with_separators() {
        let csv = export_products_csv(&[product()], &resolver()).unwrap();

        let mut reader = csv::Reader::from_reader(csv.as_bytes());
        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers.iter().collect::<Vec<_>>(), EXPORT_COLUMNS.to_vec());

        let record = reader.records().next().unwrap().unwrap();
        assert_eq!(&record[0], "7");
        assert_eq!(&record[1], "WH-7");
        assert_eq!(&record[3], "Warm, soft \"merino\" wool");
        assert_eq!(&record[4], "24.50");
        assert_eq!(&record[5], "Clothing > Hats");
        assert_eq!(&record[6], "Winter, Wool");
        assert_eq!(&record[7], "hat.jpg");
        assert_eq!(&record[8], "WS-8");
        assert_eq!(&record[9], "1");
    }
}
