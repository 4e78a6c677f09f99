//! Stats Aggregator
//!
//! Rolls the product set up against the category set: overall totals
//! plus an active/inactive split per category. Products are joined on
//! the denormalized `category` name, not the reference id. Categories
//! with no products report zeros.

use std::collections::HashMap;

use serde::Serialize;

use crate::db::models::{Category, Product};

/// Per-category slice of the roll-up
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryStats {
    pub category_id: String,
    pub category_name: String,
    pub total_products: u64,
    pub active_products: u64,
    pub inactive_products: u64,
}

/// Full catalog roll-up
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    pub total_products: u64,
    pub active_products: u64,
    pub inactive_products: u64,
    pub category_stats: Vec<CategoryStats>,
}

/// Aggregate counts. Products are pre-indexed by category name, so the
/// join is O(products + categories) with output identical to the naive
/// per-category scan.
pub fn catalog_stats(products: &[Product], categories: &[Category]) -> CatalogStats {
    let mut total_products = 0u64;
    let mut active_products = 0u64;
    // category name -> (total, active)
    let mut by_category: HashMap<&str, (u64, u64)> = HashMap::new();

    for product in products {
        total_products += 1;
        if product.in_stock {
            active_products += 1;
        }
        if let Some(category) = product.category.as_deref() {
            let entry = by_category.entry(category).or_insert((0, 0));
            entry.0 += 1;
            if product.in_stock {
                entry.1 += 1;
            }
        }
    }

    let category_stats = categories
        .iter()
        .map(|category| {
            let (total, active) = by_category
                .get(category.name.as_str())
                .copied()
                .unwrap_or((0, 0));
            CategoryStats {
                category_id: category.id.clone(),
                category_name: category.name.clone(),
                total_products: total,
                active_products: active,
                inactive_products: total - active,
            }
        })
        .collect();

    CatalogStats {
        total_products,
        active_products,
        inactive_products: total_products - active_products,
        category_stats,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::{CategoryCreate, ProductCreate};

    fn category(name: &str) -> Category {
        Category::create(CategoryCreate {
            name: name.into(),
            slug: None,
            description: None,
            icon: None,
            image: None,
        })
    }

    fn product(category: Option<&str>, in_stock: bool) -> Product {
        Product::create(ProductCreate {
            name: "p".into(),
            slug: None,
            description: None,
            code: None,
            category: category.map(String::from),
            category_id: None,
            image: None,
            in_stock: Some(in_stock),
            featured: None,
            capacity: None,
            power: None,
            dimensions: None,
        })
    }

    #[test]
    fn splits_totals_by_stock_state() {
        let products = vec![
            product(Some("Screens"), true),
            product(Some("Screens"), false),
            product(Some("Crushers"), true),
        ];
        let categories = vec![category("Screens"), category("Crushers")];

        let stats = catalog_stats(&products, &categories);
        assert_eq!(stats.total_products, 3);
        assert_eq!(stats.active_products, 2);
        assert_eq!(stats.inactive_products, 1);

        let screens = &stats.category_stats[0];
        assert_eq!(screens.category_name, "Screens");
        assert_eq!(screens.total_products, 2);
        assert_eq!(screens.active_products, 1);
        assert_eq!(screens.inactive_products, 1);
    }

    #[test]
    fn empty_category_reports_zeros() {
        let stats = catalog_stats(&[product(Some("Screens"), true)], &[category("Conveyors")]);
        let conveyors = &stats.category_stats[0];
        assert_eq!(conveyors.total_products, 0);
        assert_eq!(conveyors.active_products, 0);
        assert_eq!(conveyors.inactive_products, 0);
    }

    #[test]
    fn category_totals_never_exceed_overall_total() {
        // One product has an orphaned category name, one has none
        let products = vec![
            product(Some("Screens"), true),
            product(Some("Deleted Category"), false),
            product(None, true),
        ];
        let categories = vec![category("Screens")];

        let stats = catalog_stats(&products, &categories);
        let summed: u64 = stats.category_stats.iter().map(|c| c.total_products).sum();
        assert!(summed <= stats.total_products);
        assert_eq!(summed, 1);
    }
}
