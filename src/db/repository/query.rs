//! Query Engine
//!
//! Filter predicates, substring search, sort keys and pagination math
//! for the product listing. The in-memory backend applies these
//! directly; the persistent backend translates the same parsed
//! parameters into native query constructs with identical semantics.
//!
//! Search never reorders results: the requested sort key is the only
//! ordering, with or without a search term.

use serde::Serialize;

use crate::db::models::Product;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 50;

/// Upper clamp for page and limit. Keeps `skip()` products within the
/// i64 range the persistent backend binds.
pub const MAX_PAGE_VALUE: u64 = u32::MAX as u64;

/// Exact-match constraints, AND-combined; `None` means unconstrained.
/// Only `category` and `in_stock` are supported filter fields.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    pub category: Option<String>,
    pub in_stock: Option<bool>,
}

impl ProductFilter {
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(category) = &self.category {
            if product.category.as_deref() != Some(category.as_str()) {
                return false;
            }
        }
        if let Some(in_stock) = self.in_stock {
            if product.in_stock != in_stock {
                return false;
            }
        }
        true
    }
}

/// Parse the raw `inStock` query value: only the literal strings
/// "true"/"false" constrain, anything else is unconstrained.
pub fn parse_in_stock(raw: Option<&str>) -> Option<bool> {
    match raw {
        Some("true") => Some(true),
        Some("false") => Some(false),
        _ => None,
    }
}

/// Case-insensitive substring match over name, code and description.
pub fn search_matches(product: &Product, term: &str) -> bool {
    let term = term.to_lowercase();
    if product.name.to_lowercase().contains(&term) {
        return true;
    }
    if let Some(code) = &product.code {
        if code.to_lowercase().contains(&term) {
            return true;
        }
    }
    if let Some(description) = &product.description {
        if description.to_lowercase().contains(&term) {
            return true;
        }
    }
    false
}

/// Named sort key; default is descending creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Newest,
    Oldest,
    NameAsc,
    NameDesc,
}

impl SortKey {
    /// Unknown or missing keys fall back to the default.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("oldest") => SortKey::Oldest,
            Some("name") | Some("name-asc") => SortKey::NameAsc,
            Some("name-desc") => SortKey::NameDesc,
            _ => SortKey::Newest,
        }
    }
}

/// Stable sort, so equal keys keep their contract order.
pub fn sort_products(products: &mut [Product], key: SortKey) {
    match key {
        SortKey::Newest => products.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortKey::Oldest => products.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        SortKey::NameAsc => products.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase())),
        SortKey::NameDesc => products.sort_by(|a, b| b.name.to_lowercase().cmp(&a.name.to_lowercase())),
    }
}

/// 1-based pagination window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParams {
    pub page: u64,
    pub limit: u64,
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PageParams {
    /// Coerce raw query values: non-numeric or non-positive input is
    /// replaced by the default, never an error.
    pub fn from_raw(page: Option<&str>, limit: Option<&str>) -> Self {
        Self {
            page: coerce_positive(page, DEFAULT_PAGE),
            limit: coerce_positive(limit, DEFAULT_LIMIT),
        }
    }

    pub fn skip(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }
}

fn coerce_positive(raw: Option<&str>, default: u64) -> u64 {
    raw.and_then(|s| s.trim().parse::<u64>().ok())
        .filter(|v| *v >= 1)
        .map(|v| v.min(MAX_PAGE_VALUE))
        .unwrap_or(default)
}

/// Take at most `limit` records starting at the page's offset.
pub fn paginate<T>(items: Vec<T>, page: &PageParams) -> Vec<T> {
    items
        .into_iter()
        .skip(page.skip() as usize)
        .take(page.limit as usize)
        .collect()
}

/// Fully parsed listing query
#[derive(Debug, Clone, Default)]
pub struct ProductQuery {
    pub filter: ProductFilter,
    pub search: Option<String>,
    pub sort: SortKey,
    pub page: PageParams,
}

/// Pagination block reported alongside every listing page
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub page: u64,
    pub limit: u64,
    pub total: u64,
    pub total_pages: u64,
    pub has_more: bool,
}

impl PageInfo {
    pub fn new(params: &PageParams, total: u64, returned: usize) -> Self {
        Self {
            page: params.page,
            limit: params.limit,
            total,
            total_pages: total.div_ceil(params.limit),
            has_more: params.skip().saturating_add(returned as u64) < total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::ProductCreate;

    fn product(name: &str, category: Option<&str>, in_stock: bool) -> Product {
        let mut p = Product::create(ProductCreate {
            name: name.into(),
            slug: None,
            description: Some(format!("{name} description")),
            code: Some("CS-1024".into()),
            category: category.map(String::from),
            category_id: None,
            image: None,
            in_stock: Some(in_stock),
            featured: None,
            capacity: None,
            power: None,
            dimensions: None,
        });
        // Distinct timestamps for deterministic sorting
        p.created_at = chrono::Utc::now() + chrono::Duration::milliseconds(name.len() as i64);
        p
    }

    #[test]
    fn filter_is_exact_match_and_combined() {
        let filter = ProductFilter {
            category: Some("Screens".into()),
            in_stock: Some(true),
        };
        assert!(filter.matches(&product("a", Some("Screens"), true)));
        assert!(!filter.matches(&product("b", Some("Screens"), false)));
        assert!(!filter.matches(&product("c", Some("Crushers"), true)));
        assert!(!filter.matches(&product("d", None, true)));
    }

    #[test]
    fn absent_filter_key_means_unconstrained() {
        let filter = ProductFilter::default();
        assert!(filter.matches(&product("a", None, false)));
    }

    #[test]
    fn in_stock_only_parses_literal_booleans() {
        assert_eq!(parse_in_stock(Some("true")), Some(true));
        assert_eq!(parse_in_stock(Some("false")), Some(false));
        assert_eq!(parse_in_stock(Some("yes")), None);
        assert_eq!(parse_in_stock(None), None);
    }

    #[test]
    fn search_is_case_insensitive_over_all_fields() {
        let p = product("Vibrating Screen", Some("Screens"), true);
        assert!(search_matches(&p, "vIbRaTiNg"));
        assert!(search_matches(&p, "cs-10"));
        assert!(search_matches(&p, "DESCRIPTION"));
        assert!(!search_matches(&p, "crusher"));
    }

    #[test]
    fn page_params_coerce_invalid_input_to_defaults() {
        let params = PageParams::from_raw(Some("abc"), Some("0"));
        assert_eq!(params.page, DEFAULT_PAGE);
        assert_eq!(params.limit, DEFAULT_LIMIT);

        let params = PageParams::from_raw(None, None);
        assert_eq!(params.page, 1);
        assert_eq!(params.limit, 50);

        let params = PageParams::from_raw(Some("3"), Some("10"));
        assert_eq!(params.skip(), 20);
    }

    #[test]
    fn extreme_page_values_clamp_instead_of_overflowing() {
        let params =
            PageParams::from_raw(Some("9999999999999999999"), Some("9999999999999999999"));
        assert_eq!(params.page, MAX_PAGE_VALUE);
        assert_eq!(params.limit, MAX_PAGE_VALUE);
        assert!(params.skip() <= i64::MAX as u64);

        // Hand-built params past the clamp still never panic
        let params = PageParams {
            page: u64::MAX,
            limit: u64::MAX,
        };
        assert_eq!(params.skip(), u64::MAX);
        let info = PageInfo::new(&params, 10, 0);
        assert!(!info.has_more);
    }

    #[test]
    fn paginate_returns_window_at_offset() {
        let items: Vec<u64> = (0..25).collect();
        let page = PageParams { page: 3, limit: 10 };
        assert_eq!(paginate(items, &page), (20..25).collect::<Vec<u64>>());
    }

    #[test]
    fn page_info_math() {
        let params = PageParams { page: 2, limit: 10 };
        let info = PageInfo::new(&params, 25, 10);
        assert_eq!(info.total_pages, 3);
        assert!(info.has_more);

        let params = PageParams { page: 3, limit: 10 };
        let info = PageInfo::new(&params, 25, 5);
        assert!(!info.has_more);

        let info = PageInfo::new(&PageParams::default(), 0, 0);
        assert_eq!(info.total_pages, 0);
        assert!(!info.has_more);
    }

    #[test]
    fn sort_orders_by_requested_key() {
        let mut items = vec![
            product("Beta", None, true),
            product("alpha", None, true),
            product("Gamma 12", None, true),
        ];
        sort_products(&mut items, SortKey::NameAsc);
        let names: Vec<&str> = items.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["alpha", "Beta", "Gamma 12"]);

        sort_products(&mut items, SortKey::Newest);
        assert_eq!(items[0].name, "Gamma 12");
    }
}
