//! Query Engine
//!
//! 商品列表端点的过滤/排序。对目录快照做一次同步遍历，
//! 无副作用，不分页，返回完整结果集。

use serde::Deserialize;
use shared::models::Product;

/// Query parameters accepted by `GET /api/products`
///
/// - `category`: case-insensitive exact match; `"all"` or absent disables it
/// - `search`: case-insensitive substring match on name or description
/// - `sort`: `price-low` | `price-high` | `rating`; anything else keeps
///   insertion order
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductQuery {
    pub category: Option<String>,
    pub search: Option<String>,
    pub sort: Option<String>,
}

impl ProductQuery {
    fn category_filter(&self) -> Option<&str> {
        self.category
            .as_deref()
            .filter(|c| !c.is_empty() && !c.eq_ignore_ascii_case("all"))
    }

    fn search_filter(&self) -> Option<&str> {
        self.search.as_deref().filter(|s| !s.is_empty())
    }
}

/// Filter and sort a catalog snapshot
///
/// Filters compose with AND. Sorts are stable, so ties keep their prior
/// relative order.
pub fn list(mut products: Vec<Product>, query: &ProductQuery) -> Vec<Product> {
    if let Some(category) = query.category_filter() {
        let wanted = category.to_lowercase();
        products.retain(|p| p.category.to_lowercase() == wanted);
    }

    if let Some(search) = query.search_filter() {
        let needle = search.to_lowercase();
        products.retain(|p| {
            p.name.to_lowercase().contains(&needle)
                || p.description.to_lowercase().contains(&needle)
        });
    }

    match query.sort.as_deref() {
        Some("price-low") => products.sort_by(|a, b| a.price.total_cmp(&b.price)),
        Some("price-high") => products.sort_by(|a, b| b.price.total_cmp(&a.price)),
        Some("rating") => products.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        _ => {}
    }

    products
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed::seed_products;

    fn query(category: Option<&str>, search: Option<&str>, sort: Option<&str>) -> ProductQuery {
        ProductQuery {
            category: category.map(str::to_string),
            search: search.map(str::to_string),
            sort: sort.map(str::to_string),
        }
    }

    #[test]
    fn no_filters_returns_everything_in_order() {
        let products = seed_products();
        let ids: Vec<String> = list(products.clone(), &ProductQuery::default())
            .into_iter()
            .map(|p| p.id)
            .collect();
        let expected: Vec<String> = products.into_iter().map(|p| p.id).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn category_filter_is_case_insensitive_exact() {
        let result = list(seed_products(), &query(Some("electronics"), None, None));
        assert_eq!(result.len(), 6);
        assert!(result.iter().all(|p| p.category == "Electronics"));
    }

    #[test]
    fn category_all_disables_the_filter() {
        let result = list(seed_products(), &query(Some("all"), None, None));
        assert_eq!(result.len(), seed_products().len());
    }

    #[test]
    fn search_matches_name_or_description() {
        // "wireless" appears in two names; "ergonomics" only in a description
        let by_name = list(seed_products(), &query(None, Some("WIRELESS"), None));
        assert!(by_name.iter().any(|p| p.id == "1"));
        assert!(by_name.iter().any(|p| p.id == "5"));

        let by_description = list(seed_products(), &query(None, Some("ergonomics"), None));
        assert_eq!(by_description.len(), 1);
        assert_eq!(by_description[0].id, "7");
    }

    #[test]
    fn filters_compose_with_and() {
        let result = list(
            seed_products(),
            &query(Some("Electronics"), Some("wireless"), None),
        );
        assert!(result.iter().all(|p| {
            p.category == "Electronics"
                && (p.name.to_lowercase().contains("wireless")
                    || p.description.to_lowercase().contains("wireless"))
        }));
        assert!(!result.is_empty());
    }

    #[test]
    fn price_low_is_non_decreasing() {
        let result = list(seed_products(), &query(None, None, Some("price-low")));
        assert!(result.windows(2).all(|w| w[0].price <= w[1].price));
    }

    #[test]
    fn price_high_is_non_increasing() {
        let result = list(seed_products(), &query(None, None, Some("price-high")));
        assert!(result.windows(2).all(|w| w[0].price >= w[1].price));
    }

    #[test]
    fn rating_is_non_increasing() {
        let result = list(seed_products(), &query(None, None, Some("rating")));
        assert!(result.windows(2).all(|w| w[0].rating >= w[1].rating));
    }

    #[test]
    fn unknown_sort_keeps_insertion_order() {
        let result = list(seed_products(), &query(None, None, Some("newest")));
        let expected: Vec<String> = seed_products().into_iter().map(|p| p.id).collect();
        let ids: Vec<String> = result.into_iter().map(|p| p.id).collect();
        assert_eq!(ids, expected);
    }
}
