//! Catalog Store
//!
//! 商品目录的仓储抽象和内存实现。

use parking_lot::RwLock;
use shared::models::{Product, ProductCreate, ProductUpdate};

use super::seed;

/// 新建商品未提供图片时使用的占位图
const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/500";

/// 未提供分类时的默认分类
const DEFAULT_CATEGORY: &str = "General";

/// Catalog repository
///
/// The API layer and query engine only depend on this trait, so the
/// in-memory store can be swapped for a persistent one without touching
/// either.
pub trait Catalog: Send + Sync {
    /// All products in insertion order
    fn list(&self) -> Vec<Product>;

    /// Look up a single product
    fn get(&self, id: &str) -> Option<Product>;

    /// Insert a new product; the store assigns a fresh id
    fn create(&self, data: ProductCreate) -> Product;

    /// Shallow-merge the provided fields onto an existing product
    fn update(&self, id: &str, data: ProductUpdate) -> Option<Product>;

    /// Remove a product; returns false when the id is unknown
    fn delete(&self, id: &str) -> bool;

    /// Unique category labels in first-seen order
    fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for product in self.list() {
            if !categories.contains(&product.category) {
                categories.push(product.category);
            }
        }
        categories
    }
}

struct CatalogInner {
    products: Vec<Product>,
    next_id: u64,
}

/// In-memory catalog store
///
/// 单个 RwLock 保护整个目录；每个操作是一次锁内的同步遍历，
/// 跨请求不提供事务性。
pub struct MemoryCatalog {
    inner: RwLock<CatalogInner>,
}

impl MemoryCatalog {
    /// Create a store with the given products; `next_id` seeds id assignment
    pub fn new(products: Vec<Product>, next_id: u64) -> Self {
        Self {
            inner: RwLock::new(CatalogInner { products, next_id }),
        }
    }

    /// Create a store pre-populated with the demo catalog
    pub fn with_seed() -> Self {
        Self::new(seed::seed_products(), seed::NEXT_PRODUCT_ID)
    }

    /// Create an empty store (tests)
    pub fn empty() -> Self {
        Self::new(Vec::new(), 1)
    }
}

impl Catalog for MemoryCatalog {
    fn list(&self) -> Vec<Product> {
        self.inner.read().products.clone()
    }

    fn get(&self, id: &str) -> Option<Product> {
        self.inner.read().products.iter().find(|p| p.id == id).cloned()
    }

    fn create(&self, data: ProductCreate) -> Product {
        let mut inner = self.inner.write();

        let id = inner.next_id.to_string();
        inner.next_id += 1;

        let product = Product {
            id,
            name: data.name,
            original_price: data.original_price.unwrap_or(data.price),
            price: data.price,
            discount: data.discount.unwrap_or(0),
            rating: data.rating.unwrap_or(0.0),
            reviews: data.reviews.unwrap_or(0),
            image: data
                .image
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
            category: data
                .category
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            description: data.description.unwrap_or_default(),
            stock: data.stock.unwrap_or(0),
            sold: data.sold.unwrap_or(0),
        };

        inner.products.push(product.clone());
        product
    }

    fn update(&self, id: &str, data: ProductUpdate) -> Option<Product> {
        let mut inner = self.inner.write();
        let product = inner.products.iter_mut().find(|p| p.id == id)?;

        if let Some(v) = data.name {
            product.name = v;
        }
        if let Some(v) = data.price {
            product.price = v;
        }
        if let Some(v) = data.original_price {
            product.original_price = v;
        }
        if let Some(v) = data.discount {
            product.discount = v;
        }
        if let Some(v) = data.rating {
            product.rating = v;
        }
        if let Some(v) = data.reviews {
            product.reviews = v;
        }
        if let Some(v) = data.image {
            product.image = v;
        }
        if let Some(v) = data.category {
            product.category = v;
        }
        if let Some(v) = data.description {
            product.description = v;
        }
        if let Some(v) = data.stock {
            product.stock = v;
        }
        if let Some(v) = data.sold {
            product.sold = v;
        }

        Some(product.clone())
    }

    fn delete(&self, id: &str) -> bool {
        let mut inner = self.inner.write();
        let before = inner.products.len();
        inner.products.retain(|p| p.id != id);
        inner.products.len() < before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_payload(name: &str, price: &str) -> ProductCreate {
        serde_json::from_value(serde_json::json!({ "name": name, "price": price })).unwrap()
    }

    #[test]
    fn create_assigns_sequential_ids_and_defaults() {
        let catalog = MemoryCatalog::empty();

        let first = catalog.create(create_payload("A", "10"));
        let second = catalog.create(create_payload("B", "20.5"));

        assert_eq!(first.id, "1");
        assert_eq!(second.id, "2");
        assert_eq!(first.original_price, 10.0);
        assert_eq!(first.discount, 0);
        assert_eq!(first.category, "General");
        assert_eq!(first.stock, 0);
    }

    #[test]
    fn update_merges_only_provided_fields() {
        let catalog = MemoryCatalog::empty();
        let created = catalog.create(create_payload("A", "10"));

        let update: ProductUpdate =
            serde_json::from_value(serde_json::json!({ "price": "12.5", "stock": 7 })).unwrap();
        let updated = catalog.update(&created.id, update).unwrap();

        assert_eq!(updated.price, 12.5);
        assert_eq!(updated.stock, 7);
        assert_eq!(updated.name, "A");
        assert_eq!(updated.original_price, 10.0);
    }

    #[test]
    fn update_unknown_id_is_none() {
        let catalog = MemoryCatalog::empty();
        assert!(catalog.update("42", ProductUpdate::default()).is_none());
    }

    #[test]
    fn delete_removes_exactly_one() {
        let catalog = MemoryCatalog::with_seed();
        let before = catalog.list().len();

        assert!(catalog.delete("1"));
        assert_eq!(catalog.list().len(), before - 1);
        assert!(catalog.get("1").is_none());

        assert!(!catalog.delete("no-such-id"));
        assert_eq!(catalog.list().len(), before - 1);
    }

    #[test]
    fn categories_are_unique_in_first_seen_order() {
        let catalog = MemoryCatalog::with_seed();
        let categories = catalog.categories();

        assert_eq!(categories, vec!["Electronics", "Wearables", "Accessories"]);
    }
}
