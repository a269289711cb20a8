//! Cart State Machine
//!
//! 购物车是纯状态机：商品 id 到条目的映射，保持插入顺序，
//! 每个商品最多一个条目。所有转换都是同步纯函数；
//! 界面反馈 (如"已加入"提示) 由调用方负责，与状态转换解耦。

use serde::{Deserialize, Serialize};
use shared::models::{CartItem, Product};

/// Orders above this subtotal ship free
pub const FREE_SHIPPING_THRESHOLD: f64 = 50.0;

/// Flat shipping fee below the threshold
pub const FLAT_SHIPPING: f64 = 5.99;

/// Sales tax rate applied at checkout
pub const TAX_RATE: f64 = 0.08;

/// Shopping cart
///
/// Serializes as a plain array of cart items, the same shape the order
/// endpoint accepts as `items`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries in insertion order
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct products
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Quantity currently in the cart for a product
    pub fn quantity_of(&self, product_id: &str) -> u32 {
        self.items
            .iter()
            .find(|item| item.product.id == product_id)
            .map(|item| item.quantity)
            .unwrap_or(0)
    }

    /// Add a product
    ///
    /// If the product is already in the cart its quantity is incremented,
    /// otherwise a new entry is appended.
    pub fn add(&mut self, product: Product, quantity: u32) {
        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == product.id) {
            item.quantity += quantity;
        } else {
            self.items.push(CartItem::new(product, quantity));
        }
    }

    /// Overwrite an entry's quantity; zero removes the entry
    pub fn set_quantity(&mut self, product_id: &str, quantity: u32) {
        if quantity == 0 {
            self.remove(product_id);
            return;
        }
        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == product_id) {
            item.quantity = quantity;
        }
    }

    /// Remove an entry; no-op when the id is absent
    pub fn remove(&mut self, product_id: &str) {
        self.items.retain(|item| item.product.id != product_id);
    }

    /// Empty the cart
    pub fn clear(&mut self) {
        self.items.clear();
    }

    // ========== Derived values ==========

    /// Total number of units across all entries
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    pub fn subtotal(&self) -> f64 {
        self.items.iter().map(CartItem::line_total).sum()
    }

    pub fn shipping(&self) -> f64 {
        if self.subtotal() > FREE_SHIPPING_THRESHOLD {
            0.0
        } else {
            FLAT_SHIPPING
        }
    }

    /// Sales tax, charged at checkout only
    pub fn tax(&self) -> f64 {
        self.subtotal() * TAX_RATE
    }

    /// Cart page total: subtotal + shipping
    pub fn total(&self) -> f64 {
        self.subtotal() + self.shipping()
    }

    /// Checkout total: subtotal + shipping + tax
    pub fn checkout_total(&self) -> f64 {
        self.total() + self.tax()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, price: f64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {id}"),
            price,
            original_price: price,
            discount: 0,
            rating: 4.0,
            reviews: 1,
            image: "http://i".to_string(),
            category: "Electronics".to_string(),
            description: "d".to_string(),
            stock: 10,
            sold: 0,
        }
    }

    #[test]
    fn adding_same_product_twice_merges_quantities() {
        let mut cart = Cart::new();
        cart.add(product("1", 10.0), 1);
        cart.add(product("1", 10.0), 1);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.quantity_of("1"), 2);
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn set_quantity_zero_removes_the_entry() {
        let mut cart = Cart::new();
        cart.add(product("1", 10.0), 2);
        cart.set_quantity("1", 0);

        assert!(cart.is_empty());
    }

    #[test]
    fn remove_absent_id_is_a_no_op() {
        let mut cart = Cart::new();
        cart.add(product("1", 10.0), 1);
        cart.remove("2");

        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn insertion_order_is_preserved() {
        let mut cart = Cart::new();
        cart.add(product("3", 1.0), 1);
        cart.add(product("1", 1.0), 1);
        cart.add(product("2", 1.0), 1);
        cart.set_quantity("1", 5);

        let ids: Vec<&str> = cart.items().iter().map(|i| i.product.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
    }

    #[test]
    fn shipping_is_free_above_the_threshold() {
        let mut cart = Cart::new();
        cart.add(product("1", 49.99), 1);
        assert_eq!(cart.shipping(), FLAT_SHIPPING);

        // 恰好 50 不免运费，必须超过
        let mut exact = Cart::new();
        exact.add(product("2", 50.0), 1);
        assert_eq!(exact.shipping(), FLAT_SHIPPING);

        cart.add(product("3", 10.0), 1);
        assert_eq!(cart.shipping(), 0.0);
    }

    #[test]
    fn checkout_total_includes_tax() {
        let mut cart = Cart::new();
        cart.add(product("1", 100.0), 1);

        assert_eq!(cart.subtotal(), 100.0);
        assert_eq!(cart.shipping(), 0.0);
        assert!((cart.tax() - 8.0).abs() < 1e-9);
        assert!((cart.checkout_total() - 108.0).abs() < 1e-9);
    }

    #[test]
    fn clear_empties_everything() {
        let mut cart = Cart::new();
        cart.add(product("1", 10.0), 1);
        cart.add(product("2", 20.0), 3);
        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.subtotal(), 0.0);
    }
}
