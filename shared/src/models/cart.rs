//! Cart Item Model

use serde::{Deserialize, Serialize};

use super::product::Product;

/// Cart item - a product snapshot plus the desired quantity
///
/// The wire format is the product's fields with `quantity` merged in,
/// which is also the shape order items are submitted in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    #[serde(flatten)]
    pub product: Product,
    pub quantity: u32,
}

impl CartItem {
    pub fn new(product: Product, quantity: u32) -> Self {
        Self { product, quantity }
    }

    /// Line total for this entry
    pub fn line_total(&self) -> f64 {
        self.product.price * self.quantity as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product() -> Product {
        Product {
            id: "1".to_string(),
            name: "Headphones".to_string(),
            price: 49.99,
            original_price: 79.99,
            discount: 38,
            rating: 4.5,
            reviews: 1234,
            image: "http://i".to_string(),
            category: "Electronics".to_string(),
            description: "d".to_string(),
            stock: 50,
            sold: 2500,
        }
    }

    #[test]
    fn serializes_flattened() {
        let item = CartItem::new(product(), 2);
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["id"], "1");
        assert_eq!(json["quantity"], 2);
        assert_eq!(json["originalPrice"], 79.99);
    }

    #[test]
    fn line_total_scales_with_quantity() {
        let item = CartItem::new(product(), 3);
        assert!((item.line_total() - 149.97).abs() < 1e-9);
    }
}
