//! Cart Persistence
//!
//! 购物车在每次变更后整体写入一个 JSON 文件 (终端客户端的
//! local storage 等价物)，启动时读回。文件缺失或损坏时返回
//! 空购物车，不向用户抛错。

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::cart::Cart;

/// On-disk cart storage
#[derive(Debug, Clone)]
pub struct CartStorage {
    path: PathBuf,
}

impl CartStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the saved cart
    ///
    /// A missing or corrupt file yields an empty cart; the cause is only
    /// logged at debug level.
    pub fn load(&self) -> Cart {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::debug!(path = %self.path.display(), error = %e, "No saved cart");
                return Cart::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(cart) => cart,
            Err(e) => {
                tracing::debug!(path = %self.path.display(), error = %e, "Saved cart unreadable, starting empty");
                Cart::new()
            }
        }
    }

    /// Persist the whole cart, creating the parent directory if needed
    pub fn save(&self, cart: &Cart) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string(cart).map_err(io::Error::other)?;
        fs::write(&self.path, raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::Product;

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
    fn round_trip_preserves_the_cart() {
        let dir = tempfile::tempdir().unwrap();
        let storage = CartStorage::new(dir.path().join("cart.json"));

        let mut cart = Cart::new();
        cart.add(product("1", 49.99), 2);
        cart.add(product("5", 24.99), 1);

        storage.save(&cart).unwrap();
        assert_eq!(storage.load(), cart);
    }

    #[test]
    fn missing_file_yields_empty_cart() {
        let dir = tempfile::tempdir().unwrap();
        let storage = CartStorage::new(dir.path().join("cart.json"));

        assert!(storage.load().is_empty());
    }

    #[test]
    fn corrupt_file_yields_empty_cart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cart.json");
        std::fs::write(&path, "{not json").unwrap();

        let storage = CartStorage::new(path);
        assert!(storage.load().is_empty());
    }

    #[test]
    fn save_creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let storage = CartStorage::new(dir.path().join("nested/data/cart.json"));

        storage.save(&Cart::new()).unwrap();
        assert!(storage.path().exists());
    }
}
