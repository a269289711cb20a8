//! Shared types for the ShopHub storefront
//!
//! Common domain models used by both the server and the client crates:
//! products, orders, cart items, and the serde helpers that keep the wire
//! format compatible with the storefront admin forms (which submit numeric
//! fields as strings).

pub mod models;

// Re-exports
pub use models::{
    CartItem, CustomerInfo, Order, OrderCreate, OrderStatus, Product, ProductCreate, ProductUpdate,
};
pub use serde::{Deserialize, Serialize};
