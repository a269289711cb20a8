//! ShopHub Client - HTTP client and cart state for the storefront
//!
//! Provides network-based HTTP calls to the ShopHub API, plus the
//! client-side cart: a pure state machine ([`cart::Cart`]) and its
//! on-disk persistence ([`storage::CartStorage`], the local-storage
//! analog for a terminal client).

pub mod cart;
pub mod config;
pub mod error;
pub mod http;
pub mod storage;

pub use cart::{Cart, FLAT_SHIPPING, FREE_SHIPPING_THRESHOLD, TAX_RATE};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::{ProductFilter, ShopClient};
pub use storage::CartStorage;

// Re-export shared types for convenience
pub use shared::models::{CartItem, CustomerInfo, Order, OrderCreate, Product};
