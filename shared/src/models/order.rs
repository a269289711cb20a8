//! Order Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::cart::CartItem;

/// Order status
///
/// Orders are immutable after creation; there is no transition endpoint,
/// so every stored order stays `pending`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
}

/// Customer contact and shipping details, stored as submitted
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomerInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

/// Order entity
///
/// `items` is a snapshot of the cart at submission time and `total` is the
/// client-computed amount, stored without recomputation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub items: Vec<CartItem>,
    pub total: f64,
    pub customer_info: CustomerInfo,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

/// Create order payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreate {
    pub items: Vec<CartItem>,
    pub total: f64,
    pub customer_info: CustomerInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::Pending).unwrap(),
            r#""pending""#
        );
    }

    #[test]
    fn customer_info_tolerates_missing_fields() {
        let info: CustomerInfo =
            serde_json::from_str(r#"{"firstName":"Ada","email":"ada@example.com"}"#).unwrap();
        assert_eq!(info.first_name, "Ada");
        assert_eq!(info.zip_code, "");
    }
}
