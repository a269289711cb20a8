//! Product Model

use serde::{Deserialize, Serialize};

use super::serde_helpers::{lenient_f64, lenient_opt_f64, lenient_opt_u32};

/// Product entity
///
/// `id` is a numeric string assigned by the server and never changes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
    /// Pre-discount price, shown struck through in listings
    pub original_price: f64,
    /// Discount in percentage (informational, not derived from prices)
    pub discount: u32,
    /// Average rating 0-5
    pub rating: f64,
    /// Review count
    pub reviews: u32,
    pub image: String,
    pub category: String,
    pub description: String,
    pub stock: u32,
    /// Units sold (informational)
    pub sold: u32,
}

/// Create product payload
///
/// Numeric fields accept JSON numbers or numeric strings; everything except
/// `name` and `price` is optional and defaulted on creation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCreate {
    pub name: String,
    #[serde(deserialize_with = "lenient_f64")]
    pub price: f64,
    #[serde(default, deserialize_with = "lenient_opt_f64")]
    pub original_price: Option<f64>,
    #[serde(default, deserialize_with = "lenient_opt_u32")]
    pub discount: Option<u32>,
    #[serde(default, deserialize_with = "lenient_opt_f64")]
    pub rating: Option<f64>,
    #[serde(default, deserialize_with = "lenient_opt_u32")]
    pub reviews: Option<u32>,
    pub image: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_u32")]
    pub stock: Option<u32>,
    #[serde(default, deserialize_with = "lenient_opt_u32")]
    pub sold: Option<u32>,
}

/// Update product payload
///
/// Provided fields are shallow-merged onto the existing record. The id is
/// immutable; an `id` key in the payload is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdate {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_f64")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "lenient_opt_f64")]
    pub original_price: Option<f64>,
    #[serde(default, deserialize_with = "lenient_opt_u32")]
    pub discount: Option<u32>,
    #[serde(default, deserialize_with = "lenient_opt_f64")]
    pub rating: Option<f64>,
    #[serde(default, deserialize_with = "lenient_opt_u32")]
    pub reviews: Option<u32>,
    pub image: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_u32")]
    pub stock: Option<u32>,
    #[serde(default, deserialize_with = "lenient_opt_u32")]
    pub sold: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_uses_camel_case_wire_names() {
        let product = Product {
            id: "1".to_string(),
            name: "Test".to_string(),
            price: 10.0,
            original_price: 15.0,
            discount: 33,
            rating: 4.5,
            reviews: 10,
            image: "http://i".to_string(),
            category: "Electronics".to_string(),
            description: "d".to_string(),
            stock: 5,
            sold: 2,
        };

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["originalPrice"], 15.0);
        assert!(json.get("original_price").is_none());
    }

    #[test]
    fn create_accepts_admin_form_strings() {
        let payload: ProductCreate = serde_json::from_str(
            r#"{"name":"X","price":"10","stock":"5","category":"Y","image":"http://i","description":"d","discount":""}"#,
        )
        .unwrap();
        assert_eq!(payload.price, 10.0);
        assert_eq!(payload.stock, Some(5));
        assert_eq!(payload.discount, None);
    }

    #[test]
    fn update_ignores_id_field() {
        let payload: ProductUpdate =
            serde_json::from_str(r#"{"id":"999","price":"20"}"#).unwrap();
        assert_eq!(payload.price, Some(20.0));
    }
}
