//! Common serde helpers for lenient numeric fields
//!
//! 管理后台的表单以字符串提交数字字段 (price: "49.99")，而种子数据和
//! API 客户端提交原生 JSON 数字。这里的反序列化器同时接受两种格式：
//! - JSON number (49.99)
//! - numeric string ("49.99")
//!
//! 空字符串在可选字段中视为"未提供"；必填字段的不可解析输入直接报错，
//! 请求随之以 400 被拒绝。

use serde::{Deserialize, Deserializer, de};

/// Accepts a JSON number or a numeric string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Num(f64),
    Str(String),
}

impl NumberOrString {
    fn into_f64<E: de::Error>(self) -> Result<f64, E> {
        match self {
            NumberOrString::Num(n) => Ok(n),
            NumberOrString::Str(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| E::custom(format!("invalid numeric value: {s:?}"))),
        }
    }

    /// Empty strings count as "not provided".
    fn is_empty(&self) -> bool {
        matches!(self, NumberOrString::Str(s) if s.trim().is_empty())
    }
}

/// Deserialize a required f64 from a number or numeric string.
pub fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    NumberOrString::deserialize(deserializer)?.into_f64()
}

/// Deserialize an optional f64; null, missing and empty strings yield `None`.
pub fn lenient_opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(v) if v.is_empty() => Ok(None),
        Some(v) => v.into_f64().map(Some),
    }
}

/// Deserialize an optional non-negative integer; fractional input is truncated.
pub fn lenient_opt_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_opt_f64(deserializer)?.map(|n| n.max(0.0) as u32))
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Payload {
        #[serde(deserialize_with = "super::lenient_f64")]
        price: f64,
        #[serde(default, deserialize_with = "super::lenient_opt_u32")]
        stock: Option<u32>,
    }

    #[test]
    fn accepts_numbers_and_numeric_strings() {
        let p: Payload = serde_json::from_str(r#"{"price": 49.99, "stock": "12"}"#).unwrap();
        assert_eq!(p.price, 49.99);
        assert_eq!(p.stock, Some(12));

        let p: Payload = serde_json::from_str(r#"{"price": "10"}"#).unwrap();
        assert_eq!(p.price, 10.0);
        assert_eq!(p.stock, None);
    }

    #[test]
    fn empty_string_is_not_provided() {
        let p: Payload = serde_json::from_str(r#"{"price": "10", "stock": ""}"#).unwrap();
        assert_eq!(p.stock, None);
    }

    #[test]
    fn rejects_non_numeric_strings() {
        assert!(serde_json::from_str::<Payload>(r#"{"price": "free"}"#).is_err());
        assert!(serde_json::from_str::<Payload>(r#"{"price": ""}"#).is_err());
    }
}
