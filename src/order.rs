//! Order snapshot taken from the form at submit time.

use crate::config::MODELS;
use serde::{Deserialize, Serialize};

/// Everything the order form collects.
///
/// Built from the current field values when the user submits, validated,
/// and dropped. Nothing here is stored or sent anywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderSubmission {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub model: String,
    pub address: String,
    pub consent: bool,
}

/// A product the landing page advertises.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductModel {
    pub id: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    pub price_rub: u32,
    pub image: &'static str,
}

/// Look up a catalog entry by id.
pub fn find_model(id: &str) -> Option<&'static ProductModel> {
    MODELS.iter().find(|m| m.id == id)
}

/// Format a price the way the page shows it: `49 990 ₽`.
pub fn format_price_rub(price: u32) -> String {
    let digits = price.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(ch);
    }
    out.push_str(" ₽");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_lookup() {
        assert_eq!(find_model("X3").map(|m| m.title), Some("X3 Pro"));
        assert!(find_model("Z9").is_none());
    }

    #[test]
    fn price_groups_thousands() {
        assert_eq!(format_price_rub(49_990), "49 990 ₽");
        assert_eq!(format_price_rub(990), "990 ₽");
        assert_eq!(format_price_rub(1_234_567), "1 234 567 ₽");
    }

    #[test]
    fn missing_fields_deserialize_to_defaults() {
        let order: OrderSubmission = serde_json::from_str(r#"{"name":"Иван"}"#).unwrap();
        assert_eq!(order.name, "Иван");
        assert!(order.phone.is_empty());
        assert!(!order.consent);
    }
}
