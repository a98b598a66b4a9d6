//! Product Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Catalog product identifier (assigned by the remote API)
pub type ProductId = i64;

/// Product entity, as returned by `GET /products`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    /// Unit price, non-negative
    pub price: Decimal,
    pub category: String,
    pub description: String,
    /// Image URL
    pub image: String,
    #[serde(default)]
    pub rating: Rating,
}

/// Aggregated customer rating
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rating {
    /// Average score, 0-5
    pub rate: f64,
    /// Number of ratings
    pub count: u64,
}

impl Product {
    /// Case-insensitive substring match on title or category.
    ///
    /// `needle` must already be lower-cased.
    pub fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.category.to_lowercase().contains(needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &str = r#"{
        "id": 1,
        "title": "Fjallraven - Foldsack No. 1 Backpack, Fits 15 Laptops",
        "price": 109.95,
        "description": "Your perfect pack for everyday use and walks in the forest.",
        "category": "men's clothing",
        "image": "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg",
        "rating": { "rate": 3.9, "count": 120 }
    }"#;

    #[test]
    fn test_deserialize_api_payload() {
        let product: Product = serde_json::from_str(PAYLOAD).unwrap();
        assert_eq!(product.id, 1);
        assert_eq!(product.price, Decimal::new(10995, 2));
        assert_eq!(product.category, "men's clothing");
        assert_eq!(product.rating.count, 120);
    }

    #[test]
    fn test_integer_price() {
        let json = r#"{"id":2,"title":"Mug","price":10,"description":"","category":"home","image":""}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.price, Decimal::from(10));
        assert_eq!(product.rating, Rating::default());
    }

    #[test]
    fn test_matches_title_or_category() {
        let product: Product = serde_json::from_str(PAYLOAD).unwrap();
        assert!(product.matches("backpack"));
        assert!(product.matches("men's"));
        assert!(product.matches("fold"));
        assert!(!product.matches("jewelery"));
    }
}
