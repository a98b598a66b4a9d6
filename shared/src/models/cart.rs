//! Cart Model

use super::product::{Product, ProductId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One product entry in the cart
///
/// Persisted flattened: every product field plus `quantity`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    #[serde(flatten)]
    pub product: Product,
    /// Always >= 1 while the line is in a cart
    pub quantity: u32,
}

impl CartLine {
    /// New line with quantity 1
    pub fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    pub fn id(&self) -> ProductId {
        self.product.id
    }

    /// price × quantity, unrounded; saturates at `Decimal::MAX`
    pub fn subtotal(&self) -> Decimal {
        self.product
            .price
            .checked_mul(Decimal::from(self.quantity))
            .unwrap_or(Decimal::MAX)
    }
}

/// Sum of all line quantities
pub fn cart_count(lines: &[CartLine]) -> u64 {
    lines.iter().map(|line| u64::from(line.quantity)).sum()
}

/// Sum of price × quantity over all lines, unrounded
///
/// Prices are non-negative, so an overflowing total saturates at
/// `Decimal::MAX` instead of panicking.
pub fn cart_total(lines: &[CartLine]) -> Decimal {
    lines.iter().fold(Decimal::ZERO, |total, line| {
        total.checked_add(line.subtotal()).unwrap_or(Decimal::MAX)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Rating;

    fn product(id: ProductId, price: Decimal) -> Product {
        Product {
            id,
            title: format!("Product {}", id),
            price,
            category: "electronics".to_string(),
            description: String::new(),
            image: String::new(),
            rating: Rating::default(),
        }
    }

    #[test]
    fn test_line_serializes_flat() {
        let line = CartLine {
            product: product(7, Decimal::new(1999, 2)),
            quantity: 3,
        };
        let value = serde_json::to_value(&line).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["quantity"], 3);
        assert!(value.get("product").is_none());

        let back: CartLine = serde_json::from_value(value).unwrap();
        assert_eq!(back, line);
    }

    #[test]
    fn test_count_and_total() {
        let lines = vec![
            CartLine {
                product: product(1, Decimal::new(1050, 2)),
                quantity: 2,
            },
            CartLine::new(product(2, Decimal::new(333, 2))),
        ];
        assert_eq!(cart_count(&lines), 3);
        assert_eq!(cart_total(&lines), Decimal::new(2433, 2));
    }

    #[test]
    fn test_total_saturates_instead_of_overflowing() {
        let huge = CartLine {
            product: product(1, Decimal::from_i128_with_scale(100_000_000_000_000_000_000, 0)),
            quantity: u32::MAX,
        };
        assert_eq!(huge.subtotal(), Decimal::MAX);

        let lines = vec![
            CartLine::new(product(2, Decimal::MAX)),
            CartLine::new(product(3, Decimal::MAX)),
        ];
        assert_eq!(cart_total(&lines), Decimal::MAX);
        assert_eq!(cart_total(&[huge, lines[0].clone()]), Decimal::MAX);
    }

    #[test]
    fn test_empty_cart() {
        assert_eq!(cart_count(&[]), 0);
        assert_eq!(cart_total(&[]), Decimal::ZERO);
    }
}
