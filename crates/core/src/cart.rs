//! Cart line items.
//!
//! The cart is fixed for the lifetime of a checkout: there are no add, remove,
//! or quantity operations.

use serde::{Deserialize, Serialize};

use crate::types::{CartItemId, Price};

/// A single line in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: CartItemId,
    pub name: String,
    pub unit_price: Price,
    pub quantity: u32,
}

impl CartItem {
    /// `unit_price * quantity`.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.unit_price.times(self.quantity)
    }
}

/// Immutable collection of cart items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create a cart from its items.
    #[must_use]
    pub const fn new(items: Vec<CartItem>) -> Self {
        Self { items }
    }

    /// Items in the order they were added.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Sum of every line total. Recomputed on each call.
    #[must_use]
    pub fn total(&self) -> Price {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CurrencyCode;

    fn item(id: u32, name: &str, cents: i64, quantity: u32) -> CartItem {
        CartItem {
            id: CartItemId::new(id),
            name: name.to_string(),
            unit_price: Price::from_cents(cents, CurrencyCode::USD),
            quantity,
        }
    }

    fn cafe_cart() -> Vec<CartItem> {
        vec![
            item(1, "Midnight Espresso", 450, 2),
            item(2, "Bloom Latte", 525, 1),
            item(3, "Dark Roast Coffee", 375, 1),
        ]
    }

    #[test]
    fn test_total_of_cafe_cart() {
        let cart = Cart::new(cafe_cart());
        assert_eq!(cart.total(), Price::from_cents(1800, CurrencyCode::USD));
        assert_eq!(cart.total().display(), "$18.00");
        assert_eq!(cart.item_count(), 4);
    }

    #[test]
    fn test_total_ignores_order() {
        let forward = Cart::new(cafe_cart());
        let mut items = cafe_cart();
        items.reverse();
        items.swap(0, 1);
        assert_eq!(Cart::new(items).total(), forward.total());
    }

    #[test]
    fn test_line_total() {
        let line = item(1, "Midnight Espresso", 450, 2);
        assert_eq!(line.line_total().display(), "$9.00");
    }

    #[test]
    fn test_empty_cart_total_is_zero() {
        assert_eq!(Cart::default().total().display(), "$0.00");
    }

    #[test]
    fn test_total_matches_sum_of_lines() {
        let items: Vec<_> = (1..=10)
            .map(|n| item(n, "Drip", i64::from(n) * 37, n))
            .collect();
        let expected: i64 = (1..=10).map(|n: i64| n * 37 * n).sum();
        assert_eq!(
            Cart::new(items).total(),
            Price::from_cents(expected, CurrencyCode::USD)
        );
    }
}
