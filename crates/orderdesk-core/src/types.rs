//! # Domain Types
//!
//! Core domain types used throughout Orderdesk.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │     Order       │   │ PaymentMethod   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  name           │   │  products       │   │  Cash           │       │
//! │  │  price_cents    │   │  shipping_cents │   │  CreditCard     │       │
//! │  └─────────────────┘   │  discount_cents │   └─────────────────┘       │
//! │                        └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `Order` lives in the [`crate::order`] module; the value types it is built
//! from live here.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product available for ordering.
///
/// Products are immutable by convention: once constructed they are copied
/// into orders, never shared. `Clone` produces a fully independent value
/// (the name is an owned `String`), so mutating a clone can never be
/// observed through the original.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Display name shown on order lines.
    pub name: String,

    /// Price in cents (smallest currency unit).
    pub price_cents: i64,
}

impl Product {
    /// Creates a new product.
    pub fn new(name: impl Into<String>, price_cents: i64) -> Self {
        Product {
            name: name.into(),
            price_cents,
        }
    }

    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

/// Order-line format: `Product: <name>, Price: <price>`.
impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Product: {}, Price: {}", self.name, self.price())
    }
}

// =============================================================================
// Payment Method
// =============================================================================

/// How an order is paid for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Physical cash payment.
    Cash,
    /// Card payment on an external terminal.
    CreditCard,
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentMethod::Cash => write!(f, "Cash"),
            PaymentMethod::CreditCard => write!(f, "Credit Card"),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_price() {
        let product = Product::new("Laptop", 120_000);
        assert_eq!(product.price(), Money::from_cents(120_000));
    }

    #[test]
    fn test_product_display() {
        let product = Product::new("Laptop", 120_000);
        assert_eq!(product.to_string(), "Product: Laptop, Price: $1200.00");
    }

    /// A clone must be a fully independent copy: mutating it can never
    /// be observed through the original, and vice versa.
    #[test]
    fn test_product_clone_is_independent() {
        let original = Product::new("Laptop", 120_000);
        let mut copy = original.clone();

        assert_eq!(copy.name, "Laptop");
        assert_eq!(copy.price_cents, 120_000);

        copy.name.push_str(" Pro");
        copy.price_cents = 150_000;

        assert_eq!(original.name, "Laptop");
        assert_eq!(original.price_cents, 120_000);
    }

    #[test]
    fn test_payment_method_display() {
        assert_eq!(PaymentMethod::Cash.to_string(), "Cash");
        assert_eq!(PaymentMethod::CreditCard.to_string(), "Credit Card");
    }

    #[test]
    fn test_payment_method_serializes_snake_case() {
        let json = serde_json::to_string(&PaymentMethod::CreditCard).unwrap();
        assert_eq!(json, r#""credit_card""#);
    }
}
