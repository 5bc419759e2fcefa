//! # Order Module
//!
//! Manages orders and the products they contain.
//!
//! ## Ownership Discipline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Order Ownership Rules                                │
//! │                                                                         │
//! │  Caller Action             Order State Change                           │
//! │  ─────────────             ──────────────────                           │
//! │                                                                         │
//! │  add_product(&p) ────────► products.push(p.clone())                     │
//! │                            (the caller keeps p; the order never         │
//! │                             stores the caller's value)                  │
//! │                                                                         │
//! │  order.clone() ──────────► fresh scalars + fresh clone of every         │
//! │                            contained product                            │
//! │                                                                         │
//! │  INVARIANT: every product held by an order is a private copy.           │
//! │  No product is ever shared between two orders, or between a             │
//! │  caller and an order.                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{PaymentMethod, Product};
use crate::MAX_ORDER_PRODUCTS;

// =============================================================================
// Order
// =============================================================================

/// An order: scalar charge fields plus an owned sequence of products.
///
/// ## Invariants
/// - Every product in `products` was cloned on the way in (`add_product`)
/// - Cloning an order deep-clones every product (owned `Vec<Product>`,
///   no shared ownership anywhere in the tree)
/// - Maximum products: [`MAX_ORDER_PRODUCTS`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Products in the order. Private: mutation goes through `add_product`
    /// so the clone-on-add invariant cannot be bypassed.
    products: Vec<Product>,

    /// Shipping cost in cents.
    pub shipping_cents: i64,

    /// Flat discount in cents.
    pub discount_cents: i64,

    /// How the order is paid.
    pub payment_method: PaymentMethod,

    /// When the order was created.
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Creates a new empty order.
    pub fn new(shipping_cents: i64, discount_cents: i64, payment_method: PaymentMethod) -> Self {
        Order {
            products: Vec::new(),
            shipping_cents,
            discount_cents,
            payment_method,
            created_at: Utc::now(),
        }
    }

    /// Adds a product to the order.
    ///
    /// ## Behavior
    /// The order stores `product.clone()`, never the caller's value. The
    /// caller may freely mutate or discard its product afterwards without
    /// affecting this order.
    ///
    /// ## Errors
    /// [`CoreError::OrderTooLarge`] once the order holds
    /// [`MAX_ORDER_PRODUCTS`] products.
    pub fn add_product(&mut self, product: &Product) -> CoreResult<()> {
        if self.products.len() >= MAX_ORDER_PRODUCTS {
            return Err(CoreError::OrderTooLarge {
                max: MAX_ORDER_PRODUCTS,
            });
        }

        self.products.push(product.clone());
        Ok(())
    }

    /// Returns the products in this order, in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Returns the number of products in the order.
    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    /// Checks if the order has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Returns the shipping cost as Money.
    #[inline]
    pub fn shipping(&self) -> Money {
        Money::from_cents(self.shipping_cents)
    }

    /// Returns the discount as Money.
    #[inline]
    pub fn discount(&self) -> Money {
        Money::from_cents(self.discount_cents)
    }

    /// Calculates the product subtotal (sum of product prices).
    pub fn subtotal(&self) -> Money {
        self.products
            .iter()
            .fold(Money::zero(), |acc, p| acc + p.price())
    }

    /// Calculates the grand total (subtotal + shipping - discount).
    pub fn total(&self) -> Money {
        self.subtotal() + self.shipping() - self.discount()
    }
}

/// Line-per-product format, then a summary line with the scalar charges.
impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for product in &self.products {
            writeln!(f, "{}", product)?;
        }
        write!(
            f,
            "Shipping Cost: {}, Discount: {}, Payment: {}",
            self.shipping(),
            self.discount(),
            self.payment_method
        )
    }
}

// =============================================================================
// Order Totals
// =============================================================================

/// Order totals summary for display or transfer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderTotals {
    pub product_count: usize,
    pub subtotal_cents: i64,
    pub shipping_cents: i64,
    pub discount_cents: i64,
    pub total_cents: i64,
}

impl From<&Order> for OrderTotals {
    fn from(order: &Order) -> Self {
        OrderTotals {
            product_count: order.product_count(),
            subtotal_cents: order.subtotal().cents(),
            shipping_cents: order.shipping_cents,
            discount_cents: order.discount_cents,
            total_cents: order.total().cents(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn test_order() -> Order {
        Order::new(5_000, 1_000, PaymentMethod::CreditCard)
    }

    #[test]
    fn test_add_product_stores_a_copy() {
        let mut order = test_order();
        let mut laptop = Product::new("Laptop", 120_000);

        order.add_product(&laptop).unwrap();

        // Mutating the caller's product must not reach into the order.
        laptop.name = "Tablet".to_string();
        laptop.price_cents = 1;

        assert_eq!(order.products()[0].name, "Laptop");
        assert_eq!(order.products()[0].price_cents, 120_000);
    }

    #[test]
    fn test_order_totals() {
        let mut order = test_order();
        order.add_product(&Product::new("Laptop", 120_000)).unwrap();
        order.add_product(&Product::new("Smartphone", 80_000)).unwrap();

        assert_eq!(order.subtotal().cents(), 200_000);
        // 2000.00 + 50.00 - 10.00
        assert_eq!(order.total().cents(), 204_000);

        let totals = OrderTotals::from(&order);
        assert_eq!(totals.product_count, 2);
        assert_eq!(totals.total_cents, 204_000);
    }

    #[test]
    fn test_order_clone_is_deep() {
        let mut order = test_order();
        order.add_product(&Product::new("Laptop", 120_000)).unwrap();
        order.add_product(&Product::new("Smartphone", 80_000)).unwrap();

        let cloned = order.clone();

        // Same scalars, pairwise-equal products.
        assert_eq!(cloned.shipping_cents, order.shipping_cents);
        assert_eq!(cloned.discount_cents, order.discount_cents);
        assert_eq!(cloned.payment_method, order.payment_method);
        assert_eq!(cloned.products(), order.products());

        // No shared string storage between the two product sequences.
        for (a, b) in order.products().iter().zip(cloned.products()) {
            assert_ne!(a.name.as_ptr(), b.name.as_ptr());
        }
    }

    #[test]
    fn test_order_clone_mutation_does_not_leak() {
        let mut order = test_order();
        order.add_product(&Product::new("Laptop", 120_000)).unwrap();

        let mut cloned = order.clone();
        let replacement = Product::new("Keyboard", 9_900);
        cloned.products.clear();
        cloned.add_product(&replacement).unwrap();

        assert_eq!(order.products()[0].name, "Laptop");
        assert_eq!(cloned.products()[0].name, "Keyboard");
    }

    #[test]
    fn test_order_product_cap() {
        let mut order = test_order();
        let widget = Product::new("Widget", 100);

        for _ in 0..MAX_ORDER_PRODUCTS {
            order.add_product(&widget).unwrap();
        }

        let err = order.add_product(&widget).unwrap_err();
        assert!(matches!(err, CoreError::OrderTooLarge { .. }));
        assert_eq!(order.product_count(), MAX_ORDER_PRODUCTS);
    }

    #[test]
    fn test_order_display() {
        let mut order = test_order();
        order.add_product(&Product::new("Laptop", 120_000)).unwrap();
        order.add_product(&Product::new("Smartphone", 80_000)).unwrap();

        let rendered = order.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "Product: Laptop, Price: $1200.00");
        assert_eq!(lines[1], "Product: Smartphone, Price: $800.00");
        assert_eq!(
            lines[2],
            "Shipping Cost: $50.00, Discount: $10.00, Payment: Credit Card"
        );
    }
}
