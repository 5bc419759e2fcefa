//! # orderdesk-core: Pure Business Logic for Orderdesk
//!
//! This crate is the **heart** of Orderdesk. It contains all business logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Orderdesk Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      apps/demo (driver)                         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ orderdesk-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   order   │  │  report   │  │   │
//! │  │   │  Product  │  │   Money   │  │   Order   │  │  Builders │  │   │
//! │  │   │  Payment  │  │   math    │  │  Totals   │  │  Director │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBALS • PURE FUNCTIONS                         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │            orderdesk-settings (persistence layer)               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, PaymentMethod)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`order`] - Orders and their owned product copies
//! - [`report`] - Report value, builder strategies, director
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: File system and network access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Owned Copies**: Orders own deep clones of their products - no shared state

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod order;
pub mod report;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use orderdesk_core::Money` instead of
// `use orderdesk_core::money::Money`

pub use error::{CoreError, CoreResult};
pub use money::Money;
pub use order::{Order, OrderTotals};
pub use report::{HtmlReportBuilder, Report, ReportBuilder, ReportDirector, TextReportBuilder};
pub use types::{PaymentMethod, Product};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum products allowed in a single order.
///
/// Prevents runaway orders and keeps demonstration output bounded.
pub const MAX_ORDER_PRODUCTS: usize = 100;
