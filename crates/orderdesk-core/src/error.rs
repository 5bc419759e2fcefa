//! # Error Types
//!
//! Domain-specific error types for orderdesk-core.
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (limits, counts)
//! 3. Errors are enum variants, never String

use thiserror::Error;

/// Core business logic errors.
///
/// These errors represent business rule violations. They should be caught
/// and translated to user-facing messages by whoever drives the domain.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Order has reached the maximum allowed number of products.
    #[error("Order cannot hold more than {max} products")]
    OrderTooLarge { max: usize },
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::OrderTooLarge { max: 100 };
        assert_eq!(err.to_string(), "Order cannot hold more than 100 products");
    }
}
