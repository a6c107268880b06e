//! # Error Types
//!
//! Domain-specific error types for pizza-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  pizza-core errors (this file)                                         │
//! │  ├── CoreError        - Order composition errors                       │
//! │  └── ValidationError  - Variant definition failures                    │
//! │                                                                         │
//! │  pizza-cli errors (app)                                                │
//! │  └── CliError         - What the console user sees                     │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CliError → stderr                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All errors are raised synchronously at the point of construction or
//! mutation. None are transient, so none are retryable.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Order composition errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The selection cannot form a pizza.
    ///
    /// ## When This Occurs
    /// - No base or no size was chosen
    /// - The topping set is empty
    /// - Removing a topping would leave the pizza bare
    #[error("Invalid selection: {reason}")]
    InvalidSelection { reason: String },

    /// A topping with the same name is already on the pizza.
    #[error("Topping already added: {0}")]
    DuplicateTopping(String),

    /// The topping to remove is not on the pizza.
    #[error("Topping not found: {0}")]
    ToppingNotFound(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Shorthand for [`CoreError::InvalidSelection`].
    pub fn invalid_selection(reason: impl Into<String>) -> Self {
        CoreError::InvalidSelection {
            reason: reason.into(),
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Variant definition errors.
///
/// Built-in variants cannot fail; these come from data-driven variants
/// (menu files) whose fields are checked before they enter a catalog.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Duplicate value (e.g., two toppings named "Olive").
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
