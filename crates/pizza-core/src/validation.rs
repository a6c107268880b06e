//! # Validation Module
//!
//! Field checks for data-driven variants.
//!
//! Built-in variants are plain types whose prices are fixed at compile
//! time. Variants that come from a menu file go through these checks in
//! their constructors (see [`crate::catalog::CustomTopping::new`]), so a
//! bad menu is rejected before any order can be priced with it.
//!
//! ## Usage
//! ```rust
//! use pizza_core::validation::{validate_price_cents, validate_variant_name};
//!
//! assert!(validate_variant_name("topping", "Olive").is_ok());
//! assert!(validate_price_cents("price", -1).is_err());
//! ```

use std::collections::HashSet;

use crate::error::ValidationError;
use crate::{MAX_NAME_LEN, MAX_PRICE_CENTS, MAX_SCALE_BPS};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a variant name.
///
/// ## Rules
/// - Must not be blank
/// - At most [`MAX_NAME_LEN`] characters
pub fn validate_variant_name(field: &str, name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::OutOfRange {
            field: format!("{} length", field),
            min: 1,
            max: MAX_NAME_LEN as i64,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (a free size upgrade, say)
/// - Must not exceed [`MAX_PRICE_CENTS`], which keeps scaled totals well
///   inside `i64`
pub fn validate_price_cents(field: &str, cents: i64) -> ValidationResult<()> {
    if !(0..=MAX_PRICE_CENTS).contains(&cents) {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: MAX_PRICE_CENTS,
        });
    }

    Ok(())
}

/// Validates a size scale factor in basis points.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed [`MAX_SCALE_BPS`]
///
/// ## Example
/// ```rust
/// use pizza_core::validation::validate_scale_bps;
///
/// assert!(validate_scale_bps(15_000).is_ok()); // 1.5x
/// assert!(validate_scale_bps(0).is_err());
/// ```
pub fn validate_scale_bps(bps: u32) -> ValidationResult<()> {
    if bps == 0 {
        return Err(ValidationError::MustBePositive {
            field: "scale factor".to_string(),
        });
    }

    if bps > MAX_SCALE_BPS {
        return Err(ValidationError::OutOfRange {
            field: "scale factor".to_string(),
            min: 1,
            max: MAX_SCALE_BPS as i64,
        });
    }

    Ok(())
}

// =============================================================================
// Collection Validators
// =============================================================================

/// Validates that no two names in a list are equal.
///
/// Returns the first repeated name as a [`ValidationError::Duplicate`].
pub fn validate_unique_names<'a, I>(field: &str, names: I) -> ValidationResult<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(ValidationError::Duplicate {
                field: field.to_string(),
                value: name.to_string(),
            });
        }
    }

    Ok(())
}
