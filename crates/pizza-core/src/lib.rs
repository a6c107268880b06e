//! # pizza-core: Pure Pricing Logic for the Pizza Builder
//!
//! This crate composes a pizza from a base, a size and toppings, and
//! prices it. It has zero I/O dependencies and never logs.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Pizza Builder Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 pizza-cli (console prompts)                     │   │
//! │  │   Menu file ──► Base ──► Size ──► Toppings ──► Order Summary    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ validated selections                  │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ pizza-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │   pizza   │  │   menu    │  │   money   │  │   │
//! │  │   │ PizzaBase │  │   Pizza   │  │   Menu    │  │   Money   │  │   │
//! │  │   │ PizzaSize │  │  Builder  │  │ MenuFile  │  │ScaleFactor│  │   │
//! │  │   │  Topping  │  │  Summary  │  │           │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - Variant traits and the built-in bases, sizes, toppings
//! - [`pizza`] - The order aggregate and its builder
//! - [`menu`] - Groups of variants offered to a customer
//! - [`money`] - Integer-cents money
//! - [`types`] - Scale factors and order summaries
//! - [`error`] - Domain error types
//! - [`validation`] - Field checks for data-driven variants
//!
//! ## Example Usage
//!
//! ```rust
//! use pizza_core::catalog::{Cheese, Family, ThinCrust};
//! use pizza_core::Pizza;
//!
//! let pizza = Pizza::builder()
//!     .base(ThinCrust)
//!     .size(Family)
//!     .topping(Cheese)
//!     .build()?;
//!
//! // (5.00 + 1.00) × 2.5
//! assert_eq!(pizza.total_cost().cents(), 1500);
//! # Ok::<(), pizza_core::CoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod menu;
pub mod money;
pub mod pizza;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::{BaseRef, PizzaBase, PizzaSize, SizeRef, Topping, ToppingRef};
pub use error::{CoreError, CoreResult, ValidationError};
pub use menu::{Menu, MenuFile};
pub use money::Money;
pub use pizza::{Pizza, PizzaBuilder};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Longest variant name accepted from menu data, in characters.
pub const MAX_NAME_LEN: usize = 50;

/// Highest price accepted from menu data, in cents ($10,000.00).
pub const MAX_PRICE_CENTS: i64 = 1_000_000;

/// Largest size multiplier accepted from menu data (10.0x).
pub const MAX_SCALE_BPS: u32 = 100_000;
