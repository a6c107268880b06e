//! # Domain Types
//!
//! Value types shared by the catalog and the order aggregate.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  ScaleFactor    │   │  OrderSummary   │   │  SummaryLine    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  bps (u32)      │   │  order_id       │   │  kind           │       │
//! │  │  15000 = 1.5x   │   │  description    │   │  name           │       │
//! │  └─────────────────┘   │  lines          │   │  price          │       │
//! │                        │  subtotal/total │   └─────────────────┘       │
//! │                        └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Scale Factor
// =============================================================================

/// Size multiplier represented in basis points.
///
/// ## Why Basis Points?
/// 1 basis point = 0.0001x, so 15000 bps = 1.5x. Multipliers stay exact
/// integers and [`Money::scale`] never touches floating point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScaleFactor(u32);

impl ScaleFactor {
    /// Basis points in a 1.0x multiplier.
    pub const BPS_PER_UNIT: u32 = 10_000;

    /// The 1.0x multiplier.
    pub const IDENTITY: ScaleFactor = ScaleFactor(Self::BPS_PER_UNIT);

    /// Creates a scale factor from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        ScaleFactor(bps)
    }

    /// Returns the multiplier in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Checks if this factor leaves prices unchanged.
    #[inline]
    pub const fn is_identity(&self) -> bool {
        self.0 == Self::BPS_PER_UNIT
    }
}

impl Default for ScaleFactor {
    fn default() -> Self {
        ScaleFactor::IDENTITY
    }
}

/// Shows the multiplier as `1.5x`, trimming trailing zeros.
impl fmt::Display for ScaleFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / Self::BPS_PER_UNIT;
        let frac = self.0 % Self::BPS_PER_UNIT;
        if frac == 0 {
            return write!(f, "{}x", whole);
        }
        let digits = format!("{:04}", frac);
        write!(f, "{}.{}x", whole, digits.trim_end_matches('0'))
    }
}

// =============================================================================
// Order Summary
// =============================================================================

/// Which catalog a summary line came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    Base,
    Size,
    Topping,
}

/// One priced selection on an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SummaryLine {
    pub kind: LineKind,
    pub name: String,
    pub description: String,
    /// The variant's own price contribution, before any size scaling.
    pub price: Money,
}

/// Snapshot of a priced order, ready for a receipt or a JSON response.
///
/// `total == scaled(subtotal) + size price`, where `subtotal` is the
/// base plus toppings and scaling only applies when `scale` is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderSummary {
    pub order_id: String,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
    pub description: String,
    pub lines: Vec<SummaryLine>,
    /// Base plus toppings, unscaled.
    pub subtotal: Money,
    pub scale: Option<ScaleFactor>,
    pub total: Money,
}

impl OrderSummary {
    /// Returns the topping lines only.
    pub fn toppings(&self) -> impl Iterator<Item = &SummaryLine> {
        self.lines.iter().filter(|l| l.kind == LineKind::Topping)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
