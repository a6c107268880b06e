//! # Pizza Aggregate
//!
//! A single customer's order: one base, one size, one or more toppings.
//!
//! ## Pricing
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  subtotal = base + Σ toppings                                           │
//! │      │                                                                  │
//! │      ├── size has scale factor? ──► subtotal = subtotal × factor        │
//! │      │                              (rounded half up to the cent)       │
//! │      ▼                                                                  │
//! │  total = subtotal + size flat price                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//! ```rust
//! use pizza_core::catalog::{Cheese, Medium, Mushroom, Olive, ThinCrust};
//! use pizza_core::pizza::Pizza;
//! use std::sync::Arc;
//!
//! let mut pizza = Pizza::builder()
//!     .base(ThinCrust)
//!     .size(Medium)
//!     .topping(Cheese)
//!     .topping(Olive)
//!     .build()
//!     .unwrap();
//! assert_eq!(pizza.total_cost().to_string(), "$8.75");
//!
//! pizza.add_topping(Arc::new(Mushroom)).unwrap();
//! assert_eq!(pizza.total_cost().to_string(), "$10.00");
//! ```

use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::catalog::{BaseRef, PizzaBase, PizzaSize, SizeRef, Topping, ToppingRef};
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{LineKind, OrderSummary, SummaryLine};

// =============================================================================
// Pizza
// =============================================================================

/// A configured pizza order.
///
/// ## Invariants
/// - Exactly one base and one size (enforced by the type)
/// - At least one topping
/// - Toppings are unique by name; insertion order is kept for display
#[derive(Debug)]
pub struct Pizza {
    id: Uuid,
    created_at: DateTime<Utc>,
    base: BaseRef,
    size: SizeRef,
    toppings: Vec<ToppingRef>,
}

impl Pizza {
    /// Creates a pizza from complete selections.
    ///
    /// ## Errors
    /// - `InvalidSelection` if `toppings` is empty
    /// - `DuplicateTopping` if two toppings share a name
    pub fn new(base: BaseRef, size: SizeRef, toppings: Vec<ToppingRef>) -> CoreResult<Self> {
        if toppings.is_empty() {
            return Err(CoreError::invalid_selection(
                "at least one topping is required",
            ));
        }

        for (i, topping) in toppings.iter().enumerate() {
            if toppings[..i].iter().any(|t| t.name() == topping.name()) {
                return Err(CoreError::DuplicateTopping(topping.name().to_string()));
            }
        }

        Ok(Pizza {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            base,
            size,
            toppings,
        })
    }

    /// Starts a step-wise selection.
    pub fn builder() -> PizzaBuilder {
        PizzaBuilder::default()
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn base(&self) -> &dyn PizzaBase {
        self.base.as_ref()
    }

    pub fn size(&self) -> &dyn PizzaSize {
        self.size.as_ref()
    }

    /// Toppings in the order they were added.
    pub fn toppings(&self) -> &[ToppingRef] {
        &self.toppings
    }

    /// Checks whether a topping with this name is on the pizza.
    pub fn has_topping(&self, name: &str) -> bool {
        self.toppings.iter().any(|t| t.name() == name)
    }

    /// Adds a topping.
    ///
    /// ## Errors
    /// - `DuplicateTopping` if a topping with the same name is present
    pub fn add_topping(&mut self, topping: ToppingRef) -> CoreResult<()> {
        if self.has_topping(topping.name()) {
            return Err(CoreError::DuplicateTopping(topping.name().to_string()));
        }
        self.toppings.push(topping);
        Ok(())
    }

    /// Removes a topping by name and hands it back.
    ///
    /// ## Errors
    /// - `ToppingNotFound` if no topping has that name
    /// - `InvalidSelection` if it is the last topping
    pub fn remove_topping(&mut self, name: &str) -> CoreResult<ToppingRef> {
        let index = self
            .toppings
            .iter()
            .position(|t| t.name() == name)
            .ok_or_else(|| CoreError::ToppingNotFound(name.to_string()))?;

        if self.toppings.len() == 1 {
            return Err(CoreError::invalid_selection(format!(
                "cannot remove {}: at least one topping is required",
                name
            )));
        }

        Ok(self.toppings.remove(index))
    }

    /// Base plus toppings, before any size scaling.
    pub fn subtotal(&self) -> Money {
        self.base.price_contribution()
            + self
                .toppings
                .iter()
                .map(|t| t.price_contribution())
                .sum::<Money>()
    }

    /// Total price of the pizza.
    ///
    /// Pure: depends only on the current selections.
    pub fn total_cost(&self) -> Money {
        let subtotal = match self.size.scale_factor() {
            Some(factor) => self.subtotal().scale(factor),
            None => self.subtotal(),
        };
        subtotal + self.size.price_contribution()
    }

    /// One-line description, e.g.
    /// `Thin Crust Pizza, Medium Size 16" Pizza, with Fresh dairy cheese`.
    pub fn description(&self) -> String {
        let toppings = self
            .toppings
            .iter()
            .map(|t| t.description())
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "{}, {}, with {}",
            self.base.description(),
            self.size.description(),
            toppings
        )
    }

    /// Snapshot of the order and its pricing.
    pub fn summary(&self) -> OrderSummary {
        let mut lines = Vec::with_capacity(self.toppings.len() + 2);
        lines.push(SummaryLine {
            kind: LineKind::Base,
            name: self.base.name().to_string(),
            description: self.base.description().to_string(),
            price: self.base.price_contribution(),
        });
        lines.push(SummaryLine {
            kind: LineKind::Size,
            name: self.size.name().to_string(),
            description: self.size.description().to_string(),
            price: self.size.price_contribution(),
        });
        lines.extend(self.toppings.iter().map(|t| SummaryLine {
            kind: LineKind::Topping,
            name: t.name().to_string(),
            description: t.description().to_string(),
            price: t.price_contribution(),
        }));

        OrderSummary {
            order_id: self.id.to_string(),
            created_at: self.created_at,
            description: self.description(),
            lines,
            subtotal: self.subtotal(),
            scale: self.size.scale_factor(),
            total: self.total_cost(),
        }
    }
}

// =============================================================================
// Builder
// =============================================================================

/// Collects selections in any order, then validates them all at once.
///
/// ## Customer Workflow
/// ```text
/// choose base ──► choose size ──► choose toppings ──► build()
///                                                       │
///                     missing base/size, no toppings ───┴──► InvalidSelection
/// ```
#[derive(Debug, Default)]
pub struct PizzaBuilder {
    base: Option<BaseRef>,
    size: Option<SizeRef>,
    toppings: Vec<ToppingRef>,
}

impl PizzaBuilder {
    pub fn base<B: PizzaBase + 'static>(self, base: B) -> Self {
        self.shared_base(Arc::new(base))
    }

    /// Selects a base already held by a menu.
    pub fn shared_base(mut self, base: BaseRef) -> Self {
        self.base = Some(base);
        self
    }

    pub fn size<S: PizzaSize + 'static>(self, size: S) -> Self {
        self.shared_size(Arc::new(size))
    }

    /// Selects a size already held by a menu.
    pub fn shared_size(mut self, size: SizeRef) -> Self {
        self.size = Some(size);
        self
    }

    pub fn topping<T: Topping + 'static>(self, topping: T) -> Self {
        self.shared_topping(Arc::new(topping))
    }

    /// Adds a topping already held by a menu.
    pub fn shared_topping(mut self, topping: ToppingRef) -> Self {
        self.toppings.push(topping);
        self
    }

    /// Finishes the selection.
    ///
    /// ## Errors
    /// - `InvalidSelection` if base or size is unset, or there are no toppings
    /// - `DuplicateTopping` if the same topping was chosen twice
    pub fn build(self) -> CoreResult<Pizza> {
        let base = self
            .base
            .ok_or_else(|| CoreError::invalid_selection("a base must be selected"))?;
        let size = self
            .size
            .ok_or_else(|| CoreError::invalid_selection("a size must be selected"))?;
        Pizza::new(base, size, self.toppings)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{
        standard_bases, standard_sizes, standard_toppings, Cheese, CustomSize, CustomTopping,
        Family, Large, Medium, Mushroom, Olive, Pepperoni, Small, ThickCrust, ThinCrust, Tomato,
    };
    use crate::types::ScaleFactor;

    fn medium_thin(toppings: Vec<ToppingRef>) -> CoreResult<Pizza> {
        Pizza::new(Arc::new(ThinCrust), Arc::new(Medium), toppings)
    }

    #[test]
    fn test_example_order_total() {
        let pizza = medium_thin(vec![Arc::new(Cheese), Arc::new(Olive)]).unwrap();
        assert_eq!(pizza.total_cost(), Money::from_cents(875));
    }

    #[test]
    fn test_add_topping_raises_total_by_its_price() {
        let mut pizza = medium_thin(vec![Arc::new(Cheese), Arc::new(Olive)]).unwrap();
        let before = pizza.total_cost();

        pizza.add_topping(Arc::new(Mushroom)).unwrap();

        assert_eq!(pizza.total_cost(), Money::from_cents(1000));
        assert_eq!(pizza.total_cost() - before, Mushroom.price_contribution());
    }

    #[test]
    fn test_remove_topping_reverses_add() {
        let mut pizza = medium_thin(vec![Arc::new(Cheese)]).unwrap();
        let before = pizza.total_cost();

        pizza.add_topping(Arc::new(Pepperoni)).unwrap();
        let removed = pizza.remove_topping("Pepperoni").unwrap();

        assert_eq!(removed.name(), "Pepperoni");
        assert_eq!(pizza.total_cost(), before);
        assert!(!pizza.has_topping("Pepperoni"));
    }

    #[test]
    fn test_empty_toppings_is_invalid_selection() {
        let err = medium_thin(Vec::new()).unwrap_err();
        assert!(matches!(err, CoreError::InvalidSelection { .. }));
    }

    #[test]
    fn test_duplicate_toppings_on_create() {
        let err = medium_thin(vec![Arc::new(Cheese), Arc::new(Olive), Arc::new(Cheese)])
            .unwrap_err();
        assert!(matches!(err, CoreError::DuplicateTopping(name) if name == "Cheese"));
    }

    #[test]
    fn test_duplicate_by_name_across_types() {
        // A data-driven topping named like a built-in one is the same topping
        let mut pizza = medium_thin(vec![Arc::new(Cheese)]).unwrap();
        let other = CustomTopping::new("Cheese", "Extra cheese", Money::from_cents(150)).unwrap();

        let err = pizza.add_topping(Arc::new(other)).unwrap_err();
        assert!(matches!(err, CoreError::DuplicateTopping(_)));
        assert_eq!(pizza.toppings().len(), 1);
    }

    #[test]
    fn test_remove_absent_topping() {
        let mut pizza = medium_thin(vec![Arc::new(Cheese), Arc::new(Olive)]).unwrap();
        let err = pizza.remove_topping("Anchovy").unwrap_err();
        assert!(matches!(err, CoreError::ToppingNotFound(name) if name == "Anchovy"));
        assert_eq!(pizza.toppings().len(), 2);
    }

    #[test]
    fn test_cannot_remove_last_topping() {
        let mut pizza = medium_thin(vec![Arc::new(Cheese)]).unwrap();
        let err = pizza.remove_topping("Cheese").unwrap_err();
        assert!(matches!(err, CoreError::InvalidSelection { .. }));
        assert!(pizza.has_topping("Cheese"));
    }

    #[test]
    fn test_total_ignores_topping_order() {
        let forward = medium_thin(vec![
            Arc::new(Tomato),
            Arc::new(Cheese),
            Arc::new(Pepperoni),
        ])
        .unwrap();
        let backward = medium_thin(vec![
            Arc::new(Pepperoni),
            Arc::new(Cheese),
            Arc::new(Tomato),
        ])
        .unwrap();
        assert_eq!(forward.total_cost(), backward.total_cost());
    }

    #[test]
    fn test_scaled_size_multiplies_base_and_toppings() {
        let pizza = Pizza::builder()
            .base(ThinCrust)
            .size(Family)
            .topping(Cheese)
            .build()
            .unwrap();

        // (5.00 + 1.00) × 2.5
        assert_eq!(pizza.subtotal(), Money::from_cents(600));
        assert_eq!(pizza.total_cost(), Money::from_cents(1500));
    }

    #[test]
    fn test_scale_applies_before_flat_size_price() {
        let size = CustomSize::new(
            "Party",
            "",
            Money::from_cents(300),
            Some(ScaleFactor::from_bps(15_000)),
        )
        .unwrap();
        let pizza = Pizza::builder()
            .base(ThickCrust)
            .size(size)
            .topping(Tomato)
            .build()
            .unwrap();

        // (7.00 + 0.99) × 1.5 = 11.985 → 11.99, then + 3.00
        assert_eq!(pizza.total_cost(), Money::from_cents(1499));
    }

    #[test]
    fn test_total_is_non_negative_for_every_standard_combination() {
        for base in standard_bases() {
            for size in standard_sizes() {
                let pizza = Pizza::new(base.clone(), size.clone(), standard_toppings()).unwrap();
                assert!(!pizza.total_cost().is_negative());
                assert!(pizza.total_cost() >= size.price_contribution());
            }
        }
    }

    #[test]
    fn test_builder_requires_base_and_size() {
        let err = Pizza::builder().size(Small).topping(Cheese).build().unwrap_err();
        assert_eq!(err.to_string(), "Invalid selection: a base must be selected");

        let err = Pizza::builder().base(ThinCrust).topping(Cheese).build().unwrap_err();
        assert_eq!(err.to_string(), "Invalid selection: a size must be selected");

        let err = Pizza::builder().base(ThinCrust).size(Small).build().unwrap_err();
        assert!(matches!(err, CoreError::InvalidSelection { .. }));
    }

    #[test]
    fn test_builder_last_base_wins() {
        let pizza = Pizza::builder()
            .base(ThinCrust)
            .base(ThickCrust)
            .size(Large)
            .topping(Olive)
            .build()
            .unwrap();
        assert_eq!(pizza.base().name(), "Thick Crust");
    }

    #[test]
    fn test_description() {
        let pizza = medium_thin(vec![Arc::new(Cheese), Arc::new(Olive)]).unwrap();
        assert_eq!(
            pizza.description(),
            "Thin Crust Pizza, Medium Size 16\" Pizza, with Fresh dairy cheese, Black olives"
        );
    }

    #[test]
    fn test_summary_lines_and_totals() {
        let pizza = Pizza::builder()
            .base(ThinCrust)
            .size(Family)
            .topping(Cheese)
            .topping(Olive)
            .build()
            .unwrap();
        let summary = pizza.summary();

        assert_eq!(summary.order_id, pizza.id().to_string());
        assert_eq!(summary.lines.len(), 4);
        assert_eq!(summary.lines[0].kind, LineKind::Base);
        assert_eq!(summary.lines[1].kind, LineKind::Size);
        assert_eq!(summary.toppings().count(), 2);
        assert_eq!(summary.subtotal, Money::from_cents(675));
        assert_eq!(summary.scale, Some(ScaleFactor::from_bps(25_000)));
        // 6.75 × 2.5 = 16.875 → 16.88
        assert_eq!(summary.total, Money::from_cents(1688));
        assert_eq!(summary.total, pizza.total_cost());
    }

    #[test]
    fn test_orders_are_independent() {
        let shared: ToppingRef = Arc::new(Cheese);
        let mut first = medium_thin(vec![shared.clone()]).unwrap();
        let second = medium_thin(vec![shared]).unwrap();

        first.add_topping(Arc::new(Mushroom)).unwrap();

        assert_ne!(first.id(), second.id());
        assert_eq!(second.toppings().len(), 1);
        assert_eq!(second.total_cost(), Money::from_cents(800));
    }
}
