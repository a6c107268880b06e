//! # Variant Catalogs
//!
//! The three extensible option categories of a pizza.
//!
//! ## Open for Extension
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  trait PizzaBase          trait PizzaSize           trait Topping       │
//! │  ├── ThinCrust            ├── Small                 ├── Tomato          │
//! │  ├── ThickCrust           ├── Medium                ├── Cheese          │
//! │  └── CustomBase (data)    ├── Large                 ├── Pepperoni       │
//! │                           ├── Family (2.5x)         ├── Olive           │
//! │                           └── CustomSize (data)     ├── Mushroom        │
//! │                                                     └── CustomTopping   │
//! │                                                                         │
//! │  A new option is a new type implementing the trait.                    │
//! │  Pizza::total_cost() only ever calls price_contribution().             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//! ```rust
//! use pizza_core::catalog::{Cheese, Topping};
//!
//! assert_eq!(Cheese.name(), "Cheese");
//! assert_eq!(Cheese.price_contribution().cents(), 100);
//! ```

use std::fmt;
use std::sync::Arc;

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::ScaleFactor;
use crate::validation::{validate_price_cents, validate_scale_bps, validate_variant_name};

// =============================================================================
// Capabilities
// =============================================================================

/// A crust choice.
pub trait PizzaBase: fmt::Debug + Send + Sync {
    /// Short unique name, e.g. "Thin Crust".
    fn name(&self) -> &str;

    /// Menu text shown to the customer.
    fn description(&self) -> &str;

    /// What this base adds to the order total.
    fn price_contribution(&self) -> Money;
}

/// A size choice.
///
/// A size always adds its own flat price. It may also declare a
/// [`ScaleFactor`], in which case the base and toppings are multiplied by
/// it before the flat price is added.
pub trait PizzaSize: fmt::Debug + Send + Sync {
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    /// Flat fee for this size, never scaled.
    fn price_contribution(&self) -> Money;

    /// Multiplier for the base and topping subtotal, if this size has one.
    fn scale_factor(&self) -> Option<ScaleFactor> {
        None
    }
}

/// An addable ingredient.
///
/// Toppings are identified by [`Topping::name`]: a pizza never carries two
/// toppings with the same name.
pub trait Topping: fmt::Debug + Send + Sync {
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    fn price_contribution(&self) -> Money;
}

/// Shared handle to an immutable base variant.
pub type BaseRef = Arc<dyn PizzaBase>;

/// Shared handle to an immutable size variant.
pub type SizeRef = Arc<dyn PizzaSize>;

/// Shared handle to an immutable topping variant.
pub type ToppingRef = Arc<dyn Topping>;

// =============================================================================
// Bases
// =============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThinCrust;

impl PizzaBase for ThinCrust {
    fn name(&self) -> &str {
        "Thin Crust"
    }

    fn description(&self) -> &str {
        "Thin Crust Pizza"
    }

    fn price_contribution(&self) -> Money {
        Money::from_cents(500)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThickCrust;

impl PizzaBase for ThickCrust {
    fn name(&self) -> &str {
        "Thick Crust"
    }

    fn description(&self) -> &str {
        "Thick Crust Pizza"
    }

    fn price_contribution(&self) -> Money {
        Money::from_cents(700)
    }
}

// =============================================================================
// Sizes
// =============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Small;

impl PizzaSize for Small {
    fn name(&self) -> &str {
        "Small"
    }

    fn description(&self) -> &str {
        "Small Size 12\" Pizza"
    }

    fn price_contribution(&self) -> Money {
        Money::zero()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Medium;

impl PizzaSize for Medium {
    fn name(&self) -> &str {
        "Medium"
    }

    fn description(&self) -> &str {
        "Medium Size 16\" Pizza"
    }

    fn price_contribution(&self) -> Money {
        Money::from_cents(200)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Large;

impl PizzaSize for Large {
    fn name(&self) -> &str {
        "Large"
    }

    fn description(&self) -> &str {
        "Large Size 20\" Pizza"
    }

    fn price_contribution(&self) -> Money {
        Money::from_cents(350)
    }
}

/// The one built-in size that scales: everything on the pizza costs 2.5x.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Family;

impl PizzaSize for Family {
    fn name(&self) -> &str {
        "Family"
    }

    fn description(&self) -> &str {
        "Family Size 24\" Pizza"
    }

    fn price_contribution(&self) -> Money {
        Money::zero()
    }

    fn scale_factor(&self) -> Option<ScaleFactor> {
        Some(ScaleFactor::from_bps(25_000))
    }
}

// =============================================================================
// Toppings
// =============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tomato;

impl Topping for Tomato {
    fn name(&self) -> &str {
        "Tomato"
    }

    fn description(&self) -> &str {
        "Sliced fresh tomato"
    }

    fn price_contribution(&self) -> Money {
        Money::from_cents(99)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cheese;

impl Topping for Cheese {
    fn name(&self) -> &str {
        "Cheese"
    }

    fn description(&self) -> &str {
        "Fresh dairy cheese"
    }

    fn price_contribution(&self) -> Money {
        Money::from_cents(100)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pepperoni;

impl Topping for Pepperoni {
    fn name(&self) -> &str {
        "Pepperoni"
    }

    fn description(&self) -> &str {
        "Pepperoni"
    }

    fn price_contribution(&self) -> Money {
        Money::from_cents(199)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Olive;

impl Topping for Olive {
    fn name(&self) -> &str {
        "Olive"
    }

    fn description(&self) -> &str {
        "Black olives"
    }

    fn price_contribution(&self) -> Money {
        Money::from_cents(75)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Mushroom;

impl Topping for Mushroom {
    fn name(&self) -> &str {
        "Mushroom"
    }

    fn description(&self) -> &str {
        "Sliced mushrooms"
    }

    fn price_contribution(&self) -> Money {
        Money::from_cents(125)
    }
}

// =============================================================================
// Data-Driven Variants
// =============================================================================
// Options whose only difference is name and price don't need a type each.
// These are built from menu data and validated on construction.

fn checked_fields(
    field: &str,
    name: String,
    description: String,
    price: Money,
) -> Result<(String, String, Money), ValidationError> {
    validate_variant_name(field, &name)?;
    validate_price_cents(&format!("{} price", field), price.cents())?;

    let name = name.trim().to_string();
    let description = match description.trim() {
        "" => name.clone(),
        text => text.to_string(),
    };
    Ok((name, description, price))
}

/// A base defined by data rather than by a type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomBase {
    name: String,
    description: String,
    price: Money,
}

impl CustomBase {
    /// Creates a base; an empty description falls back to the name.
    ///
    /// ## Errors
    /// - blank or over-long name
    /// - negative price
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: Money,
    ) -> Result<Self, ValidationError> {
        let (name, description, price) =
            checked_fields("base", name.into(), description.into(), price)?;
        Ok(CustomBase {
            name,
            description,
            price,
        })
    }
}

impl PizzaBase for CustomBase {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn price_contribution(&self) -> Money {
        self.price
    }
}

/// A size defined by data rather than by a type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomSize {
    name: String,
    description: String,
    price: Money,
    scale: Option<ScaleFactor>,
}

impl CustomSize {
    /// Creates a size with an optional scale factor.
    ///
    /// ## Errors
    /// Same as [`CustomBase::new`], plus a zero or oversized scale factor.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: Money,
        scale: Option<ScaleFactor>,
    ) -> Result<Self, ValidationError> {
        let (name, description, price) =
            checked_fields("size", name.into(), description.into(), price)?;
        if let Some(factor) = scale {
            validate_scale_bps(factor.bps())?;
        }
        Ok(CustomSize {
            name,
            description,
            price,
            scale,
        })
    }
}

impl PizzaSize for CustomSize {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn price_contribution(&self) -> Money {
        self.price
    }

    fn scale_factor(&self) -> Option<ScaleFactor> {
        self.scale
    }
}

/// A topping defined by data rather than by a type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomTopping {
    name: String,
    description: String,
    price: Money,
}

impl CustomTopping {
    /// Creates a topping.
    ///
    /// ## Example
    /// ```rust
    /// use pizza_core::catalog::{CustomTopping, Topping};
    /// use pizza_core::Money;
    ///
    /// let basil = CustomTopping::new("Basil", "", Money::from_cents(50)).unwrap();
    /// assert_eq!(basil.description(), "Basil");
    ///
    /// assert!(CustomTopping::new("Gold Leaf", "", Money::from_cents(-1)).is_err());
    /// ```
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: Money,
    ) -> Result<Self, ValidationError> {
        let (name, description, price) =
            checked_fields("topping", name.into(), description.into(), price)?;
        Ok(CustomTopping {
            name,
            description,
            price,
        })
    }
}

impl Topping for CustomTopping {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn price_contribution(&self) -> Money {
        self.price
    }
}

// =============================================================================
// Standard Catalog
// =============================================================================

/// The built-in bases, in menu order.
pub fn standard_bases() -> Vec<BaseRef> {
    vec![Arc::new(ThinCrust), Arc::new(ThickCrust)]
}

/// The built-in sizes, in menu order.
pub fn standard_sizes() -> Vec<SizeRef> {
    vec![
        Arc::new(Small),
        Arc::new(Medium),
        Arc::new(Large),
        Arc::new(Family),
    ]
}

/// The built-in toppings, in menu order.
pub fn standard_toppings() -> Vec<ToppingRef> {
    vec![
        Arc::new(Tomato),
        Arc::new(Cheese),
        Arc::new(Pepperoni),
        Arc::new(Olive),
        Arc::new(Mushroom),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_unique_names;

    #[test]
    fn test_standard_prices() {
        assert_eq!(ThinCrust.price_contribution().cents(), 500);
        assert_eq!(ThickCrust.price_contribution().cents(), 700);
        assert_eq!(Medium.price_contribution().cents(), 200);
        assert_eq!(Olive.price_contribution().cents(), 75);
        assert_eq!(Mushroom.price_contribution().cents(), 125);
    }

    #[test]
    fn test_only_family_scales() {
        for size in standard_sizes() {
            match size.name() {
                "Family" => assert_eq!(size.scale_factor(), Some(ScaleFactor::from_bps(25_000))),
                _ => assert_eq!(size.scale_factor(), None),
            }
        }
    }

    #[test]
    fn test_standard_catalog_is_well_formed() {
        let bases = standard_bases();
        let sizes = standard_sizes();
        let toppings = standard_toppings();

        assert!(validate_unique_names("base", bases.iter().map(|b| b.name())).is_ok());
        assert!(validate_unique_names("size", sizes.iter().map(|s| s.name())).is_ok());
        assert!(validate_unique_names("topping", toppings.iter().map(|t| t.name())).is_ok());

        assert!(bases.iter().all(|b| !b.price_contribution().is_negative()));
        assert!(sizes.iter().all(|s| !s.price_contribution().is_negative()));
        assert!(toppings.iter().all(|t| !t.price_contribution().is_negative()));
    }

    #[test]
    fn test_custom_variant_trims_and_defaults_description() {
        let base = CustomBase::new("  Stuffed Crust ", " ", Money::from_cents(850)).unwrap();
        assert_eq!(base.name(), "Stuffed Crust");
        assert_eq!(base.description(), "Stuffed Crust");
        assert_eq!(base.price_contribution().cents(), 850);
    }

    #[test]
    fn test_custom_variant_rejects_bad_fields() {
        assert!(matches!(
            CustomTopping::new("", "nothing", Money::zero()),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            CustomBase::new("Gluten Free", "", Money::from_cents(-50)),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(matches!(
            CustomSize::new("Party", "", Money::zero(), Some(ScaleFactor::from_bps(0))),
            Err(ValidationError::MustBePositive { .. })
        ));
    }

    #[test]
    fn test_custom_size_keeps_scale() {
        let size = CustomSize::new(
            "Party",
            "Party Size 30\" Pizza",
            Money::from_cents(100),
            Some(ScaleFactor::from_bps(40_000)),
        )
        .unwrap();
        assert_eq!(size.scale_factor().map(|f| f.bps()), Some(40_000));
        assert_eq!(size.price_contribution().cents(), 100);
    }
}
