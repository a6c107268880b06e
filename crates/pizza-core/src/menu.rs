//! # Menu
//!
//! The variants offered to a customer, grouped by category.
//!
//! A menu is either the built-in catalog ([`Menu::standard`]) or built from
//! a [`MenuFile`], a plain data description whose entries become
//! `CustomBase` / `CustomSize` / `CustomTopping` variants. Parsing the
//! file's bytes is the caller's job; this module only deals with the
//! deserialized data.
//!
//! ## Menu File Shape
//! ```json
//! {
//!   "bases":    [{ "name": "Thin Crust", "description": "Thin Crust Pizza", "price_cents": 500 }],
//!   "sizes":    [{ "name": "Family", "price_cents": 0, "scale_bps": 25000 }],
//!   "toppings": [{ "name": "Basil", "price_cents": 50 }]
//! }
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::catalog::{
    standard_bases, standard_sizes, standard_toppings, BaseRef, CustomBase, CustomSize,
    CustomTopping, PizzaBase, PizzaSize, SizeRef, Topping, ToppingRef,
};
use crate::error::{CoreResult, ValidationError};
use crate::money::Money;
use crate::types::ScaleFactor;
use crate::validation::validate_unique_names;

// =============================================================================
// Menu File (data)
// =============================================================================

/// A base or topping entry in a menu file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEntry {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price_cents: i64,
}

/// A size entry in a menu file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeEntry {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price_cents: i64,
    /// Multiplier in basis points; absent for flat-fee sizes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale_bps: Option<u32>,
}

/// Deserialized form of a menu file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuFile {
    pub bases: Vec<MenuEntry>,
    pub sizes: Vec<SizeEntry>,
    pub toppings: Vec<MenuEntry>,
}

// =============================================================================
// Menu
// =============================================================================

/// The options a customer can choose from.
///
/// ## Invariants
/// - Every category has at least one variant
/// - Names are unique within a category
#[derive(Debug, Clone)]
pub struct Menu {
    bases: Vec<BaseRef>,
    sizes: Vec<SizeRef>,
    toppings: Vec<ToppingRef>,
}

impl Menu {
    /// Creates a menu from variant lists.
    ///
    /// ## Errors
    /// - `Validation(Required)` if a category is empty
    /// - `Validation(Duplicate)` if two variants in a category share a name
    pub fn new(
        bases: Vec<BaseRef>,
        sizes: Vec<SizeRef>,
        toppings: Vec<ToppingRef>,
    ) -> CoreResult<Self> {
        require_some("bases", bases.len())?;
        require_some("sizes", sizes.len())?;
        require_some("toppings", toppings.len())?;

        validate_unique_names("base", bases.iter().map(|b| b.name()))?;
        validate_unique_names("size", sizes.iter().map(|s| s.name()))?;
        validate_unique_names("topping", toppings.iter().map(|t| t.name()))?;

        Ok(Menu {
            bases,
            sizes,
            toppings,
        })
    }

    /// The built-in catalog.
    pub fn standard() -> Self {
        Menu {
            bases: standard_bases(),
            sizes: standard_sizes(),
            toppings: standard_toppings(),
        }
    }

    pub fn bases(&self) -> &[BaseRef] {
        &self.bases
    }

    pub fn sizes(&self) -> &[SizeRef] {
        &self.sizes
    }

    pub fn toppings(&self) -> &[ToppingRef] {
        &self.toppings
    }
}

impl Default for Menu {
    fn default() -> Self {
        Menu::standard()
    }
}

impl TryFrom<MenuFile> for Menu {
    type Error = crate::error::CoreError;

    fn try_from(file: MenuFile) -> CoreResult<Self> {
        let bases = file
            .bases
            .into_iter()
            .map(|e| {
                CustomBase::new(e.name, e.description, Money::from_cents(e.price_cents))
                    .map(|b| Arc::new(b) as BaseRef)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let sizes = file
            .sizes
            .into_iter()
            .map(|e| {
                let scale = e.scale_bps.map(ScaleFactor::from_bps);
                CustomSize::new(e.name, e.description, Money::from_cents(e.price_cents), scale)
                    .map(|s| Arc::new(s) as SizeRef)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let toppings = file
            .toppings
            .into_iter()
            .map(|e| {
                CustomTopping::new(e.name, e.description, Money::from_cents(e.price_cents))
                    .map(|t| Arc::new(t) as ToppingRef)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Menu::new(bases, sizes, toppings)
    }
}

fn require_some(field: &str, len: usize) -> Result<(), ValidationError> {
    if len == 0 {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    Ok(())
}
