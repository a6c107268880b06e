//! # Pizza Builder Console
//!
//! Walks a customer through a menu and prints the priced order.
//!
//! ## Session Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  load_menu()                                                            │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  Step 1: base ──► Step 2: size ──► Step 3: toppings                     │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  Pizza::builder().build() ──► summary() ──► write_summary()             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables:
//! - `PIZZA_MENU_PATH` - JSON menu file (default: built-in menu)
//! - `PIZZA_OUTPUT` - `text` or `json`
//! - `PIZZA_LOG` - log filter (default: `warn`)

pub mod config;
pub mod error;
pub mod menu;
pub mod prompt;
pub mod render;

use std::io::{BufRead, Write};

use pizza_core::{Menu, OrderSummary, Pizza, PizzaBase, PizzaSize, Topping};
use tracing::info;

use crate::config::AppConfig;
use crate::error::CliResult;
use crate::prompt::Prompter;

/// Menu label for a size: flat fee, plus the multiplier when it scales.
fn size_label(size: &dyn PizzaSize) -> String {
    match size.scale_factor() {
        Some(factor) => format!(
            "{} (+{}, Multiplier: {})",
            size.description(),
            size.price_contribution(),
            factor
        ),
        None => format!("{} (+{})", size.description(), size.price_contribution()),
    }
}

/// Runs the three selection steps against `menu` and builds the pizza.
pub fn take_order<R: BufRead, W: Write>(
    menu: &Menu,
    prompter: &mut Prompter<R, W>,
) -> CliResult<Pizza> {
    let bases: Vec<String> = menu
        .bases()
        .iter()
        .map(|b| format!("{} ({})", b.description(), b.price_contribution()))
        .collect();
    let base = prompter.choose_one("Select your pizza base:", &bases)?;

    let sizes: Vec<String> = menu.sizes().iter().map(|s| size_label(&**s)).collect();
    let size = prompter.choose_one("Select your pizza size:", &sizes)?;

    let toppings: Vec<String> = menu
        .toppings()
        .iter()
        .map(|t| format!("{} ({})", t.description(), t.price_contribution()))
        .collect();
    let picked = prompter.choose_many("Select your toppings:", &toppings)?;

    let builder = picked.into_iter().fold(
        Pizza::builder()
            .shared_base(menu.bases()[base].clone())
            .shared_size(menu.sizes()[size].clone()),
        |builder, i| builder.shared_topping(menu.toppings()[i].clone()),
    );
    let pizza = builder.build()?;

    info!(
        order_id = %pizza.id(),
        base = pizza.base().name(),
        size = pizza.size().name(),
        toppings = pizza.toppings().len(),
        total_cents = pizza.total_cost().cents(),
        "Order priced"
    );
    Ok(pizza)
}

/// One complete session: menu, prompts, summary.
pub fn run<R: BufRead, W: Write>(config: &AppConfig, input: R, output: W) -> CliResult<OrderSummary> {
    let menu = menu::load_menu(config.menu_path.as_deref())?;

    let mut prompter = Prompter::new(input, output);
    prompter.say("Welcome to the Pizza Builder!")?;

    let pizza = take_order(&menu, &mut prompter)?;
    let summary = pizza.summary();
    render::write_summary(prompter.output(), &summary, config.output)?;

    Ok(summary)
}
