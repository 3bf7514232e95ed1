//! Pizzeria - a small kitchen built twice.
//!
//! # Overview
//!
//! Pizzeria turns pizza orders into kitchen reports. The same kitchen is
//! written in two designs:
//!
//! - **Naive**: every consumer compares the order against each known pizza
//!   in its own conditional chain.
//! - **Factory**: a handler registry maps each pizza to its handler, and the
//!   `PizzaHandling` mixin shares that registry with `Chef` and `Stock`
//!   through `#[compose]`.
//!
//! Both designs agree on every known pizza and differ only in how they report
//! an order they do not know.
//!
//! # Quick Start
//!
//! ```
//! use pizzeria::{Chef, DEMO_ORDERS, Design, demo};
//!
//! let chef = Chef::new();
//! let [fetch, cook] = chef.make_pizza("ham pizza");
//! assert_eq!(fetch.to_string(), "get 3 slices of ham to cook a ham pizza");
//! assert_eq!(cook.to_string(), "cook a ham pizza for 3 minutes");
//!
//! for report in demo::run(Design::Factory, &DEMO_ORDERS) {
//!     println!("{}", report);
//! }
//! ```
//!
//! # Composing Your Own Types
//!
//! The composition attributes are re-exported here, but the code they
//! generate refers to `::pizzeria_core`. Crates that declare their own
//! mixins should depend on `pizzeria-core` directly.

pub use pizzeria_core::{
    Chef, Composite, DEMO_ORDERS, Design, Member, PizzaHandler, PizzaHandlerFactory,
    PizzaHandling, PizzaKind, PizzaMaker, Report, Stock, compose, demo, handler, kind, kitchen,
    mixin, naive,
};
