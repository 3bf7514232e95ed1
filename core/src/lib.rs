//! Core of Pizzeria: mixin composition and pizza handler dispatch.
//!
//! - [`compose`]: the [`Composite`] contract implemented by `#[compose]`
//! - [`handler`]: the pizza handler registry and its fallback
//! - [`handling`]: the `PizzaHandling` mixin that exposes the registry
//! - [`kitchen`]: `Chef` and `Stock`, composed with `PizzaHandling`
//! - [`naive`]: the same kitchen written with conditional chains
//! - [`demo`]: the driver that runs orders through either design

// Needed so that macros can uniformly refer to `::pizzeria_core` and still
// work from within this crate or a different one.
extern crate self as pizzeria_core;

pub mod compose;
pub mod demo;
pub mod handler;
pub mod handling;
pub mod kind;
pub mod kitchen;
pub mod naive;
pub mod report;

pub use compose::{Composite, Member};
pub use demo::{DEMO_ORDERS, Design};
pub use handler::{PizzaHandler, PizzaHandlerFactory};
pub use handling::PizzaHandling;
pub use kind::PizzaKind;
pub use kitchen::{Chef, PizzaMaker, Stock};
pub use report::Report;

pub use pizzeria_macros::{compose, mixin};

// Generated code walks the mixin list through this macro.
#[doc(hidden)]
pub use pizzeria_macros::__compose_step;

/// Test utilities for enabling logging in tests
#[cfg(test)]
pub mod test_utils {
    /// Initialize tracing subscriber for tests with DEBUG level
    /// Call this at the start of tests where you want to see logging output
    ///
    /// # Example
    /// ```ignore
    /// #[test]
    /// fn test_dispatch() {
    ///     test_utils::init_test_logging();
    ///     // ... your test code
    /// }
    /// ```
    pub fn init_test_logging() {
        use tracing_subscriber::{EnvFilter, fmt};

        // Try to initialize, ignore error if already initialized
        let _ = fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_test_writer()
            .try_init();
    }
}
