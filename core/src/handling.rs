//! The `PizzaHandling` mixin.
//!
//! Any kitchen type composed with it can describe ingredients and cooking for
//! a pizza kind without knowing which handlers exist.

use crate::handler::PizzaHandlerFactory;
use crate::kind::PizzaKind;
use crate::mixin;
use crate::report::Report;

/// Access to the pizza handler registry.
#[mixin]
pub trait PizzaHandling {
    // Handlers are stateless; nothing to set up on the host.
    fn initializer(&mut self) {}

    /// Ingredients needed for `kind`.
    fn get_pizza_ingredients(&self, kind: &PizzaKind) -> Report {
        PizzaHandlerFactory::handler(kind).ingredients()
    }

    /// How `kind` is cooked.
    fn cook_pizza(&self, kind: &PizzaKind) -> Report {
        PizzaHandlerFactory::handler(kind).cook()
    }
}
