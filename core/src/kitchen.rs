//! The kitchen, factory edition.
//!
//! `Stock` and `Chef` share the `PizzaHandling` mixin, so neither carries its
//! own knowledge of pizza kinds: both ask the handler registry.

use crate::{Composite, compose};
use crate::handling::PizzaHandling;
use crate::kind::PizzaKind;
use crate::report::Report;

/// Anything that can turn an order into the two kitchen reports.
pub trait PizzaMaker {
    /// Fetch ingredients, then cook. Returns both reports in that order.
    fn make_pizza(&self, order: &str) -> [Report; 2];
}

/// The pantry.
#[compose(crate::handling::PizzaHandling)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stock;

impl Stock {
    pub fn new() -> Self {
        Self::from_base(Stock)
    }

    pub fn check_availability(&self, ingredient: &str) -> Report {
        Report::Availability(ingredient.to_owned())
    }
}

impl Default for Stock {
    fn default() -> Self {
        Self::new()
    }
}

/// Cooks pizzas, taking ingredients from its own stock.
#[compose(crate::handling::PizzaHandling)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chef {
    stock: Stock,
}

impl Chef {
    pub fn new() -> Self {
        Self::from_base(Chef {
            stock: Stock::new(),
        })
    }

    pub fn stock(&self) -> &Stock {
        &self.stock
    }

    pub fn make_pizza(&self, order: &str) -> [Report; 2] {
        let kind = PizzaKind::parse(order);
        tracing::debug!(%kind, known = kind.is_known(), "making pizza");
        [
            self.stock.get_pizza_ingredients(&kind),
            self.cook_pizza(&kind),
        ]
    }
}

impl Default for Chef {
    fn default() -> Self {
        Self::new()
    }
}

impl PizzaMaker for Chef {
    fn make_pizza(&self, order: &str) -> [Report; 2] {
        Chef::make_pizza(self, order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::init_test_logging;
    use pretty_assertions::assert_eq;

    fn lines(reports: [Report; 2]) -> [String; 2] {
        reports.map(|report| report.to_string())
    }

    #[test]
    fn test_make_ham_pizza() {
        init_test_logging();
        let chef = Chef::new();
        assert_eq!(
            lines(chef.make_pizza("ham pizza")),
            [
                "get 3 slices of ham to cook a ham pizza",
                "cook a ham pizza for 3 minutes"
            ]
        );
    }

    #[test]
    fn test_make_unknown_pizza() {
        let chef = Chef::new();
        assert_eq!(
            lines(chef.make_pizza("random pizza")),
            [
                "no ingredient for that kind of pizza",
                "cannot cook that kind of pizza"
            ]
        );
    }

    #[test]
    fn test_stock_uses_the_same_registry() {
        let stock = Stock::new();
        assert_eq!(
            stock.get_pizza_ingredients(&PizzaKind::Veggie).to_string(),
            "get 2 cucumbers to cook a veggie pizza"
        );
        assert_eq!(
            stock.check_availability("ham").to_string(),
            "Checking how many of ham we have..."
        );
    }

    #[test]
    fn test_composition_table() {
        assert_eq!(Chef::MIXINS, ["PizzaHandling"]);
        assert_eq!(Stock::MIXINS, ["PizzaHandling"]);

        let names: Vec<&str> = Chef::MEMBERS.iter().map(|member| member.name).collect();
        assert_eq!(names, ["get_pizza_ingredients", "cook_pizza"]);
        assert_eq!(Stock::provider_of("cook_pizza"), Some("PizzaHandling"));
        assert_eq!(Stock::provider_of("check_availability"), None);
    }

    #[test]
    fn test_default_runs_initializers() {
        assert_eq!(Chef::default(), Chef::new());
        assert_eq!(Chef::new().stock(), &Stock::new());
    }
}
