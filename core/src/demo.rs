//! The driver: run a list of orders through one of the two designs.

use crate::kind::{HAM_PIZZA, SEAFOOD_PIZZA, VEGGIE_PIZZA};
use crate::kitchen::{self, PizzaMaker};
use crate::naive;
use crate::report::Report;

/// The orders of the classic demonstration: every known kind, then one the
/// kitchen has never heard of.
pub const DEMO_ORDERS: [&str; 4] = [HAM_PIZZA, SEAFOOD_PIZZA, VEGGIE_PIZZA, "random pizza"];

/// Which kitchen handles the orders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Design {
    /// Conditional chains in every consumer.
    Naive,
    /// Handler factory shared through the `PizzaHandling` mixin.
    #[default]
    Factory,
}

impl Design {
    pub const ALL: [Design; 2] = [Design::Naive, Design::Factory];

    pub fn name(self) -> &'static str {
        match self {
            Design::Naive => "naive",
            Design::Factory => "factory",
        }
    }

    /// A fresh chef for this design.
    pub fn chef(self) -> Box<dyn PizzaMaker> {
        match self {
            Design::Naive => Box::new(naive::Chef::new()),
            Design::Factory => Box::new(kitchen::Chef::new()),
        }
    }
}

/// Make every order with `design`; returns two reports per order, in order.
pub fn run<S: AsRef<str>>(design: Design, orders: &[S]) -> Vec<Report> {
    tracing::debug!(design = design.name(), orders = orders.len(), "running orders");
    let chef = design.chef();
    orders
        .iter()
        .flat_map(|order| chef.make_pizza(order.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lines(reports: Vec<Report>) -> Vec<String> {
        reports.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_factory_demo() {
        assert_eq!(
            lines(run(Design::Factory, &DEMO_ORDERS)),
            [
                "get 3 slices of ham to cook a ham pizza",
                "cook a ham pizza for 3 minutes",
                "get 5 shrimps to cook a seafood pizza",
                "cook a seafood pizza for 5 minutes",
                "get 2 cucumbers to cook a veggie pizza",
                "cook a veggie pizza for 2 minutes",
                "no ingredient for that kind of pizza",
                "cannot cook that kind of pizza",
            ]
        );
    }

    #[test]
    fn test_naive_demo_differs_only_in_fallback() {
        let naive = run(Design::Naive, &DEMO_ORDERS);
        let factory = run(Design::Factory, &DEMO_ORDERS);

        assert_eq!(naive.len(), factory.len());
        assert_eq!(naive[..6], factory[..6]);
        assert_eq!(
            lines(naive[6..].to_vec()),
            ["no ingredient for random pizza", "cannot cook random pizza"]
        );
    }

    #[test]
    fn test_no_orders() {
        let orders: [&str; 0] = [];
        for design in Design::ALL {
            assert!(run(design, &orders).is_empty());
        }
    }

    #[test]
    fn test_default_design() {
        assert_eq!(Design::default(), Design::Factory);
    }
}
