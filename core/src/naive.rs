//! The kitchen, naive edition.
//!
//! Each consumer carries its own chain of comparisons against the pizza
//! keys. Adding a kind means editing every chain; unknown orders are echoed
//! back in the fallback text.

use crate::kind::{HAM_PIZZA, SEAFOOD_PIZZA, VEGGIE_PIZZA};
use crate::kitchen::PizzaMaker;
use crate::report::Report;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stock;

impl Stock {
    pub fn new() -> Self {
        Stock
    }

    pub fn check_availability(&self, ingredient: &str) -> Report {
        Report::Availability(ingredient.to_owned())
    }

    pub fn get_pizza_ingredients(&self, order: &str) -> Report {
        if order == HAM_PIZZA {
            Report::fetch(3, "slices of ham", "ham")
        } else if order == SEAFOOD_PIZZA {
            Report::fetch(5, "shrimps", "seafood")
        } else if order == VEGGIE_PIZZA {
            Report::fetch(2, "cucumbers", "veggie")
        } else {
            Report::NoIngredientFor(order.to_owned())
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Chef {
    stock: Stock,
}

impl Chef {
    pub fn new() -> Self {
        Chef {
            stock: Stock::new(),
        }
    }

    pub fn make_pizza(&self, order: &str) -> [Report; 2] {
        tracing::debug!(order, "making pizza");
        [self.stock.get_pizza_ingredients(order), self.cook_pizza(order)]
    }

    pub fn cook_pizza(&self, order: &str) -> Report {
        if order == HAM_PIZZA {
            Report::cook("ham", 3)
        } else if order == SEAFOOD_PIZZA {
            Report::cook("seafood", 5)
        } else if order == VEGGIE_PIZZA {
            Report::cook("veggie", 2)
        } else {
            Report::CannotCookOrder(order.to_owned())
        }
    }
}

impl PizzaMaker for Chef {
    fn make_pizza(&self, order: &str) -> [Report; 2] {
        Chef::make_pizza(self, order)
    }
}
