//! Reports: what a kitchen action describes instead of printing it.

use core::fmt;

/// The outcome of one kitchen action.
///
/// The `Display` form is the line shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Report {
    /// `get <quantity> <ingredient> to cook a <pizza> pizza`
    Fetch {
        quantity: u32,
        ingredient: &'static str,
        pizza: &'static str,
    },
    /// `cook a <pizza> pizza for <minutes> minutes`
    Cook { pizza: &'static str, minutes: u32 },
    /// Fallback handler: no ingredients for an unknown kind.
    NoIngredient,
    /// Fallback handler: an unknown kind cannot be cooked.
    CannotCook,
    /// Naive design: no ingredients for the given order.
    NoIngredientFor(String),
    /// Naive design: the given order cannot be cooked.
    CannotCookOrder(String),
    /// A stock availability check for an ingredient.
    Availability(String),
}

impl Report {
    pub const fn fetch(quantity: u32, ingredient: &'static str, pizza: &'static str) -> Self {
        Report::Fetch {
            quantity,
            ingredient,
            pizza,
        }
    }

    pub const fn cook(pizza: &'static str, minutes: u32) -> Self {
        Report::Cook { pizza, minutes }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::Fetch {
                quantity,
                ingredient,
                pizza,
            } => write!(f, "get {quantity} {ingredient} to cook a {pizza} pizza"),
            Report::Cook { pizza, minutes } => {
                write!(f, "cook a {pizza} pizza for {minutes} minutes")
            }
            Report::NoIngredient => f.write_str("no ingredient for that kind of pizza"),
            Report::CannotCook => f.write_str("cannot cook that kind of pizza"),
            Report::NoIngredientFor(order) => write!(f, "no ingredient for {order}"),
            Report::CannotCookOrder(order) => write!(f, "cannot cook {order}"),
            Report::Availability(ingredient) => {
                write!(f, "Checking how many of {ingredient} we have...")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_display() {
        let cases = [
            (
                Report::fetch(3, "slices of ham", "ham"),
                "get 3 slices of ham to cook a ham pizza",
            ),
            (Report::cook("seafood", 5), "cook a seafood pizza for 5 minutes"),
            (Report::NoIngredient, "no ingredient for that kind of pizza"),
            (Report::CannotCook, "cannot cook that kind of pizza"),
            (
                Report::NoIngredientFor("random pizza".into()),
                "no ingredient for random pizza",
            ),
            (
                Report::CannotCookOrder("random pizza".into()),
                "cannot cook random pizza",
            ),
            (
                Report::Availability("flour".into()),
                "Checking how many of flour we have...",
            ),
        ];

        for (report, expected) in cases {
            assert_eq!(report.to_string(), expected);
        }
    }
}
