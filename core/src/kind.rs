//! Pizza kinds: the keys of the handler registry.

use core::convert::Infallible;
use core::fmt;
use core::str::FromStr;

pub const HAM_PIZZA: &str = "ham pizza";
pub const SEAFOOD_PIZZA: &str = "seafood pizza";
pub const VEGGIE_PIZZA: &str = "veggie pizza";

/// A pizza kind as requested by an order.
///
/// The key space is closed: the three kinds the kitchen knows, plus `Other`
/// for anything else, which keeps the raw order text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PizzaKind {
    Ham,
    Seafood,
    Veggie,
    Other(String),
}

impl PizzaKind {
    /// The kinds the kitchen has a dedicated handler for.
    pub const KNOWN: [PizzaKind; 3] = [PizzaKind::Ham, PizzaKind::Seafood, PizzaKind::Veggie];

    /// Classify an order by exact comparison against the known keys.
    ///
    /// Never fails: anything unrecognised, the empty string included, is
    /// `Other`.
    pub fn parse(order: &str) -> Self {
        match order {
            HAM_PIZZA => PizzaKind::Ham,
            SEAFOOD_PIZZA => PizzaKind::Seafood,
            VEGGIE_PIZZA => PizzaKind::Veggie,
            other => PizzaKind::Other(other.to_owned()),
        }
    }

    /// The order text this kind was (or would be) parsed from.
    pub fn as_str(&self) -> &str {
        match self {
            PizzaKind::Ham => HAM_PIZZA,
            PizzaKind::Seafood => SEAFOOD_PIZZA,
            PizzaKind::Veggie => VEGGIE_PIZZA,
            PizzaKind::Other(order) => order,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, PizzaKind::Other(_))
    }
}

impl FromStr for PizzaKind {
    type Err = Infallible;

    fn from_str(order: &str) -> Result<Self, Self::Err> {
        Ok(PizzaKind::parse(order))
    }
}

impl From<&str> for PizzaKind {
    fn from(order: &str) -> Self {
        PizzaKind::parse(order)
    }
}

impl fmt::Display for PizzaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
