//! Pizza handlers and the factory that picks one per pizza kind.
//!
//! Handlers are stateless, so the factory hands out `'static` references to
//! unit values. Every kind resolves to a handler: the three known kinds to
//! their own, everything else to [`UnregisteredPizzaHandler`].

use crate::kind::PizzaKind;
use crate::report::Report;

/// Strategy for one pizza kind.
pub trait PizzaHandler: Send + Sync {
    /// Short name, used in logs.
    fn name(&self) -> &'static str;

    /// What needs to be fetched from stock.
    fn ingredients(&self) -> Report;

    /// How the pizza is cooked.
    fn cook(&self) -> Report;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HamPizzaHandler;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeafoodPizzaHandler;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VeggiePizzaHandler;

/// Fallback for kinds without a registered handler.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnregisteredPizzaHandler;

static_assertions::assert_impl_all!(HamPizzaHandler: PizzaHandler, Send, Sync);
static_assertions::assert_impl_all!(SeafoodPizzaHandler: PizzaHandler, Send, Sync);
static_assertions::assert_impl_all!(VeggiePizzaHandler: PizzaHandler, Send, Sync);
static_assertions::assert_impl_all!(UnregisteredPizzaHandler: PizzaHandler, Send, Sync);
static_assertions::assert_eq_size!(HamPizzaHandler, ());
static_assertions::assert_eq_size!(UnregisteredPizzaHandler, ());

impl PizzaHandler for HamPizzaHandler {
    fn name(&self) -> &'static str {
        "ham"
    }

    fn ingredients(&self) -> Report {
        Report::fetch(3, "slices of ham", "ham")
    }

    fn cook(&self) -> Report {
        Report::cook("ham", 3)
    }
}

impl PizzaHandler for SeafoodPizzaHandler {
    fn name(&self) -> &'static str {
        "seafood"
    }

    fn ingredients(&self) -> Report {
        Report::fetch(5, "shrimps", "seafood")
    }

    fn cook(&self) -> Report {
        Report::cook("seafood", 5)
    }
}

impl PizzaHandler for VeggiePizzaHandler {
    fn name(&self) -> &'static str {
        "veggie"
    }

    fn ingredients(&self) -> Report {
        Report::fetch(2, "cucumbers", "veggie")
    }

    fn cook(&self) -> Report {
        Report::cook("veggie", 2)
    }
}

impl PizzaHandler for UnregisteredPizzaHandler {
    fn name(&self) -> &'static str {
        "unregistered"
    }

    fn ingredients(&self) -> Report {
        Report::NoIngredient
    }

    fn cook(&self) -> Report {
        Report::CannotCook
    }
}

/// Maps pizza kinds to their handlers.
pub struct PizzaHandlerFactory;

impl PizzaHandlerFactory {
    /// Handler registered for `kind`, or the fallback.
    pub fn handler(kind: &PizzaKind) -> &'static dyn PizzaHandler {
        let handler: &'static dyn PizzaHandler = match kind {
            PizzaKind::Ham => &HamPizzaHandler,
            PizzaKind::Seafood => &SeafoodPizzaHandler,
            PizzaKind::Veggie => &VeggiePizzaHandler,
            PizzaKind::Other(_) => &UnregisteredPizzaHandler,
        };
        tracing::trace!(%kind, handler = handler.name(), "resolved pizza handler");
        handler
    }

    /// Handler for a raw order string. Total: unknown orders get the fallback.
    pub fn resolve(order: &str) -> &'static dyn PizzaHandler {
        Self::handler(&PizzaKind::parse(order))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::init_test_logging;
    use pretty_assertions::assert_eq;

    fn lines(handler: &dyn PizzaHandler) -> [String; 2] {
        [handler.ingredients().to_string(), handler.cook().to_string()]
    }

    #[test]
    fn test_known_kinds() {
        init_test_logging();

        assert_eq!(
            lines(PizzaHandlerFactory::resolve("ham pizza")),
            [
                "get 3 slices of ham to cook a ham pizza",
                "cook a ham pizza for 3 minutes"
            ]
        );
        assert_eq!(
            lines(PizzaHandlerFactory::resolve("seafood pizza")),
            [
                "get 5 shrimps to cook a seafood pizza",
                "cook a seafood pizza for 5 minutes"
            ]
        );
        assert_eq!(
            lines(PizzaHandlerFactory::resolve("veggie pizza")),
            [
                "get 2 cucumbers to cook a veggie pizza",
                "cook a veggie pizza for 2 minutes"
            ]
        );
    }

    #[test]
    fn test_unknown_kinds_fall_back() {
        for order in ["", "random pizza", "HAM PIZZA", "pizza"] {
            let handler = PizzaHandlerFactory::resolve(order);
            assert_eq!(handler.name(), "unregistered");
            assert_eq!(
                lines(handler),
                [
                    "no ingredient for that kind of pizza",
                    "cannot cook that kind of pizza"
                ]
            );
        }
    }

    #[test]
    fn test_resolution_is_repeatable() {
        for kind in PizzaKind::KNOWN {
            let first = PizzaHandlerFactory::handler(&kind);
            let second = PizzaHandlerFactory::handler(&kind);
            assert_eq!(first.name(), second.name());
            assert_eq!(first.ingredients(), second.ingredients());
            assert_eq!(first.cook(), second.cook());
        }
    }
}
