//! Integration tests for the public API.
//!
//! These tests exercise the kitchen end-to-end through the crate root
//! exports: handler dispatch, the composed chef, and the demo driver.

use pizzeria_core::demo;
use pizzeria_core::{
    Chef, Composite, DEMO_ORDERS, Design, PizzaHandlerFactory, PizzaHandling, PizzaKind,
    PizzaMaker, Report, Stock,
};
use pretty_assertions::assert_eq;

fn lines<I: IntoIterator<Item = Report>>(reports: I) -> Vec<String> {
    reports.into_iter().map(|report| report.to_string()).collect()
}

#[test]
fn test_chef_makes_ham_pizza() {
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
fn test_chef_falls_back_for_unknown_pizza() {
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
fn test_every_known_kind_has_its_own_handler() {
    let expected = [
        (PizzaKind::Ham, Report::fetch(3, "slices of ham", "ham"), Report::cook("ham", 3)),
        (PizzaKind::Seafood, Report::fetch(5, "shrimps", "seafood"), Report::cook("seafood", 5)),
        (PizzaKind::Veggie, Report::fetch(2, "cucumbers", "veggie"), Report::cook("veggie", 2)),
    ];

    for (kind, fetch, cook) in expected {
        let handler = PizzaHandlerFactory::resolve(kind.as_str());
        assert_eq!(handler.ingredients(), fetch);
        assert_eq!(handler.cook(), cook);
    }
}

#[test]
fn test_empty_order_falls_back() {
    let handler = PizzaHandlerFactory::resolve("");
    assert_eq!(handler.ingredients(), Report::NoIngredient);
    assert_eq!(handler.cook(), Report::CannotCook);
}

#[test]
fn test_mixin_members_on_stock() {
    let stock = Stock::new();
    assert_eq!(
        stock.get_pizza_ingredients(&PizzaKind::Seafood),
        Report::fetch(5, "shrimps", "seafood")
    );
    assert_eq!(stock.cook_pizza(&PizzaKind::Other("calzone".into())), Report::CannotCook);
    assert_eq!(Stock::MIXINS, ["PizzaHandling"]);
}

#[test]
fn test_designs_through_trait_objects() {
    for design in Design::ALL {
        let chef: Box<dyn PizzaMaker> = design.chef();
        assert_eq!(
            lines(chef.make_pizza("veggie pizza")),
            [
                "get 2 cucumbers to cook a veggie pizza",
                "cook a veggie pizza for 2 minutes"
            ]
        );
    }
}

#[test]
fn test_demo_run() {
    let reports = demo::run(Design::default(), &DEMO_ORDERS);
    assert_eq!(reports.len(), 2 * DEMO_ORDERS.len());
    assert_eq!(reports.last(), Some(&Report::CannotCook));

    let reports = demo::run(Design::Naive, &DEMO_ORDERS);
    assert_eq!(
        reports.last(),
        Some(&Report::CannotCookOrder("random pizza".into()))
    );
}
