//! The `describe` command - show how the kitchen types are composed.

use std::fmt::Write;

use pizzeria::{Chef, Composite, Stock};

/// Run the describe command.
pub fn run() {
    print!("{}", describe());
}

/// The composition table of every composed kitchen type.
pub fn describe() -> String {
    let mut out = String::new();
    describe_type::<Chef>(&mut out, "Chef");
    describe_type::<Stock>(&mut out, "Stock");
    out
}

fn describe_type<T: Composite>(out: &mut String, name: &str) {
    // Writing to a String cannot fail.
    let _ = writeln!(out, "{} composed with {}", name, T::MIXINS.join(", "));
    for member in T::MEMBERS {
        let _ = writeln!(out, "  {} from {}", member.name, member.provider);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe() {
        assert_eq!(
            describe(),
            "Chef composed with PizzaHandling\n\
             \x20 get_pizza_ingredients from PizzaHandling\n\
             \x20 cook_pizza from PizzaHandling\n\
             Stock composed with PizzaHandling\n\
             \x20 get_pizza_ingredients from PizzaHandling\n\
             \x20 cook_pizza from PizzaHandling\n"
        );
    }
}
