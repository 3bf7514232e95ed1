//! The composite contract.
//!
//! `#[compose(M1, M2, ...)]` on a struct or enum implements [`Composite`] for
//! it. The base value is built as usual and then handed to
//! [`Composite::from_base`], which runs every mixin initializer against it.
//!
//! ```
//! use pizzeria_core::{Chef, Composite};
//!
//! assert_eq!(Chef::MIXINS, ["PizzaHandling"]);
//! assert_eq!(Chef::provider_of("cook_pizza"), Some("PizzaHandling"));
//! assert_eq!(Chef::provider_of("initializer"), None);
//! ```
//!
//! Only `#[mixin]` traits can be composed:
//!
//! ```compile_fail
//! use pizzeria_core::compose;
//!
//! #[compose(std::fmt::Debug)]
//! struct Host;
//!
//! fn main() {}
//! ```
//!
//! A base cannot define a member that two mixins contend for:
//!
//! ```compile_fail,E0592
//! use pizzeria_core::{compose, mixin};
//!
//! #[mixin]
//! trait Loud {
//!     fn initializer(&mut self) {}
//!     fn shout(&self) -> &'static str { "LOUD" }
//! }
//!
//! #[mixin]
//! trait Louder {
//!     fn initializer(&mut self) {}
//!     fn shout(&self) -> &'static str { "LOUDER" }
//! }
//!
//! #[compose(Loud, Louder)]
//! struct Host;
//!
//! impl Host {
//!     fn shout(&self) -> &'static str { "host" }
//! }
//!
//! fn main() {}
//! ```

/// A type built from a base type and an ordered list of mixins.
///
/// Implemented by `#[compose]`; not meant to be implemented by hand.
pub trait Composite: Sized {
    /// Mixin names in composition order, duplicates included.
    const MIXINS: &'static [&'static str];

    /// Exposed members, in order of first appearance, each with the mixin
    /// that provides it after last-wins resolution.
    const MEMBERS: &'static [Member];

    /// Run each mixin's initializer against `self`, in composition order.
    fn initialize_mixins(&mut self);

    /// Finish constructing a composite from its fully built base value.
    fn from_base(mut base: Self) -> Self {
        tracing::trace!(
            composite = core::any::type_name::<Self>(),
            mixins = ?Self::MIXINS,
            "running mixin initializers"
        );
        base.initialize_mixins();
        base
    }

    /// Name of the mixin providing member `name`, if it is exposed.
    fn provider_of(name: &str) -> Option<&'static str> {
        Self::MEMBERS
            .iter()
            .find(|member| member.name == name)
            .map(|member| member.provider)
    }
}

/// One row of a composite's member table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Member {
    pub name: &'static str,
    pub provider: &'static str,
}

impl Member {
    pub const fn new(name: &'static str, provider: &'static str) -> Self {
        Self { name, provider }
    }
}
