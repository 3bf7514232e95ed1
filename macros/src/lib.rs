//! Procedural macros for composing types out of mixin traits.
//!
//! This crate provides the build-time half of Pizzeria's composition
//! mechanism:
//!
//! - `#[mixin]` - Declare a trait as a mixin and publish its member table
//! - `#[compose(...)]` - Compose a base type with an ordered list of mixins
//!
//! Generated code refers to `::pizzeria_core`, so crates that declare their
//! own mixins or composites depend on `pizzeria-core` directly.

extern crate proc_macro;

use proc_macro::TokenStream;

mod common;
mod compose;
mod mixin;

/// Declare a trait as a mixin.
///
/// A mixin is a stateless template: every member carries a default body, and
/// exactly one member is the initializer, which runs against each newly
/// composed instance.
///
/// # Example
///
/// ```ignore
/// use pizzeria_core::mixin;
///
/// #[mixin]
/// pub trait Greeting: HasName {
///     fn initializer(&mut self) {
///         self.name_mut().make_ascii_uppercase();
///     }
///
///     fn greet(&self) -> String {
///         format!("hello {}", self.name())
///     }
/// }
/// ```
///
/// Next to the trait, the macro emits a hidden crate-local macro carrying the
/// member signatures. `#[compose]` finds it through the path it is given for
/// the mixin, so mixins are composed from the crate that declares them.
///
/// # Restrictions
///
/// - `fn initializer(&mut self)` with a default body is required
/// - Every member must provide a default body
/// - Associated types and constants are not supported
/// - Generic type parameters are not supported, on the trait or its members
/// - Member parameters must be plain identifiers
///
/// Violations are reported as `[pizzeria] invalid argument: ...` errors.
#[proc_macro_attribute]
pub fn mixin(attr: TokenStream, item: TokenStream) -> TokenStream {
    mixin::mixin_impl(attr.into(), item.into())
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Compose a base type with an ordered list of mixins.
///
/// The annotated struct or enum is the base type. The macro implements every
/// listed mixin for it and implements [`Composite`], whose `from_base` runs
/// each mixin's initializer in list order, once per occurrence.
///
/// [`Composite`]: pizzeria_core::Composite
///
/// # Example
///
/// ```ignore
/// use pizzeria_core::{Composite, compose};
///
/// #[compose(crate::greeting::Greeting, crate::audit::Audit)]
/// pub struct Host {
///     name: String,
/// }
///
/// let host = Host::from_base(Host { name: "ada".into() });
/// ```
///
/// # Member Resolution
///
/// - When two distinct mixins define the same member, the composite gets an
///   inherent method forwarding to the last one in the list.
/// - The base type's own inherent methods take precedence over mixin members
///   that only one mixin defines.
/// - `initializer` is never exposed as a member.
///
/// # Restrictions
///
/// - The base must be a non-generic struct or enum
/// - Each mixin must be named by a path under which its `#[mixin]` member
///   table is reachable: the trait's own module, or a full path to it
/// - Every listed path must name a `#[mixin]` trait. Anything else, such as
///   `#[compose(std::fmt::Debug)]`, fails with rustc's
///   "cannot find macro `__mixin_Debug`"
/// - The base must not define an inherent method named like a member that two
///   distinct mixins define: the generated delegate collides with it and
///   rustc reports E0592 "duplicate definitions"
#[proc_macro_attribute]
pub fn compose(attr: TokenStream, item: TokenStream) -> TokenStream {
    compose::compose_impl(attr.into(), item.into())
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// One step of a `#[compose]` expansion. Not public API.
#[doc(hidden)]
#[proc_macro]
pub fn __compose_step(input: TokenStream) -> TokenStream {
    compose::compose_step_impl(input.into())
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
