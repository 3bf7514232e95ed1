//! Implementation of the `#[mixin]` attribute macro
//!
//! Validates a mixin trait and emits, next to it, a crate-local
//! `macro_rules!` that hands the trait's member signatures to
//! `__compose_step!` whenever a `#[compose]` walks past this mixin.

use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{FnArg, Item, ItemTrait, ReturnType, TraitItem, TraitItemFn};

use crate::common::{check_generics, check_params, invalid_argument, mixin_macro_ident};

/// Name of the structural initializer every mixin must declare.
pub(crate) const INITIALIZER: &str = "initializer";

/// Entry point for the `#[mixin]` attribute macro.
pub fn mixin_impl(attr: TokenStream2, item: TokenStream2) -> syn::Result<TokenStream2> {
    if !attr.is_empty() {
        return Err(invalid_argument(attr, "`#[mixin]` takes no arguments"));
    }

    let mixin = match syn::parse2::<Item>(item)? {
        Item::Trait(mixin) => mixin,
        other => {
            return Err(invalid_argument(
                other,
                "`#[mixin]` can only be applied to a trait definition",
            ));
        }
    };

    let members = validate(&mixin)?;
    let macro_ident = mixin_macro_ident(&mixin.ident);
    let signatures = members.iter().map(|member| &member.sig);

    Ok(quote! {
        #mixin

        #[doc(hidden)]
        #[allow(unused_macros)]
        macro_rules! #macro_ident {
            ($($state:tt)*) => {
                ::pizzeria_core::__compose_step! {
                    $($state)*
                    members = { #(#signatures;)* }
                }
            };
        }

        #[doc(hidden)]
        #[allow(unused_imports)]
        pub(crate) use #macro_ident;
    })
}

// ============================================================================
// Validation
// ============================================================================

/// Check the mixin contract and return the members it exposes.
///
/// The initializer is structural: it is required, but never part of the
/// returned member list.
fn validate(mixin: &ItemTrait) -> syn::Result<Vec<&TraitItemFn>> {
    if !mixin.generics.params.is_empty() || mixin.generics.where_clause.is_some() {
        return Err(invalid_argument(
            &mixin.generics,
            "mixin traits cannot be generic",
        ));
    }

    let mut members = Vec::new();
    let mut has_initializer = false;

    for item in &mixin.items {
        let member = match item {
            TraitItem::Fn(member) => member,
            TraitItem::Const(constant) => {
                return Err(invalid_argument(
                    constant,
                    "mixins carry behavior only; associated constants are not supported",
                ));
            }
            TraitItem::Type(ty) => {
                return Err(invalid_argument(
                    ty,
                    "mixins carry behavior only; associated types are not supported",
                ));
            }
            other => {
                return Err(invalid_argument(other, "unsupported item in mixin"));
            }
        };

        if member.default.is_none() {
            return Err(invalid_argument(
                &member.sig,
                format!(
                    "mixin member `{}` must provide a default body",
                    member.sig.ident
                ),
            ));
        }

        if member.sig.ident == INITIALIZER {
            check_initializer(member)?;
            has_initializer = true;
            continue;
        }

        check_generics(&member.sig)?;
        check_params(&member.sig)?;
        members.push(member);
    }

    if !has_initializer {
        return Err(invalid_argument(
            &mixin.ident,
            format!(
                "mixin `{}` must declare `fn initializer(&mut self)`",
                mixin.ident
            ),
        ));
    }

    Ok(members)
}

/// The initializer takes `&mut self` and nothing else.
fn check_initializer(member: &TraitItemFn) -> syn::Result<()> {
    let sig = &member.sig;
    let takes_mut_self = matches!(
        sig.inputs.first(),
        Some(FnArg::Receiver(receiver))
            if receiver.reference.is_some() && receiver.mutability.is_some()
    );
    let returns_unit = matches!(sig.output, ReturnType::Default);

    if !takes_mut_self
        || sig.inputs.len() != 1
        || !returns_unit
        || !sig.generics.params.is_empty()
        || sig.asyncness.is_some()
    {
        return Err(invalid_argument(
            sig,
            "`initializer` must have the signature `fn initializer(&mut self)`",
        ));
    }
    Ok(())
}
