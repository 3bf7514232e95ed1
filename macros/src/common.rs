//! Shared utilities for the composition macros.

use proc_macro2::Span;
use quote::{ToTokens, format_ident};
use syn::{FnArg, GenericParam, Ident, Pat, Path, PathArguments, Signature};

/// Build an `InvalidArgument` error pointing at `tokens`.
pub(crate) fn invalid_argument<T: ToTokens>(tokens: T, message: impl std::fmt::Display) -> syn::Error {
    syn::Error::new_spanned(tokens, format!("[pizzeria] invalid argument: {message}"))
}

/// Build an `InvalidArgument` error at an explicit span.
pub(crate) fn invalid_argument_at(span: Span, message: impl std::fmt::Display) -> syn::Error {
    syn::Error::new(span, format!("[pizzeria] invalid argument: {message}"))
}

/// Name of the hidden `macro_rules!` that carries a mixin's member table.
///
/// Examples:
/// - `PizzaHandling` -> `__mixin_PizzaHandling`
/// - `Audit` -> `__mixin_Audit`
pub(crate) fn mixin_macro_ident(mixin: &Ident) -> Ident {
    format_ident!("__mixin_{}", mixin, span = mixin.span())
}

/// Path of the member-table macro for the mixin trait at `path`.
///
/// The macro is re-exported next to the trait, so only the last segment
/// changes: `crate::handling::PizzaHandling` ->
/// `crate::handling::__mixin_PizzaHandling`.
pub(crate) fn mixin_macro_path(path: &Path) -> Path {
    let mut macro_path = path.clone();
    if let Some(last) = macro_path.segments.last_mut() {
        last.ident = mixin_macro_ident(&last.ident);
        last.arguments = PathArguments::None;
    }
    macro_path
}

/// Display name of a mixin: the last segment of its path.
pub(crate) fn path_name(path: &Path) -> String {
    path.segments
        .last()
        .map(|segment| segment.ident.to_string())
        .unwrap_or_default()
}

/// Stable textual key used to tell mixin paths apart.
pub(crate) fn path_key(path: &Path) -> String {
    path.to_token_stream().to_string()
}

/// Reject type and const generics; lifetimes are fine.
pub(crate) fn check_generics(sig: &Signature) -> syn::Result<()> {
    for param in &sig.generics.params {
        match param {
            GenericParam::Lifetime(_) => {}
            GenericParam::Type(type_param) => {
                return Err(invalid_argument(
                    type_param,
                    "generic type parameters are not supported in mixin members",
                ));
            }
            GenericParam::Const(const_param) => {
                return Err(invalid_argument(
                    const_param,
                    "const generics are not supported in mixin members",
                ));
            }
        }
    }
    Ok(())
}

/// Parameters must be plain identifiers so that delegates can forward them.
pub(crate) fn check_params(sig: &Signature) -> syn::Result<()> {
    for input in &sig.inputs {
        let FnArg::Typed(pat_type) = input else {
            continue;
        };
        match &*pat_type.pat {
            Pat::Ident(pat_ident) if pat_ident.subpat.is_none() && pat_ident.by_ref.is_none() => {}
            other => {
                return Err(invalid_argument(
                    other,
                    "mixin member parameters must be plain identifiers",
                ));
            }
        }
    }
    Ok(())
}
