//! Implementation of the `#[compose(...)]` attribute macro
//!
//! A proc macro cannot look inside another item, so the mixin member tables
//! are collected by walking the mixin list: `#[compose]` invokes the
//! member-table macro of the first mixin, that macro appends its signatures
//! and calls `__compose_step!`, which either moves on to the next mixin or,
//! once the list is exhausted, generates the composite.

use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::parse::{Parse, ParseStream, Parser};
use syn::punctuated::Punctuated;
use syn::{
    FnArg, Ident, Item, Pat, PatIdent, Path, Token, TraitItemFn, Visibility, braced, bracketed,
};

use crate::common::{invalid_argument, invalid_argument_at, mixin_macro_path, path_key, path_name};

mod kw {
    syn::custom_keyword!(target);
    syn::custom_keyword!(vis);
    syn::custom_keyword!(pending);
    syn::custom_keyword!(resolved);
    syn::custom_keyword!(current);
    syn::custom_keyword!(members);
}

/// Entry point for the `#[compose(...)]` attribute macro.
pub fn compose_impl(attr: TokenStream2, item: TokenStream2) -> syn::Result<TokenStream2> {
    let mixins = parse_mixin_list(attr)?;

    let item = syn::parse2::<Item>(item)?;
    let (target, vis, generics) = match &item {
        Item::Struct(base) => (&base.ident, &base.vis, &base.generics),
        Item::Enum(base) => (&base.ident, &base.vis, &base.generics),
        other => {
            return Err(invalid_argument(
                other,
                "`#[compose]` expects a struct or enum to use as the base type",
            ));
        }
    };

    if !generics.params.is_empty() || generics.where_clause.is_some() {
        return Err(invalid_argument(
            generics,
            "composed types cannot be generic",
        ));
    }

    let state = ComposeState {
        target: target.clone(),
        vis: vis.clone(),
        pending: mixins,
        resolved: Vec::new(),
    };
    let expansion = state.advance();

    Ok(quote! {
        #item
        #expansion
    })
}

/// Entry point for the hidden `__compose_step!` macro.
pub fn compose_step_impl(input: TokenStream2) -> syn::Result<TokenStream2> {
    let state = syn::parse2::<ComposeState>(input)?;
    Ok(state.advance())
}

/// Parse the attribute arguments: a comma separated list of mixin paths.
fn parse_mixin_list(attr: TokenStream2) -> syn::Result<Vec<Path>> {
    let parser = |input: ParseStream| {
        Punctuated::<Path, Token![,]>::parse_terminated_with(input, Path::parse_mod_style)
    };
    parser
        .parse2(attr)
        .map(|list| list.into_iter().collect())
        .map_err(|err| {
            invalid_argument_at(
                err.span(),
                "expected a comma separated list of mixin trait paths",
            )
        })
}

// ============================================================================
// Data Structures
// ============================================================================

/// Everything `__compose_step!` carries from one mixin to the next.
struct ComposeState {
    /// The base type being composed.
    target: Ident,
    /// Visibility of the base type, reused for generated delegates.
    vis: Visibility,
    /// Mixins whose member tables have not been collected yet.
    pending: Vec<Path>,
    /// Mixins in composition order, with their member signatures.
    resolved: Vec<ResolvedMixin>,
}

struct ResolvedMixin {
    path: Path,
    members: Vec<TraitItemFn>,
}

/// One exposed member name and the mixin that wins it.
struct MemberSlot {
    name: Ident,
    /// Index into `ComposeState::resolved`.
    provider: usize,
    /// Whether two distinct mixins define this name.
    collided: bool,
}

// ============================================================================
// State Transport
// ============================================================================

// Grammar:
//
//     target = Ident ;
//     vis = [ Visibility ] ;
//     pending = [ Path, ... ] ;
//     resolved = [ Path { fn ...; ... } ... ] ;
//     ( current = Path ; members = { fn ...; ... } )?
impl Parse for ComposeState {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        input.parse::<kw::target>()?;
        input.parse::<Token![=]>()?;
        let target: Ident = input.parse()?;
        input.parse::<Token![;]>()?;

        input.parse::<kw::vis>()?;
        input.parse::<Token![=]>()?;
        let content;
        bracketed!(content in input);
        let vis: Visibility = content.parse()?;
        input.parse::<Token![;]>()?;

        input.parse::<kw::pending>()?;
        input.parse::<Token![=]>()?;
        let content;
        bracketed!(content in input);
        let pending = Punctuated::<Path, Token![,]>::parse_terminated_with(
            &content,
            Path::parse_mod_style,
        )?
        .into_iter()
        .collect();
        input.parse::<Token![;]>()?;

        input.parse::<kw::resolved>()?;
        input.parse::<Token![=]>()?;
        let content;
        bracketed!(content in input);
        let mut resolved = Vec::new();
        while !content.is_empty() {
            let path = content.call(Path::parse_mod_style)?;
            let body;
            braced!(body in content);
            resolved.push(ResolvedMixin {
                path,
                members: parse_members(&body)?,
            });
        }
        input.parse::<Token![;]>()?;

        // The member-table macro of `current` appends `members = { ... }`.
        if input.peek(kw::current) {
            input.parse::<kw::current>()?;
            input.parse::<Token![=]>()?;
            let path = input.call(Path::parse_mod_style)?;
            input.parse::<Token![;]>()?;

            input.parse::<kw::members>()?;
            input.parse::<Token![=]>()?;
            let body;
            braced!(body in input);
            resolved.push(ResolvedMixin {
                path,
                members: parse_members(&body)?,
            });
        }

        Ok(ComposeState {
            target,
            vis,
            pending,
            resolved,
        })
    }
}

fn parse_members(input: ParseStream) -> syn::Result<Vec<TraitItemFn>> {
    let mut members = Vec::new();
    while !input.is_empty() {
        members.push(input.parse()?);
    }
    Ok(members)
}

impl ComposeState {
    /// Hand the state to the next mixin's member-table macro, or finish.
    fn advance(mut self) -> TokenStream2 {
        if self.pending.is_empty() {
            return self.finish();
        }

        let next = self.pending.remove(0);
        let macro_path = mixin_macro_path(&next);
        let target = &self.target;
        let vis = &self.vis;
        let pending = &self.pending;
        let resolved = self.resolved.iter().map(|mixin| {
            let path = &mixin.path;
            let signatures = mixin.members.iter().map(|member| &member.sig);
            quote!(#path { #(#signatures;)* })
        });

        quote! {
            #macro_path! {
                target = #target;
                vis = [#vis];
                pending = [#(#pending),*];
                resolved = [#(#resolved)*];
                current = #next;
            }
        }
    }

    // ========================================================================
    // Code Generation
    // ========================================================================

    fn finish(&self) -> TokenStream2 {
        let target = &self.target;

        // A mixin listed twice is implemented once; its initializer still runs
        // once per occurrence.
        let mut implemented = Vec::new();
        let mut mixin_impls = Vec::new();
        for mixin in &self.resolved {
            let key = path_key(&mixin.path);
            if implemented.contains(&key) {
                continue;
            }
            implemented.push(key);
            let path = &mixin.path;
            mixin_impls.push(quote!(impl #path for #target {}));
        }

        let initializers = self.resolved.iter().map(|mixin| {
            let path = &mixin.path;
            quote!(<Self as #path>::initializer(self);)
        });
        let mixin_names = self.resolved.iter().map(|mixin| path_name(&mixin.path));

        let slots = resolve_members(&self.resolved);
        let member_table = slots.iter().map(|slot| {
            let name = slot.name.to_string();
            let provider = path_name(&self.resolved[slot.provider].path);
            quote!(::pizzeria_core::Member::new(#name, #provider))
        });

        let delegates: Vec<_> = slots
            .iter()
            .filter(|slot| slot.collided)
            .filter_map(|slot| {
                let mixin = &self.resolved[slot.provider];
                mixin
                    .members
                    .iter()
                    .find(|member| member.sig.ident == slot.name)
                    .map(|member| delegate(&self.vis, &mixin.path, member))
            })
            .collect();
        let delegate_impl = if delegates.is_empty() {
            quote!()
        } else {
            quote! {
                #[allow(dead_code)]
                impl #target {
                    #(#delegates)*
                }
            }
        };

        quote! {
            #(#mixin_impls)*

            #delegate_impl

            impl ::pizzeria_core::Composite for #target {
                const MIXINS: &'static [&'static str] = &[#(#mixin_names),*];
                const MEMBERS: &'static [::pizzeria_core::Member] = &[#(#member_table),*];

                fn initialize_mixins(&mut self) {
                    #(#initializers)*
                }
            }
        }
    }
}

/// Resolve member names across mixins; the last mixin defining a name wins.
///
/// Slots keep the order in which names first appear.
fn resolve_members(mixins: &[ResolvedMixin]) -> Vec<MemberSlot> {
    let mut slots: Vec<MemberSlot> = Vec::new();

    for (index, mixin) in mixins.iter().enumerate() {
        let key = path_key(&mixin.path);
        for member in &mixin.members {
            let name = &member.sig.ident;
            match slots.iter_mut().find(|slot| slot.name == *name) {
                Some(slot) => {
                    if path_key(&mixins[slot.provider].path) != key {
                        slot.collided = true;
                    }
                    slot.provider = index;
                }
                None => slots.push(MemberSlot {
                    name: name.clone(),
                    provider: index,
                    collided: false,
                }),
            }
        }
    }

    slots
}

/// Inherent method forwarding a collided member to the mixin that wins it.
///
/// Receiver and parameters are re-spanned here so that the signature and the
/// forwarding call agree on hygiene.
fn delegate(vis: &Visibility, path: &Path, member: &TraitItemFn) -> TokenStream2 {
    let mut sig = member.sig.clone();
    let name = sig.ident.clone();
    let mut call_args = Vec::new();

    for (index, input) in sig.inputs.iter_mut().enumerate() {
        match input {
            FnArg::Receiver(receiver) => {
                receiver.self_token = Default::default();
                call_args.push(quote!(self));
            }
            FnArg::Typed(pat_type) => {
                let arg = format_ident!("__arg{}", index);
                *pat_type.pat = Pat::Ident(PatIdent {
                    attrs: Vec::new(),
                    by_ref: None,
                    mutability: None,
                    ident: arg.clone(),
                    subpat: None,
                });
                call_args.push(quote!(#arg));
            }
        }
    }

    let call = quote!(<Self as #path>::#name(#(#call_args),*));
    let call = if sig.asyncness.is_some() {
        quote!(#call.await)
    } else {
        call
    };
    let body = if sig.unsafety.is_some() {
        quote!(unsafe { #call })
    } else {
        call
    };

    quote! {
        #[inline]
        #vis #sig {
            #body
        }
    }
}
