use std::cell::RefCell;
use std::fmt;
use std::thread;

use quote::ToTokens;
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{DeriveInput, Token};

pub mod attrs;
mod symbol;

/// Collects errors while walking the input so they can all be reported
/// together.
pub struct Context {
    errors: RefCell<Option<Vec<syn::Error>>>,
}

impl Context {
    pub fn new() -> Context {
        Context {
            errors: RefCell::new(Some(Vec::new())),
        }
    }

    pub fn syn_error(&self, error: syn::Error) {
        self.errors
            .borrow_mut()
            .as_mut()
            .expect("Context already checked")
            .push(error);
    }

    pub fn error_spanned<T: ToTokens, D: fmt::Display>(&self, tokens: T, message: D) {
        self.syn_error(syn::Error::new_spanned(tokens, message));
    }

    pub fn check(self) -> syn::Result<()> {
        let mut errors = self
            .errors
            .borrow_mut()
            .take()
            .expect("Context already checked")
            .into_iter();
        let Some(mut combined) = errors.next() else {
            return Ok(());
        };
        for error in errors {
            combined.combine(error);
        }
        Err(combined)
    }
}

impl Drop for Context {
    fn drop(&mut self) {
        if !thread::panicking() && self.errors.borrow().is_some() {
            panic!("forgot to check for errors");
        }
    }
}

pub struct Container<'a> {
    pub ident: &'a syn::Ident,
    pub attrs: attrs::Container,
    pub variants: Vec<Variant<'a>>,
    pub crate_path: syn::Path,
}

impl<'a> Container<'a> {
    pub fn from_ast(
        ctx: &Context,
        crate_path: syn::Path,
        input: &'a DeriveInput,
    ) -> Option<Container<'a>> {
        let attrs = attrs::Container::from_ast(ctx, &input.attrs);
        let variants = match &input.data {
            syn::Data::Enum(data) => Variant::from_ast_list(ctx, &data.variants),
            syn::Data::Struct(data) => {
                ctx.error_spanned(
                    data.struct_token,
                    "Enumerated can only be derived for enums",
                );
                return None;
            }
            syn::Data::Union(data) => {
                ctx.error_spanned(data.union_token, "Enumerated can only be derived for enums");
                return None;
            }
        };
        if !input.generics.params.is_empty() {
            ctx.error_spanned(
                &input.generics,
                "Enumerated can not be derived for generic enums",
            );
        }
        if variants.is_empty() {
            ctx.error_spanned(&input.ident, "Enumerated requires at least one variant");
        }
        if let Some(max_values) = attrs.max_values
            && variants.len() > max_values
        {
            ctx.error_spanned(
                &input.ident,
                format_args!(
                    "enum has {} variants but max_values is {}",
                    variants.len(),
                    max_values
                ),
            );
        }
        Some(Container {
            ident: &input.ident,
            attrs,
            variants,
            crate_path,
        })
    }

    pub fn crate_path(&self) -> &syn::Path {
        if let Some(crate_path) = self.attrs.crate_path.as_ref() {
            crate_path
        } else {
            &self.crate_path
        }
    }
}

pub struct Variant<'a> {
    pub ident: &'a syn::Ident,
    pub attrs: attrs::Variant,
    pub original: &'a syn::Variant,
}

impl<'a> Variant<'a> {
    pub fn from_ast(ctx: &Context, variant: &'a syn::Variant) -> Variant<'a> {
        match &variant.fields {
            syn::Fields::Unit => {}
            fields => ctx.error_spanned(fields, "Enumerated variants can not have fields"),
        }
        if let Some((_, discriminant)) = variant.discriminant.as_ref() {
            ctx.error_spanned(
                discriminant,
                "Enumerated variants can not have explicit discriminants",
            );
        }
        Variant {
            ident: &variant.ident,
            attrs: attrs::Variant::from_ast(ctx, &variant.attrs),
            original: variant,
        }
    }

    pub fn from_ast_list(
        ctx: &Context,
        variants: &'a Punctuated<syn::Variant, Token![,]>,
    ) -> Vec<Variant<'a>> {
        variants.iter().map(|v| Variant::from_ast(ctx, v)).collect()
    }

    /// Text the value is displayed as.
    pub fn name(&self) -> syn::LitStr {
        use syn::ext::IdentExt as _;

        match self.attrs.rename.as_ref() {
            Some(rename) => rename.clone(),
            None => syn::LitStr::new(&self.ident.unraw().to_string(), self.original.span()),
        }
    }
}
