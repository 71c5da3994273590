use proc_macro2::{Literal, Span, TokenStream};
use quote::{quote, quote_spanned};
use syn::{DeriveInput, Path};

use crate::internal::{Container, Context};

pub fn expand_enumerated(crate_path: Path, input: &DeriveInput) -> syn::Result<TokenStream> {
    let cx = Context::new();
    let cont = Container::from_ast(&cx, crate_path, input);
    cx.check()?;
    let cont = cont.unwrap();

    let enumerated = enumerated_impl(&cont);
    let display = cont.attrs.display.as_ref().map(|path| {
        let span = path.get_ident().map_or_else(Span::call_site, |ident| ident.span());
        display_impl(&cont, span)
    });
    Ok(quote! {
        #enumerated
        #display
    })
}

fn enumerated_impl(cont: &Container) -> TokenStream {
    let crate_path = cont.crate_path();
    let ident = cont.ident;
    let count = cont.variants.len();
    let names = cont.variants.iter().map(|variant| variant.name());
    let ordinals = (0..count).map(Literal::usize_unsuffixed);
    let variants = cont.variants.iter().map(|variant| variant.ident);
    let max_values = cont.attrs.max_values.map(|max| {
        quote! {
            const MAX_VALUES: usize = #max;
        }
    });
    let ident_s = syn::LitStr::new(&ident.to_string(), ident.span());

    quote! {
        #[automatically_derived]
        impl #crate_path::Enumerated for #ident {
            #max_values

            fn value_signature(ordinal: usize) -> ::core::option::Option<&'static str> {
                const SIGNATURES: [&str; #count] = [
                    #(::core::concat!(::core::stringify!(#ident), "::", #names),)*
                ];
                SIGNATURES.get(ordinal).copied()
            }

            fn from_ordinal(ordinal: usize) -> ::core::option::Option<Self> {
                match ordinal {
                    #(#ordinals => ::core::option::Option::Some(Self::#variants),)*
                    _ => ::core::option::Option::None,
                }
            }

            fn ordinal(self) -> usize {
                self as usize
            }

            fn name_cache() -> &'static #crate_path::NameCache {
                static CACHE: #crate_path::NameCache = #crate_path::NameCache::new();
                &CACHE
            }
        }

        const _: () = ::core::assert!(
            #count <= <#ident as #crate_path::Enumerated>::MAX_VALUES,
            ::core::concat!(#ident_s, " has more variants than Enumerated::MAX_VALUES")
        );
    }
}

fn display_impl(cont: &Container, span: Span) -> TokenStream {
    let crate_path = cont.crate_path();
    let ident = cont.ident;
    quote_spanned! {span=>
        #[automatically_derived]
        impl ::core::fmt::Display for #ident {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                let name = #crate_path::value_name(*self).map_err(|_| ::core::fmt::Error)?;
                f.pad(name)
            }
        }
    }
}
