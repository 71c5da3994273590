use quote::ToTokens;
use syn::meta::ParseNestedMeta;
use syn::parse::Parse;
use syn::{Attribute, Expr, ExprLit, Lit};

use super::Context;
use super::symbol::{CRATE, DISPLAY, ENUMTOOL, MAX_VALUES, RENAME, Symbol};

#[derive(Debug, PartialEq, Eq)]
pub struct Variant {
    pub rename: Option<syn::LitStr>,
}

impl Variant {
    pub fn from_ast(ctx: &Context, attrs: &[Attribute]) -> Variant {
        let mut rename = None;
        for attr in attrs {
            if attr.path() != ENUMTOOL {
                continue;
            }
            if let Err(err) = attr.parse_nested_meta(|meta| {
                if meta.path == RENAME {
                    if let Some(name) = get_lit_str(ctx, &meta, RENAME)? {
                        let value = name.value();
                        if value.is_empty() {
                            ctx.error_spanned(&name, "renamed value must not be empty");
                        } else if value.contains("::") {
                            ctx.error_spanned(&name, "renamed value must not contain `::`");
                        }
                        rename = Some(name);
                    }
                } else {
                    let path = meta.path.to_token_stream().to_string();
                    return Err(meta.error(format_args!(
                        "unknown enumtool variant attribute '{}'",
                        path
                    )));
                }
                Ok(())
            }) {
                ctx.syn_error(err);
            }
        }

        Variant { rename }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Container {
    pub crate_path: Option<syn::Path>,
    pub max_values: Option<usize>,
    pub display: Option<syn::Path>,
}

impl Container {
    pub fn from_ast(ctx: &Context, attrs: &[Attribute]) -> Container {
        let mut crate_path = None;
        let mut max_values = None;
        let mut display = None;

        for attr in attrs {
            if attr.path() != ENUMTOOL {
                continue;
            }
            if let Err(err) = attr.parse_nested_meta(|meta| {
                if meta.path == CRATE {
                    crate_path = parse_lit(ctx, &meta, CRATE)?;
                } else if meta.path == MAX_VALUES {
                    if let Some(lit) = parse_lit::<syn::LitInt>(ctx, &meta, MAX_VALUES)? {
                        max_values = Some(lit.base10_parse::<usize>()?);
                    }
                } else if meta.path == DISPLAY {
                    display = Some(meta.path);
                } else {
                    let path = meta.path.to_token_stream().to_string();
                    return Err(meta.error(format_args!(
                        "unknown enumtool container attribute '{}'",
                        path
                    )));
                }
                Ok(())
            }) {
                ctx.syn_error(err);
            }
        }

        Container {
            crate_path,
            max_values,
            display,
        }
    }
}

pub fn get_lit_str(
    ctx: &Context,
    meta: &ParseNestedMeta,
    attr: Symbol,
) -> syn::Result<Option<syn::LitStr>> {
    let expr: Expr = meta.value()?.parse()?;
    let mut value = &expr;
    while let Expr::Group(e) = value {
        value = &e.expr;
    }
    if let Expr::Lit(ExprLit {
        lit: Lit::Str(s), ..
    }) = value
    {
        Ok(Some(s.clone()))
    } else {
        ctx.error_spanned(
            expr,
            format_args!("expected enumtool attribute {} to be string", attr),
        );
        Ok(None)
    }
}

pub fn parse_lit<T: Parse>(
    ctx: &Context,
    meta: &ParseNestedMeta,
    attr: Symbol,
) -> syn::Result<Option<T>> {
    match get_lit_str(ctx, meta, attr)? {
        Some(lit) => Ok(Some(lit.parse()?)),
        None => Ok(None),
    }
}
