//! # Using derive
//!
//! 1. [Overview](#overview)
//! 2. [Attributes](#attributes)
//!     1. [Container attributes](#container-attributes)
//!         1. [`#[enumtool(display)]`](#enumtooldisplay)
//!         2. [`#[enumtool(max_values = "N")]`](#enumtoolmax_values--n)
//!         3. [`#[enumtool(crate = "...")]`](#enumtoolcrate--)
//!     2. [Variant attributes](#variant-attributes)
//!         1. [`#[enumtool(rename = "name")]`](#enumtoolrename--name)
//!
//! ## Overview
//!
//! This crate contains the derive macro for implementing
//! `enumtool::Enumerated` on fieldless enums.
//!
//! The enum must have at least one variant, no variant may carry fields or
//! an explicit discriminant, and it must implement `Copy` and `Eq`. Each of
//! these is checked when deriving and reported as a compile error.
//!
//! ### Examples
//!
//! ```rust
//! # use enumtool_derive::Enumerated;
//! #
//! #[derive(Clone, Copy, PartialEq, Eq, Enumerated)]
//! enum Direction {
//!     North,
//!     East,
//!     South,
//!     West,
//! }
//!
//! assert_eq!(enumtool::num_values::<Direction>(), Ok(4));
//! assert_eq!(enumtool::value_name(Direction::South), Ok("South"));
//! ```
//!
//! ## Attributes
//!
//! ```rust
//! # use enumtool_derive::Enumerated;
//! #
//! #[derive(Clone, Copy, PartialEq, Eq, Enumerated)]
//! #[enumtool(max_values = "16")] // <-- This is a container attribute
//! enum Level {
//!     Low,
//!     #[enumtool(rename = "mid")] // <-- This is a variant attribute
//!     Medium,
//!     High,
//! }
//! ```
//!
//! ### Container attributes
//!
//! ##### `#[enumtool(display)]`
//!
//! Also implements `Display`, writing the value's name.
//!
//! ###### Example
//!
//! ```rust
//! # use enumtool_derive::Enumerated;
//! #
//! #[derive(Clone, Copy, PartialEq, Eq, Enumerated)]
//! #[enumtool(display)]
//! enum Answer {
//!     Yes,
//!     No,
//! }
//!
//! assert_eq!(Answer::No.to_string(), "No");
//! ```
//!
//! ##### `#[enumtool(max_values = "N")]`
//!
//! Sets `Enumerated::MAX_VALUES`, the ceiling used when resolving the value
//! count. Defaults to `enumtool::DEFAULT_MAX_VALUES`. An enum with more
//! variants than its ceiling does not compile.
//!
//! ###### Example
//!
//! ```rust
//! # use enumtool_derive::Enumerated;
//! # use enumtool::Enumerated as _;
//! #
//! #[derive(Clone, Copy, PartialEq, Eq, Enumerated)]
//! #[enumtool(max_values = "2")]
//! enum Bit {
//!     Zero,
//!     One,
//! }
//!
//! assert_eq!(Bit::MAX_VALUES, 2);
//! ```
//!
//! ##### `#[enumtool(crate = "...")]`
//!
//! Specify the path to the `enumtool` crate instance to use when referring
//! to its API in the generated code. This is usually not needed.
//!
//! ### Variant attributes
//!
//! ##### `#[enumtool(rename = "name")]`
//!
//! Use `name` instead of the variant's identifier as its display name. The
//! name must not be empty and must not contain `::`.
//!
//! ###### Example
//!
//! ```rust
//! # use enumtool_derive::Enumerated;
//! #
//! #[derive(Clone, Copy, PartialEq, Eq, Enumerated)]
//! enum Stage {
//!     #[enumtool(rename = "pre-flight")]
//!     PreFlight,
//!     Flight,
//! }
//!
//! assert_eq!(enumtool::value_name(Stage::PreFlight), Ok("pre-flight"));
//! ```

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_quote};

mod enumerated;
mod internal;

#[proc_macro_derive(Enumerated, attributes(enumtool))]
pub fn derive_enumerated(item: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(item as DeriveInput);
    let crate_path: syn::Path = parse_quote!(enumtool);
    enumerated::expand_enumerated(crate_path, &input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
