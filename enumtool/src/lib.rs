// SPDX-FileCopyrightText: 2024 griff
//
// SPDX-License-Identifier: EUPL-1.2 or MIT

//! Names and value counts for fieldless enums, without a hand written
//! name table.
//!
//! An [`Enumerated`] type has values at the consecutive ordinals `0..N`.
//! From the raw signatures it provides, this crate extracts the display
//! name of the type and of each value, finds `N`, and keeps the cleaned
//! names in a per-type cache that is filled on first use.
//!
//! ```rust
//! use enumtool::Enumerated;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Enumerated)]
//! enum Color {
//!     Red,
//!     Green,
//!     #[enumtool(rename = "sky blue")]
//!     Blue,
//! }
//!
//! assert_eq!(enumtool::type_display_name::<Color>(), Ok("Color"));
//! assert_eq!(enumtool::num_values::<Color>(), Ok(3));
//! assert_eq!(enumtool::value_name(Color::Blue), Ok("sky blue"));
//! assert_eq!(enumtool::value_name_at::<Color>(3), Ok(enumtool::OUT_OF_RANGE));
//! assert_eq!(enumtool::next(Color::Blue), None);
//! assert_eq!(enumtool::next_wrapping(Color::Blue), Ok(Color::Red));
//! ```

extern crate self as enumtool;

mod cache;
mod enumerated;
mod error;
pub mod extract;
mod info;
mod iter;
mod macros;
pub mod range;
pub mod text;

pub use cache::{
    EnumNames, NameCache, OUT_OF_RANGE, get_value_name, names, num_values, type_display_name,
    value_name, value_name_at,
};
pub use enumerated::{DEFAULT_MAX_VALUES, Enumerated};
pub use error::{Error, Result};
pub use info::{EnumInfo, enum_info};
pub use iter::{Values, first, last, next, next_wrapping, values};

#[cfg(feature = "derive")]
pub use enumtool_derive::Enumerated;
