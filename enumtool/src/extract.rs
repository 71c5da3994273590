//! Pulls display names out of raw signatures.

use crate::error::{Error, Result};
use crate::text::{self, SCOPE_SEPARATOR};

fn after_marker(
    signature: &'static str,
    found: Option<&'static str>,
) -> Result<&'static str> {
    match found {
        None => Err(Error::MissingMarker {
            signature,
            marker: SCOPE_SEPARATOR,
        }),
        Some("") => Err(Error::EmptyName {
            signature,
            marker: SCOPE_SEPARATOR,
        }),
        Some(name) => Ok(name),
    }
}

/// Display name of a type from its `core::any::type_name` rendering.
///
/// Generic arguments are kept verbatim, only the outer type's module path
/// is removed.
pub fn extract_type_name(signature: &'static str) -> Result<&'static str> {
    after_marker(
        signature,
        text::string_after_top_level(signature, SCOPE_SEPARATOR),
    )
}

/// Display name of a value from its `Type::Variant` signature.
pub fn extract_value_name(signature: &'static str) -> Result<&'static str> {
    after_marker(signature, text::string_after(signature, SCOPE_SEPARATOR))
}
