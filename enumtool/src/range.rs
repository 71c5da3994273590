//! Finding which ordinals of an [`Enumerated`] type are real values.

use tracing::trace;

use crate::Enumerated;
use crate::error::{Error, Result};

/// Whether `ordinal` names a value of `T`.
pub fn is_valid_ordinal<T: Enumerated>(ordinal: usize) -> bool {
    T::value_signature(ordinal).is_some() && T::from_ordinal(ordinal).is_some()
}

/// Number of values of `T`.
///
/// Validity is monotonic over ordinals (valid below the count, invalid from
/// it on) so this bisects `[0, T::MAX_VALUES]` instead of probing every
/// ordinal. A type with no values, or with more than `T::MAX_VALUES`, is an
/// error.
pub fn resolve_count<T: Enumerated>() -> Result<usize> {
    let type_name = T::type_signature();
    let max = T::MAX_VALUES;
    if !is_valid_ordinal::<T>(0) {
        return Err(Error::Empty { type_name });
    }
    if is_valid_ordinal::<T>(max) {
        return Err(Error::Saturated { type_name, max });
    }

    // `low` is always valid and `high` always invalid.
    let (mut low, mut high) = (0, max);
    while high - low > 1 {
        let mid = low + (high - low) / 2;
        let valid = is_valid_ordinal::<T>(mid);
        trace!(type_name, ordinal = mid, valid, "probed ordinal");
        if valid {
            low = mid;
        } else {
            high = mid;
        }
    }
    Ok(high)
}
