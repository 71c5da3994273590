//! Lazily built, per-type tables of cleaned names.

use once_cell::sync::OnceCell;
use tracing::{debug, error};

use crate::Enumerated;
use crate::error::{Error, Result};
use crate::extract::{extract_type_name, extract_value_name};
use crate::range::resolve_count;

/// Returned by [`value_name_at`] for ordinals past the last value.
pub const OUT_OF_RANGE: &str = "** out of range **";

/// Cleaned names of one enumerated type, indexed by ordinal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumNames {
    type_name: &'static str,
    values: Vec<&'static str>,
}

impl EnumNames {
    fn build<T: Enumerated>() -> Result<EnumNames> {
        let type_signature = T::type_signature();
        let count = resolve_count::<T>()?;
        let mut values = Vec::with_capacity(count);
        for ordinal in 0..count {
            let inconsistent = Error::Inconsistent {
                type_name: type_signature,
                ordinal,
            };
            let value = T::from_ordinal(ordinal).ok_or_else(|| inconsistent.clone())?;
            if value.ordinal() != ordinal {
                return Err(inconsistent);
            }
            let signature = T::value_signature(ordinal).ok_or(inconsistent)?;
            values.push(extract_value_name(signature)?);
        }
        Ok(EnumNames {
            type_name: extract_type_name(type_signature)?,
            values,
        })
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Number of values, never zero.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn get(&self, ordinal: usize) -> Option<&'static str> {
        self.values.get(ordinal).copied()
    }

    pub fn get_or_sentinel(&self, ordinal: usize) -> &'static str {
        self.get(ordinal).unwrap_or(OUT_OF_RANGE)
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &'static str> + '_ {
        self.values.iter().copied()
    }
}

/// One-time storage for a type's [`EnumNames`].
///
/// The first lookup builds the table, every later one reads it without
/// locking. A failed build is stored as well and handed back to every
/// caller, it is never retried.
#[derive(Debug)]
pub struct NameCache {
    names: OnceCell<Result<EnumNames>>,
}

impl NameCache {
    pub const fn new() -> NameCache {
        NameCache {
            names: OnceCell::new(),
        }
    }

    pub fn is_populated(&self) -> bool {
        self.names.get().is_some()
    }

    pub fn get_or_populate<T: Enumerated>(&'static self) -> Result<&'static EnumNames> {
        let names = self.names.get_or_init(|| {
            let names = EnumNames::build::<T>();
            match &names {
                Ok(names) => debug!(
                    type_name = names.type_name,
                    count = names.len(),
                    "populated name cache"
                ),
                Err(err) => error!(
                    type_name = T::type_signature(),
                    "could not populate name cache: {}",
                    err
                ),
            }
            names
        });
        names.as_ref().map_err(Clone::clone)
    }
}

impl Default for NameCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Cleaned name table of `T`, built on first use.
pub fn names<T: Enumerated>() -> Result<&'static EnumNames> {
    T::name_cache().get_or_populate::<T>()
}

/// Display name of `T` without its module path.
pub fn type_display_name<T: Enumerated>() -> Result<&'static str> {
    Ok(names::<T>()?.type_name())
}

/// Number of values of `T`.
pub fn num_values<T: Enumerated>() -> Result<usize> {
    Ok(names::<T>()?.len())
}

/// Name of the value at `ordinal`, or `None` when `T` has no such value.
pub fn get_value_name<T: Enumerated>(ordinal: usize) -> Result<Option<&'static str>> {
    Ok(names::<T>()?.get(ordinal))
}

/// Name of the value at `ordinal`, or [`OUT_OF_RANGE`].
pub fn value_name_at<T: Enumerated>(ordinal: usize) -> Result<&'static str> {
    Ok(names::<T>()?.get_or_sentinel(ordinal))
}

/// Name of `value`.
pub fn value_name<T: Enumerated>(value: T) -> Result<&'static str> {
    value_name_at::<T>(value.ordinal())
}
