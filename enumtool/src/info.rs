use std::fmt;
use std::marker::PhantomData;

use crate::Enumerated;
use crate::cache::{EnumNames, names};
use crate::error::Result;

/// Human readable dump of everything known about an enumerated type.
///
/// ```text
/// name of enum type    = EnumT
/// num of values        = 2
/// list of values names =
///    first
///    second
/// ```
pub struct EnumInfo<T> {
    names: &'static EnumNames,
    _type: PhantomData<fn() -> T>,
}

/// Collects the [`EnumInfo`] of `T`.
pub fn enum_info<T: Enumerated>() -> Result<EnumInfo<T>> {
    Ok(EnumInfo {
        names: names::<T>()?,
        _type: PhantomData,
    })
}

impl<T> EnumInfo<T> {
    pub fn names(&self) -> &'static EnumNames {
        self.names
    }
}

impl<T> fmt::Display for EnumInfo<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "name of enum type    = {}", self.names.type_name())?;
        writeln!(f, "num of values        = {}", self.names.len())?;
        writeln!(f, "list of values names =")?;
        for name in self.names.iter() {
            writeln!(f, "   {}", name)?;
        }
        Ok(())
    }
}

impl<T> fmt::Debug for EnumInfo<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnumInfo")
            .field("type_name", &self.names.type_name())
            .field("values", &self.names.iter().collect::<Vec<_>>())
            .finish()
    }
}
