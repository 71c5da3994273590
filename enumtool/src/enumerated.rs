use crate::cache::NameCache;

/// Highest number of values probed for when resolving a value count.
pub const DEFAULT_MAX_VALUES: usize = 255;

/// A fieldless enum whose values are the consecutive ordinals `0..N`.
///
/// Usually implemented with `#[derive(Enumerated)]` or the
/// [`enumerated!`](crate::enumerated) macro. A manual implementation must
/// keep [`value_signature`](Enumerated::value_signature) and
/// [`from_ordinal`](Enumerated::from_ordinal) in agreement: both return
/// `Some` exactly for the ordinals below the value count.
pub trait Enumerated: Copy + Eq + Sized + 'static {
    /// Upper bound on the number of values this type may have.
    const MAX_VALUES: usize = DEFAULT_MAX_VALUES;

    /// Raw text that ends with the type's spelling after the last `::`.
    fn type_signature() -> &'static str {
        core::any::type_name::<Self>()
    }

    /// Raw `Type::Variant` text for the value at `ordinal`.
    fn value_signature(ordinal: usize) -> Option<&'static str>;

    fn from_ordinal(ordinal: usize) -> Option<Self>;

    fn ordinal(self) -> usize;

    /// Per-type storage for the cleaned names.
    ///
    /// Every implementation must return its own `static`.
    #[doc(hidden)]
    fn name_cache() -> &'static NameCache;
}
