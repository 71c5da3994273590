/// Defines a fieldless enum and implements [`Enumerated`](crate::Enumerated)
/// for it without the derive macro.
///
/// The enum must also get `Clone`, `Copy`, `PartialEq` and `Eq`, usually by
/// listing them in a `derive` attribute.
///
/// ```rust
/// enumtool::enumerated! {
///     #[derive(Debug, Clone, Copy, PartialEq, Eq)]
///     pub enum Phase {
///         Parse,
///         Check,
///         Emit,
///     }
/// }
///
/// assert_eq!(enumtool::num_values::<Phase>(), Ok(3));
/// assert_eq!(enumtool::value_name(Phase::Check), Ok("Check"));
/// ```
#[macro_export]
macro_rules! enumerated {
    (
        $( #[$meta:meta] )*
        $vis:vis enum $name:ident {
            $( $( #[$variant_meta:meta] )* $variant:ident ),+ $(,)?
        }
    ) => {
        $( #[$meta] )*
        $vis enum $name {
            $( $( #[$variant_meta] )* $variant ),+
        }

        impl $crate::Enumerated for $name {
            fn value_signature(ordinal: usize) -> ::core::option::Option<&'static str> {
                const SIGNATURES: &[&str] = &[
                    $( ::core::concat!(::core::stringify!($name), "::", ::core::stringify!($variant)) ),+
                ];
                SIGNATURES.get(ordinal).copied()
            }

            fn from_ordinal(ordinal: usize) -> ::core::option::Option<Self> {
                const VALUES: &[$name] = &[ $( $name::$variant ),+ ];
                VALUES.get(ordinal).copied()
            }

            fn ordinal(self) -> usize {
                self as usize
            }

            fn name_cache() -> &'static $crate::NameCache {
                static CACHE: $crate::NameCache = $crate::NameCache::new();
                &CACHE
            }
        }
    };
}
