use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Failure to derive names or a value count for an enumerated type.
///
/// Asking for an ordinal past the end is not an error, see
/// [`OUT_OF_RANGE`](crate::OUT_OF_RANGE).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("signature {signature:?} has no {marker:?} marker")]
    MissingMarker {
        signature: &'static str,
        marker: &'static str,
    },
    #[error("signature {signature:?} has nothing after its {marker:?} marker")]
    EmptyName {
        signature: &'static str,
        marker: &'static str,
    },
    #[error("{type_name} has no value at ordinal 0")]
    Empty { type_name: &'static str },
    #[error("{type_name} has more than {max} values")]
    Saturated { type_name: &'static str, max: usize },
    #[error("{type_name} reports inconsistent data for ordinal {ordinal}")]
    Inconsistent {
        type_name: &'static str,
        ordinal: usize,
    },
}
