//! Tests for `enumtool-derive` live in `tests/`.
