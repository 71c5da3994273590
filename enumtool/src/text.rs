//! String primitives for slicing names out of signature text.
//!
//! Signatures are treated like C strings: everything from the first NUL
//! byte onwards is ignored. All of these run in const context.

/// Separator between a scope and the name declared in it.
pub const SCOPE_SEPARATOR: &str = "::";

/// Number of bytes in `text` before the first NUL, or before the end.
pub const fn length(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut len = 0;
    while len < bytes.len() && bytes[len] != 0 {
        len += 1;
    }
    len
}

const fn matches_at(text: &[u8], needle: &[u8], start: usize, needle_len: usize) -> bool {
    let mut i = 0;
    while i < needle_len {
        if text[start + i] != needle[i] {
            return false;
        }
        i += 1;
    }
    true
}

/// Start index of the last occurrence of `needle` in `text`.
///
/// Returns `None` when either argument is empty or when there is no match.
pub const fn rfind(text: &str, needle: &str) -> Option<usize> {
    let text_len = length(text);
    let needle_len = length(needle);
    if text_len == 0 || needle_len == 0 || needle_len > text_len {
        return None;
    }
    let (text, needle) = (text.as_bytes(), needle.as_bytes());
    let mut found = None;
    let mut start = 0;
    while start + needle_len <= text_len {
        if matches_at(text, needle, start, needle_len) {
            found = Some(start);
        }
        start += 1;
    }
    found
}

/// Like [`rfind`] but ignores occurrences nested inside `<...>`.
///
/// `core::any::type_name` renders generic arguments with their full paths,
/// and those must not be mistaken for the scope of the outer type.
pub const fn rfind_top_level(text: &str, needle: &str) -> Option<usize> {
    let text_len = length(text);
    let needle_len = length(needle);
    if text_len == 0 || needle_len == 0 || needle_len > text_len {
        return None;
    }
    let (text, needle) = (text.as_bytes(), needle.as_bytes());
    let mut found = None;
    let mut depth = 0usize;
    let mut start = 0;
    while start + needle_len <= text_len {
        match text[start] {
            b'<' => depth += 1,
            b'>' => depth = depth.saturating_sub(1),
            _ => {}
        }
        if depth == 0 && matches_at(text, needle, start, needle_len) {
            found = Some(start);
        }
        start += 1;
    }
    found
}

const fn tail_from(text: &str, start: usize) -> Option<&str> {
    let end = length(text);
    if start > end {
        return None;
    }
    let (head, _) = text.as_bytes().split_at(end);
    let (_, tail) = head.split_at(start);
    match core::str::from_utf8(tail) {
        Ok(tail) => Some(tail),
        Err(_) => None,
    }
}

/// Text following the last occurrence of `marker`.
pub const fn string_after<'a>(text: &'a str, marker: &str) -> Option<&'a str> {
    match rfind(text, marker) {
        Some(index) => tail_from(text, index + length(marker)),
        None => None,
    }
}

/// Text following the last top-level occurrence of `marker`.
pub const fn string_after_top_level<'a>(text: &'a str, marker: &str) -> Option<&'a str> {
    match rfind_top_level(text, marker) {
        Some(index) => tail_from(text, index + length(marker)),
        None => None,
    }
}

/// Drops any qualifying scope up to the last [`SCOPE_SEPARATOR`].
pub const fn strip_scope(text: &str) -> &str {
    match string_after_top_level(text, SCOPE_SEPARATOR) {
        Some(name) => name,
        None => match tail_from(text, 0) {
            Some(name) => name,
            None => text,
        },
    }
}
