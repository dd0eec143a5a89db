use memchr::memchr;

use crate::span::Span;

/// Finds the first balanced `<...>` group starting at or after `from`.
///
/// Only `<` and `>` change the nesting depth. The returned span covers the
/// opening `<` through the `>` that brings the depth back to zero. `None` is
/// returned when there is no `<` at or after `from`, or when the group is never
/// closed before the end of `text`.
pub fn find_group(text: &str, from: usize) -> Option<Span> {
    let bytes = text.as_bytes();
    let start = from + memchr(b'<', bytes.get(from..)?)?;

    let mut depth = 0usize;
    for (i, &c) in bytes.iter().enumerate().skip(start) {
        match c {
            b'<' => depth += 1,
            b'>' => depth -= 1,
            _ => {}
        }
        if depth == 0 {
            return Some(Span::new(start, i + 1));
        }
    }
    None
}

/// Finds the group holding the declarator's own template arguments, i.e. the
/// first group (searching into nested groups too) that is immediately followed
/// by a parameter list.
///
/// Groups belonging to a return or parameter type are followed by anything
/// but `(`, so they are stepped over.
pub(crate) fn find_call_group(text: &str) -> Option<Span> {
    let bytes = text.as_bytes();
    let mut group = find_group(text, 0)?;
    while bytes.get(group.end) != Some(&b'(') {
        group = find_group(text, group.start + 1)?;
    }
    Some(group)
}
