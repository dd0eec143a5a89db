use memchr::memmem;

const SCOPE_SEPARATOR: &[u8] = b"::";

/// Reduces a fully-qualified name to its last stem.
///
/// Drops everything up to the last `::` and then the template argument list,
/// so `NameSpace::Class::Template<wchar_t>` becomes `Template`. Applying it to
/// its own output changes nothing.
pub fn short_name_of(qualified: &str) -> &str {
    let mut name = qualified;
    if let Some(pos) = memmem::rfind(name.as_bytes(), SCOPE_SEPARATOR) {
        name = &name[pos + SCOPE_SEPARATOR.len()..];
    }
    match memchr::memchr(b'<', name.as_bytes()) {
        Some(pos) => &name[..pos],
        None => name,
    }
}
