//! GCC/Clang `__PRETTY_FUNCTION__` grammar.
//!
//! The queried symbol is the value of the template parameter binding clause
//! appended to the signature, e.g.
//!
//! ```text
//! int probe() [with auto V = (& variable)]
//! int probe() [with T = TestSpace::Test::Template<wchar_t>]
//! int probe() [T = TestSpace::Test]                      (clang)
//! int probe() [with auto V = 1; std::string_view = ...]  (gcc with aliases)
//! ```

use memchr::memchr3;

/// Extracts the fully-qualified symbol name from a `__PRETTY_FUNCTION__` string.
///
/// Returns `description` unchanged when it holds no `=` binding.
pub fn parse_pretty_function(description: &str) -> &str {
    let Some(eq) = memchr::memchr(b'=', description.as_bytes()) else {
        return description;
    };
    // Skip `=` and the separator that follows it.
    let mut rest = description[eq + 1..].chars();
    rest.next();
    let mut value = rest.as_str();

    value = value.strip_prefix('(').unwrap_or(value);
    value = value.strip_prefix('&').unwrap_or(value);
    value = value.strip_prefix(' ').unwrap_or(value);

    // Without a terminator the clause was cut short; keep what is there.
    match memchr3(b';', b']', b')', value.as_bytes()) {
        Some(end) => &value[..end],
        None => value,
    }
}
