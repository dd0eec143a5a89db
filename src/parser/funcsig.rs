//! MSVC `__FUNCSIG__` grammar.
//!
//! The queried symbol is the template argument of the probing function, e.g.
//!
//! ```text
//! int __cdecl probe<const long *__cdecl function(void)>(void)
//! int __cdecl probe<class std::basic_string_view<char,struct std::char_traits<char> >>(void)
//! int __cdecl probe<&TestSpace::Test::member>(void)
//! ```

use memchr::memmem;

use super::group::{find_call_group, find_group};

/// Keywords MSVC prepends to class types in template arguments.
const KIND_KEYWORDS: [&str; 2] = ["struct ", "class "];

/// Calling-convention markers, tried in this order. Each is searched from the
/// end of the text so that the marker of the innermost declarator wins over
/// markers belonging to return or parameter types.
const CALLING_CONVENTIONS: [&str; 3] = ["__thiscall ", "*__cdecl ", " __cdecl "];

/// Extracts the fully-qualified symbol name from a `__FUNCSIG__` string.
///
/// Returns `description` unchanged when it holds no `<...>` group at all.
pub fn parse_funcsig(description: &str) -> &str {
    let Some(group) = find_group(description, 0) else {
        return description;
    };
    let mut name = group.inner().as_str(description);

    if let Some(rest) = KIND_KEYWORDS.iter().find_map(|kw| name.strip_prefix(*kw)) {
        name = rest;
    } else {
        name = name.strip_prefix('&').unwrap_or(name);
        name = name.strip_prefix(' ').unwrap_or(name);
    }

    for marker in CALLING_CONVENTIONS {
        let Some(pos) = memmem::rfind(name.as_bytes(), marker.as_bytes()) else {
            continue;
        };
        name = &name[pos + marker.len()..];
        if let Some(call) = find_call_group(name) {
            return &name[..call.start];
        }
    }

    strip_parameters(name)
}

/// Cuts `name` at the start of its parameter list, if it has one.
fn strip_parameters(name: &str) -> &str {
    match memchr::memchr(b'(', name.as_bytes()) {
        Some(pos) => &name[..pos],
        None => name,
    }
}

