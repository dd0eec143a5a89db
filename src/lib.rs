//! Names of C++ types, functions, members and enumerators recovered from
//! compiler-generated function descriptions (`__FUNCSIG__` on MSVC,
//! `__PRETTY_FUNCTION__` on GCC and Clang).
//!
//! All parsing functions borrow from the description and never fail: input
//! they do not recognise comes back unchanged or cut at the nearest boundary.

pub mod corpus;
pub mod parser;
pub mod qualified;
pub mod report;
pub mod span;
pub mod tracing_setup;

pub use parser::{find_group, parse_funcsig, parse_pretty_function, Grammar};
pub use qualified::short_name_of;
pub use report::NameRecord;
pub use span::Span;

/// Fully-qualified name of the symbol described by `description`.
pub fn fully_qualified_name(grammar: Grammar, description: &str) -> &str {
    grammar.parse(description)
}

/// Last stem of the symbol's name, without scope or template arguments.
pub fn short_name(grammar: Grammar, description: &str) -> &str {
    short_name_of(fully_qualified_name(grammar, description))
}
