pub mod funcsig;
pub mod group;
pub mod pretty;

use std::fmt;
use std::str::FromStr;

use memchr::memmem;
use serde::{Deserialize, Serialize};

pub use funcsig::parse_funcsig;
pub use group::find_group;
pub use pretty::parse_pretty_function;

/// The textual shape of a compiler-generated function description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Grammar {
    /// MSVC `__FUNCSIG__`: the symbol is the probe's template argument.
    Funcsig,
    /// GCC/Clang `__PRETTY_FUNCTION__`: the symbol follows a `[with X = ...]` clause.
    PrettyFunction,
}

impl Grammar {
    /// Grammar emitted by the toolchain this crate is built with.
    #[cfg(target_env = "msvc")]
    pub const HOST: Grammar = Grammar::Funcsig;
    #[cfg(not(target_env = "msvc"))]
    pub const HOST: Grammar = Grammar::PrettyFunction;

    /// Extracts the fully-qualified name from `description`.
    pub fn parse(self, description: &str) -> &str {
        match self {
            Grammar::Funcsig => parse_funcsig(description),
            Grammar::PrettyFunction => parse_pretty_function(description),
        }
    }

    /// Guesses the grammar of a description captured on an unknown toolchain.
    ///
    /// A trailing `[... = ...]` binding clause (`[with T = X]` on GCC, `[T = X]`
    /// on Clang) marks `__PRETTY_FUNCTION__`; a calling-convention keyword marks
    /// `__FUNCSIG__`. Anything else is assumed to come from the host toolchain.
    pub fn detect(description: &str) -> Grammar {
        let bytes = description.as_bytes();
        let has_binding = memchr::memrchr(b'[', bytes)
            .is_some_and(|open| memchr::memchr(b'=', &bytes[open..]).is_some());
        if has_binding {
            Grammar::PrettyFunction
        } else if memmem::find(bytes, b"__cdecl").is_some()
            || memmem::find(bytes, b"__thiscall").is_some()
        {
            Grammar::Funcsig
        } else {
            Grammar::HOST
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Grammar::Funcsig => "funcsig",
            Grammar::PrettyFunction => "pretty_function",
        }
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown grammar `{0}` (expected `funcsig` or `pretty_function`)")]
pub struct UnknownGrammar(pub String);

impl FromStr for Grammar {
    type Err = UnknownGrammar;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "funcsig" => Ok(Grammar::Funcsig),
            "pretty_function" | "pretty-function" => Ok(Grammar::PrettyFunction),
            other => Err(UnknownGrammar(other.to_string())),
        }
    }
}
