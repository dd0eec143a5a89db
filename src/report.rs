use serde::Serialize;

use crate::parser::Grammar;
use crate::qualified::short_name_of;

/// Everything extracted from one description, borrowed from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NameRecord<'src> {
    pub grammar: Grammar,
    pub description: &'src str,
    pub fully_qualified: &'src str,
    pub short: &'src str,
}

impl<'src> NameRecord<'src> {
    pub fn extract(grammar: Grammar, description: &'src str) -> Self {
        let fully_qualified = grammar.parse(description);
        Self {
            grammar,
            description,
            fully_qualified,
            short: short_name_of(fully_qualified),
        }
    }
}
