//! Fixture corpus of captured compiler descriptions.
//!
//! A corpus file is JSON Lines, one case per line:
//!
//! ```text
//! // comment
//! {"grammar": "funcsig", "input": "int __cdecl probe<&variable>(void)", "fully_qualified": "variable", "short": "variable"}
//! ```
//!
//! `fully_qualified` and `short` are optional; a missing field is not checked.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::parser::Grammar;
use crate::report::NameRecord;

pub const CORPUS_EXTENSION: &str = "jsonl";

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("failed to read `{}`", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}:{line}: malformed case", path.display())]
    Json {
        path: PathBuf,
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CorpusCase {
    pub grammar: Grammar,
    pub input: String,
    #[serde(default)]
    pub fully_qualified: Option<String>,
    #[serde(default)]
    pub short: Option<String>,
    /// 1-based line in the file the case was read from.
    #[serde(skip)]
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseOutcome {
    Match,
    Mismatch {
        field: &'static str,
        expected: String,
        actual: String,
    },
}

impl CaseOutcome {
    pub fn is_match(&self) -> bool {
        matches!(self, CaseOutcome::Match)
    }
}

impl CorpusCase {
    pub fn check(&self) -> CaseOutcome {
        let record = NameRecord::extract(self.grammar, &self.input);
        let checks = [
            ("fully_qualified", &self.fully_qualified, record.fully_qualified),
            ("short", &self.short, record.short),
        ];
        for (field, expected, actual) in checks {
            match expected {
                Some(expected) if expected != actual => {
                    return CaseOutcome::Mismatch {
                        field,
                        expected: expected.clone(),
                        actual: actual.to_string(),
                    };
                }
                _ => {}
            }
        }
        CaseOutcome::Match
    }
}

/// Parses corpus text. `origin` is only used for error messages.
pub fn parse_cases(text: &str, origin: &Path) -> Result<Vec<CorpusCase>, CorpusError> {
    let mut cases = Vec::new();
    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with("//") {
            continue;
        }
        let mut case: CorpusCase =
            serde_json::from_str(line).map_err(|source| CorpusError::Json {
                path: origin.to_path_buf(),
                line: index + 1,
                source,
            })?;
        case.line = index + 1;
        cases.push(case);
    }
    Ok(cases)
}

pub fn load_cases(path: &Path) -> Result<Vec<CorpusCase>, CorpusError> {
    let text = fs::read_to_string(path).map_err(|source| CorpusError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_cases(&text, path)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub path: PathBuf,
    pub cases: usize,
    /// Failing cases as `(line, outcome)`.
    pub mismatches: Vec<(usize, CaseOutcome)>,
}

impl FileReport {
    pub fn is_clean(&self) -> bool {
        self.mismatches.is_empty()
    }
}

pub fn check_file(path: &Path) -> Result<FileReport, CorpusError> {
    let cases = load_cases(path)?;
    let mismatches = cases
        .iter()
        .map(|case| (case.line, case.check()))
        .filter(|(_, outcome)| !outcome.is_match())
        .collect();
    Ok(FileReport {
        path: path.to_path_buf(),
        cases: cases.len(),
        mismatches,
    })
}
