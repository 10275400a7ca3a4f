//! Text format for patches
//!
//! One operation per line: `<ACTION> <POSITION> <CONTENT>`, where the
//! action tag is `A` (insert) or `R` (remove) and the position is a
//! base-10 non-negative integer. Exactly one space separates the fields;
//! everything after the second space is content, leading spaces included.
//! Blank lines are skipped. `diff` emits this format and `patch` consumes
//! it unchanged.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;

use super::model::{Operation, Patch};

pub const INSERT_TAG: char = 'A';
pub const DELETE_TAG: char = 'R';

// The content field is optional so that a record inserting an empty line
// survives editors that strip trailing whitespace.
fn record_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^([AR]) (\d+)(?: (.*))?$").expect("valid record pattern"))
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Insert { position, line } => {
                write!(f, "{INSERT_TAG} {position} {line}")
            }
            Operation::Delete { position, line } => {
                write!(f, "{DELETE_TAG} {position} {line}")
            }
        }
    }
}

impl FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let captures = record_pattern().captures(s).ok_or_else(|| {
            format!("expected `{INSERT_TAG}|{DELETE_TAG} <position> <content>`")
        })?;

        let position: usize = captures[2]
            .parse()
            .map_err(|_| "position does not fit in a machine word".to_string())?;
        let line = captures
            .get(3)
            .map_or_else(String::new, |m| m.as_str().to_string());

        match &captures[1] {
            "A" => Ok(Operation::Insert { position, line }),
            "R" => Ok(Operation::Delete { position, line }),
            _ => unreachable!("pattern only admits A and R"),
        }
    }
}

/// A patch-file line that failed validation, with its 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedRecord {
    pub line_number: usize,
    pub line: String,
    pub reason: String,
}

impl fmt::Display for MalformedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {}: invalid patch record `{}`: {}",
            self.line_number, self.line, self.reason
        )
    }
}

impl std::error::Error for MalformedRecord {}

/// Render a patch in the text record format, one operation per line.
pub fn render_patch(patch: &Patch) -> String {
    patch
        .iter()
        .map(Operation::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parse a whole patch body.
///
/// Every line is scanned even after an error, so all malformed records are
/// surfaced in one pass. Any malformed record fails the entire patch; no
/// partial result is returned.
pub fn parse_patch(input: &str) -> Result<Patch, Vec<MalformedRecord>> {
    let mut operations = Vec::new();
    let mut errors = Vec::new();

    for (index, line) in input.lines().enumerate() {
        if line.is_empty() {
            continue;
        }

        match line.parse::<Operation>() {
            Ok(op) => operations.push(op),
            Err(reason) => errors.push(MalformedRecord {
                line_number: index + 1,
                line: line.to_string(),
                reason,
            }),
        }
    }

    if errors.is_empty() {
        Ok(Patch::new(operations))
    } else {
        Err(errors)
    }
}
