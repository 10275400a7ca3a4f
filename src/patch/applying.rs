//! Patch application
//!
//! Recorded positions index the pre-application sequences: delete
//! positions the original source, insert positions the destination.
//! Applying records in file order would invalidate later positions as
//! earlier edits shift the buffer, so the applier orders the operations
//! itself: all deletions run first from the highest source index down,
//! then all insertions from the lowest destination index up. Under that
//! order every recorded position is valid at the moment it is consumed,
//! whatever order the records arrived in.
//!
//! When a delete and an insert share a position, the delete runs in the
//! first phase and the insert in the second: the pair behaves as a line
//! substitution.

use std::cmp::Reverse;
use std::fmt;

use super::model::{Operation, Patch};

/// A structurally valid operation aimed outside the sequence it is being
/// applied to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyError {
    pub operation: Operation,
    pub sequence_len: usize,
}

impl fmt::Display for ApplyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "operation `{}` is out of range for a sequence of {} line(s)",
            self.operation, self.sequence_len
        )
    }
}

impl std::error::Error for ApplyError {}

/// Apply `patch` to `source`, producing the patched sequence.
///
/// The source is never mutated. Fails without producing any output when an
/// operation's position falls outside the working sequence at the moment
/// it would run.
pub fn apply(source: &[String], patch: &Patch) -> Result<Vec<String>, ApplyError> {
    let mut deletions: Vec<&Operation> = patch.iter().filter(|op| op.is_delete()).collect();
    let mut insertions: Vec<&Operation> = patch.iter().filter(|op| op.is_insert()).collect();

    deletions.sort_by_key(|op| Reverse(op.position()));
    insertions.sort_by_key(|op| op.position());

    let mut lines: Vec<String> = source.to_vec();

    for op in deletions {
        let position = op.position();
        if position >= lines.len() {
            return Err(ApplyError {
                operation: op.clone(),
                sequence_len: lines.len(),
            });
        }
        lines.remove(position);
    }

    for op in insertions {
        let position = op.position();
        if position > lines.len() {
            return Err(ApplyError {
                operation: op.clone(),
                sequence_len: lines.len(),
            });
        }
        lines.insert(position, op.line().to_string());
    }

    Ok(lines)
}
