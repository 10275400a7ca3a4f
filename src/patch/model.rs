use serde::{Deserialize, Serialize};

/// A single line-level edit.
///
/// Positions always refer to the sequences as they stood before the patch
/// is applied: an `Insert` position indexes the destination sequence, a
/// `Delete` position indexes the original source sequence. They are never
/// relative to a partially patched buffer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum Operation {
    /// Insert `line` at `position` of the destination numbering
    Insert { position: usize, line: String },
    /// Remove the line at `position` of the source numbering. The carried
    /// line is display-only; application consults the position alone.
    Delete { position: usize, line: String },
}

impl Operation {
    pub fn position(&self) -> usize {
        match self {
            Operation::Insert { position, .. } | Operation::Delete { position, .. } => *position,
        }
    }

    pub fn line(&self) -> &str {
        match self {
            Operation::Insert { line, .. } | Operation::Delete { line, .. } => line,
        }
    }

    pub fn is_insert(&self) -> bool {
        matches!(self, Operation::Insert { .. })
    }

    pub fn is_delete(&self) -> bool {
        matches!(self, Operation::Delete { .. })
    }
}

/// An ordered list of operations sufficient to transform a source sequence
/// into a destination sequence.
///
/// The diff engine emits operations in document order. A patch read back
/// from its text form may carry them in arbitrary order; [`apply`] orders
/// them itself before touching the source.
///
/// [`apply`]: crate::patch::apply
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Patch {
    pub operations: Vec<Operation>,
}

impl Patch {
    pub fn new(operations: Vec<Operation>) -> Self {
        Self { operations }
    }

    /// Number of operations, which for an engine-produced patch equals the
    /// line edit distance between the two sequences.
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Operation> {
        self.operations.iter()
    }

    pub fn insertions(&self) -> usize {
        self.operations.iter().filter(|op| op.is_insert()).count()
    }

    pub fn deletions(&self) -> usize {
        self.operations.iter().filter(|op| op.is_delete()).count()
    }
}

impl FromIterator<Operation> for Patch {
    fn from_iter<I: IntoIterator<Item = Operation>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Patch {
    type Item = &'a Operation;
    type IntoIter = std::slice::Iter<'a, Operation>;

    fn into_iter(self) -> Self::IntoIter {
        self.operations.iter()
    }
}
