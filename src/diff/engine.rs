//! Line-level edit distance with operation backtrace.

use crate::patch::{Operation, Patch};

/// Direction a table cell was reached from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Trace {
    Keep,
    Insert,
    Delete,
}

/// Number of distance-table cells a diff of the given dimensions needs.
///
/// Callers that want to bound memory check this against a ceiling before
/// invoking [`compute`].
pub fn table_cells(source_len: usize, destination_len: usize) -> u64 {
    (source_len as u64 + 1) * (destination_len as u64 + 1)
}

/// Compute a minimal sequence of line insertions and deletions that
/// transforms `source` into `destination`.
///
/// Lines are compared by exact equality, no normalization. The returned
/// operations are in document order and their count is the line edit
/// distance between the two sequences; a changed line always decomposes
/// into one delete plus one insert, never a single substitution. Empty
/// sequences are fine. The function is total — there is nothing to fail
/// on for in-memory input.
///
/// Quadratic time and space: a `(m + 1) x (n + 1)` table is filled, then
/// walked back from the far corner to recover the operations.
pub fn compute(source: &[String], destination: &[String]) -> Patch {
    let m = source.len();
    let n = destination.len();

    let mut distances = vec![vec![0usize; n + 1]; m + 1];
    let mut traces = vec![vec![Trace::Keep; n + 1]; m + 1];

    for j in 1..=n {
        distances[0][j] = j;
        traces[0][j] = Trace::Insert;
    }
    for i in 1..=m {
        distances[i][0] = i;
        traces[i][0] = Trace::Delete;
    }

    for i in 1..=m {
        for j in 1..=n {
            if source[i - 1] == destination[j - 1] {
                distances[i][j] = distances[i - 1][j - 1];
                traces[i][j] = Trace::Keep;
                continue;
            }

            // Ties go to the delete branch; an insert wins only when
            // strictly cheaper.
            let delete = distances[i - 1][j];
            let insert = distances[i][j - 1];

            if insert < delete {
                distances[i][j] = insert + 1;
                traces[i][j] = Trace::Insert;
            } else {
                distances[i][j] = delete + 1;
                traces[i][j] = Trace::Delete;
            }
        }
    }

    // The walk yields operations back-to-front; reverse once at the end.
    let mut operations = Vec::with_capacity(distances[m][n]);
    let (mut i, mut j) = (m, n);
    while i > 0 || j > 0 {
        match traces[i][j] {
            Trace::Keep => {
                i -= 1;
                j -= 1;
            }
            Trace::Delete => {
                i -= 1;
                operations.push(Operation::Delete {
                    position: i,
                    line: source[i].clone(),
                });
            }
            Trace::Insert => {
                j -= 1;
                operations.push(Operation::Insert {
                    position: j,
                    line: destination[j].clone(),
                });
            }
        }
    }

    operations.reverse();
    Patch::new(operations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patch::apply;

    fn lines(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_identity_yields_empty_patch() {
        let source = lines(&["a", "b", "c"]);
        let patch = compute(&source, &source);
        assert!(patch.is_empty());
    }

    #[test]
    fn test_both_empty() {
        let patch = compute(&[], &[]);
        assert!(patch.is_empty());
    }

    #[test]
    fn test_empty_source_is_all_inserts() {
        let destination = lines(&["a", "b", "c"]);
        let patch = compute(&[], &destination);

        assert_eq!(patch.len(), 3);
        for (expected, op) in patch.iter().enumerate() {
            assert!(op.is_insert());
            assert_eq!(op.position(), expected);
        }
    }

    #[test]
    fn test_empty_destination_is_all_deletes() {
        let source = lines(&["a", "b", "c"]);
        let patch = compute(&source, &[]);

        assert_eq!(patch.len(), 3);
        let mut positions: Vec<usize> = patch.iter().map(Operation::position).collect();
        positions.sort_unstable();
        assert!(patch.iter().all(Operation::is_delete));
        assert_eq!(positions, vec![0, 1, 2]);
    }

    #[test]
    fn test_changed_line_is_delete_plus_insert() {
        let source = lines(&["a", "b", "c"]);
        let destination = lines(&["a", "x", "c"]);
        let patch = compute(&source, &destination);

        assert_eq!(patch.len(), 2);
        assert_eq!(patch.deletions(), 1);
        assert_eq!(patch.insertions(), 1);
        assert!(patch
            .iter()
            .any(|op| op.is_delete() && op.position() == 1 && op.line() == "b"));
        assert!(patch
            .iter()
            .any(|op| op.is_insert() && op.position() == 1 && op.line() == "x"));

        assert_eq!(apply(&source, &patch).unwrap(), destination);
    }

    #[test]
    fn test_no_normalization() {
        let source = lines(&["a "]);
        let destination = lines(&["a"]);
        let patch = compute(&source, &destination);
        assert_eq!(patch.len(), 2);
    }

    #[test]
    fn test_round_trip_cases() {
        let cases: Vec<(Vec<String>, Vec<String>)> = vec![
            (lines(&[]), lines(&["x", "y"])),
            (lines(&["x", "y"]), lines(&[])),
            (lines(&["a"]), lines(&["x", "y", "a"])),
            (lines(&["a", "b"]), lines(&["x", "y"])),
            (lines(&["a", "b", "c", "d"]), lines(&["c", "x", "a"])),
            (lines(&["", "a", ""]), lines(&["a", "", ""])),
            (
                lines(&["the", "quick", "brown", "fox"]),
                lines(&["the", "slow", "brown", "dog", "fox"]),
            ),
        ];

        for (source, destination) in cases {
            let patch = compute(&source, &destination);
            assert_eq!(
                apply(&source, &patch).unwrap(),
                destination,
                "round trip failed for {source:?} -> {destination:?}"
            );
        }
    }

    #[test]
    fn test_operation_count_matches_myers_oracle() {
        // `similar` implements Myers independently of our table; both must
        // agree on the minimal number of line edits.
        // Trailing newlines keep `similar`'s line tokens (which retain
        // their terminator) aligned with ours.
        let old = "one\ntwo\nthree\nfour\nfive\nsix\n";
        let new = "one\ndos\nthree\nfive\nsix\nseven\neight\n";

        let source: Vec<String> = old.lines().map(str::to_string).collect();
        let destination: Vec<String> = new.lines().map(str::to_string).collect();
        let patch = compute(&source, &destination);

        let oracle = similar::TextDiff::from_lines(old, new)
            .iter_all_changes()
            .filter(|change| change.tag() != similar::ChangeTag::Equal)
            .count();

        assert_eq!(patch.len(), oracle);
    }

    #[test]
    fn test_operations_in_document_order() {
        let source = lines(&["a", "b", "c", "d", "e"]);
        let destination = lines(&["a", "x", "c", "y", "e"]);
        let patch = compute(&source, &destination);

        let positions: Vec<usize> = patch.iter().map(Operation::position).collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn test_table_cells() {
        assert_eq!(table_cells(0, 0), 1);
        assert_eq!(table_cells(2, 3), 12);
    }
}
