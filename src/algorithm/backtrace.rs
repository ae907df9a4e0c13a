use super::{dp_matrix::AlignmentMatrix, DiffOp};

/// Walks the table from `(m, n)` back to `(0, 0)` and returns the steps in reverse document order.
///
/// Ties between dropping an old token and dropping a new token are resolved so that, in document
/// order, every changed run lists its deletions before its insertions. Walking backwards that
/// means taking the insertion first.
pub(super) fn backtrace<T: PartialEq>(matrix: &AlignmentMatrix, old: &[T], new: &[T]) -> Vec<DiffOp> {
    debug_assert_eq!(matrix.sizes(), [old.len(), new.len()]);

    let mut result = Vec::with_capacity(old.len() + new.len());
    let mut indices = matrix.sizes();
    while indices[0] > 0 || indices[1] > 0 {
        let [old_index, new_index] = indices;
        let op = if old_index > 0 && new_index > 0 && old[old_index - 1] == new[new_index - 1] {
            DiffOp::Match
        } else if new_index > 0
            && (old_index == 0 || matrix[[old_index, new_index - 1]] >= matrix[[old_index - 1, new_index]])
        {
            DiffOp::Insert
        } else {
            DiffOp::Delete
        };
        result.push(op);
        for side in 0..2 {
            indices[side] -= op.movement()[side];
        }
    }
    result
}
