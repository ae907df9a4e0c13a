use std::ops::Index;

/// `(m+1) × (n+1)` table of LCS lengths, stored row by row in one allocation.
///
/// `matrix[[i, j]]` is the length of the longest common subsequence of the first `i` old tokens
/// and the first `j` new tokens. Only `row_range` rows are kept; `row_range == sizes[0] + 1`
/// keeps the whole table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentMatrix {
    sizes: [usize; 2],
    row_range: usize,
    internal: Vec<usize>,
}

impl AlignmentMatrix {
    fn new(sizes: [usize; 2], row_range: usize) -> Self {
        AlignmentMatrix {
            sizes,
            row_range,
            internal: vec![0; row_range * (sizes[1] + 1)],
        }
    }

    /// Builds the full table. Needed by the backtrace.
    pub fn build<T: PartialEq>(old: &[T], new: &[T]) -> Self {
        compute_dp_matrix(old, new, old.len() + 1)
    }

    pub fn sizes(&self) -> [usize; 2] {
        self.sizes
    }

    pub fn lcs_len(&self) -> usize {
        self[self.sizes]
    }

    fn offset(&self, [old_index, new_index]: [usize; 2]) -> usize {
        debug_assert!(old_index <= self.sizes[0] && new_index <= self.sizes[1]);
        (old_index % self.row_range) * (self.sizes[1] + 1) + new_index
    }

    fn set(&mut self, indices: [usize; 2], value: usize) {
        let offset = self.offset(indices);
        self.internal[offset] = value;
    }
}

impl Index<[usize; 2]> for AlignmentMatrix {
    type Output = usize;

    fn index(&self, indices: [usize; 2]) -> &Self::Output {
        &self.internal[self.offset(indices)]
    }
}

fn compute_dp_matrix<T: PartialEq>(old: &[T], new: &[T], row_range: usize) -> AlignmentMatrix {
    let sizes = [old.len(), new.len()];
    let mut result = AlignmentMatrix::new(sizes, row_range);

    for old_index in 0..=sizes[0] {
        for new_index in 0..=sizes[1] {
            let value = if old_index == 0 || new_index == 0 {
                0
            } else if old[old_index - 1] == new[new_index - 1] {
                result[[old_index - 1, new_index - 1]] + 1
            } else {
                std::cmp::max(result[[old_index - 1, new_index]], result[[old_index, new_index - 1]])
            };
            result.set([old_index, new_index], value);
        }
    }

    result
}

/// LCS length using two rolling rows, for callers that don't need to backtrace.
pub fn compute_lcs_len<T: PartialEq>(old: &[T], new: &[T]) -> usize {
    compute_dp_matrix(old, new, 2).lcs_len()
}
