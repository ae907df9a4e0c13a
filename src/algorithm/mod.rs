pub mod benchmark;
mod backtrace;
mod dp_matrix;
mod indices;
mod postprocess;
mod preprocess;
#[cfg(test)]
mod test;

use serde::Serialize;
use tracing::trace;

pub use self::{
    dp_matrix::AlignmentMatrix,
    indices::TokenIndex,
    preprocess::{partition_into_tokens, tokenize, Token, TokenSequence},
};

/// One step of an alignment between the old and the new token sequence.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum DiffOp {
    Match,
    Insert,
    Delete,
}

impl DiffOp {
    /// How many tokens the step consumes on the old and on the new side.
    pub fn movement(&self) -> [usize; 2] {
        match self {
            DiffOp::Delete => [1, 0],
            DiffOp::Insert => [0, 1],
            DiffOp::Match => [1, 1],
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    /// Present in both texts.
    Unchanged,
    /// Only in the original text.
    Deleted,
    /// Only in the corrected text.
    Added,
}

impl SegmentKind {
    /// Whether segments of this kind belong to the original (`side == 0`) or corrected (`side == 1`) text.
    pub fn is_on_side(&self, side: usize) -> bool {
        match self {
            SegmentKind::Unchanged => true,
            SegmentKind::Deleted => side == 0,
            SegmentKind::Added => side == 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DiffSegment {
    pub text: String,
    pub kind: SegmentKind,
}

/// Segments in document order, one per token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct DiffResult(Vec<DiffSegment>);

impl DiffResult {
    pub fn segments(&self) -> &[DiffSegment] {
        &self.0
    }

    pub fn into_segments(self) -> Vec<DiffSegment> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DiffSegment> {
        self.0.iter()
    }

    pub fn count(&self, kind: SegmentKind) -> usize {
        self.0.iter().filter(|segment| segment.kind == kind).count()
    }

    /// True when nothing was deleted or added.
    pub fn is_unchanged(&self) -> bool {
        self.0.iter().all(|segment| segment.kind == SegmentKind::Unchanged)
    }

    /// Concatenation of the segments that belong to `side` (0 = original, 1 = corrected).
    pub fn side_text(&self, side: usize) -> String {
        self.0
            .iter()
            .filter(|segment| segment.kind.is_on_side(side))
            .map(|segment| segment.text.as_str())
            .collect()
    }

    pub fn original_text(&self) -> String {
        self.side_text(0)
    }

    pub fn corrected_text(&self) -> String {
        self.side_text(1)
    }

    /// Neighbouring segments of the same kind merged together. The result itself is not modified.
    pub fn runs(&self) -> Vec<DiffSegment> {
        postprocess::coalesce_runs(&self.0)
    }
}

impl FromIterator<DiffSegment> for DiffResult {
    fn from_iter<I: IntoIterator<Item = DiffSegment>>(iter: I) -> Self {
        DiffResult(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a DiffResult {
    type Item = &'a DiffSegment;
    type IntoIter = std::slice::Iter<'a, DiffSegment>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for DiffResult {
    type Item = DiffSegment;
    type IntoIter = std::vec::IntoIter<DiffSegment>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Aligns `corrected` against `original` token by token.
///
/// Unchanged and deleted segments concatenate to `original`; unchanged and added segments
/// concatenate to `corrected`. The number of deleted plus added tokens is the smallest possible,
/// and equally short alignments are broken deterministically: inside every changed run, deletions
/// come before additions.
///
/// Cost is `O(m·n)` in time and memory for `m` and `n` tokens. The function does not limit its
/// input; callers handling untrusted text should bound the length first.
///
/// ```
/// use sentdiff::{compute_sentence_diff, SegmentKind};
///
/// let diff = compute_sentence_diff("I like apple", "I like apples");
/// let changed: Vec<_> = diff
///     .iter()
///     .filter(|segment| segment.kind != SegmentKind::Unchanged)
///     .map(|segment| (segment.kind, segment.text.as_str()))
///     .collect();
/// assert_eq!(changed, vec![(SegmentKind::Deleted, "apple"), (SegmentKind::Added, "apples")]);
/// ```
pub fn compute_sentence_diff(original: &str, corrected: &str) -> DiffResult {
    let texts = [tokenize(original), tokenize(corrected)];
    let symbols = preprocess::internalize_tokens(&texts);
    let [old, new] = [0, 1].map(|side| symbols[side].as_raw_slice());

    let matrix = AlignmentMatrix::build(old, new);
    trace!(
        old_tokens = old.len(),
        new_tokens = new.len(),
        lcs_len = matrix.lcs_len(),
        "built alignment matrix"
    );

    let alignment = backtrace::backtrace(&matrix, old, new);
    postprocess::build_diff(&texts, alignment)
}

/// Length of the longest common token subsequence of two texts, in `O(n)` memory.
pub fn lcs_length(original: &str, corrected: &str) -> usize {
    let texts = [tokenize(original), tokenize(corrected)];
    let symbols = preprocess::internalize_tokens(&texts);
    dp_matrix::compute_lcs_len(symbols[0].as_raw_slice(), symbols[1].as_raw_slice())
}
