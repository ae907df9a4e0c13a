use super::{indices::TokenIndex, DiffOp, DiffResult, DiffSegment, SegmentKind, TokenSequence};

impl DiffOp {
    fn segment_kind(&self) -> SegmentKind {
        match self {
            DiffOp::Match => SegmentKind::Unchanged,
            DiffOp::Delete => SegmentKind::Deleted,
            DiffOp::Insert => SegmentKind::Added,
        }
    }
}

/// Turns backtrace output (last step first) into one segment per token, in document order.
pub(super) fn build_diff(texts: &[TokenSequence; 2], mut alignment: Vec<DiffOp>) -> DiffResult {
    alignment.reverse();

    let mut segments = Vec::with_capacity(alignment.len());
    let mut token_indices = [0, 0];
    for op in alignment {
        // Matched tokens are equal on both sides, so the old side can supply the text.
        let side = if op == DiffOp::Insert { 1 } else { 0 };
        let text = texts[side].get_token(TokenIndex::new(token_indices[side]));
        segments.push(DiffSegment {
            text: text.to_owned(),
            kind: op.segment_kind(),
        });
        for side in 0..2 {
            token_indices[side] += op.movement()[side];
        }
    }
    debug_assert_eq!(token_indices, [texts[0].token_count(), texts[1].token_count()]);

    DiffResult(segments)
}

/// Merges neighbouring segments of the same kind.
pub(super) fn coalesce_runs(segments: &[DiffSegment]) -> Vec<DiffSegment> {
    let mut result: Vec<DiffSegment> = vec![];
    for segment in segments {
        match result.last_mut() {
            Some(last) if last.kind == segment.kind => last.text.push_str(&segment.text),
            _ => result.push(segment.clone()),
        }
    }
    result
}
