use super::algorithm::{lcs_length, tokenize, DiffResult, SegmentKind};
use tracing::warn;

/// Checks `diff` against the texts it was computed from. Returns one message per problem.
pub fn validate(diff: &DiffResult, pair_input: [&str; 2]) -> Vec<String> {
    let mut errors = vec![];

    fn side_str(side: usize) -> &'static str {
        ["original", "corrected"][side]
    }

    // Unchanged + Deleted must rebuild the original; Unchanged + Added the corrected text.
    for side in 0..2 {
        let rebuilt = diff.side_text(side);
        if rebuilt != pair_input[side] {
            errors.push(format!(
                "Segments of the {} side concatenate to {:?}, but the input is {:?}",
                side_str(side),
                rebuilt,
                pair_input[side]
            ));
        }
    }

    for (segment_index, segment) in diff.iter().enumerate() {
        if segment.text.is_empty() {
            errors.push(format!("Segment #{segment_index} ({:?}) is empty", segment.kind));
        } else if tokenize(&segment.text).token_count() != 1 {
            errors.push(format!(
                "Segment #{segment_index} ({:?}) is not a single token: {:?}",
                segment.kind, segment.text
            ));
        }
    }

    // Skipped when a side doesn't rebuild, since token counts would be meaningless.
    if errors.is_empty() {
        let token_counts = pair_input.map(|text| tokenize(text).token_count());
        let lcs_len = lcs_length(pair_input[0], pair_input[1]);
        let optimal_edits = (token_counts[0] - lcs_len) + (token_counts[1] - lcs_len);
        let edits = diff.count(SegmentKind::Deleted) + diff.count(SegmentKind::Added);
        if edits != optimal_edits {
            errors.push(format!(
                "The diff deletes and adds {edits} tokens, but {optimal_edits} would be enough (LCS length is {lcs_len})"
            ));
        }
    }

    errors
}

pub fn print_errors(errors: &[String]) {
    if !errors.is_empty() {
        warn!(count = errors.len(), "diff validation failed");
        eprintln!("Diff validation errors:");
        for error in errors {
            eprintln!("  {error}");
        }
    }
}
