use super::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn unchanged(text: &str) -> DiffSegment {
    DiffSegment {
        text: text.to_owned(),
        kind: SegmentKind::Unchanged,
    }
}

fn deleted(text: &str) -> DiffSegment {
    DiffSegment {
        text: text.to_owned(),
        kind: SegmentKind::Deleted,
    }
}

fn added(text: &str) -> DiffSegment {
    DiffSegment {
        text: text.to_owned(),
        kind: SegmentKind::Added,
    }
}

fn random_pairs(seed: u64, count: usize) -> Vec<[String; 2]> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|i| benchmark::random_sentence_pair(&mut rng, i % 25))
        .collect()
}

#[test]
fn word_changed_at_end() {
    let actual = compute_sentence_diff("I like apple", "I like apples");
    let expected = vec![
        unchanged("I"),
        unchanged(" "),
        unchanged("like"),
        unchanged(" "),
        deleted("apple"),
        added("apples"),
    ];
    assert_eq!(actual.segments(), &expected[..]);
}

#[test]
fn full_replacement() {
    let actual = compute_sentence_diff("abc", "xyz");
    assert_eq!(actual.segments(), &[deleted("abc"), added("xyz")]);
}

#[test]
fn empty_inputs() {
    assert!(compute_sentence_diff("", "").is_empty());
    assert_eq!(compute_sentence_diff("", "x").segments(), &[added("x")]);
    assert_eq!(compute_sentence_diff("x", "").segments(), &[deleted("x")]);
}

#[test]
fn identical_inputs_are_unchanged() {
    for text in ["a", "Hello, world!", "  spaced   out  ", "line one\nline two"] {
        let diff = compute_sentence_diff(text, text);
        assert!(diff.is_unchanged());
        assert_eq!(diff.len(), tokenize(text).token_count());
        assert_eq!(diff.original_text(), text);
    }
}

#[test]
fn comparison_is_case_and_punctuation_sensitive() {
    let diff = compute_sentence_diff("i went home", "I went home.");
    assert_eq!(
        diff.segments(),
        &[
            deleted("i"),
            added("I"),
            unchanged(" "),
            unchanged("went"),
            unchanged(" "),
            deleted("home"),
            added("home."),
        ]
    );
}

#[test]
fn inserted_word() {
    let diff = compute_sentence_diff("She go school", "She go to school");
    assert_eq!(
        diff.segments(),
        &[
            unchanged("She"),
            unchanged(" "),
            unchanged("go"),
            added(" "),
            added("to"),
            unchanged(" "),
            unchanged("school"),
        ]
    );
}

#[test]
fn deleted_word() {
    let diff = compute_sentence_diff("a very big dog", "a big dog");
    assert_eq!(diff.count(SegmentKind::Deleted), 2);
    assert_eq!(diff.count(SegmentKind::Added), 0);
    assert_eq!(diff.corrected_text(), "a big dog");
}

#[test]
fn whitespace_changes_are_visible() {
    let diff = compute_sentence_diff("a  b", "a b");
    assert_eq!(diff.segments(), &[unchanged("a"), deleted("  "), added(" "), unchanged("b")]);
}

#[test]
fn runs_view_merges_tokens() {
    let diff = compute_sentence_diff("the cat sat", "a dog sat");
    assert_eq!(
        diff.runs(),
        vec![
            deleted("the"),
            added("a"),
            unchanged(" "),
            deleted("cat"),
            added("dog"),
            unchanged(" sat"),
        ]
    );
    // The result itself keeps one segment per token.
    assert_eq!(diff.len(), 7);
}

#[test]
fn both_sides_reconstruct() {
    for [original, corrected] in random_pairs(1, 300) {
        let diff = compute_sentence_diff(&original, &corrected);
        assert_eq!(diff.original_text(), original);
        assert_eq!(diff.corrected_text(), corrected);
    }
}

#[test]
fn edit_count_is_optimal() {
    for [original, corrected] in random_pairs(2, 300) {
        let diff = compute_sentence_diff(&original, &corrected);
        let m = tokenize(&original).token_count();
        let n = tokenize(&corrected).token_count();
        let lcs_len = lcs_length(&original, &corrected);
        assert_eq!(diff.count(SegmentKind::Unchanged), lcs_len);
        assert_eq!(
            diff.count(SegmentKind::Deleted) + diff.count(SegmentKind::Added),
            (m - lcs_len) + (n - lcs_len),
            "{original:?} -> {corrected:?}"
        );
    }
}

#[test]
fn unchanged_tokens_keep_their_order() {
    for [original, corrected] in random_pairs(3, 200) {
        let diff = compute_sentence_diff(&original, &corrected);
        for (side, text) in [original.as_str(), corrected.as_str()].into_iter().enumerate() {
            // Walking the side's own tokens, every unchanged segment must be found in order.
            let tokens: Vec<&str> = tokenize(text).tokens().map(|token| token.text).collect();
            let mut position = 0;
            for segment in diff.iter().filter(|segment| segment.kind.is_on_side(side)) {
                assert_eq!(tokens[position], segment.text);
                position += 1;
            }
            assert_eq!(position, tokens.len());
        }
    }
}

#[test]
fn deletions_precede_additions_in_every_changed_run() {
    for [original, corrected] in random_pairs(4, 200) {
        let diff = compute_sentence_diff(&original, &corrected);
        for pair in diff.segments().windows(2) {
            assert!(
                !(pair[0].kind == SegmentKind::Added && pair[1].kind == SegmentKind::Deleted),
                "{original:?} -> {corrected:?}"
            );
        }
    }
}

#[test]
fn repeated_calls_are_identical() {
    for [original, corrected] in random_pairs(5, 50) {
        let first = compute_sentence_diff(&original, &corrected);
        let second = compute_sentence_diff(&original, &corrected);
        assert_eq!(first, second);
    }
}

#[test]
fn concurrent_calls_agree() {
    let pairs = random_pairs(6, 40);
    let expected: Vec<DiffResult> = pairs
        .iter()
        .map(|[original, corrected]| compute_sentence_diff(original, corrected))
        .collect();
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                scope.spawn(|| {
                    pairs
                        .iter()
                        .map(|[original, corrected]| compute_sentence_diff(original, corrected))
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn long_disjoint_input_does_not_recurse() {
    let original = "x ".repeat(600);
    let corrected = "y ".repeat(600);
    let diff = compute_sentence_diff(&original, &corrected);
    assert_eq!(diff.count(SegmentKind::Deleted), 600);
    assert_eq!(diff.count(SegmentKind::Added), 600);
    assert_eq!(diff.count(SegmentKind::Unchanged), 600);
}
