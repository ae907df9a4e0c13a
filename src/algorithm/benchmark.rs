use std::time::{Duration, Instant};

use rand::{seq::SliceRandom as _, Rng};

use super::{compute_sentence_diff, lcs_length, tokenize, SegmentKind};

pub struct PreprocessedTestcase<'a> {
    text_strings: [&'a str; 2],
    token_counts: [usize; 2],
}

impl<'a> PreprocessedTestcase<'a> {
    pub fn new(left: &'a str, right: &'a str) -> PreprocessedTestcase<'a> {
        let text_strings = [left, right];
        let token_counts = text_strings.map(|text| tokenize(text).token_count());
        PreprocessedTestcase {
            text_strings,
            token_counts,
        }
    }

    pub fn token_counts(&self) -> [usize; 2] {
        self.token_counts
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub token_counts: [usize; 2],
    pub lcs_len: usize,
    pub edits: usize,
    pub optimal_edits: usize,
    pub elapsed: Duration,
}

impl RunReport {
    pub fn is_optimal(&self) -> bool {
        self.edits == self.optimal_edits
    }
}

/// Smallest possible number of deleted plus added tokens, from the LCS length alone.
pub fn compute_optimal_edits(input: &PreprocessedTestcase) -> (usize, usize) {
    let lcs_len = lcs_length(input.text_strings[0], input.text_strings[1]);
    let [m, n] = input.token_counts;
    (lcs_len, (m - lcs_len) + (n - lcs_len))
}

pub fn run_algorithm(input: &PreprocessedTestcase) -> RunReport {
    let start = Instant::now();
    let diff = compute_sentence_diff(input.text_strings[0], input.text_strings[1]);
    let elapsed = start.elapsed();

    let (lcs_len, optimal_edits) = compute_optimal_edits(input);
    RunReport {
        token_counts: input.token_counts,
        lcs_len,
        edits: diff.count(SegmentKind::Deleted) + diff.count(SegmentKind::Added),
        optimal_edits,
        elapsed,
    }
}

const VOCABULARY: &[&str] = &[
    "I", "you", "she", "they", "we", "the", "a", "an", "cat", "cats", "dog", "apple", "apples", "Apple", "like",
    "likes", "liked", "go", "goes", "went", "to", "school", "yesterday", "every", "day", "is", "are", "was", "very",
    "happy", "and", "but", "because", "in", "on", "at", "it", "it's", "its", "their", "there", ".", ",", "!", "?",
];

const SEPARATORS: &[&str] = &[" ", " ", " ", " ", "  ", "\t", "\n"];

fn random_word(rng: &mut impl Rng) -> &'static str {
    VOCABULARY.choose(rng).copied().unwrap_or("word")
}

fn join_words(rng: &mut impl Rng, words: &[&str]) -> String {
    let mut result = String::new();
    for (i, word) in words.iter().enumerate() {
        if i > 0 {
            result.push_str(SEPARATORS.choose(rng).copied().unwrap_or(" "));
        }
        result.push_str(word);
    }
    result
}

/// A sentence of `word_count` words from a small vocabulary, so that repeated tokens are common.
pub fn random_sentence(rng: &mut impl Rng, word_count: usize) -> String {
    let words: Vec<&str> = (0..word_count).map(|_| random_word(rng)).collect();
    join_words(rng, &words)
}

/// A sentence and an edited copy of it: some words replaced, dropped or inserted, the way a
/// corrector would change a learner's sentence.
pub fn random_sentence_pair(rng: &mut impl Rng, word_count: usize) -> [String; 2] {
    let original: Vec<&str> = (0..word_count).map(|_| random_word(rng)).collect();
    let mut corrected = vec![];
    for &word in &original {
        match rng.gen_range(0..10) {
            0 => corrected.push(random_word(rng)),
            1 => {}
            2 => {
                corrected.push(random_word(rng));
                corrected.push(word);
            }
            _ => corrected.push(word),
        }
    }
    [join_words(rng, &original), join_words(rng, &corrected)]
}
