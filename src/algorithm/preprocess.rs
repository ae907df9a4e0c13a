use index_vec::IndexVec;
use serde::Serialize;
use string_interner::{DefaultBackend, DefaultSymbol, StringInterner};

use super::indices::{range_iter, TokenIndex};

/// Byte offsets where each token starts, followed by the length of the text.
///
/// Tokens are maximal runs of whitespace or of non-whitespace, so neighbouring tokens always
/// differ in kind. The empty string has the single bound `[0]` and no tokens.
pub fn partition_into_tokens(text: &str) -> Vec<usize> {
    let mut token_bounds = vec![0];
    let mut was_last_whitespace = None;
    for (i, c) in text.char_indices() {
        let is_whitespace = c.is_whitespace();
        if was_last_whitespace.is_some_and(|last| last != is_whitespace) {
            token_bounds.push(i);
        }
        was_last_whitespace = Some(is_whitespace);
    }
    if !text.is_empty() {
        token_bounds.push(text.len());
    }
    token_bounds
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Token<'a> {
    pub text: &'a str,
    pub is_whitespace: bool,
}

/// A text together with its token bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSequence<'a> {
    text: &'a str,
    token_bounds: IndexVec<TokenIndex, usize>,
}

impl<'a> TokenSequence<'a> {
    pub fn new(text: &'a str) -> TokenSequence<'a> {
        TokenSequence {
            text,
            token_bounds: IndexVec::from_vec(partition_into_tokens(text)),
        }
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    pub fn token_count(&self) -> usize {
        self.token_bounds.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.token_count() == 0
    }

    pub fn get_token(&self, index: TokenIndex) -> &'a str {
        &self.text[self.token_bounds[index]..self.token_bounds[index + 1]]
    }

    pub fn token(&self, index: TokenIndex) -> Token<'a> {
        let text = self.get_token(index);
        Token {
            text,
            // Tokens are never empty and never mix whitespace with other characters.
            is_whitespace: text.starts_with(char::is_whitespace),
        }
    }

    pub fn tokens(&self) -> impl Iterator<Item = Token<'a>> + '_ {
        range_iter(TokenIndex::new(0)..TokenIndex::new(self.token_count())).map(|index| self.token(index))
    }

    pub fn token_bounds(&self) -> &[usize] {
        self.token_bounds.as_raw_slice()
    }
}

/// Splits `text` into whitespace and non-whitespace tokens. Never fails.
pub fn tokenize(text: &str) -> TokenSequence<'_> {
    TokenSequence::new(text)
}

/// Interns the tokens of both sides in one interner, so that equal token texts get equal symbols
/// and the DP compares integers instead of strings.
pub(super) fn internalize_tokens(texts: &[TokenSequence; 2]) -> [IndexVec<TokenIndex, DefaultSymbol>; 2] {
    let mut interner = StringInterner::<DefaultBackend>::new();
    let mut symbols = [IndexVec::new(), IndexVec::new()];
    for (side, text) in texts.iter().enumerate() {
        for i in 0..text.token_count() {
            symbols[side].push(interner.get_or_intern(text.get_token(TokenIndex::new(i))));
        }
    }
    symbols
}

#[cfg(test)]
mod test {
    use super::*;

    fn token_texts<'a>(text: &'a TokenSequence) -> Vec<&'a str> {
        text.tokens().map(|token| token.text).collect()
    }

    #[test]
    fn empty_text_has_no_tokens() {
        let text = tokenize("");
        assert_eq!(text.token_count(), 0);
        assert!(text.is_empty());
        assert_eq!(text.token_bounds(), &[0]);
    }

    #[test]
    fn words_and_whitespace_alternate() {
        let text = tokenize("I like apple");
        assert_eq!(token_texts(&text), vec!["I", " ", "like", " ", "apple"]);
        let flags: Vec<bool> = text.tokens().map(|token| token.is_whitespace).collect();
        assert_eq!(flags, vec![false, true, false, true, false]);
    }

    #[test]
    fn whitespace_runs_are_single_tokens() {
        let text = tokenize("  a \t\n b  ");
        assert_eq!(token_texts(&text), vec!["  ", "a", " \t\n ", "b", "  "]);
    }

    #[test]
    fn punctuation_stays_attached_to_words() {
        let text = tokenize("Hello, world!");
        assert_eq!(token_texts(&text), vec!["Hello,", " ", "world!"]);
    }

    #[test]
    fn multibyte_characters() {
        let text = tokenize("café\u{3000}naïve");
        assert_eq!(token_texts(&text), vec!["café", "\u{3000}", "naïve"]);
    }

    #[test]
    fn tokens_concatenate_to_input() {
        for input in ["", " ", "x", "  lead", "trail  ", "a  b\tc\r\nd", "émoji 🙂 ok"] {
            let text = tokenize(input);
            let joined: String = text.tokens().map(|token| token.text).collect();
            assert_eq!(joined, input);
        }
    }

    #[test]
    fn interning_is_shared_between_sides() {
        let texts = [tokenize("a b"), tokenize("b a")];
        let symbols = internalize_tokens(&texts);
        assert_eq!(symbols[0][TokenIndex::new(0)], symbols[1][TokenIndex::new(2)]);
        assert_eq!(symbols[0][TokenIndex::new(1)], symbols[1][TokenIndex::new(1)]);
        assert_ne!(symbols[0][TokenIndex::new(0)], symbols[0][TokenIndex::new(2)]);
    }

    #[test]
    fn interning_is_case_sensitive() {
        let texts = [tokenize("Apple"), tokenize("apple")];
        let symbols = internalize_tokens(&texts);
        assert_ne!(symbols[0][TokenIndex::new(0)], symbols[1][TokenIndex::new(0)]);
    }
}
