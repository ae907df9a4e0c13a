pub mod algorithm;
pub mod config;
pub mod input;
pub mod render;
pub mod validate;

pub use algorithm::{compute_sentence_diff, lcs_length, tokenize, DiffResult, DiffSegment, SegmentKind};

pub type DynResult<T> = Result<T, Box<dyn std::error::Error>>;
