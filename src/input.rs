use crate::DynResult;
use std::io::BufRead;
use tracing::{debug, warn};

#[derive(Debug, Default, PartialEq, Eq)]
pub struct ProgramInput {
    pub pair_input: Vec<[String; 2]>,
    pub pair_names: Vec<[String; 2]>,
}

impl ProgramInput {
    fn push(&mut self, input: [String; 2], names: [String; 2]) {
        self.pair_input.push(input);
        self.pair_names.push(names);
    }

    pub fn is_empty(&self) -> bool {
        self.pair_input.is_empty()
    }
}

/// Removes one final `"\n"` or `"\r\n"`, which editors add to files but which is not part of the sentence.
pub fn trim_final_newline(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}

pub fn read_file_list(files: &[String], trim: bool) -> DynResult<ProgramInput> {
    if files.len() % 2 != 0 {
        return Err("File count must be even")?;
    }

    let mut result = ProgramInput::default();

    for chunk in files.chunks_exact(2) {
        let old_name = chunk[0].clone();
        let new_name = chunk[1].clone();
        let mut old_content = String::from_utf8_lossy(&std::fs::read(&old_name)?).into_owned();
        let mut new_content = String::from_utf8_lossy(&std::fs::read(&new_name)?).into_owned();
        if trim {
            old_content = trim_final_newline(old_content);
            new_content = trim_final_newline(new_content);
        }
        result.push([old_content, new_content], [old_name, new_name]);
    }

    debug!(pairs = result.pair_input.len(), "read file pairs");
    Ok(result)
}

pub fn read_literal_pair(original: &str, corrected: &str) -> ProgramInput {
    let mut result = ProgramInput::default();
    result.push(
        [original.to_owned(), corrected.to_owned()],
        ["original".to_owned(), "corrected".to_owned()],
    );
    result
}

/// Reads `original<TAB>corrected` lines. Empty lines are skipped.
pub fn read_tab_separated(input: impl BufRead) -> DynResult<ProgramInput> {
    let mut result = ProgramInput::default();

    for (line_index, line) in input.lines().enumerate() {
        let line = line?;
        let lineno = line_index + 1;
        if line.is_empty() {
            continue;
        }
        let Some((original, corrected)) = line.split_once('\t') else {
            return Err(format!("line {lineno}: expected a tab between the original and the corrected sentence"))?;
        };
        result.push(
            [original.to_owned(), corrected.to_owned()],
            [format!("line {lineno}, original"), format!("line {lineno}, corrected")],
        );
    }

    debug!(pairs = result.pair_input.len(), "read tab separated pairs");
    Ok(result)
}

/// Rejects any pair with a side longer than `max_bytes`. The diff is quadratic in the token count,
/// so oversized input must be refused before it reaches the algorithm.
pub fn check_input_limits(input: &ProgramInput, max_bytes: usize) -> DynResult<()> {
    for (pair, names) in input.pair_input.iter().zip(input.pair_names.iter()) {
        for side in 0..2 {
            let len = pair[side].len();
            if len > max_bytes {
                warn!(name = %names[side], len, max_bytes, "input rejected");
                return Err(format!(
                    "{} is {len} bytes long, the limit is {max_bytes} (see --max-input-bytes)",
                    names[side]
                ))?;
            }
        }
    }
    Ok(())
}
