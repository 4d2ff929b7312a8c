//! Interactive acquisition of the word list
//!
//! The operator is asked for a path until one can be loaded. Missing files are
//! reported and retried locally; every other failure is returned to the caller.

use crate::api::word_set::{LoadError, WordSet};
use std::io::{BufRead, Write};
use thiserror::Error;

/// Text shown when asking the operator for a path.
pub const PATH_PROMPT: &str = "Please input the file that contain the words: ";

/// Text shown when the requested file does not exist.
pub const NOT_FOUND_MESSAGE: &str = "Not able to open the file!";

/// Errors that can occur while prompting for the input file
#[derive(Error, Debug)]
pub enum PromptError {
    #[error("Input ended before a word list was provided")]
    EndOfInput,

    #[error("Failed to communicate with the operator: {0}")]
    Terminal(#[from] std::io::Error),

    #[error(transparent)]
    Load(LoadError),
}

type Result<T> = core::result::Result<T, PromptError>;

/// Returns true for input made up entirely of ASCII digits.
///
/// Such input is never treated as a path; the operator is asked again.
pub fn is_numeric_input(input: &str) -> bool {
    let trimmed = input.trim();
    !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit())
}

/// Repeatedly prompts on `output` and reads paths from `input` until a word
/// list loads successfully.
///
/// # Errors
///
/// * [`PromptError::EndOfInput`] if `input` is exhausted.
/// * [`PromptError::Terminal`] if reading or writing the terminal fails.
/// * [`PromptError::Load`] for load failures other than a missing file.
pub fn prompt_for_words<R: BufRead, W: Write>(mut input: R, mut output: W) -> Result<WordSet> {
    let mut line = String::new();
    loop {
        write!(output, "{PATH_PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(PromptError::EndOfInput);
        }

        if is_numeric_input(&line) {
            log::debug!("Rejected numeric path input {:?}", line.trim());
            continue;
        }

        // Only the line terminator is stripped; paths may legitimately contain spaces.
        let path = line.trim_end_matches(['\r', '\n']);
        match WordSet::load(path) {
            Ok(words) => return Ok(words),
            Err(LoadError::NotFound { path }) => {
                log::debug!("Path {} does not exist, prompting again", path.display());
                writeln!(output, "{NOT_FOUND_MESSAGE}")?;
            }
            Err(e) => return Err(PromptError::Load(e)),
        }
    }
}
