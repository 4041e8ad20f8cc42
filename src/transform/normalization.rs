// Sentence normalizer pre-pass: turn ". " into ".\n" ahead of capitalised words
// Runs on the whole filtered document and ignores brace context

use regex_automata::{meta::Regex, Input};
use tracing::debug;

use crate::error::TransformError;

/// Period, one space, then anything but a lowercase ASCII letter or digit (or end of text)
const SENTENCE_BREAK_PATTERN: &str = r"\. (?:[^a-z0-9]|\z)";

/// Outcome of a normalization pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedText {
    pub text: String,
    pub breaks_inserted: usize,
}

/// Compiled sentence break normalizer
#[derive(Debug, Clone)]
pub struct SentenceNormalizer {
    regex: Regex,
}

impl SentenceNormalizer {
    pub fn new() -> Result<Self, TransformError> {
        let regex = Regex::new(SENTENCE_BREAK_PATTERN)?;
        debug!("Compiled sentence break pattern: {}", SENTENCE_BREAK_PATTERN);
        Ok(Self { regex })
    }

    /// Replace each qualifying space after a period with `\n`
    pub fn normalize(&self, text: &str) -> String {
        self.normalize_counted(text).text
    }

    pub fn normalize_counted(&self, text: &str) -> NormalizedText {
        let mut result = String::with_capacity(text.len());
        let mut copied_up_to = 0;
        let mut search_from = 0;
        let mut breaks_inserted = 0;

        // WHY: the character after the space is only inspected, never consumed,
        // so each search resumes right after the replaced space
        while search_from < text.len() {
            let input = Input::new(text).range(search_from..);
            let Some(found) = self.regex.search(&input) else {
                break;
            };
            let space = found.start() + 1;
            result.push_str(&text[copied_up_to..space]);
            result.push('\n');
            copied_up_to = space + 1;
            search_from = space + 1;
            breaks_inserted += 1;
        }
        result.push_str(&text[copied_up_to..]);

        NormalizedText {
            text: result,
            breaks_inserted,
        }
    }
}

/// Convenience wrapper compiling a fresh normalizer
pub fn normalize_sentence_breaks(text: &str) -> Result<String, TransformError> {
    Ok(SentenceNormalizer::new()?.normalize(text))
}
