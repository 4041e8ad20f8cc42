// Brace-aware sentence splitter
// Inserts a line break after a sentence-ending period outside of `{...}` spans

use super::symbols::SymbolSet;
use crate::error::TransformError;

/// Outcome of a splitter pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitText {
    pub text: String,
    pub breaks_inserted: usize,
    pub max_brace_depth: usize,
}

/// Line/column tracking for error positions
struct PositionCounter {
    offset: usize,
    line: usize,
    column: usize,
}

impl PositionCounter {
    fn new() -> Self {
        Self { offset: 0, line: 1, column: 1 }
    }

    fn advance(&mut self, c: char) {
        self.offset += 1;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }
}

/// Split sentences using the default symbol set
pub fn split_sentences(document: &str) -> Result<String, TransformError> {
    Ok(split_sentences_counted(document, &SymbolSet::default())?.text)
}

/// Split sentences with an explicit symbol set, reporting counters.
///
/// Every input character is copied in order; the only change is an extra
/// `\n` after a period outside braces whose next character is not a
/// lowercase ASCII letter, an ASCII digit, a period or a symbol.
pub fn split_sentences_counted(document: &str, symbols: &SymbolSet) -> Result<SplitText, TransformError> {
    let mut text = String::with_capacity(document.len() + document.len() / 16);
    let mut brace_stack: Vec<char> = Vec::new();
    let mut inside_braces = false;
    let mut breaks_inserted = 0;
    let mut max_brace_depth = 0;
    let mut position = PositionCounter::new();

    let mut chars = document.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '{' => {
                brace_stack.push(c);
                inside_braces = true;
                max_brace_depth = max_brace_depth.max(brace_stack.len());
                text.push(c);
            }
            '}' => {
                if brace_stack.pop().is_none() {
                    return Err(TransformError::UnbalancedBrace {
                        offset: position.offset,
                        line: position.line,
                        column: position.column,
                    });
                }
                inside_braces = !brace_stack.is_empty();
                text.push(c);
            }
            _ if inside_braces => text.push(c),
            '.' => {
                text.push(c);
                if let Some(&next) = chars.peek() {
                    if ends_sentence_before(next, symbols) {
                        text.push('\n');
                        breaks_inserted += 1;
                    }
                }
            }
            _ => text.push(c),
        }
        position.advance(c);
    }

    Ok(SplitText {
        text,
        breaks_inserted,
        max_brace_depth,
    })
}

fn ends_sentence_before(next: char, symbols: &SymbolSet) -> bool {
    !(next.is_ascii_lowercase() || next.is_ascii_digit() || next == '.' || symbols.contains(next))
}
