// Punctuation after which a period is not treated as a sentence end

use std::collections::HashSet;

/// Characters that suppress a sentence break when they directly follow a period
pub const DEFAULT_SYMBOLS: &str = "/\\:*?\"<>|!@#$%^&()-+=[]{};,.'~`";

/// Fixed set of symbol characters, built once per transform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolSet {
    symbols: HashSet<char>,
}

impl SymbolSet {
    /// Build a symbol set from every character in `symbols`
    pub fn new(symbols: &str) -> Self {
        Self {
            symbols: symbols.chars().collect(),
        }
    }

    pub fn contains(&self, c: char) -> bool {
        self.symbols.contains(&c)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl Default for SymbolSet {
    fn default() -> Self {
        Self::new(DEFAULT_SYMBOLS)
    }
}
