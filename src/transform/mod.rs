// Text transformer: line filter -> sentence normalizer -> brace-aware splitter
// Each pass consumes the full output of the previous one

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::TransformError;

pub mod line_filter;
pub mod normalization;
pub mod splitter;
pub mod symbols;

pub use line_filter::{filter_lines, filter_lines_counted, FilteredLines};
pub use normalization::{normalize_sentence_breaks, NormalizedText, SentenceNormalizer};
pub use splitter::{split_sentences, split_sentences_counted, SplitText};
pub use symbols::{SymbolSet, DEFAULT_SYMBOLS};

/// Lines containing this phrase are dropped from book excerpts
pub const DEFAULT_MARKER: &str = "Click here to view code image";

/// Parameters fixed for the lifetime of one transform
#[derive(Debug, Clone)]
pub struct TransformRules {
    /// Any line containing this substring is removed
    pub marker: String,
    /// Characters that suppress a break after a period
    pub symbols: SymbolSet,
}

impl Default for TransformRules {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_string(),
            symbols: SymbolSet::default(),
        }
    }
}

/// Counters gathered during a single transform
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct TransformStats {
    pub input_chars: u64,
    pub output_chars: u64,
    pub lines_seen: u64,
    pub lines_removed: u64,
    pub normalizer_breaks: u64,
    pub splitter_breaks: u64,
    pub max_brace_depth: u64,
}

/// Text transformer with a precompiled normalizer
pub struct Transformer {
    rules: TransformRules,
    normalizer: SentenceNormalizer,
}

impl Transformer {
    /// Create a transformer with custom rules
    pub fn new(rules: TransformRules) -> Result<Self, TransformError> {
        let normalizer = SentenceNormalizer::new()?;
        Ok(Self { rules, normalizer })
    }

    /// Create a transformer with the default marker and symbol set
    pub fn with_default_rules() -> Result<Self, TransformError> {
        Self::new(TransformRules::default())
    }

    pub fn rules(&self) -> &TransformRules {
        &self.rules
    }

    /// Run all three passes and return the final text
    pub fn transform(&self, document: &str) -> Result<String, TransformError> {
        Ok(self.transform_with_stats(document)?.0)
    }

    /// Run all three passes, also returning pass counters
    pub fn transform_with_stats(&self, document: &str) -> Result<(String, TransformStats), TransformError> {
        debug!("Transforming document of {} bytes", document.len());

        let filtered = filter_lines_counted(document, &self.rules.marker);
        debug!(
            "Line filter kept {} of {} lines",
            filtered.lines_seen - filtered.lines_removed,
            filtered.lines_seen
        );

        let normalized = self.normalizer.normalize_counted(&filtered.text);
        debug!("Normalizer inserted {} breaks", normalized.breaks_inserted);

        let split = split_sentences_counted(&normalized.text, &self.rules.symbols)?;

        let stats = TransformStats {
            input_chars: document.chars().count() as u64,
            output_chars: split.text.chars().count() as u64,
            lines_seen: filtered.lines_seen as u64,
            lines_removed: filtered.lines_removed as u64,
            normalizer_breaks: normalized.breaks_inserted as u64,
            splitter_breaks: split.breaks_inserted as u64,
            max_brace_depth: split.max_brace_depth as u64,
        };

        info!(
            lines_removed = stats.lines_removed,
            normalizer_breaks = stats.normalizer_breaks,
            splitter_breaks = stats.splitter_breaks,
            "Transform completed"
        );

        Ok((split.text, stats))
    }
}

/// Transform `document`, removing lines containing `marker`, with the default symbol set
pub fn transform(document: &str, marker: &str) -> Result<String, TransformError> {
    transform_with_symbols(document, marker, SymbolSet::default())
}

/// Transform `document` with an explicit marker and symbol set
pub fn transform_with_symbols(document: &str, marker: &str, symbols: SymbolSet) -> Result<String, TransformError> {
    let rules = TransformRules {
        marker: marker.to_string(),
        symbols,
    };
    Transformer::new(rules)?.transform(document)
}
