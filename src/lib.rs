pub mod error;
pub mod output_name;
pub mod reader;
pub mod stats;
pub mod transform;
pub mod writer;

// Re-export the transform core for convenient access
pub use error::TransformError;
pub use transform::{
    filter_lines, normalize_sentence_breaks, split_sentences, transform, transform_with_symbols,
    SymbolSet, TransformRules, TransformStats, Transformer, DEFAULT_MARKER,
};

// Re-export I/O glue used by the CLI
pub use output_name::{output_file_name, output_path, DEFAULT_TITLE};
pub use reader::{read_document_async, DocumentReader, ReaderConfig};
pub use stats::RunStats;
pub use writer::write_document;
