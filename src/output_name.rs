// Output file naming derived from a chapter title

use std::path::{Path, PathBuf};

/// Title used when none is given on the command line
pub const DEFAULT_TITLE: &str = "11.7 Generic Methods and Constructors.md";

/// Replace spaces with underscores and lower-case the result
pub fn output_file_name(title: &str) -> String {
    title.replace(' ', "_").to_lowercase()
}

/// Resolve the output path for `title` inside `output_dir`
pub fn output_path<P: AsRef<Path>>(output_dir: P, title: &str) -> PathBuf {
    output_dir.as_ref().join(output_file_name(title))
}
