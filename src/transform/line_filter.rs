// Line filter pass: drop every line that contains the marker

/// Outcome of a line filter pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredLines {
    pub text: String,
    pub lines_seen: usize,
    pub lines_removed: usize,
}

/// Remove every `\n`-delimited line containing `marker`.
///
/// Surviving lines are each terminated with `\n`, including the last one.
/// Trailing empty lines are discarded and an empty document counts as a
/// single empty line. An empty marker matches every line.
pub fn filter_lines(document: &str, marker: &str) -> String {
    filter_lines_counted(document, marker).text
}

/// Same as [`filter_lines`] but also reports how many lines were seen and removed
pub fn filter_lines_counted(document: &str, marker: &str) -> FilteredLines {
    let lines = split_lines(document);
    let mut text = String::with_capacity(document.len() + 1);
    let mut lines_removed = 0;

    for line in &lines {
        if line.contains(marker) {
            lines_removed += 1;
        } else {
            text.push_str(line);
            text.push('\n');
        }
    }

    FilteredLines {
        text,
        lines_seen: lines.len(),
        lines_removed,
    }
}

/// Split on `\n`, dropping trailing empty segments
fn split_lines(document: &str) -> Vec<&str> {
    if document.is_empty() {
        return vec![""];
    }
    let mut lines: Vec<&str> = document.split('\n').collect();
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines
}
