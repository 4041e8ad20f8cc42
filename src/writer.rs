use anyhow::{Context, Result};
use std::path::Path;
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::{debug, info};

/// Statistics for a document write
#[derive(Debug, Clone)]
pub struct WriteStats {
    pub file_path: String,
    pub bytes_written: u64,
}

/// Persist the whole document, creating the parent directory if needed
pub async fn write_document<P: AsRef<Path>>(file_path: P, text: &str) -> Result<WriteStats> {
    let path = file_path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    debug!("Writing {} bytes to {}", text.len(), path.display());

    let file = tokio::fs::File::create(path)
        .await
        .with_context(|| format!("Failed to create file {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(text.as_bytes())
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;
    writer
        .flush()
        .await
        .with_context(|| format!("Failed to flush {}", path.display()))?;

    info!("Wrote {}: {} bytes", path.display(), text.len());

    Ok(WriteStats {
        file_path: path.display().to_string(),
        bytes_written: text.len() as u64,
    })
}
