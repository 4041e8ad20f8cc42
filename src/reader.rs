use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncReadExt, BufReader};
use tracing::{debug, info};

/// Input file read when no path is given
pub const DEFAULT_INPUT: &str = "input.txt";

/// Configuration for document reading
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Buffer size for async reading (default: 8KB)
    pub buffer_size: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self { buffer_size: 8192 }
    }
}

/// Statistics for a document read
#[derive(Debug, Clone)]
pub struct ReadStats {
    pub file_path: String,
    pub bytes_read: u64,
    pub duration_ms: u64,
}

/// Async reader that loads a whole document into memory
pub struct DocumentReader {
    config: ReaderConfig,
}

impl DocumentReader {
    pub fn new(config: ReaderConfig) -> Self {
        Self { config }
    }

    /// Read the entire file as UTF-8 text
    pub async fn read_document<P: AsRef<Path>>(&self, file_path: P) -> Result<(String, ReadStats)> {
        let path = file_path.as_ref();
        let start_time = std::time::Instant::now();

        debug!("Starting async read of file: {}", path.display());

        let file = File::open(path)
            .await
            .with_context(|| format!("Failed to open file {}", path.display()))?;

        let mut reader = BufReader::with_capacity(self.config.buffer_size, file);
        let mut content = String::new();
        let bytes_read = reader
            .read_to_string(&mut content)
            .await
            .with_context(|| format!("Failed to read {} as UTF-8 text", path.display()))?;

        let stats = ReadStats {
            file_path: path.display().to_string(),
            bytes_read: bytes_read as u64,
            duration_ms: start_time.elapsed().as_millis() as u64,
        };

        info!(
            "Read {}: {} bytes in {}ms",
            path.display(),
            stats.bytes_read,
            stats.duration_ms
        );

        Ok((content, stats))
    }
}

/// Read a single document with default configuration
pub async fn read_document_async<P: AsRef<Path>>(file_path: P) -> Result<String> {
    let reader = DocumentReader::new(ReaderConfig::default());
    let (content, _stats) = reader.read_document(file_path).await?;
    Ok(content)
}
