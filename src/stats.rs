// Run statistics written by the CLI with --stats-out

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::transform::TransformStats;

/// Summary of one CLI run
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RunStats {
    /// Unix timestamp (seconds) when the run started
    pub run_start: u64,
    pub input_path: String,
    pub output_path: String,
    pub bytes_read: u64,
    pub bytes_written: u64,
    /// Total wall time in milliseconds
    pub processing_time_ms: u64,
    /// Time spent inside the transform (subset of processing_time_ms)
    pub transform_time_ms: u64,
    pub transform: TransformStats,
}

impl RunStats {
    /// Write stats as pretty JSON
    pub async fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        crate::writer::write_document(path, &content).await?;
        Ok(())
    }
}

/// Seconds since the Unix epoch, 0 if the clock is before it
pub fn unix_timestamp() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::SystemTime::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
