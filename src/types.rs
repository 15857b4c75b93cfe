//! Public types for the crc32csum API and pipeline.

use std::path::PathBuf;

/// Checksum of one file, produced by a worker and written by the collector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SumResult {
    pub path: PathBuf,
    pub sum: u32,
}

/// Run options (CLI and lib).
#[derive(Clone, Debug)]
pub struct Opts {
    /// Requested number of concurrent checksum workers. Clamped to `[1, available threads]`.
    pub parallel: usize,
    /// Debug logging.
    pub verbose: bool,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            parallel: 1,
            verbose: false,
        }
    }
}
