//! Error types for crc32csum

use std::io;
use std::sync::Arc;
use thiserror::Error;

/// Path label used in diagnostics for standard input.
pub const STDIN_LABEL: &str = "-";

/// Errors that can end a checksum run.
///
/// I/O sources are shared (`Arc`) so the first failure can be kept as the
/// pipeline's cancellation reason and still be returned by the stage that hit it.
#[derive(Error, Debug, Clone)]
pub enum SumError {
    /// A path could not be opened
    #[error("open {path}")]
    Open {
        path: String,
        #[source]
        source: Arc<io::Error>,
    },

    /// Reading bytes from an opened input failed
    #[error("read {path}")]
    Read {
        path: String,
        #[source]
        source: Arc<io::Error>,
    },

    /// Writing a formatted line to the output failed
    #[error("write output")]
    Write(#[source] Arc<io::Error>),

    /// The stage stopped because another stage cancelled the run
    #[error("cancelled")]
    Cancelled,

    /// A pipeline stage thread panicked
    #[error("{0} panicked")]
    Panicked(&'static str),
}

impl SumError {
    pub fn open(path: impl Into<String>, source: io::Error) -> Self {
        Self::Open {
            path: path.into(),
            source: Arc::new(source),
        }
    }

    pub fn read(path: impl Into<String>, source: io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source: Arc::new(source),
        }
    }

    pub fn write(source: io::Error) -> Self {
        Self::Write(Arc::new(source))
    }

    /// True for the secondary error of a stage that only observed cancellation.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}
