//! crc32csum: CRC32C (Castagnoli) checksums for standard input or a list of files.

pub mod engine;
pub mod error;
pub mod pipeline;
pub mod types;
pub mod utils;

/// Re-export types for API
pub use error::SumError;
pub use types::*;

use log::debug;
use std::io::{Read, Write};
use std::path::PathBuf;

/// Result alias used by the crc32csum library API
pub type Result<T> = std::result::Result<T, SumError>;

/// Single entry point: checksum `paths` and write one line per input to `out`.
///
/// - **no paths** → digest `input` and write the bare checksum (stream mode).
/// - **one path** → [`sum_path`](crate::engine::sequential::sum_path), sequential.
/// - **two or more** → [`run_pipeline`](crate::pipeline::run_pipeline) with `opts.parallel` workers
///   (clamped). Lines arrive in completion order, not input order.
pub fn sum_inputs<R, W>(paths: &[PathBuf], opts: &Opts, mut input: R, mut out: W) -> Result<()>
where
    R: Read,
    W: Write + Send,
{
    debug!(
        "{} CONFIG:{:?}",
        env!("CARGO_PKG_NAME").to_string().to_uppercase(),
        opts
    );

    match paths {
        [] => engine::sum_stream(&mut input, &mut out).map(drop),
        [path] => engine::sum_path(path, &mut out).map(drop),
        _ => pipeline::run_pipeline(paths, opts, out),
    }
}
