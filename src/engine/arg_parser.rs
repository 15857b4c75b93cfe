use clap::Parser;
use std::path::PathBuf;

struct DefaultArgs;

impl DefaultArgs {
    pub const PARALLEL: usize = 1;
}

/// Print CRC32C (Castagnoli) checksums.
#[derive(Clone, Parser)]
#[command(name = "crc32csum", version)]
#[command(about = "Print the CRC32C of standard input, or of each FILE.")]
pub struct Cli {
    /// Files to checksum. With none, reads standard input.
    #[arg(value_name = "FILE")]
    pub paths: Vec<PathBuf>,

    /// Number of checksum computations to run in parallel. Clamped to [1, available threads].
    #[arg(long, short = 'p', default_value_t = DefaultArgs::PARALLEL)]
    pub parallel: usize,

    /// Verbose output.
    #[arg(long, short = 'v')]
    pub verbose: bool,
}
