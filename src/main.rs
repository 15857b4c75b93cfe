//! crc32csum CLI: print the CRC32C of stdin or of each FILE.

use anyhow::Result;
use clap::Parser;
use crc32csum::engine::arg_parser::Cli;
use crc32csum::engine::handle_run;
use std::time::Instant;

fn main() -> Result<()> {
    let start_time = Instant::now();
    let cli = Cli::parse();
    handle_run(&cli)?;
    log::debug!("Total time: {:?}", start_time.elapsed());
    Ok(())
}
