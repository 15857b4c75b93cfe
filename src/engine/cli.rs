//! CLI command handler: stdin, a single file, or the parallel pipeline.

use anyhow::Result;
use log::debug;
use std::io;

use crate::Opts;
use crate::engine::arg_parser::Cli;
use crate::sum_inputs;
use crate::utils::setup_logging;

fn setup_opts(cli: &Cli) -> Opts {
    setup_logging(cli.verbose);
    Opts {
        parallel: cli.parallel,
        verbose: cli.verbose,
    }
}

/// Checksum every FILE (or stdin) and print one line each to stdout.
pub fn handle_run(cli: &Cli) -> Result<()> {
    let opts = setup_opts(cli);
    match cli.paths.len() {
        0 => debug!("Reading standard input"),
        1 => debug!("Summing a single file"),
        n => debug!("Summing {} files, {} requested workers", n, opts.parallel),
    }
    sum_inputs(&cli.paths, &opts, io::stdin().lock(), io::stdout())?;
    Ok(())
}
