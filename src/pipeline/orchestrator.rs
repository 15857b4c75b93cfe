use log::debug;
use std::io::Write;
use std::path::PathBuf;
use std::thread;

use crate::Opts;
use crate::error::SumError;
use crate::pipeline::collector::run_collector;
use crate::pipeline::context::{PipelineChannels, PipelineTuning, create_pipeline_channels};
use crate::pipeline::error_handler::{first_error, join_stage};
use crate::pipeline::feeder::run_feeder;
use crate::pipeline::workers::run_worker_pool;
use crate::utils::config::WorkerThreadLimits;

/// Main orchestrator: checksum `paths` concurrently and write one line per file to `out`.
/// Feeder → path queue → worker pool → result queue → collector, all sharing one cancel signal.
/// Output order is completion order. Returns the first fatal error from any stage.
pub fn run_pipeline<W: Write + Send>(
    paths: &[PathBuf],
    opts: &Opts,
    out: W,
) -> Result<(), SumError> {
    let tuning = PipelineTuning::for_request(opts.parallel, WorkerThreadLimits::current());
    run_pipeline_with_tuning(paths, tuning, out)
}

/// [`run_pipeline`] with an explicit worker count and queue capacity.
pub fn run_pipeline_with_tuning<W: Write + Send>(
    paths: &[PathBuf],
    tuning: PipelineTuning,
    mut out: W,
) -> Result<(), SumError> {
    debug!(
        "pipeline: {} paths, {} workers, queue cap {}",
        paths.len(),
        tuning.num_workers,
        tuning.channel_cap
    );
    let PipelineChannels {
        path_tx,
        path_rx,
        result_tx,
        result_rx,
        cancel,
    } = create_pipeline_channels(&tuning);
    let cancel = &cancel;

    let outcomes = thread::scope(|s| {
        let feeder = s.spawn(move || run_feeder(paths, path_tx, cancel));
        let pool =
            s.spawn(move || run_worker_pool(tuning.num_workers, path_rx, result_tx, cancel));
        let collector = s.spawn(move || run_collector(result_rx, &mut out, cancel));

        [
            join_stage(feeder, "path feeder", cancel).map(drop),
            join_stage(pool, "worker pool", cancel),
            join_stage(collector, "result collector", cancel).map(|written| {
                debug!("collector: wrote {} lines", written);
            }),
        ]
    });
    first_error(outcomes, cancel)
}
