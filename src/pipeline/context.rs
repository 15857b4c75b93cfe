//! Pipeline tuning and channels: the bounded path and result queues plus the shared signal.

use crossbeam_channel::{Receiver, Sender, bounded};
use std::path::Path;

use crate::SumResult;
use crate::pipeline::cancel::CancelSignal;
use crate::utils::config::WorkerThreadLimits;

/// Worker count and queue capacity for one run.
#[derive(Clone, Copy, Debug)]
pub struct PipelineTuning {
    pub num_workers: usize,
    /// Capacity of both the path and the result queue.
    pub channel_cap: usize,
}

impl PipelineTuning {
    /// Clamp `requested` against `limits`; both queues get one slot per worker.
    pub fn for_request(requested: usize, limits: WorkerThreadLimits) -> Self {
        let num_workers = limits.clamp(requested);
        Self {
            num_workers,
            channel_cap: num_workers,
        }
    }
}

/// Channels and shared state for the pipeline. Feeder gets path_tx; workers get path_rx and
/// result_tx; the collector gets result_rx. Paths are borrowed from the caller's list.
pub struct PipelineChannels<'a> {
    pub path_tx: Sender<&'a Path>,
    pub path_rx: Receiver<&'a Path>,
    pub result_tx: Sender<SumResult>,
    pub result_rx: Receiver<SumResult>,
    pub cancel: CancelSignal,
}

pub fn create_pipeline_channels<'a>(tuning: &PipelineTuning) -> PipelineChannels<'a> {
    let (path_tx, path_rx) = bounded::<&'a Path>(tuning.channel_cap);
    let (result_tx, result_rx) = bounded::<SumResult>(tuning.channel_cap);
    PipelineChannels {
        path_tx,
        path_rx,
        result_tx,
        result_rx,
        cancel: CancelSignal::new(),
    }
}
