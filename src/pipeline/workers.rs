use crossbeam_channel::{Receiver, Sender, select};
use log::debug;
use std::path::Path;
use std::thread;

use crate::SumResult;
use crate::engine::digest::Digest;
use crate::engine::hashing::sum_file;
use crate::error::SumError;
use crate::pipeline::cancel::{CancelSignal, PanicGuard};
use crate::pipeline::error_handler::{first_error, join_stage};
use crate::utils::config::IoConsts;

/// Single checksum worker: take paths from path_rx, digest each file, send results on result_tx.
/// Owns one Digest and one read buffer for its whole life. Returns how many files it summed.
fn sum_worker_loop(
    path_rx: Receiver<&Path>,
    result_tx: Sender<SumResult>,
    cancel: &CancelSignal,
) -> Result<usize, SumError> {
    let _guard = PanicGuard::new(cancel, "checksum worker");
    let mut digest = Digest::new();
    let mut buf = vec![0u8; IoConsts::READ_CHUNK_SIZE];
    let mut count = 0_usize;
    loop {
        if cancel.is_cancelled() {
            return Err(SumError::Cancelled);
        }
        let path = select! {
            recv(path_rx) -> msg => match msg {
                Ok(path) => path,
                Err(_) => break,
            },
            recv(cancel.done()) -> _ => return Err(SumError::Cancelled),
        };

        let sum = match sum_file(path, &mut digest, &mut buf) {
            Ok(sum) => sum,
            Err(err) => {
                cancel.cancel(err.clone());
                return Err(err);
            }
        };

        let result = SumResult {
            path: path.to_path_buf(),
            sum,
        };
        select! {
            send(result_tx, result) -> res => {
                if res.is_err() {
                    return Err(SumError::Cancelled);
                }
            }
            recv(cancel.done()) -> _ => return Err(SumError::Cancelled),
        }
        count += 1;
    }
    Ok(count)
}

/// Run `num_workers` checksum workers until the path queue closes or the run is cancelled.
/// Joins every worker and reduces their outcomes to the first real error. The result queue
/// closes when this returns (all senders dropped), which ends the collector.
pub fn run_worker_pool<'a>(
    num_workers: usize,
    path_rx: Receiver<&'a Path>,
    result_tx: Sender<SumResult>,
    cancel: &CancelSignal,
) -> Result<(), SumError> {
    let outcomes: Vec<Result<(), SumError>> = thread::scope(|s| {
        let handles: Vec<_> = (0..num_workers)
            .map(|id| {
                let path_rx = path_rx.clone();
                let result_tx = result_tx.clone();
                let handle = s.spawn(move || sum_worker_loop(path_rx, result_tx, cancel));
                (id, handle)
            })
            .collect();
        // Only the workers hold queue ends now.
        drop(path_rx);
        drop(result_tx);

        handles
            .into_iter()
            .map(|(id, handle)| {
                join_stage(handle, "checksum worker", cancel).map(|count| {
                    debug!("worker {}: summed {} files", id, count);
                })
            })
            .collect()
    });
    first_error(outcomes, cancel)
}
