//! Path feeder: offers input paths, in order, to whichever worker is free.

use crossbeam_channel::{Sender, select};
use log::debug;
use std::path::{Path, PathBuf};

use crate::error::SumError;
use crate::pipeline::cancel::CancelSignal;

/// Send each path on `path_tx` in input order. Every send races `cancel`.
/// Dropping `path_tx` on return closes the queue so idle workers exit.
pub fn run_feeder<'a>(
    paths: &'a [PathBuf],
    path_tx: Sender<&'a Path>,
    cancel: &CancelSignal,
) -> Result<usize, SumError> {
    for (sent, path) in paths.iter().enumerate() {
        if cancel.is_cancelled() {
            debug!("feeder: cancelled after {} of {} paths", sent, paths.len());
            return Err(SumError::Cancelled);
        }
        select! {
            send(path_tx, path.as_path()) -> res => {
                // Every worker is gone; only happens once the run is failing.
                if res.is_err() {
                    return Err(SumError::Cancelled);
                }
            }
            recv(cancel.done()) -> _ => {
                debug!("feeder: cancelled after {} of {} paths", sent, paths.len());
                return Err(SumError::Cancelled);
            }
        }
    }
    drop(path_tx);
    Ok(paths.len())
}
