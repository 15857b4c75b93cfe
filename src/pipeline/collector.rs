//! Result collector: the only writer of output lines in parallel mode.

use crossbeam_channel::{Receiver, select};
use std::io::Write;

use crate::SumResult;
use crate::engine::tools::write_line;
use crate::error::SumError;
use crate::pipeline::cancel::CancelSignal;

/// Write one line per result, in arrival order, until the result queue closes.
/// A write failure cancels the run. Returns the number of lines written.
pub fn run_collector<W: Write>(
    result_rx: Receiver<SumResult>,
    out: &mut W,
    cancel: &CancelSignal,
) -> Result<usize, SumError> {
    let mut written = 0_usize;
    loop {
        let result = select! {
            recv(result_rx) -> msg => match msg {
                Ok(result) => result,
                Err(_) => break,
            },
            recv(cancel.done()) -> _ => return Err(SumError::Cancelled),
        };
        if let Err(err) = write_line(out, result.sum, Some(&result.path)) {
            cancel.cancel(err.clone());
            return Err(err);
        }
        written += 1;
    }
    if let Err(e) = out.flush() {
        let err = SumError::write(e);
        cancel.cancel(err.clone());
        return Err(err);
    }
    Ok(written)
}
