use std::thread::ScopedJoinHandle;

use crate::error::SumError;
use crate::pipeline::cancel::CancelSignal;

/// Join a stage thread. A panic becomes [`SumError::Panicked`] and cancels the run.
pub fn join_stage<T>(
    handle: ScopedJoinHandle<'_, Result<T, SumError>>,
    stage: &'static str,
    cancel: &CancelSignal,
) -> Result<T, SumError> {
    handle.join().unwrap_or_else(|_| {
        let err = SumError::Panicked(stage);
        cancel.cancel(err.clone());
        Err(err)
    })
}

/// Reduce joined stage outcomes to one result. Call after every stage has been joined.
///
/// The cancellation reason (first fatal error) wins. Otherwise the first error that is not
/// plain cancellation; and a lone `Cancelled` is still reported rather than dropped.
pub fn first_error<I>(outcomes: I, cancel: &CancelSignal) -> Result<(), SumError>
where
    I: IntoIterator<Item = Result<(), SumError>>,
{
    let mut first: Option<SumError> = None;
    for err in outcomes.into_iter().filter_map(Result::err) {
        match &first {
            None => first = Some(err),
            Some(prev) if prev.is_cancelled() && !err.is_cancelled() => first = Some(err),
            Some(_) => {}
        }
    }
    if let Some(reason) = cancel.reason() {
        return Err(reason.clone());
    }
    match first {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
