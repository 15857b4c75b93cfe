//! Application configuration constants.
//! Tuning in one place.

// ---- Worker threads ----

/// Bounds for the checksum worker count.
/// Use [`WorkerThreadLimits::current()`] to fill `all_threads` from rayon.
#[derive(Clone, Copy, Debug)]
pub struct WorkerThreadLimits {
    /// Available threads (from rayon, honours `RAYON_NUM_THREADS`).
    pub all_threads: usize,
}

impl WorkerThreadLimits {
    pub const FLOOR_THREADS: usize = 1;

    /// Build limits with `all_threads` set from `rayon::current_num_threads()`.
    pub fn current() -> Self {
        Self {
            all_threads: rayon::current_num_threads(),
        }
    }

    /// Clamp a requested worker count to `[FLOOR_THREADS, all_threads]`.
    pub fn clamp(&self, requested: usize) -> usize {
        let max = self.all_threads.max(Self::FLOOR_THREADS);
        requested.clamp(Self::FLOOR_THREADS, max)
    }
}

// ---- I/O ----

/// Read buffer sizing.
pub struct IoConsts;

impl IoConsts {
    /// Bytes read per `read` call while digesting (one buffer per call or per worker). 2 MiB.
    pub const READ_CHUNK_SIZE: usize = 2 * 1024 * 1024;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limits(all_threads: usize) -> WorkerThreadLimits {
        WorkerThreadLimits { all_threads }
    }

    #[test]
    fn test_clamp_zero_is_one() {
        assert_eq!(limits(8).clamp(0), 1);
    }

    #[test]
    fn test_clamp_within_range() {
        assert_eq!(limits(8).clamp(1), 1);
        assert_eq!(limits(8).clamp(5), 5);
        assert_eq!(limits(8).clamp(8), 8);
    }

    #[test]
    fn test_clamp_above_available() {
        assert_eq!(limits(8).clamp(1_000), 8);
        assert_eq!(limits(1).clamp(usize::MAX), 1);
    }

    #[test]
    fn test_clamp_when_no_threads_reported() {
        assert_eq!(limits(0).clamp(4), 1);
    }

    #[test]
    fn test_current_has_at_least_one_thread() {
        assert!(WorkerThreadLimits::current().clamp(usize::MAX) >= 1);
    }
}
