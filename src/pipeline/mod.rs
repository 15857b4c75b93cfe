//! Parallel pipeline: path feeder, worker pool, result collector, shared cancellation.

pub mod cancel;
pub mod collector;
pub mod context;
pub mod error_handler;
pub mod feeder;
pub mod orchestrator;
pub mod workers;

pub use cancel::{CancelSignal, PanicGuard};
pub use collector::run_collector;
pub use context::{PipelineChannels, PipelineTuning, create_pipeline_channels};
pub use error_handler::{first_error, join_stage};
pub use feeder::run_feeder;
pub use orchestrator::{run_pipeline, run_pipeline_with_tuning};
pub use workers::run_worker_pool;
