//! Generic fan-out machinery: bounded workers, retry, and an ordered join.

mod barrier;
mod fan_out;
mod pool;
mod retry;

pub use barrier::{BarrierStatus, Completion, JoinBarrier};
pub use fan_out::{ComposeRequest, compose_requests};
pub use pool::WorkerPool;
pub use retry::RetryPolicy;
