//! Bounded worker pool for fan-out batches.

use crate::engine::{BarrierStatus, Completion, JoinBarrier, RetryPolicy};
use presenter_error::{PipelineError, PipelineErrorKind, PresenterResult};
use std::future::Future;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::{JoinError, JoinSet};
use tracing::{Instrument, debug, info_span, instrument};

/// Runs one stage over a batch of items with at most `workers` in flight.
///
/// Items are dispatched in order as permits free up. Results come back
/// through a [`JoinBarrier`], so the returned vector is in input order no
/// matter which item finished first. The first item that fails (after its
/// retries) fails the batch, and the remaining tasks are aborted.
///
/// ```
/// use presenter_workflow::engine::{RetryPolicy, WorkerPool};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = WorkerPool::new(2)?;
/// let doubled = pool
///     .run(vec![1, 2, 3], RetryPolicy::none(), |n| async move { Ok(n * 2) })
///     .await?;
/// assert_eq!(doubled, vec![2, 4, 6]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkerPool {
    workers: usize,
}

impl WorkerPool {
    /// Pool running up to `workers` items at once.
    ///
    /// # Errors
    ///
    /// Returns `NoWorkers` if `workers` is zero.
    pub fn new(workers: usize) -> PresenterResult<Self> {
        if workers == 0 {
            return Err(PipelineError::new(PipelineErrorKind::NoWorkers).into());
        }
        Ok(Self { workers })
    }

    /// Concurrency limit.
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Apply `stage` to every item and return the results in item order.
    ///
    /// An empty batch returns an empty vector without spawning anything.
    #[instrument(skip(self, items, retry, stage), fields(workers = self.workers, batch = items.len()))]
    pub async fn run<I, T, F, Fut>(
        &self,
        items: Vec<I>,
        retry: RetryPolicy,
        stage: F,
    ) -> PresenterResult<Vec<T>>
    where
        I: Clone + Send + Sync + 'static,
        T: Send + 'static,
        F: Fn(I) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = PresenterResult<T>> + Send + 'static,
    {
        let expected = items.len();
        if expected == 0 {
            debug!("Empty batch, nothing to dispatch");
            return Ok(Vec::new());
        }

        let semaphore = Arc::new(Semaphore::new(self.workers));
        let stage = Arc::new(stage);
        let mut barrier = JoinBarrier::new(expected);
        let mut tasks = JoinSet::new();
        let mut ordered = None;

        for (index, item) in items.into_iter().enumerate() {
            let permit = Arc::clone(&semaphore)
                .acquire_owned()
                .await
                .map_err(|e| PipelineError::new(PipelineErrorKind::TaskFailed(e.to_string())))?;
            let stage = Arc::clone(&stage);

            tasks.spawn(
                async move {
                    let _permit = permit;
                    let result = retry.run(|| (*stage)(item.clone())).await;
                    (index, result)
                }
                .instrument(info_span!("worker", index)),
            );

            while let Some(joined) = tasks.try_join_next() {
                if let Some(values) = absorb(&mut barrier, joined)? {
                    ordered = Some(values);
                }
            }
        }

        while let Some(joined) = tasks.join_next().await {
            if let Some(values) = absorb(&mut barrier, joined)? {
                ordered = Some(values);
            }
        }

        ordered.ok_or_else(|| {
            PipelineError::new(PipelineErrorKind::Incomplete {
                received: barrier.received(),
                expected,
            })
            .into()
        })
    }
}

// Feed one finished task into the barrier; Some once the batch is complete
fn absorb<T>(
    barrier: &mut JoinBarrier<T>,
    joined: Result<(usize, PresenterResult<T>), JoinError>,
) -> PresenterResult<Option<Vec<T>>> {
    let (index, result) =
        joined.map_err(|e| PipelineError::new(PipelineErrorKind::TaskFailed(e.to_string())))?;
    let value = result?;

    match barrier.collect(Completion::new(index, value))? {
        BarrierStatus::Complete(values) => Ok(Some(values)),
        BarrierStatus::Pending { .. } => Ok(None),
    }
}
