//! Join barrier for fan-out batches.

use presenter_error::{PipelineError, PipelineErrorKind, PresenterResult};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// One finished unit of work, tagged with its position in the batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion<T> {
    /// Position in the batch, `0..expected`
    pub index: usize,
    /// Result of the work
    pub value: T,
}

impl<T> Completion<T> {
    /// Tag `value` with `index`.
    pub fn new(index: usize, value: T) -> Self {
        Self { index, value }
    }
}

/// What the barrier has seen so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BarrierStatus<T> {
    /// Still waiting on other indices
    Pending {
        /// Distinct indices collected
        received: usize,
        /// Batch size
        expected: usize,
    },
    /// Every index arrived; values in index order
    Complete(Vec<T>),
}

/// Collects completions for a batch of known size and releases them once, in
/// index order, when the last one arrives.
///
/// ```
/// use presenter_workflow::engine::{BarrierStatus, Completion, JoinBarrier};
///
/// let mut barrier = JoinBarrier::new(2);
/// assert!(matches!(
///     barrier.collect(Completion::new(1, "b")).unwrap(),
///     BarrierStatus::Pending { received: 1, expected: 2 }
/// ));
/// assert_eq!(
///     barrier.collect(Completion::new(0, "a")).unwrap(),
///     BarrierStatus::Complete(vec!["a", "b"])
/// );
/// ```
#[derive(Debug)]
pub struct JoinBarrier<T> {
    expected: usize,
    collected: BTreeMap<usize, T>,
    released: bool,
}

impl<T> JoinBarrier<T> {
    /// Barrier waiting for `expected` completions.
    pub fn new(expected: usize) -> Self {
        Self {
            expected,
            collected: BTreeMap::new(),
            released: false,
        }
    }

    /// Batch size.
    pub fn expected(&self) -> usize {
        self.expected
    }

    /// Distinct indices collected so far.
    pub fn received(&self) -> usize {
        self.collected.len()
    }

    /// Whether the ordered results have been handed out.
    pub fn is_released(&self) -> bool {
        self.released
    }

    /// Record a completion.
    ///
    /// A repeated index keeps the first value. Indices outside the batch and
    /// completions arriving after release are errors.
    pub fn collect(&mut self, completion: Completion<T>) -> PresenterResult<BarrierStatus<T>> {
        if self.released {
            return Err(PipelineError::new(PipelineErrorKind::BarrierCompleted).into());
        }

        let Completion { index, value } = completion;
        if index >= self.expected {
            return Err(PipelineError::new(PipelineErrorKind::IndexOutOfRange {
                index,
                expected: self.expected,
            })
            .into());
        }

        if self.collected.contains_key(&index) {
            warn!(index, "Duplicate completion ignored");
        } else {
            self.collected.insert(index, value);
            debug!(index, received = self.collected.len(), expected = self.expected, "Collected completion");
        }

        if self.collected.len() < self.expected {
            return Ok(BarrierStatus::Pending {
                received: self.collected.len(),
                expected: self.expected,
            });
        }

        self.released = true;
        let ordered = std::mem::take(&mut self.collected).into_values().collect();
        Ok(BarrierStatus::Complete(ordered))
    }
}
