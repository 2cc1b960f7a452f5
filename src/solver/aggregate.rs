use super::Solution;
use log::info;
use parking_lot::Mutex;
use std::cmp::Reverse;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Collects the solutions of the partitions of a search.
///
/// Every partition reports once with [`complete`](Aggregator::complete). The last report
/// merges the solutions in partition order, sorts them by score and hands them to the
/// completion handler.
pub(crate) struct Aggregator<F> {
    pending: AtomicUsize,
    buffers: Mutex<Vec<Vec<Solution>>>,
    done: Mutex<Option<F>>,
}

impl<F> Aggregator<F>
where
    F: FnOnce(Vec<Solution>),
{
    /// An aggregator for `partitions` partitions. Without partitions, `done` is called at once.
    pub(crate) fn new(partitions: usize, done: F) -> Aggregator<F> {
        let aggregator = Aggregator {
            pending: AtomicUsize::new(partitions),
            buffers: Mutex::new(vec![Vec::new(); partitions]),
            done: Mutex::new(Some(done)),
        };
        if partitions == 0 {
            aggregator.deliver();
        }
        aggregator
    }

    /// Store the solutions found by partition `index`.
    pub(crate) fn complete(&self, index: usize, found: Vec<Solution>) {
        if let Some(buffer) = self.buffers.lock().get_mut(index) {
            *buffer = found;
        }
        if self.pending.fetch_sub(1, Ordering::AcqRel) == 1 {
            self.deliver();
        }
    }

    fn deliver(&self) {
        let mut solutions: Vec<Solution> = self.buffers.lock().drain(..).flatten().collect();
        solutions.sort_by_key(|solution| Reverse(solution.score));
        info!(
            "found {} solutions, best score {}",
            solutions.len(),
            solutions.first().map_or(0, |solution| solution.score)
        );
        if let Some(done) = self.done.lock().take() {
            done(solutions);
        }
    }
}
