use sort_test_compare::Strategy;
use sort_test_model::{Batch, SortedBatch};

use crate::application::ports::SortBackend;

/// An adapter that implements the `SortBackend` port with the in-process
/// sequential and thread-per-array sorters.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadSorter;

impl SortBackend for ThreadSorter {
    fn sort(&self, strategy: Strategy, batch: Batch) -> anyhow::Result<SortedBatch> {
        let sorted = strategy.sort(batch)?;
        Ok(sorted)
    }
}
