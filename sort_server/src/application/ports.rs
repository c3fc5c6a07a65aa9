use sort_test_compare::Strategy;
use sort_test_model::{Batch, SortedBatch};

/// A contract for the component that actually sorts a batch with the
/// requested strategy. Implementations may block.
pub trait SortBackend: Send + Sync + 'static {
    fn sort(&self, strategy: Strategy, batch: Batch) -> anyhow::Result<SortedBatch>;
}
