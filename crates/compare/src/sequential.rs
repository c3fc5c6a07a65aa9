use sort_test_model::{Batch, SortedBatch};

/// Sorts the arrays one after another on the calling thread, keeping their
/// order.
#[derive(Clone, Copy, Debug, Default)]
pub struct SequentialSorter;

impl crate::Sorter for SequentialSorter {
    type Error = std::convert::Infallible;

    const NAME: &'static str = "single";

    fn sort(&self, mut batch: Batch) -> Result<SortedBatch, Self::Error> {
        for array in &mut batch {
            crate::sort_array(array);
        }
        Ok(batch)
    }
}
