use std::sync::Arc;

use sort_test_compare::Strategy;
use sort_test_model::{Batch, SortResponse, measure};
use tracing::Instrument;

use super::ports::SortBackend;

/// The application service behind both endpoints: runs one strategy over a
/// batch and times the whole call.
///
/// It is generic over the `SortBackend` port so the transport can be tested
/// against a fake backend.
pub struct SortService<B: SortBackend> {
    backend: Arc<B>,
}

impl<B: SortBackend> SortService<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    /// Sorts `batch` on the blocking pool.
    ///
    /// The measurement starts right before the backend is invoked and stops
    /// once it returned, so it covers the wait-all barrier of the concurrent
    /// strategy but not the hop onto the blocking pool.
    pub async fn process(
        &self,
        strategy: Strategy,
        batch: Batch,
    ) -> anyhow::Result<SortResponse> {
        let arrays = batch.len();
        let span = tracing::info_span!("process", %strategy, arrays);

        let backend = Arc::clone(&self.backend);
        let (sorted, measurement) = tokio::task::spawn_blocking(move || {
            measure(|| backend.sort(strategy, batch))
        })
        .instrument(span.clone())
        .await?;
        let sorted = sorted?;

        span.in_scope(|| {
            tracing::debug!(spent = ?measurement.spent(), "batch sorted");
        });
        Ok(SortResponse::new(sorted, measurement))
    }
}

impl<B: SortBackend> Clone for SortService<B> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
        }
    }
}

#[cfg(test)]
mod tests {
    use sort_test_model::SortedBatch;

    use super::*;
    use crate::infrastructure::sorter::ThreadSorter;

    struct FailingBackend;

    impl SortBackend for FailingBackend {
        fn sort(&self, _: Strategy, _: Batch) -> anyhow::Result<SortedBatch> {
            anyhow::bail!("backend unavailable")
        }
    }

    #[tokio::test]
    async fn sequential_keeps_order() -> anyhow::Result<()> {
        let service = SortService::new(ThreadSorter);
        let response = service
            .process(Strategy::Sequential, vec![vec![5, 4], vec![2], vec![]])
            .await?;
        assert_eq!(response.sorted_arrays, vec![vec![4, 5], vec![2], vec![]]);
        Ok(())
    }

    #[tokio::test]
    async fn empty_batch() -> anyhow::Result<()> {
        let service = SortService::new(ThreadSorter);
        for strategy in Strategy::ALL {
            let response = service.process(strategy, vec![]).await?;
            assert!(response.sorted_arrays.is_empty());
        }
        Ok(())
    }

    #[tokio::test]
    async fn backend_errors_propagate() {
        let service = SortService::new(FailingBackend);
        let result = service.process(Strategy::Concurrent, vec![vec![1]]).await;
        assert!(result.is_err());
    }
}
