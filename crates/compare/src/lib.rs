pub mod completion;
pub mod concurrent;
pub mod sequential;

use sort_test_model::{Batch, SortedBatch};

pub use completion::{CompletionError, WaitGroup};
pub use concurrent::ConcurrentSorter;
pub use sequential::SequentialSorter;

/// A strategy for sorting every array of a batch.
pub trait Sorter: Send + Sync + 'static {
    type Error: std::error::Error + Send + Sync + 'static;

    const NAME: &str;

    fn sort(&self, batch: Batch) -> Result<SortedBatch, Self::Error>;
}

/// Sorts one array ascending, in place.
pub fn sort_array(array: &mut [i64]) {
    array.sort_unstable();
}

/// Runtime choice between the sorters, one per endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    Sequential,
    Concurrent,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::Sequential, Strategy::Concurrent];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Sequential => SequentialSorter::NAME,
            Strategy::Concurrent => ConcurrentSorter::NAME,
        }
    }

    pub fn sort(self, batch: Batch) -> Result<SortedBatch, CompletionError> {
        match self {
            Strategy::Sequential => match SequentialSorter.sort(batch) {
                Ok(sorted) => Ok(sorted),
                Err(never) => match never {},
            },
            Strategy::Concurrent => ConcurrentSorter.sort(batch),
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Strategy {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single" | "sequential" => Ok(Self::Sequential),
            "concurrent" => Ok(Self::Concurrent),
            _ => Err("unknown strategy"),
        }
    }
}
