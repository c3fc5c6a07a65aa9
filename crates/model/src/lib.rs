pub mod batch;
pub mod generator;
pub mod measurement;

pub use batch::{Batch, SortRequest, SortResponse, SortedBatch};
pub use generator::BatchGenerator;
pub use measurement::{Measurement, Stopwatch, measure};
