//! Benchmark stand for the sorting strategies, see `benches/sort_batch.rs`.
