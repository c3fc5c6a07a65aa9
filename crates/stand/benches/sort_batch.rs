use sort_test_compare::{ConcurrentSorter, SequentialSorter, Sorter};
use sort_test_config::Config;
use sort_test_model::{Batch, BatchGenerator, batch::element_count};

const BENCH_NAME: &str = "sort_batch";
const BENCH_GROUP_NAME: &str = const_format::formatc!("bench.{BENCH_NAME}");

fn sort_batch_bencher<S: Sorter>(b: &mut criterion::Bencher, sorter: &S, input: &Batch) {
    b.iter_batched(
        || input.clone(),
        |batch| sorter.sort(batch).unwrap(),
        // Every iteration consumes its own copy of the batch
        criterion::BatchSize::LargeInput,
    );
}

fn sort_batch_bench_group(c: &mut criterion::Criterion, config: &Config) {
    let mut group = c.benchmark_group(BENCH_GROUP_NAME);
    group
        .sample_size(config.bench.sample_size)
        .warm_up_time(config.bench.warm_up_time)
        .measurement_time(config.bench.measurement_time);

    let mut generator = BatchGenerator::new()
        .max_len(config.data.max_len)
        .max_value(config.data.max_value);

    for arrays in config.data.batch_sizes().unwrap() {
        let input = generator.batch(arrays);
        group.throughput(criterion::Throughput::Elements(element_count(&input) as u64));

        let bench_id = criterion::BenchmarkId::new(SequentialSorter::NAME, arrays);
        group.bench_with_input(bench_id, &input, |b, input| {
            sort_batch_bencher(b, &SequentialSorter, input);
        });

        let bench_id = criterion::BenchmarkId::new(ConcurrentSorter::NAME, arrays);
        group.bench_with_input(bench_id, &input, |b, input| {
            sort_batch_bencher(b, &ConcurrentSorter, input);
        });
    }
    group.finish();
}

fn sort_batch_benchmark(c: &mut criterion::Criterion) {
    let config = Config::try_read().unwrap();
    sort_batch_bench_group(c, &config);
}

criterion::criterion_group!(sort_batch, sort_batch_benchmark);
criterion::criterion_main!(sort_batch);
