use clap::Parser;
use sort_test_model::{BatchGenerator, SortRequest};

/// Writes a random request body for the sort endpoints, e.g.
/// `curl -d @batch.json localhost:8000/process-concurrent`.
fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    let mut generator = match config.seed {
        Some(seed) => BatchGenerator::with_seed(seed),
        None => BatchGenerator::new(),
    }
    .max_len(config.max_len)
    .max_value(config.max_value);

    let request = SortRequest {
        to_sort: generator.batch(config.arrays),
    };

    if let Some(parent) = config.out_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = std::io::BufWriter::new(std::fs::File::create(&config.out_path)?);
    serde_json::to_writer(file, &request)?;
    Ok(())
}

#[derive(Clone, Debug, Parser)]
#[command()]
struct Config {
    #[arg()]
    out_path: Box<std::path::Path>,
    #[arg(short, long, default_value_t = 1_000)]
    arrays: usize,
    #[arg(long, default_value_t = BatchGenerator::DEFAULT_MAX_LEN)]
    max_len: usize,
    #[arg(long, default_value_t = BatchGenerator::DEFAULT_MAX_VALUE)]
    max_value: i64,
    #[arg(long)]
    seed: Option<u64>,
}
