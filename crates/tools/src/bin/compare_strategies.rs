use clap::Parser;
use sort_test_compare::Strategy;
use sort_test_model::{BatchGenerator, Measurement, batch::element_count, measure};
use tracing_subscriber::EnvFilter;

/// Runs both strategies over the same generated batches and reports how long
/// each took.
fn main() -> anyhow::Result<()> {
    let options = Options::parse();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();

    let config = sort_test_config::Config::try_read()?;
    let sizes = match &options.arrays {
        Some(sizes) => sizes.clone(),
        None => config.data.batch_sizes()?.collect(),
    };

    let mut handler = handler(&options);
    let mut generator = BatchGenerator::new()
        .max_len(config.data.max_len)
        .max_value(config.data.max_value);

    for arrays in sizes {
        let input = generator.batch(arrays);
        let elements = element_count(&input);
        for strategy in Strategy::ALL {
            if options.skip.contains(&strategy) {
                continue;
            }
            let (sorted, measurement) = measure(|| strategy.sort(input.clone()));
            let sorted = sorted?;
            anyhow::ensure!(sorted.len() == arrays, "{strategy} lost arrays");
            handler(strategy, arrays, elements, &measurement)?;
        }
    }
    Ok(())
}

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Options {
    /// Batch sizes to compare, `data.range` stepped by `data.step` by default.
    #[arg(long, value_delimiter = ',')]
    arrays: Option<Vec<usize>>,
    /// Strategies to leave out, `single` or `concurrent`.
    #[arg(long)]
    skip: Vec<Strategy>,
    #[arg(long)]
    csv: bool,
    #[arg(long)]
    csv_no_headers: bool,
}

#[derive(Debug, serde::Serialize)]
struct Record {
    strategy: &'static str,
    arrays: usize,
    elements: usize,
    spent_ns: u64,
    throughput: f64,
}

type Handler = Box<dyn FnMut(Strategy, usize, usize, &Measurement) -> anyhow::Result<()>>;

fn handler(options: &Options) -> Handler {
    if options.csv {
        let mut wr = csv::WriterBuilder::new()
            .has_headers(!options.csv_no_headers)
            .from_writer(std::io::stdout());

        Box::new(move |strategy: Strategy, arrays: usize, elements: usize, m: &Measurement| -> anyhow::Result<()> {
            wr.serialize(Record {
                strategy: strategy.name(),
                arrays,
                elements,
                spent_ns: m.as_nanos(),
                throughput: m.throughput(elements),
            })?;
            wr.flush()?;
            Ok(())
        }) as Handler
    } else {
        Box::new(|strategy: Strategy, arrays: usize, elements: usize, m: &Measurement| -> anyhow::Result<()> {
            println!(
                "strategy={strategy}\tarrays={arrays}\telements={elements}\tspent={:.1?}\tthroughput={:.0}el/s",
                m.spent(),
                m.throughput(elements),
            );
            Ok(())
        }) as Handler
    }
}
