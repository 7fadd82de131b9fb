use logical_metrics::{load_definitions, load_file, LogicalMetric, MetricDictionary, Row};
use std::time::Instant;

const DEFAULT_DEFINITIONS: &str = "
# latency
minDuration = longMin(duration)
maxDuration = longMax(duration)
totalDuration = longSum(duration)

# load
peakLoad = doubleMax(load)
requests = count(duration)
";

fn generate_rows(count: usize) -> Vec<Row> {
    use rand::Rng;

    let mut rng = rand::thread_rng();

    (0..count)
        .map(|idx| {
            let host = format!("h-{}", idx % 3);

            // Short requests most of the time, with the occasional slow one
            let duration: i64 = if rng.gen_bool(0.05) {
                rng.gen_range(500..2_000)
            } else {
                rng.gen_range(5..50)
            };

            Row::new()
                .with_dimension("env", "prod")
                .with_dimension("host", host)
                .with_value("duration", duration)
                .with_value("load", rng.gen_range(0.0..1.0_f64))
        })
        .collect()
}

/// Registers the definitions from `path`, or the built-in set if no path is given.
fn register_metrics(
    dictionary: &MetricDictionary,
    path: Option<String>,
) -> logical_metrics::Result<Vec<LogicalMetric>> {
    match path {
        Some(path) => load_file(dictionary, path),
        None => load_definitions(dictionary, DEFAULT_DEFINITIONS),
    }
}

fn main() -> logical_metrics::Result<()> {
    env_logger::builder()
        .filter_module("logical_metrics", log::LevelFilter::Debug)
        .parse_default_env()
        .init();

    let dictionary = MetricDictionary::new();

    let start = Instant::now();

    let metrics = register_metrics(&dictionary, std::env::args().nth(1))?;

    log::info!(
        "loaded {} definitions in {:?}, dictionary: {dictionary:?}",
        metrics.len(),
        start.elapsed()
    );

    let rows = generate_rows(100_000);

    for name in dictionary.names() {
        let Some(metric) = dictionary.get(&name) else {
            continue;
        };

        let start = Instant::now();
        let result = metric.evaluate(&rows, "host")?;

        let mut groups = result.into_iter().collect::<Vec<_>>();
        groups.sort_by(|a, b| a.0.cmp(&b.0));

        log::info!("{metric} in {:?}: {groups:?}", start.elapsed());
    }

    Ok(())
}
