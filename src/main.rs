use std::process::exit;
use std::time::Instant;

use agglo::core::{Config, ClusteringEngine, MergeEvent, Result};
use agglo::data::ObservationMatrix;
use agglo::utils::{load_csv_matrix, report, stats};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;

// distance matrices above this row count are noise on a terminal
const MAX_PRINTED_MATRIX_ROWS: usize = 20;

fn main() {
    env_logger::Builder::from_default_env()
        .format_timestamp_millis()
        .init();

    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        eprintln!("usage: agglo <dataset.csv> [--headers] [--raw]");
        exit(2);
    };
    let flags: Vec<String> = args.collect();
    let has_headers = flags.iter().any(|f| f == "--headers");
    let config = Config {
        standardize: !flags.iter().any(|f| f == "--raw"),
        ..Config::default()
    };

    if let Err(e) = run(&path, has_headers, config) {
        eprintln!("Error: {}", e);
        exit(1);
    }
}

fn run(path: &str, has_headers: bool, config: Config) -> Result<()> {
    let total_start = Instant::now();

    let data = load_csv_matrix(path, has_headers)?;
    info!(
        "Loaded {} observations with {} features from {}",
        data.num_observations(),
        data.num_features(),
        path
    );

    println!("Column statistics:");
    println!(
        "{}",
        report::format_summaries(&stats::summarize(&data), config.precision)
    );

    if data.num_observations() <= MAX_PRINTED_MATRIX_ROWS {
        let distances = agglo::core::distance::pairwise_distances(&data);
        println!("\nPairwise distances:");
        println!(
            "{}",
            report::format_distance_matrix(&distances, config.precision)
        );
    }

    let data = if config.standardize {
        info!("Standardizing dataset with z-scores");
        stats::zscore(&data)?
    } else {
        data
    };

    let cluster_start = Instant::now();
    let events = run_engine(data)?;
    info!("Clustering took {:?}", cluster_start.elapsed());

    println!("\nMerge sequence:");
    for event in &events {
        println!("{}", report::format_merge(event, config.precision));
    }

    info!("Finished in {:?}", total_start.elapsed());
    Ok(())
}

/// Drives the merge loop step by step behind a progress bar. Events are
/// collected and rendered only after the whole run succeeds, so an error
/// never leaves a partial merge report on the terminal.
fn run_engine(data: ObservationMatrix) -> Result<Vec<MergeEvent>> {
    let mut engine = ClusteringEngine::new(data)?;
    let steps = engine.num_clusters().saturating_sub(1);

    let progress_bar = ProgressBar::new(steps as u64);
    progress_bar.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos:>4}/{len:4} merges")
            .expect("Failed to set progress bar style")
            .progress_chars("=>-"),
    );

    let mut events = Vec::with_capacity(steps);
    while engine.num_clusters() > 1 {
        events.push(engine.merge_step()?);
        progress_bar.inc(1);
    }
    progress_bar.finish_and_clear();

    Ok(events)
}
