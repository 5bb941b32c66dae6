use std::{path::PathBuf, process::ExitCode};

use clap::{Args, Parser, Subcommand};
use serp_compare::{
    compare::{LengthPolicy, QueryComparator},
    config::{ScrapeConfig, DEFAULT_ENGINE},
    error::Result,
    queries::read_queries,
    report::{aggregate, RowLabels},
    result_set::{self, ResultSet},
    scrape::Scraper,
};
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Scrapes a search engine for every query and saves the result URLs
    Scrape(ScrapeArgs),

    /// Compares saved results against reference results and writes a CSV report
    Compare {
        /// Path to the results being evaluated
        #[arg(long, default_value = "results.json")]
        candidate: PathBuf,

        #[command(flatten)]
        compare: CompareArgs,
    },

    /// Scrapes, then compares the fresh results against the reference results
    Run {
        #[command(flatten)]
        scrape: ScrapeArgs,

        #[command(flatten)]
        compare: CompareArgs,
    },
}

#[derive(Args, Debug)]
struct ScrapeArgs {
    /// Path to the query list, one query per line
    #[arg(long, default_value = "queries.txt")]
    queries: PathBuf,

    /// Path to write the scraped results to
    #[arg(long, default_value = "results.json")]
    output: PathBuf,

    /// Path to a scraper configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Name of the search engine to scrape
    #[arg(long, default_value = DEFAULT_ENGINE)]
    engine: String,

    /// Maximum number of results kept per query
    #[arg(long)]
    max_results: Option<usize>,
}

#[derive(Args, Debug)]
struct CompareArgs {
    /// Path to the reference results
    #[arg(long, default_value = "reference.json")]
    reference: PathBuf,

    /// Path to write the CSV report to
    #[arg(long, default_value = "results.csv")]
    report: PathBuf,

    /// Query list fixing the report row order, instead of sorting by query
    #[arg(long)]
    query_order: Option<PathBuf>,

    /// Label report rows with the query text instead of "Query N"
    #[arg(long, default_value = "false")]
    label_queries: bool,

    /// How to correlate result lists of different lengths
    #[arg(long, value_enum, default_value_t = LengthPolicy::Align)]
    length_policy: LengthPolicy,
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Scrape(args) => {
            scrape(&args)?;
        }
        Command::Compare { candidate, compare: args } => {
            compare(&result_set::load(&candidate)?, &args)?;
        }
        Command::Run {
            scrape: scrape_args,
            compare: compare_args,
        } => {
            let results = scrape(&scrape_args)?;
            compare(&results, &compare_args)?;
        }
    }

    Ok(())
}

fn scrape(args: &ScrapeArgs) -> Result<ResultSet> {
    let mut config = match &args.config {
        Some(path) => ScrapeConfig::from_path(path)?,
        None => ScrapeConfig::default(),
    };
    if let Some(max_results) = args.max_results {
        config.max_results = max_results;
    }

    let engine = config.engine(&args.engine)?;
    let queries = read_queries(&args.queries)?;

    let results = Scraper::new(&config)?.scrape_queries(engine, &queries)?;
    result_set::save(&args.output, &results)?;

    println!("Results saved to {}", args.output.display());

    Ok(results)
}

fn compare(candidates: &ResultSet, args: &CompareArgs) -> Result<()> {
    let reference = result_set::load(&args.reference)?;
    let comparator = QueryComparator::new(args.length_policy);

    let comparison = match &args.query_order {
        Some(path) => comparator.compare_ordered(&read_queries(path)?, candidates, &reference),
        None => comparator.compare(candidates, &reference),
    };

    for diagnostic in &comparison.diagnostics {
        warn!("{diagnostic}");
    }

    let compared = comparison.metrics.len();
    let report = aggregate(comparison.metrics)?;

    let labels = if args.label_queries {
        RowLabels::Query
    } else {
        RowLabels::Sequential
    };
    report.save_csv(&args.report, labels)?;

    println!(
        "Comparison complete. {compared} queries compared, {} skipped. Results saved to {}.",
        comparison.diagnostics.len(),
        args.report.display()
    );
    println!(
        "Averages: {:.2} overlapping results, {:.2}% overlap, {:.2} Spearman correlation",
        report.averages.overlap_count,
        report.averages.overlap_percent,
        report.averages.correlation
    );

    Ok(())
}
