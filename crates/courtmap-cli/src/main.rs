mod commands;
mod config;
mod display;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use courtmap_core::{ReportingPeriod, SortField};
use tracing_subscriber::EnvFilter;

use config::{GlobalArgs, Settings};

#[derive(Parser)]
#[command(
    name = "courtmap",
    version,
    about = "District court survey results: assessment table and per-court detail"
)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the rayon court assessment table
    Table {
        /// Saved rayon response (JSON) instead of fetching from the server
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,

        /// Sort column: number, name, overall, judge, process, staff, office, building, count
        #[arg(short, long)]
        sort: Option<SortField>,

        /// Sort descending
        #[arg(long, requires = "sort")]
        desc: bool,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Show detailed survey results for one court
    Detail {
        /// Court id as listed in the table data
        court_id: i64,

        /// Saved rayon response (JSON) to look the court up in
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,

        /// Reporting period: 2025, 2025-Q2, 2025-03 or 2025-01-01..2025-01-15
        #[arg(short, long)]
        period: Option<ReportingPeriod>,
    },
    /// Download the raw rayon assessment response
    Fetch {
        /// Write the response to a file instead of stdout
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.global.verbose);
    tracing::debug!("courtmap v{}", env!("CARGO_PKG_VERSION"));

    let settings = Settings::resolve(&cli.global)?;

    match cli.command {
        Commands::Table {
            input,
            sort,
            desc,
            output,
        } => commands::table::run(&settings, input, sort, desc, &output).await,
        Commands::Detail {
            court_id,
            input,
            period,
        } => commands::detail::run(&settings, court_id, input, period).await,
        Commands::Fetch { out } => commands::fetch::run(&settings, out).await,
    }
}
