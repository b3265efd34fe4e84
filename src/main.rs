use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tokio::runtime::Runtime;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use codesweep::cli::commands::scan::{OutputFormat, ScanOptions};

#[derive(Parser)]
#[command(name = "codesweep")]
#[command(
    version,
    about = "Finds redemption codes on public tracker pages and estimates their status"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long)]
    verbose: bool,

    #[arg(long, short)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan tracker pages for codes
    Scan {
        #[arg(long, short, help = "Extra tracker URL (repeatable)")]
        url: Vec<String>,

        #[arg(long, help = "Scan only the URLs given with --url")]
        no_defaults: bool,

        #[arg(long, short, help = "Concurrent workers (2-20)")]
        concurrency: Option<usize>,

        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,

        #[arg(long, short, help = "Write json/csv output to a file")]
        output: Option<PathBuf>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration (merged from all sources)
    Show {
        #[arg(long, help = "Print as JSON")]
        json: bool,
    },
    /// Show configuration file paths
    Path,
}

fn main() -> ExitCode {
    match run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError:\x1b[0m {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Scan {
            url,
            no_defaults,
            concurrency,
            format,
            output,
        } => {
            let rt = Runtime::new()?;
            rt.block_on(codesweep::cli::commands::scan::run(ScanOptions {
                urls: url,
                no_defaults,
                concurrency,
                format,
                output,
            }))?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Show { json } => {
                codesweep::cli::commands::config::show(json)?;
            }
            ConfigAction::Path => {
                codesweep::cli::commands::config::path()?;
            }
        },
    }

    Ok(())
}
