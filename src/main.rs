use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod config;
mod log;
mod model;
mod pipeline;
mod render;
mod store;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "bfs-bench")]
#[command(about = "Aggregate and plot BFS benchmark logs", long_about = None)]
struct Cli {
    /// More log output (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors.
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse one benchmark log and append its records to the dataset.
    Ingest {
        #[arg(long)]
        log: PathBuf,

        /// Must be non-empty: an empty CSV field reads back as missing.
        #[arg(long, value_parser = clap::builder::NonEmptyStringValueParser::new())]
        problem_type: String,

        #[arg(long)]
        goal_check_delay: u64,

        #[arg(long, default_value = config::DEFAULT_DATA_PATH)]
        data: PathBuf,
    },

    /// Render execution-time boxplots from the dataset into an HTML report.
    Plot {
        #[arg(long, default_value = config::DEFAULT_DATA_PATH)]
        data: PathBuf,

        /// Only plot rows with this problem type.
        #[arg(long)]
        problem_type: Option<String>,

        /// Only plot rows with this goal check delay.
        #[arg(long)]
        goal_check_delay: Option<u64>,

        #[arg(short = 'o', long)]
        out: PathBuf,

        /// Also write each figure as an SVG file into this directory.
        #[arg(long)]
        svg_dir: Option<PathBuf>,
    },
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = match verbose {
        0 if quiet => "error",
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match cli.cmd {
        Commands::Ingest {
            log,
            problem_type,
            goal_check_delay,
            data,
        } => {
            let config = config::IngestConfig {
                log_path: log,
                data_path: data,
                metadata: log::RunMetadata {
                    problem_type,
                    goal_check_delay,
                },
            };
            let summary = pipeline::ingest::run(&config)?;
            println!(
                "Processed {} results from {}",
                summary.parsed,
                config.log_path.display()
            );
            println!(
                "Problem type: {}, Goal check delay: {}",
                config.metadata.problem_type, config.metadata.goal_check_delay
            );
            match summary.prior_rows {
                Some(prior) => println!(
                    "Appended to {} existing rows, wrote {} rows to {}",
                    prior,
                    summary.total_rows,
                    config.data_path.display()
                ),
                None => println!(
                    "Created {} with {} rows",
                    config.data_path.display(),
                    summary.total_rows
                ),
            }
        }
        Commands::Plot {
            data,
            problem_type,
            goal_check_delay,
            out,
            svg_dir,
        } => {
            let config = config::PlotConfig {
                data_path: data,
                out_path: out,
                svg_dir,
                problem_type,
                goal_check_delay,
            };
            let summary = pipeline::plot::run(&config)?;
            println!(
                "Wrote {} ({} figures, {} algorithms, {} rows)",
                config.out_path.display(),
                summary.figures,
                summary.algorithms,
                summary.rows
            );
        }
    }

    Ok(())
}
