use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use memsearch::output;
use memsearch::utils::{load_corpus, AppConfig};
use memsearch::{SearchMode, SearchRuntime};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "memsearch")]
#[command(about = "In-memory text search over JSON corpora")]
struct Cli {
    /// Config file (defaults to the app config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search a corpus
    Search {
        /// JSON object mapping document ids to text
        #[arg(short, long)]
        corpus: PathBuf,

        /// Maximum number of results
        #[arg(short = 'n', long, default_value_t = 10)]
        limit: usize,

        /// Look candidates up through the index instead of scanning
        #[arg(long)]
        cached: bool,

        /// Print results as JSON
        #[arg(long)]
        json: bool,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,

        /// Search query
        #[arg(required = true, trailing_var_arg = true)]
        query: Vec<String>,
    },
    /// Build the index for a corpus and show its statistics
    Stats {
        /// JSON object mapping document ids to text
        #[arg(short, long)]
        corpus: PathBuf,
    },
    /// Print the effective configuration
    Config,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };

    match cli.command {
        Commands::Search {
            corpus,
            limit,
            cached,
            json,
            no_color,
            query,
        } => {
            let corpus = load_corpus(&corpus)?;
            let runtime = SearchRuntime::with_config(&config);
            let query = query.join(" ");

            let results = runtime.search(&corpus, &query, limit, SearchMode::from_cached(cached));
            if json {
                output::print_json(&results).context("Failed to write results")?;
            } else {
                output::print_results(&results, !no_color).context("Failed to write results")?;
            }
        }
        Commands::Stats { corpus } => {
            let corpus = load_corpus(&corpus)?;
            let runtime = SearchRuntime::with_config(&config);
            println!("{}", runtime.index_corpus(&corpus));
        }
        Commands::Config => {
            let rendered =
                serde_json::to_string_pretty(&config).context("Failed to serialize config")?;
            println!("{rendered}");
        }
    }

    Ok(())
}
