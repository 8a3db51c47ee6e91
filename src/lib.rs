//! imagenet-fewshot: ImageNet folder-layout reader with few-shot subsampling.
//!
//! Reads `<root>/imagenet/classnames.txt` and the `train`/`val` image folders
//! into labelled records, then reduces the training split to K items per
//! class. Validation items double as the test set.
//!
//! # Modules
//!
//! - [`imagenet`]: class-name loader, split reader and dataset assembly
//! - [`fewshot`]: per-label subsampling
//! - [`data`]: the [`data::Datum`] record and [`data::DatasetBase`] container
//! - [`listing`]: non-hidden directory listing
//! - [`config`]: YAML configuration
//! - [`inspect`]: dataset summary report
//! - [`export`]: CSV / JSON Lines item listings
//! - [`error`]: error types
//!
//! # Example
//!
//! ```no_run
//! use imagenet_fewshot::config::DatasetConfig;
//! use imagenet_fewshot::imagenet::ImageNet;
//!
//! let config = DatasetConfig {
//!     root: "~/data".into(),
//!     num_shots: 16,
//!     seed: Some(1),
//!     ..Default::default()
//! };
//! let dataset = ImageNet::new(&config)?;
//! assert_eq!(dataset.val(), dataset.test());
//! # Ok::<(), imagenet_fewshot::DatasetError>(())
//! ```

pub mod config;
pub mod data;
pub mod error;
pub mod export;
pub mod fewshot;
pub mod imagenet;
pub mod inspect;
pub mod listing;

use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

pub use error::DatasetError;

use config::DatasetConfig;
use data::DatasetBase;
use export::ItemFormat;
use imagenet::ImageNet;

/// The imagenet-fewshot CLI application.
#[derive(Parser)]
#[command(name = "imagenet-fewshot")]
#[command(version, about)]
#[command(propagate_version = true)]
struct Cli {
    /// Log progress to stderr (overrides RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Build the dataset and print split and class statistics.
    Inspect(InspectArgs),
    /// Build the dataset and print the items of one split.
    List(ListArgs),
}

/// Dataset selection shared by all subcommands.
#[derive(clap::Args)]
struct DatasetArgs {
    /// YAML config file; flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory containing the `imagenet/` folder.
    #[arg(long, env = "IMAGENET_FEWSHOT_ROOT")]
    root: Option<PathBuf>,

    /// Training items per class (0 keeps the full split).
    #[arg(long)]
    shots: Option<usize>,

    /// Seed for few-shot sampling.
    #[arg(long)]
    seed: Option<u64>,

    /// Sample with replacement for classes smaller than --shots.
    #[arg(long)]
    repeat: bool,
}

/// Arguments for the inspect subcommand.
#[derive(clap::Args)]
struct InspectArgs {
    #[command(flatten)]
    dataset: DatasetArgs,

    /// Output format for the report ('text' or 'json').
    #[arg(long, default_value = "text")]
    output: String,

    /// Number of classes to show in the histogram.
    #[arg(long, default_value_t = 10)]
    top: usize,
}

/// Arguments for the list subcommand.
#[derive(clap::Args)]
struct ListArgs {
    #[command(flatten)]
    dataset: DatasetArgs,

    /// Split to print.
    #[arg(long, value_enum, default_value_t = SplitArg::Train)]
    split: SplitArg,

    /// Item format ('csv' or 'jsonl').
    #[arg(long, default_value = "csv")]
    format: String,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum SplitArg {
    Train,
    Val,
    Test,
}

/// Run the imagenet-fewshot CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), DatasetError> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Some(Commands::Inspect(args)) => run_inspect(args),
        Some(Commands::List(args)) => run_list(args),
        None => {
            println!("imagenet-fewshot {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("ImageNet folder-layout reader with few-shot subsampling.");
            println!();
            println!("Run 'imagenet-fewshot --help' for usage information.");
            Ok(())
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // A subscriber may already be set when embedded; keep the existing one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Merge the config file (if any) with command-line overrides.
fn resolve_config(args: &DatasetArgs) -> Result<DatasetConfig, DatasetError> {
    let mut config = match &args.config {
        Some(path) => DatasetConfig::from_yaml_file(path)?,
        None => DatasetConfig::default(),
    };

    if let Some(root) = &args.root {
        config.root = root.clone();
    }
    if let Some(shots) = args.shots {
        config.num_shots = shots;
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if args.repeat {
        config.repeat = true;
    }

    Ok(config)
}

fn build_dataset(args: &DatasetArgs) -> Result<DatasetBase, DatasetError> {
    let config = resolve_config(args)?;
    ImageNet::new(&config)
}

/// Execute the inspect subcommand.
fn run_inspect(args: InspectArgs) -> Result<(), DatasetError> {
    if !matches!(args.output.as_str(), "text" | "json") {
        return Err(DatasetError::UnsupportedFormat(format!(
            "'{}' (supported: text, json)",
            args.output
        )));
    }

    let dataset = build_dataset(&args.dataset)?;
    let opts = inspect::InspectOptions {
        top_classes: args.top,
        ..Default::default()
    };
    let report = inspect::inspect_dataset(&dataset, &opts);

    if args.output == "json" {
        let json = serde_json::to_string_pretty(&report)
            .map_err(|source| DatasetError::ReportJson { source })?;
        println!("{}", json);
    } else {
        print!("{}", report);
    }

    Ok(())
}

/// Execute the list subcommand.
fn run_list(args: ListArgs) -> Result<(), DatasetError> {
    let format = ItemFormat::from_name(&args.format)?;
    let dataset = build_dataset(&args.dataset)?;

    let items = match args.split {
        SplitArg::Train => dataset.train_x(),
        SplitArg::Val => dataset.val(),
        SplitArg::Test => dataset.test(),
    };

    let stdout = io::stdout();
    export::write_items(stdout.lock(), items, format)
}
