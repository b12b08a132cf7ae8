//! Hydra CLI: publish canvas documents to a local Hydra fork.
//!
//! Usage:
//!   hydra export --host <SNAPSHOT> --name <NAME> --description <TEXT>...
//!   hydra validate --host <SNAPSHOT> --name <NAME> --description <TEXT>...
//!   hydra inspect --host <SNAPSHOT>

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use hydra_common::config::ExporterConfig;
use hydra_export_model::ExportInputs;

mod commands;

#[derive(Parser)]
#[command(
    name = "hydra",
    about = "Share canvas documents through a Hydra fork",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export the document described by a host snapshot
    Export(ExportArgs),

    /// Check inputs without writing anything
    Validate(ExportArgs),

    /// Show the components and dependencies of a host snapshot
    Inspect {
        /// Host snapshot (JSON)
        #[arg(long)]
        host: PathBuf,

        /// Only count script components
        #[arg(long)]
        scripts_only: bool,
    },
}

/// Inputs shared by `export` and `validate`.
#[derive(Args)]
struct ExportArgs {
    /// Host snapshot (JSON)
    #[arg(long)]
    host: PathBuf,

    /// Example file name
    #[arg(short, long)]
    name: String,

    /// Description paragraph (repeatable)
    #[arg(short, long, required = true)]
    description: Vec<String>,

    /// Change log line (repeatable)
    #[arg(long)]
    change_log: Vec<String>,

    /// Tag (repeatable; a single value may hold a separated list)
    #[arg(short, long)]
    tag: Vec<String>,

    /// Local fork directory
    #[arg(long)]
    target: Option<PathBuf>,

    /// Include the companion model in the archive
    #[arg(long)]
    include_model: bool,

    /// Use the canvas screenshot as the thumbnail
    #[arg(long)]
    canvas_thumbnail: bool,

    /// Additional image to publish (repeatable)
    #[arg(long)]
    image: Vec<PathBuf>,
}

impl ExportArgs {
    fn inputs(&self) -> ExportInputs {
        ExportInputs {
            file_name: self.name.clone(),
            description: self.description.clone(),
            change_log: self.change_log.clone(),
            tags: self.tag.clone(),
            target_folder: self.target.clone(),
            include_source_model: self.include_model,
            use_canvas_for_thumbnail: self.canvas_thumbnail,
            additional_images: self.image.clone(),
            export: true,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ExporterConfig::load_from(path),
        None => ExporterConfig::load(),
    };

    let mut logging = config.logging.clone();
    if cli.verbose {
        logging.level = "debug".to_string();
    }
    hydra_common::logging::init_logging(&logging);
    tracing::debug!(
        config = %cli
            .config
            .clone()
            .unwrap_or_else(hydra_common::config::config_file_path)
            .display(),
        "Loaded configuration"
    );

    match cli.command {
        Commands::Export(args) => commands::export::run(config, &args.host, args.inputs()),
        Commands::Validate(args) => commands::validate::run(config, &args.host, args.inputs()),
        Commands::Inspect { host, scripts_only } => commands::inspect::run(&host, scripts_only),
    }
}
