use clap::{Parser, Subcommand};
use hiveforge::config::Config;
use std::process;
use std::sync::Arc;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file overriding the built-in defaults and templates.
    #[arg(global = true, short, long)]
    config: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build the launch script for the given hives.
    Generate(cmd::generate::GenerateArgs),
    /// Print hive centers, one LAT,LNG per line.
    Coords(cmd::coords::CoordsArgs),
    /// List hives with their derived geometry.
    Hives(cmd::hives::HivesArgs),
    /// Show a template set.
    Templates(cmd::templates::TemplatesArgs),
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => {
            info!("📂 Loading Config: {}", path);
            Config::load_from_file(path).unwrap_or_else(|e| {
                error!("❌ {}", e);
                process::exit(1);
            })
        }
        None => Config::default(),
    };
    let config = Arc::new(config);

    let result = match cli.command {
        Commands::Generate(args) => cmd::generate::run(args, config),
        Commands::Coords(args) => cmd::coords::run(args, config),
        Commands::Hives(args) => cmd::hives::run(args, config),
        Commands::Templates(args) => {
            cmd::templates::run(args, config);
            Ok(())
        }
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}
