use super::HiveArgs;
use clap::Args;
use hiveforge::config::Config;
use hiveforge::error::HiveResult;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct CoordsArgs {
    #[command(flatten)]
    pub hives: HiveArgs,

    /// Write to FILE instead of stdout.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

pub fn run(args: CoordsArgs, config: Arc<Config>) -> HiveResult<()> {
    let session = args.hives.build_session(config)?;
    let text = session.coordinates();

    match args.output {
        Some(path) => {
            fs::write(&path, &text)?;
            info!("💾 Wrote {} coordinates to {}", session.hive_count(), path.display());
        }
        None => println!("{}", text),
    }
    Ok(())
}
