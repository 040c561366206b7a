use super::HiveArgs;
use clap::Args;
use hiveforge::config::Config;
use hiveforge::error::HiveResult;
use hiveforge::options::{AlarmOptions, OptionSet, PortOption, ServerFlag, TextOption, WorkerFlag};
use hiveforge::template::Os;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Args, Debug, Clone)]
pub struct ScriptArgs {
    /// Template set (defaults to the configured OS).
    #[arg(long)]
    pub os: Option<Os>,

    /// Also launch the map server.
    #[arg(long, default_value_t = false)]
    pub server: bool,

    /// Also launch the alarm service.
    #[arg(long, default_value_t = false)]
    pub alarm: bool,

    /// Server flags, e.g. no-pokemon,search-control.
    #[arg(long = "server-flag", value_delimiter = ',')]
    pub server_flags: Vec<ServerFlag>,

    /// Worker flags, e.g. speed-scan,encounter.
    #[arg(long = "worker-flag", value_delimiter = ',')]
    pub worker_flags: Vec<WorkerFlag>,

    /// Worker status name; may reference {index}.
    #[arg(long)]
    pub status_name: Option<String>,

    #[arg(long)]
    pub webhook: Option<String>,

    #[arg(long)]
    pub alarm_config: Option<String>,

    #[arg(long)]
    pub alarm_host: Option<String>,

    #[arg(long)]
    pub alarm_port: Option<u16>,

    #[arg(long)]
    pub rocketmap_directory: Option<String>,

    #[arg(long)]
    pub account_directory: Option<String>,

    /// Seconds to wait between worker launches.
    #[arg(short = 'd', long)]
    pub delay: Option<u64>,

    #[arg(short = 'w', long, default_value_t = 0)]
    pub accounts_per_hive: u32,
}

fn text(value: &Option<String>) -> TextOption {
    value.as_deref().map(TextOption::on).unwrap_or_default()
}

impl ScriptArgs {
    pub fn to_options(&self, config: &Config) -> OptionSet {
        let mut options = OptionSet {
            os: self.os.unwrap_or(config.os),
            server_enabled: self.server,
            alarm_enabled: self.alarm,
            status_name: text(&self.status_name),
            webhook: text(&self.webhook),
            alarm: AlarmOptions {
                config: text(&self.alarm_config),
                host: text(&self.alarm_host),
                port: PortOption {
                    enabled: self.alarm_port.is_some(),
                    value: self.alarm_port.unwrap_or(0),
                },
            },
            rocketmap_directory: self
                .rocketmap_directory
                .clone()
                .unwrap_or_else(|| config.rocketmap_directory.clone()),
            account_directory: self
                .account_directory
                .clone()
                .unwrap_or_else(|| config.account_directory.clone()),
            script_delay: self.delay.unwrap_or(config.script_delay),
            accounts_per_hive: self.accounts_per_hive,
            ..OptionSet::default()
        };

        for &flag in &self.server_flags {
            options.set_server_flag(flag, true);
        }
        for &flag in &self.worker_flags {
            options.set_worker_flag(flag, true);
        }
        options
    }
}

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub hives: HiveArgs,

    #[command(flatten)]
    pub script: ScriptArgs,

    /// Render only the first worker.
    #[arg(long, default_value_t = false)]
    pub preview: bool,

    /// Write to FILE instead of stdout.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Write to the template set's default file name.
    #[arg(long, default_value_t = false, conflicts_with = "output")]
    pub write: bool,
}

pub fn run(args: GenerateArgs, config: Arc<Config>) -> HiveResult<()> {
    let options = args.script.to_options(&config);
    let session = args.hives.build_session(config)?;

    if !session.download_enabled(true) {
        warn!("⚠️  No hives given; nothing to generate.");
        return Ok(());
    }

    let script = session.generate(&options, args.preview);

    let target = match (args.output, args.write) {
        (Some(path), _) => Some(path),
        (None, true) => Some(PathBuf::from(
            session.templates(options.os).filename.value(),
        )),
        (None, false) => None,
    };

    match target {
        Some(path) => {
            fs::write(&path, &script)?;
            info!("💾 Wrote {} script to {}", options.os, path.display());
        }
        None => print!("{}", script),
    }
    Ok(())
}
