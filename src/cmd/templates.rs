use crate::reports;
use clap::Args;
use hiveforge::config::Config;
use hiveforge::template::Os;
use std::sync::Arc;

#[derive(Args, Debug, Clone)]
pub struct TemplatesArgs {
    /// Template set to show (defaults to the configured OS).
    #[arg(long)]
    pub os: Option<Os>,
}

pub fn run(args: TemplatesArgs, config: Arc<Config>) {
    let os = args.os.unwrap_or(config.os);
    let library = config.template_library();
    reports::print_template_table(library.get(os));
}
