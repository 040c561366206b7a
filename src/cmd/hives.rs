use super::HiveArgs;
use crate::reports;
use clap::Args;
use hiveforge::config::Config;
use hiveforge::error::HiveResult;
use std::sync::Arc;

#[derive(Args, Debug, Clone)]
pub struct HivesArgs {
    #[command(flatten)]
    pub hives: HiveArgs,
}

pub fn run(args: HivesArgs, config: Arc<Config>) -> HiveResult<()> {
    let session = args.hives.build_session(config)?;
    reports::print_hive_table(&session.hives());
    Ok(())
}
