// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use nexus_tools::ops;

use crate::{common_args::ConfigArgs, error::NexusDeployResult};

#[derive(Debug, clap::Args)]
pub struct Args {
    #[command(flatten)]
    config: ConfigArgs,
}

pub fn exec(args: Args) -> NexusDeployResult {
    let config = args.config.load()?;
    ops::compile(&config)?;
    Ok(())
}
