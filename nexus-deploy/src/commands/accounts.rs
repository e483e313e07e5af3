// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use nexus_tools::ops;

use crate::{
    common_args::{ConfigArgs, NetworkArgs},
    error::NexusDeployResult,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    #[command(flatten)]
    config: ConfigArgs,
    #[command(flatten)]
    network: NetworkArgs,
}

pub fn exec(args: Args) -> NexusDeployResult {
    let mut config = args.config.load()?;
    args.network.apply(&mut config)?;
    ops::accounts(&config, &args.network.network)?;
    Ok(())
}
