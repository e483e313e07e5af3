// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::path::PathBuf;

use nexus_tools::ops::{self, DeployOptions};

use crate::{
    common_args::{ConfigArgs, NetworkArgs, TxArgs},
    error::NexusDeployResult,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Name of the contract to deploy.
    #[arg(long, default_value = ops::DEFAULT_CONTRACT)]
    contract: String,
    /// Deploy from this artifact file instead of compiling the project.
    #[arg(long, conflicts_with = "no_compile")]
    artifact: Option<PathBuf>,
    /// Use the artifact already in the artifacts directory instead of compiling.
    #[arg(long)]
    no_compile: bool,
    /// Only perform gas estimation.
    #[arg(long)]
    estimate_gas: bool,

    #[command(flatten)]
    config: ConfigArgs,
    #[command(flatten)]
    network: NetworkArgs,
    #[command(flatten)]
    tx: TxArgs,
}

pub async fn exec(args: Args) -> NexusDeployResult {
    let mut config = args.config.load()?;
    args.network.apply(&mut config)?;
    let options = DeployOptions {
        network: args.network.network,
        contract: args.contract,
        artifact: args.artifact,
        no_compile: args.no_compile,
        deployment: args.tx.config()?,
    };
    if args.estimate_gas {
        ops::estimate_gas(&config, &options).await?;
    } else {
        ops::deploy(&config, &options).await?;
    }
    Ok(())
}
