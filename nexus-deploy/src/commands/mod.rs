// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use crate::error::NexusDeployResult;

mod accounts;
mod compile;
mod config;
mod deploy;

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Print the signer addresses of a network
    Accounts(accounts::Args),
    /// Compile the project's Solidity sources
    #[clap(visible_alias = "c")]
    Compile(compile::Args),
    /// Print the resolved project configuration, without secrets
    Config(config::Args),
    /// Deploy a contract with the first signer as its initial owner
    #[clap(visible_alias = "d")]
    Deploy(deploy::Args),
}

pub async fn exec(cmd: Command) -> NexusDeployResult {
    match cmd {
        Command::Accounts(args) => accounts::exec(args),
        Command::Compile(args) => compile::exec(args),
        Command::Config(args) => config::exec(args),
        Command::Deploy(args) => deploy::exec(args).await,
    }
}
