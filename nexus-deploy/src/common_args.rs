// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{env, fs, path::PathBuf, time::Duration};

use nexus_tools::core::{
    config::{ConfigError, ProjectConfig, DEFAULT_NETWORK},
    deployment::DeploymentConfig,
};

use crate::utils::convert_gwei_to_wei;

#[derive(Debug, clap::Args)]
pub struct ConfigArgs {
    /// Path to a Nexus.toml manifest. Defaults to ./Nexus.toml when present.
    #[arg(long)]
    config: Option<PathBuf>,
}

impl ConfigArgs {
    /// Builds the project configuration from the manifest and the process environment.
    pub fn load(&self) -> nexus_tools::Result<ProjectConfig> {
        let env = |name: &str| env::var(name).ok();
        let config = match &self.config {
            Some(path) => ProjectConfig::load(path, env)?,
            None => {
                let root = env::current_dir().map_err(ConfigError::from)?;
                ProjectConfig::discover(root, env)?
            }
        };
        Ok(config)
    }
}

#[derive(Debug, clap::Args)]
pub struct NetworkArgs {
    /// Network profile to use
    #[arg(long, env = "NEXUS_NETWORK", default_value = DEFAULT_NETWORK)]
    pub network: String,
    /// RPC endpoint, overriding the one configured for the network
    #[arg(long)]
    rpc_url: Option<String>,
    /// Private key as a hex string. Warning: this exposes your key to shell history
    #[arg(long)]
    private_key: Option<String>,
    /// File path to a text file containing a hex-encoded private key
    #[arg(long, conflicts_with = "private_key")]
    private_key_path: Option<PathBuf>,
}

impl NetworkArgs {
    /// Applies command-line overrides to the selected network.
    pub fn apply(&self, config: &mut ProjectConfig) -> nexus_tools::Result<()> {
        let private_key = match &self.private_key_path {
            Some(path) => Some(fs::read_to_string(path).map_err(|source| {
                ConfigError::KeyFile {
                    path: path.clone(),
                    source,
                }
            })?),
            None => self.private_key.clone(),
        };
        config.override_network(&self.network, self.rpc_url.clone(), private_key)?;
        Ok(())
    }
}

#[derive(Debug, clap::Args)]
pub struct TxArgs {
    /// Optional max fee per gas in gwei units.
    #[arg(long)]
    max_fee_per_gas_gwei: Option<String>,
    /// Number of confirmations to wait for.
    #[arg(long, default_value_t = 1)]
    confirmations: u64,
    /// Seconds to wait for the deployment to be confirmed. Waits forever if not set.
    #[arg(long)]
    timeout: Option<u64>,
}

impl TxArgs {
    pub fn config(&self) -> eyre::Result<DeploymentConfig> {
        Ok(DeploymentConfig {
            max_fee_per_gas_wei: self
                .max_fee_per_gas_gwei
                .as_deref()
                .map(convert_gwei_to_wei)
                .transpose()?,
            confirmations: self.confirmations,
            timeout: self.timeout.map(Duration::from_secs),
        })
    }
}
