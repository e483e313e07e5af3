// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Contract deployment.
//!
//! Deploys one contract from the network's first account, passing that account's address as the
//! only constructor argument (the contract's initial owner).

use std::path::PathBuf;

use alloy::{
    dyn_abi::DynSolValue,
    primitives::{utils::format_units, Address},
};

use crate::{
    core::{
        compile::{self, Artifact, Artifacts},
        config::{ProjectConfig, DEFAULT_NETWORK},
        deployment::{ContractFactory, DeployedContract, DeploymentConfig, DeploymentRequest},
        network, signer,
    },
    utils::{color::DebugColor, format_cost},
    Result,
};

pub const DEFAULT_CONTRACT: &str = "NexusNameService";

#[derive(Clone, Debug)]
pub struct DeployOptions {
    pub network: String,
    pub contract: String,
    /// Use this artifact instead of compiling the project.
    pub artifact: Option<PathBuf>,
    /// Skip compilation and read the contract from the artifacts directory.
    pub no_compile: bool,
    pub deployment: DeploymentConfig,
}

impl Default for DeployOptions {
    fn default() -> Self {
        Self {
            network: DEFAULT_NETWORK.to_owned(),
            contract: DEFAULT_CONTRACT.to_owned(),
            artifact: None,
            no_compile: false,
            deployment: DeploymentConfig::default(),
        }
    }
}

/// Deploys the contract and waits for it to be confirmed.
pub async fn deploy(config: &ProjectConfig, options: &DeployOptions) -> Result<DeployedContract> {
    let network = config.network(&options.network)?;
    let deployer = signer::first_signer(network)?.address();
    greyln!("Deploying contract with account: {deployer}");

    let provider = network::connect(network).await?;
    network::check_chain_id(&provider, network.chain_id).await?;

    let factory = contract_factory(config, options)?;
    let pending = deployment_request(&factory, deployer, &options.deployment)?
        .send(&provider)
        .await?;
    debug!(@grey, "waiting for {} to be confirmed", pending.tx_hash().debug_lavender());
    let deployed = pending.wait_for_deployment().await?;

    mintln!("✅ {} deployed at: {}", deployed.name, deployed.address());
    debug!(@grey, "deployment tx hash: {}", deployed.tx_hash.debug_lavender());
    Ok(deployed)
}

/// Estimates the cost of [`deploy`] without sending anything.
pub async fn estimate_gas(config: &ProjectConfig, options: &DeployOptions) -> Result<()> {
    let network = config.network(&options.network)?;
    let deployer = signer::first_signer(network)?.address();

    let provider = network::connect(network).await?;
    network::check_chain_id(&provider, network.chain_id).await?;

    let factory = contract_factory(config, options)?;
    let estimate = deployment_request(&factory, deployer, &options.deployment)?
        .estimate_gas(&provider)
        .await?;

    greyln!("estimates");
    greyln!("deployment tx gas: {}", estimate.gas.debug_lavender());
    greyln!(
        "max gas price: {} gwei",
        format_units(estimate.fees.max_gas_price(), "gwei")
            .unwrap_or_default()
            .lavender()
    );
    greyln!("deployment tx total cost: {}", format_cost(estimate.cost()));
    Ok(())
}

fn contract_factory(config: &ProjectConfig, options: &DeployOptions) -> Result<ContractFactory> {
    let artifact = match &options.artifact {
        Some(path) => Artifact::load(path)?,
        None if options.no_compile => Artifacts::new(&config.paths.artifacts).find(&options.contract)?,
        None => compile::select(compile::compile(config)?, &options.contract)?,
    };
    Ok(ContractFactory::new(artifact))
}

fn deployment_request(
    factory: &ContractFactory,
    deployer: Address,
    config: &DeploymentConfig,
) -> Result<DeploymentRequest> {
    let initial_owner = DynSolValue::Address(deployer);
    Ok(factory.deploy(deployer, &[initial_owner], config)?)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::ErrorKind;

    fn config(vars: &[(&str, &str)]) -> ProjectConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ProjectConfig::from_env(move |name| vars.get(name).cloned())
    }

    fn fixture() -> Option<PathBuf> {
        Some(PathBuf::from(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/tests/fixtures/Owned.json"
        )))
    }

    #[tokio::test]
    async fn missing_key_is_a_config_error() {
        let config = config(&[("RPC_URL", "http://127.0.0.1:1")]);
        let options = DeployOptions {
            artifact: fixture(),
            ..Default::default()
        };
        let err = deploy(&config, &options).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
    }

    #[tokio::test]
    async fn malformed_key_is_a_config_error() {
        let config = config(&[("RPC_URL", "http://127.0.0.1:1"), ("PRIVATE_KEY", "0x1234")]);
        let options = DeployOptions {
            artifact: fixture(),
            ..Default::default()
        };
        let err = deploy(&config, &options).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
    }

    #[tokio::test]
    async fn missing_url_is_a_config_error() {
        let config = config(&[(
            "PRIVATE_KEY",
            "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80",
        )]);
        let options = DeployOptions {
            artifact: fixture(),
            ..Default::default()
        };
        let err = deploy(&config, &options).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_a_network_error() {
        let config = config(&[
            ("RPC_URL", "http://127.0.0.1:1"),
            (
                "PRIVATE_KEY",
                "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80",
            ),
        ]);
        let options = DeployOptions {
            artifact: fixture(),
            ..Default::default()
        };
        let err = deploy(&config, &options).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Network);
    }

    #[tokio::test]
    async fn extra_malformed_key_does_not_block_deployer() {
        let mut config = config(&[
            ("RPC_URL", "http://127.0.0.1:1"),
            (
                "PRIVATE_KEY",
                "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80",
            ),
        ]);
        config
            .networks
            .get_mut(DEFAULT_NETWORK)
            .unwrap()
            .accounts
            .push("0xnothex".to_owned());
        let options = DeployOptions {
            artifact: fixture(),
            ..Default::default()
        };
        let err = deploy(&config, &options).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Network);
    }

    #[test]
    fn fixture_factory_takes_the_deployer() {
        let factory = contract_factory(
            &config(&[]),
            &DeployOptions {
                artifact: fixture(),
                ..Default::default()
            },
        )
        .unwrap();
        let deployer = alloy::primitives::address!("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266");
        let req = deployment_request(&factory, deployer, &DeploymentConfig::default()).unwrap();
        assert_eq!(req.sender(), deployer);
    }
}
