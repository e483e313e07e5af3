// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

#![cfg(feature = "integration-tests")]

use std::{collections::HashMap, path::PathBuf};

use alloy::{
    primitives::Address,
    providers::Provider,
    rpc::types::TransactionRequest,
    signers::local::PrivateKeySigner,
    sol,
    sol_types::SolCall,
};
use eyre::Result;
use nexus_tools::{
    core::config::ProjectConfig,
    devnet::{Node, DEVNET_PRIVATE_KEY},
    ops::{self, DeployOptions},
    ErrorKind,
};

sol! {
    function owner() external view returns (address);
}

fn config(rpc: &str, chain_id: Option<u64>) -> ProjectConfig {
    let vars = HashMap::from([
        ("RPC_URL".to_owned(), rpc.to_owned()),
        ("PRIVATE_KEY".to_owned(), DEVNET_PRIVATE_KEY.to_owned()),
    ]);
    let mut config = ProjectConfig::from_env(move |name| vars.get(name).cloned());
    if let Some(chain_id) = chain_id {
        for network in config.networks.values_mut() {
            network.chain_id = chain_id;
        }
    }
    config
}

fn options() -> DeployOptions {
    DeployOptions {
        contract: "Owned".to_owned(),
        artifact: Some(PathBuf::from(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/tests/fixtures/Owned.json"
        ))),
        ..Default::default()
    }
}

async fn owner_of(provider: &impl Provider, contract: Address) -> Result<Address> {
    let tx = TransactionRequest::default()
        .to(contract)
        .input(ownerCall {}.abi_encode().into());
    let out = provider.call(tx).await?;
    Ok(ownerCall::abi_decode_returns(&out)?)
}

#[tokio::test]
async fn deploys_with_deployer_as_owner() -> Result<()> {
    let devnode = Node::new().await?;
    let config = config(devnode.rpc(), None);

    let first = ops::deploy(&config, &options()).await?;
    let second = ops::deploy(&config, &options()).await?;
    assert_ne!(first.address, second.address);
    assert_eq!(first.name, "Owned");

    let deployer = DEVNET_PRIVATE_KEY.parse::<PrivateKeySigner>()?.address();
    let provider = devnode.create_provider().await?;
    assert!(!provider.get_code_at(first.address).await?.is_empty());
    assert_eq!(owner_of(&provider, first.address).await?, deployer);
    assert_eq!(owner_of(&provider, second.address).await?, deployer);
    Ok(())
}

#[tokio::test]
async fn estimate_does_not_deploy() -> Result<()> {
    let devnode = Node::new().await?;
    let config = config(devnode.rpc(), None);
    let deployer = DEVNET_PRIVATE_KEY.parse::<PrivateKeySigner>()?.address();
    let provider = devnode.create_provider().await?;

    ops::estimate_gas(&config, &options()).await?;
    assert_eq!(provider.get_transaction_count(deployer).await?, 0);
    Ok(())
}

#[tokio::test]
async fn wrong_chain_is_rejected() -> Result<()> {
    let devnode = Node::new().await?;
    let config = config(devnode.rpc(), Some(1));
    let err = ops::deploy(&config, &options()).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Network);
    Ok(())
}
