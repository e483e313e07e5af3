// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use alloy::{
    providers::{Provider, ProviderBuilder, WalletProvider},
    transports::{RpcError, TransportErrorKind},
};

use crate::core::{
    config::{ConfigError, NetworkConfig},
    signer,
};

#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    #[error("failed to connect to {url}: {source}")]
    Connect {
        url: String,
        source: RpcError<TransportErrorKind>,
    },
    #[error("rpc error: {0}")]
    Rpc(#[from] RpcError<TransportErrorKind>),
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("chain id mismatch: network is configured for {expected} but the endpoint reports {found}")]
    ChainIdMismatch { expected: u64, found: u64 },
}

/// Connects to a network, signing with its first account.
pub async fn connect(
    network: &NetworkConfig,
) -> Result<impl Provider + WalletProvider, NetworkError> {
    let url = network.url()?;
    let wallet = signer::wallet(network)?;
    debug!(@grey, "connecting to {} at {}", network.name, url);
    let provider = ProviderBuilder::new()
        .wallet(wallet)
        .connect(url)
        .await
        .map_err(|source| NetworkError::Connect {
            url: url.to_owned(),
            source,
        })?;
    Ok(provider)
}

/// Checks the endpoint serves the chain the network is configured for.
pub async fn check_chain_id(provider: &impl Provider, expected: u64) -> Result<(), NetworkError> {
    let found = provider.get_chain_id().await?;
    if found != expected {
        return Err(NetworkError::ChainIdMismatch { expected, found });
    }
    Ok(())
}
