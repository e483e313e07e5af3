// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use alloy::primitives::Address;

use crate::{
    core::{config::ProjectConfig, signer},
    Result,
};

/// Prints and returns the signer addresses of a network, the deployer first.
pub fn accounts(config: &ProjectConfig, network: &str) -> Result<Vec<Address>> {
    let network = config.network(network)?;
    let addresses: Vec<_> = signer::signers(network)?
        .iter()
        .map(|signer| signer.address())
        .collect();
    for address in &addresses {
        greyln!("{address}");
    }
    Ok(addresses)
}
