// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Signer resolution from a network profile's accounts.

use alloy::{
    network::EthereumWallet,
    primitives::FixedBytes,
    signers::{local::PrivateKeySigner, Signer},
};

use crate::{
    core::config::{ConfigError, NetworkConfig},
    utils::decode0x,
};

/// All signers of a network, in declaration order, bound to its chain id.
pub fn signers(network: &NetworkConfig) -> Result<Vec<PrivateKeySigner>, ConfigError> {
    if network.accounts.is_empty() {
        return Err(no_accounts(network));
    }
    network
        .accounts
        .iter()
        .map(|key| parse_private_key(key, network.chain_id))
        .collect()
}

/// The first signer of a network, which is the one that deploys.
///
/// Only the first account is parsed, so a malformed extra key does not block it.
pub fn first_signer(network: &NetworkConfig) -> Result<PrivateKeySigner, ConfigError> {
    let key = network
        .accounts
        .first()
        .ok_or_else(|| no_accounts(network))?;
    parse_private_key(key, network.chain_id)
}

/// A wallet signing with the network's first account.
pub fn wallet(network: &NetworkConfig) -> Result<EthereumWallet, ConfigError> {
    Ok(EthereumWallet::new(first_signer(network)?))
}

fn no_accounts(network: &NetworkConfig) -> ConfigError {
    ConfigError::NoAccounts {
        network: network.name.clone(),
        vars: network.account_vars.join(", "),
    }
}

fn parse_private_key(key: &str, chain_id: u64) -> Result<PrivateKeySigner, ConfigError> {
    if key.trim().is_empty() {
        return Err(ConfigError::EmptyPrivateKey);
    }
    let bytes = decode0x(key).map_err(|err| ConfigError::InvalidPrivateKey(err.to_string()))?;
    if bytes.len() != 32 {
        return Err(ConfigError::InvalidPrivateKey(format!(
            "expected 32 bytes, got {}",
            bytes.len()
        )));
    }
    let signer = PrivateKeySigner::from_bytes(&FixedBytes::<32>::from_slice(&bytes))
        .map_err(|err| ConfigError::InvalidPrivateKey(err.to_string()))?;
    Ok(signer.with_chain_id(Some(chain_id)))
}

#[cfg(test)]
mod tests {
    use alloy::{network::NetworkWallet, primitives::address};

    use super::*;
    use crate::core::config::{DEFAULT_NETWORK, NEXUS_CHAIN_ID};

    // Well-known development keys.
    const KEY_0: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
    const KEY_1: &str = "59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d";

    fn network(accounts: &[&str]) -> NetworkConfig {
        NetworkConfig {
            name: DEFAULT_NETWORK.to_owned(),
            url: None,
            chain_id: NEXUS_CHAIN_ID,
            accounts: accounts.iter().map(|s| s.to_string()).collect(),
            url_var: None,
            account_vars: vec!["PRIVATE_KEY".to_owned()],
        }
    }

    #[test]
    fn first_signer_is_first_account() {
        let signer = first_signer(&network(&[KEY_0, KEY_1])).unwrap();
        assert_eq!(
            signer.address(),
            address!("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266")
        );
        assert_eq!(signer.chain_id(), Some(NEXUS_CHAIN_ID));
    }

    #[test]
    fn first_signer_ignores_later_accounts() {
        let accounts = network(&[KEY_0, "0xnothex"]);
        let signer = first_signer(&accounts).unwrap();
        assert_eq!(
            signer.address(),
            address!("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266")
        );
        assert!(matches!(
            signers(&accounts),
            Err(ConfigError::InvalidPrivateKey(_))
        ));
    }

    #[test]
    fn wallet_signs_with_first_account() {
        let wallet = wallet(&network(&[KEY_0, "0xnothex"])).unwrap();
        let default: alloy::primitives::Address =
            NetworkWallet::<alloy::network::Ethereum>::default_signer_address(&wallet);
        assert_eq!(default, address!("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266"));
    }

    #[test]
    fn missing_key_names_variable() {
        let err = first_signer(&network(&[])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "network nexus has no accounts (set PRIVATE_KEY)"
        );
    }

    #[test]
    fn malformed_keys() {
        assert!(matches!(
            first_signer(&network(&["  "])),
            Err(ConfigError::EmptyPrivateKey)
        ));
        assert!(matches!(
            first_signer(&network(&["0xnothex"])),
            Err(ConfigError::InvalidPrivateKey(_))
        ));
        assert!(matches!(
            first_signer(&network(&["0x0102"])),
            Err(ConfigError::InvalidPrivateKey(_))
        ));
    }
}
