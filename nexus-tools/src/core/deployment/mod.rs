// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Contract deployment: factory, pending deployment, and confirmed contract.

use std::time::Duration;

use alloy::{
    primitives::{Address, TxHash, U256},
    providers::PendingTransactionError,
};

use crate::utils::color::{Color, DebugColor};

pub use factory::ContractFactory;
pub use request::{DeploymentRequest, Fees, GasEstimate, PendingDeployment};

mod factory;
mod request;

#[derive(Clone, Debug)]
pub struct DeploymentConfig {
    pub max_fee_per_gas_wei: Option<u128>,
    /// Blocks to wait for after inclusion.
    pub confirmations: u64,
    /// How long to wait for the receipt. `None` waits forever.
    pub timeout: Option<Duration>,
}

impl Default for DeploymentConfig {
    fn default() -> Self {
        Self {
            max_fee_per_gas_wei: None,
            confirmations: 1,
            timeout: None,
        }
    }
}

/// A contract whose creation transaction has been confirmed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeployedContract {
    pub name: String,
    pub address: Address,
    pub tx_hash: TxHash,
    pub gas_used: u64,
    pub block_number: Option<u64>,
}

impl DeployedContract {
    pub fn address(&self) -> Address {
        self.address
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DeploymentError {
    #[error("rpc error: {0}")]
    Rpc(#[from] alloy::transports::RpcError<alloy::transports::TransportErrorKind>),
    #[error("deploy tx failed to complete: {0}")]
    Confirmation(#[from] PendingTransactionError),

    #[error("invalid constructor: {0}")]
    InvalidConstructor(String),
    #[error(
        "not enough funds in account {} to deploy\nbalance {} < {}",
        .from_address.red(),
        .balance.red(),
        format!("{} wei", .cost).red(),
    )]
    NotEnoughFunds {
        from_address: Address,
        balance: U256,
        cost: U256,
    },
    #[error("deploy tx reverted {}", .tx_hash.debug_red())]
    Reverted { tx_hash: TxHash },
    #[error("missing contract address in receipt of {}", .tx_hash.debug_red())]
    NoContractAddress { tx_hash: TxHash },
}
