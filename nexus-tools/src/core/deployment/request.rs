// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Send a contract creation transaction and wait for it to be confirmed.

use alloy::{
    network::TransactionBuilder,
    primitives::{Address, Bytes, TxHash, U256},
    providers::{PendingTransactionBuilder, Provider},
    rpc::types::TransactionRequest,
    transports::RpcError,
};

use super::{DeployedContract, DeploymentConfig, DeploymentError};
use crate::utils::color::DebugColor;

/// Creation transaction for a contract.
#[derive(Debug)]
pub struct DeploymentRequest {
    name: String,
    tx: TransactionRequest,
    config: DeploymentConfig,
}

/// Gas needed by a deployment and the fees it would be sent with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GasEstimate {
    pub gas: u64,
    pub fees: Fees,
}

impl GasEstimate {
    /// Upper bound of what the deployment can cost.
    pub fn cost(&self) -> U256 {
        U256::from(self.gas) * U256::from(self.fees.max_gas_price())
    }
}

/// Fee fields of a transaction, as the chain supports them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fees {
    Eip1559 {
        max_fee_per_gas: u128,
        max_priority_fee_per_gas: u128,
    },
    /// For chains without a base fee.
    Legacy { gas_price: u128 },
}

impl Fees {
    pub fn max_gas_price(&self) -> u128 {
        match *self {
            Fees::Eip1559 {
                max_fee_per_gas, ..
            } => max_fee_per_gas,
            Fees::Legacy { gas_price } => gas_price,
        }
    }

    /// Limits the price per gas to `cap`. The tip never exceeds the max fee.
    pub fn capped(self, cap: Option<u128>) -> Self {
        let Some(cap) = cap else {
            return self;
        };
        match self {
            Fees::Eip1559 {
                max_priority_fee_per_gas,
                ..
            } => Fees::Eip1559 {
                max_fee_per_gas: cap,
                max_priority_fee_per_gas: max_priority_fee_per_gas.min(cap),
            },
            Fees::Legacy { .. } => Fees::Legacy { gas_price: cap },
        }
    }

    fn apply(self, tx: &mut TransactionRequest) {
        match self {
            Fees::Eip1559 {
                max_fee_per_gas,
                max_priority_fee_per_gas,
            } => {
                tx.max_fee_per_gas = Some(max_fee_per_gas);
                tx.max_priority_fee_per_gas = Some(max_priority_fee_per_gas);
            }
            Fees::Legacy { gas_price } => tx.gas_price = Some(gas_price),
        }
    }
}

impl DeploymentRequest {
    pub fn new(
        name: impl Into<String>,
        sender: Address,
        code: Bytes,
        config: DeploymentConfig,
    ) -> Self {
        Self {
            name: name.into(),
            tx: TransactionRequest::default()
                .with_from(sender)
                .with_deploy_code(code),
            config,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sender(&self) -> Address {
        self.tx.from.unwrap_or_default()
    }

    pub fn is_create(&self) -> bool {
        self.tx.to.is_some_and(|to| to.is_create())
    }

    pub async fn estimate_gas(&self, provider: &impl Provider) -> Result<GasEstimate, DeploymentError> {
        let gas = provider.estimate_gas(self.tx.clone()).await?;
        let fees = self.fees(provider).await?;
        Ok(GasEstimate { gas, fees })
    }

    /// Submits the creation transaction without waiting for it.
    pub async fn send(self, provider: &impl Provider) -> Result<PendingDeployment, DeploymentError> {
        let estimate = self.estimate_gas(provider).await?;

        let sender = self.sender();
        let balance = provider.get_balance(sender).await?;
        if balance < estimate.cost() {
            return Err(DeploymentError::NotEnoughFunds {
                from_address: sender,
                balance,
                cost: estimate.cost(),
            });
        }

        let mut tx = self.tx;
        tx.gas = Some(estimate.gas);
        estimate.fees.apply(&mut tx);

        let pending = provider.send_transaction(tx).await?;
        let tx_hash = *pending.tx_hash();
        debug!(@grey, "sent deploy tx: {}", tx_hash.debug_lavender());

        Ok(PendingDeployment {
            name: self.name,
            tx_hash,
            config: self.config,
            pending,
        })
    }

    async fn fees(&self, provider: &impl Provider) -> Result<Fees, DeploymentError> {
        let fees = match provider.estimate_eip1559_fees().await {
            Ok(estimate) => Fees::Eip1559 {
                max_fee_per_gas: estimate.max_fee_per_gas,
                max_priority_fee_per_gas: estimate.max_priority_fee_per_gas,
            },
            Err(RpcError::UnsupportedFeature(_)) => Fees::Legacy {
                gas_price: provider.get_gas_price().await?,
            },
            Err(err) => return Err(err.into()),
        };
        Ok(fees.capped(self.config.max_fee_per_gas_wei))
    }
}

/// A submitted creation transaction.
pub struct PendingDeployment {
    name: String,
    tx_hash: TxHash,
    config: DeploymentConfig,
    pending: PendingTransactionBuilder<alloy::network::Ethereum>,
}

impl PendingDeployment {
    pub fn tx_hash(&self) -> TxHash {
        self.tx_hash
    }

    /// Blocks until the transaction is confirmed and returns the deployed contract.
    pub async fn wait_for_deployment(self) -> Result<DeployedContract, DeploymentError> {
        let receipt = self
            .pending
            .with_required_confirmations(self.config.confirmations)
            .with_timeout(self.config.timeout)
            .get_receipt()
            .await?;
        if !receipt.status() {
            return Err(DeploymentError::Reverted {
                tx_hash: self.tx_hash,
            });
        }
        let address = receipt
            .contract_address
            .ok_or(DeploymentError::NoContractAddress {
                tx_hash: self.tx_hash,
            })?;
        debug!(@grey, "gas used: {}", receipt.gas_used);
        Ok(DeployedContract {
            name: self.name,
            address,
            tx_hash: receipt.transaction_hash,
            gas_used: receipt.gas_used,
            block_number: receipt.block_number,
        })
    }
}

impl std::fmt::Debug for PendingDeployment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingDeployment")
            .field("name", &self.name)
            .field("tx_hash", &self.tx_hash)
            .finish_non_exhaustive()
    }
}
