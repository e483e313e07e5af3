// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use alloy::{
    dyn_abi::{DynSolValue, JsonAbiExt},
    primitives::{Address, Bytes},
};

use super::{DeploymentConfig, DeploymentError, DeploymentRequest};
use crate::core::compile::Artifact;

/// Builds creation transactions for a compiled contract.
#[derive(Clone, Debug)]
pub struct ContractFactory {
    artifact: Artifact,
}

impl ContractFactory {
    pub fn new(artifact: Artifact) -> Self {
        Self { artifact }
    }

    pub fn name(&self) -> &str {
        &self.artifact.contract_name
    }

    /// Creation bytecode followed by the ABI-encoded constructor arguments.
    pub fn deploy_code(&self, args: &[DynSolValue]) -> Result<Bytes, DeploymentError> {
        let mut code = self.artifact.bytecode.to_vec();
        match &self.artifact.abi.constructor {
            None if args.is_empty() => {}
            None => {
                return Err(DeploymentError::InvalidConstructor(format!(
                    "{} has no constructor but got {} arguments",
                    self.name(),
                    args.len()
                )))
            }
            Some(constructor) => {
                if constructor.inputs.len() != args.len() {
                    return Err(DeploymentError::InvalidConstructor(format!(
                        "mismatch number of constructor arguments (want {:?} ({}); got {})",
                        constructor.inputs,
                        constructor.inputs.len(),
                        args.len(),
                    )));
                }
                let encoded = constructor
                    .abi_encode_input(args)
                    .map_err(|err| DeploymentError::InvalidConstructor(err.to_string()))?;
                code.extend(encoded);
            }
        }
        Ok(code.into())
    }

    /// Prepares a deployment from `sender` with the given constructor arguments.
    pub fn deploy(
        &self,
        sender: Address,
        args: &[DynSolValue],
        config: &DeploymentConfig,
    ) -> Result<DeploymentRequest, DeploymentError> {
        let code = self.deploy_code(args)?;
        Ok(DeploymentRequest::new(
            self.name(),
            sender,
            code,
            config.clone(),
        ))
    }
}
