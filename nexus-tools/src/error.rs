// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use crate::core::{
    compile::CompileError, config::ConfigError, deployment::DeploymentError,
    network::NetworkError,
};

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Compile(#[from] CompileError),
    #[error("{0}")]
    Network(#[from] NetworkError),
    #[error("{0}")]
    Deployment(#[from] DeploymentError),
}

/// Broad class of a failure, for callers that react differently to each.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing or malformed configuration, including keys.
    Config,
    /// The contract could not be compiled or its artifact was not found.
    Compilation,
    /// The endpoint could not be reached or misbehaved.
    Network,
    /// The deployment itself failed: bad constructor input, revert, funds.
    Contract,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Config(_) => ErrorKind::Config,
            Error::Compile(_) => ErrorKind::Compilation,
            Error::Network(NetworkError::Config(_)) => ErrorKind::Config,
            Error::Network(_) => ErrorKind::Network,
            Error::Deployment(err) => match err {
                DeploymentError::Rpc(_) | DeploymentError::Confirmation(_) => ErrorKind::Network,
                DeploymentError::InvalidConstructor(_)
                | DeploymentError::NotEnoughFunds { .. }
                | DeploymentError::Reverted { .. }
                | DeploymentError::NoContractAddress { .. } => ErrorKind::Contract,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use alloy::primitives::TxHash;

    use super::*;

    #[test]
    fn kinds() {
        let err: Error = ConfigError::EmptyPrivateKey.into();
        assert_eq!(err.kind(), ErrorKind::Config);

        let err: Error = NetworkError::Config(ConfigError::EmptyPrivateKey).into();
        assert_eq!(err.kind(), ErrorKind::Config);

        let err: Error = NetworkError::ChainIdMismatch {
            expected: 392,
            found: 1,
        }
        .into();
        assert_eq!(err.kind(), ErrorKind::Network);

        let err: Error = CompileError::ArtifactNotFound("NexusNameService".into()).into();
        assert_eq!(err.kind(), ErrorKind::Compilation);

        let err: Error = DeploymentError::Reverted {
            tx_hash: TxHash::ZERO,
        }
        .into();
        assert_eq!(err.kind(), ErrorKind::Contract);
    }
}
