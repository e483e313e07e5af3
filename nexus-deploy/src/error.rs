// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::fmt;
use std::process::ExitCode;

use nexus_tools::ErrorKind;

pub type NexusDeployResult = Result<(), NexusDeployError>;

#[derive(Debug)]
pub struct NexusDeployError {
    error: eyre::Error,
    kind: Option<ErrorKind>,
    exit_code: ExitCode,
}

impl NexusDeployError {
    pub fn exit_code(&self) -> ExitCode {
        self.exit_code
    }

    pub fn kind(&self) -> Option<ErrorKind> {
        self.kind
    }
}

impl fmt::Display for NexusDeployError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.error.fmt(f)
    }
}

impl From<std::io::Error> for NexusDeployError {
    fn from(err: std::io::Error) -> Self {
        Self {
            error: err.into(),
            kind: None,
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<eyre::Error> for NexusDeployError {
    fn from(error: eyre::Error) -> Self {
        Self {
            error,
            kind: None,
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<nexus_tools::Error> for NexusDeployError {
    fn from(err: nexus_tools::Error) -> Self {
        Self {
            kind: Some(err.kind()),
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}
