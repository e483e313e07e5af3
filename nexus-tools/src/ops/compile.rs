// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use crate::{
    core::{
        compile::{self, Artifact},
        config::ProjectConfig,
    },
    Result,
};

/// Compiles the project sources, printing each contract produced.
pub fn compile(config: &ProjectConfig) -> Result<Vec<Artifact>> {
    let artifacts = compile::compile(config)?;
    for artifact in &artifacts {
        greyln!(
            "{} ({}, {} bytes)",
            artifact.contract_name,
            artifact.source_name,
            artifact.bytecode.len()
        );
    }
    Ok(artifacts)
}
