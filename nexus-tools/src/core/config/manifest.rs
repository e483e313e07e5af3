// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Nexus.toml manifest definitions.

use std::{collections::BTreeMap, fs, path::Path, path::PathBuf};

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Filename for the optional project manifest.
pub const FILENAME: &str = "Nexus.toml";

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TomlManifest {
    pub solidity: Option<TomlSolidity>,
    pub paths: Option<TomlPaths>,
    #[serde(default)]
    pub networks: BTreeMap<String, TomlNetwork>,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TomlSolidity {
    pub version: String,
}

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TomlPaths {
    pub sources: Option<PathBuf>,
    pub artifacts: Option<PathBuf>,
}

/// A network entry. Secrets never live in the manifest: keys are read from the environment
/// variables named by `accounts-env`.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct TomlNetwork {
    pub url: Option<String>,
    pub url_env: Option<String>,
    pub chain_id: u64,
    #[serde(default)]
    pub accounts_env: Vec<String>,
}

pub fn load(path: impl AsRef<Path>) -> Result<TomlManifest, ConfigError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ConfigError::MissingManifest(path.to_path_buf()));
    }

    let contents = fs::read_to_string(path)?;
    let manifest = toml::from_str(&contents)?;
    Ok(manifest)
}
