// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Project and network configuration.
//!
//! Configuration is always built explicitly from an environment lookup so that callers (and tests)
//! decide where values come from. Missing variables are not reported here: an absent RPC URL or
//! key only fails once a provider or signer is actually needed.

use std::{
    collections::BTreeMap,
    fmt,
    path::{Path, PathBuf},
};

use manifest::{TomlManifest, TomlNetwork};

pub mod manifest;

/// Name of the network profile used when none is given.
pub const DEFAULT_NETWORK: &str = "nexus";
pub const NEXUS_CHAIN_ID: u64 = 392;
pub const DEFAULT_SOLC_VERSION: &str = "0.8.20";
pub const RPC_URL_VAR: &str = "RPC_URL";
pub const PRIVATE_KEY_VAR: &str = "PRIVATE_KEY";

const DEFAULT_SOURCES: &str = "contracts";
const DEFAULT_ARTIFACTS: &str = "artifacts";

#[derive(Clone, Debug)]
pub struct ProjectConfig {
    pub solidity: SolidityConfig,
    pub paths: PathsConfig,
    pub networks: BTreeMap<String, NetworkConfig>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolidityConfig {
    pub version: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathsConfig {
    /// Project root, the base path imports are resolved against.
    pub root: PathBuf,
    pub sources: PathBuf,
    pub artifacts: PathBuf,
}

/// A named network profile.
#[derive(Clone)]
pub struct NetworkConfig {
    pub name: String,
    pub url: Option<String>,
    pub chain_id: u64,
    /// Hex-encoded secret keys.
    pub accounts: Vec<String>,
    /// Where `url` was read from, for error reporting.
    pub url_var: Option<String>,
    /// Where `accounts` were read from, for error reporting.
    pub account_vars: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml read error: {0}")]
    TomlRead(#[from] toml::de::Error),

    #[error("missing manifest at {}", .0.display())]
    MissingManifest(PathBuf),
    #[error("unknown network: {0}")]
    UnknownNetwork(String),
    #[error("network {network} has no RPC url (set {var})")]
    MissingUrl { network: String, var: String },
    #[error("network {network} has no accounts (set {vars})")]
    NoAccounts { network: String, vars: String },
    #[error("could not open private key file {}: {source}", .path.display())]
    KeyFile {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("empty private key")]
    EmptyPrivateKey,
    #[error("invalid private key: {0}")]
    InvalidPrivateKey(String),
}

impl ProjectConfig {
    /// The default project: Solidity 0.8.20 and the `nexus` network, with its RPC URL and key
    /// taken from `RPC_URL` and `PRIVATE_KEY`.
    pub fn from_env(env: impl Fn(&str) -> Option<String>) -> Self {
        Self::from_manifest(TomlManifest::default(), Path::new("."), env)
    }

    /// Loads `Nexus.toml` from `root` if present, falling back to [`ProjectConfig::from_env`].
    pub fn discover(
        root: impl AsRef<Path>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let root = root.as_ref();
        let path = root.join(manifest::FILENAME);
        let manifest = if path.exists() {
            manifest::load(&path)?
        } else {
            TomlManifest::default()
        };
        Ok(Self::from_manifest(manifest, root, env))
    }

    /// Loads the manifest at `path`, which must exist.
    pub fn load(
        path: impl AsRef<Path>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let manifest = manifest::load(path)?;
        let root = path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        Ok(Self::from_manifest(manifest, root, env))
    }

    pub fn from_manifest(
        manifest: TomlManifest,
        root: &Path,
        env: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let solidity = SolidityConfig {
            version: manifest
                .solidity
                .map(|s| s.version)
                .unwrap_or_else(|| DEFAULT_SOLC_VERSION.to_owned()),
        };
        let paths = manifest.paths.unwrap_or_default();
        let paths = PathsConfig {
            root: root.to_path_buf(),
            sources: root.join(paths.sources.unwrap_or_else(|| DEFAULT_SOURCES.into())),
            artifacts: root.join(paths.artifacts.unwrap_or_else(|| DEFAULT_ARTIFACTS.into())),
        };

        let mut networks = BTreeMap::new();
        networks.insert(
            DEFAULT_NETWORK.to_owned(),
            NetworkConfig::resolve(DEFAULT_NETWORK, &TomlNetwork::nexus(), &env),
        );
        for (name, network) in &manifest.networks {
            networks.insert(name.clone(), NetworkConfig::resolve(name, network, &env));
        }

        Self {
            solidity,
            paths,
            networks,
        }
    }

    pub fn network(&self, name: &str) -> Result<&NetworkConfig, ConfigError> {
        self.networks
            .get(name)
            .ok_or_else(|| ConfigError::UnknownNetwork(name.to_owned()))
    }

    /// Replaces a network's URL and keys, as given on the command line.
    pub fn override_network(
        &mut self,
        name: &str,
        url: Option<String>,
        private_key: Option<String>,
    ) -> Result<(), ConfigError> {
        let network = self
            .networks
            .get_mut(name)
            .ok_or_else(|| ConfigError::UnknownNetwork(name.to_owned()))?;
        if url.is_some() {
            network.url = url;
        }
        if let Some(key) = private_key {
            network.accounts = vec![key];
        }
        Ok(())
    }
}

impl TomlNetwork {
    fn nexus() -> Self {
        Self {
            url: None,
            url_env: Some(RPC_URL_VAR.to_owned()),
            chain_id: NEXUS_CHAIN_ID,
            accounts_env: vec![PRIVATE_KEY_VAR.to_owned()],
        }
    }
}

impl NetworkConfig {
    fn resolve(name: &str, toml: &TomlNetwork, env: &impl Fn(&str) -> Option<String>) -> Self {
        let url = toml
            .url
            .clone()
            .or_else(|| toml.url_env.as_deref().and_then(env));
        let accounts = toml
            .accounts_env
            .iter()
            .filter_map(|var| env(var.as_str()))
            .collect();
        Self {
            name: name.to_owned(),
            url,
            chain_id: toml.chain_id,
            accounts,
            url_var: toml.url_env.clone(),
            account_vars: toml.accounts_env.clone(),
        }
    }

    /// The RPC URL, or an error naming the variable that should provide it.
    pub fn url(&self) -> Result<&str, ConfigError> {
        self.url.as_deref().ok_or_else(|| ConfigError::MissingUrl {
            network: self.name.clone(),
            var: self.url_var.clone().unwrap_or_else(|| "url".to_owned()),
        })
    }
}

impl fmt::Debug for NetworkConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NetworkConfig")
            .field("name", &self.name)
            .field("url", &self.url)
            .field("chain_id", &self.chain_id)
            .field("accounts", &format_args!("[{} redacted]", self.accounts.len()))
            .finish()
    }
}
