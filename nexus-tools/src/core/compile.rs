// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Solidity compilation and contract artifacts.
//!
//! Sources are compiled with the locally installed `solc`, whose version must match the project's
//! configured compiler version. Each compiled contract is written as a JSON artifact holding its
//! ABI and creation bytecode.

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use alloy::{json_abi::JsonAbi, primitives::Bytes};
use serde::{Deserialize, Serialize};

use crate::{
    core::config::ProjectConfig,
    utils::solc::{self, SolcError},
};

/// A compiled contract.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    pub contract_name: String,
    pub source_name: String,
    pub abi: JsonAbi,
    pub bytecode: Bytes,
}

impl Artifact {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CompileError> {
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    pub fn write(&self, dir: impl AsRef<Path>) -> Result<PathBuf, CompileError> {
        let path = dir.as_ref().join(format!("{}.json", self.contract_name));
        fs::write(&path, serde_json::to_string_pretty(self)?)?;
        Ok(path)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Solc(#[from] SolcError),

    #[error("solc version mismatch: project requires {expected}, found {found}")]
    VersionMismatch { expected: String, found: String },
    #[error("no Solidity sources found in {}", .0.display())]
    NoSources(PathBuf),
    #[error("invalid solc output for {contract}: {reason}")]
    InvalidOutput { contract: String, reason: String },
    #[error("artifact for contract {0} not found, try compiling first")]
    ArtifactNotFound(String),
    #[error("contract name {name} is ambiguous: defined in {}", .sources.join(", "))]
    AmbiguousContract { name: String, sources: Vec<String> },
}

/// Compiles every source of the project and writes its artifacts.
pub fn compile(config: &ProjectConfig) -> Result<Vec<Artifact>, CompileError> {
    solc::check_exists()?;
    let found = solc::version()?;
    if found != config.solidity.version {
        return Err(CompileError::VersionMismatch {
            expected: config.solidity.version.clone(),
            found,
        });
    }

    let sources = find_sources(&config.paths.sources)?;
    debug!(@grey, "compiling {} source files with solc {}", sources.len(), found);
    let output = solc::combined_json(&config.paths.root, &sources)?;
    let artifacts = parse_combined_json(&output)?;

    fs::create_dir_all(&config.paths.artifacts)?;
    for artifact in &artifacts {
        let path = artifact.write(&config.paths.artifacts)?;
        debug!(@grey, "wrote artifact {}", path.display());
    }
    debug!(@grey, "compiled {} contracts", artifacts.len());
    Ok(artifacts)
}

/// Reads previously written artifacts.
#[derive(Debug)]
pub struct Artifacts {
    dir: PathBuf,
}

impl Artifacts {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn find(&self, name: &str) -> Result<Artifact, CompileError> {
        let path = self.dir.join(format!("{name}.json"));
        if !path.exists() {
            return Err(CompileError::ArtifactNotFound(name.to_owned()));
        }
        Artifact::load(path)
    }
}

/// Picks the artifact named `name` out of a compilation.
pub fn select(artifacts: Vec<Artifact>, name: &str) -> Result<Artifact, CompileError> {
    let mut matches: Vec<_> = artifacts
        .into_iter()
        .filter(|artifact| artifact.contract_name == name)
        .collect();
    match matches.len() {
        0 => Err(CompileError::ArtifactNotFound(name.to_owned())),
        1 => Ok(matches.remove(0)),
        _ => Err(CompileError::AmbiguousContract {
            name: name.to_owned(),
            sources: matches.into_iter().map(|a| a.source_name).collect(),
        }),
    }
}

fn find_sources(dir: &Path) -> Result<Vec<PathBuf>, CompileError> {
    let mut sources = Vec::new();
    if dir.is_dir() {
        collect_sources(dir, &mut sources)?;
    }
    if sources.is_empty() {
        return Err(CompileError::NoSources(dir.to_path_buf()));
    }
    sources.sort();
    Ok(sources)
}

fn collect_sources(dir: &Path, sources: &mut Vec<PathBuf>) -> std::io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_sources(&path, sources)?;
        } else if path.extension().is_some_and(|ext| ext == "sol") {
            sources.push(path);
        }
    }
    Ok(())
}

#[derive(Debug, Deserialize)]
struct CombinedJson {
    contracts: BTreeMap<String, CombinedContract>,
}

#[derive(Debug, Deserialize)]
struct CombinedContract {
    // Older solc releases emit the ABI as an encoded JSON string.
    abi: serde_json::Value,
    bin: String,
}

fn parse_combined_json(output: &str) -> Result<Vec<Artifact>, CompileError> {
    let combined: CombinedJson = serde_json::from_str(output)?;
    let mut artifacts = Vec::with_capacity(combined.contracts.len());
    for (key, contract) in combined.contracts {
        let (source_name, contract_name) =
            key.rsplit_once(':')
                .ok_or_else(|| CompileError::InvalidOutput {
                    contract: key.clone(),
                    reason: "expected <source>:<name>".to_owned(),
                })?;
        let abi = match contract.abi {
            serde_json::Value::String(text) => serde_json::from_str(&text)?,
            value => serde_json::from_value(value)?,
        };
        // Interfaces and abstract contracts have no bytecode.
        if contract.bin.is_empty() {
            continue;
        }
        let bytecode = hex::decode(&contract.bin).map_err(|err| CompileError::InvalidOutput {
            contract: key.clone(),
            reason: err.to_string(),
        })?;
        artifacts.push(Artifact {
            contract_name: contract_name.to_owned(),
            source_name: source_name.to_owned(),
            abi,
            bytecode: bytecode.into(),
        });
    }
    Ok(artifacts)
}

#[cfg(test)]
mod tests {
    use super::*;

    const OUTPUT: &str = r#"{
        "contracts": {
            "contracts/Registry.sol:IRegistry": {"abi": [], "bin": ""},
            "contracts/Registry.sol:NexusNameService": {
                "abi": [{"type":"constructor","inputs":[{"name":"initialOwner","type":"address","internalType":"address"}],"stateMutability":"nonpayable"}],
                "bin": "6080604052"
            },
            "contracts/Old.sol:Legacy": {
                "abi": "[{\"type\":\"function\",\"name\":\"owner\",\"inputs\":[],\"outputs\":[{\"name\":\"\",\"type\":\"address\"}],\"stateMutability\":\"view\"}]",
                "bin": "60016002"
            }
        },
        "version": "0.8.20+commit.a1b79de6.Linux.g++"
    }"#;

    #[test]
    fn parses_combined_output() {
        let artifacts = parse_combined_json(OUTPUT).unwrap();
        assert_eq!(artifacts.len(), 2);

        let nns = select(artifacts.clone(), "NexusNameService").unwrap();
        assert_eq!(nns.source_name, "contracts/Registry.sol");
        assert_eq!(nns.bytecode.as_ref(), &[0x60, 0x80, 0x60, 0x40, 0x52]);
        assert_eq!(nns.abi.constructor.unwrap().inputs[0].ty, "address");

        let legacy = select(artifacts, "Legacy").unwrap();
        assert!(legacy.abi.function("owner").is_some());
    }

    #[test]
    fn select_reports_missing_and_ambiguous() {
        let artifacts = parse_combined_json(OUTPUT).unwrap();
        assert!(matches!(
            select(artifacts.clone(), "IRegistry"),
            Err(CompileError::ArtifactNotFound(_))
        ));

        let mut twice = artifacts.clone();
        let mut copy = twice[0].clone();
        copy.source_name = "contracts/Other.sol".to_owned();
        twice.push(copy);
        let name = twice[0].contract_name.clone();
        assert!(matches!(
            select(twice, &name),
            Err(CompileError::AmbiguousContract { sources, .. }) if sources.len() == 2
        ));
    }

    #[test]
    fn artifacts_round_trip_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let artifact = select(parse_combined_json(OUTPUT).unwrap(), "NexusNameService").unwrap();
        artifact.write(dir.path()).unwrap();

        let artifacts = Artifacts::new(dir.path());
        assert_eq!(artifacts.find("NexusNameService").unwrap(), artifact);
        assert!(matches!(
            artifacts.find("Missing"),
            Err(CompileError::ArtifactNotFound(name)) if name == "Missing"
        ));
    }

    #[test]
    fn empty_source_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            find_sources(dir.path()),
            Err(CompileError::NoSources(_))
        ));
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested/A.sol"), "").unwrap();
        fs::write(dir.path().join("README.md"), "").unwrap();
        assert_eq!(
            find_sources(dir.path()).unwrap(),
            vec![dir.path().join("nested/A.sol")]
        );
    }
}
