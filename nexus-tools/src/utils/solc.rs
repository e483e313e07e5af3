// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{
    ffi::OsString,
    path::{Path, PathBuf},
    process::Command,
};

use regex::Regex;

use super::{color::Color, sys};

const LINK: &str = "https://docs.soliditylang.org/en/latest/installing-solidity.html";

pub fn check_exists() -> Result<(), SolcError> {
    if sys::command_exists("solc") {
        Ok(())
    } else {
        Err(SolcError::CommandDoesNotExist)
    }
}

/// Returns the semantic version of the installed `solc`, e.g. `0.8.20`.
pub fn version() -> Result<String, SolcError> {
    let output = Command::new("solc").arg("--version").output()?;
    if !output.status.success() {
        return Err(SolcError::Failed(
            String::from_utf8_lossy(&output.stderr).into_owned(),
        ));
    }
    parse_version(&String::from_utf8_lossy(&output.stdout))
}

/// Directory solc searches for library imports such as `@openzeppelin/...`.
pub const NODE_MODULES: &str = "node_modules";

/// Runs `solc --combined-json abi,bin` over `sources` from the project `root`, returning raw JSON
/// output. Source names in the output are relative to `root`.
pub fn combined_json(root: &Path, sources: &[PathBuf]) -> Result<String, SolcError> {
    let output = Command::new("solc")
        .current_dir(root)
        .args(combined_json_args(root, sources))
        .output()?;
    if !output.status.success() {
        return Err(SolcError::Failed(
            String::from_utf8_lossy(&output.stderr).into_owned(),
        ));
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

fn combined_json_args(root: &Path, sources: &[PathBuf]) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec!["--base-path".into(), ".".into()];
    if root.join(NODE_MODULES).is_dir() {
        args.push("--include-path".into());
        args.push(NODE_MODULES.into());
    }
    args.push("--combined-json".into());
    args.push("abi,bin".into());
    for source in sources {
        let relative = source.strip_prefix(root).unwrap_or(source);
        args.push(relative.as_os_str().to_owned());
    }
    args
}

fn parse_version(text: &str) -> Result<String, SolcError> {
    let re = Regex::new(r"Version: (\d+\.\d+\.\d+)").expect("valid regex");
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_owned())
        .ok_or_else(|| SolcError::UnknownVersion(text.trim().to_owned()))
}

#[derive(Debug, thiserror::Error)]
pub enum SolcError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("solc not found. Please see\n{link}", link = LINK.red())]
    CommandDoesNotExist,
    #[error("solc failed:\n{0}")]
    Failed(String),
    #[error("could not read solc version from: {0}")]
    UnknownVersion(String),
}
