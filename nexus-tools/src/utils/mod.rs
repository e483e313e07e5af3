// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! General purpose utilities.
//!
//! None of these are specific to Nexus, but [`nexus-tools`](crate) uses them to talk to the
//! Solidity compiler and to present values on the terminal.

use alloy::primitives::{utils::format_units, U256};

use color::Color;

pub mod color;
pub mod sys;

pub(crate) mod solc;

/// Decodes a hex string with an optional `0x` prefix and surrounding whitespace.
pub fn decode0x(text: impl AsRef<str>) -> Result<Vec<u8>, hex::FromHexError> {
    let text = text.as_ref().trim();
    let text = text.strip_prefix("0x").unwrap_or(text);
    hex::decode(text)
}

/// Pretty-prints a transaction cost given in wei.
pub fn format_cost(wei: U256) -> String {
    let Ok(eth) = format_units(wei, "ether") else {
        return "???".red();
    };
    let text = format!("{eth} ETH");
    if wei <= U256::from(10u64.pow(15)) {
        text.mint()
    } else if wei <= U256::from(10u64.pow(16)) {
        text.yellow()
    } else {
        text.red()
    }
}
