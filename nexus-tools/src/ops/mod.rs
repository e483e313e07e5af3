// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

pub use accounts::accounts;
pub use compile::compile;
pub use deploy::{deploy, estimate_gas, DeployOptions, DEFAULT_CONTRACT};

mod accounts;
mod compile;
mod deploy;
