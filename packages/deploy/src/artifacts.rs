use std::path::{Path, PathBuf};

use cosmwasm_schema::generate_api;
use fundme_finance::fund_me::{ExecuteMsg, InstantiateMsg, QueryMsg};
use fundme_std::common::MigrateMsg;
use serde::Serialize;

use crate::error::DeployError;

pub const DEFAULT_FRONTEND_DIR: &str = "frontend/src/constants";
pub const CONTRACT_ADDRESS_FILE: &str = "contract-address.json";
pub const CONTRACT_ABI_FILE: &str = "contractAbi.json";

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FrontendAddresses {
    pub contract_address: String,
    pub reward_token_address: String,
    pub price_feed_address: String,
}

/// The FundMe message schema handed to the frontend.
pub fn fund_me_api() -> Result<String, DeployError> {
    let api = generate_api! {
        name: "fundme-crowdfund",
        instantiate: InstantiateMsg,
        execute: ExecuteMsg,
        query: QueryMsg,
        migrate: MigrateMsg,
    }
    .render();
    Ok(serde_json::to_string_pretty(&api)?)
}

/// Writes the deployed addresses and the FundMe schema into `dir`, creating it if needed.
pub fn save_frontend_files(
    dir: impl AsRef<Path>,
    addresses: &FrontendAddresses,
) -> Result<(PathBuf, PathBuf), DeployError> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir)?;

    let address_file = dir.join(CONTRACT_ADDRESS_FILE);
    std::fs::write(&address_file, serde_json::to_string_pretty(addresses)?)?;
    log::debug!("Wrote {}", address_file.display());

    let abi_file = dir.join(CONTRACT_ABI_FILE);
    std::fs::write(&abi_file, fund_me_api()?)?;
    log::debug!("Wrote {}", abi_file.display());

    Ok((address_file, abi_file))
}
