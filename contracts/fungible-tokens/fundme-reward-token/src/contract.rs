#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{Binary, Deps, DepsMut, Env, MessageInfo, Response};

use cw2::set_contract_version;
use cw20_base::contract::{
    execute as execute_cw20, instantiate as instantiate_cw20, query as query_cw20,
};
use fundme_fungible_tokens::reward_token::{ExecuteMsg, InstantiateMsg, QueryMsg};
use fundme_std::{
    common::{migrate::migrate as migrate_contract, MigrateMsg},
    error::ContractError,
};

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:fundme-reward-token";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    mut deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    // cw20-base records its own contract version, ours is set afterwards so it wins
    let cw20_resp = instantiate_cw20(deps.branch(), env, info, msg.into())?;
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("type", "reward-token")
        .add_submessages(cw20_resp.messages)
        .add_attributes(cw20_resp.attributes))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    Ok(execute_cw20(deps, env, info, msg.into())?)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    migrate_contract(deps, CONTRACT_NAME, CONTRACT_VERSION)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> Result<Binary, ContractError> {
    Ok(query_cw20(deps, env, msg.into())?)
}
