use crate::state::{save_round, DECIMALS, LATEST_ROUND, ROUNDS};
use fundme_finance::price_feed::{
    ExecuteMsg, InstantiateMsg, QueryMsg, RoundData, PRICE_FEED_DESCRIPTION, PRICE_FEED_VERSION,
};
use fundme_std::{
    common::{encode_binary, migrate::migrate as migrate_contract, MigrateMsg},
    error::ContractError,
    ownership::{ensure_owner, OWNER},
};

#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{attr, Binary, Deps, DepsMut, Env, Int128, MessageInfo, Response};
use cw2::set_contract_version;
use cw_utils::nonpayable;

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:fundme-price-feed";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    OWNER.save(deps.storage, &info.sender)?;
    DECIMALS.save(deps.storage, &msg.decimals)?;

    let now = env.block.time.seconds();
    let round = RoundData {
        round_id: 1,
        answer: msg.initial_answer,
        started_at: now,
        updated_at: now,
        answered_in_round: 1,
    };
    save_round(deps.storage, &round)?;

    Ok(Response::new().add_attributes(vec![
        attr("action", "instantiate"),
        attr("type", "price-feed"),
        attr("decimals", msg.decimals.to_string()),
        attr("answer", msg.initial_answer.to_string()),
    ]))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    ensure_owner(deps.storage, &info.sender)?;

    match msg {
        ExecuteMsg::UpdateAnswer { answer } => execute_update_answer(deps, env, answer),
        ExecuteMsg::UpdateRoundData {
            round_id,
            answer,
            timestamp,
            started_at,
        } => execute_update_round_data(deps, round_id, answer, timestamp, started_at),
    }
}

fn execute_update_answer(
    deps: DepsMut,
    env: Env,
    answer: Int128,
) -> Result<Response, ContractError> {
    let round_id = LATEST_ROUND
        .load(deps.storage)?
        .checked_add(1)
        .ok_or(ContractError::Overflow {})?;
    let now = env.block.time.seconds();
    save_round(
        deps.storage,
        &RoundData {
            round_id,
            answer,
            started_at: now,
            updated_at: now,
            answered_in_round: round_id,
        },
    )?;

    Ok(Response::new().add_attributes(vec![
        attr("action", "update_answer"),
        attr("round_id", round_id.to_string()),
        attr("answer", answer.to_string()),
    ]))
}

fn execute_update_round_data(
    deps: DepsMut,
    round_id: u64,
    answer: Int128,
    timestamp: u64,
    started_at: u64,
) -> Result<Response, ContractError> {
    save_round(
        deps.storage,
        &RoundData {
            round_id,
            answer,
            started_at,
            updated_at: timestamp,
            answered_in_round: round_id,
        },
    )?;

    Ok(Response::new().add_attributes(vec![
        attr("action", "update_round_data"),
        attr("round_id", round_id.to_string()),
        attr("answer", answer.to_string()),
    ]))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    migrate_contract(deps, CONTRACT_NAME, CONTRACT_VERSION)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> Result<Binary, ContractError> {
    match msg {
        QueryMsg::Decimals {} => encode_binary(&DECIMALS.load(deps.storage)?),
        QueryMsg::Description {} => encode_binary(&PRICE_FEED_DESCRIPTION),
        QueryMsg::Version {} => encode_binary(&PRICE_FEED_VERSION),
        QueryMsg::LatestRoundData {} => encode_binary(&query_latest_round(deps)?),
        QueryMsg::RoundData { round_id } => encode_binary(&query_round(deps, round_id)?),
        QueryMsg::LatestAnswer {} => encode_binary(&query_latest_round(deps)?.answer),
    }
}

fn query_round(deps: Deps, round_id: u64) -> Result<RoundData, ContractError> {
    ROUNDS
        .may_load(deps.storage, round_id)?
        .ok_or(ContractError::RoundNotFound { round_id })
}

fn query_latest_round(deps: Deps) -> Result<RoundData, ContractError> {
    let round_id = LATEST_ROUND.load(deps.storage)?;
    query_round(deps, round_id)
}
