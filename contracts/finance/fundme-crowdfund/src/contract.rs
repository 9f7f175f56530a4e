use crate::state::{
    amount_funded, claimable_reward, clear_funders, funder_count, has_withdrawn_reward,
    push_funder, reward_base, ADDRESS_TO_AMOUNT_FUNDED, CONFIG, FUNDERS, PRICE_FEED,
    REWARD_BASE, REWARD_TOKEN, REWARD_WITHDRAWN,
};
use cosmwasm_std::{
    attr, ensure, to_json_binary, Addr, BankMsg, Binary, Coin, CosmosMsg, Deps, DepsMut, Env,
    Event, MessageInfo, Order, Response, StdResult, Uint128, WasmMsg,
};
use cw20::{BalanceResponse, Cw20ExecuteMsg, Cw20QueryMsg};
use cw2::set_contract_version;
use cw_storage_plus::Bound;
use cw_utils::{may_pay, nonpayable};
use fundme_finance::{
    fund_me::{
        usd_value, Config, ExecuteMsg, FunderInfo, FundersResponse, InstantiateMsg, QueryMsg,
        FUNDED_EVENT, WITHDRAW_FUND_EVENT, WITHDRAW_REWARD_EVENT,
    },
    price_feed::{QueryMsg as PriceFeedQueryMsg, RoundData},
};
use fundme_std::{
    common::{
        encode_binary, migrate::migrate as migrate_contract, pagination::get_limit, MigrateMsg,
    },
    error::ContractError,
    ownership::{ensure_owner, OWNER},
};

#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:fundme-crowdfund";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let config = Config::from_instantiate_msg(&msg);
    config.validate()?;

    let price_feed = deps.api.addr_validate(&msg.price_feed)?;
    let reward_token = deps.api.addr_validate(&msg.reward_token)?;
    let owner = match msg.owner {
        Some(owner) => deps.api.addr_validate(&owner)?,
        None => info.sender,
    };

    CONFIG.save(deps.storage, &config)?;
    PRICE_FEED.save(deps.storage, &price_feed)?;
    REWARD_TOKEN.save(deps.storage, &reward_token)?;
    OWNER.save(deps.storage, &owner)?;

    Ok(Response::new().add_attributes(vec![
        attr("action", "instantiate"),
        attr("type", "fund-me"),
        attr("owner", owner),
        attr("price_feed", price_feed),
        attr("reward_token", reward_token),
        attr("denom", config.denom),
    ]))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Fund {} => execute_fund(deps, info),
        ExecuteMsg::Withdraw {} => execute_withdraw(deps, env, info),
        ExecuteMsg::CheaperWithdraw {} => execute_cheaper_withdraw(deps, env, info),
        ExecuteMsg::WithdrawReward {} => execute_withdraw_reward(deps, env, info),
    }
}

fn execute_fund(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let amount = may_pay(&info, &config.denom)?;

    let usd = conversion_rate(deps.as_ref(), &config, amount)?;
    ensure!(
        !amount.is_zero() && usd >= config.minimum_usd,
        ContractError::BelowMinimumContribution {
            denom: config.denom
        }
    );

    let funder = info.sender;
    let funded = amount_funded(deps.storage, &funder)?;
    if funded.is_zero() {
        push_funder(deps.storage, &funder)?;
    }
    ADDRESS_TO_AMOUNT_FUNDED.save(deps.storage, &funder, &funded.checked_add(amount)?)?;

    // Contributions after a claim earn nothing
    if !has_withdrawn_reward(deps.storage, &funder)? {
        let base = reward_base(deps.storage, &funder)?.checked_add(amount)?;
        REWARD_BASE.save(deps.storage, &funder, &base)?;
    }

    Ok(Response::new()
        .add_attribute("action", "fund")
        .add_attribute("usd_value", usd)
        .add_event(
            Event::new(FUNDED_EVENT)
                .add_attribute("funder", funder)
                .add_attribute("amount", amount),
        ))
}

fn execute_withdraw(deps: DepsMut, env: Env, info: MessageInfo) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    ensure_owner(deps.storage, &info.sender)?;

    let mut funders = vec![];
    for index in 0..funder_count(deps.storage)? {
        if let Some(funder) = FUNDERS.may_load(deps.storage, index)? {
            funders.push(funder);
        }
    }
    clear_funders(deps.storage, &funders)?;

    withdraw_balance(deps, env, "withdraw")
}

fn execute_cheaper_withdraw(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    ensure_owner(deps.storage, &info.sender)?;

    let funders = FUNDERS
        .range(deps.storage, None, None, Order::Ascending)
        .map(|item| item.map(|(_, funder)| funder))
        .collect::<StdResult<Vec<Addr>>>()?;
    clear_funders(deps.storage, &funders)?;

    withdraw_balance(deps, env, "cheaper_withdraw")
}

/// Sends the whole balance of the configured denom to the owner.
fn withdraw_balance(deps: DepsMut, env: Env, action: &str) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let owner = OWNER.load(deps.storage)?;
    let balance = deps
        .querier
        .query_balance(env.contract.address, &config.denom)?;

    let mut resp = Response::new()
        .add_attribute("action", action)
        .add_attribute("recipient", owner.as_str());
    if !balance.amount.is_zero() {
        resp = resp.add_message(CosmosMsg::Bank(BankMsg::Send {
            to_address: owner.into_string(),
            amount: vec![Coin {
                denom: config.denom,
                amount: balance.amount,
            }],
        }));
    }

    Ok(resp.add_event(Event::new(WITHDRAW_FUND_EVENT).add_attribute("amount", balance.amount)))
}

fn execute_withdraw_reward(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    let funder = info.sender;

    ensure!(
        !has_withdrawn_reward(deps.storage, &funder)?,
        ContractError::RewardAlreadyWithdrawn {}
    );
    let base = reward_base(deps.storage, &funder)?;
    ensure!(!base.is_zero(), ContractError::NoContribution {});
    let config = CONFIG.load(deps.storage)?;
    let reward = config.reward_for(base)?;
    ensure!(!reward.is_zero(), ContractError::NoRewardToClaim {});

    let reward_token = REWARD_TOKEN.load(deps.storage)?;
    let available: BalanceResponse = deps.querier.query_wasm_smart(
        &reward_token,
        &Cw20QueryMsg::Balance {
            address: env.contract.address.into_string(),
        },
    )?;
    ensure!(
        available.balance >= reward,
        ContractError::InsufficientRewardBalance {
            required: reward.to_string(),
            available: available.balance.to_string(),
        }
    );

    REWARD_WITHDRAWN.save(deps.storage, &funder, &true)?;
    REWARD_BASE.remove(deps.storage, &funder);

    let transfer = WasmMsg::Execute {
        contract_addr: reward_token.into_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
            recipient: funder.to_string(),
            amount: reward,
        })?,
        funds: vec![],
    };

    Ok(Response::new()
        .add_message(transfer)
        .add_attribute("action", "withdraw_reward")
        .add_event(
            Event::new(WITHDRAW_REWARD_EVENT)
                .add_attribute("funder", funder)
                .add_attribute("amount", reward),
        ))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    migrate_contract(deps, CONTRACT_NAME, CONTRACT_VERSION)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> Result<Binary, ContractError> {
    match msg {
        QueryMsg::RewardCalculator { address } => {
            let address = deps.api.addr_validate(&address)?;
            let config = CONFIG.load(deps.storage)?;
            encode_binary(&claimable_reward(deps.storage, &config, &address)?)
        }
        QueryMsg::AddressToAmountFunded { address } => {
            let address = deps.api.addr_validate(&address)?;
            encode_binary(&amount_funded(deps.storage, &address)?)
        }
        QueryMsg::Funder { index } => encode_binary(&query_funder(deps, index)?),
        QueryMsg::Funders { start_after, limit } => {
            encode_binary(&query_funders(deps, start_after, limit)?)
        }
        QueryMsg::PriceFeed {} => encode_binary(&PRICE_FEED.load(deps.storage)?),
        QueryMsg::RewardToken {} => encode_binary(&REWARD_TOKEN.load(deps.storage)?),
        QueryMsg::Owner {} => encode_binary(&OWNER.load(deps.storage)?),
        QueryMsg::Version {} => encode_binary(&query_feed_version(deps)?),
        QueryMsg::Config {} => encode_binary(&CONFIG.load(deps.storage)?),
        QueryMsg::ConversionRate { amount } => {
            let config = CONFIG.load(deps.storage)?;
            encode_binary(&conversion_rate(deps, &config, amount)?)
        }
        QueryMsg::HasWithdrawnReward { address } => {
            let address = deps.api.addr_validate(&address)?;
            encode_binary(&has_withdrawn_reward(deps.storage, &address)?)
        }
    }
}

fn query_funder(deps: Deps, index: u32) -> Result<Addr, ContractError> {
    FUNDERS
        .may_load(deps.storage, index)?
        .ok_or(ContractError::FunderNotFound { index })
}

fn query_funders(
    deps: Deps,
    start_after: Option<u32>,
    limit: Option<u32>,
) -> Result<FundersResponse, ContractError> {
    let start = start_after.map(Bound::exclusive);
    let funders = FUNDERS
        .range(deps.storage, start, None, Order::Ascending)
        .take(get_limit(limit))
        .map(|item| {
            let (index, address) = item?;
            let amount = amount_funded(deps.storage, &address)?;
            Ok(FunderInfo {
                index,
                address,
                amount,
            })
        })
        .collect::<Result<Vec<FunderInfo>, ContractError>>()?;
    Ok(FundersResponse { funders })
}

fn query_feed_version(deps: Deps) -> Result<u64, ContractError> {
    let price_feed = PRICE_FEED.load(deps.storage)?;
    Ok(deps
        .querier
        .query_wasm_smart(price_feed, &PriceFeedQueryMsg::Version {})?)
}

/// USD value (18 decimals) of `amount` of the configured denom at the latest feed price.
fn conversion_rate(deps: Deps, config: &Config, amount: Uint128) -> Result<Uint128, ContractError> {
    let price_feed = PRICE_FEED.load(deps.storage)?;
    let round: RoundData = deps
        .querier
        .query_wasm_smart(&price_feed, &PriceFeedQueryMsg::LatestRoundData {})?;
    let decimals: u8 = deps
        .querier
        .query_wasm_smart(&price_feed, &PriceFeedQueryMsg::Decimals {})?;

    usd_value(amount, round.price()?, decimals, config.denom_decimals)
}
