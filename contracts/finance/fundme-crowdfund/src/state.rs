use cosmwasm_std::{Addr, Storage, Uint128};
use cw_storage_plus::{Item, Map};
use fundme_finance::fund_me::Config;
use fundme_std::error::ContractError;

pub const CONFIG: Item<Config> = Item::new("config");
pub const PRICE_FEED: Item<Addr> = Item::new("price_feed");
pub const REWARD_TOKEN: Item<Addr> = Item::new("reward_token");

/// Contribution per funder since the last withdrawal
pub const ADDRESS_TO_AMOUNT_FUNDED: Map<&Addr, Uint128> = Map::new("address_to_amount_funded");
/// Funders in order of their first contribution, keyed by position
pub const FUNDERS: Map<u32, Addr> = Map::new("funders");
pub const FUNDER_COUNT: Item<u32> = Item::new("funder_count");

/// Total contribution per funder that still earns a reward. Never reset by a withdrawal.
pub const REWARD_BASE: Map<&Addr, Uint128> = Map::new("reward_base");
pub const REWARD_WITHDRAWN: Map<&Addr, bool> = Map::new("reward_withdrawn");

pub fn push_funder(storage: &mut dyn Storage, funder: &Addr) -> Result<u32, ContractError> {
    let index = FUNDER_COUNT.may_load(storage)?.unwrap_or_default();
    FUNDERS.save(storage, index, funder)?;
    FUNDER_COUNT.save(
        storage,
        &index.checked_add(1).ok_or(ContractError::Overflow {})?,
    )?;
    Ok(index)
}

pub fn funder_count(storage: &dyn Storage) -> Result<u32, ContractError> {
    Ok(FUNDER_COUNT.may_load(storage)?.unwrap_or_default())
}

pub fn amount_funded(storage: &dyn Storage, funder: &Addr) -> Result<Uint128, ContractError> {
    Ok(ADDRESS_TO_AMOUNT_FUNDED
        .may_load(storage, funder)?
        .unwrap_or_default())
}

pub fn reward_base(storage: &dyn Storage, funder: &Addr) -> Result<Uint128, ContractError> {
    Ok(REWARD_BASE.may_load(storage, funder)?.unwrap_or_default())
}

/// Reward `funder` can still claim. Zero once the reward was withdrawn.
pub fn claimable_reward(
    storage: &dyn Storage,
    config: &Config,
    funder: &Addr,
) -> Result<Uint128, ContractError> {
    if has_withdrawn_reward(storage, funder)? {
        return Ok(Uint128::zero());
    }
    config.reward_for(reward_base(storage, funder)?)
}

pub fn has_withdrawn_reward(storage: &dyn Storage, funder: &Addr) -> Result<bool, ContractError> {
    Ok(REWARD_WITHDRAWN
        .may_load(storage, funder)?
        .unwrap_or_default())
}

/// Drops every contribution and empties the funder list.
pub fn clear_funders(storage: &mut dyn Storage, funders: &[Addr]) -> Result<(), ContractError> {
    for funder in funders {
        ADDRESS_TO_AMOUNT_FUNDED.remove(storage, funder);
    }
    FUNDERS.clear(storage);
    FUNDER_COUNT.save(storage, &0)?;
    Ok(())
}
