use cosmwasm_std::{StdResult, Storage};
use cw_storage_plus::{Item, Map};
use fundme_finance::price_feed::RoundData;

pub const DECIMALS: Item<u8> = Item::new("decimals");
pub const LATEST_ROUND: Item<u64> = Item::new("latest_round");
pub const ROUNDS: Map<u64, RoundData> = Map::new("rounds");

/// Stores `round` and marks it as the latest one.
pub fn save_round(storage: &mut dyn Storage, round: &RoundData) -> StdResult<()> {
    ROUNDS.save(storage, round.round_id, round)?;
    LATEST_ROUND.save(storage, &round.round_id)
}
