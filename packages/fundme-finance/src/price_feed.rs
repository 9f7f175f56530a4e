use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{ensure, Int128, Uint128};
use fundme_std::error::ContractError;

pub const PRICE_FEED_VERSION: u64 = 0;
pub const PRICE_FEED_DESCRIPTION: &str = "fundme/mock-price-feed";

#[cw_serde]
pub struct InstantiateMsg {
    pub decimals: u8,
    pub initial_answer: Int128,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Starts a new round reporting `answer` at the current block time
    UpdateAnswer { answer: Int128 },
    /// Overwrites (or creates) a round and makes it the latest one
    UpdateRoundData {
        round_id: u64,
        answer: Int128,
        timestamp: u64,
        started_at: u64,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(u8)]
    Decimals {},
    #[returns(String)]
    Description {},
    #[returns(u64)]
    Version {},
    #[returns(RoundData)]
    LatestRoundData {},
    #[returns(RoundData)]
    RoundData { round_id: u64 },
    #[returns(Int128)]
    LatestAnswer {},
}

#[cw_serde]
pub struct RoundData {
    pub round_id: u64,
    pub answer: Int128,
    /// Seconds since epoch
    pub started_at: u64,
    /// Seconds since epoch
    pub updated_at: u64,
    pub answered_in_round: u64,
}

impl RoundData {
    /// The answer as an unsigned price. Zero or negative answers are rejected.
    pub fn price(&self) -> Result<Uint128, ContractError> {
        ensure!(
            self.answer > Int128::zero(),
            ContractError::InvalidPrice {
                price: self.answer.to_string()
            }
        );
        let price = u128::try_from(self.answer.i128()).map_err(|_| ContractError::InvalidPrice {
            price: self.answer.to_string(),
        })?;
        Ok(Uint128::new(price))
    }
}
