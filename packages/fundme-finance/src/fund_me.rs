use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{ensure, Addr, Uint128};
use fundme_std::{
    common::{pow10, BPS_DENOMINATOR},
    error::ContractError,
};

/// Minimum contribution, in USD with 18 decimals.
pub const DEFAULT_MINIMUM_USD: u128 = 50_000_000_000_000_000_000;
pub const USD_DECIMALS: u8 = 18;
pub const DEFAULT_REWARD_BPS: u16 = 5;
pub const DEFAULT_DENOM_DECIMALS: u8 = 6;

pub const FUNDED_EVENT: &str = "funded";
pub const WITHDRAW_FUND_EVENT: &str = "withdraw_fund";
pub const WITHDRAW_REWARD_EVENT: &str = "withdraw_reward";

#[cw_serde]
pub struct InstantiateMsg {
    /// Address of the price feed used to value contributions in USD
    pub price_feed: String,
    /// Address of the cw20 token paid out as funder rewards
    pub reward_token: String,
    /// The native denom accepted by `Fund`
    pub denom: String,
    /// Decimals of `denom`, defaults to 6
    pub denom_decimals: Option<u8>,
    /// Minimum contribution in USD (18 decimals), defaults to 50 USD
    pub minimum_usd: Option<Uint128>,
    /// Reward paid per contributed unit in basis points, defaults to 5
    pub reward_bps: Option<u16>,
    /// Owner of the contract, defaults to the sender
    pub owner: Option<String>,
}

#[cw_serde]
pub struct Config {
    pub denom: String,
    pub denom_decimals: u8,
    pub minimum_usd: Uint128,
    pub reward_bps: u16,
}

impl Config {
    pub fn from_instantiate_msg(msg: &InstantiateMsg) -> Self {
        Config {
            denom: msg.denom.clone(),
            denom_decimals: msg.denom_decimals.unwrap_or(DEFAULT_DENOM_DECIMALS),
            minimum_usd: msg
                .minimum_usd
                .unwrap_or(Uint128::new(DEFAULT_MINIMUM_USD)),
            reward_bps: msg.reward_bps.unwrap_or(DEFAULT_REWARD_BPS),
        }
    }

    /// Used to check the validity of a Config before it is stored.
    ///
    /// * The denom cannot be empty
    /// * The reward rate cannot exceed 100%
    /// * Denom decimals cannot exceed the USD precision
    pub fn validate(&self) -> Result<(), ContractError> {
        ensure!(
            !self.denom.is_empty(),
            ContractError::Std(cosmwasm_std::StdError::generic_err("denom cannot be empty"))
        );
        ensure!(
            u128::from(self.reward_bps) <= BPS_DENOMINATOR,
            ContractError::InvalidRewardRate {
                bps: self.reward_bps
            }
        );
        ensure!(
            self.denom_decimals <= USD_DECIMALS,
            ContractError::InvalidDecimals {
                decimals: self.denom_decimals
            }
        );
        Ok(())
    }

    /// Reward accrued for contributing `amount`.
    pub fn reward_for(&self, amount: Uint128) -> Result<Uint128, ContractError> {
        Ok(amount.checked_multiply_ratio(self.reward_bps, BPS_DENOMINATOR)?)
    }
}

/// Values `amount` of a denom with `denom_decimals` in USD with 18 decimals, given a
/// `price` reported with `price_decimals`.
pub fn usd_value(
    amount: Uint128,
    price: Uint128,
    price_decimals: u8,
    denom_decimals: u8,
) -> Result<Uint128, ContractError> {
    let price = if price_decimals <= USD_DECIMALS {
        price.checked_mul(Uint128::new(pow10(
            u32::from(USD_DECIMALS - price_decimals),
        )?))?
    } else {
        price / Uint128::new(pow10(u32::from(price_decimals - USD_DECIMALS))?)
    };
    Ok(amount.checked_multiply_ratio(price, pow10(u32::from(denom_decimals))?)?)
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Contribute the attached funds
    Fund {},
    /// Sends the whole balance to the owner and clears all contributions
    Withdraw {},
    /// Same as `Withdraw`, reading the funder list in a single pass
    CheaperWithdraw {},
    /// Pays out the sender's accrued reward tokens, once
    WithdrawReward {},
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(Uint128)]
    RewardCalculator { address: String },
    #[returns(Uint128)]
    AddressToAmountFunded { address: String },
    #[returns(Addr)]
    Funder { index: u32 },
    #[returns(FundersResponse)]
    Funders {
        start_after: Option<u32>,
        limit: Option<u32>,
    },
    #[returns(Addr)]
    PriceFeed {},
    #[returns(Addr)]
    RewardToken {},
    #[returns(Addr)]
    Owner {},
    /// Version reported by the price feed
    #[returns(u64)]
    Version {},
    #[returns(Config)]
    Config {},
    /// USD value (18 decimals) of `amount` at the current price
    #[returns(Uint128)]
    ConversionRate { amount: Uint128 },
    #[returns(bool)]
    HasWithdrawnReward { address: String },
}

#[cw_serde]
pub struct FunderInfo {
    pub index: u32,
    pub address: Addr,
    pub amount: Uint128,
}

#[cw_serde]
pub struct FundersResponse {
    pub funders: Vec<FunderInfo>,
}
