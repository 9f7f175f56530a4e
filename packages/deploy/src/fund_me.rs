use cosmwasm_std::{Addr, Int128, Uint128};
use cw20::{BalanceResponse, Cw20Coin};
use cw_orch::prelude::*;
use fundme_crowdfund::FundMeContract;
use fundme_finance::{fund_me, price_feed};
use fundme_fungible_tokens::reward_token::{self, REWARD_TOKEN_NAME, REWARD_TOKEN_SYMBOL};
use fundme_price_feed::PriceFeedContract;
use fundme_reward_token::RewardTokenContract;

use crate::{error::DeployError, report::DeployedContract};

/// Decimals of the mock feed on development chains.
pub const DECIMALS: u8 = 8;
/// 2000 USD with `DECIMALS`.
pub const INITIAL_ANSWER: i128 = 2000_00000000;
pub const REWARD_TOKEN_DECIMALS: u8 = 18;
/// One million tokens with `REWARD_TOKEN_DECIMALS`
pub const DEFAULT_REWARD_SUPPLY: u128 = 1_000_000_000_000_000_000_000_000;
/// One thousand tokens with `REWARD_TOKEN_DECIMALS`
pub const DEFAULT_REWARD_TRANSFER: u128 = 1_000_000_000_000_000_000_000;

#[derive(Debug, Clone)]
pub struct DeployConfig {
    pub chain_id: String,
    /// Native denom accepted by FundMe
    pub denom: String,
    /// Deploys the mock price feed instead of using `price_feed`
    pub development: bool,
    pub price_feed: Option<String>,
    pub reward_supply: Uint128,
    pub initial_reward_transfer: Uint128,
    pub block_confirmations: u64,
}

impl DeployConfig {
    pub fn development(chain_id: impl Into<String>, denom: impl Into<String>) -> Self {
        DeployConfig {
            chain_id: chain_id.into(),
            denom: denom.into(),
            development: true,
            price_feed: None,
            reward_supply: Uint128::new(DEFAULT_REWARD_SUPPLY),
            initial_reward_transfer: Uint128::new(DEFAULT_REWARD_TRANSFER),
            block_confirmations: 0,
        }
    }
}

pub struct FundMeDeployment<Chain> {
    pub price_feed: Addr,
    /// Set when the mock feed was deployed by this run
    pub mock_price_feed: Option<PriceFeedContract<Chain>>,
    pub reward_token: RewardTokenContract<Chain>,
    pub fund_me: FundMeContract<Chain>,
}

impl<Chain: CwEnv> FundMeDeployment<Chain> {
    pub fn fund_me_reward_balance(&self) -> Result<Uint128, DeployError> {
        reward_balance(&self.reward_token, &self.fund_me.address()?)
    }

    pub fn contracts(&self) -> Result<Vec<DeployedContract>, DeployError> {
        let price_feed = match &self.mock_price_feed {
            Some(feed) => DeployedContract {
                name: feed.id(),
                address: self.price_feed.to_string(),
                code_id: Some(feed.code_id()?),
            },
            None => DeployedContract {
                name: "price-feed".to_string(),
                address: self.price_feed.to_string(),
                code_id: None,
            },
        };
        Ok(vec![
            price_feed,
            DeployedContract {
                name: self.reward_token.id(),
                address: self.reward_token.address()?.to_string(),
                code_id: Some(self.reward_token.code_id()?),
            },
            DeployedContract {
                name: self.fund_me.id(),
                address: self.fund_me.address()?.to_string(),
                code_id: Some(self.fund_me.code_id()?),
            },
        ])
    }
}

pub fn reward_balance<Chain: CwEnv>(
    reward_token: &RewardTokenContract<Chain>,
    holder: &Addr,
) -> Result<Uint128, DeployError> {
    let res: BalanceResponse = reward_token.query(&reward_token::QueryMsg::Balance {
        address: holder.to_string(),
    })?;
    Ok(res.balance)
}

fn deploy_mock_price_feed<Chain: CwEnv>(
    chain: &Chain,
) -> Result<PriceFeedContract<Chain>, DeployError> {
    let sender = chain.sender_addr();
    let feed = PriceFeedContract::new(chain.clone());
    log::info!("Local network detected! Deploying mocks...");
    feed.upload()?;
    feed.instantiate(
        &price_feed::InstantiateMsg {
            decimals: DECIMALS,
            initial_answer: Int128::new(INITIAL_ANSWER),
        },
        Some(&sender),
        &[],
    )?;
    log::info!("Mocks Deployed! {}", feed.address()?);
    Ok(feed)
}

/// Deploys the reward token and FundMe, plus the mock price feed on development chains.
pub fn deploy<Chain: CwEnv>(
    chain: Chain,
    config: &DeployConfig,
) -> Result<FundMeDeployment<Chain>, DeployError> {
    let sender = chain.sender_addr();

    let (price_feed, mock_price_feed) = if config.development {
        let feed = deploy_mock_price_feed(&chain)?;
        (feed.address()?, Some(feed))
    } else {
        let address = config
            .price_feed
            .clone()
            .ok_or_else(|| DeployError::MissingPriceFeed {
                chain_id: config.chain_id.clone(),
            })?;
        log::info!("Using price feed {address}");
        (Addr::unchecked(address), None)
    };

    log::info!("Deploying reward token");
    let reward_token = RewardTokenContract::new(chain.clone());
    reward_token.upload()?;
    reward_token.instantiate(
        &reward_token::InstantiateMsg {
            name: REWARD_TOKEN_NAME.to_string(),
            symbol: REWARD_TOKEN_SYMBOL.to_string(),
            decimals: REWARD_TOKEN_DECIMALS,
            initial_balances: vec![Cw20Coin {
                address: sender.to_string(),
                amount: config.reward_supply,
            }],
            mint: None,
            marketing: None,
        },
        Some(&sender),
        &[],
    )?;
    log::debug!("Reward token address: {}", reward_token.address()?);

    log::info!("Deploying FundMe");
    let fund_me = FundMeContract::new(chain.clone());
    fund_me.upload()?;
    fund_me.instantiate(
        &fund_me::InstantiateMsg {
            price_feed: price_feed.to_string(),
            reward_token: reward_token.address()?.to_string(),
            denom: config.denom.clone(),
            denom_decimals: None,
            minimum_usd: None,
            reward_bps: None,
            owner: None,
        },
        Some(&sender),
        &[],
    )?;
    let fund_me_addr = fund_me.address()?;
    log::info!("FundMe deployed at {fund_me_addr}");

    if config.block_confirmations > 0 {
        log::debug!("Waiting {} blocks", config.block_confirmations);
        chain
            .wait_blocks(config.block_confirmations)
            .map_err(Into::<CwOrchError>::into)?;
    }

    let deployment = FundMeDeployment {
        price_feed,
        mock_price_feed,
        reward_token,
        fund_me,
    };

    if config.initial_reward_transfer.is_zero() {
        log::warn!("Skipping initial reward transfer");
    } else {
        transfer_rewards(
            &deployment.reward_token,
            &fund_me_addr,
            config.initial_reward_transfer,
        )?;
    }
    log::info!(
        "Deployer reward balance: {}",
        reward_balance(&deployment.reward_token, &sender)?
    );
    log::info!(
        "FundMe reward balance: {}",
        deployment.fund_me_reward_balance()?
    );

    Ok(deployment)
}

pub(crate) fn transfer_rewards<Chain: CwEnv>(
    reward_token: &RewardTokenContract<Chain>,
    recipient: &Addr,
    amount: Uint128,
) -> Result<(), DeployError> {
    log::info!("Transferring {amount} reward tokens to {recipient}");
    reward_token.execute(
        &reward_token::ExecuteMsg::Transfer {
            recipient: recipient.to_string(),
            amount,
        },
        &[],
    )?;
    Ok(())
}
