use cosmwasm_std::{Addr, Uint128};
use cw_orch::prelude::*;
use fundme_crowdfund::FundMeContract;
use fundme_finance::fund_me::QueryMsg;
use fundme_reward_token::RewardTokenContract;

use crate::{
    error::DeployError,
    fund_me::{reward_balance, transfer_rewards},
};

/// Tops up the reward tokens held by an existing FundMe. Returns its new balance.
pub fn run<Chain: CwEnv>(
    chain: Chain,
    fund_me_address: &Addr,
    amount: Uint128,
) -> Result<Uint128, DeployError> {
    let fund_me = FundMeContract::new(chain.clone());
    fund_me.set_address(fund_me_address);

    let reward_token_address: Addr = fund_me.query(&QueryMsg::RewardToken {})?;
    let reward_token = RewardTokenContract::new(chain);
    reward_token.set_address(&reward_token_address);

    transfer_rewards(&reward_token, fund_me_address, amount)?;

    let balance = reward_balance(&reward_token, fund_me_address)?;
    log::info!("FundMe reward balance: {balance}");
    Ok(balance)
}
