#![cfg(all(not(target_arch = "wasm32"), feature = "testing"))]

use crate::contract::{execute, instantiate, migrate, query};
use cosmwasm_std::{Addr, Empty, Uint128};
use cw20::{BalanceResponse, Cw20Coin, MinterResponse};
use cw_multi_test::{Contract, ContractWrapper, Executor};
use fundme_fungible_tokens::reward_token::{
    ExecuteMsg, InstantiateMsg, QueryMsg, REWARD_TOKEN_NAME, REWARD_TOKEN_SYMBOL,
};
use fundme_testing::{mock_contract, mock_contract::ExecuteResult, MockApp, MockContract};

/// Supply minted to the deployer of the reward token.
pub const MOCK_INITIAL_SUPPLY: u128 = 1_000_000_000_000_000_000_000_000;

pub struct MockRewardToken(Addr);
mock_contract!(MockRewardToken, ExecuteMsg, QueryMsg);

impl MockRewardToken {
    pub fn instantiate(
        app: &mut MockApp,
        code_id: u64,
        sender: Addr,
        initial_balances: Vec<Cw20Coin>,
    ) -> Self {
        let msg = mock_reward_token_instantiate_msg(initial_balances, None);
        let res = app.instantiate_contract(code_id, sender, &msg, &[], "Reward token", None);

        Self(res.unwrap())
    }

    pub fn execute_transfer(
        &self,
        app: &mut MockApp,
        sender: Addr,
        recipient: &Addr,
        amount: impl Into<Uint128>,
    ) -> ExecuteResult {
        self.execute(app, &mock_reward_token_transfer(recipient, amount), sender, &[])
    }

    pub fn query_balance(&self, app: &MockApp, address: impl Into<String>) -> Uint128 {
        let res: BalanceResponse = self.query(app, mock_get_reward_token_balance(address));
        res.balance
    }
}

pub fn mock_fundme_reward_token() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new_with_empty(execute, instantiate, query).with_migrate(migrate);
    Box::new(contract)
}

pub fn mock_reward_token_instantiate_msg(
    initial_balances: Vec<Cw20Coin>,
    mint: Option<MinterResponse>,
) -> InstantiateMsg {
    InstantiateMsg {
        name: REWARD_TOKEN_NAME.to_string(),
        symbol: REWARD_TOKEN_SYMBOL.to_string(),
        decimals: 18,
        initial_balances,
        mint,
        marketing: None,
    }
}

pub fn mock_get_reward_token_balance(address: impl Into<String>) -> QueryMsg {
    QueryMsg::Balance {
        address: address.into(),
    }
}

pub fn mock_reward_token_transfer(recipient: &Addr, amount: impl Into<Uint128>) -> ExecuteMsg {
    ExecuteMsg::Transfer {
        recipient: recipient.to_string(),
        amount: amount.into(),
    }
}
