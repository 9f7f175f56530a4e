#![cfg(all(not(target_arch = "wasm32"), feature = "testing"))]

use crate::contract::{execute, instantiate, migrate, query};
use cosmwasm_std::{Addr, Coin, Empty, Uint128};
use cw_multi_test::{Contract, ContractWrapper, Executor};
use fundme_finance::fund_me::{Config, ExecuteMsg, FundersResponse, InstantiateMsg, QueryMsg};
use fundme_testing::{
    mock_contract,
    mock_contract::{AnyResult, ExecuteResult},
    MockApp, MockContract,
};

pub struct MockFundMe(Addr);
mock_contract!(MockFundMe, ExecuteMsg, QueryMsg);

impl MockFundMe {
    pub fn instantiate(
        app: &mut MockApp,
        code_id: u64,
        sender: Addr,
        price_feed: &Addr,
        reward_token: &Addr,
        denom: &str,
    ) -> Self {
        let msg = mock_fund_me_instantiate_msg(price_feed, reward_token, denom);
        let res = app.instantiate_contract(code_id, sender, &msg, &[], "FundMe", None);

        Self(res.unwrap())
    }

    pub fn execute_fund(&self, app: &mut MockApp, sender: Addr, funds: &[Coin]) -> ExecuteResult {
        self.execute(app, &mock_fund_msg(), sender, funds)
    }

    pub fn execute_withdraw(&self, app: &mut MockApp, sender: Addr) -> ExecuteResult {
        self.execute(app, &mock_withdraw_msg(), sender, &[])
    }

    pub fn execute_cheaper_withdraw(&self, app: &mut MockApp, sender: Addr) -> ExecuteResult {
        self.execute(app, &ExecuteMsg::CheaperWithdraw {}, sender, &[])
    }

    pub fn execute_withdraw_reward(&self, app: &mut MockApp, sender: Addr) -> ExecuteResult {
        self.execute(app, &mock_withdraw_reward_msg(), sender, &[])
    }

    pub fn query_price_feed(&self, app: &MockApp) -> Addr {
        self.query(app, QueryMsg::PriceFeed {})
    }

    pub fn query_owner(&self, app: &MockApp) -> Addr {
        self.query(app, QueryMsg::Owner {})
    }

    pub fn query_version(&self, app: &MockApp) -> u64 {
        self.query(app, QueryMsg::Version {})
    }

    pub fn query_config(&self, app: &MockApp) -> Config {
        self.query(app, QueryMsg::Config {})
    }

    pub fn query_amount_funded(&self, app: &MockApp, address: &Addr) -> Uint128 {
        self.query(
            app,
            QueryMsg::AddressToAmountFunded {
                address: address.to_string(),
            },
        )
    }

    pub fn query_funder(&self, app: &MockApp, index: u32) -> AnyResult<Addr> {
        self.try_query(app, QueryMsg::Funder { index })
    }

    pub fn query_funders(
        &self,
        app: &MockApp,
        start_after: Option<u32>,
        limit: Option<u32>,
    ) -> FundersResponse {
        self.query(app, QueryMsg::Funders { start_after, limit })
    }

    pub fn query_reward(&self, app: &MockApp, address: &Addr) -> Uint128 {
        self.query(
            app,
            QueryMsg::RewardCalculator {
                address: address.to_string(),
            },
        )
    }

    pub fn query_has_withdrawn_reward(&self, app: &MockApp, address: &Addr) -> bool {
        self.query(
            app,
            QueryMsg::HasWithdrawnReward {
                address: address.to_string(),
            },
        )
    }

    pub fn query_conversion_rate(&self, app: &MockApp, amount: impl Into<Uint128>) -> Uint128 {
        self.query(
            app,
            QueryMsg::ConversionRate {
                amount: amount.into(),
            },
        )
    }
}

pub fn mock_fundme_crowdfund() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new_with_empty(execute, instantiate, query).with_migrate(migrate);
    Box::new(contract)
}

pub fn mock_fund_me_instantiate_msg(
    price_feed: &Addr,
    reward_token: &Addr,
    denom: &str,
) -> InstantiateMsg {
    InstantiateMsg {
        price_feed: price_feed.to_string(),
        reward_token: reward_token.to_string(),
        denom: denom.to_string(),
        denom_decimals: None,
        minimum_usd: None,
        reward_bps: None,
        owner: None,
    }
}

pub fn mock_fund_msg() -> ExecuteMsg {
    ExecuteMsg::Fund {}
}

pub fn mock_withdraw_msg() -> ExecuteMsg {
    ExecuteMsg::Withdraw {}
}

pub fn mock_withdraw_reward_msg() -> ExecuteMsg {
    ExecuteMsg::WithdrawReward {}
}
