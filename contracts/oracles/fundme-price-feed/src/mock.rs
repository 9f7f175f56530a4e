#![cfg(all(not(target_arch = "wasm32"), feature = "testing"))]
use crate::contract::{execute, instantiate, migrate, query};
use cosmwasm_std::{Addr, Empty, Int128};
use cw_multi_test::{Contract, ContractWrapper, Executor};
use fundme_finance::price_feed::{ExecuteMsg, InstantiateMsg, QueryMsg, RoundData};
use fundme_testing::{mock_contract, mock_contract::ExecuteResult, MockApp, MockContract};

/// Decimals reported by the feed deployed on development chains.
pub const MOCK_DECIMALS: u8 = 8;
/// 2000 USD with `MOCK_DECIMALS`.
pub const MOCK_INITIAL_ANSWER: i128 = 2000_00000000;

pub struct MockPriceFeed(Addr);
mock_contract!(MockPriceFeed, ExecuteMsg, QueryMsg);

impl MockPriceFeed {
    pub fn instantiate(
        app: &mut MockApp,
        code_id: u64,
        sender: Addr,
        decimals: u8,
        initial_answer: i128,
    ) -> Self {
        let msg = mock_price_feed_instantiate_msg(decimals, initial_answer);
        let res = app.instantiate_contract(code_id, sender, &msg, &[], "FundMe price feed", None);

        Self(res.unwrap())
    }

    pub fn execute_update_answer(
        &self,
        app: &mut MockApp,
        sender: Addr,
        answer: i128,
    ) -> ExecuteResult {
        self.execute(app, &mock_update_answer_msg(answer), sender, &[])
    }

    pub fn query_latest_round_data(&self, app: &MockApp) -> RoundData {
        self.query(app, QueryMsg::LatestRoundData {})
    }

    pub fn query_decimals(&self, app: &MockApp) -> u8 {
        self.query(app, QueryMsg::Decimals {})
    }
}

pub fn mock_fundme_price_feed() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new_with_empty(execute, instantiate, query).with_migrate(migrate);
    Box::new(contract)
}

pub fn mock_price_feed_instantiate_msg(decimals: u8, initial_answer: i128) -> InstantiateMsg {
    InstantiateMsg {
        decimals,
        initial_answer: Int128::new(initial_answer),
    }
}

pub fn mock_update_answer_msg(answer: i128) -> ExecuteMsg {
    ExecuteMsg::UpdateAnswer {
        answer: Int128::new(answer),
    }
}
