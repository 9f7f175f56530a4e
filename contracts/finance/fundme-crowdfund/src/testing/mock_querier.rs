use cosmwasm_std::testing::{MockApi, MockQuerier, MockStorage, MOCK_CONTRACT_ADDR};
use cosmwasm_std::{
    from_json, to_json_binary, Binary, Coin, ContractResult, Empty, Int128, OwnedDeps, Querier,
    QuerierResult, QueryRequest, SystemError, SystemResult, Uint128, WasmQuery,
};
use cw20::{BalanceResponse, Cw20QueryMsg};
use fundme_finance::price_feed::{QueryMsg as PriceFeedQueryMsg, RoundData};
use std::collections::HashMap;

pub const MOCK_DECIMALS: u8 = 8;
pub const MOCK_ANSWER: i128 = 2000_00000000;
pub const MOCK_FEED_VERSION: u64 = 0;

pub type TestDeps = OwnedDeps<MockStorage, MockApi, WasmMockQuerier>;

/// Dependencies whose querier answers for a price feed at `addr_make("price_feed")`
/// and a reward token at `addr_make("reward_token")`.
pub fn mock_dependencies_custom(contract_balance: &[Coin]) -> TestDeps {
    let api = MockApi::default();
    let custom_querier = WasmMockQuerier::new(
        MockQuerier::new(&[(MOCK_CONTRACT_ADDR, contract_balance)]),
        api.addr_make("price_feed").into_string(),
        api.addr_make("reward_token").into_string(),
    );
    OwnedDeps {
        storage: MockStorage::default(),
        api,
        querier: custom_querier,
        custom_query_type: std::marker::PhantomData,
    }
}

pub struct WasmMockQuerier {
    pub base: MockQuerier<Empty>,
    price_feed: String,
    reward_token: String,
    answer: Int128,
    // reward token balances by holder
    token_balances: HashMap<String, Uint128>,
}

impl Querier for WasmMockQuerier {
    fn raw_query(&self, bin_request: &[u8]) -> QuerierResult {
        let request: QueryRequest<Empty> = match from_json(bin_request) {
            Ok(v) => v,
            Err(e) => {
                return SystemResult::Err(SystemError::InvalidRequest {
                    error: format!("Parsing query request: {e}"),
                    request: bin_request.into(),
                })
            }
        };
        self.handle_query(&request)
    }
}

impl WasmMockQuerier {
    pub fn handle_query(&self, request: &QueryRequest<Empty>) -> QuerierResult {
        match &request {
            QueryRequest::Wasm(WasmQuery::Smart { contract_addr, msg }) => {
                if *contract_addr == self.price_feed {
                    self.handle_price_feed_query(msg)
                } else if *contract_addr == self.reward_token {
                    self.handle_token_query(msg)
                } else {
                    SystemResult::Err(SystemError::NoSuchContract {
                        addr: contract_addr.clone(),
                    })
                }
            }
            _ => self.base.handle_query(request),
        }
    }

    fn handle_price_feed_query(&self, msg: &Binary) -> QuerierResult {
        let round = RoundData {
            round_id: 1,
            answer: self.answer,
            started_at: 0,
            updated_at: 0,
            answered_in_round: 1,
        };
        let res = match from_json(msg).unwrap() {
            PriceFeedQueryMsg::Decimals {} => to_json_binary(&MOCK_DECIMALS),
            PriceFeedQueryMsg::Version {} => to_json_binary(&MOCK_FEED_VERSION),
            PriceFeedQueryMsg::LatestRoundData {} => to_json_binary(&round),
            PriceFeedQueryMsg::LatestAnswer {} => to_json_binary(&self.answer),
            _ => panic!("Unsupported price feed query"),
        };
        SystemResult::Ok(ContractResult::Ok(res.unwrap()))
    }

    fn handle_token_query(&self, msg: &Binary) -> QuerierResult {
        match from_json(msg).unwrap() {
            Cw20QueryMsg::Balance { address } => {
                let balance = self
                    .token_balances
                    .get(&address)
                    .copied()
                    .unwrap_or_default();
                SystemResult::Ok(ContractResult::Ok(
                    to_json_binary(&BalanceResponse { balance }).unwrap(),
                ))
            }
            _ => panic!("Unsupported cw20 query"),
        }
    }
}

impl WasmMockQuerier {
    pub fn new(base: MockQuerier<Empty>, price_feed: String, reward_token: String) -> Self {
        WasmMockQuerier {
            base,
            price_feed,
            reward_token,
            answer: Int128::new(MOCK_ANSWER),
            token_balances: HashMap::new(),
        }
    }

    pub fn with_answer(&mut self, answer: i128) {
        self.answer = Int128::new(answer);
    }

    pub fn with_token_balance(&mut self, holder: impl Into<String>, balance: u128) {
        self.token_balances
            .insert(holder.into(), Uint128::new(balance));
    }
}
