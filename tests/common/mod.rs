use cosmwasm_std::{coin, Addr, Uint128};
use cw20::Cw20Coin;
use fundme_crowdfund::mock::{mock_fundme_crowdfund, MockFundMe};
use fundme_price_feed::mock::{
    mock_fundme_price_feed, MockPriceFeed, MOCK_DECIMALS, MOCK_INITIAL_ANSWER,
};
use fundme_reward_token::mock::{mock_fundme_reward_token, MockRewardToken, MOCK_INITIAL_SUPPLY};
use fundme_testing::{init_balances, mock_app, MockApp, MockContract};
use rstest::fixture;

pub const DENOM: &str = "uandr";
/// One whole coin with 6 decimals, worth 2000 USD at the mock answer
pub const SEND_VALUE: u128 = 1_000_000;
pub const INITIAL_WALLET_BALANCE: u128 = 1_000 * SEND_VALUE;
/// Reward tokens moved to FundMe right after deployment
pub const INITIAL_REWARD_TRANSFER: u128 = 1_000_000_000_000_000_000_000;

/// FundMe deployed next to a mock price feed and a reward token, with funded wallets.
pub struct FundMeEnv {
    pub app: MockApp,
    pub deployer: Addr,
    pub price_feed: MockPriceFeed,
    pub reward_token: MockRewardToken,
    pub fund_me: MockFundMe,
}

impl FundMeEnv {
    /// Creates a wallet holding `INITIAL_WALLET_BALANCE` of the funding denom.
    pub fn wallet(&mut self, name: &str) -> Addr {
        let addr = self.app.api().addr_make(name);
        init_balances(
            &mut self.app,
            vec![(addr.clone(), &[coin(INITIAL_WALLET_BALANCE, DENOM)])],
        );
        addr
    }

    pub fn balance(&self, addr: &Addr) -> Uint128 {
        self.app.wrap().query_balance(addr, DENOM).unwrap().amount
    }
}

#[fixture]
pub fn fund_me_env() -> FundMeEnv {
    let mut app = mock_app(Some(vec![DENOM]));
    let deployer = app.api().addr_make("deployer");
    init_balances(
        &mut app,
        vec![(deployer.clone(), &[coin(INITIAL_WALLET_BALANCE, DENOM)])],
    );

    let price_feed_code = app.store_code(mock_fundme_price_feed());
    let reward_token_code = app.store_code(mock_fundme_reward_token());
    let fund_me_code = app.store_code(mock_fundme_crowdfund());

    let price_feed = MockPriceFeed::instantiate(
        &mut app,
        price_feed_code,
        deployer.clone(),
        MOCK_DECIMALS,
        MOCK_INITIAL_ANSWER,
    );
    let reward_token = MockRewardToken::instantiate(
        &mut app,
        reward_token_code,
        deployer.clone(),
        vec![Cw20Coin {
            address: deployer.to_string(),
            amount: Uint128::new(MOCK_INITIAL_SUPPLY),
        }],
    );
    let fund_me = MockFundMe::instantiate(
        &mut app,
        fund_me_code,
        deployer.clone(),
        price_feed.addr(),
        reward_token.addr(),
        DENOM,
    );

    reward_token
        .execute_transfer(
            &mut app,
            deployer.clone(),
            fund_me.addr(),
            INITIAL_REWARD_TRANSFER,
        )
        .unwrap();

    FundMeEnv {
        app,
        deployer,
        price_feed,
        reward_token,
        fund_me,
    }
}
