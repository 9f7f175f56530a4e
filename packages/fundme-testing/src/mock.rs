use cosmwasm_std::{coin, Addr, Coin};
use cw_multi_test::{
    App, AppBuilder, BankKeeper, Executor, SimpleAddressGenerator, MockApiBech32, WasmKeeper,
};

pub const BECH32_PREFIX: &str = "andr";
pub const BANK_WALLET: &str = "bank";

pub type MockApp = App<BankKeeper, MockApiBech32>;

/// Creates an app with bech32 addresses and a bank wallet holding `u128::MAX` of every denom.
pub fn mock_app(denoms: Option<Vec<&str>>) -> MockApp {
    let denoms = denoms.unwrap_or(vec!["uandr", "uusd"]);
    AppBuilder::new()
        .with_api(MockApiBech32::new(BECH32_PREFIX))
        .with_wasm(WasmKeeper::new().with_address_generator(SimpleAddressGenerator))
        .build(|router, _api, storage| {
            router
                .bank
                .init_balance(
                    storage,
                    &Addr::unchecked(BANK_WALLET),
                    denoms
                        .iter()
                        .map(|d| coin(u128::MAX, *d))
                        .collect::<Vec<Coin>>(),
                )
                .unwrap();
        })
}

pub fn init_balances(app: &mut MockApp, balances: Vec<(Addr, &[Coin])>) {
    for (addr, coins) in balances {
        app.send_tokens(Addr::unchecked(BANK_WALLET), addr, coins)
            .unwrap();
    }
}
