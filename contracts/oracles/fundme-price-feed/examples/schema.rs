use cosmwasm_schema::write_api;
use fundme_finance::price_feed::{ExecuteMsg, InstantiateMsg, QueryMsg};
use fundme_std::common::MigrateMsg;

fn main() {
    write_api! {
        instantiate: InstantiateMsg,
        query: QueryMsg,
        execute: ExecuteMsg,
        migrate: MigrateMsg,
    }
}
