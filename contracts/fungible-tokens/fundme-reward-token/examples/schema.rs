use cosmwasm_schema::write_api;
use fundme_fungible_tokens::reward_token::{ExecuteMsg, InstantiateMsg, QueryMsg};
use fundme_std::common::MigrateMsg;

fn main() {
    write_api! {
        instantiate: InstantiateMsg,
        query: QueryMsg,
        execute: ExecuteMsg,
        migrate: MigrateMsg,
    }
}
