use fundme_finance::price_feed::{ExecuteMsg, InstantiateMsg, QueryMsg};
use fundme_std::{common::MigrateMsg, contract_interface};

pub const CONTRACT_ID: &str = "price-feed";

contract_interface!(PriceFeedContract, CONTRACT_ID, "fundme_price_feed.wasm");
