use fundme_finance::fund_me::{ExecuteMsg, InstantiateMsg, QueryMsg};
use fundme_std::{common::MigrateMsg, contract_interface};

pub const CONTRACT_ID: &str = "fund-me";

contract_interface!(FundMeContract, CONTRACT_ID, "fundme_crowdfund.wasm");
