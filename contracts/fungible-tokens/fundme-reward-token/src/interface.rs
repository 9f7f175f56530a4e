use fundme_fungible_tokens::reward_token::{ExecuteMsg, InstantiateMsg, QueryMsg};
use fundme_std::{common::MigrateMsg, contract_interface};

pub const CONTRACT_ID: &str = "reward-token";

contract_interface!(RewardTokenContract, CONTRACT_ID, "fundme_reward_token.wasm");
