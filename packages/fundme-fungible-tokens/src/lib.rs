pub mod reward_token;
