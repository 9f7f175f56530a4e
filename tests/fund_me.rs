mod common;

use common::{fund_me_env, FundMeEnv, DENOM, INITIAL_REWARD_TRANSFER, SEND_VALUE};
use cosmwasm_std::{coin, Addr, Event, Uint128};
use fundme_finance::fund_me::{
    DEFAULT_REWARD_BPS, FUNDED_EVENT, WITHDRAW_FUND_EVENT, WITHDRAW_REWARD_EVENT,
};
use fundme_std::error::ContractError;
use fundme_testing::MockContract;
use rstest::rstest;

fn wasm_event(ty: &str) -> Event {
    Event::new(format!("wasm-{ty}"))
}

fn expected_reward(amount: u128) -> Uint128 {
    Uint128::new(amount * u128::from(DEFAULT_REWARD_BPS) / 10_000)
}

fn fund_with_wallets(env: &mut FundMeEnv, count: usize) -> Vec<Addr> {
    let funders: Vec<Addr> = (0..count).map(|i| env.wallet(&format!("funder{i}"))).collect();
    for funder in funders.iter() {
        env.fund_me
            .execute_fund(&mut env.app, funder.clone(), &[coin(SEND_VALUE, DENOM)])
            .unwrap();
    }
    funders
}

#[rstest]
fn test_constructor(fund_me_env: FundMeEnv) {
    let env = fund_me_env;
    assert_eq!(
        env.fund_me.query_price_feed(&env.app),
        env.price_feed.addr().clone()
    );
    assert_eq!(env.fund_me.query_owner(&env.app), env.deployer);
    assert_eq!(
        env.reward_token.query_balance(&env.app, env.fund_me.addr()),
        Uint128::new(INITIAL_REWARD_TRANSFER)
    );
}

#[rstest]
fn test_fund_fails_without_enough_funds(fund_me_env: FundMeEnv) {
    let mut env = fund_me_env;
    let funder = env.deployer.clone();

    let err: ContractError = env
        .fund_me
        .execute_fund(&mut env.app, funder.clone(), &[])
        .unwrap_err()
        .downcast()
        .unwrap();
    assert_eq!(
        err,
        ContractError::BelowMinimumContribution {
            denom: DENOM.to_string()
        }
    );

    // 0.02 coins is 40 USD
    let err: ContractError = env
        .fund_me
        .execute_fund(&mut env.app, funder, &[coin(20_000, DENOM)])
        .unwrap_err()
        .downcast()
        .unwrap();
    assert_eq!(
        err,
        ContractError::BelowMinimumContribution {
            denom: DENOM.to_string()
        }
    );
}

#[rstest]
fn test_fund_follows_price_updates(fund_me_env: FundMeEnv) {
    let mut env = fund_me_env;
    let funder = env.wallet("funder");

    // A whole coin drops to 40 USD
    env.price_feed
        .execute_update_answer(&mut env.app, env.deployer.clone(), 40_00000000)
        .unwrap();
    assert_eq!(
        env.fund_me.query_conversion_rate(&env.app, SEND_VALUE),
        Uint128::new(40_000000000000000000)
    );

    let err: ContractError = env
        .fund_me
        .execute_fund(&mut env.app, funder, &[coin(SEND_VALUE, DENOM)])
        .unwrap_err()
        .downcast()
        .unwrap();
    assert_eq!(
        err,
        ContractError::BelowMinimumContribution {
            denom: DENOM.to_string()
        }
    );
}

#[rstest]
fn test_fund(fund_me_env: FundMeEnv) {
    let mut env = fund_me_env;
    let funder = env.wallet("funder");
    let start_balance = env.balance(env.fund_me.addr());

    let res = env
        .fund_me
        .execute_fund(&mut env.app, funder.clone(), &[coin(SEND_VALUE, DENOM)])
        .unwrap();

    assert!(res.has_event(
        &wasm_event(FUNDED_EVENT)
            .add_attribute("funder", funder.to_string())
            .add_attribute("amount", SEND_VALUE.to_string())
    ));
    assert_eq!(
        env.balance(env.fund_me.addr()),
        start_balance + Uint128::new(SEND_VALUE)
    );
    assert_eq!(
        env.fund_me.query_amount_funded(&env.app, &funder),
        Uint128::new(SEND_VALUE)
    );
    assert_eq!(env.fund_me.query_funder(&env.app, 0).unwrap(), funder);
}

#[rstest]
fn test_withdraw_only_owner(fund_me_env: FundMeEnv) {
    let mut env = fund_me_env;
    let attacker = fund_with_wallets(&mut env, 1).remove(0);

    let err: ContractError = env
        .fund_me
        .execute_withdraw(&mut env.app, attacker.clone())
        .unwrap_err()
        .downcast()
        .unwrap();
    assert_eq!(err, ContractError::NotOwner {});

    let err: ContractError = env
        .fund_me
        .execute_cheaper_withdraw(&mut env.app, attacker)
        .unwrap_err()
        .downcast()
        .unwrap();
    assert_eq!(err, ContractError::NotOwner {});
}

#[rstest]
fn test_withdraw_single_funder(fund_me_env: FundMeEnv) {
    let mut env = fund_me_env;
    let funder = fund_with_wallets(&mut env, 1).remove(0);
    let owner = env.deployer.clone();

    let start_contract_balance = env.balance(env.fund_me.addr());
    let start_owner_balance = env.balance(&owner);

    let res = env
        .fund_me
        .execute_withdraw(&mut env.app, owner.clone())
        .unwrap();
    assert!(res.has_event(
        &wasm_event(WITHDRAW_FUND_EVENT)
            .add_attribute("amount", start_contract_balance.to_string())
    ));

    assert_eq!(env.balance(env.fund_me.addr()), Uint128::zero());
    assert_eq!(
        env.balance(&owner),
        start_owner_balance + start_contract_balance
    );
    assert_eq!(
        env.fund_me.query_amount_funded(&env.app, &funder),
        Uint128::zero()
    );
}

#[rstest]
#[case::withdraw(false)]
#[case::cheaper_withdraw(true)]
fn test_withdraw_multiple_funders(fund_me_env: FundMeEnv, #[case] cheaper: bool) {
    let mut env = fund_me_env;
    let funders = fund_with_wallets(&mut env, 6);
    let owner = env.deployer.clone();

    let start_contract_balance = env.balance(env.fund_me.addr());
    let start_owner_balance = env.balance(&owner);
    assert_eq!(start_contract_balance, Uint128::new(6 * SEND_VALUE));

    if cheaper {
        env.fund_me
            .execute_cheaper_withdraw(&mut env.app, owner.clone())
            .unwrap();
    } else {
        env.fund_me
            .execute_withdraw(&mut env.app, owner.clone())
            .unwrap();
    }

    assert_eq!(env.balance(env.fund_me.addr()), Uint128::zero());
    assert_eq!(
        env.balance(&owner),
        start_owner_balance + start_contract_balance
    );

    // Funders are reset
    assert!(env.fund_me.query_funder(&env.app, 0).is_err());
    assert!(env
        .fund_me
        .query_funders(&env.app, None, None)
        .funders
        .is_empty());
    for funder in funders.iter() {
        assert_eq!(
            env.fund_me.query_amount_funded(&env.app, funder),
            Uint128::zero()
        );
    }
}

#[rstest]
fn test_withdraw_empty_balance(fund_me_env: FundMeEnv) {
    let mut env = fund_me_env;
    let owner = env.deployer.clone();
    let start_owner_balance = env.balance(&owner);

    let res = env
        .fund_me
        .execute_withdraw(&mut env.app, owner.clone())
        .unwrap();
    assert!(res.has_event(&wasm_event(WITHDRAW_FUND_EVENT).add_attribute("amount", "0")));
    assert_eq!(env.balance(&owner), start_owner_balance);
}

#[rstest]
fn test_version(fund_me_env: FundMeEnv) {
    let env = fund_me_env;
    assert_eq!(env.fund_me.query_version(&env.app), 0);
}

#[rstest]
fn test_reward_calculator(fund_me_env: FundMeEnv) {
    let mut env = fund_me_env;
    let funder = fund_with_wallets(&mut env, 1).remove(0);

    assert_eq!(
        env.fund_me.query_reward(&env.app, &funder),
        expected_reward(SEND_VALUE)
    );
    assert_eq!(
        env.fund_me.query_reward(&env.app, &env.deployer),
        Uint128::zero()
    );
}

#[rstest]
fn test_withdraw_reward(fund_me_env: FundMeEnv) {
    let mut env = fund_me_env;
    let funder = fund_with_wallets(&mut env, 1).remove(0);
    let reward = expected_reward(SEND_VALUE);

    let res = env
        .fund_me
        .execute_withdraw_reward(&mut env.app, funder.clone())
        .unwrap();
    assert!(res.has_event(
        &wasm_event(WITHDRAW_REWARD_EVENT)
            .add_attribute("funder", funder.to_string())
            .add_attribute("amount", reward.to_string())
    ));

    assert_eq!(env.reward_token.query_balance(&env.app, &funder), reward);
    assert_eq!(
        env.reward_token.query_balance(&env.app, env.fund_me.addr()),
        Uint128::new(INITIAL_REWARD_TRANSFER) - reward
    );
    assert!(env.fund_me.query_has_withdrawn_reward(&env.app, &funder));
}

#[rstest]
fn test_withdraw_reward_without_contribution(fund_me_env: FundMeEnv) {
    let mut env = fund_me_env;
    let stranger = env.wallet("stranger");

    let err: ContractError = env
        .fund_me
        .execute_withdraw_reward(&mut env.app, stranger)
        .unwrap_err()
        .downcast()
        .unwrap();
    assert_eq!(err, ContractError::NoContribution {});
}

#[rstest]
fn test_withdraw_reward_twice(fund_me_env: FundMeEnv) {
    let mut env = fund_me_env;
    let funder = fund_with_wallets(&mut env, 1).remove(0);

    env.fund_me
        .execute_withdraw_reward(&mut env.app, funder.clone())
        .unwrap();
    let err: ContractError = env
        .fund_me
        .execute_withdraw_reward(&mut env.app, funder)
        .unwrap_err()
        .downcast()
        .unwrap();
    assert_eq!(err, ContractError::RewardAlreadyWithdrawn {});
}

#[rstest]
fn test_reward_survives_withdraw(fund_me_env: FundMeEnv) {
    let mut env = fund_me_env;
    let funder = fund_with_wallets(&mut env, 1).remove(0);
    env.fund_me
        .execute_withdraw(&mut env.app, env.deployer.clone())
        .unwrap();

    env.fund_me
        .execute_withdraw_reward(&mut env.app, funder.clone())
        .unwrap();
    assert_eq!(
        env.reward_token.query_balance(&env.app, &funder),
        expected_reward(SEND_VALUE)
    );
}

#[rstest]
fn test_reward_over_repeated_contributions(fund_me_env: FundMeEnv) {
    let mut env = fund_me_env;
    let funder = env.wallet("funder");

    // Just above the 50 USD minimum, twice
    for _ in 0..2 {
        env.fund_me
            .execute_fund(&mut env.app, funder.clone(), &[coin(25_001, DENOM)])
            .unwrap();
    }
    assert_eq!(
        env.fund_me.query_reward(&env.app, &funder),
        expected_reward(50_002)
    );

    env.fund_me
        .execute_withdraw_reward(&mut env.app, funder.clone())
        .unwrap();
    assert_eq!(
        env.reward_token.query_balance(&env.app, &funder),
        expected_reward(50_002)
    );
}

#[rstest]
fn test_fund_after_reward_withdrawn(fund_me_env: FundMeEnv) {
    let mut env = fund_me_env;
    let funder = fund_with_wallets(&mut env, 1).remove(0);
    env.fund_me
        .execute_withdraw_reward(&mut env.app, funder.clone())
        .unwrap();

    env.fund_me
        .execute_fund(&mut env.app, funder.clone(), &[coin(SEND_VALUE, DENOM)])
        .unwrap();
    assert_eq!(
        env.fund_me.query_amount_funded(&env.app, &funder),
        Uint128::new(2 * SEND_VALUE)
    );
    assert_eq!(env.fund_me.query_reward(&env.app, &funder), Uint128::zero());

    let err: ContractError = env
        .fund_me
        .execute_withdraw_reward(&mut env.app, funder.clone())
        .unwrap_err()
        .downcast()
        .unwrap();
    assert_eq!(err, ContractError::RewardAlreadyWithdrawn {});
    assert_eq!(
        env.reward_token.query_balance(&env.app, &funder),
        expected_reward(SEND_VALUE)
    );
}
