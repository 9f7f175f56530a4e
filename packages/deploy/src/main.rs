use cosmwasm_std::{Addr, Uint128};
use cw_orch::prelude::*;
use cw_orch_daemon::DaemonBuilder;
use dotenv::dotenv;
use fundme_deploy::artifacts::{save_frontend_files, FrontendAddresses, DEFAULT_FRONTEND_DIR};
use fundme_deploy::chains::{get_chain, is_development_chain, network_config};
use fundme_deploy::error::DeployError;
use fundme_deploy::fund_me::{self, DeployConfig};
use fundme_deploy::report::DeploymentReport;
use fundme_deploy::charge;

fn env_var(name: &str) -> Result<String, DeployError> {
    dotenv::var(name).map_err(|_| DeployError::MissingEnv(name.to_string()))
}

fn env_amount(name: &str, default: u128) -> Result<Uint128, DeployError> {
    match dotenv::var(name) {
        Ok(value) => value
            .parse::<u128>()
            .map(Uint128::new)
            .map_err(|_| DeployError::InvalidEnv {
                name: name.to_string(),
                value,
            }),
        Err(_) => Ok(Uint128::new(default)),
    }
}

fn deploy(chain: ChainInfo) -> Result<(), DeployError> {
    let network = network_config(chain.chain_id);
    let config = DeployConfig {
        chain_id: chain.chain_id.to_string(),
        denom: chain.gas_denom.to_string(),
        development: is_development_chain(chain.chain_id),
        price_feed: dotenv::var("FUNDME_PRICE_FEED")
            .ok()
            .or_else(|| network.and_then(|n| n.price_feed).map(str::to_string)),
        reward_supply: env_amount("FUNDME_REWARD_SUPPLY", fund_me::DEFAULT_REWARD_SUPPLY)?,
        initial_reward_transfer: env_amount(
            "FUNDME_REWARD_TRANSFER",
            fund_me::DEFAULT_REWARD_TRANSFER,
        )?,
        block_confirmations: network.map(|n| n.block_confirmations).unwrap_or_default(),
    };

    let daemon = DaemonBuilder::new(chain).build()?;
    let deployer = daemon.sender_addr();
    let deployment = fund_me::deploy(daemon, &config)?;

    let frontend_dir =
        dotenv::var("FUNDME_FRONTEND_DIR").unwrap_or_else(|_| DEFAULT_FRONTEND_DIR.to_string());
    if frontend_dir.is_empty() {
        log::warn!("FUNDME_FRONTEND_DIR is empty, skipping frontend files");
    } else {
        log::info!("Updating front end...");
        save_frontend_files(
            &frontend_dir,
            &FrontendAddresses {
                contract_address: deployment.fund_me.address()?.to_string(),
                reward_token_address: deployment.reward_token.address()?.to_string(),
                price_feed_address: deployment.price_feed.to_string(),
            },
        )?;
        log::info!("Front end written!");
    }

    let report = DeploymentReport {
        chain_id: config.chain_id,
        deployer: deployer.to_string(),
        contracts: deployment.contracts()?,
    };
    let path = report.write_to_json(".")?;
    log::info!("Deployment report written to {}", path.display());
    Ok(())
}

fn charge(chain: ChainInfo) -> Result<(), DeployError> {
    let fund_me_address = Addr::unchecked(env_var("FUNDME_ADDRESS")?);
    let amount = env_amount("FUNDME_REWARD_TRANSFER", fund_me::DEFAULT_REWARD_TRANSFER)?;

    let daemon = DaemonBuilder::new(chain).build()?;
    charge::run(daemon, &fund_me_address, amount)?;
    Ok(())
}

fn main() {
    env_logger::init();
    dotenv().ok();

    let command = std::env::args().nth(1).unwrap_or_else(|| "deploy".to_string());
    let res = env_var("DEPLOYMENT_CHAIN")
        .and_then(|chain| get_chain(&chain))
        .and_then(|chain| match command.as_str() {
            "deploy" => deploy(chain),
            "charge" => charge(chain),
            other => {
                log::error!("Unknown command {other}, expected deploy or charge");
                std::process::exit(2);
            }
        });

    if let Err(e) = res {
        log::error!("{command} failed: {e}");
        std::process::exit(1);
    }
}
