pub mod devnets;
pub mod testnets;

use cw_orch::prelude::ChainInfo;
use devnets::{DEVNET_CHAINS, DEVNET_CONFIGS};
use testnets::{TESTNET_CHAINS, TESTNET_CONFIGS};

use crate::error::DeployError;

/// Per-network deployment settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NetworkConfig {
    pub chain_id: &'static str,
    /// Address of an existing price feed, required outside development chains
    pub price_feed: Option<&'static str>,
    /// Blocks to wait after deploying FundMe
    pub block_confirmations: u64,
}

/// Resolves a chain by id or by name.
pub fn get_chain(chain: &str) -> Result<ChainInfo, DeployError> {
    [TESTNET_CHAINS, DEVNET_CHAINS]
        .concat()
        .iter()
        .find(|c| c.chain_id == chain || c.network_info.chain_name == chain)
        .cloned()
        .ok_or_else(|| DeployError::UnknownChain(chain.to_string()))
}

pub fn network_config(chain_id: &str) -> Option<NetworkConfig> {
    [TESTNET_CONFIGS, DEVNET_CONFIGS]
        .concat()
        .into_iter()
        .find(|c| c.chain_id == chain_id)
}

/// Development chains get a freshly deployed mock price feed.
pub fn is_development_chain(chain_id: &str) -> bool {
    DEVNET_CHAINS.iter().any(|c| c.chain_id == chain_id)
}
