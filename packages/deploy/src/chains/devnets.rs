use cw_orch::{
    environment::{ChainKind, NetworkInfo},
    prelude::ChainInfo,
};

use super::NetworkConfig;

pub const LOCAL_ANDROMEDA_NETWORK: NetworkInfo = NetworkInfo {
    chain_name: "localandromeda",
    pub_address_prefix: "andr",
    coin_type: 118u32,
};

pub const LOCAL_ANDROMEDA: ChainInfo = ChainInfo {
    chain_id: "localandromeda-1",
    gas_denom: "uandr",
    fcd_url: None,
    gas_price: 0.025,
    grpc_urls: &["http://localhost:9090/"],
    lcd_url: Some("http://localhost:1317/"),
    network_info: LOCAL_ANDROMEDA_NETWORK,
    kind: ChainKind::Local,
};

pub const ANDROMEDA_DEVNET_NETWORK: NetworkInfo = NetworkInfo {
    chain_name: "andromeda-devnet",
    pub_address_prefix: "andr",
    coin_type: 118u32,
};

pub const ANDROMEDA_DEVNET: ChainInfo = ChainInfo {
    chain_id: "localandromedaa-1",
    gas_denom: "uandr",
    fcd_url: None,
    gas_price: 0.025,
    grpc_urls: &["http://164.90.212.168:20311/"],
    lcd_url: Some("http://164.90.212.168:20211/"),
    network_info: ANDROMEDA_DEVNET_NETWORK,
    kind: ChainKind::Testnet,
};

pub const WASM_DEVNET_NETWORK: NetworkInfo = NetworkInfo {
    chain_name: "wasm-devnet",
    pub_address_prefix: "wasm",
    coin_type: 118u32,
};

pub const WASM_DEVNET: ChainInfo = ChainInfo {
    chain_id: "localwasma-1",
    gas_denom: "ustake",
    fcd_url: None,
    gas_price: 0.025,
    grpc_urls: &["http://164.90.212.168:20341/"],
    lcd_url: Some("http://164.90.212.168:20241/"),
    network_info: WASM_DEVNET_NETWORK,
    kind: ChainKind::Testnet,
};

/// Chains on which the mock price feed is deployed.
pub const DEVNET_CHAINS: &[ChainInfo] = &[LOCAL_ANDROMEDA, ANDROMEDA_DEVNET, WASM_DEVNET];

pub const DEVNET_CONFIGS: &[NetworkConfig] = &[
    NetworkConfig {
        chain_id: "localandromeda-1",
        price_feed: None,
        block_confirmations: 0,
    },
    NetworkConfig {
        chain_id: "localandromedaa-1",
        price_feed: None,
        block_confirmations: 0,
    },
    NetworkConfig {
        chain_id: "localwasma-1",
        price_feed: None,
        block_confirmations: 0,
    },
];
