use cw_orch::{
    environment::{ChainKind, NetworkInfo},
    prelude::ChainInfo,
};

use super::NetworkConfig;

pub const ANDROMEDA_TESTNET_NETWORK: NetworkInfo = NetworkInfo {
    chain_name: "andromeda-testnet",
    pub_address_prefix: "andr",
    coin_type: 118u32,
};

pub const ANDROMEDA_TESTNET: ChainInfo = ChainInfo {
    chain_id: "galileo-4",
    gas_denom: "uandr",
    fcd_url: None,
    gas_price: 0.025,
    grpc_urls: &["http://137.184.182.11:9090/"],
    lcd_url: Some("http://137.184.182.11:1317/"),
    network_info: ANDROMEDA_TESTNET_NETWORK,
    kind: ChainKind::Testnet,
};

pub const OSMOSIS_TESTNET_NETWORK: NetworkInfo = NetworkInfo {
    chain_name: "osmosis-testnet",
    pub_address_prefix: "osmo",
    coin_type: 118u32,
};

pub const OSMOSIS_TESTNET: ChainInfo = ChainInfo {
    chain_id: "osmo-test-5",
    gas_denom: "uosmo",
    fcd_url: None,
    gas_price: 0.025,
    grpc_urls: &["https://grpc.osmotest5.osmosis.zone:443"],
    lcd_url: Some("https://lcd.osmotest5.osmosis.zone"),
    network_info: OSMOSIS_TESTNET_NETWORK,
    kind: ChainKind::Testnet,
};

pub const TESTNET_CHAINS: &[ChainInfo] = &[ANDROMEDA_TESTNET, OSMOSIS_TESTNET];

// Testnets have no shared feed deployment, FUNDME_PRICE_FEED supplies one
pub const TESTNET_CONFIGS: &[NetworkConfig] = &[
    NetworkConfig {
        chain_id: "galileo-4",
        price_feed: None,
        block_confirmations: 6,
    },
    NetworkConfig {
        chain_id: "osmo-test-5",
        price_feed: None,
        block_confirmations: 6,
    },
];
