use cw_orch::prelude::CwOrchError;
use cw_orch_daemon::DaemonError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeployError {
    #[error("{0}")]
    CwOrchError(#[from] CwOrchError),

    #[error("{0}")]
    DaemonError(#[from] DaemonError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown chain: {0}")]
    UnknownChain(String),

    #[error("No price feed configured for {chain_id}, set FUNDME_PRICE_FEED")]
    MissingPriceFeed { chain_id: String },

    #[error("{0} must be set")]
    MissingEnv(String),

    #[error("Invalid value for {name}: {value}")]
    InvalidEnv { name: String, value: String },
}
