use cosmwasm_std::{CheckedMultiplyRatioError, ConversionOverflowError, OverflowError, StdError};
use cw20_base::ContractError as Cw20ContractError;
use cw_utils::PaymentError;
use std::convert::From;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Payment(#[from] PaymentError),

    #[error("Unauthorized")]
    Unauthorized {},

    #[error("NotOwner")]
    NotOwner {},

    #[error("You need to spend more {denom}!")]
    BelowMinimumContribution { denom: String },

    #[error("You need to fund first!")]
    NoContribution {},

    #[error("NoRewardToClaim: the contribution earns no reward")]
    NoRewardToClaim {},

    #[error("You already withdrew your rewards!")]
    RewardAlreadyWithdrawn {},

    #[error("InsufficientRewardBalance: required {required}, available {available}")]
    InsufficientRewardBalance { required: String, available: String },

    #[error("InvalidPrice: {price}")]
    InvalidPrice { price: String },

    #[error("FunderNotFound: {index}")]
    FunderNotFound { index: u32 },

    #[error("RoundNotFound: {round_id}")]
    RoundNotFound { round_id: u64 },

    #[error("InvalidRewardRate: {bps} exceeds 10000 basis points")]
    InvalidRewardRate { bps: u16 },

    #[error("InvalidDecimals: {decimals}")]
    InvalidDecimals { decimals: u8 },

    #[error("Overflow")]
    Overflow {},

    #[error("CannotMigrate: {previous_contract}")]
    CannotMigrate { previous_contract: String },

    #[error("Cannot set to own account")]
    CannotSetOwnAccount {},

    #[error("Invalid zero amount")]
    InvalidZeroAmount {},

    #[error("Allowance is expired")]
    Expired {},

    #[error("No allowance for this account")]
    NoAllowance {},

    #[error("Minting cannot exceed the cap")]
    CannotExceedCap {},

    #[error("Logo binary data exceeds 5KB limit")]
    LogoTooBig {},

    #[error("Invalid xml preamble for SVG")]
    InvalidXmlPreamble {},

    #[error("Invalid png header")]
    InvalidPngHeader {},

    #[error("Invalid expiration value")]
    InvalidExpiration {},

    #[error("Duplicate initial balance addresses")]
    DuplicateInitialBalanceAddresses {},
}

impl From<Cw20ContractError> for ContractError {
    fn from(err: Cw20ContractError) -> Self {
        match err {
            Cw20ContractError::Std(std) => ContractError::Std(std),
            Cw20ContractError::Unauthorized {} => ContractError::Unauthorized {},
            Cw20ContractError::CannotSetOwnAccount {} => ContractError::CannotSetOwnAccount {},
            Cw20ContractError::InvalidZeroAmount {} => ContractError::InvalidZeroAmount {},
            Cw20ContractError::Expired {} => ContractError::Expired {},
            Cw20ContractError::NoAllowance {} => ContractError::NoAllowance {},
            Cw20ContractError::CannotExceedCap {} => ContractError::CannotExceedCap {},
            Cw20ContractError::LogoTooBig {} => ContractError::LogoTooBig {},
            Cw20ContractError::InvalidXmlPreamble {} => ContractError::InvalidXmlPreamble {},
            Cw20ContractError::InvalidPngHeader {} => ContractError::InvalidPngHeader {},
            Cw20ContractError::InvalidExpiration {} => ContractError::InvalidExpiration {},
            Cw20ContractError::DuplicateInitialBalanceAddresses {} => {
                ContractError::DuplicateInitialBalanceAddresses {}
            }
        }
    }
}

impl From<OverflowError> for ContractError {
    fn from(_err: OverflowError) -> Self {
        ContractError::Overflow {}
    }
}

impl From<CheckedMultiplyRatioError> for ContractError {
    fn from(_err: CheckedMultiplyRatioError) -> Self {
        ContractError::Overflow {}
    }
}

impl From<ConversionOverflowError> for ContractError {
    fn from(_err: ConversionOverflowError) -> Self {
        ContractError::Overflow {}
    }
}

pub fn from_semver(err: semver::Error) -> StdError {
    StdError::generic_err(format!("Semver: {err}"))
}
