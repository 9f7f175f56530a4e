pub mod migrate;
pub mod pagination;

use crate::error::ContractError;
use cosmwasm_std::{to_json_binary, Binary};
use serde::Serialize;

pub use migrate::MigrateMsg;

pub fn encode_binary<T>(val: &T) -> Result<Binary, ContractError>
where
    T: Serialize,
{
    match to_json_binary(val) {
        Ok(encoded_val) => Ok(encoded_val),
        Err(err) => Err(err.into()),
    }
}

/// Number of basis points in one whole.
pub const BPS_DENOMINATOR: u128 = 10_000;

/// Returns `10^exp` as a `u128`, failing on overflow.
pub fn pow10(exp: u32) -> Result<u128, ContractError> {
    10u128
        .checked_pow(exp)
        .ok_or(ContractError::Overflow {})
}
