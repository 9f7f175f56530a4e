use cosmwasm_std::{ensure, Addr, Storage};
use cw_storage_plus::Item;

use crate::error::ContractError;

pub const OWNER: Item<Addr> = Item::new("owner");

pub fn is_contract_owner(storage: &dyn Storage, addr: &Addr) -> Result<bool, ContractError> {
    Ok(OWNER.load(storage)? == *addr)
}

/// Errors with `NotOwner` unless `sender` is the stored owner.
pub fn ensure_owner(storage: &dyn Storage, sender: &Addr) -> Result<(), ContractError> {
    ensure!(
        is_contract_owner(storage, sender)?,
        ContractError::NotOwner {}
    );
    Ok(())
}
