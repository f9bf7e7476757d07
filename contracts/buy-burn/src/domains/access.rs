use crate::{error::ContractError, state::WHITELIST};
use buyburn_shared::error::SharedError;
use cosmwasm_std::{Addr, DepsMut, Response, Storage};

pub fn assert_whitelisted(storage: &dyn Storage, sender: &Addr) -> Result<(), ContractError> {
  if !WHITELIST.has(storage, sender) {
    Err(SharedError::Unauthorized {})?;
  }
  Ok(())
}

pub fn set_whitelisted(
  deps: DepsMut,
  sender: &Addr,
  addresses: Vec<String>,
  whitelisted: bool,
) -> Result<Response, ContractError> {
  cw_ownable::assert_owner(deps.storage, sender)?;

  for address in &addresses {
    let address = deps.api.addr_validate(address)?;
    if whitelisted {
      WHITELIST.save(deps.storage, &address, &())?;
    } else {
      WHITELIST.remove(deps.storage, &address);
    }
  }

  Ok(Response::new().add_attributes(vec![
    ("action", "buyburn/set_whitelisted".to_string()),
    ("addresses", addresses.join(",")),
    ("whitelisted", whitelisted.to_string()),
  ]))
}
