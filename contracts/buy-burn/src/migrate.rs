use crate::{
  constants::{CONTRACT_NAME, CONTRACT_VERSION},
  error::ContractError,
};
use buyburn_shared::{error::SharedError, msgs_buy_burn::MigrateMsg};
#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{DepsMut, Env, Response};
use cw2::{get_contract_version, set_contract_version};
use semver::Version;

/// Manages contract migration
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
  let contract_version = get_contract_version(deps.storage)?;

  if contract_version.contract != CONTRACT_NAME {
    return Err(
      SharedError::ContractMismatch(contract_version.contract, CONTRACT_NAME.to_string()).into(),
    );
  }

  let stored: Version = contract_version.version.parse()?;
  let new: Version = CONTRACT_VERSION.parse()?;
  if stored > new {
    return Err(
      SharedError::MigrationDowngrade(contract_version.version, CONTRACT_VERSION.to_string())
        .into(),
    );
  }

  set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

  Ok(
    Response::new()
      .add_attribute("previous_contract_name", &contract_version.contract)
      .add_attribute("previous_contract_version", &contract_version.version)
      .add_attribute("new_contract_name", CONTRACT_NAME)
      .add_attribute("new_contract_version", CONTRACT_VERSION),
  )
}
