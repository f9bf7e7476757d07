use crate::{
  domains::{
    routes::{check_asset, validate_route},
    sizing::{assert_incentive, next_available},
  },
  error::{ContractError, ContractResult},
  state::{SWAP_ROUTES, SWAP_SETTINGS},
};
use buyburn_shared::msgs_buy_burn::{RouteInit, SwapSettings};
use cosmwasm_std::{Addr, DepsMut, Env, Response, Storage, Uint128};
use cw_asset::{AssetInfo, AssetInfoUnchecked};

#[allow(clippy::too_many_arguments)]
pub fn add_route(
  deps: DepsMut,
  env: Env,
  sender: &Addr,
  asset: AssetInfoUnchecked,
  route: RouteInit,
  cap_per_swap: Uint128,
  incentive_bps: u16,
  interval: u64,
) -> ContractResult {
  cw_ownable::assert_owner(deps.storage, sender)?;

  let asset = check_asset(deps.api, &asset)?;
  let route = validate_route(deps.api, &asset, route)?;

  if SWAP_SETTINGS.has(deps.storage, &asset) {
    return Err(ContractError::DuplicateSwapToken(asset));
  }
  assert_incentive(incentive_bps)?;

  let settings = SwapSettings {
    swap_type: route.swap_type(),
    cap_per_swap,
    incentive_bps,
    interval,
    next_available: next_available(env.block.time.seconds(), interval),
  };

  SWAP_SETTINGS.save(deps.storage, &asset, &settings)?;
  SWAP_ROUTES.save(deps.storage, &asset, &route)?;

  Ok(Response::new().add_attributes(vec![
    ("action", "buyburn/add_route".to_string()),
    ("asset", asset.to_string()),
    ("swap_type", format!("{:?}", settings.swap_type)),
    ("next_available", settings.next_available.to_string()),
  ]))
}

pub fn edit_settings(
  deps: DepsMut,
  sender: &Addr,
  asset: AssetInfo,
  cap_per_swap: Uint128,
  incentive_bps: u16,
  interval: u64,
) -> ContractResult {
  cw_ownable::assert_owner(deps.storage, sender)?;

  let mut settings = load_enabled(deps.storage, &asset)?;
  assert_incentive(incentive_bps)?;

  settings.cap_per_swap = cap_per_swap;
  settings.incentive_bps = incentive_bps;
  settings.interval = interval;
  SWAP_SETTINGS.save(deps.storage, &asset, &settings)?;

  Ok(Response::new().add_attributes(vec![
    ("action", "buyburn/edit_settings".to_string()),
    ("asset", asset.to_string()),
    ("cap_per_swap", cap_per_swap.to_string()),
    ("incentive_bps", incentive_bps.to_string()),
    ("interval", interval.to_string()),
  ]))
}

pub fn disable_asset(deps: DepsMut, sender: &Addr, asset: AssetInfo) -> ContractResult {
  cw_ownable::assert_owner(deps.storage, sender)?;

  load_enabled(deps.storage, &asset)?;
  SWAP_SETTINGS.remove(deps.storage, &asset);
  SWAP_ROUTES.remove(deps.storage, &asset);

  Ok(Response::new().add_attributes(vec![
    ("action", "buyburn/disable_asset".to_string()),
    ("asset", asset.to_string()),
  ]))
}

pub fn load_enabled(
  storage: &dyn Storage,
  asset: &AssetInfo,
) -> Result<SwapSettings, ContractError> {
  SWAP_SETTINGS
    .may_load(storage, asset)?
    .ok_or_else(|| ContractError::TokenNotEnabled(asset.clone()))
}
