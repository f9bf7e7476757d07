use crate::error::ContractError;
use buyburn_shared::{
  adapters::{amm_router::AmmRouter, concentrated_router::ConcentratedRouter},
  extensions::asset_info_ext::AssetInfoUncheckedExt,
  helpers::pool_path::PoolPath,
  msgs_buy_burn::{Config, RouteInit, SwapRoute},
};
use cosmwasm_std::{Addr, Api, CosmosMsg, Uint128};
use cw_asset::{Asset, AssetInfo, AssetInfoUnchecked};
use itertools::Itertools;

/// Validates an asset that must not be the null asset.
pub fn check_asset(api: &dyn Api, asset: &AssetInfoUnchecked) -> Result<AssetInfo, ContractError> {
  if asset.is_empty() {
    return Err(ContractError::ZeroAddress {});
  }
  Ok(asset.check(api, None)?)
}

/// Turns a route supplied by the owner into a stored route for `asset`.
///
/// Empty assets anywhere on the route fail with `ZeroAddress` before the shape of the
/// path is looked at. A path needs at least two assets, has to start at `asset`,
/// must not repeat an asset consecutively and must not come back to `asset`.
pub fn validate_route(
  api: &dyn Api,
  asset: &AssetInfo,
  route: RouteInit,
) -> Result<SwapRoute, ContractError> {
  match route {
    RouteInit::AmmPath {
      path,
    } => {
      let path = path.iter().map(|a| check_asset(api, a)).collect::<Result<Vec<_>, _>>()?;
      assert_path(asset, &path)?;

      Ok(SwapRoute::AmmPath {
        path,
      })
    },
    RouteInit::ConcentratedSingle {
      token_out,
      fee,
    } => {
      let token_out = check_asset(api, &token_out)?;
      assert_path(asset, &[asset.clone(), token_out.clone()])?;

      Ok(SwapRoute::ConcentratedSingle {
        token_out,
        fee,
      })
    },
    RouteInit::ConcentratedMultihop {
      path,
    } => {
      let decoded =
        PoolPath::decode(&path).map_err(|_| ContractError::IncorrectPathSettings {})?;

      let assets = decoded
        .assets()
        .into_iter()
        .map(|a| check_asset(api, &AssetInfoUnchecked::from(a)))
        .collect::<Result<Vec<_>, _>>()?;
      assert_path(asset, &assets)?;

      Ok(SwapRoute::ConcentratedMultihop {
        path,
      })
    },
  }
}

fn assert_path(asset: &AssetInfo, path: &[AssetInfo]) -> Result<(), ContractError> {
  if path.len() < 2 || path[0] != *asset {
    return Err(ContractError::IncorrectPathSettings {});
  }

  if path.iter().tuple_windows().any(|(a, b)| a == b) {
    return Err(ContractError::IncorrectPathSettings {});
  }

  if path[1..].contains(asset) {
    return Err(ContractError::IncorrectPathSettings {});
  }

  Ok(())
}

/// Asset received at the end of the route.
pub fn destination(route: &SwapRoute) -> Result<Option<AssetInfo>, ContractError> {
  Ok(match route {
    SwapRoute::Disabled => None,
    SwapRoute::AmmPath {
      path,
    } => path.last().cloned(),
    SwapRoute::ConcentratedSingle {
      token_out,
      ..
    } => Some(token_out.clone()),
    SwapRoute::ConcentratedMultihop {
      path,
    } => Some(PoolPath::decode(path)?.last().clone()),
  })
}

/// Venue message swapping `offer` along `route`. Output is sent to `recipient`.
pub fn swap_msg(
  config: &Config,
  route: &SwapRoute,
  offer: &Asset,
  min_amount_out: Uint128,
  recipient: &Addr,
  deadline: u64,
) -> Result<CosmosMsg, ContractError> {
  let msg = match route {
    SwapRoute::Disabled => Err(ContractError::TokenNotEnabled(offer.info.clone()))?,
    SwapRoute::AmmPath {
      path,
    } => AmmRouter(config.amm_router.clone()).swap_msg(
      offer,
      path.clone(),
      min_amount_out,
      recipient,
      deadline,
    )?,
    SwapRoute::ConcentratedSingle {
      token_out,
      fee,
    } => ConcentratedRouter(config.concentrated_router.clone()).exact_input_single_msg(
      offer,
      token_out.clone(),
      *fee,
      min_amount_out,
      recipient,
      deadline,
    )?,
    SwapRoute::ConcentratedMultihop {
      path,
    } => ConcentratedRouter(config.concentrated_router.clone()).exact_input_msg(
      offer,
      path.clone(),
      min_amount_out,
      recipient,
      deadline,
    )?,
  };

  Ok(msg)
}
