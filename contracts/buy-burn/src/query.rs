use crate::domains::registry::load_enabled;
use crate::domains::sizing::SwapAmounts;
use crate::error::ContractError;
use crate::state::{BURN_SETTINGS, CONFIG, SWAP_ROUTES, SWAP_SETTINGS, WHITELIST};
use buyburn_shared::constants::{DEFAULT_LIMIT, MAX_LIMIT};
use buyburn_shared::msgs_buy_burn::{
  BurnParamsResponse, QueryMsg, SingleHopResponse, SwapAssetResponse, SwapParamsResponse,
  SwapRoute,
};
#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{to_json_binary, Addr, Binary, Deps, Env, Order, StdResult};
use cw_asset::AssetInfo;
use cw_ownable::get_ownership;
use cw_storage_plus::Bound;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> Result<Binary, ContractError> {
  match msg {
    QueryMsg::Ownership {} => Ok(to_json_binary(&get_ownership(deps.storage)?)?),
    QueryMsg::Config {} => Ok(to_json_binary(&CONFIG.load(deps.storage)?)?),

    QueryMsg::SwapSettings {
      asset,
    } => Ok(to_json_binary(&SWAP_SETTINGS.may_load(deps.storage, &asset)?.unwrap_or_default())?),

    QueryMsg::Route {
      asset,
    } => Ok(to_json_binary(&route(deps, &asset)?)?),

    QueryMsg::AmmPath {
      asset,
    } => {
      let path = match route(deps, &asset)? {
        SwapRoute::AmmPath {
          path,
        } => path,
        _ => vec![],
      };
      Ok(to_json_binary(&path)?)
    },

    QueryMsg::ConcentratedSingle {
      asset,
    } => {
      let response = match route(deps, &asset)? {
        SwapRoute::ConcentratedSingle {
          token_out,
          fee,
        } => SingleHopResponse {
          token_out: Some(token_out),
          fee,
        },
        _ => SingleHopResponse {
          token_out: None,
          fee: 0,
        },
      };
      Ok(to_json_binary(&response)?)
    },

    QueryMsg::IsMultihop {
      asset,
    } => Ok(to_json_binary(&route(deps, &asset)?.is_multihop())?),

    QueryMsg::MultihopPath {
      asset,
    } => {
      let path = match route(deps, &asset)? {
        SwapRoute::ConcentratedMultihop {
          path,
        } => path,
        _ => Binary::default(),
      };
      Ok(to_json_binary(&path)?)
    },

    QueryMsg::SwapParams {
      asset,
    } => Ok(to_json_binary(&swap_params(deps, env, asset)?)?),

    QueryMsg::SwapAssets {
      start_after,
      limit,
    } => Ok(to_json_binary(&swap_assets(deps, start_after, limit)?)?),

    QueryMsg::BurnSettings {} => Ok(to_json_binary(&BURN_SETTINGS.load(deps.storage)?)?),

    QueryMsg::BurnParams {} => Ok(to_json_binary(&burn_params(deps, env)?)?),

    QueryMsg::IsWhitelisted {
      address,
    } => {
      let address = deps.api.addr_validate(&address)?;
      Ok(to_json_binary(&WHITELIST.has(deps.storage, &address))?)
    },

    QueryMsg::Whitelist {
      start_after,
      limit,
    } => Ok(to_json_binary(&whitelist(deps, start_after, limit)?)?),
  }
}

fn route(deps: Deps, asset: &AssetInfo) -> StdResult<SwapRoute> {
  Ok(SWAP_ROUTES.may_load(deps.storage, asset)?.unwrap_or_default())
}

fn swap_params(
  deps: Deps,
  env: Env,
  asset: AssetInfo,
) -> Result<SwapParamsResponse, ContractError> {
  let settings = load_enabled(deps.storage, &asset)?;
  let balance = asset.query_balance(&deps.querier, env.contract.address)?;
  let amounts = SwapAmounts::compute(balance, settings.cap_per_swap, settings.incentive_bps);

  Ok(SwapParamsResponse {
    amount: amounts.amount,
    incentive: amounts.incentive,
    next_available: settings.next_available,
    swap_type: settings.swap_type,
  })
}

fn burn_params(deps: Deps, env: Env) -> Result<BurnParamsResponse, ContractError> {
  let burn = BURN_SETTINGS.load(deps.storage)?;
  let balance = burn.input_asset.query_balance(&deps.querier, env.contract.address)?;
  let amounts = SwapAmounts::compute(balance, burn.cap_per_swap, burn.incentive_bps);

  Ok(BurnParamsResponse {
    amount: amounts.amount,
    incentive: amounts.incentive,
    next_available: burn.next_available,
  })
}

fn swap_assets(
  deps: Deps,
  start_after: Option<AssetInfo>,
  limit: Option<u32>,
) -> StdResult<Vec<SwapAssetResponse>> {
  let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
  let start = start_after.as_ref().map(Bound::exclusive);

  SWAP_SETTINGS
    .range(deps.storage, start, None, Order::Ascending)
    .take(limit)
    .map(|item| {
      let (asset, settings) = item?;
      let route = SWAP_ROUTES.load(deps.storage, &asset)?;
      Ok(SwapAssetResponse {
        asset,
        settings,
        route,
      })
    })
    .collect()
}

fn whitelist(deps: Deps, start_after: Option<String>, limit: Option<u32>) -> StdResult<Vec<Addr>> {
  let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
  let start_after = start_after.map(|a| deps.api.addr_validate(&a)).transpose()?;
  let start = start_after.as_ref().map(Bound::exclusive);

  WHITELIST.keys(deps.storage, start, None, Order::Ascending).take(limit).collect()
}
