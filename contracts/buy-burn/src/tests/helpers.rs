use crate::contract::{execute, instantiate};
use crate::error::ContractError;
use crate::query::query;
use buyburn_shared::msgs_buy_burn::{
  BurnInit, BurnSettings, ExecuteMsg, InstantiateMsg, QueryMsg, RouteInit, SwapParamsResponse,
  SwapRoute, SwapSettings,
};
use cosmwasm_std::testing::{mock_env, mock_info, MockApi, MockStorage};
use cosmwasm_std::{from_json, Deps, DepsMut, Empty, Env, OwnedDeps, Response, Timestamp, Uint128};
use cw_asset::{AssetInfo, AssetInfoUnchecked};

use super::custom_querier::CustomQuerier;

pub const OWNER: &str = "owner";
pub const USER: &str = "user";
pub const AMM_ROUTER: &str = "amm_router";
pub const CONCENTRATED_ROUTER: &str = "concentrated_router";

pub const PROCEEDS: &str = "uproceeds";
pub const BURN_TOKEN: &str = "burn_token";

pub const BURN_CAP: u128 = 1_000_000;
pub const BURN_INCENTIVE_BPS: u16 = 100;
pub const BURN_INTERVAL: u64 = 300;

pub(super) fn mock_dependencies() -> OwnedDeps<MockStorage, MockApi, CustomQuerier, Empty> {
  OwnedDeps {
    storage: MockStorage::default(),
    api: MockApi::default(),
    querier: CustomQuerier::default(),
    custom_query_type: std::marker::PhantomData,
  }
}

pub fn now() -> u64 {
  mock_env().block.time.seconds()
}

pub fn env_at(seconds: u64) -> Env {
  let mut env = mock_env();
  env.block.time = Timestamp::from_seconds(seconds);
  env
}

pub fn native(denom: &str) -> AssetInfo {
  AssetInfo::native(denom)
}

pub fn cw20(addr: &str) -> AssetInfo {
  AssetInfo::cw20(cosmwasm_std::Addr::unchecked(addr))
}

pub fn burn_init() -> BurnInit {
  BurnInit {
    input_asset: AssetInfoUnchecked::native(PROCEEDS),
    burn_asset: AssetInfoUnchecked::cw20(BURN_TOKEN),
    route: RouteInit::AmmPath {
      path: vec![AssetInfoUnchecked::native(PROCEEDS), AssetInfoUnchecked::cw20(BURN_TOKEN)],
    },
    cap_per_swap: Uint128::new(BURN_CAP),
    incentive_bps: BURN_INCENTIVE_BPS,
    interval: BURN_INTERVAL,
  }
}

pub fn instantiate_msg(burn: BurnInit) -> InstantiateMsg {
  InstantiateMsg {
    owner: OWNER.to_string(),
    amm_router: AMM_ROUTER.to_string(),
    concentrated_router: CONCENTRATED_ROUTER.to_string(),
    burn,
    whitelist: Some(vec![USER.to_string()]),
  }
}

#[track_caller]
pub fn setup_contract(deps: DepsMut) -> Response {
  instantiate(deps, mock_env(), mock_info("creator", &[]), instantiate_msg(burn_init())).unwrap()
}

pub fn add_route(
  deps: DepsMut,
  asset: AssetInfoUnchecked,
  route: RouteInit,
  cap_per_swap: u128,
  incentive_bps: u16,
  interval: u64,
) -> Result<Response, ContractError> {
  execute(
    deps,
    mock_env(),
    mock_info(OWNER, &[]),
    ExecuteMsg::AddRoute {
      asset,
      route,
      cap_per_swap: Uint128::new(cap_per_swap),
      incentive_bps,
      interval,
    },
  )
}

pub fn amm_path(path: &[&str]) -> RouteInit {
  RouteInit::AmmPath {
    path: path.iter().map(|denom| AssetInfoUnchecked::native(*denom)).collect(),
  }
}

pub fn swap_token(
  deps: DepsMut,
  env: Env,
  sender: &str,
  asset: AssetInfo,
  min_amount_out: u128,
) -> Result<Response, ContractError> {
  let deadline = env.block.time.seconds() + 60;
  execute(
    deps,
    env,
    mock_info(sender, &[]),
    ExecuteMsg::SwapToken {
      asset,
      min_amount_out: Uint128::new(min_amount_out),
      deadline,
    },
  )
}

pub fn buy_and_burn(
  deps: DepsMut,
  env: Env,
  sender: &str,
  min_amount_out: u128,
) -> Result<Response, ContractError> {
  let deadline = env.block.time.seconds() + 60;
  execute(
    deps,
    env,
    mock_info(sender, &[]),
    ExecuteMsg::BuyAndBurn {
      min_amount_out: Uint128::new(min_amount_out),
      deadline,
    },
  )
}

pub fn query_settings(deps: Deps, asset: AssetInfo) -> SwapSettings {
  from_json(
    query(
      deps,
      mock_env(),
      QueryMsg::SwapSettings {
        asset,
      },
    )
    .unwrap(),
  )
  .unwrap()
}

pub fn query_route(deps: Deps, asset: AssetInfo) -> SwapRoute {
  from_json(
    query(
      deps,
      mock_env(),
      QueryMsg::Route {
        asset,
      },
    )
    .unwrap(),
  )
  .unwrap()
}

pub fn query_swap_params(
  deps: Deps,
  asset: AssetInfo,
) -> Result<SwapParamsResponse, ContractError> {
  let res = query(
    deps,
    mock_env(),
    QueryMsg::SwapParams {
      asset,
    },
  )?;
  Ok(from_json(res)?)
}

pub fn query_burn_settings(deps: Deps) -> BurnSettings {
  from_json(query(deps, mock_env(), QueryMsg::BurnSettings {}).unwrap()).unwrap()
}
