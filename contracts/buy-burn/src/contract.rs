use crate::constants::{CONTRACT_NAME, CONTRACT_VERSION};
use crate::domains::access::set_whitelisted;
use crate::domains::burn::{buy_and_burn, burn_received, update_burn_settings};
use crate::domains::registry::{add_route, disable_asset, edit_settings};
use crate::domains::routes::{check_asset, destination, validate_route};
use crate::domains::sizing::{assert_incentive, next_available};
use crate::domains::swap::swap_token;
use crate::error::{ContractError, ContractResult};
use crate::state::{BURN_SETTINGS, CONFIG, WHITELIST};
use buyburn_shared::error::SharedError;
use buyburn_shared::msgs_buy_burn::{BurnSettings, CallbackMsg, Config, ExecuteMsg, InstantiateMsg};
#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{DepsMut, Env, MessageInfo, Response};
use cw2::set_contract_version;
use cw_ownable::update_ownership;
use cw_utils::nonpayable;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
  deps: DepsMut,
  env: Env,
  _info: MessageInfo,
  msg: InstantiateMsg,
) -> ContractResult {
  set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
  cw_ownable::initialize_owner(deps.storage, deps.api, Some(&msg.owner))?;

  CONFIG.save(
    deps.storage,
    &Config {
      amm_router: deps.api.addr_validate(&msg.amm_router)?,
      concentrated_router: deps.api.addr_validate(&msg.concentrated_router)?,
    },
  )?;

  let input_asset = check_asset(deps.api, &msg.burn.input_asset)?;
  let burn_asset = check_asset(deps.api, &msg.burn.burn_asset)?;
  let route = validate_route(deps.api, &input_asset, msg.burn.route)?;

  if destination(&route)?.as_ref() != Some(&burn_asset) {
    return Err(ContractError::IncorrectPathSettings {});
  }
  assert_incentive(msg.burn.incentive_bps)?;

  let burn = BurnSettings {
    input_asset,
    burn_asset,
    route,
    cap_per_swap: msg.burn.cap_per_swap,
    incentive_bps: msg.burn.incentive_bps,
    interval: msg.burn.interval,
    next_available: next_available(env.block.time.seconds(), msg.burn.interval),
  };
  BURN_SETTINGS.save(deps.storage, &burn)?;

  for address in msg.whitelist.unwrap_or_default() {
    WHITELIST.save(deps.storage, &deps.api.addr_validate(&address)?, &())?;
  }

  Ok(Response::new().add_attributes(vec![
    ("action", "buyburn/instantiate".to_string()),
    ("burn_asset", burn.burn_asset.to_string()),
    ("next_available", burn.next_available.to_string()),
  ]))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(deps: DepsMut, env: Env, info: MessageInfo, msg: ExecuteMsg) -> ContractResult {
  match msg {
    ExecuteMsg::SwapToken {
      asset,
      min_amount_out,
      deadline,
    } => {
      nonpayable(&info)?;
      swap_token(deps, env, info, asset, min_amount_out, deadline)
    },

    ExecuteMsg::BuyAndBurn {
      min_amount_out,
      deadline,
    } => {
      nonpayable(&info)?;
      buy_and_burn(deps, env, info, min_amount_out, deadline)
    },

    ExecuteMsg::AddRoute {
      asset,
      route,
      cap_per_swap,
      incentive_bps,
      interval,
    } => {
      nonpayable(&info)?;
      add_route(deps, env, &info.sender, asset, route, cap_per_swap, incentive_bps, interval)
    },

    ExecuteMsg::EditSettings {
      asset,
      cap_per_swap,
      incentive_bps,
      interval,
    } => {
      nonpayable(&info)?;
      edit_settings(deps, &info.sender, asset, cap_per_swap, incentive_bps, interval)
    },

    ExecuteMsg::DisableAsset {
      asset,
    } => {
      nonpayable(&info)?;
      disable_asset(deps, &info.sender, asset)
    },

    ExecuteMsg::UpdateBurnSettings {
      cap_per_swap,
      incentive_bps,
      interval,
    } => {
      nonpayable(&info)?;
      update_burn_settings(deps, &info.sender, cap_per_swap, incentive_bps, interval)
    },

    ExecuteMsg::SetWhitelisted {
      addresses,
      whitelisted,
    } => {
      nonpayable(&info)?;
      set_whitelisted(deps, &info.sender, addresses, whitelisted)
    },

    ExecuteMsg::UpdateConfig {
      amm_router,
      concentrated_router,
    } => {
      nonpayable(&info)?;
      cw_ownable::assert_owner(deps.storage, &info.sender)?;

      let mut config = CONFIG.load(deps.storage)?;
      if let Some(amm_router) = amm_router {
        config.amm_router = deps.api.addr_validate(&amm_router)?;
      }
      if let Some(concentrated_router) = concentrated_router {
        config.concentrated_router = deps.api.addr_validate(&concentrated_router)?;
      }
      CONFIG.save(deps.storage, &config)?;

      Ok(Response::new().add_attribute("action", "buyburn/update_config"))
    },

    ExecuteMsg::UpdateOwnership(action) => {
      update_ownership(deps, &env.block, &info.sender, action)?;
      Ok(Response::new().add_attribute("action", "buyburn/update_ownership"))
    },

    ExecuteMsg::Callback(msg) => handle_callback(deps, env, info, msg),
  }
}

fn handle_callback(deps: DepsMut, env: Env, info: MessageInfo, msg: CallbackMsg) -> ContractResult {
  if info.sender != env.contract.address {
    Err(SharedError::UnauthorizedCallbackOnlyCallableByContract {})?
  }

  match msg {
    CallbackMsg::BurnReceived {
      prev_balance,
    } => burn_received(deps, env, prev_balance),
  }
}
