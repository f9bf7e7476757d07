use crate::{
  domains::{
    access::assert_whitelisted,
    routes::swap_msg,
    sizing::{assert_cooldown_passed, assert_incentive, next_available, SwapAmounts},
  },
  error::ContractResult,
  state::{BURN_SETTINGS, CONFIG},
};
use buyburn_shared::{
  extensions::{asset_ext::AssetExt, asset_info_ext::AssetInfoExt},
  msgs_buy_burn::CallbackMsg,
};
use cosmwasm_std::{Addr, DepsMut, Env, MessageInfo, Response, Uint128};

/// Swaps the next batch of the input asset into the burn asset. The bought amount is
/// burned by a callback that runs after the venue delivered it.
pub fn buy_and_burn(
  deps: DepsMut,
  env: Env,
  info: MessageInfo,
  min_amount_out: Uint128,
  deadline: u64,
) -> ContractResult {
  assert_whitelisted(deps.storage, &info.sender)?;

  let mut burn = BURN_SETTINGS.load(deps.storage)?;

  let balance = burn.input_asset.query_balance(&deps.querier, env.contract.address.clone())?;
  let amounts = SwapAmounts::compute(balance, burn.cap_per_swap, burn.incentive_bps);
  amounts.assert_swappable()?;

  let now = env.block.time.seconds();
  assert_cooldown_passed(now, burn.next_available)?;

  burn.next_available = next_available(now, burn.interval);
  BURN_SETTINGS.save(deps.storage, &burn)?;

  let prev_balance =
    burn.burn_asset.query_balance(&deps.querier, env.contract.address.clone())?;

  let config = CONFIG.load(deps.storage)?;
  let offer = burn.input_asset.with_balance(amounts.tradeable());
  let mut msgs =
    vec![swap_msg(&config, &burn.route, &offer, min_amount_out, &env.contract.address, deadline)?];

  if !amounts.incentive.is_zero() {
    msgs.push(burn.input_asset.with_balance(amounts.incentive).transfer_msg(&info.sender)?);
  }

  msgs.push(
    CallbackMsg::BurnReceived {
      prev_balance,
    }
    .into_cosmos_msg(&env.contract.address)?,
  );

  Ok(Response::new().add_messages(msgs).add_attributes(vec![
    ("action", "buyburn/buy_and_burn".to_string()),
    ("asset", burn.input_asset.to_string()),
    ("amount", amounts.amount.to_string()),
    ("swapped", offer.amount.to_string()),
    ("incentive", amounts.incentive.to_string()),
    ("next_available", burn.next_available.to_string()),
  ]))
}

/// Burns only the output of the preceding swap, burn asset held before it stays untouched.
pub fn burn_received(deps: DepsMut, env: Env, prev_balance: Uint128) -> ContractResult {
  let burn = BURN_SETTINGS.load(deps.storage)?;
  let balance = burn.burn_asset.query_balance(&deps.querier, env.contract.address)?;
  let received = burn.burn_asset.with_balance(balance.saturating_sub(prev_balance));

  let mut response = Response::new().add_attributes(vec![
    ("action", "buyburn/burn_received".to_string()),
    ("burned", received.amount.to_string()),
  ]);

  if !received.amount.is_zero() {
    response = response.add_message(received.burn_msg()?);
  }

  Ok(response)
}

pub fn update_burn_settings(
  deps: DepsMut,
  sender: &Addr,
  cap_per_swap: Option<Uint128>,
  incentive_bps: Option<u16>,
  interval: Option<u64>,
) -> ContractResult {
  cw_ownable::assert_owner(deps.storage, sender)?;

  let mut burn = BURN_SETTINGS.load(deps.storage)?;

  if let Some(cap_per_swap) = cap_per_swap {
    burn.cap_per_swap = cap_per_swap;
  }

  if let Some(incentive_bps) = incentive_bps {
    assert_incentive(incentive_bps)?;
    burn.incentive_bps = incentive_bps;
  }

  if let Some(interval) = interval {
    burn.interval = interval;
  }

  BURN_SETTINGS.save(deps.storage, &burn)?;

  Ok(Response::new().add_attributes(vec![
    ("action", "buyburn/update_burn_settings".to_string()),
    ("cap_per_swap", burn.cap_per_swap.to_string()),
    ("incentive_bps", burn.incentive_bps.to_string()),
    ("interval", burn.interval.to_string()),
  ]))
}
