use crate::{
  domains::{
    access::assert_whitelisted,
    registry::load_enabled,
    routes::swap_msg,
    sizing::{assert_cooldown_passed, next_available, SwapAmounts},
  },
  error::ContractResult,
  state::{CONFIG, SWAP_ROUTES, SWAP_SETTINGS},
};
use buyburn_shared::extensions::asset_info_ext::AssetInfoExt;
use cosmwasm_std::{DepsMut, Env, MessageInfo, Response, Uint128};
use cw_asset::AssetInfo;

/// Swaps the next batch of `asset` into the end of its route.
///
/// Checks run in a fixed order: allow-list, enabled, balance, cooldown. The cooldown is
/// advanced in the same transaction as the venue call, a failing venue reverts both.
pub fn swap_token(
  deps: DepsMut,
  env: Env,
  info: MessageInfo,
  asset: AssetInfo,
  min_amount_out: Uint128,
  deadline: u64,
) -> ContractResult {
  assert_whitelisted(deps.storage, &info.sender)?;

  let mut settings = load_enabled(deps.storage, &asset)?;
  let route = SWAP_ROUTES.load(deps.storage, &asset)?;

  let balance = asset.query_balance(&deps.querier, env.contract.address.clone())?;
  let amounts = SwapAmounts::compute(balance, settings.cap_per_swap, settings.incentive_bps);
  amounts.assert_swappable()?;

  let now = env.block.time.seconds();
  assert_cooldown_passed(now, settings.next_available)?;

  settings.next_available = next_available(now, settings.interval);
  SWAP_SETTINGS.save(deps.storage, &asset, &settings)?;

  let config = CONFIG.load(deps.storage)?;
  let offer = asset.with_balance(amounts.tradeable());
  let mut msgs =
    vec![swap_msg(&config, &route, &offer, min_amount_out, &env.contract.address, deadline)?];

  if !amounts.incentive.is_zero() {
    msgs.push(asset.with_balance(amounts.incentive).transfer_msg(&info.sender)?);
  }

  Ok(Response::new().add_messages(msgs).add_attributes(vec![
    ("action", "buyburn/swap_token".to_string()),
    ("asset", asset.to_string()),
    ("amount", amounts.amount.to_string()),
    ("swapped", offer.amount.to_string()),
    ("incentive", amounts.incentive.to_string()),
    ("next_available", settings.next_available.to_string()),
  ]))
}
