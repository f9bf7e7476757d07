use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
  entry_point, from_json, to_json_binary, Binary, Decimal, Deps, DepsMut, Env, MessageInfo,
  Response, StdError, StdResult, Uint128,
};
use cw_asset::{Asset, AssetInfo};
use cw_storage_plus::Item;
use buyburn_shared::{
  adapters::amm_router::{
    AmmRouterExecuteMsg, AmmRouterHookMsg, AmmRouterQueryMsg, AmountsOutResponse,
  },
  error::SharedError,
  extensions::asset_info_ext::AssetInfoExt,
};
pub type ContractResult = Result<Response, SharedError>;

#[cw_serde]
pub struct InstantiateMsg {
  /// (from, to, price of one `from` in `to`)
  pub rates: Vec<(AssetInfo, AssetInfo, Decimal)>,
}

#[cw_serde]
pub struct Config {
  pub rates: Vec<(AssetInfo, AssetInfo, Decimal)>,
}

pub const CONFIG: Item<Config> = Item::new("config");

#[entry_point]
pub fn instantiate(
  deps: DepsMut,
  _env: Env,
  _info: MessageInfo,
  msg: InstantiateMsg,
) -> ContractResult {
  CONFIG.save(
    deps.storage,
    &Config {
      rates: msg.rates,
    },
  )?;
  Ok(Response::new())
}

#[entry_point]
pub fn execute(
  deps: DepsMut,
  env: Env,
  info: MessageInfo,
  msg: AmmRouterExecuteMsg,
) -> ContractResult {
  match msg {
    AmmRouterExecuteMsg::SwapExactAssetsForAssets {
      path,
      amount_out_min,
      to,
      deadline,
    } => {
      let coin = info.funds.first().ok_or_else(|| StdError::generic_err("no funds sent"))?;
      let offer = Asset::native(coin.denom.clone(), coin.amount);
      swap(deps.as_ref(), &env, offer, path, amount_out_min, to, deadline)
    },
    AmmRouterExecuteMsg::Receive(cw20_msg) => {
      let offer = Asset::cw20(info.sender, cw20_msg.amount);
      match from_json(&cw20_msg.msg)? {
        AmmRouterHookMsg::SwapExactAssetsForAssets {
          path,
          amount_out_min,
          to,
          deadline,
        } => swap(deps.as_ref(), &env, offer, path, amount_out_min, to, deadline),
      }
    },
  }
}

fn swap(
  deps: Deps,
  env: &Env,
  offer: Asset,
  path: Vec<AssetInfo>,
  amount_out_min: Uint128,
  to: String,
  deadline: u64,
) -> ContractResult {
  if env.block.time.seconds() > deadline {
    return Err(StdError::generic_err("expired").into());
  }

  if path.first() != Some(&offer.info) {
    return Err(StdError::generic_err("wrong offer asset").into());
  }

  let amounts = amounts_out(deps, offer.amount, &path)?;
  let amount_out = amounts.last().copied().unwrap_or_default();
  if amount_out < amount_out_min {
    return Err(StdError::generic_err("insufficient output amount").into());
  }

  let ask = path[path.len() - 1].with_balance(amount_out);
  Ok(
    Response::new()
      .add_message(ask.transfer_msg(to)?)
      .add_attribute("action", "amm/swap")
      .add_attribute("offer", offer.to_string())
      .add_attribute("return", ask.to_string()),
  )
}

fn amounts_out(deps: Deps, amount_in: Uint128, path: &[AssetInfo]) -> StdResult<Vec<Uint128>> {
  let config = CONFIG.load(deps.storage)?;
  let mut amounts = vec![amount_in];

  for pair in path.windows(2) {
    let rate = config
      .rates
      .iter()
      .find(|(from, to, _)| *from == pair[0] && *to == pair[1])
      .map(|(_, _, rate)| *rate)
      .ok_or_else(|| StdError::generic_err(format!("no pool {} {}", pair[0], pair[1])))?;

    let amount = amounts.last().copied().unwrap_or_default() * rate;
    amounts.push(amount);
  }

  Ok(amounts)
}

#[entry_point]
pub fn query(deps: Deps, _env: Env, msg: AmmRouterQueryMsg) -> StdResult<Binary> {
  match msg {
    AmmRouterQueryMsg::GetAmountsOut {
      amount_in,
      path,
    } => to_json_binary(&AmountsOutResponse {
      amounts: amounts_out(deps, amount_in, &path)?,
    }),
  }
}
