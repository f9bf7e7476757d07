use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
  entry_point, from_json, to_json_binary, Binary, Decimal, Deps, DepsMut, Env, MessageInfo,
  Response, StdError, StdResult, Uint128,
};
use cw_asset::{Asset, AssetInfo};
use cw_storage_plus::Item;
use buyburn_shared::{
  adapters::concentrated_router::{
    ConcentratedRouterExecuteMsg, ConcentratedRouterHookMsg, ConcentratedRouterQueryMsg,
    QuoteResponse,
  },
  error::SharedError,
  extensions::asset_info_ext::AssetInfoExt,
  helpers::pool_path::PoolPath,
};
pub type ContractResult = Result<Response, SharedError>;

#[cw_serde]
pub struct Pool {
  pub token_in: AssetInfo,
  pub token_out: AssetInfo,
  pub fee: u32,
  pub rate: Decimal,
}

#[cw_serde]
pub struct InstantiateMsg {
  pub pools: Vec<Pool>,
}

#[cw_serde]
pub struct Config {
  pub pools: Vec<Pool>,
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
      pools: msg.pools,
    },
  )?;
  Ok(Response::new())
}

#[entry_point]
pub fn execute(
  deps: DepsMut,
  env: Env,
  info: MessageInfo,
  msg: ConcentratedRouterExecuteMsg,
) -> ContractResult {
  let (offer, hook) = match msg {
    ConcentratedRouterExecuteMsg::ExactInputSingle {
      token_out,
      fee,
      amount_out_minimum,
      recipient,
      deadline,
    } => (
      sent_funds(&info)?,
      ConcentratedRouterHookMsg::ExactInputSingle {
        token_out,
        fee,
        amount_out_minimum,
        recipient,
        deadline,
      },
    ),
    ConcentratedRouterExecuteMsg::ExactInput {
      path,
      amount_out_minimum,
      recipient,
      deadline,
    } => (
      sent_funds(&info)?,
      ConcentratedRouterHookMsg::ExactInput {
        path,
        amount_out_minimum,
        recipient,
        deadline,
      },
    ),
    ConcentratedRouterExecuteMsg::Receive(cw20_msg) => {
      (Asset::cw20(info.sender, cw20_msg.amount), from_json(&cw20_msg.msg)?)
    },
  };

  let (path, amount_out_minimum, recipient, deadline) = match hook {
    ConcentratedRouterHookMsg::ExactInputSingle {
      token_out,
      fee,
      amount_out_minimum,
      recipient,
      deadline,
    } => (
      PoolPath::from_assets(&[offer.info.clone(), token_out], &[fee])?,
      amount_out_minimum,
      recipient,
      deadline,
    ),
    ConcentratedRouterHookMsg::ExactInput {
      path,
      amount_out_minimum,
      recipient,
      deadline,
    } => (PoolPath::decode(&path)?, amount_out_minimum, recipient, deadline),
  };

  if env.block.time.seconds() > deadline {
    return Err(StdError::generic_err("expired").into());
  }

  if path.start != offer.info {
    return Err(StdError::generic_err("wrong offer asset").into());
  }

  let amount_out = quote(deps.as_ref(), &path, offer.amount)?;
  if amount_out < amount_out_minimum {
    return Err(StdError::generic_err("insufficient output amount").into());
  }

  let ask = path.last().with_balance(amount_out);
  Ok(
    Response::new()
      .add_message(ask.transfer_msg(recipient)?)
      .add_attribute("action", "concentrated/swap")
      .add_attribute("offer", offer.to_string())
      .add_attribute("return", ask.to_string()),
  )
}

fn sent_funds(info: &MessageInfo) -> StdResult<Asset> {
  let coin = info.funds.first().ok_or_else(|| StdError::generic_err("no funds sent"))?;
  Ok(Asset::native(coin.denom.clone(), coin.amount))
}

fn quote(deps: Deps, path: &PoolPath, amount_in: Uint128) -> StdResult<Uint128> {
  let config = CONFIG.load(deps.storage)?;
  let mut token_in = &path.start;
  let mut amount = amount_in;

  for hop in &path.hops {
    let pool = config
      .pools
      .iter()
      .find(|p| p.token_in == *token_in && p.token_out == hop.asset && p.fee == hop.fee)
      .ok_or_else(|| {
        StdError::generic_err(format!("no pool {} {} {}", token_in, hop.asset, hop.fee))
      })?;

    amount = amount * pool.rate;
    token_in = &hop.asset;
  }

  Ok(amount)
}

#[entry_point]
pub fn query(deps: Deps, _env: Env, msg: ConcentratedRouterQueryMsg) -> StdResult<Binary> {
  let (path, amount_in) = match msg {
    ConcentratedRouterQueryMsg::QuoteExactInputSingle {
      token_in,
      token_out,
      fee,
      amount_in,
    } => (PoolPath::from_assets(&[token_in, token_out], &[fee])?, amount_in),
    ConcentratedRouterQueryMsg::QuoteExactInput {
      path,
      amount_in,
    } => (PoolPath::decode(&path)?, amount_in),
  };

  to_json_binary(&QuoteResponse {
    amount_out: quote(deps, &path, amount_in)?,
  })
}
