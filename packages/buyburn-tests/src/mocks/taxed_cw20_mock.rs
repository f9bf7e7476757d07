use cosmwasm_std::{
  entry_point, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult, Uint128,
};
use cw20_base::contract::{execute_burn, execute_send, execute_transfer};
use cw20_base::msg::{ExecuteMsg, InstantiateMsg, QueryMsg};
use cw20_base::ContractError;

/// Every transfer and send burns 4% of the amount.
pub const TAX_BPS: u128 = 400;

pub fn apply_tax(amount: Uint128) -> Uint128 {
  amount - tax(amount)
}

fn tax(amount: Uint128) -> Uint128 {
  amount.multiply_ratio(TAX_BPS, 10_000u128)
}

#[entry_point]
pub fn instantiate(
  deps: DepsMut,
  env: Env,
  info: MessageInfo,
  msg: InstantiateMsg,
) -> Result<Response, ContractError> {
  cw20_base::contract::instantiate(deps, env, info, msg)
}

#[entry_point]
pub fn execute(
  mut deps: DepsMut,
  env: Env,
  info: MessageInfo,
  msg: ExecuteMsg,
) -> Result<Response, ContractError> {
  match msg {
    ExecuteMsg::Transfer {
      recipient,
      amount,
    } => {
      let tax = tax(amount);
      if !tax.is_zero() {
        execute_burn(deps.branch(), env.clone(), info.clone(), tax)?;
      }
      Ok(execute_transfer(deps, env, info, recipient, amount - tax)?.add_attribute("tax", tax))
    },
    ExecuteMsg::Send {
      contract,
      amount,
      msg,
    } => {
      let tax = tax(amount);
      if !tax.is_zero() {
        execute_burn(deps.branch(), env.clone(), info.clone(), tax)?;
      }
      Ok(execute_send(deps, env, info, contract, amount - tax, msg)?.add_attribute("tax", tax))
    },
    _ => cw20_base::contract::execute(deps, env, info, msg),
  }
}

#[entry_point]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
  cw20_base::contract::query(deps, env, msg)
}
