use crate::error::SharedError;
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{
  to_json_binary, Addr, Binary, Coin, CosmosMsg, QuerierWrapper, Uint128, WasmMsg,
};
use cw20::{Cw20ExecuteMsg, Cw20ReceiveMsg};
use cw_asset::{Asset, AssetInfo, AssetInfoBase};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Router of a concentrated liquidity venue. Pools are identified by their pair
/// and fee tier, multi-hop swaps take an encoded [`crate::helpers::pool_path::PoolPath`].
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct ConcentratedRouter(pub Addr);

#[cw_serde]
pub enum ConcentratedRouterExecuteMsg {
  ExactInputSingle {
    token_out: AssetInfo,
    fee: u32,
    amount_out_minimum: Uint128,
    recipient: String,
    deadline: u64,
  },
  ExactInput {
    path: Binary,
    amount_out_minimum: Uint128,
    recipient: String,
    deadline: u64,
  },
  Receive(Cw20ReceiveMsg),
}

#[cw_serde]
pub enum ConcentratedRouterHookMsg {
  ExactInputSingle {
    token_out: AssetInfo,
    fee: u32,
    amount_out_minimum: Uint128,
    recipient: String,
    deadline: u64,
  },
  ExactInput {
    path: Binary,
    amount_out_minimum: Uint128,
    recipient: String,
    deadline: u64,
  },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum ConcentratedRouterQueryMsg {
  #[returns(QuoteResponse)]
  QuoteExactInputSingle {
    token_in: AssetInfo,
    token_out: AssetInfo,
    fee: u32,
    amount_in: Uint128,
  },
  #[returns(QuoteResponse)]
  QuoteExactInput {
    path: Binary,
    amount_in: Uint128,
  },
}

#[cw_serde]
pub struct QuoteResponse {
  pub amount_out: Uint128,
}

impl ConcentratedRouter {
  pub fn exact_input_single_msg(
    &self,
    offer: &Asset,
    token_out: AssetInfo,
    fee: u32,
    amount_out_minimum: Uint128,
    recipient: &Addr,
    deadline: u64,
  ) -> Result<CosmosMsg, SharedError> {
    match &offer.info {
      AssetInfoBase::Cw20(_) => self.send_hook_msg(
        offer,
        &ConcentratedRouterHookMsg::ExactInputSingle {
          token_out,
          fee,
          amount_out_minimum,
          recipient: recipient.to_string(),
          deadline,
        },
      ),
      _ => self.execute_msg(
        offer,
        &ConcentratedRouterExecuteMsg::ExactInputSingle {
          token_out,
          fee,
          amount_out_minimum,
          recipient: recipient.to_string(),
          deadline,
        },
      ),
    }
  }

  pub fn exact_input_msg(
    &self,
    offer: &Asset,
    path: Binary,
    amount_out_minimum: Uint128,
    recipient: &Addr,
    deadline: u64,
  ) -> Result<CosmosMsg, SharedError> {
    match &offer.info {
      AssetInfoBase::Cw20(_) => self.send_hook_msg(
        offer,
        &ConcentratedRouterHookMsg::ExactInput {
          path,
          amount_out_minimum,
          recipient: recipient.to_string(),
          deadline,
        },
      ),
      _ => self.execute_msg(
        offer,
        &ConcentratedRouterExecuteMsg::ExactInput {
          path,
          amount_out_minimum,
          recipient: recipient.to_string(),
          deadline,
        },
      ),
    }
  }

  fn send_hook_msg(
    &self,
    offer: &Asset,
    hook: &ConcentratedRouterHookMsg,
  ) -> Result<CosmosMsg, SharedError> {
    match &offer.info {
      AssetInfoBase::Cw20(contract_addr) => Ok(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: contract_addr.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::Send {
          contract: self.0.to_string(),
          amount: offer.amount,
          msg: to_json_binary(hook)?,
        })?,
        funds: vec![],
      })),
      _ => Err(SharedError::NotSupported("only cw20".to_string())),
    }
  }

  fn execute_msg(
    &self,
    offer: &Asset,
    msg: &ConcentratedRouterExecuteMsg,
  ) -> Result<CosmosMsg, SharedError> {
    match &offer.info {
      AssetInfoBase::Native(denom) => Ok(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: self.0.to_string(),
        msg: to_json_binary(msg)?,
        funds: vec![Coin {
          denom: denom.clone(),
          amount: offer.amount,
        }],
      })),
      _ => Err(SharedError::NotSupported("asset info type".to_string())),
    }
  }

  pub fn query_quote_exact_input_single(
    &self,
    querier: &QuerierWrapper,
    token_in: AssetInfo,
    token_out: AssetInfo,
    fee: u32,
    amount_in: Uint128,
  ) -> Result<QuoteResponse, SharedError> {
    Ok(querier.query_wasm_smart(
      self.0.to_string(),
      &ConcentratedRouterQueryMsg::QuoteExactInputSingle {
        token_in,
        token_out,
        fee,
        amount_in,
      },
    )?)
  }

  pub fn query_quote_exact_input(
    &self,
    querier: &QuerierWrapper,
    path: Binary,
    amount_in: Uint128,
  ) -> Result<QuoteResponse, SharedError> {
    Ok(querier.query_wasm_smart(
      self.0.to_string(),
      &ConcentratedRouterQueryMsg::QuoteExactInput {
        path,
        amount_in,
      },
    )?)
  }
}
