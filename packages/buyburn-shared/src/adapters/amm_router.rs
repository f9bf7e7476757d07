use crate::error::SharedError;
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{to_json_binary, Addr, Coin, CosmosMsg, QuerierWrapper, Uint128, WasmMsg};
use cw20::{Cw20ExecuteMsg, Cw20ReceiveMsg};
use cw_asset::{Asset, AssetInfo, AssetInfoBase};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Path based AMM router. Swaps along an ordered list of assets, one pool per
/// consecutive pair.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct AmmRouter(pub Addr);

#[cw_serde]
pub enum AmmRouterExecuteMsg {
  /// Swap the attached native funds along `path`.
  SwapExactAssetsForAssets {
    path: Vec<AssetInfo>,
    amount_out_min: Uint128,
    to: String,
    deadline: u64,
  },
  Receive(Cw20ReceiveMsg),
}

#[cw_serde]
pub enum AmmRouterHookMsg {
  SwapExactAssetsForAssets {
    path: Vec<AssetInfo>,
    amount_out_min: Uint128,
    to: String,
    deadline: u64,
  },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum AmmRouterQueryMsg {
  #[returns(AmountsOutResponse)]
  GetAmountsOut {
    amount_in: Uint128,
    path: Vec<AssetInfo>,
  },
}

#[cw_serde]
pub struct AmountsOutResponse {
  /// amount of every asset on the path, starting with `amount_in`
  pub amounts: Vec<Uint128>,
}

impl AmountsOutResponse {
  pub fn amount_out(&self) -> Uint128 {
    self.amounts.last().copied().unwrap_or_default()
  }
}

impl AmmRouter {
  pub fn swap_msg(
    &self,
    offer: &Asset,
    path: Vec<AssetInfo>,
    amount_out_min: Uint128,
    to: &Addr,
    deadline: u64,
  ) -> Result<CosmosMsg, SharedError> {
    let wasm_msg = match &offer.info {
      AssetInfoBase::Cw20(contract_addr) => WasmMsg::Execute {
        contract_addr: contract_addr.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::Send {
          contract: self.0.to_string(),
          amount: offer.amount,
          msg: to_json_binary(&AmmRouterHookMsg::SwapExactAssetsForAssets {
            path,
            amount_out_min,
            to: to.to_string(),
            deadline,
          })?,
        })?,
        funds: vec![],
      },

      AssetInfoBase::Native(denom) => WasmMsg::Execute {
        contract_addr: self.0.to_string(),
        msg: to_json_binary(&AmmRouterExecuteMsg::SwapExactAssetsForAssets {
          path,
          amount_out_min,
          to: to.to_string(),
          deadline,
        })?,
        funds: vec![Coin {
          denom: denom.clone(),
          amount: offer.amount,
        }],
      },
      _ => Err(SharedError::NotSupported("asset info type".to_string()))?,
    };

    Ok(CosmosMsg::Wasm(wasm_msg))
  }

  pub fn query_amounts_out(
    &self,
    querier: &QuerierWrapper,
    amount_in: Uint128,
    path: Vec<AssetInfo>,
  ) -> Result<AmountsOutResponse, SharedError> {
    let response: AmountsOutResponse = querier.query_wasm_smart(
      self.0.to_string(),
      &AmmRouterQueryMsg::GetAmountsOut {
        amount_in,
        path,
      },
    )?;

    Ok(response)
  }
}
