use cosmwasm_std::{to_json_binary, BankMsg, Coin, CosmosMsg, WasmMsg};
use cw20::Cw20ExecuteMsg;
use cw_asset::{Asset, AssetInfoBase};

use crate::error::SharedError;

pub trait AssetExt {
  /// Destroys the amount held by the sender. Cw20 tokens use the token's burn,
  /// native coins are burned through the bank module.
  fn burn_msg(&self) -> Result<CosmosMsg, SharedError>;
}

impl AssetExt for Asset {
  fn burn_msg(&self) -> Result<CosmosMsg, SharedError> {
    match &self.info {
      AssetInfoBase::Cw20(addr) => Ok(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: addr.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::Burn {
          amount: self.amount,
        })?,
        funds: vec![],
      })),
      AssetInfoBase::Native(denom) => Ok(CosmosMsg::Bank(BankMsg::Burn {
        amount: vec![Coin {
          denom: denom.clone(),
          amount: self.amount,
        }],
      })),
      _ => Err(SharedError::NotSupportedAssetInfo()),
    }
  }
}
