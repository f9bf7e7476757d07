use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{to_json_binary, Addr, Binary, CosmosMsg, StdResult, Uint128, WasmMsg};
use cw_asset::{AssetInfo, AssetInfoUnchecked};
use cw_ownable::{cw_ownable_execute, Ownership};

#[cw_serde]
pub struct InstantiateMsg {
  pub owner: String,
  pub amm_router: String,
  pub concentrated_router: String,
  pub burn: BurnInit,
  /// Addresses allowed to trigger swaps from the start
  pub whitelist: Option<Vec<String>>,
}

#[cw_serde]
pub struct BurnInit {
  /// Proceeds asset accumulated by the treasury
  pub input_asset: AssetInfoUnchecked,
  /// Asset bought and destroyed
  pub burn_asset: AssetInfoUnchecked,
  pub route: RouteInit,
  pub cap_per_swap: Uint128,
  pub incentive_bps: u16,
  pub interval: u64,
}

#[cw_ownable_execute]
#[cw_serde]
pub enum ExecuteMsg {
  /// Enables an asset with a route and its swap limits
  AddRoute {
    asset: AssetInfoUnchecked,
    route: RouteInit,
    cap_per_swap: Uint128,
    incentive_bps: u16,
    interval: u64,
  },

  /// Changes the limits of an enabled asset. The route and the cooldown stay as they are.
  EditSettings {
    asset: AssetInfo,
    cap_per_swap: Uint128,
    incentive_bps: u16,
    interval: u64,
  },

  DisableAsset {
    asset: AssetInfo,
  },

  /// Swaps the next batch of an asset along its route. The caller receives the incentive.
  SwapToken {
    asset: AssetInfo,
    min_amount_out: Uint128,
    deadline: u64,
  },

  /// Swaps the next batch of proceeds into the burn asset and burns everything bought.
  BuyAndBurn {
    min_amount_out: Uint128,
    deadline: u64,
  },

  UpdateBurnSettings {
    cap_per_swap: Option<Uint128>,
    incentive_bps: Option<u16>,
    interval: Option<u64>,
  },

  SetWhitelisted {
    addresses: Vec<String>,
    whitelisted: bool,
  },

  UpdateConfig {
    amm_router: Option<String>,
    concentrated_router: Option<String>,
  },

  Callback(CallbackMsg),
}

/// Route as supplied by the owner, assets are validated when stored.
#[cw_serde]
pub enum RouteInit {
  /// AMM router path, the first asset is the swapped asset
  AmmPath {
    path: Vec<AssetInfoUnchecked>,
  },
  /// Single concentrated liquidity pool
  ConcentratedSingle {
    token_out: AssetInfoUnchecked,
    fee: u32,
  },
  /// Encoded [`crate::helpers::pool_path::PoolPath`]
  ConcentratedMultihop {
    path: Binary,
  },
}

#[cw_serde]
#[derive(Default)]
pub enum SwapType {
  #[default]
  Disabled,
  Amm,
  Concentrated,
}

#[cw_serde]
#[derive(Default)]
pub enum SwapRoute {
  #[default]
  Disabled,
  AmmPath {
    path: Vec<AssetInfo>,
  },
  ConcentratedSingle {
    token_out: AssetInfo,
    fee: u32,
  },
  ConcentratedMultihop {
    path: Binary,
  },
}

impl SwapRoute {
  pub fn swap_type(&self) -> SwapType {
    match self {
      SwapRoute::Disabled => SwapType::Disabled,
      SwapRoute::AmmPath {
        ..
      } => SwapType::Amm,
      SwapRoute::ConcentratedSingle {
        ..
      }
      | SwapRoute::ConcentratedMultihop {
        ..
      } => SwapType::Concentrated,
    }
  }

  /// true only for concentrated routes with an encoded path
  pub fn is_multihop(&self) -> bool {
    matches!(
      self,
      SwapRoute::ConcentratedMultihop {
        ..
      }
    )
  }
}

#[cw_serde]
#[derive(Default)]
pub struct SwapSettings {
  pub swap_type: SwapType,
  pub cap_per_swap: Uint128,
  pub incentive_bps: u16,
  pub interval: u64,
  /// seconds, the asset is in cooldown before this time
  pub next_available: u64,
}

#[cw_serde]
pub struct BurnSettings {
  pub input_asset: AssetInfo,
  pub burn_asset: AssetInfo,
  pub route: SwapRoute,
  pub cap_per_swap: Uint128,
  pub incentive_bps: u16,
  pub interval: u64,
  pub next_available: u64,
}

#[cw_serde]
pub struct Config {
  pub amm_router: Addr,
  pub concentrated_router: Addr,
}

#[cw_serde]
pub enum CallbackMsg {
  /// Burns what the swap delivered: the burn asset balance above `prev_balance`
  BurnReceived {
    prev_balance: Uint128,
  },
}

impl CallbackMsg {
  pub fn into_cosmos_msg(&self, contract_addr: &Addr) -> StdResult<CosmosMsg> {
    Ok(CosmosMsg::Wasm(WasmMsg::Execute {
      contract_addr: String::from(contract_addr),
      msg: to_json_binary(&ExecuteMsg::Callback(self.clone()))?,
      funds: vec![],
    }))
  }
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
  #[returns(Ownership<Addr>)]
  Ownership {},

  #[returns(Config)]
  Config {},

  /// Settings of an asset, all zero when it is not enabled
  #[returns(SwapSettings)]
  SwapSettings {
    asset: AssetInfo,
  },

  #[returns(SwapRoute)]
  Route {
    asset: AssetInfo,
  },

  /// Empty unless the asset uses an AMM route
  #[returns(Vec<AssetInfo>)]
  AmmPath {
    asset: AssetInfo,
  },

  #[returns(SingleHopResponse)]
  ConcentratedSingle {
    asset: AssetInfo,
  },

  #[returns(bool)]
  IsMultihop {
    asset: AssetInfo,
  },

  /// Empty unless the asset uses a concentrated multi-hop route
  #[returns(Binary)]
  MultihopPath {
    asset: AssetInfo,
  },

  /// Amount and incentive of the next swap of an enabled asset
  #[returns(SwapParamsResponse)]
  SwapParams {
    asset: AssetInfo,
  },

  #[returns(Vec<SwapAssetResponse>)]
  SwapAssets {
    start_after: Option<AssetInfo>,
    limit: Option<u32>,
  },

  #[returns(BurnSettings)]
  BurnSettings {},

  #[returns(BurnParamsResponse)]
  BurnParams {},

  #[returns(bool)]
  IsWhitelisted {
    address: String,
  },

  #[returns(Vec<Addr>)]
  Whitelist {
    start_after: Option<String>,
    limit: Option<u32>,
  },
}

#[cw_serde]
pub struct SingleHopResponse {
  pub token_out: Option<AssetInfo>,
  pub fee: u32,
}

#[cw_serde]
pub struct SwapParamsResponse {
  pub amount: Uint128,
  pub incentive: Uint128,
  pub next_available: u64,
  pub swap_type: SwapType,
}

#[cw_serde]
pub struct BurnParamsResponse {
  pub amount: Uint128,
  pub incentive: Uint128,
  pub next_available: u64,
}

#[cw_serde]
pub struct SwapAssetResponse {
  pub asset: AssetInfo,
  pub settings: SwapSettings,
  pub route: SwapRoute,
}

#[cw_serde]
pub struct MigrateMsg {}
