use buyburn_shared::adapters::amm_router::AmmRouter;
use buyburn_shared::adapters::concentrated_router::ConcentratedRouter;
use buyburn_shared::msgs_buy_burn::{
  BurnParamsResponse, BurnSettings, ExecuteMsg, QueryMsg, RouteInit, SwapAssetResponse,
  SwapParamsResponse, SwapRoute, SwapSettings,
};
use cosmwasm_std::{Addr, Binary, Coin, StdResult, Uint128};
use cw_asset::{AssetInfo, AssetInfoUnchecked};
use cw_multi_test::{AppResponse, Executor};
use cw_ownable::{Action, Ownership};

use super::suite::TestingSuite;

/// Seconds a swap stays valid at the venue.
const DEADLINE: u64 = 60;

impl TestingSuite {
  fn contract(&self) -> Addr {
    self.addresses.buy_burn.clone()
  }

  fn execute_bb(
    &mut self,
    msg: ExecuteMsg,
    funds: &[Coin],
    sender: &str,
  ) -> Result<AppResponse, anyhow::Error> {
    let sender = self.address(sender);
    self.app.execute_contract(sender, self.contract(), &msg, funds)
  }

  #[allow(clippy::too_many_arguments)]
  pub fn e_bb_add_route(
    &mut self,
    asset: AssetInfoUnchecked,
    route: RouteInit,
    cap_per_swap: u128,
    incentive_bps: u16,
    interval: u64,
    sender: &str,
    result: impl Fn(Result<AppResponse, anyhow::Error>),
  ) -> &mut TestingSuite {
    let msg = ExecuteMsg::AddRoute {
      asset,
      route,
      cap_per_swap: Uint128::new(cap_per_swap),
      incentive_bps,
      interval,
    };
    result(self.execute_bb(msg, &[], sender));
    self
  }

  pub fn e_bb_edit_settings(
    &mut self,
    asset: AssetInfo,
    cap_per_swap: u128,
    incentive_bps: u16,
    interval: u64,
    sender: &str,
    result: impl Fn(Result<AppResponse, anyhow::Error>),
  ) -> &mut TestingSuite {
    let msg = ExecuteMsg::EditSettings {
      asset,
      cap_per_swap: Uint128::new(cap_per_swap),
      incentive_bps,
      interval,
    };
    result(self.execute_bb(msg, &[], sender));
    self
  }

  pub fn e_bb_disable_asset(
    &mut self,
    asset: AssetInfo,
    sender: &str,
    result: impl Fn(Result<AppResponse, anyhow::Error>),
  ) -> &mut TestingSuite {
    let msg = ExecuteMsg::DisableAsset {
      asset,
    };
    result(self.execute_bb(msg, &[], sender));
    self
  }

  pub fn e_bb_swap_token(
    &mut self,
    asset: AssetInfo,
    min_amount_out: u128,
    sender: &str,
    result: impl Fn(Result<AppResponse, anyhow::Error>),
  ) -> &mut TestingSuite {
    let deadline = self.now() + DEADLINE;
    self.e_bb_swap_token_deadline(asset, min_amount_out, deadline, sender, result)
  }

  pub fn e_bb_swap_token_deadline(
    &mut self,
    asset: AssetInfo,
    min_amount_out: u128,
    deadline: u64,
    sender: &str,
    result: impl Fn(Result<AppResponse, anyhow::Error>),
  ) -> &mut TestingSuite {
    let msg = ExecuteMsg::SwapToken {
      asset,
      min_amount_out: Uint128::new(min_amount_out),
      deadline,
    };
    result(self.execute_bb(msg, &[], sender));
    self
  }

  pub fn e_bb_buy_and_burn(
    &mut self,
    min_amount_out: u128,
    sender: &str,
    result: impl Fn(Result<AppResponse, anyhow::Error>),
  ) -> &mut TestingSuite {
    let deadline = self.now() + DEADLINE;
    self.e_bb_buy_and_burn_deadline(min_amount_out, deadline, sender, result)
  }

  pub fn e_bb_buy_and_burn_deadline(
    &mut self,
    min_amount_out: u128,
    deadline: u64,
    sender: &str,
    result: impl Fn(Result<AppResponse, anyhow::Error>),
  ) -> &mut TestingSuite {
    let msg = ExecuteMsg::BuyAndBurn {
      min_amount_out: Uint128::new(min_amount_out),
      deadline,
    };
    result(self.execute_bb(msg, &[], sender));
    self
  }

  pub fn e_bb_update_burn_settings(
    &mut self,
    cap_per_swap: Option<u128>,
    incentive_bps: Option<u16>,
    interval: Option<u64>,
    sender: &str,
    result: impl Fn(Result<AppResponse, anyhow::Error>),
  ) -> &mut TestingSuite {
    let msg = ExecuteMsg::UpdateBurnSettings {
      cap_per_swap: cap_per_swap.map(Uint128::new),
      incentive_bps,
      interval,
    };
    result(self.execute_bb(msg, &[], sender));
    self
  }

  pub fn e_bb_set_whitelisted(
    &mut self,
    addresses: Vec<String>,
    whitelisted: bool,
    sender: &str,
    result: impl Fn(Result<AppResponse, anyhow::Error>),
  ) -> &mut TestingSuite {
    let msg = ExecuteMsg::SetWhitelisted {
      addresses,
      whitelisted,
    };
    result(self.execute_bb(msg, &[], sender));
    self
  }

  pub fn e_bb_update_config(
    &mut self,
    amm_router: Option<String>,
    concentrated_router: Option<String>,
    funds: &[Coin],
    sender: &str,
    result: impl Fn(Result<AppResponse, anyhow::Error>),
  ) -> &mut TestingSuite {
    let msg = ExecuteMsg::UpdateConfig {
      amm_router,
      concentrated_router,
    };
    result(self.execute_bb(msg, funds, sender));
    self
  }

  pub fn e_bb_update_ownership(
    &mut self,
    action: Action,
    sender: &str,
    result: impl Fn(Result<AppResponse, anyhow::Error>),
  ) -> &mut TestingSuite {
    let msg = ExecuteMsg::UpdateOwnership(action);
    result(self.execute_bb(msg, &[], sender));
    self
  }

  fn query_bb<T: serde::de::DeserializeOwned>(&self, msg: &QueryMsg) -> StdResult<T> {
    self.app.wrap().query_wasm_smart(self.contract(), msg)
  }

  pub fn q_bb_ownership(&mut self, result: impl Fn(StdResult<Ownership<String>>)) -> &mut Self {
    result(self.query_bb(&QueryMsg::Ownership {}));
    self
  }

  pub fn q_bb_swap_settings(
    &mut self,
    asset: AssetInfo,
    result: impl Fn(StdResult<SwapSettings>),
  ) -> &mut Self {
    result(self.query_bb(&QueryMsg::SwapSettings {
      asset,
    }));
    self
  }

  pub fn q_bb_route(
    &mut self,
    asset: AssetInfo,
    result: impl Fn(StdResult<SwapRoute>),
  ) -> &mut Self {
    result(self.query_bb(&QueryMsg::Route {
      asset,
    }));
    self
  }

  pub fn q_bb_multihop_path(
    &mut self,
    asset: AssetInfo,
    result: impl Fn(StdResult<Binary>),
  ) -> &mut Self {
    result(self.query_bb(&QueryMsg::MultihopPath {
      asset,
    }));
    self
  }

  pub fn q_bb_swap_params(
    &mut self,
    asset: AssetInfo,
    result: impl Fn(StdResult<SwapParamsResponse>),
  ) -> &mut Self {
    result(self.query_bb(&QueryMsg::SwapParams {
      asset,
    }));
    self
  }

  pub fn q_bb_swap_assets(
    &mut self,
    start_after: Option<AssetInfo>,
    limit: Option<u32>,
    result: impl Fn(StdResult<Vec<SwapAssetResponse>>),
  ) -> &mut Self {
    result(self.query_bb(&QueryMsg::SwapAssets {
      start_after,
      limit,
    }));
    self
  }

  pub fn q_bb_burn_settings(&mut self, result: impl Fn(StdResult<BurnSettings>)) -> &mut Self {
    result(self.query_bb(&QueryMsg::BurnSettings {}));
    self
  }

  pub fn q_bb_burn_params(&mut self, result: impl Fn(StdResult<BurnParamsResponse>)) -> &mut Self {
    result(self.query_bb(&QueryMsg::BurnParams {}));
    self
  }

  pub fn q_bb_is_whitelisted(
    &mut self,
    address: &str,
    result: impl Fn(StdResult<bool>),
  ) -> &mut Self {
    let address = self.address(address).to_string();
    result(self.query_bb(&QueryMsg::IsWhitelisted {
      address,
    }));
    self
  }

  pub fn q_bb_whitelist(&mut self, result: impl Fn(StdResult<Vec<Addr>>)) -> &mut Self {
    result(self.query_bb(&QueryMsg::Whitelist {
      start_after: None,
      limit: None,
    }));
    self
  }

  /// Quote of the AMM router, used to derive a minimum output off the engine.
  pub fn q_amm_amount_out(&self, amount_in: u128, path: Vec<AssetInfo>) -> Uint128 {
    AmmRouter(self.addresses.amm_router.clone())
      .query_amounts_out(&self.app.wrap(), Uint128::new(amount_in), path)
      .unwrap()
      .amount_out()
  }

  pub fn q_cl_quote_single(
    &self,
    token_in: AssetInfo,
    token_out: AssetInfo,
    fee: u32,
    amount_in: u128,
  ) -> Uint128 {
    ConcentratedRouter(self.addresses.concentrated_router.clone())
      .query_quote_exact_input_single(
        &self.app.wrap(),
        token_in,
        token_out,
        fee,
        Uint128::new(amount_in),
      )
      .unwrap()
      .amount_out
  }

  pub fn q_cl_quote(&self, path: Binary, amount_in: u128) -> Uint128 {
    ConcentratedRouter(self.addresses.concentrated_router.clone())
      .query_quote_exact_input(&self.app.wrap(), path, Uint128::new(amount_in))
      .unwrap()
      .amount_out
  }
}
