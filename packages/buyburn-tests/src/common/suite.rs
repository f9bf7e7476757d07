use std::str::FromStr;

use cosmwasm_std::testing::MockStorage;
use cosmwasm_std::{coin, Addr, Coin, Decimal, Empty, Timestamp, Uint128};
use cw20::{Cw20Coin, Cw20ExecuteMsg, Cw20QueryMsg, TokenInfoResponse};
use cw_asset::{Asset, AssetInfo, AssetInfoBase, AssetInfoUnchecked};
use cw_multi_test::{
  App, AppBuilder, BankKeeper, DistributionKeeper, Executor, FailingModule, GovFailingModule,
  IbcFailingModule, MockAddressGenerator, MockApiBech32, StakeKeeper, StargateFailingModule,
  WasmKeeper,
};
use serde::Serialize;
use buyburn_shared::extensions::asset_info_ext::AssetInfoExt;
use buyburn_shared::msgs_buy_burn::{BurnInit, InstantiateMsg, RouteInit};

use super::helpers::{cw20_info, native_info, PROCEEDS, ULUNA, UUSD};
use crate::common::suite_contracts::*;
use crate::mocks::amm_router_mock;
use crate::mocks::concentrated_router_mock::{self, Pool};

type BuyBurnApp = App<
  BankKeeper,
  MockApiBech32,
  MockStorage,
  FailingModule<Empty, Empty, Empty>,
  WasmKeeper<Empty, Empty>,
  StakeKeeper,
  DistributionKeeper,
  IbcFailingModule,
  GovFailingModule,
  StargateFailingModule,
>;

pub const BURN_CAP: u128 = 1_000_000;
pub const BURN_INCENTIVE_BPS: u16 = 100;
pub const BURN_INTERVAL: u64 = 300;

/// Liquidity every router holds of each output asset.
const ROUTER_LIQUIDITY: u128 = 100_000_000_000;

pub struct TestingSuite {
  pub app: BuyBurnApp,
  pub addresses: Addresses,
}

#[derive(Clone)]
pub struct Addresses {
  pub creator: Addr,
  pub user1: Addr,
  pub user2: Addr,

  pub buy_burn: Addr,
  pub amm_router: Addr,
  pub concentrated_router: Addr,

  /// cw20 destroyed by the treasury
  pub burn_token: Addr,
  /// plain cw20
  pub token: Addr,
  /// cw20 that burns a share of every transfer
  pub taxed_token: Addr,
}

impl Addresses {
  pub fn proceeds_info(&self) -> AssetInfo {
    native_info(PROCEEDS)
  }

  pub fn uluna_info(&self) -> AssetInfo {
    native_info(ULUNA)
  }

  pub fn uusd_info(&self) -> AssetInfo {
    native_info(UUSD)
  }

  pub fn burn_token_info(&self) -> AssetInfo {
    cw20_info(&self.burn_token)
  }

  pub fn token_info(&self) -> AssetInfo {
    cw20_info(&self.token)
  }

  pub fn taxed_token_info(&self) -> AssetInfo {
    cw20_info(&self.taxed_token)
  }

  pub fn uluna(&self, amount: u128) -> Asset {
    Asset::native(ULUNA, amount)
  }

  pub fn proceeds(&self, amount: u128) -> Asset {
    Asset::native(PROCEEDS, amount)
  }

  pub fn taxed(&self, amount: u128) -> Asset {
    Asset::cw20(self.taxed_token.clone(), amount)
  }

  pub fn token(&self, amount: u128) -> Asset {
    Asset::cw20(self.token.clone(), amount)
  }
}

impl TestingSuite {
  pub fn def() -> Self {
    let api = MockApiBech32::new("terra");

    let creator = api.addr_make("creator");
    let user1 = api.addr_make("user1");
    let user2 = api.addr_make("user2");

    let bank = BankKeeper::new();

    let balances = vec![
      (
        creator.clone(),
        vec![
          coin(1_000_000_000_000, PROCEEDS),
          coin(1_000_000_000_000, ULUNA),
          coin(1_000_000_000_000, UUSD),
        ],
      ),
      (user1.clone(), vec![coin(1_000_000, ULUNA)]),
      (user2.clone(), vec![coin(1_000_000, ULUNA)]),
    ];

    let app = AppBuilder::new()
      .with_api(api)
      .with_wasm(WasmKeeper::default().with_address_generator(MockAddressGenerator))
      .with_bank(bank)
      .build(|router, _api, storage| {
        balances.into_iter().for_each(|(account, amount)| {
          router.bank.init_balance(storage, &account, amount).unwrap()
        });
      });

    Self {
      app,
      addresses: Addresses {
        creator,
        user1,
        user2,
        buy_burn: Addr::unchecked(""),
        amm_router: Addr::unchecked(""),
        concentrated_router: Addr::unchecked(""),
        burn_token: Addr::unchecked(""),
        token: Addr::unchecked(""),
        taxed_token: Addr::unchecked(""),
      },
    }
  }

  pub fn address(&self, address: &str) -> Addr {
    self.app.api().addr_make(address)
  }

  pub fn creator(&self) -> Addr {
    self.addresses.creator.clone()
  }

  pub fn set_time(&mut self, timestamp: Timestamp) -> &mut Self {
    let mut block_info = self.app.block_info();
    block_info.time = timestamp;
    self.app.set_block(block_info);
    self
  }

  pub fn add_seconds(&mut self, seconds: u64) -> &mut Self {
    let mut block_info = self.app.block_info();
    block_info.time = block_info.time.plus_seconds(seconds);
    block_info.height += 1;
    self.app.set_block(block_info);
    self
  }

  pub fn now(&self) -> u64 {
    self.app.block_info().time.seconds()
  }

  #[track_caller]
  pub fn init(&mut self) -> Addresses {
    // April 4th 2024 15:00:00 UTC
    self.set_time(Timestamp::from_seconds(1712242800u64));

    self.create_tokens();
    self.create_routers();
    self.create_buy_burn();

    self.addresses.clone()
  }

  #[track_caller]
  fn init_contract<T: Serialize>(&mut self, code_id: u64, msg: T, name: &str) -> Addr {
    let creator = self.creator();
    self
      .app
      .instantiate_contract(
        code_id,
        creator.clone(),
        &msg,
        &[],
        name.to_string(),
        Some(creator.to_string()),
      )
      .unwrap()
  }

  fn cw20_init(&self, name: &str, symbol: &str) -> cw20_base::msg::InstantiateMsg {
    cw20_base::msg::InstantiateMsg {
      name: name.to_string(),
      symbol: symbol.to_string(),
      decimals: 6,
      initial_balances: vec![Cw20Coin {
        address: self.creator().to_string(),
        amount: Uint128::new(1_000_000_000_000),
      }],
      mint: None,
      marketing: None,
    }
  }

  fn create_tokens(&mut self) {
    let cw20_code = self.app.store_code(cw20_base());
    let taxed_code = self.app.store_code(taxed_cw20());

    let msg = self.cw20_init("Burn Token", "BURN");
    self.addresses.burn_token = self.init_contract(cw20_code, msg, "burn_token");

    let msg = self.cw20_init("Token", "TKN");
    self.addresses.token = self.init_contract(cw20_code, msg, "token");

    let msg = self.cw20_init("Taxed Token", "TAX");
    self.addresses.taxed_token = self.init_contract(taxed_code, msg, "taxed_token");
  }

  fn create_routers(&mut self) {
    let addr = self.addresses.clone();

    let code_id = self.app.store_code(amm_router());
    let msg = amm_router_mock::InstantiateMsg {
      rates: vec![
        (addr.proceeds_info(), addr.burn_token_info(), Decimal::from_str("2").unwrap()),
        (addr.uluna_info(), addr.uusd_info(), Decimal::from_str("0.5").unwrap()),
        (addr.uluna_info(), addr.token_info(), Decimal::from_str("1.5").unwrap()),
        (addr.token_info(), addr.uusd_info(), Decimal::from_str("2").unwrap()),
        (addr.taxed_token_info(), addr.uusd_info(), Decimal::from_str("1").unwrap()),
      ],
    };
    self.addresses.amm_router = self.init_contract(code_id, msg, "amm_router");

    let code_id = self.app.store_code(concentrated_router());
    let msg = concentrated_router_mock::InstantiateMsg {
      pools: vec![
        Pool {
          token_in: addr.taxed_token_info(),
          token_out: addr.uusd_info(),
          fee: 3000,
          rate: Decimal::from_str("0.25").unwrap(),
        },
        Pool {
          token_in: addr.uluna_info(),
          token_out: addr.token_info(),
          fee: 500,
          rate: Decimal::from_str("2").unwrap(),
        },
        Pool {
          token_in: addr.token_info(),
          token_out: addr.burn_token_info(),
          fee: 3000,
          rate: Decimal::from_str("3").unwrap(),
        },
        Pool {
          token_in: addr.proceeds_info(),
          token_out: addr.burn_token_info(),
          fee: 10000,
          rate: Decimal::from_str("4").unwrap(),
        },
      ],
    };
    self.addresses.concentrated_router = self.init_contract(code_id, msg, "concentrated_router");

    for router in [self.addresses.amm_router.clone(), self.addresses.concentrated_router.clone()] {
      for token in [self.addresses.burn_token.clone(), self.addresses.token.clone()] {
        self.fund(cw20_info(&token).with_balance_u128(ROUTER_LIQUIDITY), &router);
      }
      self.fund(native_info(UUSD).with_balance_u128(ROUTER_LIQUIDITY), &router);
    }
  }

  fn create_buy_burn(&mut self) {
    let addr = self.addresses.clone();
    let code_id = self.app.store_code(buyburn_treasury());

    let msg = InstantiateMsg {
      owner: addr.creator.to_string(),
      amm_router: addr.amm_router.to_string(),
      concentrated_router: addr.concentrated_router.to_string(),
      burn: BurnInit {
        input_asset: AssetInfoUnchecked::native(PROCEEDS),
        burn_asset: AssetInfoUnchecked::cw20(addr.burn_token.to_string()),
        route: RouteInit::AmmPath {
          path: vec![
            AssetInfoUnchecked::native(PROCEEDS),
            AssetInfoUnchecked::cw20(addr.burn_token.to_string()),
          ],
        },
        cap_per_swap: Uint128::new(BURN_CAP),
        incentive_bps: BURN_INCENTIVE_BPS,
        interval: BURN_INTERVAL,
      },
      whitelist: Some(vec![addr.user1.to_string()]),
    };

    self.addresses.buy_burn = self.init_contract(code_id, msg, "buy_burn");
  }

  /// Sends `asset` from the creator.
  #[track_caller]
  pub fn fund(&mut self, asset: Asset, to: &Addr) -> &mut Self {
    let creator = self.creator();
    match &asset.info {
      AssetInfoBase::Native(denom) => {
        let funds = [Coin::new(asset.amount.u128(), denom)];
        self.app.send_tokens(creator, to.clone(), &funds).unwrap();
      },
      AssetInfoBase::Cw20(token) => {
        self
          .app
          .execute_contract(
            creator,
            token.clone(),
            &Cw20ExecuteMsg::Transfer {
              recipient: to.to_string(),
              amount: asset.amount,
            },
            &[],
          )
          .unwrap();
      },
      _ => panic!("unsupported asset"),
    }
    self
  }

  pub fn fund_treasury(&mut self, asset: Asset) -> &mut Self {
    let buy_burn = self.addresses.buy_burn.clone();
    self.fund(asset, &buy_burn)
  }

  #[track_caller]
  pub fn query_balance(&self, info: &AssetInfo, address: &Addr) -> Uint128 {
    info.query_balance(&self.app.wrap(), address.to_string()).unwrap()
  }

  #[track_caller]
  pub fn query_total_supply(&self, token: &Addr) -> Uint128 {
    let info: TokenInfoResponse =
      self.app.wrap().query_wasm_smart(token.to_string(), &Cw20QueryMsg::TokenInfo {}).unwrap();
    info.total_supply
  }
}
