use crate::{
  common::{helpers::u, suite::TestingSuite},
  extensions::app_response_ext::{EventChecker, Valid},
};
use buyburn_shared::msgs_buy_burn::{RouteInit, SwapRoute, SwapSettings, SwapType};
use buyburn_treasury::error::ContractError;
use cosmwasm_std::{attr, coins, Binary};
use cw_asset::AssetInfoUnchecked;
use cw_ownable::OwnershipError;
use cw_utils::PaymentError;

#[test]
fn test_registry() {
  let mut suite = TestingSuite::def();
  let addr = suite.init();
  let now = suite.now();

  suite
    .e_bb_add_route(
      AssetInfoUnchecked::native("uluna"),
      RouteInit::AmmPath {
        path: vec![AssetInfoUnchecked::native("uluna"), AssetInfoUnchecked::native("uusd")],
      },
      1_000,
      100,
      300,
      "user1",
      |res| res.assert_error(ContractError::OwnershipError(OwnershipError::NotOwner)),
    )
    .e_bb_add_route(
      AssetInfoUnchecked::native("uluna"),
      RouteInit::AmmPath {
        path: vec![AssetInfoUnchecked::native("uluna"), AssetInfoUnchecked::native("uusd")],
      },
      1_000,
      100,
      300,
      "creator",
      |res| {
        res.assert_attribute(attr("action", "buyburn/add_route")).unwrap();
        res.assert_attribute(attr("swap_type", "Amm")).unwrap();
      },
    )
    .e_bb_add_route(
      AssetInfoUnchecked::native("uluna"),
      RouteInit::ConcentratedSingle {
        token_out: AssetInfoUnchecked::native("uusd"),
        fee: 500,
      },
      1_000,
      100,
      300,
      "creator",
      |res| res.assert_error(ContractError::DuplicateSwapToken(addr.uluna_info())),
    )
    .e_bb_add_route(
      AssetInfoUnchecked::cw20(addr.taxed_token.to_string()),
      RouteInit::ConcentratedSingle {
        token_out: AssetInfoUnchecked::native("uusd"),
        fee: 3000,
      },
      5_000,
      50,
      60,
      "creator",
      |res| {
        res.assert_attribute(attr("swap_type", "Concentrated")).unwrap();
      },
    )
    .q_bb_swap_assets(None, None, |res| {
      let assets = res.unwrap();
      assert_eq!(assets.len(), 2);
      assert!(assets.iter().any(|a| a.asset == addr.uluna_info()
        && a.route
          == SwapRoute::AmmPath {
            path: vec![addr.uluna_info(), addr.uusd_info()],
          }));
      assert!(assets.iter().any(|a| a.asset == addr.taxed_token_info()
        && a.settings.swap_type == SwapType::Concentrated));
    })
    .q_bb_swap_assets(None, Some(1), |res| {
      assert_eq!(res.unwrap().len(), 1);
    })
    .e_bb_edit_settings(addr.uluna_info(), 2_000, 0, 10, "user1", |res| {
      res.assert_error(ContractError::OwnershipError(OwnershipError::NotOwner));
    })
    .e_bb_edit_settings(addr.uluna_info(), 2_000, 0, 10, "creator", |res| res.assert_valid())
    .q_bb_swap_settings(addr.uluna_info(), |res| {
      assert_eq!(
        res.unwrap(),
        SwapSettings {
          swap_type: SwapType::Amm,
          cap_per_swap: u(2_000),
          incentive_bps: 0,
          interval: 10,
          next_available: now + 300,
        }
      );
    })
    .e_bb_disable_asset(addr.taxed_token_info(), "creator", |res| {
      res.assert_attribute(attr("action", "buyburn/disable_asset")).unwrap();
    })
    .e_bb_disable_asset(addr.taxed_token_info(), "creator", |res| {
      res.assert_error(ContractError::TokenNotEnabled(addr.taxed_token_info()));
    })
    .q_bb_swap_settings(addr.taxed_token_info(), |res| {
      assert_eq!(res.unwrap(), SwapSettings::default());
    })
    .q_bb_route(addr.taxed_token_info(), |res| {
      assert_eq!(res.unwrap(), SwapRoute::Disabled);
    })
    .q_bb_swap_params(addr.taxed_token_info(), |res| {
      assert!(res.unwrap_err().to_string().contains("Asset not enabled"));
    })
    .q_bb_swap_assets(None, None, |res| {
      assert_eq!(res.unwrap().len(), 1);
    });
}

#[test]
fn test_invalid_routes() {
  let mut suite = TestingSuite::def();
  let addr = suite.init();

  suite
    .e_bb_add_route(
      AssetInfoUnchecked::native("uluna"),
      RouteInit::AmmPath {
        path: vec![
          AssetInfoUnchecked::native("uluna"),
          AssetInfoUnchecked::native("uusd"),
          AssetInfoUnchecked::native("uluna"),
        ],
      },
      1_000,
      100,
      300,
      "creator",
      |res| res.assert_error(ContractError::IncorrectPathSettings {}),
    )
    .e_bb_add_route(
      AssetInfoUnchecked::native("uluna"),
      RouteInit::ConcentratedSingle {
        token_out: AssetInfoUnchecked::cw20(""),
        fee: 500,
      },
      1_000,
      100,
      300,
      "creator",
      |res| res.assert_error(ContractError::ZeroAddress {}),
    )
    .e_bb_add_route(
      AssetInfoUnchecked::native("uluna"),
      RouteInit::ConcentratedMultihop {
        path: Binary::from(b"[1,2,3]".to_vec()),
      },
      1_000,
      100,
      300,
      "creator",
      |res| res.assert_error(ContractError::IncorrectPathSettings {}),
    )
    .e_bb_add_route(
      AssetInfoUnchecked::native("uluna"),
      RouteInit::AmmPath {
        path: vec![AssetInfoUnchecked::native("uluna"), AssetInfoUnchecked::native("uusd")],
      },
      1_000,
      10_001,
      300,
      "creator",
      |res| res.assert_error(ContractError::IncentiveTooHigh(10_001)),
    )
    .e_bb_update_config(None, None, &coins(1, "uluna"), "creator", |res| {
      res.assert_error(ContractError::PaymentError(PaymentError::NonPayable {}));
    })
    .q_bb_swap_settings(addr.uluna_info(), |res| {
      assert_eq!(res.unwrap(), SwapSettings::default());
    });
}
