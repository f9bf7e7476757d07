use crate::contract::execute;
use crate::error::ContractError;
use crate::tests::helpers::{
  add_route, amm_path, cw20, env_at, mock_dependencies, native, now, query_settings,
  query_swap_params, setup_contract, swap_token, AMM_ROUTER, CONCENTRATED_ROUTER, USER,
};
use buyburn_shared::adapters::amm_router::AmmRouterExecuteMsg;
use buyburn_shared::adapters::concentrated_router::{
  ConcentratedRouterExecuteMsg, ConcentratedRouterHookMsg,
};
use buyburn_shared::error::SharedError;
use buyburn_shared::helpers::pool_path::PoolPath;
use buyburn_shared::msgs_buy_burn::{ExecuteMsg, RouteInit, SwapParamsResponse, SwapType};
use cosmwasm_std::testing::{mock_info, MOCK_CONTRACT_ADDR};
use cosmwasm_std::{
  coin, coins, to_json_binary, BankMsg, CosmosMsg, Response, SubMsg, Uint128, WasmMsg,
};
use cw20::Cw20ExecuteMsg;
use cw_asset::{Asset, AssetInfoUnchecked};
use cw_utils::PaymentError;

#[test]
fn test_swap_native_amm() {
  let mut deps = mock_dependencies();
  setup_contract(deps.as_mut());

  add_route(
    deps.as_mut(),
    AssetInfoUnchecked::native("uluna"),
    amm_path(&["uluna", "uusd"]),
    1_000,
    100,
    300,
  )
  .unwrap();
  deps.querier.set_bank_balances(&[coin(5_000, "uluna")]);

  assert_eq!(
    query_swap_params(deps.as_ref(), native("uluna")).unwrap(),
    SwapParamsResponse {
      amount: Uint128::new(1_000),
      incentive: Uint128::new(10),
      next_available: now() + 300,
      swap_type: SwapType::Amm,
    }
  );

  let err = swap_token(deps.as_mut(), env_at(now()), USER, native("uluna"), 0).unwrap_err();
  assert_eq!(err, ContractError::Cooldown(now() + 300));

  let time = now() + 300;
  let res = swap_token(deps.as_mut(), env_at(time), USER, native("uluna"), 900).unwrap();
  assert_eq!(
    res.messages,
    vec![
      SubMsg::new(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: AMM_ROUTER.to_string(),
        msg: to_json_binary(&AmmRouterExecuteMsg::SwapExactAssetsForAssets {
          path: vec![native("uluna"), native("uusd")],
          amount_out_min: Uint128::new(900),
          to: MOCK_CONTRACT_ADDR.to_string(),
          deadline: time + 60,
        })
        .unwrap(),
        funds: coins(990, "uluna"),
      })),
      SubMsg::new(Asset::native("uluna", 10u128).transfer_msg(USER).unwrap()),
    ]
  );
  assert_eq!(
    res.messages[1].msg,
    CosmosMsg::Bank(BankMsg::Send {
      to_address: USER.to_string(),
      amount: coins(10, "uluna"),
    })
  );
  assert_eq!(
    res,
    Response::new()
      .add_submessages(res.messages.clone())
      .add_attribute("action", "buyburn/swap_token")
      .add_attribute("asset", "native:uluna")
      .add_attribute("amount", "1000")
      .add_attribute("swapped", "990")
      .add_attribute("incentive", "10")
      .add_attribute("next_available", (time + 300).to_string())
  );

  assert_eq!(query_settings(deps.as_ref(), native("uluna")).next_available, time + 300);

  let err = swap_token(deps.as_mut(), env_at(time + 299), USER, native("uluna"), 0).unwrap_err();
  assert_eq!(err, ContractError::Cooldown(time + 300));

  swap_token(deps.as_mut(), env_at(time + 300), USER, native("uluna"), 0).unwrap();
}

#[test]
fn test_swap_cw20_concentrated_single() {
  let mut deps = mock_dependencies();
  setup_contract(deps.as_mut());

  add_route(
    deps.as_mut(),
    AssetInfoUnchecked::cw20("token"),
    RouteInit::ConcentratedSingle {
      token_out: AssetInfoUnchecked::native("uusd"),
      fee: 3000,
    },
    1_000,
    0,
    60,
  )
  .unwrap();
  deps.querier.set_cw20_balance("token", MOCK_CONTRACT_ADDR, 2_000);

  let time = now() + 60;
  let res = swap_token(deps.as_mut(), env_at(time), USER, cw20("token"), 1).unwrap();

  // no incentive configured, nothing is paid out
  assert_eq!(
    res.messages,
    vec![SubMsg::new(CosmosMsg::Wasm(WasmMsg::Execute {
      contract_addr: "token".to_string(),
      msg: to_json_binary(&Cw20ExecuteMsg::Send {
        contract: CONCENTRATED_ROUTER.to_string(),
        amount: Uint128::new(1_000),
        msg: to_json_binary(&ConcentratedRouterHookMsg::ExactInputSingle {
          token_out: native("uusd"),
          fee: 3000,
          amount_out_minimum: Uint128::new(1),
          recipient: MOCK_CONTRACT_ADDR.to_string(),
          deadline: time + 60,
        })
        .unwrap(),
      })
      .unwrap(),
      funds: vec![],
    }))]
  );
  assert_eq!(res.attributes[5].value, (time + 60).to_string());
}

#[test]
fn test_swap_native_concentrated_multihop() {
  let mut deps = mock_dependencies();
  setup_contract(deps.as_mut());

  let path = PoolPath::from_assets(&[native("uluna"), cw20("token"), native("uburn")], &[500, 3000])
    .unwrap()
    .encode()
    .unwrap();

  add_route(
    deps.as_mut(),
    AssetInfoUnchecked::native("uluna"),
    RouteInit::ConcentratedMultihop {
      path: path.clone(),
    },
    10_000,
    250,
    0,
  )
  .unwrap();
  deps.querier.set_bank_balances(&[coin(4_000, "uluna")]);

  let res = swap_token(deps.as_mut(), env_at(now()), USER, native("uluna"), 0).unwrap();
  assert_eq!(
    res.messages,
    vec![
      SubMsg::new(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: CONCENTRATED_ROUTER.to_string(),
        msg: to_json_binary(&ConcentratedRouterExecuteMsg::ExactInput {
          path,
          amount_out_minimum: Uint128::zero(),
          recipient: MOCK_CONTRACT_ADDR.to_string(),
          deadline: now() + 60,
        })
        .unwrap(),
        funds: coins(3_900, "uluna"),
      })),
      SubMsg::new(CosmosMsg::Bank(BankMsg::Send {
        to_address: USER.to_string(),
        amount: coins(100, "uluna"),
      })),
    ]
  );

  // zero interval keeps the asset available
  swap_token(deps.as_mut(), env_at(now()), USER, native("uluna"), 0).unwrap();
}

#[test]
fn test_swap_check_order() {
  let mut deps = mock_dependencies();
  setup_contract(deps.as_mut());

  let err = swap_token(deps.as_mut(), env_at(now()), "stranger", native("uluna"), 0).unwrap_err();
  assert_eq!(err, ContractError::SharedError(SharedError::Unauthorized {}));

  let err = swap_token(deps.as_mut(), env_at(now()), USER, native("uluna"), 0).unwrap_err();
  assert_eq!(err, ContractError::TokenNotEnabled(native("uluna")));

  add_route(
    deps.as_mut(),
    AssetInfoUnchecked::native("uluna"),
    amm_path(&["uluna", "uusd"]),
    1_000,
    100,
    300,
  )
  .unwrap();

  // attached coins never count toward the treasury balance
  let err = execute(
    deps.as_mut(),
    env_at(now() + 300),
    mock_info(USER, &coins(1_000, "uluna")),
    ExecuteMsg::SwapToken {
      asset: native("uluna"),
      min_amount_out: Uint128::zero(),
      deadline: now() + 360,
    },
  )
  .unwrap_err();
  assert_eq!(err, ContractError::PaymentError(PaymentError::NonPayable {}));

  // still in cooldown, the empty balance is reported first
  let err = swap_token(deps.as_mut(), env_at(now()), USER, native("uluna"), 0).unwrap_err();
  assert_eq!(err, ContractError::InsufficientBalance {});

  deps.querier.set_bank_balances(&[coin(1_000, "uluna")]);
  let err = swap_token(deps.as_mut(), env_at(now()), USER, native("uluna"), 0).unwrap_err();
  assert_eq!(err, ContractError::Cooldown(now() + 300));

  let err = swap_token(deps.as_mut(), env_at(now() + 300), "stranger", native("uluna"), 0)
    .unwrap_err();
  assert_eq!(err, ContractError::SharedError(SharedError::Unauthorized {}));

  // a failed call leaves the cooldown in place
  assert_eq!(query_settings(deps.as_ref(), native("uluna")).next_available, now() + 300);
}

#[test]
fn test_swap_nothing_left_after_incentive() {
  let mut deps = mock_dependencies();
  setup_contract(deps.as_mut());

  add_route(
    deps.as_mut(),
    AssetInfoUnchecked::native("uluna"),
    amm_path(&["uluna", "uusd"]),
    1_000,
    10_000,
    0,
  )
  .unwrap();
  deps.querier.set_bank_balances(&[coin(1_000, "uluna")]);

  let err = swap_token(deps.as_mut(), env_at(now()), USER, native("uluna"), 0).unwrap_err();
  assert_eq!(err, ContractError::InsufficientBalance {});
}
