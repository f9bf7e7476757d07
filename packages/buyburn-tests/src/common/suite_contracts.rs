use crate::mocks::{amm_router_mock, concentrated_router_mock, taxed_cw20_mock};
use cosmwasm_std::Empty;
use cw_multi_test::{Contract, ContractWrapper};

pub fn buyburn_treasury() -> Box<dyn Contract<Empty>> {
  let contract = ContractWrapper::new(
    buyburn_treasury::contract::execute,
    buyburn_treasury::contract::instantiate,
    buyburn_treasury::query::query,
  )
  .with_migrate(buyburn_treasury::migrate::migrate);

  Box::new(contract)
}

pub fn cw20_base() -> Box<dyn Contract<Empty>> {
  let contract = ContractWrapper::new(
    cw20_base::contract::execute,
    cw20_base::contract::instantiate,
    cw20_base::contract::query,
  );

  Box::new(contract)
}

pub fn taxed_cw20() -> Box<dyn Contract<Empty>> {
  let contract = ContractWrapper::new(
    taxed_cw20_mock::execute,
    taxed_cw20_mock::instantiate,
    taxed_cw20_mock::query,
  );

  Box::new(contract)
}

pub fn amm_router() -> Box<dyn Contract<Empty>> {
  let contract = ContractWrapper::new(
    amm_router_mock::execute,
    amm_router_mock::instantiate,
    amm_router_mock::query,
  );

  Box::new(contract)
}

pub fn concentrated_router() -> Box<dyn Contract<Empty>> {
  let contract = ContractWrapper::new(
    concentrated_router_mock::execute,
    concentrated_router_mock::instantiate,
    concentrated_router_mock::query,
  );

  Box::new(contract)
}
