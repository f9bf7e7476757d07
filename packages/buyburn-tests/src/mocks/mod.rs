pub mod amm_router_mock;
pub mod concentrated_router_mock;
pub mod taxed_cw20_mock;
