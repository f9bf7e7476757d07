use cosmwasm_std::{Addr, Uint128};
use cw_asset::AssetInfo;

pub const PROCEEDS: &str = "uproceeds";
pub const ULUNA: &str = "uluna";
pub const UUSD: &str = "uusd";

pub fn native_info(denom: &str) -> AssetInfo {
  AssetInfo::native(denom)
}

pub fn cw20_info(addr: &Addr) -> AssetInfo {
  AssetInfo::cw20(addr.clone())
}

pub fn u(a: u128) -> Uint128 {
  Uint128::new(a)
}
