use cosmwasm_std::Uint128;
use cw_asset::{Asset, AssetInfo, AssetInfoBase, AssetInfoUnchecked};

pub trait AssetInfoExt {
  /// simplifies converting an AssetInfo to an Asset with balance
  fn with_balance(&self, balance: Uint128) -> Asset;
  fn with_balance_u128(&self, amount: u128) -> Asset;
}

impl AssetInfoExt for AssetInfo {
  fn with_balance(&self, amount: Uint128) -> Asset {
    match self {
      AssetInfoBase::Native(denom) => Asset::native(denom, amount),
      AssetInfoBase::Cw20(contract_addr) => Asset::cw20(contract_addr.clone(), amount),
      _ => Asset::new(self.clone(), amount),
    }
  }

  fn with_balance_u128(&self, amount: u128) -> Asset {
    self.with_balance(Uint128::new(amount))
  }
}

pub trait AssetInfoUncheckedExt {
  /// true for the null asset: an empty denom or an empty contract address
  fn is_empty(&self) -> bool;
}

impl AssetInfoUncheckedExt for AssetInfoUnchecked {
  fn is_empty(&self) -> bool {
    match self {
      AssetInfoBase::Native(denom) => denom.trim().is_empty(),
      AssetInfoBase::Cw20(contract_addr) => contract_addr.trim().is_empty(),
      _ => true,
    }
  }
}
