use cosmwasm_schema::cw_serde;
use cosmwasm_std::{from_json, to_json_binary, Binary, StdError, StdResult};
use cw_asset::AssetInfo;

/// One pool on a concentrated liquidity path: the fee tier of the pool and the
/// asset received from it.
#[cw_serde]
pub struct PoolHop {
  pub fee: u32,
  pub asset: AssetInfo,
}

/// Multi-hop path understood by the concentrated router. It is stored and passed
/// around as opaque bytes, [`PoolPath::encode`] and [`PoolPath::decode`] convert
/// between both forms.
#[cw_serde]
pub struct PoolPath {
  pub start: AssetInfo,
  pub hops: Vec<PoolHop>,
}

impl PoolPath {
  /// `assets` has exactly one entry more than `fees`.
  pub fn from_assets(assets: &[AssetInfo], fees: &[u32]) -> StdResult<PoolPath> {
    if assets.len() != fees.len() + 1 {
      return Err(StdError::generic_err(format!(
        "path needs {} fees for {} assets, got {}",
        assets.len().saturating_sub(1),
        assets.len(),
        fees.len()
      )));
    }

    let (start, rest) = assets
      .split_first()
      .ok_or_else(|| StdError::generic_err("path needs at least one asset"))?;

    Ok(PoolPath {
      start: start.clone(),
      hops: rest
        .iter()
        .zip(fees.iter())
        .map(|(asset, fee)| PoolHop {
          fee: *fee,
          asset: asset.clone(),
        })
        .collect(),
    })
  }

  pub fn encode(&self) -> StdResult<Binary> {
    to_json_binary(self)
  }

  pub fn decode(data: &Binary) -> StdResult<PoolPath> {
    from_json(data)
  }

  /// All assets touched by the path, in order.
  pub fn assets(&self) -> Vec<AssetInfo> {
    let mut result = Vec::with_capacity(self.hops.len() + 1);
    result.push(self.start.clone());
    result.extend(self.hops.iter().map(|hop| hop.asset.clone()));
    result
  }

  pub fn last(&self) -> &AssetInfo {
    self.hops.last().map(|hop| &hop.asset).unwrap_or(&self.start)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use cosmwasm_std::Addr;

  #[test]
  fn from_assets_pairs_fees_with_hops() {
    let path = PoolPath::from_assets(
      &[
        AssetInfo::native("uluna"),
        AssetInfo::cw20(Addr::unchecked("usdc")),
        AssetInfo::native("uburn"),
      ],
      &[3000, 500],
    )
    .unwrap();

    assert_eq!(path.start, AssetInfo::native("uluna"));
    assert_eq!(
      path.hops,
      vec![
        PoolHop {
          fee: 3000,
          asset: AssetInfo::cw20(Addr::unchecked("usdc")),
        },
        PoolHop {
          fee: 500,
          asset: AssetInfo::native("uburn"),
        }
      ]
    );
    assert_eq!(path.last(), &AssetInfo::native("uburn"));

    let decoded = PoolPath::decode(&path.encode().unwrap()).unwrap();
    assert_eq!(decoded.assets().len(), 3);
  }

  #[test]
  fn from_assets_rejects_fee_mismatch() {
    let err = PoolPath::from_assets(
      &[AssetInfo::native("uluna"), AssetInfo::native("uburn")],
      &[3000, 500],
    )
    .unwrap_err();

    assert_eq!(err, StdError::generic_err("path needs 1 fees for 2 assets, got 2"));
  }

  #[test]
  fn decode_garbage() {
    PoolPath::decode(&Binary::from(b"not a path".to_vec())).unwrap_err();
  }
}
