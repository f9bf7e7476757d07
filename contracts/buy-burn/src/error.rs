use buyburn_shared::error::SharedError;
use cosmwasm_std::{Response, StdError};
use cw_asset::{AssetError, AssetInfo};
use cw_ownable::OwnershipError;
use cw_utils::PaymentError;
use thiserror::Error;

pub type ContractResult = Result<Response, ContractError>;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
  #[error("{0}")]
  Std(#[from] StdError),

  #[error("{0}")]
  OwnershipError(#[from] OwnershipError),

  #[error("{0}")]
  SharedError(#[from] SharedError),

  #[error("{0}")]
  AssetError(#[from] AssetError),

  #[error("{0}")]
  PaymentError(#[from] PaymentError),

  #[error("Semver parsing error: {0}")]
  SemVer(String),

  #[error("Asset or route endpoint is empty")]
  ZeroAddress {},

  #[error("Incorrect path settings")]
  IncorrectPathSettings {},

  #[error("Asset already enabled: {0}")]
  DuplicateSwapToken(AssetInfo),

  #[error("Asset not enabled: {0}")]
  TokenNotEnabled(AssetInfo),

  #[error("Insufficient balance")]
  InsufficientBalance {},

  #[error("Cooldown: next swap available at {0}")]
  Cooldown(u64),

  #[error("Incentive of {0} bps is higher than 100%")]
  IncentiveTooHigh(u16),
}

impl From<semver::Error> for ContractError {
  fn from(err: semver::Error) -> Self {
    Self::SemVer(err.to_string())
  }
}
