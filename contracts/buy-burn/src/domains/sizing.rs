use crate::error::ContractError;
use buyburn_shared::constants::{BPS_DENOM, MAX_INCENTIVE_BPS};
use cosmwasm_std::Uint128;
use std::cmp;

/// Amount taken from the treasury by one swap and the part of it paid to the caller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SwapAmounts {
  pub amount: Uint128,
  pub incentive: Uint128,
}

impl SwapAmounts {
  pub fn compute(balance: Uint128, cap_per_swap: Uint128, incentive_bps: u16) -> SwapAmounts {
    let amount = cmp::min(balance, cap_per_swap);
    SwapAmounts {
      amount,
      incentive: amount.multiply_ratio(incentive_bps as u128, BPS_DENOM),
    }
  }

  /// Part of `amount` sent to the venue.
  pub fn tradeable(&self) -> Uint128 {
    self.amount.saturating_sub(self.incentive)
  }

  pub fn assert_swappable(&self) -> Result<(), ContractError> {
    if self.amount.is_zero() || self.tradeable().is_zero() {
      return Err(ContractError::InsufficientBalance {});
    }
    Ok(())
  }
}

pub fn assert_incentive(incentive_bps: u16) -> Result<(), ContractError> {
  if incentive_bps > MAX_INCENTIVE_BPS {
    return Err(ContractError::IncentiveTooHigh(incentive_bps));
  }
  Ok(())
}

pub fn assert_cooldown_passed(now: u64, next_available: u64) -> Result<(), ContractError> {
  if now < next_available {
    return Err(ContractError::Cooldown(next_available));
  }
  Ok(())
}

pub fn next_available(now: u64, interval: u64) -> u64 {
  now.saturating_add(interval)
}
