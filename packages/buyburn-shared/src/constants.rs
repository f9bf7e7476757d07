/// Scaling denominator for basis points
pub const BPS_DENOM: u128 = 10_000u128;
pub const MAX_INCENTIVE_BPS: u16 = 10_000u16;

pub const DEFAULT_LIMIT: u32 = 30;
pub const MAX_LIMIT: u32 = 100;
