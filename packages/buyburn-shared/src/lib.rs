pub mod adapters;
pub mod constants;
pub mod error;
pub mod extensions;
pub mod helpers;
pub mod msgs_buy_burn;
