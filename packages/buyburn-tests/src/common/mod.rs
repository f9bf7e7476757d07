pub mod exec_buy_burn;
pub mod helpers;
pub mod suite;
pub mod suite_contracts;
