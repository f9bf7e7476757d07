pub mod constants;
pub mod contract;
pub mod domains;
pub mod error;
pub mod migrate;
pub mod query;
pub mod state;

#[cfg(test)]
mod tests;
