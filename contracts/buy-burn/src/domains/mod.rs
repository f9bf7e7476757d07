pub mod access;
pub mod burn;
pub mod registry;
pub mod routes;
pub mod sizing;
pub mod swap;
