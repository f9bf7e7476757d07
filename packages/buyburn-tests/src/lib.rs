#![cfg(test)]

extern crate colored;

mod common;
mod extensions;
mod mocks;
mod tests;
