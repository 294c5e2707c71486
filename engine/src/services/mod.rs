//! Computation services for the stock allocation engine

pub mod allocation;
pub mod grouping;

pub use allocation::{allocate, available_stock, find_by_name};
pub use grouping::group_by_product;
