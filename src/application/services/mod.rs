//! Application services

pub mod toll_fee;

pub use toll_fee::{TollFeeEngine, MAX_FEE, MAX_WINDOW_MINUTES};
