//! Toll request and window rule

pub mod model;

pub use model::{TollRequest, WindowRule};
